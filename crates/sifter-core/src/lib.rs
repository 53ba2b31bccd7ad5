//! sifter-core: Core value model for extraction results
//!
//! This crate provides:
//! - `Value`: An insertion-ordered tree of maps, lists, and text
//! - `set_path()`: Deep assignment into a `Value` by a dotted/indexed path
//! - `parse_path()`: Path string parsing into segments

pub mod path;
pub mod value;

pub use path::{parse_path, set_path, PathError, Segment};
pub use value::Value;
