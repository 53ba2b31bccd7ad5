//! sifter-rules: declarative HTML extraction
//!
//! Turns semi-structured HTML into nested maps and lists by evaluating
//! a tree of extraction rules, with no hand-written traversal code per
//! document shape. Rules narrow the document with CSS selectors,
//! extract text or attributes, optionally rewrite the result with a
//! regex, and compose recursively through `children`.
//!
//! # Example YAML rules
//!
//! ```yaml
//! - selector: "ul.results li"
//!   grouping: items
//!   children:
//!     - selector: a
//!       mapping: url
//!       attribute_name: href
//!     - selector: .price
//!       mapping: price
//!       regex_sub: ["[^0-9]", ""]
//! ```
//!
//! # Usage
//!
//! ```no_run
//! use sifter_rules::{load_rules_from_str, transform_markup, TransformOptions, Value};
//!
//! let rules = load_rules_from_str("selector: h1\nmapping: title\n")?;
//! let mut data = Value::map();
//! transform_markup(&mut data, "<h1>Hello</h1>", &rules, &TransformOptions::default())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod document;
pub mod engine;
pub mod error;
pub mod loader;
pub mod schema;

pub use document::Document;
pub use engine::{transform, transform_markup, TransformOptions};
pub use error::{Error, RuleError};
pub use loader::{load_rules_from_file, load_rules_from_str, LoadError};
pub use schema::{RegexSub, RuleSet, TransformRule, TEXT_ATTRIBUTE};

pub use sifter_core::Value;
