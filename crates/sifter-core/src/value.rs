//! Output value model for extraction results
//!
//! A `Value` is the tree an extraction run writes into: text leaves,
//! ordered lists, and insertion-ordered maps. The untagged serde
//! representation means results print as plain JSON or YAML.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A node in the extracted output tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Placeholder produced when a list is padded out to an index
    Null,

    /// An extracted string
    Text(String),

    /// An ordered sequence of values
    List(Vec<Value>),

    /// An insertion-ordered mapping (keys unique)
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Create an empty map
    pub fn map() -> Value {
        Value::Map(IndexMap::new())
    }

    /// Create an empty list
    pub fn list() -> Value {
        Value::List(Vec::new())
    }

    /// Check if this is a map
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    /// Check if this is a list
    pub fn is_list(&self) -> bool {
        matches!(self, Value::List(_))
    }

    /// Get the text content if this is a text leaf
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the underlying map if this is a map
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Get the underlying list if this is a list
    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Get the underlying list mutably if this is a list
    pub fn as_list_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Look up a key if this is a map
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Map(map) => map.get(key),
            _ => None,
        }
    }

    /// Number of entries in a map or list, 0 otherwise
    pub fn len(&self) -> usize {
        match self {
            Value::Map(map) => map.len(),
            Value::List(items) => items.len(),
            _ => 0,
        }
    }

    /// Check whether a map or list is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Text(s.to_string())
    }
}
