//! Deep assignment into a `Value` by dotted/indexed paths
//!
//! A path like `"a.b[0].c"` addresses a nested location: map key `a`,
//! then map key `b`, then list index `0`, then map key `c`. Assignment
//! creates the intermediate containers the path implies, pads lists
//! with `Null` up to an out-of-range index, and overwrites whatever
//! already sits at the leaf. A bare numeric component (`"a.0"`) is a
//! map key; only a bracketed component addresses a list.

use thiserror::Error;

use crate::value::Value;

/// Errors that can occur when parsing an assignment path
#[derive(Debug, Error, PartialEq)]
pub enum PathError {
    #[error("assignment path is empty")]
    EmptyPath,

    #[error("unclosed '[' in path \"{path}\"")]
    UnclosedIndex { path: String },

    #[error("invalid list index \"{index}\" in path \"{path}\"")]
    BadIndex { path: String, index: String },
}

/// One component of an assignment path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A map key
    Key(String),
    /// A list index
    Index(usize),
}

/// Parse a dotted/indexed path into segments
pub fn parse_path(path: &str) -> Result<Vec<Segment>, PathError> {
    let mut segments = Vec::new();
    let mut key = String::new();
    let mut chars = path.chars();

    while let Some(c) = chars.next() {
        match c {
            '.' => {
                if !key.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut key)));
                }
            }
            '[' => {
                if !key.is_empty() {
                    segments.push(Segment::Key(std::mem::take(&mut key)));
                }
                let mut digits = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == ']' {
                        closed = true;
                        break;
                    }
                    digits.push(c);
                }
                if !closed {
                    return Err(PathError::UnclosedIndex {
                        path: path.to_string(),
                    });
                }
                let index = digits.trim().parse::<usize>().map_err(|_| PathError::BadIndex {
                    path: path.to_string(),
                    index: digits.clone(),
                })?;
                segments.push(Segment::Index(index));
            }
            _ => key.push(c),
        }
    }

    if !key.is_empty() {
        segments.push(Segment::Key(key));
    }
    if segments.is_empty() {
        return Err(PathError::EmptyPath);
    }

    Ok(segments)
}

/// Assign `value` at `path` inside `target`, creating intermediate
/// containers as needed
pub fn set_path(target: &mut Value, path: &str, value: Value) -> Result<(), PathError> {
    let segments = parse_path(path)?;
    let Some((last, walk)) = segments.split_last() else {
        return Err(PathError::EmptyPath);
    };

    let mut current = target;
    for segment in walk {
        current = descend(current, segment);
    }
    assign(current, last, value);

    Ok(())
}

/// Step into one segment, coercing `current` to the container kind the
/// segment requires
fn descend<'a>(current: &'a mut Value, segment: &Segment) -> &'a mut Value {
    match segment {
        Segment::Key(key) => {
            if !current.is_map() {
                *current = Value::map();
            }
            if let Value::Map(map) = current {
                return map.entry(key.clone()).or_insert(Value::Null);
            }
            unreachable!("coerced to a map above")
        }
        Segment::Index(index) => {
            if !current.is_list() {
                *current = Value::list();
            }
            if let Value::List(items) = current {
                if items.len() <= *index {
                    items.resize(*index + 1, Value::Null);
                }
                return &mut items[*index];
            }
            unreachable!("coerced to a list above")
        }
    }
}

fn assign(current: &mut Value, segment: &Segment, value: Value) {
    match segment {
        Segment::Key(key) => {
            if !current.is_map() {
                *current = Value::map();
            }
            if let Value::Map(map) = current {
                map.insert(key.clone(), value);
            }
        }
        Segment::Index(index) => {
            if !current.is_list() {
                *current = Value::list();
            }
            if let Value::List(items) = current {
                if items.len() <= *index {
                    items.resize(*index + 1, Value::Null);
                }
                items[*index] = value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_key() {
        assert_eq!(
            parse_path("name").unwrap(),
            vec![Segment::Key("name".to_string())]
        );
    }

    #[test]
    fn test_parse_dotted_and_indexed() {
        assert_eq!(
            parse_path("a.b[0].c").unwrap(),
            vec![
                Segment::Key("a".to_string()),
                Segment::Key("b".to_string()),
                Segment::Index(0),
                Segment::Key("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_bare_number_is_a_key() {
        assert_eq!(
            parse_path("a.0").unwrap(),
            vec![Segment::Key("a".to_string()), Segment::Key("0".to_string())]
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_path(""), Err(PathError::EmptyPath));
        assert_eq!(parse_path("."), Err(PathError::EmptyPath));
        assert!(matches!(
            parse_path("a[1"),
            Err(PathError::UnclosedIndex { .. })
        ));
        assert!(matches!(
            parse_path("a[x]"),
            Err(PathError::BadIndex { .. })
        ));
    }

    #[test]
    fn test_set_flat_key() {
        let mut target = Value::map();
        set_path(&mut target, "x", Value::from("1")).unwrap();
        assert_eq!(target.get("x").and_then(Value::as_text), Some("1"));
    }

    #[test]
    fn test_set_creates_intermediates() {
        let mut target = Value::map();
        set_path(&mut target, "meta.title", Value::from("t")).unwrap();
        set_path(&mut target, "meta.tags[1]", Value::from("b")).unwrap();

        let meta = target.get("meta").unwrap();
        assert_eq!(meta.get("title").and_then(Value::as_text), Some("t"));
        let tags = meta.get("tags").and_then(Value::as_list).unwrap();
        assert_eq!(tags, &[Value::Null, Value::from("b")]);
    }

    #[test]
    fn test_set_overwrites_leaf() {
        let mut target = Value::map();
        set_path(&mut target, "x", Value::from("old")).unwrap();
        set_path(&mut target, "x", Value::from("new")).unwrap();
        assert_eq!(target.get("x").and_then(Value::as_text), Some("new"));
        assert_eq!(target.len(), 1);
    }

    #[test]
    fn test_set_replaces_scalar_mid_path() {
        let mut target = Value::map();
        set_path(&mut target, "x", Value::from("scalar")).unwrap();
        set_path(&mut target, "x.y", Value::from("nested")).unwrap();
        assert_eq!(
            target.get("x").and_then(|x| x.get("y")).and_then(Value::as_text),
            Some("nested")
        );
    }

    #[test]
    fn test_set_into_top_level_list() {
        let mut target = Value::list();
        set_path(&mut target, "[2]", Value::from("c")).unwrap();
        assert_eq!(
            target.as_list().unwrap(),
            &[Value::Null, Value::Null, Value::from("c")]
        );
    }
}
