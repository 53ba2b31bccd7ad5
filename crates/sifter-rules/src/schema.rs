//! Extraction rule schema
//!
//! Defines the structure of declarative extraction rules using serde
//! for deserialization from YAML or JSON. Every field is independently
//! omittable; a rule with no fields at all is a legal no-op.

use scraper::Selector;
use serde::{Deserialize, Serialize};

use crate::engine::build_regex;
use crate::error::RuleError;

/// Sentinel attribute name that selects text content instead of a
/// literal attribute
pub const TEXT_ATTRIBUTE: &str = "text";

/// A single declarative extraction rule
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TransformRule {
    /// CSS selector narrowing the current node to its descendants
    #[serde(default)]
    pub selector: Option<String>,

    /// Destination key for the extracted value; may be a dotted or
    /// indexed path (e.g., "meta.title", "links[0]")
    #[serde(default)]
    pub mapping: Option<String>,

    /// Attribute to extract; "text" (the default) means the node's
    /// trimmed text content
    #[serde(default)]
    pub attribute_name: Option<String>,

    /// Regex rewrite applied to the extracted text
    #[serde(default)]
    pub regex_sub: Option<RegexSub>,

    /// Rules evaluated against the narrowed node, writing into the
    /// same container as this rule
    #[serde(default)]
    pub children: Option<RuleSet>,

    /// Inside a sequence container, fabricate a new record and write
    /// into it; inside a map, substitutes for `mapping` when no
    /// `mapping` is given
    #[serde(default)]
    pub grouping: Option<String>,

    /// Treat a selector that matches nothing as a hard failure
    #[serde(default)]
    pub exception_on_not_found: bool,
}

/// A single rule or an ordered sequence of rules
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RuleSet {
    One(Box<TransformRule>),
    Many(Vec<TransformRule>),
}

/// A regex rewrite: pattern plus replacement
///
/// Deserializes from either a two-element sequence `["[^0-9]", ""]` or
/// a `{pattern, replacement}` map. Replacements use `$1`-style capture
/// group references.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RegexSub {
    Pair(String, String),
    Named { pattern: String, replacement: String },
}

impl RegexSub {
    pub fn pattern(&self) -> &str {
        match self {
            RegexSub::Pair(pattern, _) => pattern,
            RegexSub::Named { pattern, .. } => pattern,
        }
    }

    pub fn replacement(&self) -> &str {
        match self {
            RegexSub::Pair(_, replacement) => replacement,
            RegexSub::Named { replacement, .. } => replacement,
        }
    }
}

impl TransformRule {
    /// Effective attribute name, with the "text" default applied
    pub fn attribute(&self) -> &str {
        self.attribute_name.as_deref().unwrap_or(TEXT_ATTRIBUTE)
    }

    /// Check whether this rule extracts text content rather than a
    /// literal attribute
    pub fn wants_text(&self) -> bool {
        self.attribute() == TEXT_ATTRIBUTE
    }

    /// Destination key for extraction: `mapping`, or `grouping` as a
    /// fallback only when there are no children
    pub fn effective_key(&self) -> Option<&str> {
        self.mapping.as_deref().or_else(|| {
            if self.children.is_none() {
                self.grouping.as_deref()
            } else {
                None
            }
        })
    }

    /// Clone of this rule with the selector cleared, used when a
    /// multi-match fans out over the matched nodes
    pub fn without_selector(&self) -> TransformRule {
        TransformRule {
            selector: None,
            ..self.clone()
        }
    }

    /// Validate selector and regex syntax, recursing into children
    ///
    /// Called once at the boundary so evaluation itself never re-checks
    /// rule shape.
    pub fn validate(&self) -> Result<(), RuleError> {
        if let Some(selector) = &self.selector {
            Selector::parse(selector).map_err(|e| RuleError::Selector {
                selector: selector.clone(),
                message: e.to_string(),
            })?;
        }
        if let Some(sub) = &self.regex_sub {
            build_regex(sub.pattern()).map_err(|source| RuleError::Pattern {
                pattern: sub.pattern().to_string(),
                source,
            })?;
        }
        if let Some(children) = &self.children {
            children.validate()?;
        }
        Ok(())
    }
}

impl RuleSet {
    /// Validate every rule in the set
    pub fn validate(&self) -> Result<(), RuleError> {
        match self {
            RuleSet::One(rule) => rule.validate(),
            RuleSet::Many(rules) => rules.iter().try_for_each(TransformRule::validate),
        }
    }
}

impl From<TransformRule> for RuleSet {
    fn from(rule: TransformRule) -> RuleSet {
        RuleSet::One(Box::new(rule))
    }
}

impl From<Vec<TransformRule>> for RuleSet {
    fn from(rules: Vec<TransformRule>) -> RuleSet {
        RuleSet::Many(rules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_single_rule() {
        let yaml = r#"
selector: "div.price"
mapping: price
regex_sub: ["[^0-9]", ""]
"#;
        let rule: TransformRule = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(rule.selector.as_deref(), Some("div.price"));
        assert_eq!(rule.mapping.as_deref(), Some("price"));
        assert_eq!(rule.regex_sub.as_ref().unwrap().pattern(), "[^0-9]");
        assert!(rule.wants_text());
        assert!(!rule.exception_on_not_found);
    }

    #[test]
    fn test_parse_rule_list_with_children() {
        let yaml = r#"
- selector: "ul li"
  grouping: items
  children:
    - selector: a
      mapping: url
      attribute_name: href
- selector: h1
  mapping: title
  exception_on_not_found: true
"#;
        let rules: RuleSet = serde_yaml::from_str(yaml).unwrap();
        let RuleSet::Many(rules) = rules else {
            panic!("expected a rule list");
        };
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].grouping.as_deref(), Some("items"));
        assert!(rules[0].children.is_some());
        assert!(rules[1].exception_on_not_found);
    }

    #[test]
    fn test_regex_sub_named_form() {
        let yaml = r#"
regex_sub:
  pattern: "(.*), (.*)"
  replacement: "$2"
"#;
        let rule: TransformRule = serde_yaml::from_str(yaml).unwrap();
        let sub = rule.regex_sub.unwrap();
        assert_eq!(sub.pattern(), "(.*), (.*)");
        assert_eq!(sub.replacement(), "$2");
    }

    #[test]
    fn test_effective_key() {
        let rule = TransformRule {
            mapping: Some("m".to_string()),
            grouping: Some("g".to_string()),
            ..Default::default()
        };
        assert_eq!(rule.effective_key(), Some("m"));

        let rule = TransformRule {
            grouping: Some("g".to_string()),
            ..Default::default()
        };
        assert_eq!(rule.effective_key(), Some("g"));

        // grouping does not stand in for mapping when children exist
        let rule = TransformRule {
            grouping: Some("g".to_string()),
            children: Some(RuleSet::Many(vec![])),
            ..Default::default()
        };
        assert_eq!(rule.effective_key(), None);
    }

    #[test]
    fn test_validate_rejects_bad_selector() {
        let rule = TransformRule {
            selector: Some("div[".to_string()),
            ..Default::default()
        };
        assert!(matches!(rule.validate(), Err(RuleError::Selector { .. })));
    }

    #[test]
    fn test_validate_rejects_bad_regex() {
        let rule = TransformRule {
            regex_sub: Some(RegexSub::Pair("[unclosed".to_string(), String::new())),
            ..Default::default()
        };
        assert!(matches!(rule.validate(), Err(RuleError::Pattern { .. })));
    }

    #[test]
    fn test_validate_recurses_into_children() {
        let yaml = r#"
selector: div
children:
  selector: "p["
  mapping: broken
"#;
        let rule: TransformRule = serde_yaml::from_str(yaml).unwrap();
        assert!(rule.validate().is_err());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "selector: div\nmispelled_mapping: x\n";
        assert!(serde_yaml::from_str::<TransformRule>(yaml).is_err());
    }
}
