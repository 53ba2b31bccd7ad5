//! Load extraction rules from YAML
//!
//! Rules arrive either programmatically or as a YAML document holding
//! one rule or an ordered list of rules. Loading validates selector
//! and regex syntax up front, so the engine only ever sees rules that
//! parse.

use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::error::RuleError;
use crate::schema::RuleSet;

/// Errors that can occur when loading rules
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid rule: {0}")]
    Invalid(#[from] RuleError),
}

/// Load a rule or rule list from a YAML string
pub fn load_rules_from_str(yaml: &str) -> Result<RuleSet, LoadError> {
    let rules: RuleSet = serde_yaml::from_str(yaml)?;
    rules.validate()?;
    Ok(rules)
}

/// Load a rule or rule list from a YAML file
pub fn load_rules_from_file(path: &Path) -> Result<RuleSet, LoadError> {
    let content = fs::read_to_string(path)?;
    load_rules_from_str(&content)
}
