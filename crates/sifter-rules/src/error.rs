//! Error taxonomy for rule evaluation
//!
//! Only two conditions are fatal by design: recursion past the depth
//! limit and a strict selector that matched nothing. Absent data (an
//! empty match without the strict flag, a missing attribute, empty
//! text) is a normal, empty-producing outcome, not an error.

use thiserror::Error;

/// Errors surfaced while evaluating rules against a document
#[derive(Debug, Error)]
pub enum Error {
    #[error("recursion depth {depth} exceeded limit {limit}")]
    RecursionLimit { depth: usize, limit: usize },

    #[error("no nodes matched selector \"{selector}\"")]
    NotFound { selector: String },

    #[error("invalid selector \"{selector}\": {message}")]
    Selector { selector: String, message: String },

    #[error("invalid substitution pattern: {0}")]
    Regex(#[from] regex::Error),

    #[error(transparent)]
    Path(#[from] sifter_core::PathError),
}

/// Errors found when validating a rule at the boundary
#[derive(Debug, Error)]
pub enum RuleError {
    #[error("selector \"{selector}\" does not parse: {message}")]
    Selector { selector: String, message: String },

    #[error("regex \"{pattern}\" does not compile: {source}")]
    Pattern {
        pattern: String,
        source: regex::Error,
    },
}
