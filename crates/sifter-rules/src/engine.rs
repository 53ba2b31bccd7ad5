//! Recursive rule evaluation
//!
//! The evaluator consumes a target container, a document node, and a
//! rule (or ordered list of rules), and mutates the container in
//! place. All composition is self-recursion: over rule lists, over
//! multi-match fan-outs, and over nested `children`. The container is
//! the sole output channel; nothing is returned.
//!
//! How a rule behaves depends on the container it writes into: a map
//! gets keyed (deep-path) assignments, a list gets appends, and a
//! `grouping` rule fabricates a fresh record only when the enclosing
//! container is a list.

use log::debug;
use regex::{Regex, RegexBuilder};
use scraper::ElementRef;
use sifter_core::{set_path, Value};

use crate::document::{self, Document};
use crate::error::Error;
use crate::schema::{RegexSub, RuleSet, TransformRule};

/// Evaluation options
#[derive(Debug, Clone)]
pub struct TransformOptions {
    /// Maximum recursion depth before evaluation aborts
    pub depth_limit: usize,

    /// Parse markup input as a fragment instead of a full document
    pub fragment: bool,
}

impl Default for TransformOptions {
    fn default() -> Self {
        Self {
            depth_limit: 1000,
            fragment: false,
        }
    }
}

/// Parse `markup` once, then evaluate `rules` against the document
/// root, writing into `container`
pub fn transform_markup(
    container: &mut Value,
    markup: &str,
    rules: &RuleSet,
    opts: &TransformOptions,
) -> Result<(), Error> {
    let doc = if opts.fragment {
        Document::parse_fragment(markup)
    } else {
        Document::parse(markup)
    };
    transform(container, doc.root(), rules, opts)
}

/// Evaluate `rules` against `element`, writing into `container`
///
/// `container` must be an empty-or-partial `Value::Map` or
/// `Value::List`; it is mutated in place and never replaced.
pub fn transform(
    container: &mut Value,
    element: ElementRef<'_>,
    rules: &RuleSet,
    opts: &TransformOptions,
) -> Result<(), Error> {
    eval_rules(container, element, rules, 1, opts)
}

fn eval_rules(
    container: &mut Value,
    element: ElementRef<'_>,
    rules: &RuleSet,
    depth: usize,
    opts: &TransformOptions,
) -> Result<(), Error> {
    if depth > opts.depth_limit {
        return Err(Error::RecursionLimit {
            depth,
            limit: opts.depth_limit,
        });
    }
    match rules {
        RuleSet::One(rule) => eval_rule(container, element, rule, depth, false, opts),
        RuleSet::Many(rules) => {
            for rule in rules {
                eval_rule(container, element, rule, depth + 1, false, opts)?;
            }
            Ok(())
        }
    }
}

fn eval_rule(
    container: &mut Value,
    mut element: ElementRef<'_>,
    rule: &TransformRule,
    depth: usize,
    mut narrowed: bool,
    opts: &TransformOptions,
) -> Result<(), Error> {
    if depth > opts.depth_limit {
        return Err(Error::RecursionLimit {
            depth,
            limit: opts.depth_limit,
        });
    }
    debug!("depth {depth}: {rule:?}");

    // A grouping rule fabricates a fresh record only inside a list;
    // this happens before any selector narrowing.
    let out = match container {
        Value::List(items) if rule.grouping.is_some() => {
            items.push(Value::map());
            let last = items.len() - 1;
            &mut items[last]
        }
        other => other,
    };

    if let Some(selector) = &rule.selector {
        let matches = document::select_all(element, selector)?;

        if matches.is_empty() {
            if rule.exception_on_not_found {
                return Err(Error::NotFound {
                    selector: selector.clone(),
                });
            }
            return Ok(());
        }

        if matches.len() > 1 {
            let fanned_out = rule.without_selector();
            if out.is_list() {
                // Flatten siblings into the enclosing list.
                for node in matches {
                    eval_rule(out, node, &fanned_out, depth + 1, true, opts)?;
                }
            } else {
                let mut nested = Value::list();
                for node in matches {
                    eval_rule(&mut nested, node, &fanned_out, depth + 1, true, opts)?;
                }
                // Without a grouping or mapping key there is nowhere to
                // put the nested list; it is dropped.
                if let Some(key) = rule.grouping.as_deref().or(rule.mapping.as_deref()) {
                    set_path(out, key, nested)?;
                }
            }
            return Ok(());
        }

        element = matches[0];
        narrowed = true;
    }

    // A map needs a destination key; a list takes the extracted text
    // as-is from any leaf rule that narrowed to this node. A rule
    // without selector or key writes nothing.
    let key = rule.effective_key();
    if key.is_some() || (narrowed && out.is_list() && rule.children.is_none()) {
        let raw = if rule.wants_text() {
            document::text_of(element)
        } else {
            document::attr_of(element, rule.attribute())
        };
        let text = match &rule.regex_sub {
            Some(sub) => substitute(sub, &raw)?,
            None => raw,
        };
        if let Value::List(items) = out {
            items.push(Value::Text(text));
        } else if out.is_map() {
            if let Some(key) = key {
                set_path(out, key, Value::Text(text))?;
            }
        }
    }

    if let Some(children) = &rule.children {
        eval_rules(out, element, children, depth + 1, opts)?;
    }

    Ok(())
}

/// Compile a rewrite pattern with "." matching newlines
pub(crate) fn build_regex(pattern: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(pattern).dot_matches_new_line(true).build()
}

/// Apply a rewrite to extracted text, replacing all occurrences
fn substitute(sub: &RegexSub, text: &str) -> Result<String, Error> {
    let re = build_regex(sub.pattern())?;
    Ok(re.replace_all(text, sub.replacement()).into_owned())
}
