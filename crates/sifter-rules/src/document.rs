//! Document model: a thin wrapper over scraper's HTML tree
//!
//! The engine only needs four things from a document: parse markup,
//! select descendants by CSS selector, read text content, and read an
//! attribute. Everything else scraper offers stays behind this module.

use scraper::{ElementRef, Html, Selector};

use crate::error::Error;

/// A parsed HTML document
pub struct Document {
    html: Html,
}

impl Document {
    /// Parse a full HTML document
    pub fn parse(markup: &str) -> Document {
        Document {
            html: Html::parse_document(markup),
        }
    }

    /// Parse an HTML fragment
    ///
    /// More lenient than a full-document parse; useful for snippets
    /// without an `<html>` skeleton.
    pub fn parse_fragment(markup: &str) -> Document {
        Document {
            html: Html::parse_fragment(markup),
        }
    }

    /// Root element of the document, the starting node for evaluation
    pub fn root(&self) -> ElementRef<'_> {
        self.html.root_element()
    }
}

/// Select all descendants of `element` matching `selector`, in
/// document order
pub fn select_all<'a>(element: ElementRef<'a>, selector: &str) -> Result<Vec<ElementRef<'a>>, Error> {
    let compiled = Selector::parse(selector).map_err(|e| Error::Selector {
        selector: selector.to_string(),
        message: e.to_string(),
    })?;
    Ok(element.select(&compiled).collect())
}

/// Concatenated descendant text, trimmed of leading and trailing
/// whitespace; internal whitespace is preserved verbatim
pub fn text_of(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Attribute value, trimmed; an absent attribute normalizes to ""
pub fn attr_of(element: ElementRef<'_>, name: &str) -> String {
    element.value().attr(name).unwrap_or_default().trim().to_string()
}
