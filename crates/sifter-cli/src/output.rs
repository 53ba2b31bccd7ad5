//! Output formatting for sifter
//!
//! Serializes the extracted container as JSON (compact or pretty) or
//! YAML.

use anyhow::Result;
use sifter_core::Value;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Json,
    Yaml,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<OutputFormat> {
        match s.to_lowercase().as_str() {
            "json" => Some(OutputFormat::Json),
            "yaml" | "yml" => Some(OutputFormat::Yaml),
            _ => None,
        }
    }
}

/// Render the extracted container in the chosen format
pub fn render(value: &Value, format: OutputFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!(OutputFormat::from_str("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::from_str("YAML"), Some(OutputFormat::Yaml));
        assert_eq!(OutputFormat::from_str("csv"), None);
    }

    #[test]
    fn test_render_json() {
        let value: Value = serde_json::from_str(r#"{"a":"1"}"#).unwrap();
        assert_eq!(
            render(&value, OutputFormat::Json, false).unwrap(),
            r#"{"a":"1"}"#
        );
    }

    #[test]
    fn test_render_yaml() {
        let value: Value = serde_json::from_str(r#"{"a":"1"}"#).unwrap();
        assert_eq!(render(&value, OutputFormat::Yaml, false).unwrap(), "a: '1'\n");
    }
}
