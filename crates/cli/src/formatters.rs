//! Output formatters for resolved properties.

use anyhow::Result;
use upconfig::Properties;

use crate::args::OutputFormat;

/// Render the whole property set.
pub fn format_properties(properties: &Properties, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(properties
            .iter()
            .map(|(key, property)| format!("{key}={}\n", property.value))
            .collect()),
        OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(properties)?)),
    }
}

/// Render a single value.
pub fn format_value(key: &str, value: &str, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{value}\n")),
        OutputFormat::Json => {
            let mut object = serde_json::Map::new();
            object.insert(key.to_string(), value.into());
            Ok(format!("{}\n", serde_json::to_string_pretty(&object)?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use upconfig::ConfigBuilder;

    fn sample() -> Properties {
        ConfigBuilder::new()
            .add("b", "2")
            .add("a", "${b}1")
            .build()
            .unwrap()
    }

    #[test]
    fn test_text_output_sorted() {
        let out = format_properties(&sample(), OutputFormat::Text).unwrap();
        assert_eq!(out, "a=21\nb=2\n");
    }

    #[test]
    fn test_json_output() {
        let out = format_properties(&sample(), OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["a"], "21");
        assert_eq!(parsed["b"], "2");
    }

    #[test]
    fn test_single_value() {
        assert_eq!(format_value("a", "21", OutputFormat::Text).unwrap(), "21\n");
        let out = format_value("a", "21", OutputFormat::Json).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed["a"], "21");
    }
}
