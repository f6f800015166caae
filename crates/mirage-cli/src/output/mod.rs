//! Output formatters for scan reports

pub mod json;
pub mod pretty;
pub mod text;

use mirage_core::config::FormatValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Pretty,
    Text,
    Json,
}

impl Format {
    pub fn parse(value: &str) -> anyhow::Result<Self> {
        match value {
            "pretty" => Ok(Format::Pretty),
            "text" => Ok(Format::Text),
            "json" => Ok(Format::Json),
            other => anyhow::bail!(
                "Invalid format '{}'. Valid values: pretty, text, json",
                other
            ),
        }
    }
}

impl From<FormatValue> for Format {
    fn from(value: FormatValue) -> Self {
        match value {
            FormatValue::Pretty => Format::Pretty,
            FormatValue::Text => Format::Text,
            FormatValue::Json => Format::Json,
        }
    }
}
