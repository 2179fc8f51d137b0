//! Comma-separated collections
//!
//! Profile fields such as `wants` and `haves` arrive as one string,
//! `"rust, sailing,cooking"`, rather than a JSON array.

use serde_json::Value;

use super::adapter::{expected, JsonAdapter};
use crate::shared::config::DEFAULT_CSV_DELIMITER;
use crate::shared::error::FieldError;

/// Splits a delimited string into trimmed, non-empty elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CsvCollectionAdapter {
    delimiter: char,
}

impl Default for CsvCollectionAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_CSV_DELIMITER)
    }
}

impl CsvCollectionAdapter {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    pub fn split(&self, text: &str) -> Vec<String> {
        text.split(self.delimiter)
            .map(str::trim)
            .filter(|element| !element.is_empty())
            .map(str::to_string)
            .collect()
    }
}

impl JsonAdapter for CsvCollectionAdapter {
    type Value = Vec<String>;

    fn from_json(&self, raw: &Value) -> Result<Vec<String>, FieldError> {
        raw.as_str()
            .map(|text| self.split(text))
            .ok_or_else(|| FieldError::malformed(raw, expected("a delimited string", raw)))
    }

    fn to_json(&self, value: &Vec<String>) -> Value {
        let separator = format!("{} ", self.delimiter);
        Value::String(value.join(&separator))
    }
}
