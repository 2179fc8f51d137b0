//! Decoder configuration module
//!
//! Provides the knobs the registry hands to its adapters, plus the errors
//! raised while building a configuration or a registry.

use serde::Deserialize;
use thiserror::Error;

/// Default delimiter of comma-separated collections
pub const DEFAULT_CSV_DELIMITER: char = ',';
/// Earliest year accepted by the calendar adapter
pub const DEFAULT_MIN_YEAR: i32 = 1900;
/// Latest year accepted by the calendar adapter
pub const DEFAULT_MAX_YEAR: i32 = 2099;

const ENV_CSV_DELIMITER: &str = "SOCIAL_MODEL_CSV_DELIMITER";
const ENV_MIN_YEAR: &str = "SOCIAL_MODEL_MIN_YEAR";
const ENV_MAX_YEAR: &str = "SOCIAL_MODEL_MAX_YEAR";

/// Decoder configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DecodeConfig {
    /// Delimiter used by comma-separated collection fields
    pub csv_delimiter: char,
    /// Earliest year a calendar string may carry
    pub min_year: i32,
    /// Latest year a calendar string may carry
    pub max_year: i32,
}

impl Default for DecodeConfig {
    fn default() -> Self {
        Self {
            csv_delimiter: DEFAULT_CSV_DELIMITER,
            min_year: DEFAULT_MIN_YEAR,
            max_year: DEFAULT_MAX_YEAR,
        }
    }
}

impl DecodeConfig {
    /// Create a new DecodeConfigBuilder
    pub fn builder() -> DecodeConfigBuilder {
        DecodeConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.csv_delimiter.is_whitespace() || self.csv_delimiter == '"' {
            return Err(ConfigError::InvalidValue {
                key: "csv_delimiter",
                reason: format!("{:?} cannot delimit a collection", self.csv_delimiter),
            });
        }
        if self.min_year > self.max_year {
            return Err(ConfigError::InvalidValue {
                key: "min_year",
                reason: format!(
                    "min_year {} is after max_year {}",
                    self.min_year, self.max_year
                ),
            });
        }
        Ok(())
    }

    /// Parse and validate a TOML document, e.g. `min_year = 1950`.
    ///
    /// Keys that are not present keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Build a configuration from `SOCIAL_MODEL_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build a configuration from `SOCIAL_MODEL_*` variables found by `lookup`.
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut builder = Self::builder();
        if let Some(value) = lookup(ENV_CSV_DELIMITER) {
            let mut chars = value.chars();
            match (chars.next(), chars.next()) {
                (Some(delimiter), None) => builder = builder.csv_delimiter(delimiter),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        key: "csv_delimiter",
                        reason: format!("{} must be a single character", ENV_CSV_DELIMITER),
                    })
                }
            }
        }
        if let Some(value) = lookup(ENV_MIN_YEAR) {
            builder = builder.min_year(parse_year("min_year", &value)?);
        }
        if let Some(value) = lookup(ENV_MAX_YEAR) {
            builder = builder.max_year(parse_year("max_year", &value)?);
        }
        builder.build()
    }
}

fn parse_year(key: &'static str, value: &str) -> Result<i32, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        reason: format!("'{}' is not a year", value),
    })
}

/// Builder for DecodeConfig
#[derive(Debug, Default)]
pub struct DecodeConfigBuilder {
    csv_delimiter: Option<char>,
    min_year: Option<i32>,
    max_year: Option<i32>,
}

impl DecodeConfigBuilder {
    /// Set the collection delimiter
    pub fn csv_delimiter(mut self, delimiter: char) -> Self {
        self.csv_delimiter = Some(delimiter);
        self
    }

    /// Set the earliest accepted calendar year
    pub fn min_year(mut self, year: i32) -> Self {
        self.min_year = Some(year);
        self
    }

    /// Set the latest accepted calendar year
    pub fn max_year(mut self, year: i32) -> Self {
        self.max_year = Some(year);
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<DecodeConfig, ConfigError> {
        let defaults = DecodeConfig::default();
        let config = DecodeConfig {
            csv_delimiter: self.csv_delimiter.unwrap_or(defaults.csv_delimiter),
            min_year: self.min_year.unwrap_or(defaults.min_year),
            max_year: self.max_year.unwrap_or(defaults.max_year),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration and registry construction errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },
    #[error("could not parse configuration: {0}")]
    Parse(String),
    #[error("resource {0} is registered twice")]
    DuplicateResource(&'static str),
    #[error("invalid field binding in {resource}: {reason}")]
    InvalidBinding {
        resource: &'static str,
        reason: String,
    },
    #[error("a global registry is already installed")]
    AlreadyInstalled,
}
