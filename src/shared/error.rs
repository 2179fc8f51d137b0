//! Decode Error Types
//!
//! This module defines the errors raised while turning raw API payloads into
//! typed resources.
//!
//! # Error Categories
//!
//! - `Syntax` - the payload is not valid JSON
//! - `UnexpectedShape` - the payload is valid JSON but not a resource object
//! - `MissingMandatoryField` - a required field is absent and has no fallback
//! - `MalformedField` - a field could not be parsed and has no safe fallback
//! - `Unregistered` - the resource type was never registered with the registry
//!
//! Soft recoveries (null for a non-optional field, unknown enum values,
//! unparsable dates) never surface here. They are absorbed by the adapters.
//!
//! # Usage
//!
//! ```rust
//! use social_api_model::shared::error::DecodeError;
//!
//! let error = DecodeError::missing("Conversation", "id");
//! assert!(error.to_string().contains("'id'"));
//! ```
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread boundaries.
use serde_json::Value;
use thiserror::Error;

/// Errors returned to the caller of a decode operation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DecodeError {
    /// The payload could not be parsed as JSON at all
    #[error("Syntax error: {message}")]
    Syntax {
        /// Human-readable error message
        message: String,
    },

    /// The top-level payload has the wrong JSON type
    #[error("Expected {expected} for {resource}, found {found}")]
    UnexpectedShape {
        /// The resource being decoded
        resource: &'static str,
        /// JSON type that was required
        expected: &'static str,
        /// JSON type that was found instead
        found: &'static str,
    },

    /// A mandatory field is absent (or null) and has no fallback adapter
    #[error("Missing mandatory field '{field}' in {resource}")]
    MissingMandatoryField {
        /// The resource being decoded
        resource: &'static str,
        /// Path of the offending field, e.g. `participants[1].id`
        field: String,
    },

    /// A field holds a value that cannot be decoded and has no safe fallback
    #[error("Malformed field '{field}' in {resource}: {reason} (raw value: {raw})")]
    MalformedField {
        /// The resource being decoded
        resource: &'static str,
        /// Path of the offending field
        field: String,
        /// The raw JSON value as received
        raw: Value,
        /// Why the value was rejected
        reason: String,
    },

    /// The resource type is not known to the registry
    #[error("Resource '{resource}' is not registered")]
    Unregistered {
        /// Name of the unknown resource
        resource: String,
    },
}

impl DecodeError {
    /// Create a new syntax error
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax {
            message: message.into(),
        }
    }

    /// Create a new missing-field error
    pub fn missing(resource: &'static str, field: impl Into<String>) -> Self {
        Self::MissingMandatoryField {
            resource,
            field: field.into(),
        }
    }

    /// Create a new malformed-field error
    pub fn malformed(
        resource: &'static str,
        field: impl Into<String>,
        raw: Value,
        reason: impl Into<String>,
    ) -> Self {
        Self::MalformedField {
            resource,
            field: field.into(),
            raw,
            reason: reason.into(),
        }
    }

    /// Path of the field that caused the failure, if the error concerns a field
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::MissingMandatoryField { field, .. } | Self::MalformedField { field, .. } => {
                Some(field)
            }
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::syntax(format!("JSON error: {}", err))
    }
}

/// A hard failure raised while reading a single field.
///
/// `path` is relative to the object being read when the error is raised and
/// grows as the error bubbles up through nested resources and lists. The
/// registry turns it into a [`DecodeError`] once the top-level resource is
/// known.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldError {
    /// The field is absent or null and the binding has no fallback
    Missing {
        /// Relative path of the field
        path: String,
    },
    /// The field value cannot be decoded
    Malformed {
        /// Relative path of the field
        path: String,
        /// Raw value as received
        raw: Value,
        /// Why the value was rejected
        reason: String,
    },
}

impl FieldError {
    /// A missing value at the current position
    pub fn missing() -> Self {
        Self::Missing {
            path: String::new(),
        }
    }

    /// A malformed value at the current position
    pub fn malformed(raw: &Value, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: String::new(),
            raw: raw.clone(),
            reason: reason.into(),
        }
    }

    /// Prefix the error path with an enclosing key (`sender`) or index (`[2]`).
    pub fn at(self, segment: &str) -> Self {
        match self {
            Self::Missing { path } => Self::Missing {
                path: join_path(segment, &path),
            },
            Self::Malformed { path, raw, reason } => Self::Malformed {
                path: join_path(segment, &path),
                raw,
                reason,
            },
        }
    }

    /// Convert into a caller-facing error for the given top-level resource
    pub fn into_decode_error(self, resource: &'static str) -> DecodeError {
        match self {
            Self::Missing { path } => DecodeError::missing(resource, path),
            Self::Malformed { path, raw, reason } => {
                DecodeError::malformed(resource, path, raw, reason)
            }
        }
    }
}

fn join_path(segment: &str, path: &str) -> String {
    if path.is_empty() {
        segment.to_string()
    } else if path.starts_with('[') {
        format!("{}{}", segment, path)
    } else {
        format!("{}.{}", segment, path)
    }
}

/// Name of a JSON value's type, used in error messages
pub(crate) fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
