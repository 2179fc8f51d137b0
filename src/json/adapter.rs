//! Adapter Traits and Presence Policies
//!
//! Decoding is split in two layers:
//!
//! - A [`JsonAdapter`] converts one non-null JSON shape into one typed value
//!   and back.
//! - A [`FieldAdapter`] decides what happens when the field is absent or
//!   null before handing the raw value to a `JsonAdapter`. The wrappers
//!   [`Mandatory`], [`FallbackOnNull`], [`Optional`] and [`Lenient`] are the
//!   four policies a field can be bound with.
//!
//! Picking the wrapper per field is what keeps a single bad value from
//! aborting a whole resource unless that value is semantically required.

use serde_json::Value;

use crate::shared::error::{json_type_name, FieldError};

/// Converts between one raw JSON shape and one typed value.
pub trait JsonAdapter {
    type Value;

    /// Decode a value that is present and not null.
    fn from_json(&self, raw: &Value) -> Result<Self::Value, FieldError>;

    fn to_json(&self, value: &Self::Value) -> Value;
}

/// A presence policy wrapped around a [`JsonAdapter`].
pub trait FieldAdapter {
    type Value;

    /// Decode the slot of `key`; `None` means the key is absent.
    fn read(&self, key: &str, slot: Option<&Value>) -> Result<Self::Value, FieldError>;

    /// Encode a value. `None` omits the key from the output object.
    fn write(&self, value: &Self::Value) -> Option<Value>;
}

/// Absent or null is a hard failure.
#[derive(Debug, Clone, Copy)]
pub struct Mandatory<A>(pub A);

impl<A: JsonAdapter> FieldAdapter for Mandatory<A> {
    type Value = A::Value;

    fn read(&self, _key: &str, slot: Option<&Value>) -> Result<A::Value, FieldError> {
        match slot {
            None | Some(Value::Null) => Err(FieldError::missing()),
            Some(raw) => self.0.from_json(raw),
        }
    }

    fn write(&self, value: &A::Value) -> Option<Value> {
        Some(self.0.to_json(value))
    }
}

/// Absent or null yields the type's default; malformed values still fail.
#[derive(Debug, Clone, Copy)]
pub struct FallbackOnNull<A>(pub A);

impl<A> FieldAdapter for FallbackOnNull<A>
where
    A: JsonAdapter,
    A::Value: Default,
{
    type Value = A::Value;

    fn read(&self, key: &str, slot: Option<&Value>) -> Result<A::Value, FieldError> {
        match slot {
            None | Some(Value::Null) => {
                tracing::trace!(field = key, "null or absent field, using default");
                Ok(A::Value::default())
            }
            Some(raw) => self.0.from_json(raw),
        }
    }

    // Null reads back as the default anyway, so it is left out.
    fn write(&self, value: &A::Value) -> Option<Value> {
        match self.0.to_json(value) {
            Value::Null => None,
            encoded => Some(encoded),
        }
    }
}

/// Absent or null is kept as `None`, distinct from any present value.
#[derive(Debug, Clone, Copy)]
pub struct Optional<A>(pub A);

impl<A: JsonAdapter> FieldAdapter for Optional<A> {
    type Value = Option<A::Value>;

    fn read(&self, _key: &str, slot: Option<&Value>) -> Result<Option<A::Value>, FieldError> {
        match slot {
            None | Some(Value::Null) => Ok(None),
            Some(raw) => self.0.from_json(raw).map(Some),
        }
    }

    fn write(&self, value: &Option<A::Value>) -> Option<Value> {
        value.as_ref().map(|v| self.0.to_json(v))
    }
}

/// Like [`Optional`], but a value the adapter rejects is also read as `None`.
#[derive(Debug, Clone, Copy)]
pub struct Lenient<A>(pub A);

impl<A: JsonAdapter> FieldAdapter for Lenient<A> {
    type Value = Option<A::Value>;

    fn read(&self, key: &str, slot: Option<&Value>) -> Result<Option<A::Value>, FieldError> {
        let Some(raw) = slot.filter(|raw| !raw.is_null()) else {
            return Ok(None);
        };
        match self.0.from_json(raw) {
            Ok(value) => Ok(Some(value)),
            Err(error) => {
                tracing::debug!(field = key, ?error, "dropping unreadable value");
                Ok(None)
            }
        }
    }

    fn write(&self, value: &Option<A::Value>) -> Option<Value> {
        value.as_ref().map(|v| self.0.to_json(v))
    }
}

/// JSON strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringAdapter;

impl JsonAdapter for StringAdapter {
    type Value = String;

    fn from_json(&self, raw: &Value) -> Result<String, FieldError> {
        raw.as_str()
            .map(str::to_string)
            .ok_or_else(|| FieldError::malformed(raw, expected("a string", raw)))
    }

    fn to_json(&self, value: &String) -> Value {
        Value::String(value.clone())
    }
}

/// JSON booleans.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolAdapter;

impl JsonAdapter for BoolAdapter {
    type Value = bool;

    fn from_json(&self, raw: &Value) -> Result<bool, FieldError> {
        raw.as_bool()
            .ok_or_else(|| FieldError::malformed(raw, expected("a boolean", raw)))
    }

    fn to_json(&self, value: &bool) -> Value {
        Value::Bool(*value)
    }
}

/// Non-negative integer counters. Negative counts are rejected.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountAdapter;

impl JsonAdapter for CountAdapter {
    type Value = u32;

    fn from_json(&self, raw: &Value) -> Result<u32, FieldError> {
        if let Some(count) = raw.as_u64() {
            return u32::try_from(count)
                .map_err(|_| FieldError::malformed(raw, "count does not fit in 32 bits"));
        }
        if raw.as_i64().is_some_and(|count| count < 0) {
            return Err(FieldError::malformed(raw, "count is negative"));
        }
        Err(FieldError::malformed(raw, expected("a non-negative integer", raw)))
    }

    fn to_json(&self, value: &u32) -> Value {
        Value::from(*value)
    }
}

/// JSON arrays whose elements all decode with the inner adapter.
#[derive(Debug, Clone, Copy)]
pub struct ListAdapter<A>(pub A);

impl<A: JsonAdapter> JsonAdapter for ListAdapter<A> {
    type Value = Vec<A::Value>;

    fn from_json(&self, raw: &Value) -> Result<Vec<A::Value>, FieldError> {
        let items = raw
            .as_array()
            .ok_or_else(|| FieldError::malformed(raw, expected("an array", raw)))?;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                if item.is_null() {
                    return Err(FieldError::missing().at(&format!("[{}]", index)));
                }
                self.0
                    .from_json(item)
                    .map_err(|e| e.at(&format!("[{}]", index)))
            })
            .collect()
    }

    fn to_json(&self, value: &Vec<A::Value>) -> Value {
        Value::Array(value.iter().map(|item| self.0.to_json(item)).collect())
    }
}

pub(crate) fn expected(what: &str, raw: &Value) -> String {
    format!("expected {}, found {}", what, json_type_name(raw))
}
