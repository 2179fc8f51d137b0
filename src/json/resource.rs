//! Resource Binding
//!
//! Every model declares its wire contract once, as a table of [`Field`]s that
//! binds each Rust field name to the JSON key the API uses. A single pair of
//! routines, [`FieldReader`] and [`FieldWriter`], consults that table for every
//! resource, so key strings never appear in ad hoc parsing code.
//!
//! ```text
//! raw object ──► FieldReader::field("total_msg_count", FallbackOnNull(CountAdapter))
//!                  │ table lookup: total_msg_count → "message_count"
//!                  ▼
//!               adapter.read("message_count", object.get("message_count"))
//! ```

use std::marker::PhantomData;

use serde_json::{Map, Value};

use super::adapter::{expected, FieldAdapter, JsonAdapter};
use super::registry::{Adapters, Registry};
use crate::shared::error::{DecodeError, FieldError};

/// Binding of one model field to its wire key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    /// Rust-side field name
    pub name: &'static str,
    /// JSON object key
    pub key: &'static str,
}

impl Field {
    pub const fn new(name: &'static str, key: &'static str) -> Self {
        Self { name, key }
    }
}

/// An API resource that can be decoded from and encoded to a JSON object.
pub trait Resource: Sized {
    /// Resource name used in errors and for registry lookup
    const NAME: &'static str;

    /// The field-to-key binding table
    const FIELDS: &'static [Field];

    /// Assemble the resource from an object, one field at a time.
    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError>;

    /// Emit every field through the writer.
    fn write(&self, writer: &mut FieldWriter<'_>);

    /// Decode a payload with the global registry.
    fn from_json(raw: &[u8]) -> Result<Self, DecodeError> {
        Registry::global().decode(raw)
    }

    /// Encode with the global registry.
    fn to_json(&self) -> Value {
        Registry::global().encode(self)
    }
}

// A field name missing from the table is a bug in the model, not bad input.
fn binding_key(resource: &'static str, fields: &'static [Field], name: &str) -> &'static str {
    fields
        .iter()
        .find(|field| field.name == name)
        .map(|field| field.key)
        .unwrap_or_else(|| panic!("{} has no binding for field '{}'", resource, name))
}

/// Reads fields of one JSON object according to a resource's binding table.
pub struct FieldReader<'a> {
    resource: &'static str,
    fields: &'static [Field],
    object: &'a Map<String, Value>,
    adapters: &'a Adapters,
}

impl<'a> FieldReader<'a> {
    pub fn new<R: Resource>(object: &'a Map<String, Value>, adapters: &'a Adapters) -> Self {
        Self {
            resource: R::NAME,
            fields: R::FIELDS,
            object,
            adapters,
        }
    }

    /// The registry's configured adapters
    pub fn adapters(&self) -> &'a Adapters {
        self.adapters
    }

    /// Decode field `name` with the given presence policy and adapter.
    pub fn field<F: FieldAdapter>(&self, name: &'static str, adapter: F) -> Result<F::Value, FieldError> {
        let key = binding_key(self.resource, self.fields, name);
        adapter
            .read(key, self.object.get(key))
            .map_err(|error| error.at(key))
    }
}

/// Builds a JSON object according to a resource's binding table.
pub struct FieldWriter<'a> {
    resource: &'static str,
    fields: &'static [Field],
    object: Map<String, Value>,
    adapters: &'a Adapters,
}

impl<'a> FieldWriter<'a> {
    pub fn new<R: Resource>(adapters: &'a Adapters) -> Self {
        Self {
            resource: R::NAME,
            fields: R::FIELDS,
            object: Map::new(),
            adapters,
        }
    }

    pub fn adapters(&self) -> &'a Adapters {
        self.adapters
    }

    /// Encode field `name`; policies that yield nothing leave the key out.
    pub fn field<F: FieldAdapter>(&mut self, name: &'static str, adapter: F, value: &F::Value) {
        let key = binding_key(self.resource, self.fields, name);
        if let Some(encoded) = adapter.write(value) {
            self.object.insert(key.to_string(), encoded);
        }
    }

    pub fn finish(self) -> Map<String, Value> {
        self.object
    }
}

/// Nested resource objects, e.g. the `sender` of a message.
pub struct ResourceAdapter<'a, R> {
    adapters: &'a Adapters,
    _resource: PhantomData<fn() -> R>,
}

impl<'a, R> ResourceAdapter<'a, R> {
    pub fn new(adapters: &'a Adapters) -> Self {
        Self {
            adapters,
            _resource: PhantomData,
        }
    }
}

impl<R> Clone for ResourceAdapter<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ResourceAdapter<'_, R> {}

impl<R: Resource> JsonAdapter for ResourceAdapter<'_, R> {
    type Value = R;

    fn from_json(&self, raw: &Value) -> Result<R, FieldError> {
        let object = raw
            .as_object()
            .ok_or_else(|| FieldError::malformed(raw, expected("an object", raw)))?;
        R::read(&FieldReader::new::<R>(object, self.adapters))
    }

    fn to_json(&self, value: &R) -> Value {
        let mut writer = FieldWriter::new::<R>(self.adapters);
        value.write(&mut writer);
        Value::Object(writer.finish())
    }
}

/// Implements `Serialize` and `Deserialize` for a resource by routing through
/// the global registry, so models can live inside serde-based fixtures and
/// caches with the exact wire contract.
macro_rules! resource_serde {
    ($resource:ty) => {
        impl serde::Serialize for $resource {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let value = $crate::json::Registry::global().encode(self);
                serde::Serialize::serialize(&value, serializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $resource {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = <serde_json::Value as serde::Deserialize>::deserialize(deserializer)?;
                $crate::json::Registry::global()
                    .decode_value(&raw)
                    .map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use resource_serde;
