//! Forward-compatible enumerations
//!
//! The server may add enum values at any time. A [`SafeEnum`] maps every wire
//! string it does not know to its `UNKNOWN` variant instead of failing.
//!
//! Collections of enum values follow the same rule. [`SafeEnumListAdapter`]
//! skips unknown list entries and [`SafeEnumMapAdapter`] skips entries whose
//! key is unknown; an `UNKNOWN` value has no wire form to write back.

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde_json::{Map, Value};

use super::adapter::{expected, FieldAdapter, JsonAdapter};
use crate::shared::error::FieldError;

/// A closed enumeration with a designated "unknown/other" variant.
pub trait SafeEnum: Copy + Eq + 'static {
    /// Variant used for any value that matches no wire name
    const UNKNOWN: Self;

    /// Every variant except `UNKNOWN`
    const KNOWN: &'static [Self];

    /// Wire string of a known variant; `None` for `UNKNOWN`
    fn wire_name(self) -> Option<&'static str>;

    /// Look up a wire string, falling back to `UNKNOWN`
    fn from_wire(name: &str) -> Self {
        Self::KNOWN
            .iter()
            .copied()
            .find(|variant| variant.wire_name() == Some(name))
            .unwrap_or(Self::UNKNOWN)
    }

    fn is_unknown(self) -> bool {
        self == Self::UNKNOWN
    }
}

/// Decodes strings into a [`SafeEnum`]. Never fails; unknown encodes as null.
pub struct SafeEnumAdapter<E>(PhantomData<fn() -> E>);

impl<E> SafeEnumAdapter<E> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for SafeEnumAdapter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for SafeEnumAdapter<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for SafeEnumAdapter<E> {}

impl<E> std::fmt::Debug for SafeEnumAdapter<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SafeEnumAdapter({})", std::any::type_name::<E>())
    }
}

impl<E: SafeEnum> JsonAdapter for SafeEnumAdapter<E> {
    type Value = E;

    fn from_json(&self, raw: &Value) -> Result<E, FieldError> {
        let variant = raw.as_str().map_or(E::UNKNOWN, E::from_wire);
        if variant.is_unknown() {
            tracing::debug!(
                %raw,
                target_enum = std::any::type_name::<E>(),
                "unknown enum value, using fallback variant"
            );
        }
        Ok(variant)
    }

    fn to_json(&self, value: &E) -> Value {
        value
            .wire_name()
            .map_or(Value::Null, |name| Value::String(name.to_string()))
    }
}

/// Arrays of enum strings, e.g. `["SEARCH", "NOADVERTISING"]`.
///
/// Unknown and non-string entries are skipped; a non-array is malformed.
pub struct SafeEnumListAdapter<E>(PhantomData<fn() -> E>);

impl<E> SafeEnumListAdapter<E> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for SafeEnumListAdapter<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for SafeEnumListAdapter<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for SafeEnumListAdapter<E> {}

impl<E: SafeEnum> JsonAdapter for SafeEnumListAdapter<E> {
    type Value = Vec<E>;

    fn from_json(&self, raw: &Value) -> Result<Vec<E>, FieldError> {
        let items = raw
            .as_array()
            .ok_or_else(|| FieldError::malformed(raw, expected("an array", raw)))?;
        let element = SafeEnumAdapter::<E>::new();
        let mut variants = Vec::with_capacity(items.len());
        for item in items {
            let variant = element.from_json(item)?;
            if !variant.is_unknown() {
                variants.push(variant);
            }
        }
        Ok(variants)
    }

    fn to_json(&self, value: &Vec<E>) -> Value {
        Value::Array(
            value
                .iter()
                .filter_map(|variant| variant.wire_name())
                .map(|name| Value::String(name.to_string()))
                .collect(),
        )
    }
}

/// Objects keyed by enum wire names, e.g. `{"de": "NATIVE", "en": "GOOD"}`.
///
/// Entries with an unknown key are skipped. Values go through the wrapped
/// presence policy, so a null value is whatever that policy makes of it.
pub struct SafeEnumMapAdapter<K, V> {
    values: V,
    _key: PhantomData<fn() -> K>,
}

impl<K, V> SafeEnumMapAdapter<K, V> {
    pub fn new(values: V) -> Self {
        Self {
            values,
            _key: PhantomData,
        }
    }
}

impl<K, V: Clone> Clone for SafeEnumMapAdapter<K, V> {
    fn clone(&self) -> Self {
        Self::new(self.values.clone())
    }
}

impl<K, V: Copy> Copy for SafeEnumMapAdapter<K, V> {}

impl<K, V> JsonAdapter for SafeEnumMapAdapter<K, V>
where
    K: SafeEnum + Ord,
    V: FieldAdapter,
{
    type Value = BTreeMap<K, V::Value>;

    fn from_json(&self, raw: &Value) -> Result<Self::Value, FieldError> {
        let object = raw
            .as_object()
            .ok_or_else(|| FieldError::malformed(raw, expected("an object", raw)))?;
        let mut entries = BTreeMap::new();
        for (name, value) in object {
            let key = K::from_wire(name);
            if key.is_unknown() {
                tracing::debug!(
                    key = %name,
                    target_enum = std::any::type_name::<K>(),
                    "skipping entry with unknown key"
                );
                continue;
            }
            let value = self.values.read(name, Some(value)).map_err(|e| e.at(name))?;
            entries.insert(key, value);
        }
        Ok(entries)
    }

    fn to_json(&self, value: &Self::Value) -> Value {
        let mut object = Map::new();
        for (key, entry) in value {
            let Some(name) = key.wire_name() else {
                continue;
            };
            object.insert(name.to_string(), self.values.write(entry).unwrap_or(Value::Null));
        }
        Value::Object(object)
    }
}
