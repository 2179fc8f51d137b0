//! Phone, time zone and geo code adapters

use serde_json::{json, Map, Value};

use super::adapter::{expected, JsonAdapter};
use crate::shared::error::FieldError;
use crate::shared::profile::{GeoCode, Phone, TimeZone};

/// `"country|area|number"` strings.
///
/// Trailing empty pieces are dropped before counting, so `"49|40|"` has two
/// pieces. A string with any other number than three yields an empty phone
/// instead of failing, since the server did send a value.
#[derive(Debug, Clone, Copy, Default)]
pub struct PhoneAdapter;

impl JsonAdapter for PhoneAdapter {
    type Value = Phone;

    fn from_json(&self, raw: &Value) -> Result<Phone, FieldError> {
        let text = raw
            .as_str()
            .ok_or_else(|| FieldError::malformed(raw, expected("a phone string", raw)))?;
        let mut pieces: Vec<&str> = text.split('|').collect();
        while pieces.last().is_some_and(|piece| piece.is_empty()) {
            pieces.pop();
        }
        match pieces.as_slice() {
            [country, area, number] => Ok(Phone::new(*country, *area, *number)),
            _ => {
                tracing::debug!(phone = text, "unreadable phone string, using empty phone");
                Ok(Phone::default())
            }
        }
    }

    fn to_json(&self, value: &Phone) -> Value {
        Value::String(value.to_string())
    }
}

fn non_null<'v>(object: &'v Map<String, Value>, key: &str) -> Option<&'v Value> {
    object.get(key).filter(|value| !value.is_null())
}

/// `{"name": "Europe/Berlin", "utc_offset": 2.0}` objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeZoneAdapter;

impl JsonAdapter for TimeZoneAdapter {
    type Value = TimeZone;

    fn from_json(&self, raw: &Value) -> Result<TimeZone, FieldError> {
        let object = raw
            .as_object()
            .ok_or_else(|| FieldError::malformed(raw, expected("an object", raw)))?;
        let name = non_null(object, "name").and_then(Value::as_str);
        let offset = non_null(object, "utc_offset").and_then(Value::as_f64);
        match (name, offset) {
            (Some(name), Some(offset)) => Ok(TimeZone::new(name, offset)),
            _ => Err(FieldError::malformed(raw, "time zone needs 'name' and 'utc_offset'")),
        }
    }

    fn to_json(&self, value: &TimeZone) -> Value {
        json!({
            "name": value.name(),
            "utc_offset": value.utc_offset(),
        })
    }
}

// Integers, or floats with no fractional part such as `8.0`.
fn integral(value: &Value) -> Option<i64> {
    value.as_i64().or_else(|| {
        value
            .as_f64()
            .filter(|v| v.fract() == 0.0 && *v >= i64::MIN as f64 && *v < i64::MAX as f64)
            .map(|v| v as i64)
    })
}

/// `{"accuracy": 8, "latitude": 53.5, "longitude": 9.9}` objects.
///
/// `accuracy` defaults to 0 and must otherwise be integral; both coordinates
/// are required.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoCodeAdapter;

impl JsonAdapter for GeoCodeAdapter {
    type Value = GeoCode;

    fn from_json(&self, raw: &Value) -> Result<GeoCode, FieldError> {
        let object = raw
            .as_object()
            .ok_or_else(|| FieldError::malformed(raw, expected("an object", raw)))?;
        let accuracy = match non_null(object, "accuracy") {
            None => 0,
            Some(value) => integral(value)
                .ok_or_else(|| FieldError::malformed(value, expected("an integer", value)).at("accuracy"))?,
        };
        let latitude = non_null(object, "latitude").and_then(Value::as_f64);
        let longitude = non_null(object, "longitude").and_then(Value::as_f64);
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Ok(GeoCode::new(accuracy, latitude, longitude)),
            _ => Err(FieldError::malformed(raw, "geo code needs 'latitude' and 'longitude'")),
        }
    }

    fn to_json(&self, value: &GeoCode) -> Value {
        json!({
            "accuracy": value.accuracy(),
            "latitude": value.latitude(),
            "longitude": value.longitude(),
        })
    }
}
