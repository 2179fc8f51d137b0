//! Calendar adapters
//!
//! `SafeCalendarAdapter` reads the date strings the API documents:
//!
//! - `yyyy`
//! - `yyyy-MM`
//! - `yyyy-MM-dd`
//! - `yyyy-MM-ddTHH:mm:ssZ`
//! - `yyyy-MM-ddTHH:mm:ss+HHMM` and `yyyy-MM-ddTHH:mm:ss+HH:MM`
//! - `yyyy-MM-ddTHH:mm:ss.SSSZ`
//!
//! Anything else becomes [`SafeCalendar::UNSET`]. Instants are normalized to
//! UTC and written back in the `Z` form.
//!
//! `BirthDateAdapter` reads the `{"year": .., "month": .., "day": ..}` objects
//! used for birth dates, where any of the parts may be hidden.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde_json::{Map, Value};

use super::adapter::{expected, JsonAdapter};
use crate::shared::calendar::SafeCalendar;
use crate::shared::config::{DEFAULT_MAX_YEAR, DEFAULT_MIN_YEAR};
use crate::shared::error::FieldError;

/// Date strings at any supported precision. Never fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SafeCalendarAdapter {
    min_year: i32,
    max_year: i32,
}

impl Default for SafeCalendarAdapter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_YEAR, DEFAULT_MAX_YEAR)
    }
}

impl SafeCalendarAdapter {
    /// Accept only years within `min_year..=max_year`
    pub fn new(min_year: i32, max_year: i32) -> Self {
        Self { min_year, max_year }
    }

    /// Parse one date string, or `None` if it is not in a supported format.
    pub fn parse(&self, text: &str) -> Option<SafeCalendar> {
        let bytes = text.as_bytes();
        if bytes.len() < 4 || !bytes[..4].iter().all(u8::is_ascii_digit) {
            return None;
        }
        let year: i32 = text[..4].parse().ok()?;
        if !self.in_window(year) {
            return None;
        }

        match bytes.len() {
            4 => Some(SafeCalendar::from_year(year)),
            7 => {
                if bytes[4] != b'-' || !bytes[5..7].iter().all(u8::is_ascii_digit) {
                    return None;
                }
                SafeCalendar::from_year_month(year, text[5..7].parse().ok()?)
            }
            10 => NaiveDate::parse_from_str(text, "%Y-%m-%d")
                .ok()
                .map(SafeCalendar::from_date),
            // An offset can move the UTC year across the window edge.
            _ => parse_instant(text)
                .filter(|instant| self.in_window(instant.year()))
                .map(SafeCalendar::from_datetime),
        }
    }

    fn in_window(&self, year: i32) -> bool {
        (self.min_year..=self.max_year).contains(&year)
    }
}

fn parse_instant(text: &str) -> Option<DateTime<Utc>> {
    if !text.contains('T') {
        return None;
    }
    // RFC 3339 covers `Z`, `+HH:MM` and fractional seconds; `+HHMM` needs `%z`.
    DateTime::parse_from_rfc3339(text)
        .or_else(|_| DateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%z"))
        .ok()
        .map(|instant| instant.with_timezone(&Utc))
}

impl JsonAdapter for SafeCalendarAdapter {
    type Value = SafeCalendar;

    fn from_json(&self, raw: &Value) -> Result<SafeCalendar, FieldError> {
        let Some(text) = raw.as_str() else {
            tracing::debug!(%raw, "non-string date, using unset calendar");
            return Ok(SafeCalendar::UNSET);
        };
        if text.is_empty() {
            return Ok(SafeCalendar::UNSET);
        }
        Ok(self.parse(text).unwrap_or_else(|| {
            tracing::debug!(date = text, "unsupported date format, using unset calendar");
            SafeCalendar::UNSET
        }))
    }

    fn to_json(&self, value: &SafeCalendar) -> Value {
        value.to_wire_string().map_or(Value::Null, Value::String)
    }
}

/// Birth date objects with optional `year`, `month` and `day`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BirthDateAdapter;

impl JsonAdapter for BirthDateAdapter {
    type Value = SafeCalendar;

    fn from_json(&self, raw: &Value) -> Result<SafeCalendar, FieldError> {
        let object = raw
            .as_object()
            .ok_or_else(|| FieldError::malformed(raw, expected("an object", raw)))?;

        let mut parts = [None, None, None];
        for (name, value) in object {
            let slot = match name.as_str() {
                "year" => 0,
                "month" => 1,
                "day" => 2,
                _ => {
                    return Err(FieldError::malformed(
                        raw,
                        format!("birth date should contain 'year', 'month' and/or 'day', found '{}'", name),
                    ))
                }
            };
            if value.is_null() {
                continue;
            }
            let part = value
                .as_i64()
                .and_then(|v| i32::try_from(v).ok())
                .ok_or_else(|| FieldError::malformed(value, expected("an integer", value)).at(name))?;
            parts[slot] = Some(part);
        }

        let [year, month, day] = parts;
        // Negative parts map to 0, which `from_parts` rejects.
        let month = month.map(|m| u32::try_from(m).unwrap_or(0));
        let day = day.map(|d| u32::try_from(d).unwrap_or(0));
        SafeCalendar::from_parts(year, month, day)
            .ok_or_else(|| FieldError::malformed(raw, "birth date is out of range"))
    }

    fn to_json(&self, value: &SafeCalendar) -> Value {
        let mut object = Map::new();
        if let Some(year) = value.year() {
            object.insert("year".to_string(), Value::from(year));
        }
        if let Some(month) = value.month() {
            object.insert("month".to_string(), Value::from(month));
        }
        if let Some(day) = value.day() {
            object.insert("day".to_string(), Value::from(day));
        }
        Value::Object(object)
    }
}
