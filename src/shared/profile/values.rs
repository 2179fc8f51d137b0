//! Compact profile values
//!
//! Small value types the API sends in provider-specific shapes: phones as
//! `"49|40|1234567"`, time zones and geo codes as flat objects.

use std::fmt;

/// A phone number split into country code, area code and number
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Phone {
    country_code: String,
    area_code: String,
    number: String,
}

impl Phone {
    pub fn new(
        country_code: impl Into<String>,
        area_code: impl Into<String>,
        number: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            area_code: area_code.into(),
            number: number.into(),
        }
    }

    /// Country code; may start with `+`
    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    /// Number without country and area code
    pub fn number(&self) -> &str {
        &self.number
    }

    /// True for the placeholder produced from an unreadable phone string
    pub fn is_empty(&self) -> bool {
        self.country_code.is_empty() && self.area_code.is_empty() && self.number.is_empty()
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|{}|{}", self.country_code, self.area_code, self.number)
    }
}

/// A named time zone with its offset from UTC in hours
#[derive(Debug, Clone, PartialEq)]
pub struct TimeZone {
    name: String,
    utc_offset: f64,
}

impl TimeZone {
    pub fn new(name: impl Into<String>, utc_offset: f64) -> Self {
        Self {
            name: name.into(),
            utc_offset,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn utc_offset(&self) -> f64 {
        self.utc_offset
    }
}

/// Coordinates of a location
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCode {
    accuracy: i64,
    latitude: f64,
    longitude: f64,
}

impl GeoCode {
    pub fn new(accuracy: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            accuracy,
            latitude,
            longitude,
        }
    }

    pub fn accuracy(&self) -> i64 {
        self.accuracy
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}
