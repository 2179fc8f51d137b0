//! Location Data Structure

use crate::json::{
    resource_serde, Field, FieldReader, FieldWriter, GeoCodeAdapter, Lenient, Optional, Resource,
    StringAdapter,
};
use crate::shared::error::FieldError;

use super::values::GeoCode;

/// A place, as attached to companies and events
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Location {
    geo_code: Option<GeoCode>,
    street: Option<String>,
    zip_code: Option<String>,
    city: Option<String>,
    region: Option<String>,
    country: Option<String>,
}

impl Location {
    pub fn new(city: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            country: Some(country.into()),
            ..Self::default()
        }
    }

    pub fn with_geo_code(self, geo_code: GeoCode) -> Self {
        Self {
            geo_code: Some(geo_code),
            ..self
        }
    }

    pub fn with_street(self, street: impl Into<String>, zip_code: impl Into<String>) -> Self {
        Self {
            street: Some(street.into()),
            zip_code: Some(zip_code.into()),
            ..self
        }
    }

    pub fn with_region(self, region: impl Into<String>) -> Self {
        Self {
            region: Some(region.into()),
            ..self
        }
    }

    /// Coordinates, if the server sent usable ones
    pub fn geo_code(&self) -> Option<GeoCode> {
        self.geo_code
    }

    pub fn street(&self) -> Option<&str> {
        self.street.as_deref()
    }

    pub fn zip_code(&self) -> Option<&str> {
        self.zip_code.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }
}

impl Resource for Location {
    const NAME: &'static str = "Location";
    const FIELDS: &'static [Field] = &[
        Field::new("geo_code", "geo_code"),
        Field::new("street", "street"),
        Field::new("zip_code", "zip_code"),
        Field::new("city", "city"),
        Field::new("region", "region"),
        Field::new("country", "country"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        let text = Optional(StringAdapter);
        Ok(Self {
            geo_code: reader.field("geo_code", Lenient(GeoCodeAdapter))?,
            street: reader.field("street", text)?,
            zip_code: reader.field("zip_code", text)?,
            city: reader.field("city", text)?,
            region: reader.field("region", text)?,
            country: reader.field("country", text)?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        let text = Optional(StringAdapter);
        writer.field("geo_code", Lenient(GeoCodeAdapter), &self.geo_code);
        writer.field("street", text, &self.street);
        writer.field("zip_code", text, &self.zip_code);
        writer.field("city", text, &self.city);
        writer.field("region", text, &self.region);
        writer.field("country", text, &self.country);
    }
}

resource_serde!(Location);
