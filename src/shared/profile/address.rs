//! Address Data Structure

use crate::json::{
    resource_serde, Field, FieldReader, FieldWriter, Lenient, Optional, PhoneAdapter, Resource,
    StringAdapter,
};
use crate::shared::error::FieldError;

use super::values::Phone;

/// A private or business address. Every part may be hidden by the member.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Address {
    street: Option<String>,
    zip_code: Option<String>,
    city: Option<String>,
    province: Option<String>,
    country: Option<String>,
    email: Option<String>,
    phone: Option<Phone>,
    fax: Option<Phone>,
    mobile_phone: Option<Phone>,
}

impl Address {
    pub fn with_street(self, street: impl Into<String>) -> Self {
        Self {
            street: Some(street.into()),
            ..self
        }
    }

    pub fn with_zip_code(self, zip_code: impl Into<String>) -> Self {
        Self {
            zip_code: Some(zip_code.into()),
            ..self
        }
    }

    pub fn with_city(self, city: impl Into<String>) -> Self {
        Self {
            city: Some(city.into()),
            ..self
        }
    }

    pub fn with_province(self, province: impl Into<String>) -> Self {
        Self {
            province: Some(province.into()),
            ..self
        }
    }

    /// Country as an ISO 3166 code
    pub fn with_country(self, country: impl Into<String>) -> Self {
        Self {
            country: Some(country.into()),
            ..self
        }
    }

    pub fn with_email(self, email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..self
        }
    }

    pub fn with_phone(self, phone: Phone) -> Self {
        Self {
            phone: Some(phone),
            ..self
        }
    }

    pub fn with_fax(self, fax: Phone) -> Self {
        Self {
            fax: Some(fax),
            ..self
        }
    }

    pub fn with_mobile_phone(self, mobile_phone: Phone) -> Self {
        Self {
            mobile_phone: Some(mobile_phone),
            ..self
        }
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

    pub fn province(&self) -> Option<&str> {
        self.province.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn fax(&self) -> Option<&Phone> {
        self.fax.as_ref()
    }

    pub fn mobile_phone(&self) -> Option<&Phone> {
        self.mobile_phone.as_ref()
    }
}

impl Resource for Address {
    const NAME: &'static str = "Address";
    const FIELDS: &'static [Field] = &[
        Field::new("street", "street"),
        Field::new("zip_code", "zip_code"),
        Field::new("city", "city"),
        Field::new("province", "province"),
        Field::new("country", "country"),
        Field::new("email", "email"),
        Field::new("phone", "phone"),
        Field::new("fax", "fax"),
        Field::new("mobile_phone", "mobile_phone"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        let text = Optional(StringAdapter);
        let phone = Lenient(PhoneAdapter);
        Ok(Self {
            street: reader.field("street", text)?,
            zip_code: reader.field("zip_code", text)?,
            city: reader.field("city", text)?,
            province: reader.field("province", text)?,
            country: reader.field("country", text)?,
            email: reader.field("email", text)?,
            phone: reader.field("phone", phone)?,
            fax: reader.field("fax", phone)?,
            mobile_phone: reader.field("mobile_phone", phone)?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        let text = Optional(StringAdapter);
        let phone = Lenient(PhoneAdapter);
        writer.field("street", text, &self.street);
        writer.field("zip_code", text, &self.zip_code);
        writer.field("city", text, &self.city);
        writer.field("province", text, &self.province);
        writer.field("country", text, &self.country);
        writer.field("email", text, &self.email);
        writer.field("phone", phone, &self.phone);
        writer.field("fax", phone, &self.fax);
        writer.field("mobile_phone", phone, &self.mobile_phone);
    }
}

resource_serde!(Address);
