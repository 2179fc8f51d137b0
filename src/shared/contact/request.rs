//! Contact Request
//!
//! A request to become contacts, as listed for the receiving member.

use crate::json::{
    resource_serde, FallbackOnNull, Field, FieldReader, FieldWriter, Mandatory, Resource,
    StringAdapter,
};
use crate::shared::calendar::SafeCalendar;
use crate::shared::error::FieldError;
use crate::shared::profile::User;

/// A received contact request
#[derive(Debug, Clone, PartialEq)]
pub struct ContactRequest {
    /// ID of the member who sent the request
    sender_id: String,
    sender: User,
    /// Personal note; empty when none was written
    message: String,
    /// `SafeCalendar::UNSET` when the server sent no usable date
    received_at: SafeCalendar,
}

impl ContactRequest {
    pub fn new(
        sender_id: impl Into<String>,
        sender: User,
        message: impl Into<String>,
        received_at: SafeCalendar,
    ) -> Self {
        Self {
            sender_id: sender_id.into(),
            sender,
            message: message.into(),
            received_at,
        }
    }

    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    pub fn sender(&self) -> &User {
        &self.sender
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn received_at(&self) -> SafeCalendar {
        self.received_at
    }
}

impl Resource for ContactRequest {
    const NAME: &'static str = "ContactRequest";
    const FIELDS: &'static [Field] = &[
        Field::new("sender_id", "sender_id"),
        Field::new("sender", "sender"),
        Field::new("message", "message"),
        Field::new("received_at", "received_at"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        let adapters = reader.adapters();
        Ok(Self {
            sender_id: reader.field("sender_id", Mandatory(StringAdapter))?,
            sender: reader.field("sender", Mandatory(adapters.resource::<User>()))?,
            message: reader.field("message", FallbackOnNull(StringAdapter))?,
            received_at: reader.field("received_at", FallbackOnNull(adapters.calendar()))?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        let adapters = writer.adapters();
        writer.field("sender_id", Mandatory(StringAdapter), &self.sender_id);
        writer.field("sender", Mandatory(adapters.resource::<User>()), &self.sender);
        writer.field("message", FallbackOnNull(StringAdapter), &self.message);
        writer.field("received_at", FallbackOnNull(adapters.calendar()), &self.received_at);
    }
}

resource_serde!(ContactRequest);
