//! Pending Contact Request

use crate::json::{resource_serde, Field, FieldReader, FieldWriter, Mandatory, Resource, StringAdapter};
use crate::shared::error::FieldError;

/// A sent contact request awaiting an answer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PendingContactRequest {
    sender_id: String,
    recipient_id: String,
}

impl PendingContactRequest {
    pub fn new(sender_id: impl Into<String>, recipient_id: impl Into<String>) -> Self {
        Self {
            sender_id: sender_id.into(),
            recipient_id: recipient_id.into(),
        }
    }

    pub fn sender_id(&self) -> &str {
        &self.sender_id
    }

    pub fn recipient_id(&self) -> &str {
        &self.recipient_id
    }
}

impl Resource for PendingContactRequest {
    const NAME: &'static str = "PendingContactRequest";
    const FIELDS: &'static [Field] = &[
        Field::new("sender_id", "sender_id"),
        Field::new("recipient_id", "recipient_id"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            sender_id: reader.field("sender_id", Mandatory(StringAdapter))?,
            recipient_id: reader.field("recipient_id", Mandatory(StringAdapter))?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        writer.field("sender_id", Mandatory(StringAdapter), &self.sender_id);
        writer.field("recipient_id", Mandatory(StringAdapter), &self.recipient_id);
    }
}

resource_serde!(PendingContactRequest);
