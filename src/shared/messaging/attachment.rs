//! Message Attachment
//!
//! A file attached to a conversation message. Two attachments are the same
//! attachment when their IDs match, whatever else the payloads say.

use std::hash::{Hash, Hasher};

use crate::json::{
    resource_serde, CountAdapter, FallbackOnNull, Field, FieldReader, FieldWriter, Mandatory,
    Resource, StringAdapter,
};
use crate::shared::calendar::SafeCalendar;
use crate::shared::error::FieldError;

/// A file attached to a message
#[derive(Debug, Clone)]
pub struct MessageAttachment {
    /// Unique attachment ID
    id: String,
    created_at: SafeCalendar,
    file_name: String,
    mime_type: String,
    /// Size in bytes
    file_size: u32,
}

impl MessageAttachment {
    pub fn new(
        id: impl Into<String>,
        created_at: SafeCalendar,
        file_name: impl Into<String>,
        mime_type: impl Into<String>,
        file_size: u32,
    ) -> Self {
        Self {
            id: id.into(),
            created_at,
            file_name: file_name.into(),
            mime_type: mime_type.into(),
            file_size,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn created_at(&self) -> SafeCalendar {
        self.created_at
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn file_size(&self) -> u32 {
        self.file_size
    }
}

impl PartialEq for MessageAttachment {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for MessageAttachment {}

impl Hash for MessageAttachment {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Resource for MessageAttachment {
    const NAME: &'static str = "MessageAttachment";
    const FIELDS: &'static [Field] = &[
        Field::new("id", "id"),
        Field::new("created_at", "created_at"),
        Field::new("file_name", "filename"),
        Field::new("mime_type", "mime_type"),
        Field::new("file_size", "size"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        Ok(Self {
            id: reader.field("id", Mandatory(StringAdapter))?,
            created_at: reader.field("created_at", FallbackOnNull(reader.adapters().calendar()))?,
            file_name: reader.field("file_name", FallbackOnNull(StringAdapter))?,
            mime_type: reader.field("mime_type", FallbackOnNull(StringAdapter))?,
            file_size: reader.field("file_size", FallbackOnNull(CountAdapter))?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        let calendar = FallbackOnNull(writer.adapters().calendar());
        writer.field("id", Mandatory(StringAdapter), &self.id);
        writer.field("created_at", calendar, &self.created_at);
        writer.field("file_name", FallbackOnNull(StringAdapter), &self.file_name);
        writer.field("mime_type", FallbackOnNull(StringAdapter), &self.mime_type);
        writer.field("file_size", FallbackOnNull(CountAdapter), &self.file_size);
    }
}

resource_serde!(MessageAttachment);
