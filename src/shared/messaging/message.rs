//! Conversation Message
//!
//! A single message inside a conversation. Equality and hashing use the
//! message ID only.

use std::hash::{Hash, Hasher};

use crate::json::{
    resource_serde, BoolAdapter, FallbackOnNull, Field, FieldReader, FieldWriter, ListAdapter,
    Mandatory, Optional, Resource, StringAdapter,
};
use crate::shared::calendar::SafeCalendar;
use crate::shared::error::FieldError;
use crate::shared::profile::User;

use super::attachment::MessageAttachment;

/// A message in a conversation
#[derive(Debug, Clone)]
pub struct ConversationMessage {
    /// Unique message ID
    message_id: String,
    created_at: SafeCalendar,
    content: String,
    /// Whether the requesting member has read the message
    is_read: bool,
    sender: User,
    /// `None` when the server did not include attachments
    attachments: Option<Vec<MessageAttachment>>,
}

impl ConversationMessage {
    pub fn new(
        message_id: impl Into<String>,
        created_at: SafeCalendar,
        content: impl Into<String>,
        is_read: bool,
        sender: User,
        attachments: Option<Vec<MessageAttachment>>,
    ) -> Self {
        Self {
            message_id: message_id.into(),
            created_at,
            content: content.into(),
            is_read,
            sender,
            attachments,
        }
    }

    pub fn message_id(&self) -> &str {
        &self.message_id
    }

    pub fn created_at(&self) -> SafeCalendar {
        self.created_at
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_read(&self) -> bool {
        self.is_read
    }

    pub fn sender(&self) -> &User {
        &self.sender
    }

    pub fn attachments(&self) -> Option<&[MessageAttachment]> {
        self.attachments.as_deref()
    }

    /// Get a preview of the message content
    pub fn preview(&self, max_len: usize) -> String {
        if self.content.chars().count() <= max_len {
            self.content.clone()
        } else {
            let truncated: String = self.content.chars().take(max_len).collect();
            format!("{}...", truncated)
        }
    }
}

impl PartialEq for ConversationMessage {
    fn eq(&self, other: &Self) -> bool {
        self.message_id == other.message_id
    }
}

impl Eq for ConversationMessage {}

impl Hash for ConversationMessage {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.message_id.hash(state);
    }
}

impl Resource for ConversationMessage {
    const NAME: &'static str = "ConversationMessage";
    const FIELDS: &'static [Field] = &[
        Field::new("message_id", "id"),
        Field::new("created_at", "created_at"),
        Field::new("content", "content"),
        Field::new("is_read", "read"),
        Field::new("sender", "sender"),
        Field::new("attachments", "attachments"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        let adapters = reader.adapters();
        let attachments = Optional(ListAdapter(adapters.resource::<MessageAttachment>()));
        Ok(Self {
            message_id: reader.field("message_id", Mandatory(StringAdapter))?,
            created_at: reader.field("created_at", FallbackOnNull(adapters.calendar()))?,
            content: reader.field("content", FallbackOnNull(StringAdapter))?,
            is_read: reader.field("is_read", FallbackOnNull(BoolAdapter))?,
            sender: reader.field("sender", Mandatory(adapters.resource::<User>()))?,
            attachments: reader.field("attachments", attachments)?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        let adapters = writer.adapters();
        let attachments = Optional(ListAdapter(adapters.resource::<MessageAttachment>()));
        writer.field("message_id", Mandatory(StringAdapter), &self.message_id);
        writer.field("created_at", FallbackOnNull(adapters.calendar()), &self.created_at);
        writer.field("content", FallbackOnNull(StringAdapter), &self.content);
        writer.field("is_read", FallbackOnNull(BoolAdapter), &self.is_read);
        writer.field("sender", Mandatory(adapters.resource::<User>()), &self.sender);
        writer.field("attachments", attachments, &self.attachments);
    }
}

resource_serde!(ConversationMessage);
