//! Conversation Data Structure
//!
//! Represents a conversation between two or more members.

use std::hash::{Hash, Hasher};

use crate::json::{
    resource_serde, BoolAdapter, CountAdapter, FallbackOnNull, Field, FieldReader, FieldWriter,
    ListAdapter, Mandatory, Optional, Resource, StringAdapter,
};
use crate::shared::calendar::SafeCalendar;
use crate::shared::error::FieldError;
use crate::shared::profile::User;

use super::message::ConversationMessage;

/// Represents a conversation between members.
///
/// Equality and hashing use `id` only, so two snapshots of the same
/// conversation compare equal even when their counters differ.
#[derive(Debug, Clone)]
pub struct Conversation {
    /// Unique conversation ID
    id: String,
    subject: String,
    /// Number of messages in the conversation
    total_msg_count: u32,
    unread_message_count: u32,
    updated_at: SafeCalendar,
    /// Read-only conversations accept no replies
    is_read_only: bool,
    participants: Vec<User>,
    /// `None` when the messages were not requested, which is not the same as
    /// a conversation without messages
    latest_messages: Option<Vec<ConversationMessage>>,
}

impl Conversation {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        total_msg_count: u32,
        unread_message_count: u32,
        updated_at: SafeCalendar,
        is_read_only: bool,
        participants: Vec<User>,
        latest_messages: Option<Vec<ConversationMessage>>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            total_msg_count,
            unread_message_count,
            updated_at,
            is_read_only,
            participants,
            latest_messages,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn total_msg_count(&self) -> u32 {
        self.total_msg_count
    }

    pub fn unread_message_count(&self) -> u32 {
        self.unread_message_count
    }

    pub fn updated_at(&self) -> SafeCalendar {
        self.updated_at
    }

    pub fn is_read_only(&self) -> bool {
        self.is_read_only
    }

    pub fn participants(&self) -> &[User] {
        &self.participants
    }

    pub fn latest_messages(&self) -> Option<&[ConversationMessage]> {
        self.latest_messages.as_deref()
    }

    /// Check if user is a participant
    pub fn has_participant(&self, user_id: &str) -> bool {
        self.participants.iter().any(|user| user.id() == user_id)
    }

    /// Get the other participant (for direct conversations)
    pub fn other_participant(&self, current_user_id: &str) -> Option<&User> {
        self.participants.iter().find(|user| user.id() != current_user_id)
    }

    pub fn has_unread(&self) -> bool {
        self.unread_message_count > 0
    }
}

impl PartialEq for Conversation {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Conversation {}

impl Hash for Conversation {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl Resource for Conversation {
    const NAME: &'static str = "Conversation";
    const FIELDS: &'static [Field] = &[
        Field::new("id", "id"),
        Field::new("subject", "subject"),
        Field::new("total_msg_count", "message_count"),
        Field::new("unread_message_count", "unread_message_count"),
        Field::new("updated_at", "updated_at"),
        Field::new("is_read_only", "read_only"),
        Field::new("participants", "participants"),
        Field::new("latest_messages", "latest_messages"),
    ];

    fn read(reader: &FieldReader<'_>) -> Result<Self, FieldError> {
        let adapters = reader.adapters();
        let count = FallbackOnNull(CountAdapter);
        let participants = FallbackOnNull(ListAdapter(adapters.resource::<User>()));
        let messages = Optional(ListAdapter(adapters.resource::<ConversationMessage>()));
        Ok(Self {
            id: reader.field("id", Mandatory(StringAdapter))?,
            subject: reader.field("subject", FallbackOnNull(StringAdapter))?,
            total_msg_count: reader.field("total_msg_count", count)?,
            unread_message_count: reader.field("unread_message_count", count)?,
            updated_at: reader.field("updated_at", FallbackOnNull(adapters.calendar()))?,
            is_read_only: reader.field("is_read_only", FallbackOnNull(BoolAdapter))?,
            participants: reader.field("participants", participants)?,
            latest_messages: reader.field("latest_messages", messages)?,
        })
    }

    fn write(&self, writer: &mut FieldWriter<'_>) {
        let adapters = writer.adapters();
        let count = FallbackOnNull(CountAdapter);
        let participants = FallbackOnNull(ListAdapter(adapters.resource::<User>()));
        let messages = Optional(ListAdapter(adapters.resource::<ConversationMessage>()));
        writer.field("id", Mandatory(StringAdapter), &self.id);
        writer.field("subject", FallbackOnNull(StringAdapter), &self.subject);
        writer.field("total_msg_count", count, &self.total_msg_count);
        writer.field("unread_message_count", count, &self.unread_message_count);
        writer.field("updated_at", FallbackOnNull(adapters.calendar()), &self.updated_at);
        writer.field("is_read_only", FallbackOnNull(BoolAdapter), &self.is_read_only);
        writer.field("participants", participants, &self.participants);
        writer.field("latest_messages", messages, &self.latest_messages);
    }
}

resource_serde!(Conversation);
