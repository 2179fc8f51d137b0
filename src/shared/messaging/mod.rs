//! Messaging Module
//!
//! Resources of the messages API:
//!
//! - `Conversation` - a conversation between members
//! - `ConversationMessage` - a message in a conversation
//! - `MessageAttachment` - a file attached to a message
//!
//! All three compare and hash by their ID.
//!
//! # Usage
//!
//! ```rust
//! use social_api_model::shared::messaging::{Conversation, ConversationMessage, MessageAttachment};
//! ```

pub mod attachment;
pub mod conversation;
pub mod message;

pub use attachment::MessageAttachment;
pub use conversation::Conversation;
pub use message::ConversationMessage;
