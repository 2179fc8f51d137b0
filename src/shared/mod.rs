//! Shared Module
//!
//! The typed models of the social network API, plus the error, calendar and
//! configuration types used across the crate.
//!
//! # Overview
//!
//! All models are immutable values. They are built by the decoding registry
//! in [`crate::json`] or through their `new` constructors, and exposed
//! through accessors only.

/// Partial calendar values
pub mod calendar;

/// Decode configuration
pub mod config;

/// Contact resources
pub mod contact;

/// Decode error types
pub mod error;

/// Messaging resources
pub mod messaging;

/// User profiles and embedded values
pub mod profile;

/// Re-export commonly used types for convenience
pub use calendar::SafeCalendar;
pub use config::{ConfigError, DecodeConfig, DecodeConfigBuilder};
pub use contact::{ContactPaths, ContactRequest, InvitationStats, PendingContactRequest};
pub use error::DecodeError;
pub use messaging::{Conversation, ConversationMessage, MessageAttachment};
pub use profile::User;
