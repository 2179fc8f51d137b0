//! Social API Model - Main Library
//!
//! Typed data model and JSON decoding layer for a social network REST API:
//! contacts, invitations, conversations and the user profiles embedded in
//! them.
//!
//! # Overview
//!
//! The API sends loosely structured JSON. Dates arrive at varying precision,
//! enumerations grow new values without notice, lists arrive as delimited
//! strings and optional fields are sent as `null`. This library turns such
//! payloads into immutable, strongly typed values and back, with a decoding
//! policy chosen per field:
//!
//! - identity keys and references a resource cannot exist without are
//!   mandatory and fail the decode when missing
//! - plain values fall back to an empty default on `null`
//! - optional collections keep "not sent" apart from "empty"
//! - unreadable dates and unknown enum values become explicit sentinels
//!
//! # Module Structure
//!
//! - **`shared`** - the models, error types, calendar values and configuration
//! - **`json`** - adapters, binding tables and the decoding registry
//!
//! # Usage
//!
//! ```rust
//! use social_api_model::json::Registry;
//! use social_api_model::shared::messaging::Conversation;
//!
//! let raw = br#"{"id": "c1", "subject": "Lunch", "message_count": 3, "latest_messages": []}"#;
//! let conversation: Conversation = Registry::global().decode(raw).unwrap();
//! assert_eq!(conversation.total_msg_count(), 3);
//! assert_eq!(conversation.latest_messages().map(<[_]>::len), Some(0));
//! ```
//!
//! A custom configuration must be installed before the first decode:
//!
//! ```rust
//! use social_api_model::json::Registry;
//! use social_api_model::shared::config::DecodeConfig;
//!
//! let config = DecodeConfig::builder().min_year(1950).max_year(2050).build().unwrap();
//! Registry::install(config).unwrap();
//! ```
//!
//! # Thread Safety
//!
//! Models are plain owned values and `Send + Sync`. The global registry is
//! built once and read-only afterwards.
//!
//! # Error Handling
//!
//! - [`shared::error::DecodeError`] for payloads that cannot be decoded
//! - [`shared::config::ConfigError`] for invalid configuration or bindings

/// Shared types and data structures
pub mod shared;

/// JSON adapters and the decoding registry
pub mod json;
