//! Contact Module
//!
//! Resources of the contacts API:
//!
//! - `ContactPaths` - the chains of contacts connecting two members
//! - `ContactRequest` - a received request to become contacts
//! - `PendingContactRequest` - a sent request that is not answered yet
//! - `InvitationStats` - the outcome of inviting people by email
//!
//! # Usage
//!
//! ```rust
//! use social_api_model::shared::contact::{ContactPaths, ContactRequest, InvitationStats};
//! ```

pub mod invitation;
pub mod paths;
pub mod pending;
pub mod request;

pub use invitation::InvitationStats;
pub use paths::ContactPaths;
pub use pending::PendingContactRequest;
pub use request::ContactRequest;
