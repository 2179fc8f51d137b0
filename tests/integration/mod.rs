//! Integration tests
//!
//! Decode realistic payloads end to end through the global registry.

pub mod contact_test;
pub mod profile_test;
pub mod registry_test;
