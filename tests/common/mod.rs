//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - Payload fixtures as the API sends them
//! - Custom assertion macros

pub mod assertions;

// Re-export commonly used utilities
pub use fixtures::*;
