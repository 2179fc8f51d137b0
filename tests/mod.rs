//! Test suite for social-api-model
//!
//! This module organizes all tests

pub mod common;
pub mod integration;
pub mod property;
