//! Property-based tests

pub mod calendar_proptest;
pub mod resource_proptest;
