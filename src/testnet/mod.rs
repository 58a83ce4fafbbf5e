//! Test helpers for building chains
//!
//! Shared fixtures for the unit tests in `core` and `cli`.

pub mod test_utils;

pub use test_utils::*;
