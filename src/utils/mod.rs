//! Shared utilities
//!
//! Error types and validation helpers.

pub mod errors;
pub mod validation;
