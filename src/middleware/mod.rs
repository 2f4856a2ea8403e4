//! HTTP middleware
//!
//! CORS configuration for the JSON API.

pub mod cors;

pub use cors::*;
