//! Enhanced HTTP request extractors with improved error handling.
//!
//! This module provides custom Axum extractors that replace the default
//! rejection responses with the API error shape:
//!
//! - [`Json`] - JSON deserialization with detailed error messages
//! - [`Path`] - Path parameter extraction with detailed error context

pub mod reject;

pub use crate::extract::reject::{Json, Path};
