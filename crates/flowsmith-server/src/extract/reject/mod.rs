//! Enhanced request extractors with improved error handling.
//!
//! This module provides custom Axum extractors that enhance the default
//! functionality with better error messages. They are drop-in replacements
//! for their standard Axum counterparts; every rejection is converted into
//! the API error shape instead of axum's plain-text responses.

pub mod enhanced_json;
pub mod enhanced_path;

pub use self::enhanced_json::Json;
pub use self::enhanced_path::Path;
