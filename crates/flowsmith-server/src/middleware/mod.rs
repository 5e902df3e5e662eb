//! Middleware for `axum::Router` and HTTP request processing.
//!
//! This module provides middleware extension traits for:
//! - Observability (tracing, request IDs)
//! - Security (CORS)
//! - Error handling (panics, timeouts, service errors)

mod observability;
mod recovery;
mod security;

pub use observability::RouterObservabilityExt;
pub use recovery::{RecoveryConfig, RouterRecoveryExt};
pub use security::{CorsConfig, RouterSecurityExt};
