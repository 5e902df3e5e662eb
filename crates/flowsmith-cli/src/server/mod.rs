//! HTTP server startup and lifecycle management.
//!
//! This module provides a clean API for starting the HTTP server with
//! enhanced error handling and graceful shutdown on SIGINT/SIGTERM.

mod error;
mod http_server;
mod shutdown;

use axum::Router;
pub use error::{ServerError, ServerResult};
use http_server::serve_http;
use shutdown::shutdown_signal;

use crate::config::ServerConfig;

/// Starts the HTTP server with graceful shutdown handling.
///
/// # Arguments
///
/// * `app` - The Axum router to serve
/// * `config` - Server configuration including bind address and timeouts
///
/// # Errors
///
/// Returns an error if:
/// - Server configuration is invalid
/// - Cannot bind to the specified address/port
/// - Server encounters a fatal error during operation
pub async fn serve(app: Router, config: ServerConfig) -> ServerResult<()> {
    serve_http(app, config).await
}
