//! Middleware configuration for the HTTP server.
//!
//! This module groups the CLI-configurable middleware settings: CORS and
//! request recovery (timeouts/panic handling).
//!
//! All middleware configs are re-exported from `flowsmith-server` and support
//! both CLI arguments and environment variables.
//!
//! # Example
//!
//! ```bash
//! # Configure CORS origins and request timeout
//! flowsmith-cli --cors-origins "https://example.com" --request-timeout 60
//! ```

use anyhow::anyhow;
use clap::Args;
use flowsmith_server::middleware::{CorsConfig, RecoveryConfig};
use serde::{Deserialize, Serialize};

use crate::TRACING_TARGET_CONFIG;

/// Middleware configuration combining CORS and recovery settings.
///
/// This struct groups all HTTP middleware configurations that can be
/// customized via CLI arguments or environment variables.
#[derive(Debug, Clone, Args, Serialize, Deserialize)]
pub struct MiddlewareConfig {
    /// CORS (Cross-Origin Resource Sharing) configuration.
    ///
    /// Controls which origins can access the API and what credentials
    /// are allowed in cross-origin requests.
    #[clap(flatten)]
    pub cors: CorsConfig,

    /// Recovery middleware configuration.
    ///
    /// Controls request timeout and panic recovery behavior.
    #[clap(flatten)]
    pub recovery: RecoveryConfig,
}

impl MiddlewareConfig {
    /// Validates middleware configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if the request timeout is outside 1-300 seconds.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.recovery.request_timeout == 0 || self.recovery.request_timeout > 300 {
            return Err(anyhow!(
                "Request timeout {} seconds is invalid. Must be between 1 and 300 seconds.",
                self.recovery.request_timeout
            ));
        }

        Ok(())
    }

    /// Logs middleware configuration at startup.
    pub fn log(&self) {
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            origins = ?self.cors.allowed_origins,
            credentials = self.cors.allow_credentials,
            "CORS configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            request_timeout_secs = self.recovery.request_timeout,
            "Recovery configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config() {
        let config = MiddlewareConfig {
            cors: CorsConfig::default(),
            recovery: RecoveryConfig::default(),
        };

        assert!(config.validate().is_ok());
    }

    #[test]
    fn reject_out_of_range_request_timeout() {
        let mut config = MiddlewareConfig {
            cors: CorsConfig::default(),
            recovery: RecoveryConfig::with_timeout_secs(0),
        };

        assert!(config.validate().is_err());

        config.recovery = RecoveryConfig::with_timeout_secs(301);
        assert!(config.validate().is_err());

        config.recovery = RecoveryConfig::with_timeout_secs(60);
        assert!(config.validate().is_ok());
    }
}
