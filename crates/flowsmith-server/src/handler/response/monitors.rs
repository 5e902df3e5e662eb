//! Response types for health monitoring handlers.

use serde::{Deserialize, Serialize};

/// Health status of the running service.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorStatusResponse {
    /// Whether the service considers itself healthy.
    pub is_healthy: bool,
    /// Version of the running server crate.
    pub version: String,
    /// When this status was produced.
    pub updated_at: jiff::Timestamp,
}
