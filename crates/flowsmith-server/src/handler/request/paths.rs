//! Path parameter types for HTTP handlers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Path parameters for stored archive operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchivePathParams {
    /// Handle of the stored archive.
    pub archive_id: Uuid,
}

/// Path parameters for conversation session operations.
#[must_use]
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionPathParams {
    /// Identifier of the conversation session.
    pub session_id: String,
}
