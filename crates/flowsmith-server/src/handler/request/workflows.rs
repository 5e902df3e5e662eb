//! Request types for workflow generation and execution handlers.

use flowsmith_runtime::workflow::Workflow;
use serde::{Deserialize, Serialize};

/// Default session identifier applied when the client names none.
const DEFAULT_SESSION_ID: &str = "default";

/// Request payload for backend generation.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWorkflowRequest {
    /// The workflow document to generate a backend for.
    pub workflow: Workflow,
}

/// Request payload for a simulated workflow execution.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteWorkflowRequest {
    /// The workflow document to execute.
    pub workflow: Workflow,
    /// The user input message.
    pub input: String,
    /// Conversation session the exchange belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

impl ExecuteWorkflowRequest {
    /// Returns the effective session identifier.
    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or(DEFAULT_SESSION_ID)
    }
}
