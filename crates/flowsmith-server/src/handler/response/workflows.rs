//! Response types for workflow generation and execution handlers.

use flowsmith_runtime::simulator::SimulatedExecution;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Response payload for a successful backend generation.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateWorkflowResponse {
    /// Handle of the stored archive.
    pub archive_id: Uuid,
    /// Relative URL the archive can be downloaded from.
    pub archive_url: String,
    /// Suggested download filename.
    pub filename: String,
    /// Paths of the generated artifacts, in emission order.
    pub files: Vec<String>,
    /// Markdown report describing the simulated execution.
    pub execution_report: String,
}

/// Response payload for a workflow execution request.
///
/// Successful simulations carry the exchange details; a workflow the
/// simulator cannot execute yields `success: false` with an error
/// description instead of an HTTP error status.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecuteWorkflowResponse {
    /// Whether the simulated execution completed.
    pub success: bool,
    /// The user input that was executed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// The simulated assistant response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
    /// Model identifier the simulation ran with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Whether conversation memory was active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub has_memory: Option<bool>,
    /// Failure description when `success` is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ExecuteWorkflowResponse {
    /// Creates a success payload from a finished simulation.
    pub fn completed(execution: SimulatedExecution) -> Self {
        Self {
            success: true,
            input: Some(execution.input),
            output: Some(execution.output),
            model: Some(execution.model),
            has_memory: Some(execution.has_memory),
            error: None,
        }
    }

    /// Creates a failure payload with the given error description.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            input: None,
            output: None,
            model: None,
            has_memory: None,
            error: Some(error.into()),
        }
    }
}

/// Response payload for a session-clear request.
#[must_use]
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearSessionResponse {
    /// Always true; clearing an unknown session is not an error.
    pub success: bool,
    /// Human-readable confirmation.
    pub message: String,
}

impl ClearSessionResponse {
    /// Creates the standard confirmation payload.
    pub fn cleared() -> Self {
        Self {
            success: true,
            message: "Conversation history cleared".to_owned(),
        }
    }
}
