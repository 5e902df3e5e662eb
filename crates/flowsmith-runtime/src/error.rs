//! Workflow runtime error types.

use thiserror::Error;

/// Result type for workflow runtime operations.
pub type WorkflowResult<T> = Result<T, WorkflowError>;

/// Errors that can occur while generating or simulating workflow backends.
#[derive(Debug, Error)]
pub enum WorkflowError {
    /// The workflow contains no LLM node to execute against.
    #[error("no LLM node found in the workflow")]
    MissingLlmNode,

    /// Artifact template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] minijinja::Error),

    /// Serialization/deserialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Archive construction failed.
    #[error("archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// I/O failure while writing archive bytes.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

impl WorkflowError {
    /// Whether the error describes invalid caller input rather than an
    /// internal fault.
    #[must_use]
    pub const fn is_caller_fault(&self) -> bool {
        matches!(self, Self::MissingLlmNode)
    }
}
