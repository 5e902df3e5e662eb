//! Prelude module for convenient imports.
//!
//! This module re-exports commonly used types for ergonomic imports:
//!
//! ```rust
//! use flowsmith_runtime::prelude::*;
//! ```

pub use crate::archive::{ARCHIVE_CONTENT_TYPE, ARCHIVE_FILENAME, ArchiveStore, StoredArchive};
pub use crate::codegen::{ARTIFACT_COUNT, BackendGenerator, GeneratedFile, WORKFLOW_SNAPSHOT_PATH};
pub use crate::error::{WorkflowError, WorkflowResult};
pub use crate::provider::{CatalogModel, FALLBACK_MODEL, ProviderFamily};
pub use crate::session::{ChatMessage, ChatRole, MAX_HISTORY_MESSAGES, SessionStore};
pub use crate::simulator::{DEFAULT_RESPONSE_DELAY, ExecutionSimulator, SimulatedExecution};
pub use crate::workflow::{
    DEFAULT_API_KEY, DEFAULT_MODEL, DEFAULT_TEMPERATURE, NodeData, NodeType, Workflow,
    WorkflowConfig, WorkflowEdge, WorkflowNode,
};
