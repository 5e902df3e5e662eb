#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

pub mod archive;
pub mod codegen;
mod error;
pub mod provider;
pub mod session;
pub mod simulator;
pub mod workflow;

#[doc(hidden)]
pub mod prelude;

pub use error::{WorkflowError, WorkflowResult};

/// Tracing target for workflow runtime operations.
pub const TRACING_TARGET: &str = "flowsmith_runtime";
