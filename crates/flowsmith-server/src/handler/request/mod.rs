//! Request types for HTTP handlers.

mod paths;
mod workflows;

pub use paths::*;
pub use workflows::*;
