//! Response types for HTTP handlers.

mod error_response;
mod models;
mod monitors;
mod workflows;

pub use error_response::*;
pub use models::*;
pub use monitors::*;
pub use workflows::*;
