//! All `axum::`[`Router`]s with related `axum::`[`Handler`]s.
//!
//! # Usage Example
//!
//! ```rust,no_run
//! use flowsmith_server::handler;
//! use flowsmith_server::service::{ServiceConfig, ServiceState};
//!
//! let state = ServiceState::from_config(&ServiceConfig::default());
//! let router: axum::Router = handler::routes().with_state(state);
//! ```
//!
//! [`Router`]: axum::routing::Router
//! [`Handler`]: axum::handler::Handler

mod archives;
mod error;
mod models;
mod monitors;
mod request;
mod response;
mod workflows;

use axum::Router;
use axum::response::{IntoResponse, Response};

pub use crate::handler::error::{Error, ErrorKind, Result};
pub use crate::handler::request::{
    ArchivePathParams, ExecuteWorkflowRequest, GenerateWorkflowRequest, SessionPathParams,
};
pub use crate::handler::response::{
    CatalogModelResponse, ClearSessionResponse, ErrorResponse, ExecuteWorkflowResponse,
    GenerateWorkflowResponse, ModelCatalogResponse, MonitorStatusResponse, ProviderModelsResponse,
};
use crate::service::ServiceState;

#[inline]
async fn handler() -> Response {
    ErrorKind::NotFound.into_response()
}

/// Returns a [`Router`] with all API routes.
fn api_routes() -> Router<ServiceState> {
    Router::new()
        .merge(workflows::routes())
        .merge(archives::routes())
        .merge(models::routes())
}

/// Returns a [`Router`] with all routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .nest("/api", api_routes())
        .merge(monitors::routes())
        .fallback(handler)
}
