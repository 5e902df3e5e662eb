//! Static model catalog handler.

use axum::Router;
use axum::routing::get;

use crate::extract::Json;
use crate::handler::response::ModelCatalogResponse;
use crate::service::ServiceState;

/// Lists the supported provider families and their models.
///
/// The catalog is static and descriptive; submitting a model outside of it
/// is still accepted by generation and execution.
async fn list_models() -> Json<ModelCatalogResponse> {
    Json(ModelCatalogResponse::catalog())
}

/// Returns a [`Router`] with the model catalog route.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/models", get(list_models))
}
