//! System health monitoring handlers.

use axum::Router;
use axum::routing::get;

use crate::extract::Json;
use crate::handler::response::MonitorStatusResponse;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "flowsmith_server::handler::monitors";

/// Reports the health of the running service.
///
/// The service holds no external connections, so a reachable process is a
/// healthy one.
async fn health_status() -> Json<MonitorStatusResponse> {
    let response = MonitorStatusResponse {
        is_healthy: true,
        version: env!("CARGO_PKG_VERSION").to_owned(),
        updated_at: jiff::Timestamp::now(),
    };

    tracing::debug!(
        target: TRACING_TARGET,
        version = %response.version,
        "health status reported"
    );

    Json(response)
}

/// Returns a [`Router`] with all health monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}

#[cfg(test)]
mod tests {
    use crate::handler::response::MonitorStatusResponse;
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn health_reports_version() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body = response.json::<MonitorStatusResponse>();
        assert!(body.is_healthy);
        assert_eq!(body.version, env!("CARGO_PKG_VERSION"));

        Ok(())
    }

    #[tokio::test]
    async fn health_timestamp_is_recent() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let body = server
            .get("/health")
            .await
            .json::<MonitorStatusResponse>();

        let age = jiff::Timestamp::now() - body.updated_at;
        assert!(age.get_seconds() < 60, "timestamp should be recent");

        Ok(())
    }
}
