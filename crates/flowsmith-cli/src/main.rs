#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

mod config;
mod server;

use std::process;

use axum::Router;
use flowsmith_server::handler;
use flowsmith_server::middleware::{RouterObservabilityExt, RouterRecoveryExt, RouterSecurityExt};
use flowsmith_server::service::ServiceState;

use crate::config::Cli;
use crate::server::ServerError;

/// Tracing target for server startup events.
pub const TRACING_TARGET_SERVER_STARTUP: &str = "flowsmith_cli::server::startup";

/// Tracing target for server shutdown events.
pub const TRACING_TARGET_SERVER_SHUTDOWN: &str = "flowsmith_cli::server::shutdown";

/// Tracing target for configuration events.
pub const TRACING_TARGET_CONFIG: &str = "flowsmith_cli::config";

#[tokio::main]
async fn main() {
    let Err(error) = run().await else {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            "application terminated successfully"
        );
        process::exit(0);
    };

    if tracing::enabled!(tracing::Level::ERROR) {
        tracing::error!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            error = %error,
            "application terminated with error"
        );

        log_recovery_hints(&error);
    } else {
        eprintln!("Error: {error:#}");
    }

    process::exit(1);
}

/// Main application entry point.
async fn run() -> anyhow::Result<()> {
    let cli = Cli::init();

    Cli::init_tracing();
    log_startup_info();

    cli.validate()?;
    cli.log();

    let state = ServiceState::from_config(&cli.service);
    let router = create_router(state, &cli);

    server::serve(router, cli.server).await?;

    Ok(())
}

/// Creates the router with all middleware layers applied.
///
/// Middleware is applied in reverse order (last added = outermost):
/// 1. Recovery (outermost) - catches panics and enforces timeouts
/// 2. Observability - request IDs and tracing spans
/// 3. Security - CORS
/// 4. Routes (innermost) - actual request handlers
fn create_router(state: ServiceState, cli: &Cli) -> Router {
    handler::routes()
        .with_state(state)
        .with_security(&cli.middleware.cors)
        .with_observability()
        .with_recovery(&cli.middleware.recovery)
}

/// Logs startup information.
fn log_startup_info() {
    tracing::info!(
        target: TRACING_TARGET_SERVER_STARTUP,
        version = env!("CARGO_PKG_VERSION"),
        "starting flowsmith server"
    );
}

/// Logs operator-facing recovery hints for server faults.
fn log_recovery_hints(error: &anyhow::Error) {
    let Some(server_error) = error.downcast_ref::<ServerError>() else {
        return;
    };

    if let Some(suggestion) = server_error.suggestion() {
        tracing::info!(
            target: TRACING_TARGET_SERVER_SHUTDOWN,
            code = server_error.error_code(),
            recoverable = server_error.is_recoverable(),
            suggestion,
            "recovery suggestion"
        );
    }
}
