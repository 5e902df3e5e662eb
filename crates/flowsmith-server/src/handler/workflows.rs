//! Workflow generation and simulated execution handlers.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{delete, post};
use flowsmith_runtime::archive::{self, ARCHIVE_FILENAME, ArchiveStore};
use flowsmith_runtime::codegen::BackendGenerator;
use flowsmith_runtime::session::SessionStore;
use flowsmith_runtime::simulator::ExecutionSimulator;

use crate::extract::{Json, Path};
use crate::handler::Result;
use crate::handler::request::{ExecuteWorkflowRequest, GenerateWorkflowRequest, SessionPathParams};
use crate::handler::response::{
    ClearSessionResponse, ExecuteWorkflowResponse, GenerateWorkflowResponse,
};
use crate::service::ServiceState;

/// Tracing target for workflow operations.
const TRACING_TARGET: &str = "flowsmith_server::handler::workflows";

/// Generates the backend bundle for a workflow and stores the packed archive.
///
/// The response carries the archive handle, the artifact path manifest and a
/// simulated execution report for the submitted workflow.
#[tracing::instrument(skip_all)]
async fn generate_workflow(
    State(generator): State<BackendGenerator>,
    State(simulator): State<ExecutionSimulator>,
    State(archives): State<ArchiveStore>,
    Json(request): Json<GenerateWorkflowRequest>,
) -> Result<(StatusCode, Json<GenerateWorkflowResponse>)> {
    let files = generator.generate(&request.workflow)?;
    let execution_report = simulator.report(&request.workflow, &files);

    let bytes = archive::pack(&files)?;
    let archive_id = archives.store(ARCHIVE_FILENAME, bytes).await;

    let response = GenerateWorkflowResponse {
        archive_id,
        archive_url: format!("/api/archives/{archive_id}"),
        filename: ARCHIVE_FILENAME.to_owned(),
        files: files.into_iter().map(|file| file.path).collect(),
        execution_report,
    };

    tracing::info!(
        target: TRACING_TARGET,
        archive_id = %response.archive_id,
        file_count = response.files.len(),
        "workflow backend generated"
    );

    Ok((StatusCode::CREATED, Json(response)))
}

/// Runs the execution simulator for a workflow.
///
/// A workflow without an LLM node is answered with HTTP 200 and
/// `success: false`; the client treats that as a domain failure, not a
/// transport error.
#[tracing::instrument(skip_all)]
async fn execute_workflow(
    State(simulator): State<ExecutionSimulator>,
    State(sessions): State<SessionStore>,
    Json(request): Json<ExecuteWorkflowRequest>,
) -> Result<Json<ExecuteWorkflowResponse>> {
    let session_id = request.session_id().to_owned();

    let response = match simulator
        .execute(&request.workflow, &request.input, &session_id, &sessions)
        .await
    {
        Ok(execution) => ExecuteWorkflowResponse::completed(execution),
        Err(error) if error.is_caller_fault() => {
            tracing::debug!(
                target: TRACING_TARGET,
                session = %session_id,
                error = %error,
                "workflow execution rejected"
            );

            ExecuteWorkflowResponse::failed(error.to_string())
        }
        Err(error) => return Err(error.into()),
    };

    Ok(Json(response))
}

/// Clears the conversation history of one session.
///
/// Clearing an unknown session is a no-op and still reports success.
#[tracing::instrument(skip_all, fields(session = %params.session_id))]
async fn clear_session(
    State(sessions): State<SessionStore>,
    Path(params): Path<SessionPathParams>,
) -> Result<Json<ClearSessionResponse>> {
    sessions.clear(&params.session_id).await;

    tracing::debug!(
        target: TRACING_TARGET,
        session = %params.session_id,
        "conversation history cleared"
    );

    Ok(Json(ClearSessionResponse::cleared()))
}

/// Returns a [`Router`] with all workflow routes.
pub fn routes() -> Router<ServiceState> {
    Router::new()
        .route("/workflows/generate", post(generate_workflow))
        .route("/workflows/execute", post(execute_workflow))
        .route("/workflows/sessions/{sessionId}", delete(clear_session))
}
