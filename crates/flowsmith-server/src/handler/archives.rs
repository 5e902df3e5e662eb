//! Stored archive download and release handlers.

use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::routing::get;
use flowsmith_runtime::archive::{ARCHIVE_CONTENT_TYPE, ArchiveStore};

use crate::extract::Path;
use crate::handler::request::ArchivePathParams;
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for archive operations.
const TRACING_TARGET: &str = "flowsmith_server::handler::archives";

/// Downloads a stored archive as a zip attachment.
#[tracing::instrument(skip_all, fields(archive_id = %params.archive_id))]
async fn download_archive(
    State(archives): State<ArchiveStore>,
    Path(params): Path<ArchivePathParams>,
) -> Result<(StatusCode, HeaderMap, Vec<u8>)> {
    let Some(stored) = archives.get(&params.archive_id).await else {
        return Err(ErrorKind::NotFound
            .with_message("Archive not found")
            .with_resource(params.archive_id.to_string())
            .into_static());
    };

    let disposition = format!("attachment; filename=\"{}\"", stored.filename);
    let disposition = HeaderValue::from_str(&disposition).map_err(|_| {
        ErrorKind::InternalServerError
            .with_context("stored archive filename is not a valid header value")
    })?;

    let mut headers = HeaderMap::new();
    headers.insert(header::CONTENT_DISPOSITION, disposition);
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(ARCHIVE_CONTENT_TYPE),
    );
    headers.insert(header::CONTENT_LENGTH, HeaderValue::from(stored.bytes.len()));

    tracing::debug!(
        target: TRACING_TARGET,
        archive_id = %params.archive_id,
        archive_size = stored.bytes.len(),
        "archive downloaded"
    );

    Ok((StatusCode::OK, headers, stored.bytes))
}

/// Releases a stored archive handle.
#[tracing::instrument(skip_all, fields(archive_id = %params.archive_id))]
async fn release_archive(
    State(archives): State<ArchiveStore>,
    Path(params): Path<ArchivePathParams>,
) -> Result<StatusCode> {
    if !archives.release(&params.archive_id).await {
        return Err(ErrorKind::NotFound
            .with_message("Archive not found")
            .with_resource(params.archive_id.to_string())
            .into_static());
    }

    tracing::debug!(
        target: TRACING_TARGET,
        archive_id = %params.archive_id,
        "archive released"
    );

    Ok(StatusCode::NO_CONTENT)
}

/// Returns a [`Router`] with all archive routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route(
        "/archives/{archiveId}",
        get(download_archive).delete(release_archive),
    )
}
