//! Static API document handler.

use axum::extract::State;
use axum::http::header;
use axum::response::IntoResponse;
use tracing::debug;

use scanbench_core::error::{AppError, ErrorKind};

use crate::error::ApiResult;
use crate::state::AppState;

/// GET /openapi.json
///
/// Serves the configured document as-is. The route name says JSON but the
/// document is YAML, and the content type says so.
pub async fn openapi(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let path = &state.config.storage.openapi_path;

    let body = tokio::fs::read(path).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            debug!(path = %path, "API document missing");
            AppError::not_found("Not found")
        } else {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to read API document: {path}"),
                e,
            )
        }
    })?;

    Ok(([(header::CONTENT_TYPE, "application/yaml")], body))
}
