//! Health check handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;

use crate::dto::response::HealthResponse;
use crate::state::AppState;

/// GET /health
///
/// The only endpoint that reports a database failure verbatim.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    match state.gateway.ping().await {
        Ok(()) => (StatusCode::OK, Json(HealthResponse::connected())),
        Err(e) => {
            warn!(target_db = %state.gateway.target(), error = %e, "Health check failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(HealthResponse::failed(e.root_cause_text())),
            )
        }
    }
}
