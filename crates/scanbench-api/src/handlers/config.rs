//! Public configuration handler.

use axum::Json;
use axum::extract::State;

use scanbench_core::config::PublicConfigInfo;

use crate::state::AppState;

/// GET /config
pub async fn config_info(State(state): State<AppState>) -> Json<PublicConfigInfo> {
    Json(state.config.public_info())
}
