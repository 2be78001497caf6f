//! User search handler.

use axum::Json;
use axum::extract::{Query, State};
use tracing::debug;

use crate::dto::request::SearchParams;
use crate::dto::response::SearchResponse;
use crate::error::ApiResult;
use crate::state::AppState;

/// GET /search?q=
///
/// Substring match on username; an empty query matches everyone. A
/// repeated `q` uses its first value.
pub async fn search_users(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> ApiResult<Json<SearchResponse>> {
    let params = SearchParams::from(pairs);
    let query = params.q.trim();
    let results = state.user_repo.search_profiles(query).await?;

    debug!(hits = results.len(), "User search");

    Ok(Json(SearchResponse { results }))
}
