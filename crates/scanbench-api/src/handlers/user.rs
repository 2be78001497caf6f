//! User lookup and password change handlers.
//!
//! Neither handler checks that the caller owns the record it touches.

use axum::Json;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use tracing::info;

use scanbench_core::error::AppError;
use scanbench_entity::user::UserProfile;

use crate::dto::request::ChangePasswordRequest;
use crate::dto::response::MessageResponse;
use crate::error::ApiResult;
use crate::extractors::FormFields;
use crate::state::AppState;

/// GET /users/{id}
///
/// Only a plain run of ASCII digits is an id; anything else, signs
/// included, does not match the route and gets the generic 404.
pub async fn get_user(
    State(state): State<AppState>,
    segment: Result<Path<String>, PathRejection>,
) -> ApiResult<Json<UserProfile>> {
    let Some(id) = segment.ok().and_then(|Path(raw)| parse_user_id(&raw)) else {
        return Err(AppError::not_found("Not found").into());
    };

    let profile = state
        .user_repo
        .find_profile_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(profile))
}

fn parse_user_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// POST /change_password
///
/// An unknown `user_id` updates nothing and still succeeds.
pub async fn change_password(
    State(state): State<AppState>,
    fields: FormFields,
) -> ApiResult<Json<MessageResponse>> {
    let req = ChangePasswordRequest::try_from(fields)?;

    let hash = state.password_hasher.hash_password(&req.new_password)?;
    let rows_affected = state.user_repo.update_password(req.user_id, &hash).await?;

    info!(user_id = req.user_id, rows_affected, "Password changed");

    Ok(Json(MessageResponse::new("Password changed successfully")))
}
