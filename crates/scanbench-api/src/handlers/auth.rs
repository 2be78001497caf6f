//! Login handler.

use axum::Json;
use axum::extract::State;
use tracing::{info, warn};

use scanbench_core::error::AppError;

use crate::dto::request::LoginRequest;
use crate::dto::response::LoginResponse;
use crate::error::ApiResult;
use crate::extractors::FormFields;
use crate::state::AppState;

/// Same message for an unknown user and a wrong password.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

/// POST /login
///
/// Verifies credentials only; no session or token is issued.
pub async fn login(
    State(state): State<AppState>,
    fields: FormFields,
) -> ApiResult<Json<LoginResponse>> {
    let req = LoginRequest::try_from(fields)?;

    let Some(user) = state
        .user_repo
        .find_credentials_by_username(&req.username)
        .await?
    else {
        warn!("Login rejected: unknown username");
        return Err(AppError::authentication(INVALID_CREDENTIALS).into());
    };

    if !state
        .password_hasher
        .verify_password(&req.password, &user.password)?
    {
        warn!(user_id = user.id, "Login rejected: password mismatch");
        return Err(AppError::authentication(INVALID_CREDENTIALS).into());
    }

    info!(user_id = user.id, "Login succeeded");

    Ok(Json(LoginResponse {
        message: "Login success".to_string(),
        user: user.into_profile(),
    }))
}
