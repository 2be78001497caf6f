//! Request DTOs.
//!
//! Bodies arrive as JSON or form-encoded, so the POST DTOs are built from
//! [`FormFields`] rather than deserialized directly.

use scanbench_core::error::AppError;

use crate::extractors::FormFields;

/// Login request.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Exact username.
    pub username: String,
    /// Plaintext password.
    pub password: String,
}

impl TryFrom<FormFields> for LoginRequest {
    type Error = AppError;

    fn try_from(fields: FormFields) -> Result<Self, Self::Error> {
        match (fields.text("username"), fields.text("password")) {
            (Some(username), Some(password)) => Ok(Self {
                username: username.to_string(),
                password: password.to_string(),
            }),
            _ => Err(AppError::validation("username & password required")),
        }
    }
}

/// Change password request.
#[derive(Debug, Clone)]
pub struct ChangePasswordRequest {
    /// Target user. Never zero.
    pub user_id: i64,
    /// New plaintext password.
    pub new_password: String,
}

impl TryFrom<FormFields> for ChangePasswordRequest {
    type Error = AppError;

    fn try_from(fields: FormFields) -> Result<Self, Self::Error> {
        let user_id = fields.integer("user_id").filter(|id| *id != 0);

        match (user_id, fields.text("new_password")) {
            (Some(user_id), Some(new_password)) => Ok(Self {
                user_id,
                new_password: new_password.to_string(),
            }),
            _ => Err(AppError::validation("user_id & new_password required")),
        }
    }
}

/// Search query parameters.
#[derive(Debug, Clone, Default)]
pub struct SearchParams {
    /// Username substring; missing means empty.
    pub q: String,
}

impl From<Vec<(String, String)>> for SearchParams {
    /// The first `q` wins; repeats and unknown keys are ignored.
    fn from(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find_map(|(key, value)| (key == "q").then_some(value))
            .unwrap_or_default();
        Self { q }
    }
}
