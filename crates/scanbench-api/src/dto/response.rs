//! Response DTOs.

use serde::{Deserialize, Serialize};

use scanbench_entity::user::UserProfile;

/// Single-message body used for confirmations and errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Human-readable message.
    pub message: String,
}

impl MessageResponse {
    /// Build a message body.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Health check result. Exactly one of `db` or `db_error` is present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `error`.
    pub status: String,
    /// `connected` when the database answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db: Option<String>,
    /// Driver error text when it did not.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub db_error: Option<String>,
}

impl HealthResponse {
    /// Healthy body.
    pub fn connected() -> Self {
        Self {
            status: "ok".to_string(),
            db: Some("connected".to_string()),
            db_error: None,
        }
    }

    /// Unhealthy body carrying the underlying error text.
    pub fn failed(db_error: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            db: None,
            db_error: Some(db_error.into()),
        }
    }
}

/// Login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Confirmation message.
    pub message: String,
    /// The authenticated user, without the password hash.
    pub user: UserProfile,
}

/// Search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// Matching users, possibly empty.
    pub results: Vec<UserProfile>,
}

/// Upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// Confirmation message.
    pub message: String,
    /// Relative path the file was written to.
    pub path: String,
}
