//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::error;

use scanbench_core::error::{AppError, ErrorKind};

use crate::dto::response::MessageResponse;

/// Body used for every failure that is not the caller's fault.
const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Handler error wrapper so `?` on an [`AppError`] yields a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

/// Result type returned by handlers.
pub type ApiResult<T> = Result<T, ApiError>;

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl ApiError {
    /// HTTP status for the wrapped error kind.
    pub fn status(&self) -> StatusCode {
        match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Authentication => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Database
            | ErrorKind::Storage
            | ErrorKind::Configuration
            | ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = if self.0.kind.is_client_error() {
            self.0.message
        } else {
            error!(
                kind = %self.0.kind,
                error = %self.0.message,
                cause = %self.0.root_cause_text(),
                "Request failed"
            );
            INTERNAL_ERROR_MESSAGE.to_string()
        };

        (status, Json(MessageResponse { message })).into_response()
    }
}
