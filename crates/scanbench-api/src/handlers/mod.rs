//! HTTP request handlers, one module per endpoint family.

pub mod auth;
pub mod config;
pub mod docs;
pub mod health;
pub mod search;
pub mod upload;
pub mod user;

use scanbench_core::error::AppError;

use crate::error::ApiError;

/// Fallback for unmatched routes.
pub async fn not_found() -> ApiError {
    AppError::not_found("Not found").into()
}
