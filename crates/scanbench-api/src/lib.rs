//! # scanbench-api
//!
//! HTTP API layer for ScanBench built on Axum.
//!
//! Provides the endpoints, request logging and CORS middleware, the
//! JSON-or-form body extractor, DTOs, and error-to-response mapping.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use error::{ApiError, ApiResult};
pub use router::build_router;
pub use state::AppState;
