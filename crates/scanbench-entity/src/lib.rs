//! # scanbench-entity
//!
//! Domain entity models for ScanBench. Database rows derive
//! `sqlx::FromRow`; values returned to HTTP callers derive `Serialize`.

pub mod upload;
pub mod user;

pub use upload::StoredUpload;
pub use user::{User, UserProfile};
