//! Convenience result type alias for ScanBench.

use crate::error::AppError;

/// A specialized `Result` type for ScanBench operations.
pub type AppResult<T> = Result<T, AppError>;
