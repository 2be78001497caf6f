//! Stored upload model.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Result of persisting one uploaded file.
///
/// Uploads are transient: nothing is recorded in the database, and a later
/// upload with the same sanitized name replaces the file on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredUpload {
    /// Name exactly as supplied by the client.
    pub original_name: String,
    /// Filesystem-safe name the content was written under.
    pub sanitized_name: String,
    /// Path written, relative to the working directory.
    pub path: PathBuf,
    /// Number of bytes written.
    pub size: u64,
}
