//! Local filesystem upload directory.

use std::path::PathBuf;

use bytes::Bytes;
use tokio::fs;
use tracing::{debug, info};

use scanbench_core::config::StorageConfig;
use scanbench_core::error::{AppError, ErrorKind};
use scanbench_core::result::AppResult;
use scanbench_entity::upload::StoredUpload;

/// Flat directory that accepted uploads are written into.
///
/// There is no locking: two uploads with the same sanitized name race and
/// the last write wins.
#[derive(Debug, Clone)]
pub struct UploadStore {
    dir: PathBuf,
}

impl UploadStore {
    /// Create a store rooted at `dir`. Nothing touches the disk yet.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Create a store from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.upload_dir)
    }

    /// Create the upload directory if it does not exist.
    pub async fn ensure_dir(&self) -> AppResult<()> {
        fs::create_dir_all(&self.dir).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to create upload directory: {}", self.dir.display()),
                e,
            )
        })?;
        info!(path = %self.dir.display(), "Upload directory ready");
        Ok(())
    }

    /// Write `data` under `sanitized_name`, replacing any existing file.
    ///
    /// `sanitized_name` must already be a flat name produced by
    /// [`crate::secure_filename`]; names containing a separator are refused.
    pub async fn save(
        &self,
        original_name: &str,
        sanitized_name: &str,
        data: Bytes,
    ) -> AppResult<StoredUpload> {
        if sanitized_name.is_empty() || sanitized_name.contains(['/', '\\']) {
            return Err(AppError::validation("Invalid filename"));
        }

        let path = self.dir.join(sanitized_name);
        fs::write(&path, &data).await.map_err(|e| {
            AppError::with_source(
                ErrorKind::Storage,
                format!("Failed to write upload: {}", path.display()),
                e,
            )
        })?;

        debug!(path = %path.display(), bytes = data.len(), "Upload written");

        Ok(StoredUpload {
            original_name: original_name.to_string(),
            sanitized_name: sanitized_name.to_string(),
            path,
            size: data.len() as u64,
        })
    }
}
