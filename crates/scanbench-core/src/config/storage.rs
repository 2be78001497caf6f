//! Upload directory and static document configuration.

use serde::{Deserialize, Serialize};

/// Filesystem locations used by the HTTP surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Flat directory receiving uploaded files, relative to the working directory.
    #[serde(default = "default_upload_dir")]
    pub upload_dir: String,
    /// Lowercase file extensions accepted by the upload endpoint.
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
    /// Location of the API document served at `/openapi.json`.
    #[serde(default = "default_openapi_path")]
    pub openapi_path: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            upload_dir: default_upload_dir(),
            allowed_extensions: default_allowed_extensions(),
            openapi_path: default_openapi_path(),
        }
    }
}

fn default_upload_dir() -> String {
    "uploads".to_string()
}

fn default_allowed_extensions() -> Vec<String> {
    ["txt", "log", "csv", "json"]
        .iter()
        .map(|ext| ext.to_string())
        .collect()
}

fn default_openapi_path() -> String {
    "openapi.yaml".to_string()
}
