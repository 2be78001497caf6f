//! Extension allow-list for uploads.

use std::collections::HashSet;

use scanbench_core::config::StorageConfig;

/// Set of lowercase file extensions accepted for upload.
#[derive(Debug, Clone)]
pub struct AllowList {
    extensions: HashSet<String>,
}

impl AllowList {
    /// Build an allow-list from explicit extensions (case-insensitive).
    pub fn new<I, S>(extensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extensions: extensions
                .into_iter()
                .map(|e| e.as_ref().trim_start_matches('.').to_ascii_lowercase())
                .collect(),
        }
    }

    /// Build the allow-list from storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.allowed_extensions)
    }

    /// Whether `filename` carries an allowed extension.
    ///
    /// Checked on the name as the client sent it, before sanitization. The
    /// extension is whatever follows the last `.`, so `archive.tar.gz` is a
    /// `gz` file and a name without a dot is always rejected.
    pub fn permits(&self, filename: &str) -> bool {
        filename
            .rsplit_once('.')
            .is_some_and(|(_, ext)| self.extensions.contains(&ext.to_lowercase()))
    }
}

impl Default for AllowList {
    fn default() -> Self {
        Self::from_config(&StorageConfig::default())
    }
}
