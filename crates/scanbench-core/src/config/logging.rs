//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Logging and tracing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    /// Unset means `info`, or `debug` when the server runs in debug mode.
    #[serde(default)]
    pub level: Option<String>,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: None,
            format: default_format(),
        }
    }
}

impl LoggingConfig {
    /// Resolve the filter directive to use when `RUST_LOG` is not set.
    pub fn effective_level(&self, debug: bool) -> String {
        match &self.level {
            Some(level) if !level.trim().is_empty() => level.clone(),
            _ if debug => "debug".to_string(),
            _ => "info".to_string(),
        }
    }
}

fn default_format() -> String {
    "json".to_string()
}
