//! Database configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Database connection settings.
///
/// There is no pool: every request opens its own connection from these
/// settings and closes it before returning. No connect timeout is applied
/// beyond the driver's own defaults.
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// MySQL host name.
    #[serde(default = "default_host")]
    pub host: String,
    /// MySQL port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// MySQL user name.
    #[serde(default = "default_user")]
    pub user: String,
    /// MySQL password.
    #[serde(default = "default_password")]
    pub password: String,
    /// Database (schema) name.
    #[serde(default = "default_name")]
    pub name: String,
    /// Full connection URL. When set it replaces the discrete MySQL fields,
    /// e.g. `sqlite://demo.db?mode=rwc`.
    #[serde(default)]
    pub url: Option<String>,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            user: default_user(),
            password: default_password(),
            name: default_name(),
            url: None,
        }
    }
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &"****")
            .field("password", &"****")
            .field("name", &self.name)
            .field("url", &self.url.as_ref().map(|_| "****"))
            .finish()
    }
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    3306
}

fn default_user() -> String {
    "root".to_string()
}

fn default_password() -> String {
    "password".to_string()
}

fn default_name() -> String {
    "demo_app".to_string()
}
