//! Application configuration schemas.
//!
//! Configuration is assembled once at startup via the `config` crate from
//! compiled defaults, optional TOML files, and environment variables. Each
//! sub-module represents a logical configuration section.

pub mod app;
pub mod database;
pub mod logging;
pub mod storage;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

pub use self::app::{ApplicationConfig, CorsConfig, ServerConfig};
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;
pub use self::storage::StorageConfig;

use crate::error::AppError;

/// Plain environment variables mapped onto configuration keys.
///
/// These are the variables documented for deployments; everything else can
/// still be set through `SCANBENCH__SECTION__KEY`.
const ENV_OVERRIDES: &[(&str, &str)] = &[
    ("DB_HOST", "database.host"),
    ("DB_PORT", "database.port"),
    ("DB_USER", "database.user"),
    ("DB_PASS", "database.password"),
    ("DB_NAME", "database.name"),
    ("DATABASE_URL", "database.url"),
    ("APP_ENV", "app.env"),
    ("SERVER_HOST", "server.host"),
    ("SERVER_PORT", "server.port"),
    ("UPLOAD_DIR", "storage.upload_dir"),
    ("OPENAPI_PATH", "storage.openapi_path"),
    ("LOG_LEVEL", "logging.level"),
    ("LOG_FORMAT", "logging.format"),
];

/// The documented plain variables as a configuration source.
#[derive(Debug, Clone)]
struct PlainVariables(config::Map<String, config::Value>);

impl PlainVariables {
    fn from_vars(vars: &HashMap<String, String>) -> Self {
        let origin = "the environment".to_string();
        let mut values = config::Map::new();

        for (var, key) in ENV_OVERRIDES {
            if let Some(value) = vars.get(*var) {
                values.insert(key.to_string(), config::Value::new(Some(&origin), value.clone()));
            }
        }

        // Any value other than a case-insensitive "true" leaves debug off.
        if let Some(value) = vars.get("SERVER_DEBUG") {
            let debug = value.trim().eq_ignore_ascii_case("true");
            values.insert("server.debug".to_string(), config::Value::new(Some(&origin), debug));
        }

        Self(values)
    }
}

impl config::Source for PlainVariables {
    fn clone_into_box(&self) -> Box<dyn config::Source + Send + Sync> {
        Box::new(self.clone())
    }

    fn collect(&self) -> Result<config::Map<String, config::Value>, config::ConfigError> {
        Ok(self.0.clone())
    }
}

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Upload directory and static document settings.
    #[serde(default)]
    pub storage: StorageConfig,
    /// Deployment environment settings.
    #[serde(default)]
    pub app: ApplicationConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// The non-secret configuration subset exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicConfigInfo {
    /// Database host name.
    pub db_host: String,
    /// Database (schema) name.
    pub db_name: String,
    /// Deployment environment label.
    pub app_env: String,
}

impl AppConfig {
    /// Load configuration from files and the process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are ignored.
    pub fn load() -> Result<Self, AppError> {
        let vars: HashMap<String, String> = std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect();
        Self::load_from(&vars)
    }

    /// Load configuration resolving variables from `vars` instead of the
    /// process environment.
    ///
    /// Sources, lowest precedence first: compiled defaults,
    /// `config/default.toml`, `config/{APP_ENV}.toml`, the plain variables in
    /// [`ENV_OVERRIDES`], and finally `SCANBENCH__SECTION__KEY` variables.
    pub fn load_from(vars: &HashMap<String, String>) -> Result<Self, AppError> {
        let env = vars.get("APP_ENV").cloned().unwrap_or_else(app::default_env);

        let builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{env}")).required(false))
            .add_source(PlainVariables::from_vars(vars))
            .add_source(
                config::Environment::with_prefix("SCANBENCH")
                    .separator("__")
                    .try_parsing(true)
                    .source(Some(vars.iter().map(|(k, v)| (k.clone(), v.clone())).collect())),
            );

        Self::finish(builder)
    }

    fn finish(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
    ) -> Result<Self, AppError> {
        let config = builder
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Project the configuration onto the fields that are safe to publish.
    pub fn public_info(&self) -> PublicConfigInfo {
        PublicConfigInfo {
            db_host: self.database.host.clone(),
            db_name: self.database.name.clone(),
            app_env: self.app.env.clone(),
        }
    }
}
