//! Per-request database connections.

use std::str::FromStr;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sqlx::any::{AnyConnectOptions, install_default_drivers};
use sqlx::{AnyConnection, Connection};
use tracing::{debug, info, warn};

use scanbench_core::config::DatabaseConfig;
use scanbench_core::error::{AppError, ErrorKind};
use scanbench_core::result::AppResult;

/// Everything but the URL unreserved set.
const URL_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Opens database connections on demand.
///
/// Holds only the parsed connection options; it never caches or shares a
/// live connection between callers.
#[derive(Debug, Clone)]
pub struct DatabaseGateway {
    /// Parsed options, or the reason the discrete settings could not form a
    /// valid target. The latter is reported on every connect attempt.
    options: Result<AnyConnectOptions, String>,
    /// Connection target with the password masked, for logs.
    target: String,
}

impl DatabaseGateway {
    /// Build a gateway from configuration.
    ///
    /// A configured `url` wins and must parse; otherwise a MySQL target is
    /// assembled from the discrete host/user/password/name settings. Bad
    /// discrete settings surface as connection failures, not here. Nothing
    /// is validated against the server.
    pub fn new(config: &DatabaseConfig) -> AppResult<Self> {
        install_default_drivers();

        let (options, target) = match &config.url {
            Some(url) => {
                let options = AnyConnectOptions::from_str(url).map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Configuration,
                        format!("Invalid database URL: {e}"),
                        e,
                    )
                })?;
                (Ok(options), mask_password(url))
            }
            None => {
                let url = mysql_url(config, &encode_component(&config.password));
                let options = AnyConnectOptions::from_str(&url).map_err(|e| e.to_string());
                (options, mysql_url(config, "****"))
            }
        };

        match &options {
            Ok(_) => info!(
                target_db = %target,
                "Database gateway configured (connection per request)"
            ),
            Err(reason) => warn!(
                target_db = %target,
                %reason,
                "Database settings do not form a valid target"
            ),
        }
        Ok(Self { options, target })
    }

    /// Masked description of the connection target.
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Open a fresh connection.
    ///
    /// Callers own the connection and must hand it back to [`close`] once
    /// their statement has run, whatever its outcome.
    pub async fn connect(&self) -> AppResult<AnyConnection> {
        let options = self.options.as_ref().map_err(|reason| {
            AppError::new(
                ErrorKind::Database,
                format!("Invalid database settings: {reason}"),
            )
        })?;

        AnyConnection::connect_with(options)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to connect to database: {e}"),
                    e,
                )
            })
    }

    /// Check connectivity by opening and immediately closing a connection.
    pub async fn ping(&self) -> AppResult<()> {
        let conn = self.connect().await?;
        close(conn).await;
        Ok(())
    }
}

/// Close a connection, logging (not propagating) a failed goodbye.
///
/// The statement result has already been captured by the time this runs,
/// so a close failure must not mask it.
pub async fn close(conn: AnyConnection) {
    if let Err(e) = conn.close().await {
        debug!(error = %e, "Error while closing database connection");
    }
}

/// Assemble a MySQL URL from discrete settings.
///
/// `password` is inserted verbatim so callers can pass either the encoded
/// secret or a mask. The host is left as written; a host the URL grammar
/// rejects makes the whole target invalid.
fn mysql_url(config: &DatabaseConfig, password: &str) -> String {
    let host = if config.host.contains(':') && !config.host.starts_with('[') {
        format!("[{}]", config.host)
    } else {
        config.host.clone()
    };
    format!(
        "mysql://{}:{}@{}:{}/{}",
        encode_component(&config.user),
        password,
        host,
        config.port,
        encode_component(&config.name)
    )
}

fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URL_COMPONENT).to_string()
}

/// Mask the password portion of a database URL for safe logging.
fn mask_password(url: &str) -> String {
    if let Some(at_pos) = url.find('@') {
        if let Some(colon_pos) = url[..at_pos].rfind(':') {
            let scheme_end = url.find("://").map(|p| p + 3).unwrap_or(0);
            if colon_pos > scheme_end {
                return format!("{}:****@{}", &url[..colon_pos], &url[at_pos + 1..]);
            }
        }
    }
    url.to_string()
}
