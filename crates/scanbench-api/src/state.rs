//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use scanbench_auth::PasswordHasher;
use scanbench_core::config::AppConfig;
use scanbench_core::result::AppResult;
use scanbench_database::{DatabaseGateway, UserRepository};
use scanbench_storage::{AllowList, UploadStore};

/// Application state containing all shared dependencies.
///
/// Built once at startup and read-only afterwards. Passed to every handler
/// via `State<AppState>`; cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// Opens one database connection per request
    pub gateway: DatabaseGateway,
    /// User repository
    pub user_repo: Arc<UserRepository>,
    /// Password hasher (Argon2)
    pub password_hasher: Arc<PasswordHasher>,
    /// Upload directory
    pub upload_store: Arc<UploadStore>,
    /// Accepted upload extensions
    pub allow_list: Arc<AllowList>,
}

impl AppState {
    /// Wire every dependency from configuration.
    ///
    /// Does not touch the database or the filesystem.
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let gateway = DatabaseGateway::new(&config.database)?;
        let user_repo = Arc::new(UserRepository::new(gateway.clone()));
        let upload_store = Arc::new(UploadStore::from_config(&config.storage));
        let allow_list = Arc::new(AllowList::from_config(&config.storage));

        Ok(Self {
            config: Arc::new(config),
            gateway,
            user_repo,
            password_hasher: Arc::new(PasswordHasher::new()),
            upload_store,
            allow_list,
        })
    }
}
