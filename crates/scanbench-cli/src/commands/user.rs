//! User management CLI commands.
//!
//! The HTTP surface has no registration endpoint, so accounts are seeded here.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use crate::output::{self, OutputFormat};
use scanbench_auth::PasswordHasher;
use scanbench_core::config::AppConfig;
use scanbench_core::error::AppError;
use scanbench_database::UserRepository;
use scanbench_entity::user::UserProfile;

/// Arguments for user commands
#[derive(Debug, Args)]
pub struct UserArgs {
    /// User subcommand
    #[command(subcommand)]
    pub command: UserCommand,
}

/// User subcommands
#[derive(Debug, Subcommand)]
pub enum UserCommand {
    /// List all users
    List,
    /// Create a user with a hashed password
    Create {
        /// Username
        username: String,
        /// Plaintext password (hashed before storage)
        #[arg(short, long)]
        password: String,
        /// Email address
        #[arg(short, long)]
        email: Option<String>,
    },
    /// Replace a user's password
    SetPassword {
        /// User ID
        id: i64,
        /// New plaintext password (hashed before storage)
        #[arg(short, long)]
        password: String,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    /// User ID
    id: i64,
    /// Username
    username: String,
    /// Email
    email: String,
}

impl From<UserProfile> for UserRow {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            username: profile.username,
            email: profile.email.unwrap_or_default(),
        }
    }
}

/// Execute user commands
pub async fn execute(
    args: &UserArgs,
    config: &AppConfig,
    format: OutputFormat,
) -> Result<(), AppError> {
    let user_repo = UserRepository::new(super::gateway(config)?);
    let hasher = PasswordHasher::new();

    match &args.command {
        UserCommand::List => {
            let rows: Vec<UserRow> = user_repo
                .list_profiles()
                .await?
                .into_iter()
                .map(UserRow::from)
                .collect();

            output::print_list(&rows, format);
        }
        UserCommand::Create {
            username,
            password,
            email,
        } => {
            if username.is_empty() || password.is_empty() {
                return Err(AppError::validation("username & password required"));
            }

            let hash = hasher.hash_password(password)?;
            let id = user_repo.create(username, &hash, email.as_deref()).await?;

            output::print_success(&format!("User '{username}' created with id {id}"));
        }
        UserCommand::SetPassword { id, password } => {
            if password.is_empty() {
                return Err(AppError::validation("password required"));
            }

            let hash = hasher.hash_password(password)?;
            let rows = user_repo.update_password(*id, &hash).await?;

            if rows == 0 {
                return Err(AppError::not_found(format!("User {id} not found")));
            }
            output::print_success(&format!("Password updated for user {id}"));
        }
    }

    Ok(())
}
