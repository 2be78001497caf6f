//! Database schema commands.

use clap::{Args, Subcommand};

use crate::output;
use scanbench_core::config::AppConfig;
use scanbench_core::error::AppError;
use scanbench_database::schema;

/// Arguments for db commands
#[derive(Debug, Args)]
pub struct DbArgs {
    /// Database subcommand
    #[command(subcommand)]
    pub command: DbCommand,
}

/// Database subcommands
#[derive(Debug, Subcommand)]
pub enum DbCommand {
    /// Create the users table if it does not exist
    Init,
    /// Check that the database accepts connections
    Ping,
}

/// Execute db commands
pub async fn execute(args: &DbArgs, config: &AppConfig) -> Result<(), AppError> {
    let gateway = super::gateway(config)?;

    match args.command {
        DbCommand::Init => {
            schema::ensure_schema(&gateway).await?;
            output::print_success(&format!("Schema ready on {}", gateway.target()));
        }
        DbCommand::Ping => {
            gateway.ping().await?;
            output::print_success(&format!("Connected to {}", gateway.target()));
        }
    }

    Ok(())
}
