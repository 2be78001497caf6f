//! CLI command definitions and dispatch.

pub mod config;
pub mod db;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use crate::output::OutputFormat;
use scanbench_core::config::AppConfig;
use scanbench_core::error::AppError;
use scanbench_database::DatabaseGateway;

/// ScanBench: demonstration API for scanner benchmarking
#[derive(Debug, Parser)]
#[command(name = "scanbench", version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Database schema management
    Db(db::DbArgs),
    /// User management
    User(user::UserArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
}

impl Cli {
    /// Whether the server will run, which wants more verbose default logging
    pub fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve(_))
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let app_config = AppConfig::load()?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, app_config).await,
            Commands::Db(args) => db::execute(args, &app_config).await,
            Commands::User(args) => user::execute(args, &app_config, self.format).await,
            Commands::Config(args) => config::execute(args, &app_config, self.format),
        }
    }
}

/// Helper: build the database gateway from config
pub fn gateway(config: &AppConfig) -> Result<DatabaseGateway, AppError> {
    DatabaseGateway::new(&config.database)
}
