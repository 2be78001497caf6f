//! Configuration inspection commands.

use clap::{Args, Subcommand};

use crate::output::{self, OutputFormat};
use scanbench_core::config::AppConfig;
use scanbench_core::error::AppError;

/// Arguments for config commands
#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Config subcommand
    #[command(subcommand)]
    pub command: ConfigCommand,
}

/// Config subcommands
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show the configuration exposed at `/config`
    Show,
}

/// Execute config commands
pub fn execute(args: &ConfigArgs, config: &AppConfig, format: OutputFormat) -> Result<(), AppError> {
    match args.command {
        ConfigCommand::Show => {
            let info = config.public_info();
            let target = super::gateway(config)?.target().to_string();

            output::print_pairs(
                &info,
                &[
                    ("db_host", info.db_host.clone()),
                    ("db_name", info.db_name.clone()),
                    ("app_env", info.app_env.clone()),
                    ("database", target),
                    ("listen", config.server.bind_address()),
                    ("upload_dir", config.storage.upload_dir.clone()),
                ],
                format,
            );
        }
    }

    Ok(())
}
