//! Database migration commands.

use clap::{Args, Subcommand};

use bistro_core::error::AppError;
use bistro_database::run_migrations;

use super::Cli;
use crate::output;

/// Arguments for the migrate command
#[derive(Debug, Args)]
pub struct MigrateArgs {
    /// Migration subcommand
    #[command(subcommand)]
    pub command: MigrateCommand,
}

/// Migration subcommands
#[derive(Debug, Subcommand)]
pub enum MigrateCommand {
    /// Run all pending migrations
    Run,
}

/// Execute migration commands
pub async fn execute(args: &MigrateArgs, cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    let db = super::connect(&config).await?;

    match &args.command {
        MigrateCommand::Run => {
            println!("Running database migrations...");
            run_migrations(db.pool()).await?;
            output::print_success("All migrations applied successfully.");
        }
    }

    db.close().await;
    Ok(())
}
