//! CLI command definitions and dispatch.

pub mod admin;
pub mod config;
pub mod migrate;
pub mod seed;
pub mod serve;
pub mod user;

use clap::{Parser, Subcommand};

use bistro_core::config::AppConfig;
use bistro_core::error::AppError;
use bistro_database::DatabasePool;

use crate::output::OutputFormat;

/// Bistro: restaurant reservation API administration
#[derive(Debug, Parser)]
#[command(name = "bistro", version, about, long_about = None)]
pub struct Cli {
    /// Explicit configuration file (skips the default + environment overlay)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Environment overlay to load from `config/{env}.toml`
    #[arg(short, long, env = "BISTRO_ENV", default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
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
    /// Database migration management
    Migrate(migrate::MigrateArgs),
    /// Administrator accounts
    Admin(admin::AdminArgs),
    /// User accounts
    User(user::UserArgs),
    /// Configuration inspection
    Config(config::ConfigArgs),
    /// Load demo data
    Seed(seed::SeedArgs),
}

impl Cli {
    /// Whether this invocation starts the server.
    pub fn is_serve(&self) -> bool {
        matches!(self.command, Commands::Serve(_))
    }

    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        match &self.command {
            Commands::Serve(args) => serve::execute(args, self).await,
            Commands::Migrate(args) => migrate::execute(args, self).await,
            Commands::Admin(args) => admin::execute(args, self).await,
            Commands::User(args) => user::execute(args, self).await,
            Commands::Config(args) => config::execute(args, self).await,
            Commands::Seed(args) => seed::execute(args, self).await,
        }
    }

    /// Load configuration from the explicit file or the environment overlay.
    pub fn load_config(&self) -> Result<AppConfig, AppError> {
        match &self.config {
            Some(path) => AppConfig::from_file(path),
            None => AppConfig::load(&self.env),
        }
    }
}

/// Helper: connect to the configured database
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    DatabasePool::connect(&config.database).await
}

/// Helper: read a value from the flag or prompt for it.
pub fn prompt_text(value: &Option<String>, prompt: &str) -> Result<String, AppError> {
    match value {
        Some(v) => Ok(v.clone()),
        None => dialoguer::Input::new()
            .with_prompt(prompt)
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_admin_create() {
        let cli = Cli::try_parse_from([
            "bistro",
            "--env",
            "test",
            "admin",
            "create",
            "--email",
            "chef@bistro.test",
            "--password",
            "secret123",
        ])
        .unwrap();
        assert_eq!(cli.env, "test");
        assert!(!cli.is_serve());
    }

    #[test]
    fn test_parses_serve_overrides() {
        let cli = Cli::try_parse_from(["bistro", "serve", "--port", "9000", "--no-migrate"]).unwrap();
        assert!(cli.is_serve());
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, Some(9000));
                assert!(args.no_migrate);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parses_seed_flags() {
        let cli = Cli::try_parse_from(["bistro", "seed", "--users", "3", "--force"]).unwrap();
        match cli.command {
            Commands::Seed(args) => {
                assert_eq!(args.users, 3);
                assert!(args.force);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
