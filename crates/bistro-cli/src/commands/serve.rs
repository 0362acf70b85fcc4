//! Start the Bistro server.

use clap::Args;
use tracing_subscriber::EnvFilter;

use bistro_core::config::AppConfig;
use bistro_core::error::AppError;
use bistro_database::run_migrations;

use super::Cli;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, cli: &Cli) -> Result<(), AppError> {
    let mut config = cli.load_config()?;
    config.validate()?;

    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    init_logging(&config);

    let db = super::connect(&config).await?;
    if !args.no_migrate {
        run_migrations(db.pool()).await?;
    }

    bistro_api::run_server(config, db).await
}

fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    if config.logging.format == "json" {
        builder.json().init();
    } else {
        builder.pretty().init();
    }
}
