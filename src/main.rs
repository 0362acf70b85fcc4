//! Bistro Server: restaurant reservation API.
//!
//! Main entry point that loads configuration, connects to the database and
//! starts the HTTP server.

use tracing_subscriber::{EnvFilter, fmt};

use bistro_core::config::AppConfig;
use bistro_core::error::AppError;
use bistro_database::{DatabasePool, run_migrations};

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from file and environment.
///
/// `BISTRO_ENV` picks the `config/{env}.toml` overlay (default
/// `development`).
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("BISTRO_ENV").unwrap_or_else(|_| "development".to_string());
    let config = AppConfig::load(&env)?;
    config.validate()?;
    Ok(config)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Bistro");

    let db = DatabasePool::connect(&config.database).await?;

    tracing::info!("Running database migrations...");
    run_migrations(db.pool()).await?;
    tracing::info!("Database migrations complete");

    bistro_api::run_server(config, db).await
}
