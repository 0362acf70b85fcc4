//! Configuration inspection commands.

use clap::{Args, Subcommand};

use bistro_core::error::AppError;

use super::Cli;
use crate::output;

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
    /// Show the effective configuration (secrets masked)
    Show,
    /// Validate the effective configuration
    Validate,
}

/// Execute config commands
pub async fn execute(args: &ConfigArgs, cli: &Cli) -> Result<(), AppError> {
    match &args.command {
        ConfigCommand::Show => {
            let mut config = cli.load_config()?;
            config.database.url = mask_password(&config.database.url);
            config.auth.jwt_secret = "********".to_string();
            output::print_item(&config, cli.format);
        }
        ConfigCommand::Validate => {
            let config = cli.load_config()?;
            if let Err(e) = config.validate() {
                output::print_error(&format!("Configuration invalid: {}", e.message));
                return Err(e);
            }
            output::print_success("Configuration is valid");
            output::print_kv(
                "Server",
                &format!("{}:{}", config.server.host, config.server.port),
            );
            output::print_kv("Database", &mask_password(&config.database.url));
            output::print_kv("Log level", &config.logging.level);
            if config.auth.jwt_secret == "change-me-before-deploying-bistro" {
                output::print_warning("auth.jwt_secret still has its default value");
            }
        }
    }

    Ok(())
}

/// Mask password in database URL for display
fn mask_password(url: &str) -> String {
    let Some(scheme_end) = url.find("://").map(|i| i + 3) else {
        return url.to_string();
    };
    let Some(at) = url[scheme_end..].find('@').map(|i| i + scheme_end) else {
        return url.to_string();
    };
    match url[scheme_end..at].find(':') {
        Some(colon) => format!("{}:****{}", &url[..scheme_end + colon], &url[at..]),
        None => url.to_string(),
    }
}
