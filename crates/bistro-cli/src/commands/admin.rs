//! Administrator account commands.

use std::sync::Arc;

use clap::{Args, Subcommand};

use bistro_auth::password::{PasswordHasher, PasswordValidator};
use bistro_auth::rbac::RbacEnforcer;
use bistro_core::error::AppError;
use bistro_core::traits::RandomIdGenerator;
use bistro_database::repositories::UserRepository;
use bistro_service::user::{AdminUserService, NewAdmin};

use super::Cli;
use crate::output;

/// Arguments for admin commands
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Admin subcommand
    #[command(subcommand)]
    pub command: AdminCommand,
}

/// Admin subcommands
#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Create a new administrator
    Create {
        /// Email (prompted if omitted)
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted if omitted)
        #[arg(long)]
        password: Option<String>,
        /// Given name
        #[arg(long)]
        first_name: Option<String>,
        /// Family name
        #[arg(long)]
        last_name: Option<String>,
    },
}

/// Execute admin commands
pub async fn execute(args: &AdminArgs, cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    let db = super::connect(&config).await?;

    let service = AdminUserService::new(
        Arc::new(UserRepository::new(db.pool().clone())),
        Arc::new(PasswordHasher::new()),
        Arc::new(PasswordValidator::new(&config.auth)),
        Arc::new(RbacEnforcer::new()),
        Arc::new(RandomIdGenerator),
    );

    match &args.command {
        AdminCommand::Create {
            email,
            password,
            first_name,
            last_name,
        } => {
            let email = super::prompt_text(email, "Admin email")?;
            let password = match password {
                Some(p) => p.clone(),
                None => dialoguer::Password::new()
                    .with_prompt("Admin password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()
                    .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
            };

            let user = service
                .create_admin(NewAdmin {
                    email,
                    password,
                    first_name: first_name.clone(),
                    last_name: last_name.clone(),
                })
                .await?;

            output::print_success(&format!(
                "Administrator '{}' created (id: {})",
                user.email, user.id
            ));
        }
    }

    db.close().await;
    Ok(())
}
