//! User listing commands.

use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use bistro_core::error::AppError;
use bistro_core::types::pagination::PageRequest;
use bistro_database::repositories::UserRepository;
use bistro_entity::user::User;

use super::Cli;
use crate::output;

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
    /// List users
    List {
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u64,
        /// Users per page
        #[arg(long, default_value_t = 50)]
        page_size: u64,
    },
}

/// User display row for table output
#[derive(Debug, Serialize, Tabled)]
struct UserRow {
    id: String,
    email: String,
    name: String,
    role: String,
    created_at: String,
}

impl From<&User> for UserRow {
    fn from(u: &User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email.clone(),
            name: u.display_name(),
            role: u.role.as_str().to_string(),
            created_at: u.created_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

/// Execute user commands
pub async fn execute(args: &UserArgs, cli: &Cli) -> Result<(), AppError> {
    let config = cli.load_config()?;
    let db = super::connect(&config).await?;
    let user_repo = UserRepository::new(db.pool().clone());

    match &args.command {
        UserCommand::List { page, page_size } => {
            let result = user_repo
                .find_all(&PageRequest::new(*page, *page_size))
                .await?;
            let rows: Vec<UserRow> = result.items.iter().map(UserRow::from).collect();
            output::print_list(&rows, cli.format);
            if cli.format == output::OutputFormat::Table {
                println!(
                    "Page {}/{} ({} users)",
                    result.page, result.total_pages, result.total_items
                );
            }
        }
    }

    db.close().await;
    Ok(())
}
