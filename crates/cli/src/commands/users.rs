//! Users command implementation.
//!
//! Does NOT handle:
//! - Creating or deleting users; passwords never pass through the CLI.

use anyhow::Result;
use clap::Subcommand;
use cm_config::Config;

use crate::formatters::{Formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum UsersCommand {
    /// List all users
    List,
}

pub async fn run(config: Config, command: UsersCommand, formatter: &dyn Formatter) -> Result<()> {
    let client = super::build_client(&config)?;
    match command {
        UsersCommand::List => {
            let users = client.list_users().await?;
            output_result(&formatter.format_users(&users.items)?);
        }
    }
    Ok(())
}
