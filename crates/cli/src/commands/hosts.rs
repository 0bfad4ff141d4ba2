//! Hosts command implementation.

use anyhow::Result;
use clap::Subcommand;
use cm_config::Config;

use crate::formatters::{Formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum HostsCommand {
    /// List all hosts known to Cloudera Manager
    List,
}

pub async fn run(config: Config, command: HostsCommand, formatter: &dyn Formatter) -> Result<()> {
    let client = super::build_client(&config)?;
    match command {
        HostsCommand::List => {
            let hosts = client.list_hosts().await?;
            output_result(&formatter.format_hosts(&hosts.items)?);
        }
    }
    Ok(())
}
