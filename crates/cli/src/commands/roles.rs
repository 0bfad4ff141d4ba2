//! Roles command implementation.
//!
//! Issues one bulk command for a set of roles of a service. The server answers
//! with the commands it started plus the names it rejected; with `--wait`
//! every started command is polled to completion.

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use cm_client::{CancellationToken, RoleCommand, RoleNameList};
use cm_config::Config;

use super::{WaitArgs, build_client, report_bulk};
use crate::formatters::Formatter;

/// Roles a bulk command targets.
#[derive(Debug, Args)]
pub struct RoleTargets {
    /// Cluster name
    pub cluster: String,
    /// Service name
    pub service: String,
    /// Role names (at least one)
    #[arg(required = true, num_args = 1..)]
    pub roles: Vec<String>,
    #[command(flatten)]
    pub wait: WaitArgs,
}

#[derive(Debug, Subcommand)]
pub enum RolesCommand {
    /// Start roles
    Start(RoleTargets),
    /// Stop roles
    Stop(RoleTargets),
    /// Restart roles
    Restart(RoleTargets),
}

pub async fn run(
    config: Config,
    command: RolesCommand,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    let (role_command, targets) = match command {
        RolesCommand::Start(targets) => (RoleCommand::Start, targets),
        RolesCommand::Stop(targets) => (RoleCommand::Stop, targets),
        RolesCommand::Restart(targets) => (RoleCommand::Restart, targets),
    };

    let client = build_client(&config)?;
    let names: RoleNameList = targets.roles.into_iter().collect();
    let bulk = client
        .role_command(&targets.cluster, &targets.service, role_command, &names)
        .await
        .with_context(|| {
            format!(
                "Failed to {} roles of service '{}'",
                role_command.as_path(),
                targets.service
            )
        })?;
    report_bulk(&client, bulk, targets.wait, formatter, cancel).await
}
