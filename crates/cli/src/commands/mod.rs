//! Command handlers for each cmctl subcommand.
//!
//! Responsibilities:
//! - Shared plumbing for handlers: client construction, `--wait` handling,
//!   and turning unsuccessful commands into errors.
//!
//! Invariants:
//! - Every wait carries the process-wide cancellation token.
//! - A waited-on command that finishes without success fails the process with
//!   `CommandFailed` after its final state has been printed.

use anyhow::Result;
use clap::Args;
use cm_client::{BulkCommandList, CancellationToken, ClouderaManagerClient, Command, WaitOptions};
use cm_config::Config;
use tracing::{info, warn};

use crate::error::CommandFailed;
use crate::formatters::{Formatter, output_result};

pub mod clusters;
pub mod command;
pub mod echo;
pub mod events;
pub mod hosts;
pub mod roles;
pub mod services;
pub mod users;
pub mod version;

/// `--wait` flag shared by commands that start server-side work.
#[derive(Debug, Clone, Copy, Args)]
pub struct WaitArgs {
    /// Block until the submitted command(s) finish
    #[arg(long)]
    pub wait: bool,
}

/// Build an API client from the resolved configuration.
pub fn build_client(config: &Config) -> Result<ClouderaManagerClient> {
    Ok(ClouderaManagerClient::builder().from_config(config).build()?)
}

/// Wait options from the configured polling defaults plus the cancel token.
pub fn wait_options(client: &ClouderaManagerClient, cancel: &CancellationToken) -> WaitOptions {
    client.wait_options().with_cancellation(cancel.clone())
}

/// Print a submitted command, or wait for it and print its final state.
pub async fn report_command(
    client: &ClouderaManagerClient,
    submitted: Command,
    wait: WaitArgs,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    if !wait.wait {
        output_result(&formatter.format_command(&submitted)?);
        return Ok(());
    }

    info!(command_id = submitted.id, name = %submitted.name, "Waiting for command");
    let finished = client
        .wait_for_command(&submitted, &wait_options(client, cancel))
        .await?;
    output_result(&formatter.format_command(&finished)?);
    ensure_succeeded(std::slice::from_ref(&finished))
}

/// Print a bulk submission, or wait for its commands and print their final states.
///
/// Rejected submissions never became commands; they are reported as warnings
/// and do not affect the exit code.
pub async fn report_bulk(
    client: &ClouderaManagerClient,
    bulk: BulkCommandList,
    wait: WaitArgs,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    if !wait.wait {
        output_result(&formatter.format_bulk(&bulk)?);
        return Ok(());
    }

    for error in &bulk.errors {
        warn!(%error, "Submission rejected by server");
    }
    info!(count = bulk.items.len(), "Waiting for bulk commands");
    let finished = client
        .wait_for_bulk(&bulk, &wait_options(client, cancel))
        .await?;
    output_result(&formatter.format_commands(&finished)?);
    ensure_succeeded(&finished)
}

/// Fail with the first command that did not succeed.
pub fn ensure_succeeded(commands: &[Command]) -> Result<()> {
    match commands.iter().find(|c| !c.succeeded()) {
        Some(failed) => Err(CommandFailed {
            id: failed.id,
            name: failed.name.clone(),
            message: failed
                .result_message
                .clone()
                .unwrap_or_else(|| "no result message".to_string()),
        }
        .into()),
        None => Ok(()),
    }
}
