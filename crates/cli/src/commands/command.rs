//! Commands subcommand implementation.
//!
//! Responsibilities:
//! - Show or abort a command by ID
//! - Wait for one or more commands by ID
//!
//! Invariants:
//! - `wait` prints results in the order the IDs were given.
//! - Unknown IDs fail before any polling starts.

use anyhow::{Context, Result};
use clap::Subcommand;
use cm_client::{CancellationToken, FanOut};
use cm_config::Config;
use futures::future::try_join_all;
use tracing::info;

use super::{build_client, ensure_succeeded, wait_options};
use crate::formatters::{Formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum CommandSubcommand {
    /// Show the current state of a command
    Show {
        /// Command ID
        id: u64,
    },
    /// Abort a running command
    Abort {
        /// Command ID
        id: u64,
    },
    /// Wait until commands finish and print their final state
    Wait {
        /// Command IDs
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
        /// Wait for one command at a time instead of polling all at once
        #[arg(long)]
        sequential: bool,
    },
}

pub async fn run(
    config: Config,
    command: CommandSubcommand,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client(&config)?;

    match command {
        CommandSubcommand::Show { id } => {
            let details = client
                .command_details(id)
                .await
                .with_context(|| format!("Failed to get command {id}"))?;
            output_result(&formatter.format_command(&details)?);
        }
        CommandSubcommand::Abort { id } => {
            let aborted = client
                .abort_command(id)
                .await
                .with_context(|| format!("Failed to abort command {id}"))?;
            output_result(&formatter.format_command(&aborted)?);
        }
        CommandSubcommand::Wait { ids, sequential } => {
            let submitted = try_join_all(ids.iter().map(|id| client.command_details(*id))).await?;

            let mut options = wait_options(&client, cancel);
            if sequential {
                options = options.with_fan_out(FanOut::Sequential);
            }
            info!(count = submitted.len(), "Waiting for commands");

            let finished = client.wait_for_commands(&submitted, &options).await?;
            if let [single] = finished.as_slice() {
                output_result(&formatter.format_command(single)?);
            } else {
                output_result(&formatter.format_commands(&finished)?);
            }
            ensure_succeeded(&finished)?;
        }
    }
    Ok(())
}
