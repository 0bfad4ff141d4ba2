//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to the matching command handler.
//! - Resolve the output formatter once for all handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Configuration loading (see `main()`).
//!
//! Invariants:
//! - Handlers that start server-side work receive the cancellation token.

use anyhow::Result;
use cm_client::CancellationToken;
use cm_config::Config;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::formatters::{OutputFormat, get_formatter};

/// Dispatch CLI commands to their respective handlers.
pub(crate) async fn run_command(
    cli: Cli,
    config: Config,
    cancel_token: &CancellationToken,
) -> Result<()> {
    let format: OutputFormat = cli.output.parse()?;
    let formatter = get_formatter(format);
    let formatter = formatter.as_ref();

    match cli.command {
        Commands::Echo { message } => {
            commands::echo::run(config, &message, formatter).await?;
        }
        Commands::Version => {
            commands::version::run(config, formatter).await?;
        }
        Commands::Clusters { command } => {
            commands::clusters::run(config, command, formatter, cancel_token).await?;
        }
        Commands::Services { command } => {
            commands::services::run(config, command, formatter, cancel_token).await?;
        }
        Commands::Roles { command } => {
            commands::roles::run(config, command, formatter, cancel_token).await?;
        }
        Commands::Hosts { command } => {
            commands::hosts::run(config, command, formatter).await?;
        }
        Commands::Events { command } => {
            commands::events::run(config, command, formatter).await?;
        }
        Commands::Users { command } => {
            commands::users::run(config, command, formatter).await?;
        }
        Commands::Commands { command } => {
            commands::command::run(config, command, formatter, cancel_token).await?;
        }
    }

    Ok(())
}
