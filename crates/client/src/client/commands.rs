//! Command API methods for [`ClouderaManagerClient`].
//!
//! # What this module handles:
//! - Fetching and aborting commands by ID
//! - Waiting for commands returned by lifecycle calls
//!
//! # What this module does NOT handle:
//! - Poll scheduling, timeouts, and cancellation (in [`crate::poller`])

use crate::client::ClouderaManagerClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{BulkCommandList, Command};
use crate::poller::{CommandPoller, CommandStatusSource, WaitOptions};

impl ClouderaManagerClient {
    /// Fetch the current snapshot of a command.
    pub async fn command_details(&self, command_id: u64) -> Result<Command> {
        endpoints::get_command(&self.http, &self.api_root, &self.credentials, command_id).await
    }

    /// Ask the server to abort a command.
    pub async fn abort_command(&self, command_id: u64) -> Result<Command> {
        endpoints::abort_command(&self.http, &self.api_root, &self.credentials, command_id).await
    }

    /// A poller that fetches command status through this client.
    pub fn poller(&self) -> CommandPoller<'_, Self> {
        CommandPoller::new(self)
    }

    /// Wait until `command` finishes and return its final snapshot.
    pub async fn wait_for_command(
        &self,
        command: &Command,
        options: &WaitOptions,
    ) -> Result<Command> {
        self.poller().wait_for_one(command, options).await
    }

    /// Wait for every command; results are in input order.
    pub async fn wait_for_commands(
        &self,
        commands: &[Command],
        options: &WaitOptions,
    ) -> Result<Vec<Command>> {
        self.poller().wait_for_many(commands, options).await
    }

    /// Wait for the commands of a bulk submission, skipping rejected items.
    pub async fn wait_for_bulk(
        &self,
        bulk: &BulkCommandList,
        options: &WaitOptions,
    ) -> Result<Vec<Command>> {
        self.poller().wait_for_bulk(bulk, options).await
    }
}

impl CommandStatusSource for ClouderaManagerClient {
    async fn command_status(&self, command_id: u64) -> Result<Command> {
        self.command_details(command_id).await
    }
}
