//! Command completion polling.
//!
//! Responsibilities:
//! - Re-fetch command snapshots until the server reports them inactive.
//! - Wait for batches of commands, concurrently or one after another.
//! - Bound waits by an optional timeout and a caller-held cancellation token.
//!
//! Does NOT handle:
//! - Judging success. A finished command is returned whether or not it
//!   succeeded; callers inspect [`Command::success`].
//! - Retrying failed status fetches. The first fetch error ends the wait.
//!
//! Invariants:
//! - The first inactive snapshot is final and is returned as-is.
//! - A wait that observes N active snapshots sleeps N times and fetches N+1 times.
//! - Batch results keep the order of the input commands.
//! - Options are per call; nothing about a wait is shared between calls.

use std::future::Future;
use std::time::Duration;

use cm_config::PollingConfig;
use cm_config::constants::{DEFAULT_MAX_WAIT_SECS, DEFAULT_POLL_INTERVAL_SECS};
use futures::future::try_join_all;
use tokio::time::Instant;
use tracing::{debug, trace};

use crate::cancellation::CancellationToken;
use crate::error::{ClientError, Result};
use crate::models::{BulkCommandList, Command};

/// Anything that can report the current state of a command by ID.
///
/// [`crate::ClouderaManagerClient`] implements this with `GET /commands/{id}`.
pub trait CommandStatusSource {
    fn command_status(&self, command_id: u64) -> impl Future<Output = Result<Command>> + Send;
}

/// How a batch wait schedules its per-command waits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FanOut {
    /// Poll every command at once; total time is that of the slowest command.
    #[default]
    Concurrent,
    /// Wait for each command in turn, in input order.
    Sequential,
}

/// Per-call settings for a wait.
#[derive(Debug, Clone)]
pub struct WaitOptions {
    poll_interval: Duration,
    timeout: Option<Duration>,
    fan_out: FanOut,
    cancel: Option<CancellationToken>,
}

impl Default for WaitOptions {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            timeout: Some(Duration::from_secs(DEFAULT_MAX_WAIT_SECS)),
            fan_out: FanOut::default(),
            cancel: None,
        }
    }
}

impl TryFrom<&PollingConfig> for WaitOptions {
    type Error = ClientError;

    /// Fails with [`ClientError::InvalidConfiguration`] for a zero poll interval.
    fn try_from(config: &PollingConfig) -> Result<Self> {
        let options = Self {
            timeout: config.max_wait,
            ..Self::default()
        };
        options.with_poll_interval(config.poll_interval)
    }
}

impl WaitOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the interval between polls in whole seconds.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfiguration`] if `seconds <= 0`.
    pub fn with_poll_interval_secs(self, seconds: i64) -> Result<Self> {
        if seconds <= 0 {
            return Err(ClientError::InvalidConfiguration(format!(
                "poll interval must be a positive number of seconds, got {seconds}"
            )));
        }
        self.with_poll_interval(Duration::from_secs(seconds.unsigned_abs()))
    }

    /// Set the interval between polls.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidConfiguration`] for a zero interval.
    pub fn with_poll_interval(mut self, interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(ClientError::InvalidConfiguration(
                "poll interval must be greater than zero".to_string(),
            ));
        }
        self.poll_interval = interval;
        Ok(self)
    }

    /// Fail a wait that still sees an active command after `timeout`.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Wait for as long as the server reports the command active.
    pub fn unbounded(mut self) -> Self {
        self.timeout = None;
        self
    }

    pub fn with_fan_out(mut self, fan_out: FanOut) -> Self {
        self.fan_out = fan_out;
        self
    }

    /// Wait for batch members one after another.
    pub fn sequential(self) -> Self {
        self.with_fan_out(FanOut::Sequential)
    }

    /// Abort the wait with [`ClientError::Cancelled`] once `token` is cancelled.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn poll_interval(&self) -> Duration {
        self.poll_interval
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    pub fn fan_out(&self) -> FanOut {
        self.fan_out
    }

    /// Sleep for one poll interval, or fail early if cancelled.
    async fn pause(&self) -> Result<()> {
        match &self.cancel {
            Some(token) => {
                tokio::select! {
                    biased;
                    _ = token.cancelled() => Err(ClientError::Cancelled),
                    _ = tokio::time::sleep(self.poll_interval) => Ok(()),
                }
            }
            None => {
                tokio::time::sleep(self.poll_interval).await;
                Ok(())
            }
        }
    }
}

/// Waits for commands to finish by polling a [`CommandStatusSource`].
#[derive(Debug)]
pub struct CommandPoller<'a, S> {
    source: &'a S,
}

impl<'a, S: CommandStatusSource + Sync> CommandPoller<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Wait until `command` is no longer active and return its final snapshot.
    ///
    /// The snapshot passed in is only used for its ID; the state is always
    /// re-fetched, so a stale snapshot is harmless.
    pub async fn wait_for_one(&self, command: &Command, options: &WaitOptions) -> Result<Command> {
        self.wait_for_id(command.id, options).await
    }

    /// Wait until the command with `command_id` is no longer active.
    pub async fn wait_for_id(&self, command_id: u64, options: &WaitOptions) -> Result<Command> {
        let started = Instant::now();
        let mut polls: u32 = 0;
        debug!(
            command_id,
            poll_interval = ?options.poll_interval,
            timeout = ?options.timeout,
            "Waiting for command"
        );

        loop {
            let snapshot = self.source.command_status(command_id).await?;
            polls += 1;
            trace!(command_id, polls, active = snapshot.active, "Polled command");

            if !snapshot.active {
                debug!(
                    command_id,
                    polls,
                    success = snapshot.success,
                    elapsed = ?started.elapsed(),
                    "Command finished"
                );
                return Ok(snapshot);
            }

            if let Some(timeout) = options.timeout
                && started.elapsed() >= timeout
            {
                debug!(command_id, polls, ?timeout, "Gave up waiting for command");
                return Err(ClientError::OperationTimeout {
                    operation: format!("command {command_id}"),
                    timeout,
                });
            }

            options.pause().await?;
        }
    }

    /// Wait for every command; results are in input order.
    ///
    /// # Errors
    ///
    /// The first failing wait ends the batch with
    /// [`ClientError::CommandWaitFailed`] naming the command's position and
    /// ID. Results of commands that did finish are not returned.
    pub async fn wait_for_many(
        &self,
        commands: &[Command],
        options: &WaitOptions,
    ) -> Result<Vec<Command>> {
        if commands.is_empty() {
            return Ok(Vec::new());
        }
        debug!(
            count = commands.len(),
            fan_out = ?options.fan_out,
            "Waiting for command batch"
        );

        match options.fan_out {
            FanOut::Sequential => {
                let mut finished = Vec::with_capacity(commands.len());
                for (index, command) in commands.iter().enumerate() {
                    let done = self
                        .wait_for_one(command, options)
                        .await
                        .map_err(|e| batch_failure(index, command.id, e))?;
                    finished.push(done);
                }
                Ok(finished)
            }
            FanOut::Concurrent => {
                try_join_all(commands.iter().enumerate().map(|(index, command)| async move {
                    self.wait_for_one(command, options)
                        .await
                        .map_err(|e| batch_failure(index, command.id, e))
                }))
                .await
            }
        }
    }

    /// Wait for the commands of a bulk submission.
    ///
    /// Submission errors in `bulk.errors` never produced commands and are
    /// skipped; only `bulk.items` are waited on.
    pub async fn wait_for_bulk(
        &self,
        bulk: &BulkCommandList,
        options: &WaitOptions,
    ) -> Result<Vec<Command>> {
        if bulk.has_errors() {
            debug!(
                errors = ?bulk.errors,
                "Ignoring rejected submissions in bulk command list"
            );
        }
        self.wait_for_many(&bulk.items, options).await
    }
}

fn batch_failure(index: usize, command_id: u64, source: ClientError) -> ClientError {
    ClientError::CommandWaitFailed {
        index,
        command_id,
        source: Box::new(source),
    }
}
