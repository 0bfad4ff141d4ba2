//! Testing utilities for Cloudera Manager client tests.
//!
//! This module provides fixture loading and a scripted
//! [`CommandStatusSource`] for exercising the poller without a server.
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use cm_client::testing::{ScriptedSource, load_fixture};
//!
//! let fixture = load_fixture("commands/finished.json");
//! let source = ScriptedSource::new().active_then_done(42, 3, true);
//! ```

use std::collections::{HashMap, VecDeque};
use std::path::Path;
use std::sync::{Mutex, PoisonError};

use tokio::time::Instant;

use crate::error::{ClientError, Result};
use crate::models::Command;
use crate::poller::CommandStatusSource;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "commands/finished.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Invalid JSON in fixture {}: {e}", full_path.display()))
}

/// Build a minimal command snapshot.
pub fn command_snapshot(id: u64, name: &str, active: bool, success: bool) -> Command {
    Command {
        id,
        name: name.to_string(),
        start_time: None,
        end_time: None,
        active,
        success,
        result_message: None,
        result_data_url: None,
        service_ref: None,
        role_ref: None,
        host_ref: None,
        parent: None,
        children: None,
    }
}

enum Step {
    Snapshot(Command),
    Fail(u16),
}

/// A [`CommandStatusSource`] that replays scripted responses per command ID.
///
/// Every fetch is recorded with the (possibly paused) Tokio clock, so tests
/// can assert fetch counts and spacing.
#[derive(Default)]
pub struct ScriptedSource {
    scripts: Mutex<HashMap<u64, VecDeque<Step>>>,
    fetches: Mutex<Vec<(u64, Instant)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `id` active for `active_polls` fetches, then finished.
    pub fn active_then_done(self, id: u64, active_polls: usize, success: bool) -> Self {
        let mut steps: VecDeque<Step> = (0..active_polls)
            .map(|_| Step::Snapshot(command_snapshot(id, "Scripted", true, false)))
            .collect();
        steps.push_back(Step::Snapshot(command_snapshot(id, "Scripted", false, success)));
        self.script(id, steps)
    }

    /// Report `id` active for `active_polls` fetches, then fail with `status`.
    pub fn failing(self, id: u64, active_polls: usize, status: u16) -> Self {
        let mut steps: VecDeque<Step> = (0..active_polls)
            .map(|_| Step::Snapshot(command_snapshot(id, "Scripted", true, false)))
            .collect();
        steps.push_back(Step::Fail(status));
        self.script(id, steps)
    }

    fn script(self, id: u64, steps: VecDeque<Step>) -> Self {
        self.scripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(id, steps);
        self
    }

    /// Total number of fetches across all commands.
    pub fn fetch_count(&self) -> usize {
        self.fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Number of fetches for one command.
    pub fn fetches_for(&self, id: u64) -> usize {
        self.fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|(fetched, _)| *fetched == id)
            .count()
    }

    /// Clock readings of every fetch, in order.
    pub fn fetch_times(&self) -> Vec<Instant> {
        self.fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, at)| *at)
            .collect()
    }

    fn next_step(&self, id: u64) -> Result<Command> {
        self.fetches
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Instant::now()));

        let step = self
            .scripts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get_mut(&id)
            .and_then(VecDeque::pop_front);

        match step {
            Some(Step::Snapshot(command)) => Ok(command),
            Some(Step::Fail(status)) => Err(ClientError::ApiError {
                status,
                url: format!("scripted://commands/{id}"),
                message: "scripted failure".to_string(),
                causes: Vec::new(),
            }),
            None => Err(ClientError::InvalidResponse(format!(
                "no scripted response left for command {id}"
            ))),
        }
    }
}

impl CommandStatusSource for ScriptedSource {
    async fn command_status(&self, command_id: u64) -> Result<Command> {
        self.next_step(command_id)
    }
}
