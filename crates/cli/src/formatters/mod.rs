//! Output formatters for CLI commands.
//!
//! Responsibilities:
//! - Provide table and JSON output formats.
//! - Implement the `Formatter` trait for each Cloudera Manager resource the CLI prints.
//!
//! Does NOT handle:
//! - Fetching data (see `commands`).
//!
//! Invariants:
//! - Formatters return strings; only `output_result` writes to stdout.
//! - JSON output of an empty list is `[]`; tables print a human message instead.
//! - Missing values render as `-` in tables and `null` in JSON.

use std::str::FromStr;

use anyhow::Result;
use cm_client::{
    BulkCommandList, Cluster, CmVersionInfo, Command, EchoMessage, Event, EventQueryResult, Host,
    Role, Service, User,
};

mod json;
mod table;

#[cfg(test)]
mod tests;

pub use json::JsonFormatter;
pub use table::TableFormatter;

/// Placeholder for missing values in table output.
pub const MISSING: &str = "-";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            _ => anyhow::bail!("Invalid output format: {}. Valid options: table, json", s),
        }
    }
}

/// Formatter trait for different output types.
pub trait Formatter {
    fn format_echo(&self, echo: &EchoMessage) -> Result<String>;

    fn format_version(&self, version: &CmVersionInfo) -> Result<String>;

    fn format_clusters(&self, clusters: &[Cluster]) -> Result<String>;

    fn format_services(&self, services: &[Service]) -> Result<String>;

    fn format_roles(&self, roles: &[Role]) -> Result<String>;

    fn format_hosts(&self, hosts: &[Host]) -> Result<String>;

    fn format_users(&self, users: &[User]) -> Result<String>;

    /// Format a page of events; tables add the total match count.
    fn format_events(&self, events: &EventQueryResult) -> Result<String>;

    fn format_event(&self, event: &Event) -> Result<String>;

    /// Format a single command snapshot in detail.
    fn format_command(&self, command: &Command) -> Result<String>;

    /// Format several commands, one per row.
    fn format_commands(&self, commands: &[Command]) -> Result<String>;

    /// Format a bulk submission, including rejected items.
    fn format_bulk(&self, bulk: &BulkCommandList) -> Result<String>;
}

/// Get a formatter for the given output format.
pub fn get_formatter(format: OutputFormat) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Table => Box::new(TableFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Print formatted output to stdout, terminated by a newline.
pub fn output_result(output: &str) {
    if output.ends_with('\n') {
        print!("{output}");
    } else {
        println!("{output}");
    }
}
