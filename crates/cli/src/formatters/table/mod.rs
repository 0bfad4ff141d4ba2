//! Table formatter implementation.
//!
//! Responsibilities:
//! - Format resource lists as fixed-width, column-aligned tables.
//! - Format single resources (a command, the server version) as `Key: value` lines.
//!
//! Does NOT handle:
//! - Other output formats.
//! - Terminal width detection; long values simply overflow their column.

use anyhow::Result;
use cm_client::{
    BulkCommandList, Cluster, CmVersionInfo, Command, EchoMessage, Event, EventQueryResult, Host,
    Role, Service, User,
};

use crate::formatters::{Formatter, MISSING};

mod clusters;
mod commands;
mod events;
mod hosts;
mod services;
mod users;

/// Table formatter.
pub struct TableFormatter;

impl Formatter for TableFormatter {
    fn format_echo(&self, echo: &EchoMessage) -> Result<String> {
        Ok(format!("{}\n", echo.message))
    }

    fn format_version(&self, version: &CmVersionInfo) -> Result<String> {
        let build_timestamp = version
            .build_timestamp
            .as_ref()
            .map(|ts| match ts {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .unwrap_or_else(|| MISSING.to_string());

        let mut output = String::new();
        output.push_str(&format!("Version:         {}\n", version.version));
        output.push_str(&format!("Snapshot:        {}\n", version.snapshot));
        output.push_str(&format!(
            "Build User:      {}\n",
            version.build_user.as_deref().unwrap_or(MISSING)
        ));
        output.push_str(&format!("Build Timestamp: {}\n", build_timestamp));
        output.push_str(&format!(
            "Git Hash:        {}\n",
            version.git_hash.as_deref().unwrap_or(MISSING)
        ));
        Ok(output)
    }

    fn format_clusters(&self, clusters: &[Cluster]) -> Result<String> {
        clusters::format_clusters(clusters)
    }

    fn format_services(&self, services: &[Service]) -> Result<String> {
        services::format_services(services)
    }

    fn format_roles(&self, roles: &[Role]) -> Result<String> {
        services::format_roles(roles)
    }

    fn format_hosts(&self, hosts: &[Host]) -> Result<String> {
        hosts::format_hosts(hosts)
    }

    fn format_users(&self, users: &[User]) -> Result<String> {
        users::format_users(users)
    }

    fn format_events(&self, events: &EventQueryResult) -> Result<String> {
        events::format_events(events)
    }

    fn format_event(&self, event: &Event) -> Result<String> {
        events::format_event(event)
    }

    fn format_command(&self, command: &Command) -> Result<String> {
        commands::format_command(command)
    }

    fn format_commands(&self, commands: &[Command]) -> Result<String> {
        commands::format_commands(commands)
    }

    fn format_bulk(&self, bulk: &BulkCommandList) -> Result<String> {
        commands::format_bulk(bulk)
    }
}

/// Render an optional `Display` value, or the missing placeholder.
pub(super) fn or_missing<T: std::fmt::Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .unwrap_or_else(|| MISSING.to_string())
}
