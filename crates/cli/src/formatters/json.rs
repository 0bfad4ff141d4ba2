//! JSON formatter implementation.
//!
//! Responsibilities:
//! - Format all resource types as pretty-printed JSON using their serde
//!   representation (the same camelCase shape the API returns).

use anyhow::Result;
use cm_client::{
    BulkCommandList, Cluster, CmVersionInfo, Command, EchoMessage, Event, EventQueryResult, Host,
    Role, Service, User,
};
use serde::Serialize;

use crate::formatters::Formatter;

/// JSON formatter.
pub struct JsonFormatter;

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

impl Formatter for JsonFormatter {
    fn format_echo(&self, echo: &EchoMessage) -> Result<String> {
        pretty(echo)
    }

    fn format_version(&self, version: &CmVersionInfo) -> Result<String> {
        pretty(version)
    }

    fn format_clusters(&self, clusters: &[Cluster]) -> Result<String> {
        pretty(clusters)
    }

    fn format_services(&self, services: &[Service]) -> Result<String> {
        pretty(services)
    }

    fn format_roles(&self, roles: &[Role]) -> Result<String> {
        pretty(roles)
    }

    fn format_hosts(&self, hosts: &[Host]) -> Result<String> {
        pretty(hosts)
    }

    fn format_users(&self, users: &[User]) -> Result<String> {
        pretty(users)
    }

    fn format_events(&self, events: &EventQueryResult) -> Result<String> {
        pretty(events)
    }

    fn format_event(&self, event: &Event) -> Result<String> {
        pretty(event)
    }

    fn format_command(&self, command: &Command) -> Result<String> {
        pretty(command)
    }

    fn format_commands(&self, commands: &[Command]) -> Result<String> {
        pretty(commands)
    }

    fn format_bulk(&self, bulk: &BulkCommandList) -> Result<String> {
        pretty(bulk)
    }
}
