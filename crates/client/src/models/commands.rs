//! Command models.
//!
//! Commands are asynchronous server-side operations. Submitting one returns
//! a snapshot; the poller re-fetches snapshots until `active` becomes false.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::common::{HostRef, RoleRef, ServiceRef};

/// Snapshot of a Cloudera Manager command.
///
/// Every poll yields a new value; snapshots are never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_data_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_ref: Option<ServiceRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_ref: Option<RoleRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host_ref: Option<HostRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<Box<Command>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<CommandList>,
}

impl Command {
    /// True once the server has stopped working on the command.
    pub fn is_terminal(&self) -> bool {
        !self.active
    }

    /// True if the command finished and reported success.
    pub fn succeeded(&self) -> bool {
        !self.active && self.success
    }
}

/// A list of commands.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommandList {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub items: Vec<Command>,
}

impl CommandList {
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Commands submitted in bulk, plus per-item submission errors.
///
/// `errors` holds the submissions the server refused; those never became
/// commands and are not waited on.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkCommandList {
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub items: Vec<Command>,
    #[serde(
        default,
        alias = "error",
        deserialize_with = "crate::serde_helpers::null_as_default"
    )]
    pub errors: Vec<String>,
}

impl BulkCommandList {
    /// True if any submission in the batch was rejected.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// View the submitted commands as a plain list.
    pub fn commands(&self) -> &[Command] {
        &self.items
    }
}

/// Lifecycle commands shared by clusters and services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleCommand {
    Start,
    Stop,
    Restart,
}

impl LifecycleCommand {
    /// Path segment under `.../commands/`.
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
        }
    }
}

/// Commands issued in bulk against a set of roles of one service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCommand {
    Start,
    Stop,
    Restart,
    Refresh,
    HdfsFormat,
}

impl RoleCommand {
    /// Path segment under `.../roleCommands/`.
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Restart => "restart",
            Self::Refresh => "refresh",
            Self::HdfsFormat => "hdfsFormat",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_active_command() {
        let json = r#"{
            "id": 123,
            "name": "Start",
            "startTime": "2012-12-10T08:13:47.466Z",
            "active": true,
            "success": false,
            "serviceRef": {"clusterName": "prod", "serviceName": "hdfs1"}
        }"#;
        let command: Command = serde_json::from_str(json).unwrap();
        assert_eq!(command.id, 123);
        assert_eq!(command.name, "Start");
        assert!(command.start_time.is_some());
        assert!(command.end_time.is_none());
        assert!(!command.is_terminal());
        assert!(!command.succeeded());
        assert_eq!(
            command.service_ref.as_ref().map(|r| r.service_name.as_str()),
            Some("hdfs1")
        );
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"id": 9, "name": "Stop", "active": false, "success": true,
                       "canRetry": false, "someFutureField": {"nested": 1}}"#;
        let command: Command = serde_json::from_str(json).unwrap();
        assert!(command.succeeded());
    }

    #[test]
    fn test_nested_parent_and_children() {
        let json = r#"{
            "id": 1, "name": "Restart", "active": false, "success": true,
            "parent": {"id": 0, "name": "ClusterRestart", "active": false, "success": true},
            "children": {"items": [
                {"id": 2, "name": "Stop", "active": false, "success": true},
                {"id": 3, "name": "Start", "active": false, "success": true}
            ]}
        }"#;
        let command: Command = serde_json::from_str(json).unwrap();
        assert_eq!(command.parent.as_ref().map(|p| p.id), Some(0));
        let children = command.children.unwrap();
        assert_eq!(children.len(), 2);
        assert_eq!(children.items[1].name, "Start");
    }

    #[test]
    fn test_command_list_missing_items_is_empty() {
        let list: CommandList = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_bulk_list_accepts_legacy_error_key() {
        let json = r#"{"items": [{"id": 4, "name": "Format", "active": true}],
                       "error": ["role hdfs-dn1 is not a NameNode"]}"#;
        let bulk: BulkCommandList = serde_json::from_str(json).unwrap();
        assert_eq!(bulk.items.len(), 1);
        assert!(bulk.has_errors());
        assert_eq!(bulk.errors[0], "role hdfs-dn1 is not a NameNode");

        let json = r#"{"items": null, "errors": null}"#;
        let bulk: BulkCommandList = serde_json::from_str(json).unwrap();
        assert!(bulk.commands().is_empty());
        assert!(!bulk.has_errors());
    }
}
