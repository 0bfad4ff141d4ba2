//! Event models.
//!
//! Events are health changes, log messages, audit records and activity
//! notices collected by the server. They are read-only.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Broad classification of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventCategory {
    HealthEvent,
    LogEvent,
    AuditEvent,
    ActivityEvent,
    #[serde(other)]
    Unknown,
}

/// How urgently an event needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventSeverity {
    Informational,
    Important,
    Critical,
    #[serde(other)]
    Unknown,
}

display_as_serde_name!(EventCategory);
display_as_serde_name!(EventSeverity);

/// A named, multi-valued attribute attached to an event (`SERVICE`, `HOSTS`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventAttribute {
    pub name: String,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub values: Vec<String>,
}

/// A single event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// UUID assigned by the server.
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_occurred: Option<DateTime<Utc>>,
    /// When the server recorded the event. Events can arrive out of order,
    /// so incremental queries should filter on this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_received: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<EventCategory>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severity: Option<EventSeverity>,
    #[serde(default)]
    pub alert: bool,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub attributes: Vec<EventAttribute>,
}

impl Event {
    /// Values of the attribute called `name`, if present.
    pub fn attribute(&self, name: &str) -> Option<&[String]> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.values.as_slice())
    }
}

/// One page of events matching a query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQueryResult {
    /// Number of matching events on the server, across all pages.
    #[serde(default)]
    pub total_results: u64,
    #[serde(default, deserialize_with = "crate::serde_helpers::null_as_default")]
    pub items: Vec<Event>,
}

/// Query parameters for `GET /events`.
///
/// `query` is the server's filter syntax: `;`-joined constraints such as
/// `alert==true;attributes.service==hdfs1`. Unset fields are omitted and
/// the server applies its own defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_results: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
}

impl EventQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_results(mut self, max_results: u32) -> Self {
        self.max_results = Some(max_results);
        self
    }

    pub fn result_offset(mut self, offset: u32) -> Self {
        self.result_offset = Some(offset);
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }
}
