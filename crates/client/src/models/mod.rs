//! Data models for Cloudera Manager API requests and responses.
//!
//! Types are organized by resource in submodules and re-exported here
//! for convenient access. Unknown JSON fields are ignored throughout, and
//! enumerations decode unrecognized server values as `Unknown`.

// Display an enum as its wire name (`STARTED`, `CRITICAL`, ...).
macro_rules! display_as_serde_name {
    ($ty:ty) => {
        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                match serde_json::to_value(self) {
                    Ok(serde_json::Value::String(s)) => f.write_str(&s),
                    _ => f.write_str("UNKNOWN"),
                }
            }
        }
    };
}

pub mod clusters;
pub mod cm;
pub mod commands;
pub mod common;
pub mod events;
pub mod hosts;
pub mod services;
pub mod users;

pub use clusters::{Cluster, ClusterList, ClusterVersion};
pub use cm::{ApiConfig, CmVersionInfo, ConfigList, License, ValidationState};
pub use commands::{BulkCommandList, Command, CommandList, LifecycleCommand, RoleCommand};
pub use common::{ClusterRef, EchoMessage, ErrorMessage, HealthSummary, HostRef, RoleRef, ServiceRef};
pub use events::{
    Event, EventAttribute, EventCategory, EventQuery, EventQueryResult, EventSeverity,
};
pub use hosts::{Host, HostList};
pub use services::{
    Role, RoleList, RoleNameList, RoleSetupInfo, RoleState, Service, ServiceList, ServiceSetupInfo,
    ServiceSetupList, ServiceState,
};
pub use users::{User, UserList};
