//! Cloudera Manager REST API client.
//!
//! This crate provides a typed client for the Cloudera Manager REST API
//! (`/api/v1`) using HTTP basic authentication. Lifecycle calls return
//! commands that run asynchronously on the server; the [`poller`] module
//! waits for them to finish.

mod auth;
pub mod cancellation;
pub mod client;
pub mod error;
pub mod models;
pub mod poller;
mod serde_helpers;

pub mod endpoints;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use auth::Credentials;
pub use cancellation::CancellationToken;
pub use client::ClouderaManagerClient;
pub use client::builder::ClouderaManagerClientBuilder;
pub use error::{ClientError, Result};
pub use models::{
    BulkCommandList, Cluster, ClusterList, CmVersionInfo, Command, CommandList, EchoMessage,
    ErrorMessage, Event, EventQuery, EventQueryResult, Host, HostList, License, LifecycleCommand,
    Role, RoleCommand, RoleList, RoleNameList, Service, ServiceList, ServiceSetupInfo, User,
    UserList,
};
pub use poller::{CommandPoller, CommandStatusSource, FanOut, WaitOptions};
