//! REST API endpoint implementations.
//!
//! Each function performs one HTTP call against an API root such as
//! `http://cm:7180/api/v1` and decodes the response. Higher-level
//! conveniences live on [`crate::ClouderaManagerClient`].

mod clusters;
mod cm;
mod commands;
mod events;
mod hosts;
mod request;
mod services;
mod tools;
pub mod url_encoding;
mod users;

pub use clusters::{
    cluster_command, create_clusters, delete_cluster, get_cluster, list_cluster_commands,
    list_clusters,
};
pub use cm::{
    get_config, get_license, get_version, inspect_hosts, list_commands, update_config,
    update_license,
};
pub use commands::{abort_command, get_command};
pub use events::{get_event, query_events};
pub use hosts::{delete_host, get_host, list_hosts};
pub use request::{read_json, send_multipart, send_request};
pub use services::{
    create_services, delete_service, get_role, get_service, list_roles, list_service_commands,
    list_services, role_command, service_command,
};
pub use tools::{echo, echo_error};
pub use url_encoding::{encode_path_segment, endpoint_url};
pub use users::{create_users, delete_user, get_user, list_users};
