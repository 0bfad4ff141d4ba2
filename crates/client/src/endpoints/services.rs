//! Service and role endpoints, scoped to a cluster.

use reqwest::Client;

use crate::auth::Credentials;
use crate::endpoints::{endpoint_url, read_json, send_request};
use crate::error::Result;
use crate::models::{
    BulkCommandList, Command, CommandList, LifecycleCommand, Role, RoleCommand, RoleList,
    RoleNameList, Service, ServiceList, ServiceSetupInfo, ServiceSetupList,
};

/// List the services of a cluster.
pub async fn list_services(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
) -> Result<ServiceList> {
    let url = endpoint_url(api_root, &["clusters", cluster, "services"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Fetch a single service.
pub async fn get_service(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
    service: &str,
) -> Result<Service> {
    let url = endpoint_url(api_root, &["clusters", cluster, "services", service]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Register new services in a cluster.
pub async fn create_services(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
    services: &[ServiceSetupInfo],
) -> Result<ServiceList> {
    let url = endpoint_url(api_root, &["clusters", cluster, "services"]);
    let body = ServiceSetupList {
        items: services.to_vec(),
    };
    let response = send_request(client.post(&url).json(&body), credentials).await?;
    read_json(response).await
}

/// Delete a service, returning its last state.
pub async fn delete_service(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
    service: &str,
) -> Result<Service> {
    let url = endpoint_url(api_root, &["clusters", cluster, "services", service]);
    let response = send_request(client.delete(&url), credentials).await?;
    read_json(response).await
}

/// List the commands currently active on a service.
pub async fn list_service_commands(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
    service: &str,
) -> Result<CommandList> {
    let url = endpoint_url(
        api_root,
        &["clusters", cluster, "services", service, "commands"],
    );
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Start, stop, or restart a service.
pub async fn service_command(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
    service: &str,
    command: LifecycleCommand,
) -> Result<Command> {
    let url = endpoint_url(
        api_root,
        &[
            "clusters",
            cluster,
            "services",
            service,
            "commands",
            command.as_path(),
        ],
    );
    let response = send_request(client.post(&url), credentials).await?;
    read_json(response).await
}

/// List the roles of a service.
pub async fn list_roles(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
    service: &str,
) -> Result<RoleList> {
    let url = endpoint_url(api_root, &["clusters", cluster, "services", service, "roles"]);
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Fetch a single role.
pub async fn get_role(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
    service: &str,
    role: &str,
) -> Result<Role> {
    let url = endpoint_url(
        api_root,
        &["clusters", cluster, "services", service, "roles", role],
    );
    let response = send_request(client.get(&url), credentials).await?;
    read_json(response).await
}

/// Issue one command per named role.
///
/// Roles the server refuses are reported in `BulkCommandList::errors`
/// rather than failing the whole request.
pub async fn role_command(
    client: &Client,
    api_root: &str,
    credentials: &Credentials,
    cluster: &str,
    service: &str,
    command: RoleCommand,
    roles: &RoleNameList,
) -> Result<BulkCommandList> {
    let url = endpoint_url(
        api_root,
        &[
            "clusters",
            cluster,
            "services",
            service,
            "roleCommands",
            command.as_path(),
        ],
    );
    let response = send_request(client.post(&url).json(roles), credentials).await?;
    read_json(response).await
}
