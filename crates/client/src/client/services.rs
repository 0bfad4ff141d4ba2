//! Service and role API methods for [`ClouderaManagerClient`].
//!
//! # What this module handles:
//! - Listing, registering, and deleting services of a cluster
//! - Service lifecycle commands
//! - Listing roles and issuing bulk role commands
//!
//! # What this module does NOT handle:
//! - Service or role configuration updates (not yet implemented)

use crate::client::ClouderaManagerClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{
    BulkCommandList, Command, CommandList, LifecycleCommand, Role, RoleCommand, RoleList,
    RoleNameList, Service, ServiceList, ServiceSetupInfo,
};

impl ClouderaManagerClient {
    /// List the services of a cluster.
    pub async fn list_services(&self, cluster: &str) -> Result<ServiceList> {
        endpoints::list_services(&self.http, &self.api_root, &self.credentials, cluster).await
    }

    /// Fetch a single service.
    pub async fn get_service(&self, cluster: &str, service: &str) -> Result<Service> {
        endpoints::get_service(
            &self.http,
            &self.api_root,
            &self.credentials,
            cluster,
            service,
        )
        .await
    }

    /// Register new services in a cluster.
    pub async fn create_services(
        &self,
        cluster: &str,
        services: &[ServiceSetupInfo],
    ) -> Result<ServiceList> {
        endpoints::create_services(
            &self.http,
            &self.api_root,
            &self.credentials,
            cluster,
            services,
        )
        .await
    }

    /// Delete a service.
    pub async fn delete_service(&self, cluster: &str, service: &str) -> Result<Service> {
        endpoints::delete_service(
            &self.http,
            &self.api_root,
            &self.credentials,
            cluster,
            service,
        )
        .await
    }

    /// List commands currently active on a service.
    pub async fn service_commands(&self, cluster: &str, service: &str) -> Result<CommandList> {
        endpoints::list_service_commands(
            &self.http,
            &self.api_root,
            &self.credentials,
            cluster,
            service,
        )
        .await
    }

    /// Issue a lifecycle command against a service.
    pub async fn service_command(
        &self,
        cluster: &str,
        service: &str,
        command: LifecycleCommand,
    ) -> Result<Command> {
        endpoints::service_command(
            &self.http,
            &self.api_root,
            &self.credentials,
            cluster,
            service,
            command,
        )
        .await
    }

    pub async fn start_service(&self, cluster: &str, service: &str) -> Result<Command> {
        self.service_command(cluster, service, LifecycleCommand::Start)
            .await
    }

    pub async fn stop_service(&self, cluster: &str, service: &str) -> Result<Command> {
        self.service_command(cluster, service, LifecycleCommand::Stop)
            .await
    }

    pub async fn restart_service(&self, cluster: &str, service: &str) -> Result<Command> {
        self.service_command(cluster, service, LifecycleCommand::Restart)
            .await
    }

    /// List the roles of a service.
    pub async fn list_roles(&self, cluster: &str, service: &str) -> Result<RoleList> {
        endpoints::list_roles(
            &self.http,
            &self.api_root,
            &self.credentials,
            cluster,
            service,
        )
        .await
    }

    /// Fetch a single role.
    pub async fn get_role(&self, cluster: &str, service: &str, role: &str) -> Result<Role> {
        endpoints::get_role(
            &self.http,
            &self.api_root,
            &self.credentials,
            cluster,
            service,
            role,
        )
        .await
    }

    /// Issue one command per named role of a service.
    ///
    /// Wait on the result with [`ClouderaManagerClient::wait_for_bulk`].
    pub async fn role_command(
        &self,
        cluster: &str,
        service: &str,
        command: RoleCommand,
        roles: &RoleNameList,
    ) -> Result<BulkCommandList> {
        endpoints::role_command(
            &self.http,
            &self.api_root,
            &self.credentials,
            cluster,
            service,
            command,
            roles,
        )
        .await
    }
}
