//! Services command implementation.
//!
//! Responsibilities:
//! - List the services of a cluster and the roles of a service
//! - Start, stop, or restart a service, optionally waiting
//!
//! Does NOT handle:
//! - Registering or deleting services
//! - Per-role commands (see `roles`)

use anyhow::{Context, Result};
use clap::Subcommand;
use cm_client::{CancellationToken, LifecycleCommand};
use cm_config::Config;

use super::{WaitArgs, build_client, report_command};
use crate::formatters::{Formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum ServicesCommand {
    /// List the services of a cluster
    List {
        /// Cluster name
        cluster: String,
    },
    /// Start a service
    Start {
        /// Cluster name
        cluster: String,
        /// Service name
        service: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
    /// Stop a service
    Stop {
        /// Cluster name
        cluster: String,
        /// Service name
        service: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
    /// Restart a service
    Restart {
        /// Cluster name
        cluster: String,
        /// Service name
        service: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
    /// List the roles of a service
    Roles {
        /// Cluster name
        cluster: String,
        /// Service name
        service: String,
    },
}

pub async fn run(
    config: Config,
    command: ServicesCommand,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client(&config)?;

    let (cluster, service, lifecycle, wait) = match command {
        ServicesCommand::List { cluster } => {
            let services = client
                .list_services(&cluster)
                .await
                .with_context(|| format!("Failed to list services of cluster '{cluster}'"))?;
            output_result(&formatter.format_services(&services.items)?);
            return Ok(());
        }
        ServicesCommand::Roles { cluster, service } => {
            let roles = client
                .list_roles(&cluster, &service)
                .await
                .with_context(|| format!("Failed to list roles of service '{service}'"))?;
            output_result(&formatter.format_roles(&roles.items)?);
            return Ok(());
        }
        ServicesCommand::Start {
            cluster,
            service,
            wait,
        } => (cluster, service, LifecycleCommand::Start, wait),
        ServicesCommand::Stop {
            cluster,
            service,
            wait,
        } => (cluster, service, LifecycleCommand::Stop, wait),
        ServicesCommand::Restart {
            cluster,
            service,
            wait,
        } => (cluster, service, LifecycleCommand::Restart, wait),
    };

    let submitted = client
        .service_command(&cluster, &service, lifecycle)
        .await
        .with_context(|| format!("Failed to {} service '{service}'", lifecycle.as_path()))?;
    report_command(&client, submitted, wait, formatter, cancel).await
}
