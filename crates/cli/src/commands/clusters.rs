//! Clusters command implementation.
//!
//! Responsibilities:
//! - List clusters and show a single cluster
//! - Start, stop, or restart every service of a cluster, optionally waiting
//!
//! Does NOT handle:
//! - Creating or deleting clusters

use anyhow::{Context, Result};
use clap::Subcommand;
use cm_client::{CancellationToken, LifecycleCommand};
use cm_config::Config;

use super::{WaitArgs, build_client, report_command};
use crate::formatters::{Formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum ClustersCommand {
    /// List all clusters
    List,
    /// Show a single cluster
    Show {
        /// Cluster name
        name: String,
    },
    /// Start all services of a cluster
    Start {
        /// Cluster name
        name: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
    /// Stop all services of a cluster
    Stop {
        /// Cluster name
        name: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
    /// Restart all services of a cluster
    Restart {
        /// Cluster name
        name: String,
        #[command(flatten)]
        wait: WaitArgs,
    },
}

pub async fn run(
    config: Config,
    command: ClustersCommand,
    formatter: &dyn Formatter,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = build_client(&config)?;

    let (name, lifecycle, wait) = match command {
        ClustersCommand::List => {
            let clusters = client.list_clusters().await?;
            output_result(&formatter.format_clusters(&clusters.items)?);
            return Ok(());
        }
        ClustersCommand::Show { name } => {
            let cluster = client
                .get_cluster(&name)
                .await
                .with_context(|| format!("Failed to get cluster '{name}'"))?;
            output_result(&formatter.format_clusters(std::slice::from_ref(&cluster))?);
            return Ok(());
        }
        ClustersCommand::Start { name, wait } => (name, LifecycleCommand::Start, wait),
        ClustersCommand::Stop { name, wait } => (name, LifecycleCommand::Stop, wait),
        ClustersCommand::Restart { name, wait } => (name, LifecycleCommand::Restart, wait),
    };

    let submitted = client
        .cluster_command(&name, lifecycle)
        .await
        .with_context(|| format!("Failed to {} cluster '{name}'", lifecycle.as_path()))?;
    report_command(&client, submitted, wait, formatter, cancel).await
}
