//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not validate configuration values (see `cm_config::ConfigLoader`).

use clap::{Parser, Subcommand};

use crate::commands;

#[derive(Parser)]
#[command(name = "cmctl")]
#[command(about = "cmctl - Manage Cloudera Manager clusters from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  cmctl echo 'Hello World!'\n  cmctl clusters list\n  cmctl services start 'Cluster 1 - CDH4' hdfs1 --wait\n  cmctl roles start 'Cluster 1 - CDH4' hdfs1 hdfs-nn hdfs-dn1 --wait\n  cmctl --output json commands wait 42 43\n  cmctl events list --query 'alert==true' --max-results 20\n"
)]
pub struct Cli {
    /// Base URL of the Cloudera Manager server (e.g., http://cm.example.com:7180)
    #[arg(short, long, global = true, env = "CM_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for HTTP basic authentication
    #[arg(short, long, global = true, env = "CM_USERNAME")]
    pub username: Option<String>,

    /// Password for HTTP basic authentication
    #[arg(short, long, global = true, env = "CM_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "CM_TIMEOUT")]
    pub timeout: Option<u64>,

    /// API version path segment (e.g., v1)
    #[arg(long, global = true, env = "CM_API_VERSION")]
    pub api_version: Option<String>,

    /// Seconds between command status checks when waiting
    #[arg(long, global = true, env = "CM_POLL_INTERVAL")]
    pub poll_interval: Option<u64>,

    /// Maximum seconds to wait for a command (0 waits without limit)
    #[arg(long, global = true, env = "CM_MAX_WAIT")]
    pub max_wait: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Round-trip a message through the server (connectivity check)
    Echo {
        /// Message to echo
        #[arg(default_value = "Hello World!")]
        message: String,
    },

    /// Show the Cloudera Manager server version
    Version,

    /// List, inspect, and start/stop clusters
    Clusters {
        #[command(subcommand)]
        command: commands::clusters::ClustersCommand,
    },

    /// List services and run service lifecycle commands
    Services {
        #[command(subcommand)]
        command: commands::services::ServicesCommand,
    },

    /// Run bulk commands against roles of a service
    Roles {
        #[command(subcommand)]
        command: commands::roles::RolesCommand,
    },

    /// List hosts
    Hosts {
        #[command(subcommand)]
        command: commands::hosts::HostsCommand,
    },

    /// Query the event log (health, audit, log, and activity events)
    Events {
        #[command(subcommand)]
        command: commands::events::EventsCommand,
    },

    /// List users
    Users {
        #[command(subcommand)]
        command: commands::users::UsersCommand,
    },

    /// Inspect, abort, and wait for commands
    Commands {
        #[command(subcommand)]
        command: commands::command::CommandSubcommand,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "cmctl",
            "clusters",
            "list",
            "--output",
            "json",
            "--poll-interval",
            "5",
        ])
        .unwrap();
        assert_eq!(cli.output, "json");
        assert_eq!(cli.poll_interval, Some(5));
    }

    #[test]
    fn test_commands_wait_requires_ids() {
        assert!(Cli::try_parse_from(["cmctl", "commands", "wait"]).is_err());
        assert!(Cli::try_parse_from(["cmctl", "commands", "wait", "42", "43"]).is_ok());
    }
}
