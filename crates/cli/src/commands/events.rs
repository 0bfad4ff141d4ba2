//! Events command implementation.
//!
//! Responsibilities:
//! - Query events with the server's filter syntax, one page at a time
//! - Show a single event by ID

use anyhow::{Context, Result};
use clap::Subcommand;
use cm_client::EventQuery;
use cm_config::Config;

use crate::formatters::{Formatter, output_result};

#[derive(Debug, Subcommand)]
pub enum EventsCommand {
    /// Query events, newest first
    List {
        /// Filter such as 'alert==true;attributes.service==hdfs1'
        #[arg(short, long)]
        query: Option<String>,
        /// Maximum number of events to return
        #[arg(long)]
        max_results: Option<u32>,
        /// Number of matching events to skip
        #[arg(long)]
        offset: Option<u32>,
    },
    /// Show one event in detail
    Show {
        /// Event UUID
        id: String,
    },
}

pub async fn run(config: Config, command: EventsCommand, formatter: &dyn Formatter) -> Result<()> {
    let client = super::build_client(&config)?;
    match command {
        EventsCommand::List {
            query,
            max_results,
            offset,
        } => {
            let request = EventQuery {
                max_results,
                result_offset: offset,
                query,
            };
            let events = client
                .query_events(&request)
                .await
                .context("Failed to query events")?;
            output_result(&formatter.format_events(&events)?);
        }
        EventsCommand::Show { id } => {
            let event = client
                .get_event(&id)
                .await
                .with_context(|| format!("Failed to get event {id}"))?;
            output_result(&formatter.format_event(&event)?);
        }
    }
    Ok(())
}
