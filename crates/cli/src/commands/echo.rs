//! Echo command implementation.
//!
//! Round-trips a message through `/tools/echo`; a quick check that the base
//! URL and credentials work.

use anyhow::Result;
use cm_config::Config;

use crate::formatters::{Formatter, output_result};

pub async fn run(config: Config, message: &str, formatter: &dyn Formatter) -> Result<()> {
    let client = super::build_client(&config)?;
    let echoed = client.echo(message).await?;
    output_result(&formatter.format_echo(&echoed)?);
    Ok(())
}
