//! Version command implementation.

use anyhow::Result;
use cm_config::Config;

use crate::formatters::{Formatter, output_result};

pub async fn run(config: Config, formatter: &dyn Formatter) -> Result<()> {
    let client = super::build_client(&config)?;
    let version = client.version().await?;
    output_result(&formatter.format_version(&version)?);
    Ok(())
}
