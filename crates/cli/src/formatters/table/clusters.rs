//! Clusters table formatter.

use anyhow::Result;
use cm_client::Cluster;

use super::or_missing;

/// Format clusters as a table.
pub fn format_clusters(clusters: &[Cluster]) -> Result<String> {
    let mut output = String::new();

    if clusters.is_empty() {
        output.push_str("No clusters found.\n");
        return Ok(output);
    }

    output.push_str(&format!("{:<40} {:<10}\n", "NAME", "VERSION"));
    output.push_str(&format!("{:<40} {:<10}\n", "====", "======="));

    for cluster in clusters {
        output.push_str(&format!(
            "{:<40} {:<10}\n",
            cluster.name,
            or_missing(cluster.version)
        ));
    }

    Ok(output)
}
