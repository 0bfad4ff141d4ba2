//! Hosts table formatter.

use anyhow::Result;
use cm_client::Host;

use super::or_missing;

/// Format hosts as a table.
pub fn format_hosts(hosts: &[Host]) -> Result<String> {
    let mut output = String::new();

    if hosts.is_empty() {
        output.push_str("No hosts found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<38} {:<30} {:<16} {:<15} {:<5}\n",
        "HOST ID", "HOSTNAME", "IP ADDRESS", "HEALTH", "ROLES"
    ));
    output.push_str(&format!(
        "{:<38} {:<30} {:<16} {:<15} {:<5}\n",
        "=======", "========", "==========", "======", "====="
    ));

    for host in hosts {
        output.push_str(&format!(
            "{:<38} {:<30} {:<16} {:<15} {:<5}\n",
            host.host_id,
            or_missing(host.hostname.as_deref()),
            or_missing(host.ip_address.as_deref()),
            or_missing(host.health_summary),
            host.role_refs.len(),
        ));
    }

    Ok(output)
}
