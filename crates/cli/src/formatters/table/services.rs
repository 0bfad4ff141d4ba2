//! Services and roles table formatters.

use anyhow::Result;
use cm_client::{Role, Service};

use super::or_missing;

/// Format services as a table.
pub fn format_services(services: &[Service]) -> Result<String> {
    let mut output = String::new();

    if services.is_empty() {
        output.push_str("No services found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<25} {:<15} {:<12} {:<15} {:<6}\n",
        "NAME", "TYPE", "STATE", "HEALTH", "STALE"
    ));
    output.push_str(&format!(
        "{:<25} {:<15} {:<12} {:<15} {:<6}\n",
        "====", "====", "=====", "======", "====="
    ));

    for service in services {
        output.push_str(&format!(
            "{:<25} {:<15} {:<12} {:<15} {:<6}\n",
            service.name,
            or_missing(service.service_type.as_deref()),
            or_missing(service.service_state),
            or_missing(service.health_summary),
            if service.config_stale { "yes" } else { "no" },
        ));
    }

    Ok(output)
}

/// Format roles as a table.
pub fn format_roles(roles: &[Role]) -> Result<String> {
    let mut output = String::new();

    if roles.is_empty() {
        output.push_str("No roles found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<30} {:<20} {:<20} {:<12} {:<15}\n",
        "NAME", "TYPE", "HOST", "STATE", "HEALTH"
    ));
    output.push_str(&format!(
        "{:<30} {:<20} {:<20} {:<12} {:<15}\n",
        "====", "====", "====", "=====", "======"
    ));

    for role in roles {
        output.push_str(&format!(
            "{:<30} {:<20} {:<20} {:<12} {:<15}\n",
            role.name,
            or_missing(role.role_type.as_deref()),
            or_missing(role.host_ref.as_ref().map(|h| h.host_id.as_str())),
            or_missing(role.role_state),
            or_missing(role.health_summary),
        ));
    }

    Ok(output)
}
