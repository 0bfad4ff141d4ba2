//! Command table formatters.
//!
//! A command's state column reads `ACTIVE` while the server is still working
//! on it, then `SUCCEEDED` or `FAILED`.

use anyhow::Result;
use cm_client::{BulkCommandList, Command};

use super::or_missing;

fn state_label(command: &Command) -> &'static str {
    if command.active {
        "ACTIVE"
    } else if command.success {
        "SUCCEEDED"
    } else {
        "FAILED"
    }
}

/// Describe what the command runs against, most specific first.
fn target(command: &Command) -> Option<String> {
    if let Some(role) = &command.role_ref {
        return Some(format!("role {}/{}", role.service_name, role.role_name));
    }
    if let Some(service) = &command.service_ref {
        return Some(match &service.cluster_name {
            Some(cluster) => format!("service {}/{}", cluster, service.service_name),
            None => format!("service {}", service.service_name),
        });
    }
    command
        .host_ref
        .as_ref()
        .map(|host| format!("host {}", host.host_id))
}

/// Format one command as `Key: value` lines.
pub fn format_command(command: &Command) -> Result<String> {
    let mut output = String::new();
    output.push_str(&format!("ID:       {}\n", command.id));
    output.push_str(&format!("Name:     {}\n", command.name));
    output.push_str(&format!("State:    {}\n", state_label(command)));
    output.push_str(&format!("Target:   {}\n", or_missing(target(command))));
    output.push_str(&format!("Started:  {}\n", or_missing(command.start_time)));
    output.push_str(&format!("Ended:    {}\n", or_missing(command.end_time)));
    output.push_str(&format!(
        "Result:   {}\n",
        or_missing(command.result_message.as_deref())
    ));
    if let Some(url) = &command.result_data_url {
        output.push_str(&format!("Data:     {}\n", url));
    }
    if let Some(children) = command.children.as_ref().filter(|c| !c.is_empty()) {
        output.push_str(&format!("Children: {}\n", children.len()));
        for child in &children.items {
            output.push_str(&format!(
                "  {:<10} {:<25} {}\n",
                child.id,
                child.name,
                state_label(child)
            ));
        }
    }
    Ok(output)
}

/// Format commands as a table.
pub fn format_commands(commands: &[Command]) -> Result<String> {
    let mut output = String::new();

    if commands.is_empty() {
        output.push_str("No commands found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<10} {:<25} {:<10} {:<30} {}\n",
        "ID", "NAME", "STATE", "TARGET", "RESULT"
    ));
    output.push_str(&format!(
        "{:<10} {:<25} {:<10} {:<30} {}\n",
        "==", "====", "=====", "======", "======"
    ));

    for command in commands {
        output.push_str(&format!(
            "{:<10} {:<25} {:<10} {:<30} {}\n",
            command.id,
            command.name,
            state_label(command),
            or_missing(target(command)),
            or_missing(command.result_message.as_deref()),
        ));
    }

    Ok(output)
}

/// Format a bulk submission: the submitted commands, then rejected items.
pub fn format_bulk(bulk: &BulkCommandList) -> Result<String> {
    let mut output = format_commands(&bulk.items)?;
    if bulk.has_errors() {
        output.push_str("\nRejected:\n");
        for error in &bulk.errors {
            output.push_str(&format!("  {}\n", error));
        }
    }
    Ok(output)
}
