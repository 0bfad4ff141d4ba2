//! Events table formatters.

use anyhow::Result;
use cm_client::{Event, EventQueryResult};

use super::or_missing;
use crate::formatters::MISSING;

const CONTENT_WIDTH: usize = 60;

fn received(event: &Event) -> String {
    or_missing(event.time_received.map(|t| t.format("%Y-%m-%d %H:%M:%S")))
}

/// First line of the content, cut to fit the table.
fn summary(event: &Event) -> String {
    let line = event
        .content
        .as_deref()
        .and_then(|c| c.lines().next())
        .unwrap_or(MISSING);
    if line.chars().count() > CONTENT_WIDTH {
        let cut: String = line.chars().take(CONTENT_WIDTH - 3).collect();
        format!("{cut}...")
    } else {
        line.to_string()
    }
}

/// Format a page of events as a table with a match count footer.
pub fn format_events(result: &EventQueryResult) -> Result<String> {
    let mut output = String::new();

    if result.items.is_empty() {
        output.push_str("No events found.\n");
        return Ok(output);
    }

    output.push_str(&format!(
        "{:<36} {:<19} {:<13} {:<14} {:<5} {}\n",
        "ID", "RECEIVED", "SEVERITY", "CATEGORY", "ALERT", "CONTENT"
    ));
    output.push_str(&format!(
        "{:<36} {:<19} {:<13} {:<14} {:<5} {}\n",
        "==", "========", "========", "========", "=====", "======="
    ));

    for event in &result.items {
        output.push_str(&format!(
            "{:<36} {:<19} {:<13} {:<14} {:<5} {}\n",
            event.id,
            received(event),
            or_missing(event.severity),
            or_missing(event.category),
            if event.alert { "yes" } else { "no" },
            summary(event),
        ));
    }

    output.push_str(&format!(
        "\nShowing {} of {} matching events.\n",
        result.items.len(),
        result.total_results
    ));
    Ok(output)
}

/// Format one event as `Key: value` lines, attributes last.
pub fn format_event(event: &Event) -> Result<String> {
    let mut output = String::new();
    output.push_str(&format!("ID:         {}\n", event.id));
    output.push_str(&format!("Severity:   {}\n", or_missing(event.severity)));
    output.push_str(&format!("Category:   {}\n", or_missing(event.category)));
    output.push_str(&format!("Alert:      {}\n", if event.alert { "yes" } else { "no" }));
    output.push_str(&format!(
        "Occurred:   {}\n",
        or_missing(event.time_occurred.map(|t| t.to_rfc3339()))
    ));
    output.push_str(&format!(
        "Received:   {}\n",
        or_missing(event.time_received.map(|t| t.to_rfc3339()))
    ));
    output.push_str(&format!(
        "Content:    {}\n",
        event.content.as_deref().unwrap_or(MISSING)
    ));

    if !event.attributes.is_empty() {
        output.push_str("Attributes:\n");
        for attribute in &event.attributes {
            output.push_str(&format!(
                "  {}: {}\n",
                attribute.name,
                attribute.values.join(", ")
            ));
        }
    }
    Ok(output)
}
