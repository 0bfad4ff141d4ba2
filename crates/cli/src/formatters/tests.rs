//! Formatter tests for table and JSON output.

use cm_client::models::{ClusterVersion, CommandList, HealthSummary, RoleRef, ServiceRef, ServiceState};
use cm_client::{BulkCommandList, Cluster, Command, Service, User};

use super::*;

fn command(id: u64, name: &str, active: bool, success: bool) -> Command {
    cm_client::testing::command_snapshot(id, name, active, success)
}

fn hdfs_service() -> Service {
    serde_json::from_value(serde_json::json!({
        "name": "hdfs1",
        "type": "HDFS",
        "serviceState": "STARTED",
        "healthSummary": "GOOD",
        "configStale": true
    }))
    .unwrap()
}

#[test]
fn test_output_format_parsing() {
    assert_eq!("table".parse::<OutputFormat>().unwrap(), OutputFormat::Table);
    assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
    let err = "xml".parse::<OutputFormat>().unwrap_err();
    assert!(err.to_string().contains("Valid options: table, json"));
}

#[test]
fn test_table_clusters() {
    let output = TableFormatter
        .format_clusters(&[
            Cluster::new("Cluster 1 - CDH4", ClusterVersion::Cdh4),
            Cluster {
                name: "bare".to_string(),
                version: None,
            },
        ])
        .unwrap();

    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[0].starts_with("NAME"));
    assert!(lines[2].starts_with("Cluster 1 - CDH4"));
    assert!(lines[2].contains("CDH4"));
    assert!(lines[3].trim_end().ends_with(MISSING));
}

#[test]
fn test_table_empty_lists_print_message() {
    assert_eq!(
        TableFormatter.format_clusters(&[]).unwrap(),
        "No clusters found.\n"
    );
    assert_eq!(TableFormatter.format_commands(&[]).unwrap(), "No commands found.\n");
    assert_eq!(JsonFormatter.format_clusters(&[]).unwrap(), "[]");
}

#[test]
fn test_table_services() {
    let service = hdfs_service();
    assert_eq!(service.service_state, Some(ServiceState::Started));
    assert_eq!(service.health_summary, Some(HealthSummary::Good));

    let output = TableFormatter.format_services(&[service]).unwrap();
    let row = output.lines().nth(2).unwrap();
    assert!(row.contains("hdfs1"));
    assert!(row.contains("HDFS"));
    assert!(row.contains("STARTED"));
    assert!(row.contains("GOOD"));
    assert!(row.trim_end().ends_with("yes"));
}

#[test]
fn test_table_command_states() {
    let output = TableFormatter
        .format_commands(&[
            command(1, "Start", true, false),
            command(2, "Stop", false, true),
            command(3, "Restart", false, false),
        ])
        .unwrap();

    assert!(output.lines().nth(2).unwrap().contains("ACTIVE"));
    assert!(output.lines().nth(3).unwrap().contains("SUCCEEDED"));
    assert!(output.lines().nth(4).unwrap().contains("FAILED"));
}

#[test]
fn test_table_command_detail() {
    let mut finished = command(42, "Start", false, true);
    finished.result_message = Some("Service started successfully.".to_string());
    finished.service_ref = Some(ServiceRef {
        cluster_name: Some("prod".to_string()),
        service_name: "hdfs1".to_string(),
    });
    let mut child = command(43, "Start", false, true);
    child.role_ref = Some(RoleRef {
        cluster_name: Some("prod".to_string()),
        service_name: "hdfs1".to_string(),
        role_name: "hdfs-nn".to_string(),
    });
    finished.children = Some(CommandList { items: vec![child] });

    let output = TableFormatter.format_command(&finished).unwrap();

    assert!(output.contains("ID:       42"));
    assert!(output.contains("State:    SUCCEEDED"));
    assert!(output.contains("Target:   service prod/hdfs1"));
    assert!(output.contains("Result:   Service started successfully."));
    assert!(output.contains("Ended:    -"));
    assert!(output.contains("Children: 1"));
}

#[test]
fn test_table_bulk_lists_rejections() {
    let bulk = BulkCommandList {
        items: vec![command(101, "Start", true, false)],
        errors: vec!["Role 'hdfs-dn9' does not exist.".to_string()],
    };

    let output = TableFormatter.format_bulk(&bulk).unwrap();

    assert!(output.contains("101"));
    assert!(output.contains("Rejected:\n  Role 'hdfs-dn9' does not exist."));
}

#[test]
fn test_table_users_without_roles() {
    let users: Vec<User> = serde_json::from_value(serde_json::json!([
        {"name": "admin", "roles": ["ROLE_ADMIN"]},
        {"name": "viewer", "roles": []}
    ]))
    .unwrap();

    let output = TableFormatter.format_users(&users).unwrap();
    assert!(output.lines().nth(2).unwrap().contains("ROLE_ADMIN"));
    assert!(output.lines().nth(3).unwrap().trim_end().ends_with(MISSING));
}

#[test]
fn test_json_command_uses_api_field_names() {
    let mut finished = command(42, "Start", false, true);
    finished.result_message = Some("done".to_string());

    let output = JsonFormatter.format_command(&finished).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["id"], 42);
    assert_eq!(value["active"], false);
    assert_eq!(value["resultMessage"], "done");
}

#[test]
fn test_json_bulk_keeps_errors() {
    let bulk = BulkCommandList {
        items: Vec::new(),
        errors: vec!["rejected".to_string()],
    };

    let output = JsonFormatter.format_bulk(&bulk).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(value["errors"][0], "rejected");
}

fn events_page() -> cm_client::EventQueryResult {
    serde_json::from_value(cm_client::testing::load_fixture("events/query_events.json")).unwrap()
}

#[test]
fn test_table_events_footer_and_truncation() {
    let mut page = events_page();
    page.items[1].content = Some("x".repeat(80));

    let output = TableFormatter.format_events(&page).unwrap();
    let lines: Vec<&str> = output.lines().collect();

    assert!(lines[0].starts_with("ID"));
    assert!(lines[2].contains("CRITICAL"));
    assert!(lines[2].contains("HEALTH_EVENT"));
    assert!(lines[2].contains("2013-01-07 14:02:11"));
    assert!(lines[3].ends_with(&format!("{}...", "x".repeat(57))));
    assert!(output.ends_with("Showing 2 of 57 matching events.\n"));
}

#[test]
fn test_table_events_empty() {
    let page = cm_client::EventQueryResult::default();
    assert_eq!(TableFormatter.format_events(&page).unwrap(), "No events found.\n");
}

#[test]
fn test_table_event_detail_lists_attributes() {
    let page = events_page();

    let detail = TableFormatter.format_event(&page.items[0]).unwrap();
    assert!(detail.contains("Alert:      yes"));
    assert!(detail.contains("  SERVICE: hdfs1"));
    assert!(detail.contains("  ROLE: hdfs-nn"));

    let bare = TableFormatter.format_event(&page.items[1]).unwrap();
    assert!(bare.contains(&format!("Occurred:   {MISSING}")));
    assert!(!bare.contains("Attributes:"));
}

#[test]
fn test_json_events_keep_total() {
    let output = JsonFormatter.format_events(&events_page()).unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["totalResults"], 57);
    assert_eq!(value["items"][0]["severity"], "CRITICAL");
}
