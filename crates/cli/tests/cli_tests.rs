//! Integration tests for cmctl argument handling and read-only commands.
//!
//! Tests cover:
//! - Help output and required configuration
//! - Output format selection (table, json)
//! - Read-only resource listings against a mock server

mod common;

use common::{cmctl_cmd, cmctl_cmd_with_base_url, load_fixture};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_help_lists_subcommands() {
    cmctl_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("clusters")
            .and(predicate::str::contains("services"))
            .and(predicate::str::contains("roles"))
            .and(predicate::str::contains("commands"))
            .and(predicate::str::contains("--poll-interval")),
    );
}

#[test]
fn test_lifecycle_help_mentions_wait() {
    cmctl_cmd()
        .args(["services", "start", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--wait"));
}

#[test]
fn test_missing_base_url_fails() {
    cmctl_cmd()
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Base URL is required"));
}

#[test]
fn test_missing_credentials_fail() {
    cmctl_cmd_with_base_url("http://localhost:7180")
        .env_remove("CM_PASSWORD")
        .arg("version")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Credentials are required"));
}

#[test]
fn test_zero_poll_interval_rejected() {
    cmctl_cmd_with_base_url("http://localhost:7180")
        .args(["--poll-interval", "0", "commands", "wait", "42"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("poll interval must be greater than 0"));
}

#[tokio::test]
async fn test_invalid_output_format() {
    let server = MockServer::start().await;

    cmctl_cmd_with_base_url(&server.uri())
        .args(["--output", "xml", "version"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid output format: xml"));
}

#[tokio::test]
async fn test_echo_prints_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/tools/echo"))
        .and(query_param("message", "ping"))
        .and(header("authorization", "Basic YWRtaW46YWRtaW4="))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "message": "ping"
        })))
        .expect(1)
        .mount(&server)
        .await;

    cmctl_cmd_with_base_url(&server.uri())
        .args(["echo", "ping"])
        .assert()
        .success()
        .stdout("ping\n");
}

#[tokio::test]
async fn test_api_version_flag_changes_root() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v3/cm/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("cm/version.json")))
        .expect(1)
        .mount(&server)
        .await;

    cmctl_cmd_with_base_url(&server.uri())
        .args(["--api-version", "v3", "version"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Version:         4.1.2"));
}

#[tokio::test]
async fn test_version_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/cm/version"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("cm/version.json")))
        .mount(&server)
        .await;

    let output = cmctl_cmd_with_base_url(&server.uri())
        .args(["--output", "json", "version"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["version"], "4.1.2");
    assert_eq!(value["buildUser"], "jenkins");
}

#[tokio::test]
async fn test_clusters_list_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clusters"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("clusters/list_clusters.json")),
        )
        .mount(&server)
        .await;

    cmctl_cmd_with_base_url(&server.uri())
        .args(["clusters", "list"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("NAME")
                .and(predicate::str::contains("Cluster 1 - CDH4"))
                .and(predicate::str::contains("CDH3")),
        );
}

#[tokio::test]
async fn test_clusters_show_encodes_name() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clusters/Cluster%201%20-%20CDH4"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "Cluster 1 - CDH4",
            "version": "CDH4"
        })))
        .expect(1)
        .mount(&server)
        .await;

    cmctl_cmd_with_base_url(&server.uri())
        .args(["clusters", "show", "Cluster 1 - CDH4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cluster 1 - CDH4"));
}

#[tokio::test]
async fn test_services_roles_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/clusters/prod/services/hdfs1/roles"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("services/list_roles.json")),
        )
        .mount(&server)
        .await;

    cmctl_cmd_with_base_url(&server.uri())
        .args(["services", "roles", "prod", "hdfs1"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("hdfs-nn")
                .and(predicate::str::contains("NAMENODE"))
                .and(predicate::str::contains("BUSY")),
        );
}

#[tokio::test]
async fn test_hosts_list_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/hosts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("hosts/list_hosts.json")))
        .mount(&server)
        .await;

    let output = cmctl_cmd_with_base_url(&server.uri())
        .args(["-o", "json", "hosts", "list"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let hosts: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(hosts.as_array().map(Vec::len), Some(2));
    assert_eq!(hosts[0]["hostId"], "host-1");
}

#[tokio::test]
async fn test_users_list_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("users/list_users.json")))
        .mount(&server)
        .await;

    cmctl_cmd_with_base_url(&server.uri())
        .args(["users", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("ROLE_ADMIN").and(predicate::str::contains("viewer")));
}

#[tokio::test]
async fn test_events_list_passes_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/events"))
        .and(query_param("query", "alert==true"))
        .and(query_param("maxResults", "2"))
        .and(query_param("resultOffset", "5"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(load_fixture("events/query_events.json")),
        )
        .expect(1)
        .mount(&server)
        .await;

    cmctl_cmd_with_base_url(&server.uri())
        .args([
            "events",
            "list",
            "--query",
            "alert==true",
            "--max-results",
            "2",
            "--offset",
            "5",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("CRITICAL")
                .and(predicate::str::contains("AUDIT_EVENT"))
                .and(predicate::str::contains("Showing 2 of 57 matching events.")),
        );
}

#[tokio::test]
async fn test_events_show_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/events/e-1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": "e-1",
            "content": "Role hdfs-nn stopped",
            "category": "ACTIVITY_EVENT",
            "severity": "IMPORTANT",
            "alert": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let output = cmctl_cmd_with_base_url(&server.uri())
        .args(["--output", "json", "events", "show", "e-1"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["id"], "e-1");
    assert_eq!(value["severity"], "IMPORTANT");
}

#[tokio::test]
async fn test_events_show_missing_event_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/events/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Event 'nope' not found"
        })))
        .mount(&server)
        .await;

    cmctl_cmd_with_base_url(&server.uri())
        .args(["events", "show", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to get event nope"));
}
