//! Integration tests for structured exit codes.
//!
//! These tests verify that cmctl returns the correct exit codes
//! for different error scenarios, enabling reliable shell scripting.

mod common;

use common::cmctl_cmd_with_base_url;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn server_answering(status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/clusters"))
        .respond_with(ResponseTemplate::new(status).set_body_json(serde_json::json!({
            "message": "request failed"
        })))
        .mount(&server)
        .await;
    server
}

#[tokio::test]
async fn test_success_returns_exit_code_0() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .mount(&server)
        .await;

    cmctl_cmd_with_base_url(&server.uri())
        .args(["clusters", "list"])
        .assert()
        .code(0)
        .stdout("No clusters found.\n");
}

#[tokio::test]
async fn test_auth_failure_returns_exit_code_2() {
    let server = server_answering(401).await;
    cmctl_cmd_with_base_url(&server.uri())
        .env("CM_PASSWORD", "wrong")
        .args(["clusters", "list"])
        .assert()
        .code(2);
}

#[tokio::test]
async fn test_forbidden_returns_exit_code_6() {
    let server = server_answering(403).await;
    cmctl_cmd_with_base_url(&server.uri())
        .args(["clusters", "list"])
        .assert()
        .code(6);
}

#[tokio::test]
async fn test_unavailable_returns_exit_code_8() {
    let server = server_answering(503).await;
    cmctl_cmd_with_base_url(&server.uri())
        .args(["clusters", "list"])
        .assert()
        .code(8);
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    // Port 1 is reserved and closed on test hosts
    cmctl_cmd_with_base_url("http://127.0.0.1:1")
        .args(["clusters", "list"])
        .assert()
        .code(3);
}
