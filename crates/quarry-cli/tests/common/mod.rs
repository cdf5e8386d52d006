use std::process::Output;

use serde_json::json;
use tokio::process::Command;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const SESSION_ID: &str = "SESSION-1";

/// Start a mock service that accepts any login and redirects to
/// `/instance`.
pub async fn service() -> MockServer {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/entry/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "sessionId": SESSION_ID,
            "serverUrl": format!("{}/instance", server.uri()),
            "passwordExpired": false,
            "userId": "005D0000001Az1Y"
        })))
        .mount(&server)
        .await;

    server
}

/// Run the CLI binary against `server` with credentials from the
/// environment, the way a user would configure it.
pub async fn run_cli(server: &MockServer, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_quarry"))
        .args(args)
        .env("QUARRY_ENTRY_URL", format!("{}/entry", server.uri()))
        .env("QUARRY_USERNAME", "alice@example.com")
        .env("QUARRY_PASSWORD", "hunter2")
        .env_remove("RUST_LOG")
        .output()
        .await
        .expect("Failed to execute CLI")
}

/// Run the CLI and expect success.
pub async fn run_cli_success(server: &MockServer, args: &[&str]) -> String {
    let output = run_cli(server, args).await;
    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        panic!("CLI command failed: {:?}\nstderr: {}", args, stderr);
    }
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Run the CLI and expect failure, returning stderr.
pub async fn run_cli_failure(server: &MockServer, args: &[&str]) -> String {
    let output = run_cli(server, args).await;
    if output.status.success() {
        panic!("CLI command should have failed: {:?}", args);
    }
    String::from_utf8_lossy(&output.stderr).to_string()
}
