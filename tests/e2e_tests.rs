//! End-to-end tests for the storecheck CLI
//!
//! These tests verify:
//! - Text and JSON output against a mock store
//! - Exit codes for updates, failures and bad configuration
//! - Manifest loading from disk

use assert_cmd::Command;
use mockito::{Matcher, Server, ServerGuard};
use predicates::prelude::*;
use std::fs;

fn storecheck(server: &ServerGuard) -> Command {
    let mut cmd = Command::cargo_bin("storecheck").unwrap();
    cmd.env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(["--app-store-url", server.url().as_str()])
        .args(["--play-store-url", server.url().as_str()]);
    cmd
}

fn mock_ios(server: &mut ServerGuard, version: &str) -> mockito::Mock {
    server
        .mock("GET", "/lookup")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(format!(
            r#"{{"resultCount":1,"results":[{{"version":"{}","trackViewUrl":"https://apps.apple.com/app/id42"}}]}}"#,
            version
        ))
        .create()
}

#[test]
fn test_version_flag() {
    Command::cargo_bin("storecheck")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("storecheck"));
}

#[test]
fn test_update_available_text() {
    let mut server = Server::new();
    let _mock = mock_ios(&mut server, "1.10.0");

    storecheck(&server)
        .args(["-p", "ios", "-a", "com.example", "-c", "1.9.0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Update available"))
        .stdout(predicate::str::contains("1.10.0"))
        .stdout(predicate::str::contains("https://apps.apple.com/app/id42"));
}

#[test]
fn test_exit_code_flag() {
    let mut server = Server::new();
    let _mock = mock_ios(&mut server, "2.0.0");

    storecheck(&server)
        .args(["-p", "ios", "-a", "com.example", "-c", "1.0.0", "--exit-code"])
        .assert()
        .code(2);
}

#[test]
fn test_up_to_date_exit_code_zero() {
    let mut server = Server::new();
    let _mock = mock_ios(&mut server, "1.0.0");

    storecheck(&server)
        .args(["-p", "ios", "-a", "com.example", "-c", "1.0.0", "--exit-code"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date"));
}

#[test]
fn test_json_output() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/store/apps/details")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body("<div>Current Version</div><span>5.0.0</span>")
        .create();

    let output = storecheck(&server)
        .args(["-p", "android", "-a", "com.example", "-c", "4.2", "--json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed["status"], "update_available");
    assert_eq!(parsed["live_version"], "5.0.0");
    assert_eq!(
        parsed["store_url"],
        "https://play.google.com/store/apps/details?id=com.example"
    );
}

#[test]
fn test_lookup_failure_exits_non_zero() {
    let mut server = Server::new();
    let _mock = server
        .mock("GET", "/lookup")
        .match_query(Matcher::Any)
        .with_status(503)
        .create();

    storecheck(&server)
        .args(["-p", "ios", "-a", "com.example", "-c", "1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Lookup failed"))
        .stderr(predicate::str::contains("HTTP 503"))
        .stdout(predicate::str::contains("Up to date").not());
}

#[test]
fn test_missing_platform_is_config_error() {
    let server = Server::new();

    storecheck(&server)
        .args(["-a", "com.example", "-c", "1.0.0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no platform given"));
}

#[test]
fn test_manifest_file() {
    let mut server = Server::new();
    let _mock = mock_ios(&mut server, "3.0.0");

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storecheck.toml");
    fs::write(
        &path,
        "[app]\nversion = \"3.0.0\"\nbundle_id = \"com.example\"\nplatform = \"ios\"\n",
    )
    .unwrap();

    storecheck(&server)
        .arg("--manifest")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Up to date"));
}

#[test]
fn test_manifest_in_working_directory() {
    let mut server = Server::new();
    let _mock = mock_ios(&mut server, "3.1.0");

    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("storecheck.toml"),
        "[app]\nversion = \"3.0.0\"\nbundle_id = \"com.example\"\nplatform = \"ios\"\n",
    )
    .unwrap();

    storecheck(&server)
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Update available"))
        .stdout(predicate::str::contains("3.1.0"));
}
