//! CLI end-to-end tests
//!
//! Tests for the stashrename command-line interface. Commands that talk to
//! Stash run against a [`MockStash`] on a random local port.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

use sr_testkit::MockStash;

#[allow(deprecated)]
fn stashrename_cmd() -> Command {
    Command::cargo_bin("stashrename").unwrap()
}

fn write_config(dir: &Path, url: &str) -> std::path::PathBuf {
    let path = dir.join("config.json");
    fs::write(
        &path,
        serde_json::json!({ "stash": { "url": url, "timeout_secs": 5 } }).to_string(),
    )
    .unwrap();
    path
}

#[test]
fn test_cli_no_args_shows_help() {
    stashrename_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    stashrename_cmd()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stashrename"));
}

#[test]
fn test_cli_validate_default() {
    stashrename_cmd()
        .arg("validate")
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("http://localhost:9999/graphql"));
}

#[test]
fn test_cli_validate_reports_warnings() {
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), "localhost:9999");

    stashrename_cmd()
        .arg("validate")
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("not an http(s) URL"));
}

#[test]
fn test_cli_validate_rejects_malformed_config() {
    let dir = tempdir().unwrap();
    let config = dir.path().join("config.json");
    fs::write(&config, "{ nope").unwrap();

    stashrename_cmd()
        .arg("validate")
        .arg(&config)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid config"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_ping() {
    let stash = MockStash::start().await;
    stash.enable_version_stub().await;
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &stash.graphql_url());

    stashrename_cmd()
        .args(["-c", config.to_str().unwrap(), "ping"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Stash v0.18.0"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_scene_json() {
    let stash = MockStash::start().await;
    stash
        .enable_scene_paths_by_id_stub(7, "Foo", ["/a.mp4", "/b.mp4"])
        .await;
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &stash.graphql_url());

    let output = stashrename_cmd()
        .args(["-c", config.to_str().unwrap(), "scene", "7", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let printed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let expected = serde_json::json!({
        "id": "7",
        "title": "Foo",
        "tags": [],
        "performers": [],
        "original_filenames": ["/somewhere/else.mp4"]
    });
    sr_testkit::assert_scene_json_eq(&expected, &printed);
    assert_eq!(
        printed["original_filenames"],
        serde_json::json!(["/a.mp4", "/b.mp4"])
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_cli_ping_without_stub_fails() {
    let stash = MockStash::start().await;
    let dir = tempdir().unwrap();
    let config = write_config(dir.path(), &stash.graphql_url());

    stashrename_cmd()
        .args(["-c", config.to_str().unwrap(), "ping"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("404"));
}
