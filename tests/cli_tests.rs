//! Binary-level CLI checks: argument parsing and startup failures.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn cli_requires_an_identity_argument() {
    Command::cargo_bin("wishwatch")
        .unwrap()
        .assert()
        .failure()
        .stderr(predicate::str::contains("IDENTITY"));
}

#[test]
fn cli_help_names_the_identity_and_config_flags() {
    Command::cargo_bin("wishwatch")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("IDENTITY"))
        .stdout(predicate::str::contains("--config"));
}

#[test]
fn cli_returns_nonzero_on_missing_config() {
    Command::cargo_bin("wishwatch")
        .unwrap()
        .args(["org1", "--config", "definitely-not-a-config.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load config"));
}

#[test]
fn cli_returns_nonzero_on_invalid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        "[gateway]\napi_url = \"\"\nws_url = \"ws://localhost:8080/events\"\n",
    )
    .unwrap();

    Command::cargo_bin("wishwatch")
        .unwrap()
        .arg("org1")
        .arg("--config")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("api_url"));
}
