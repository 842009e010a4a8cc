//! Integration tests for `spfr-cli check`.
//!
//! Responsibilities:
//! - Validate the summary for well-formed, malformed and empty files.
//! - Verify exit codes for unavailable and oversized files.
//!
//! Invariants:
//! - All tests use the hermetic `spfr_cmd()` helper.

mod common;

use common::{config_file, demo_config, spfr_cmd};
use predicates::prelude::*;

/// Test that `spfr-cli --help` lists the commands
#[test]
fn test_help_lists_commands() {
    spfr_cmd().arg("--help").assert().success().stdout(
        predicate::str::contains("check")
            .and(predicate::str::contains("dump"))
            .and(predicate::str::contains("get")),
    );
}

/// Test that the demo file passes the check
#[test]
fn test_check_demo_file() {
    spfr_cmd()
        .arg("--config")
        .arg(demo_config())
        .arg("check")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK:").and(predicate::str::contains("10 parameters")));
}

/// Test that an odd token count fails with exit code 3
#[test]
fn test_check_odd_token_count() {
    let file = config_file("a: 1\nb\n");

    spfr_cmd()
        .arg("--config")
        .arg(file.path())
        .arg("check")
        .assert()
        .code(3)
        .stdout(predicate::str::contains("INVALID:"))
        .stderr(predicate::str::contains("Here an example of an allowed format"));
}

/// Test that a comment-only file is reported as invalid
#[test]
fn test_check_empty_file() {
    let file = config_file("# nothing here\n");

    spfr_cmd()
        .env("SPFR_CONFIG_PATH", file.path())
        .args(["check", "-o", "json"])
        .assert()
        .code(3)
        .stdout(predicate::str::contains("\"valid\": false"));
}

/// Test that a missing file fails with exit code 2
#[test]
fn test_check_missing_file() {
    let dir = tempfile::TempDir::new().unwrap();

    spfr_cmd()
        .arg("--config")
        .arg(dir.path().join("missing.config"))
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("does not exist"));
}

/// Test that a directory is rejected with exit code 2
#[test]
fn test_check_directory() {
    let dir = tempfile::TempDir::new().unwrap();

    spfr_cmd()
        .arg("--config")
        .arg(dir.path())
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("not a regular file"));
}

/// Test that --max-bytes rejects larger files with exit code 2
#[test]
fn test_check_oversized_file() {
    let file = config_file("number_int: 12\n");

    spfr_cmd()
        .arg("--config")
        .arg(file.path())
        .args(["--max-bytes", "4", "check"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("exceeds the limit of 4 Bytes"));
}

/// Test that SPFR_MAX_BYTES is honored
#[test]
fn test_check_env_max_bytes() {
    let file = config_file("number_int: 12\n");

    spfr_cmd()
        .env("SPFR_MAX_BYTES", "4")
        .arg("--config")
        .arg(file.path())
        .arg("check")
        .assert()
        .code(2);
}

/// Test that a missing --config is a general error
#[test]
fn test_check_without_config() {
    spfr_cmd()
        .arg("check")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("No parameter file given"));
}
