//! Integration tests for the taskdeck CLI
//!
//! These tests drive the real binary, feeding session commands over stdin
//! the way a terminal user (or a script) would.


use assert_cmd::cargo;
use predicates::prelude::*;

/// Helper function to create a taskdeck command
fn taskdeck() -> assert_cmd::Command {
    assert_cmd::Command::new(cargo::cargo_bin!("taskdeck"))
}

#[test]
fn test_version_flag() {
    taskdeck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("taskdeck"));
}

#[test]
fn test_version_subcommand() {
    taskdeck()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("taskdeck v"));
}

#[test]
fn test_version_subcommand_json() {
    let output = taskdeck().args(["--json", "version"]).assert().success();

    let stdout = String::from_utf8(output.get_output().stdout.clone()).unwrap();
    let value: serde_json::Value = serde_json::from_str(stdout.trim()).unwrap();
    assert!(value["version"].is_string());
}

#[test]
fn test_help() {
    taskdeck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Track short text tasks"));
}

#[test]
fn test_no_args_starts_session() {
    // An empty stdin ends the session immediately
    taskdeck()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("type 'help' for commands"));
}

#[test]
fn test_session_ends_at_eof_without_quit() {
    taskdeck().write_stdin("add Buy milk\n").assert().success();
}
