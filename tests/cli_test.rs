/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use clipboard_history_explorer::models::DataType;
use common::{HistoryFileBuilder, RecordBuilder};
use predicates::prelude::*;

#[test]
fn test_cli_stats_with_data_override() {
    let (dir, path) = HistoryFileBuilder::new()
        .with_record(RecordBuilder::new(1).content("hello").build())
        .with_record(RecordBuilder::new(2).data_type(DataType::Image).content("s.png").build())
        .with_record(RecordBuilder::new(3).content("starred").favorite().build())
        .build();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipboard-history-explorer"));
    cmd.arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Clipboard History Statistics"))
        .stdout(predicate::str::contains("Total items: 3"))
        .stdout(predicate::str::contains("Text: 2"))
        .stdout(predicate::str::contains("Images: 1"))
        .stdout(predicate::str::contains("Favorites: 1"));
    drop(dir);
}

#[test]
fn test_cli_stats_missing_file_reports_empty_history() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("nothing-here.json");

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipboard-history-explorer"));
    cmd.arg("--data")
        .arg(&path)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Total items: 0"));
}

#[test]
fn test_cli_stats_corrupt_file_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("history.json");
    std::fs::write(&path, "{broken").unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipboard-history-explorer"));
    cmd.arg("--data").arg(&path).arg("stats").assert().failure();
}

#[test]
fn test_cli_help_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipboard-history-explorer"));
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Browse and search clipboard history"))
        .stdout(predicate::str::contains("stats"));
}

#[test]
fn test_cli_version_flag() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipboard-history-explorer"));
    cmd.arg("--version").assert().success().stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_cli_unknown_subcommand_fails() {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_clipboard-history-explorer"));
    cmd.arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
