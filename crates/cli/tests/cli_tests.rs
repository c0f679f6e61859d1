use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

/// Command wired to a temp data file and an unreachable geocoder.
///
/// The dead geocoder endpoint exercises the fail-open contract: adds must
/// still succeed offline.
fn wanderlist(data_file: &Path) -> Command {
    let mut cmd = Command::cargo_bin("wanderlist").unwrap();
    cmd.env("WANDERLIST_DATA_FILE", data_file)
        .env("WANDERLIST_GEOCODER_URL", "http://127.0.0.1:1")
        .env("WANDERLIST_HTTP_TIMEOUT_SECS", "1");
    cmd
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("wanderlist").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Track travel destinations from the command line"));
}

#[test]
fn test_add_then_list() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("destinations.json");

    wanderlist(&data)
        .args(["add", "Lisbon"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added \"Lisbon\"."));

    wanderlist(&data)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Lisbon"));
}

#[test]
fn test_duplicate_add_fails() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("destinations.json");

    wanderlist(&data).args(["add", "Lisbon"]).assert().success();
    wanderlist(&data)
        .args(["add", "lisbon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in your list"));
}

#[test]
fn test_bulk_add_reports_counts() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("destinations.json");

    wanderlist(&data)
        .args(["add", "Rome, Milan, rome"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added 2 destinations."));
}

#[test]
fn test_export_import_cycle() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("destinations.json");
    let exported = dir.path().join("trip.json");

    wanderlist(&data).args(["add", "Rome, Milan"]).assert().success();
    wanderlist(&data)
        .args(["export", exported.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 2 destinations"));

    // Importing into a fresh list succeeds; importing over the same list
    // collides on every name and leaves it unchanged.
    let fresh = dir.path().join("fresh.json");
    wanderlist(&fresh)
        .args(["import", exported.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Imported 2 destinations."));

    wanderlist(&data)
        .args(["import", exported.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already in your list"));
}

#[test]
fn test_stats_output() {
    let dir = tempfile::tempdir().unwrap();
    let data = dir.path().join("destinations.json");

    wanderlist(&data).args(["add", "Rome, Milan"]).assert().success();
    wanderlist(&data)
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 of 2 visited (0%)"));
}
