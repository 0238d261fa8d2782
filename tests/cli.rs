mod common;

use assert_cmd::Command;
use common::*;
use predicates::str::contains;
use tempfile::TempDir;

fn cmd() -> Command {
    Command::cargo_bin("vision-lint").unwrap()
}

#[test]
fn audit_clean_dataset() {
    let dir = TempDir::new().unwrap();
    write_valid(dir.path(), "ok.png");

    cmd()
        .args(["audit", "--no-progress"])
        .arg(dir.path())
        .assert()
        .code(0)
        .stdout(contains("Starting audit for path:"))
        .stdout(contains("Dataset is clean"));
}

#[test]
fn audit_broken_dataset_prints_table() {
    let dir = TempDir::new().unwrap();
    write_valid(dir.path(), "ok.jpg");
    write_empty(dir.path(), "empty.jpg");
    write_bytes(dir.path(), "corrupt.png", b"Not an image");

    cmd()
        .args(["audit", "--no-progress"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(contains("Dataset Integrity Issues"))
        .stdout(contains("empty.jpg"))
        .stdout(contains("Corrupted Image (imagesize)"))
        .stdout(contains("Found 2 issues."));
}

#[test]
fn audit_json_output() {
    let dir = TempDir::new().unwrap();
    write_empty(dir.path(), "empty.jpg");

    let output = cmd()
        .args(["audit", "--json"])
        .arg(dir.path())
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(json.as_array().unwrap().len(), 1);
    assert_eq!(json[0]["issue_type"], "Empty File");
    assert_eq!(json[0]["severity"], "Critical");
}

#[test]
fn audit_missing_path() {
    let dir = TempDir::new().unwrap();

    cmd()
        .args(["audit", "--no-progress"])
        .arg(dir.path().join("missing"))
        .assert()
        .code(1)
        .stdout(contains("Path Error"));
}

#[test]
fn audit_with_extension_filter() {
    let dir = TempDir::new().unwrap();
    write_empty(dir.path(), "empty.jpg");

    cmd()
        .args(["audit", "--no-progress", "-e", "png"])
        .arg(dir.path())
        .assert()
        .code(1)
        .stdout(contains("No Images Found"));
}

#[test]
fn no_subcommand_prints_help() {
    cmd().assert().success().stdout(contains("audit"));
}
