//! Integration tests for the awbx binary.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn missing_input_exits_nonzero() {
    let mut cmd = Command::cargo_bin("awbx").unwrap();
    cmd.arg("/no/such/path")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input path not found"));
}

#[test]
fn empty_directory_writes_header_only_csv() {
    let dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("awbx").unwrap();
    cmd.arg(dir.path()).assert().success();

    let csv = std::fs::read_to_string(dir.path().join("summary.csv")).unwrap();
    assert_eq!(csv.trim(), "filename,mawb,total");
}

#[test]
fn explicit_output_path_is_respected() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("report.csv");

    let mut cmd = Command::cargo_bin("awbx").unwrap();
    cmd.arg(dir.path()).arg(&out).assert().success();

    assert!(out.exists());
}

#[test]
fn unreadable_pdf_degrades_to_empty_row() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("broken.pdf"), b"not really a pdf").unwrap();

    let mut cmd = Command::cargo_bin("awbx").unwrap();
    cmd.arg(dir.path()).assert().success();

    let csv = std::fs::read_to_string(dir.path().join("summary.csv")).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("filename,mawb,total"));

    let row = lines.next().expect("one row for the failed document");
    assert!(row.contains("broken.pdf"));
    assert!(row.ends_with(",,"));
}
