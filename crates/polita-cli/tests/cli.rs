//! CLI test cases.
//!
//! The extract and text tests run against a fixture that is deliberately
//! not a PDF, so they pass whether or not poppler-utils is installed.

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;

/// Create a new `Command` with our binary.
fn cmd() -> Command {
    Command::cargo_bin("polita").unwrap()
}

#[test]
fn test_help() {
    cmd().arg("--help").assert().success();
}

#[test]
fn test_version() {
    cmd().arg("--version").assert().success();
}

#[test]
fn rules_table_lists_every_field() {
    cmd()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== vin ==="))
        .stdout(predicate::str::contains("=== plate ==="))
        .stdout(predicate::str::contains("=== validity ==="))
        .stdout(predicate::str::contains("=== name ==="));
}

#[test]
fn rules_json_is_a_parseable_array() {
    let output = cmd().args(["rules", "--output", "json"]).output().unwrap();
    assert!(output.status.success());

    let rules: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(rules.as_array().map(|a| a.len()), Some(4));
    assert_eq!(rules[0]["field"], "vin");
}

#[test]
fn validate_accepts_good_values() {
    cmd()
        .args([
            "validate",
            "--plate",
            "IS 12 ABC",
            "--vin",
            "WVWZZZ1JZXW000001",
            "--phone",
            "+40712345678",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("plate: IS 12 ABC ok"));
}

#[test]
fn validate_rejects_bad_plate() {
    cmd()
        .args(["validate", "--plate", "XYZ 1 A"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("INVALID"));
}

#[test]
fn validate_without_flags_is_a_usage_error() {
    cmd().arg("validate").assert().failure().code(2);
}

#[test]
fn extract_on_garbage_succeeds_with_empty_fields() {
    let output = cmd()
        .args(["extract", "tests/fixtures/not_a_pdf.pdf", "--output", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let fields: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(fields["name"], "");
    assert_eq!(fields["vin_number"], "");
    assert_eq!(fields["plate_number"], "");
    assert_eq!(fields["insurance_start"], "");
    assert_eq!(fields["insurance_end"], "");
}

#[test]
fn text_command_fails_on_garbage() {
    cmd()
        .args(["text", "tests/fixtures/not_a_pdf.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn extract_fails_on_missing_file() {
    cmd()
        .args(["extract", "tests/fixtures/does_not_exist.pdf"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
