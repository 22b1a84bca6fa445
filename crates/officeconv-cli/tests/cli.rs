//! Integration tests for the officeconv CLI.
//!
//! Everything here exercises validation and exit-code mapping, which fail
//! before any automation backend is launched; a LibreOffice install is
//! not required to run these.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn officeconv() -> Command {
    Command::cargo_bin("officeconv").unwrap()
}

#[test]
fn test_help() {
    officeconv()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Convert Office documents"))
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_version() {
    officeconv()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("officeconv"));
}

#[test]
fn test_no_arguments_is_a_usage_error() {
    officeconv()
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_single_argument_is_a_usage_error() {
    officeconv()
        .arg("report.docx")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_nonexistent_input_names_the_path() {
    officeconv()
        .arg("/no/such/dir/report.docx")
        .arg("pdf")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("/no/such/dir/report.docx"))
        .stderr(predicate::str::contains("does not exist"))
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_unsupported_extension_names_the_format() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("notes.txt");
    fs::write(&input, "plain text").unwrap();

    officeconv()
        .arg(&input)
        .arg("pdf")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("[txt]"))
        .stderr(predicate::str::contains("not supported"));
}

#[test]
fn test_missing_output_directory_is_a_usage_error() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("report.docx");
    fs::write(&input, "stub").unwrap();
    let output = temp.path().join("missing-dir").join("report.pdf");

    officeconv()
        .arg(&input)
        .arg(&output)
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("output directory"));
}

#[test]
fn test_unreachable_backend_is_a_runtime_error() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("report.docx");
    fs::write(&input, "stub").unwrap();

    officeconv()
        .env("OFFICECONV_SOFFICE", "/nonexistent/soffice-binary")
        .arg(&input)
        .arg("pdf")
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("failed to launch"));
}
