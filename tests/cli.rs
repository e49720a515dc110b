//! Integration test: the antidocx binary

mod common;

use assert_cmd::Command;
use common::{archive, docx, document_xml};
use predicates::prelude::*;
use std::fs;

const HELLO: &str = r#"<w:p><w:r><w:t>Hello, big World!</w:t></w:r></w:p>"#;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_antidocx"))
}

#[test]
fn test_reads_piped_stdin() {
    cli()
        .write_stdin(docx(&document_xml(HELLO)))
        .assert()
        .success()
        .stdout("\nHello, big World! \n\n");
}

#[test]
fn test_dash_means_stdin() {
    cli()
        .args(["-w", "6", "-"])
        .write_stdin(docx(&document_xml(HELLO)))
        .assert()
        .success()
        .stdout("\nHello, \nbig \nWorld! \n\n");
}

#[test]
fn test_reads_file_argument() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hello.docx");
    fs::write(&path, docx(&document_xml(HELLO))).unwrap();

    cli()
        .arg("--width")
        .arg("12")
        .arg(&path)
        .assert()
        .success()
        .stdout("\nHello, big \nWorld! \n\n");
}

#[test]
fn test_missing_document_part_fails() {
    cli()
        .write_stdin(archive(&[("word/styles.xml", "<w:styles/>")]))
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::starts_with(
            "antidocx: Missing required part: word/document.xml",
        ));
}

#[test]
fn test_empty_stdin_fails() {
    cli()
        .write_stdin(Vec::new())
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("antidocx: ZIP error"));
}

#[test]
fn test_missing_file_fails() {
    let dir = tempfile::tempdir().unwrap();
    cli()
        .arg(dir.path().join("absent.docx"))
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("antidocx: IO error"));
}

#[test]
fn test_bad_width_is_a_usage_error() {
    cli()
        .args(["-w", "wide"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("COLUMNS"));
}

#[test]
fn test_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--width <COLUMNS>"));
}
