//! End-to-end tests for the notemark binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn note(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    file.write_all(contents.as_bytes()).expect("write note");
    file
}

fn notemark() -> Command {
    let mut cmd = Command::cargo_bin("notemark").expect("binary to build");
    cmd.env_remove("NOTEMARK_CONFIG").env_remove("NOTEMARK_LOG");
    cmd
}

#[test]
fn prints_tokens() {
    let file = note("hello\nworld");
    notemark()
        .arg(file.path())
        .assert()
        .success()
        .stdout("TextSpan(hello, 1, 1)\nLineBreak(\\n, 1, 6)\nTextSpan(world, 2, 1)\n");
}

#[test]
fn prints_diagnostics_and_fails() {
    let file = note("ok\n=======\n");
    notemark()
        .arg(file.path())
        .assert()
        .code(65)
        .stdout(predicate::str::contains("2: =======\n"))
        .stdout(predicate::str::contains(
            "^ Header level cannot be greater than 6",
        ))
        .stdout(predicate::str::contains("TextSpan").not());
}

#[test]
fn reads_stdin() {
    notemark()
        .arg("-")
        .write_stdin("---")
        .assert()
        .success()
        .stdout("HRule(---, 1, 3)\n");
}

#[test]
fn column_mode_flag() {
    notemark()
        .args(["-", "--column-mode", "token-start"])
        .write_stdin("---")
        .assert()
        .success()
        .stdout("HRule(---, 1, 1)\n");
}

#[test]
fn json_format() {
    notemark()
        .args(["-", "--format", "json"])
        .write_stdin("#")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"kind\": \"Hash\""));
}

#[test]
fn source_format_strips_carriage_returns() {
    notemark()
        .args(["-", "--format", "source"])
        .write_stdin("a\r\nb")
        .assert()
        .success()
        .stdout("a\nb");
}

#[test]
fn config_file_sets_format() {
    let mut config = tempfile::Builder::new()
        .suffix(".toml")
        .tempfile()
        .expect("temp config");
    writeln!(config, "[output]\nformat = \"source\"").expect("write config");

    notemark()
        .arg("-")
        .arg("--config")
        .arg(config.path())
        .write_stdin("*x*")
        .assert()
        .success()
        .stdout("*x*");
}

#[test]
fn unknown_format_fails() {
    notemark()
        .args(["-", "--format", "xml"])
        .write_stdin("x")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Format 'xml' not found"));
}

#[test]
fn missing_file_fails() {
    notemark()
        .arg("/nonexistent/note.txt")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("IO error"));
}

#[test]
fn lists_formats() {
    notemark()
        .arg("--list-formats")
        .assert()
        .success()
        .stdout(predicate::str::contains("simple"))
        .stdout(predicate::str::contains("yaml"));
}

#[test]
fn json_diagnostics_and_fails() {
    let output = notemark()
        .args(["-", "--format", "json"])
        .write_stdin("ok\n=======\n")
        .assert()
        .code(65)
        .get_output()
        .stdout
        .clone();
    let records: serde_json::Value = serde_json::from_slice(&output).expect("json on stdout");
    assert_eq!(records[0]["line"], 2);
    assert_eq!(records[0]["column"], 7);
    assert_eq!(records[0]["line_text"], "=======");
}

#[test]
fn unknown_column_mode_is_rejected() {
    notemark()
        .args(["-", "--column-mode", "sideways"])
        .write_stdin("---")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("token-start"));
}
