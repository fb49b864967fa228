use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

fn sample_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("docs")
        .join("samples")
        .join(name)
}

#[test]
fn execute_accepted_program() {
    let mut cmd = cargo_bin_cmd!("toylang");
    cmd.arg("execute").arg(sample_path("030-read-write.toy"));

    let output_pred = predicate::str::contains("read : read (reserved word)")
        .and(predicate::str::contains("x : IDENTIFIER"))
        .and(predicate::str::contains("Program accepted: begin ... end"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn execute_rejected_program_exits_with_two() {
    let mut cmd = cargo_bin_cmd!("toylang");
    cmd.arg("execute")
        .arg(sample_path("100-missing-semicolon.toy"))
        .arg("--format")
        .arg("trace-simple");

    cmd.assert()
        .code(2)
        .stdout("Parser error: Expected ';', but got 'end'.\n");
}

#[test]
fn execute_reads_default_path_from_working_directory() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("code.txt"), "BEGIN DECLARE X ; END\n").unwrap();

    let mut cmd = cargo_bin_cmd!("toylang");
    cmd.current_dir(dir.path())
        .arg("execute")
        .arg("--format")
        .arg("trace-simple");

    cmd.assert().success().stdout(
        "Declare statement: declare IDENTIFIER ;\nProgram accepted: begin ... end\n",
    );
}

#[test]
fn local_config_file_selects_format() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("main.toy"), "begin write y ; end").unwrap();
    fs::write(
        dir.path().join("toylang.toml"),
        "[input]\npath = \"main.toy\"\n\n[output]\nformat = \"trace-json\"\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("toylang");
    cmd.current_dir(dir.path()).arg("execute");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"accepted\": true").and(predicate::str::contains("\"statement\": \"write\"")));
}

#[test]
fn keep_case_leaves_keywords_unrecognized() {
    let mut cmd = cargo_bin_cmd!("toylang");
    cmd.arg("execute")
        .arg(sample_path("000-empty-program.toy"))
        .arg("--keep-case")
        .arg("-f")
        .arg("trace-simple");

    cmd.assert()
        .code(2)
        .stdout(predicate::str::contains("Expected 'begin', but got 'BEGIN'."));
}

#[test]
fn missing_file_is_an_error() {
    let mut cmd = cargo_bin_cmd!("toylang");
    cmd.arg("execute").arg("does/not/exist.toy");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn unknown_format_is_an_error() {
    let mut cmd = cargo_bin_cmd!("toylang");
    cmd.arg("execute")
        .arg(sample_path("030-read-write.toy"))
        .arg("--format")
        .arg("ast-tag");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid stage: ast"));
}

#[test]
fn list_formats() {
    let mut cmd = cargo_bin_cmd!("toylang");
    cmd.arg("list-formats");

    cmd.assert().success().stdout(
        predicate::str::contains("token-simple")
            .and(predicate::str::contains("trace-json"))
            .and(predicate::str::contains("full-yaml")),
    );
}
