//! End-to-end tests that exercise the real `rocks` binary as a subprocess,
//! covering the CLI surface (§6) that the in-process `tests/common::run`
//! harness can't reach: argument-count dispatch and process exit codes.

use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;

fn write_source(name: &str, source: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("rocks-lang-cli-test-{name}-{}.rocks", std::process::id()));
    fs::write(&path, source).expect("write temp source file");
    path
}

#[test]
fn no_arguments_starts_a_repl_that_exits_cleanly_on_eof() {
    Command::cargo_bin("rocks").unwrap().write_stdin("").assert().success();
}

#[test]
fn two_or_more_arguments_is_bad_usage() {
    Command::cargo_bin("rocks")
        .unwrap()
        .arg("a.rocks")
        .arg("b.rocks")
        .assert()
        .failure()
        .code(64)
        .stderr("Usage: rocks [script]\n");
}

#[test]
fn running_a_file_that_succeeds_exits_zero() {
    let path = write_source("ok", "print 1 + 2;");
    Command::cargo_bin("rocks").unwrap().arg(&path).assert().success().stdout("3\n");
    fs::remove_file(&path).ok();
}

#[test]
fn running_a_file_with_a_static_error_exits_65() {
    let path = write_source("static-error", "fun f(;");
    Command::cargo_bin("rocks").unwrap().arg(&path).assert().failure().code(65);
    fs::remove_file(&path).ok();
}

#[test]
fn running_a_file_with_a_runtime_error_exits_70() {
    let path = write_source("runtime-error", "1/0;");
    Command::cargo_bin("rocks")
        .unwrap()
        .arg(&path)
        .assert()
        .failure()
        .code(70)
        .stderr("Cannot divide by 0.\n[line 1]\n");
    fs::remove_file(&path).ok();
}
