// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for the `phlow` binary.
//!
//! Runs the built executable to check output and exit-code propagation.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

/// Runs phlow in `cwd` with logging silenced.
fn phlow(args: &[&str], cwd: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_phlow"))
        .args(["-l", "0"])
        .args(args)
        .current_dir(cwd)
        .output()
        .expect("failed to run phlow")
}

fn run_git(args: &[&str], cwd: &Path) {
    let status = Command::new("git")
        .args(args)
        .current_dir(cwd)
        .env("GIT_AUTHOR_NAME", "Test")
        .env("GIT_AUTHOR_EMAIL", "test@test.com")
        .env("GIT_COMMITTER_NAME", "Test")
        .env("GIT_COMMITTER_EMAIL", "test@test.com")
        .status()
        .expect("failed to run git");
    assert!(status.success(), "git {args:?} failed");
}

fn init_test_repo(dir: &Path) {
    run_git(&["init", "-q"], dir);
    run_git(&["symbolic-ref", "HEAD", "refs/heads/master"], dir);
    run_git(&["commit", "--allow-empty", "-q", "-m", "Initial commit"], dir);
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn cli_version() {
    let temp = temp_dir();
    let output = phlow(&["version"], temp.path());
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), env!("CARGO_PKG_VERSION"));
}

#[test]
fn cli_no_command_fails() {
    let temp = temp_dir();
    let output = phlow(&[], temp.path());
    assert_eq!(output.status.code(), Some(1));
}

#[cfg(unix)]
#[test]
fn cli_exec_propagates_exit_code() {
    let temp = temp_dir();
    let output = phlow(&["exec", "sh", "-c", "echo oops >&2; exit 3"], temp.path());

    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("oops"));
}

#[cfg(unix)]
#[test]
fn cli_exec_forwards_stdout() {
    let temp = temp_dir();
    let output = phlow(&["exec", "echo", "hello"], temp.path());

    assert!(output.status.success());
    assert_eq!(stdout(&output), "hello\n");
}

#[test]
fn cli_exec_missing_program() {
    let temp = temp_dir();
    let output = phlow(&["exec", "nonexistent_program_12345"], temp.path());
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn cli_abort_policy_flushes_log_file() {
    let temp = temp_dir();
    let log = temp.path().join("phlow.log");
    let log_arg = log.display().to_string();

    let output = phlow(
        &[
            "--file-log-level",
            "5",
            "--log-file",
            &log_arg,
            "-s",
            "process.on_start_failure=abort",
            "exec",
            "nonexistent_program_12345",
        ],
        temp.path(),
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).starts_with("Aborting: "));
    let contents = std::fs::read_to_string(&log).expect("log file should exist");
    assert!(contents.contains("failed to start"), "{contents}");
}

#[test]
fn cli_which_reports_missing() {
    let temp = temp_dir();
    let output = phlow(&["which", "git", "nonexistent_program_12345"], temp.path());

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).starts_with("git: "));
    assert!(String::from_utf8_lossy(&output.stderr).contains("nonexistent_program_12345"));
}

#[test]
fn cli_branch_workflow() {
    let temp = temp_dir();
    init_test_repo(temp.path());
    let repo = temp.path().display().to_string();

    let created = phlow(&["-C", &repo, "branch", "create", "testphlow"], temp.path());
    assert!(created.status.success());
    assert_eq!(stdout(&created).trim(), "created branch 'testphlow'");

    let current = phlow(&["-C", &repo, "branch", "current"], temp.path());
    assert_eq!(stdout(&current).trim(), "testphlow");

    let listed = phlow(&["-C", &repo, "branch", "list", "--json"], temp.path());
    assert_eq!(stdout(&listed).trim(), r#"["master","testphlow"]"#);

    let duplicate = phlow(&["-C", &repo, "branch", "create", "testphlow"], temp.path());
    assert!(!duplicate.status.success());
    assert!(stdout(&duplicate).is_empty());
}

#[test]
fn cli_reads_local_config() {
    let temp = temp_dir();
    std::fs::write(
        temp.path().join("phlow.toml"),
        "[git]\nbranch_listing = \"plain\"\n",
    )
    .expect("write config");

    let options = phlow(&["options"], temp.path());
    assert!(stdout(&options).contains("git.branch_listing       = plain"));

    let inis = phlow(&["inis"], temp.path());
    assert!(stdout(&inis).contains("[optional] phlow.toml"));
}

#[test]
fn cli_invalid_config_fails() {
    let temp = temp_dir();
    std::fs::write(
        temp.path().join("phlow.toml"),
        "[git]\nbranch_listing = \"porcelain\"\n",
    )
    .expect("write config");

    let output = phlow(&["options"], temp.path());
    assert_eq!(output.status.code(), Some(1));
}
