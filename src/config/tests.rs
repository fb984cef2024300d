// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::Config;
use crate::core::process::StartFailurePolicy;
use crate::git::BranchListing;
use crate::logging::LogLevel;
use std::path::PathBuf;

#[test]
fn test_defaults() {
    let config = Config::parse("").expect("empty config should parse");

    assert_eq!(config.global.output_log_level, LogLevel::INFO);
    assert_eq!(config.process.on_start_failure, StartFailurePolicy::Return);
    assert_eq!(config.git.executable, PathBuf::from("git"));
    assert_eq!(config.git.branch_listing, BranchListing::Short);
    assert!(config.git.repository.is_none());
}

#[test]
fn test_parse_all_sections() {
    let toml = r#"
[global]
output_log_level = 4
log_file = "logs/phlow.log"

[process]
on_start_failure = "abort"

[git]
executable = "/usr/local/bin/git"
branch_listing = "plain"
repository = "/work/repo"
"#;
    let config = Config::parse(toml).expect("config should parse");

    assert_eq!(config.global.output_log_level, LogLevel::DEBUG);
    assert_eq!(
        config.global.log_file,
        Some(PathBuf::from("logs/phlow.log"))
    );
    assert_eq!(config.process.on_start_failure, StartFailurePolicy::Abort);
    assert_eq!(config.git.executable, PathBuf::from("/usr/local/bin/git"));
    assert_eq!(config.git.branch_listing, BranchListing::Plain);
    assert_eq!(config.git.repository, Some(PathBuf::from("/work/repo")));
}

#[test]
fn test_unknown_field_rejected() {
    let toml = r#"
[git]
remote = "origin"
"#;
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_invalid_log_level_rejected() {
    let toml = r"
[global]
output_log_level = 9
";
    assert!(Config::parse(toml).is_err());
}

#[test]
fn test_override_beats_file() {
    let config = Config::builder()
        .add_toml_str("[git]\nbranch_listing = \"plain\"\n")
        .set_assignment("git.branch_listing=short")
        .expect("assignment should parse")
        .set("git.repository", "/elsewhere")
        .build()
        .expect("config should build");

    assert_eq!(config.git.branch_listing, BranchListing::Short);
    assert_eq!(config.git.repository, Some(PathBuf::from("/elsewhere")));
}

#[test]
fn test_bad_assignment() {
    assert!(Config::builder().set_assignment("no-equals-sign").is_err());
    assert!(Config::builder().set_assignment("=value").is_err());
}

#[test]
fn test_loaded_files_listing() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let file = dir.path().join("phlow.toml");
    std::fs::write(&file, "[git]\nexecutable = \"git\"\n").expect("write config");

    let loader = Config::builder()
        .add_toml_file(&file)
        .add_toml_file_optional(dir.path().join("missing.toml"))
        .add_toml_str("");

    let listed = loader.format_loaded_files();
    assert_eq!(listed.len(), 2);
    assert!(listed[0].starts_with("1. [file] "));
    assert_eq!(listed[1], "2. [string] <string>");
    assert!(loader.build().is_ok());
}

#[test]
fn test_format_options() {
    let toml = r#"
[global]
log_file = "phlow.log"

[git]
repository = "/work/repo"
"#;
    let config = Config::parse(toml).expect("config should parse");
    insta::assert_snapshot!(config.format_options().join("\n"), @r"
    git.branch_listing       = short
    git.executable           = git
    git.repository           = /work/repo
    global.file_log_level    = 5
    global.log_file          = phlow.log
    global.output_log_level  = 3
    process.on_start_failure = return
    ");
}
