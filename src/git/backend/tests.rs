// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::Path;

use super::{GitBackend, ShellBackend};
use crate::core::process::StartFailurePolicy;

#[test]
fn test_shell_backend_defaults() {
    let backend = ShellBackend::default();
    assert_eq!(backend.executable(), Path::new("git"));
    assert!(backend.repository().is_none());
}

#[test]
fn test_shell_backend_runs_in_repository() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let backend = ShellBackend::builder().repository(dir.path()).build();

    backend.git(&["init", "--quiet"]).expect("git init should succeed");
    let inside = backend
        .git(&["rev-parse", "--is-inside-work-tree"])
        .expect("rev-parse should succeed");

    assert_eq!(inside.trim(), "true");
}

#[test]
fn test_shell_backend_outside_repository_fails() {
    let dir = tempfile::tempdir().expect("failed to create temp dir");
    let backend = ShellBackend::builder().repository(dir.path()).build();

    let err = backend
        .git(&["rev-parse", "--abbrev-ref", "HEAD"])
        .expect_err("no repository here");

    assert_eq!(err.exit_code(), Some(128));
    assert!(err.stderr().is_some_and(|s| !s.is_empty()));
}

#[test]
fn test_shell_backend_missing_executable() {
    let backend = ShellBackend::builder()
        .executable("nonexistent_git_12345")
        .on_start_failure(StartFailurePolicy::Return)
        .build();

    let err = backend.git(&["branch"]).expect_err("missing git should fail");
    assert!(err.is_start_failure());
    assert_eq!(err.exit_code(), Some(1));
}
