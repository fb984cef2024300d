// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, GENERIC_FAILURE_CODE, PhlowError, PhlowResult, ProcessError};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "process".to_string(),
        key: "on_start_failure".to_string(),
        message: "expected 'return' or 'abort', got 'panic'".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'on_start_failure' in section '[process]': expected 'return' or 'abort', got 'panic'"
    );
}

#[test]
fn test_execution_failed_display_trims_stderr() {
    let err = ProcessError::ExecutionFailed {
        command: "git checkout -b bar".to_string(),
        exit_code: 128,
        stderr: "fatal: a branch named 'bar' already exists\n".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"'git checkout -b bar' exited with code 128: fatal: a branch named 'bar' already exists"
    );
    assert_eq!(err.exit_code(), Some(128));
    assert_eq!(
        err.stderr(),
        Some("fatal: a branch named 'bar' already exists\n")
    );
    assert!(!err.is_start_failure());
}

#[test]
fn test_not_found_names_executable() {
    let err = ProcessError::ExecutableNotFound {
        name: "nonexistent_program_12345".to_string(),
    };
    insta::assert_snapshot!(err.to_string(), @"nonexistent_program_12345 is not in $PATH");
    assert_eq!(err.exit_code(), None);
    assert!(err.is_start_failure());
}

#[test]
fn test_start_failure_uses_generic_code() {
    let err = ProcessError::StartFailed {
        command: "missing".to_string(),
        stderr: String::new(),
        exit_code: GENERIC_FAILURE_CODE,
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert_eq!(err.exit_code(), Some(1));
    assert_eq!(err.stderr(), Some(""));

    let wrapped = PhlowError::from(err);
    assert!(wrapped.as_process().is_some_and(ProcessError::is_start_failure));
}

#[test]
fn test_start_aborted_is_fatal() {
    let err = ProcessError::StartAborted {
        command: "missing".to_string(),
        source: std::io::Error::from(std::io::ErrorKind::NotFound),
    };
    assert!(err.is_fatal());
    assert!(err.is_start_failure());
    assert_eq!(err.exit_code(), Some(GENERIC_FAILURE_CODE));
    assert_eq!(err.stderr(), None);

    let other = ProcessError::ExecutableNotFound {
        name: "git".to_string(),
    };
    assert!(!other.is_fatal());
}

#[test]
fn test_phlow_error_size() {
    // Box<str> variant (Bailed) is 16 bytes (fat pointer: ptr + len)
    let size = std::mem::size_of::<PhlowError>();
    assert!(size <= 24, "PhlowError is {size} bytes, expected <= 24");
}

#[test]
fn test_phlow_result_size() {
    let size = std::mem::size_of::<PhlowResult<()>>();
    assert!(size <= 24, "PhlowResult<()> is {size} bytes, expected <= 24");
}
