// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command implementations.
//!
//! ```text
//! CLI args --> cmd::run_* handlers
//!   branch, config, exec
//!
//! anyhow::Error --> exit_code_for() --> process exit status
//! ```

pub mod branch;
pub mod config;
pub mod exec;


use std::process::ExitCode;

use crate::error::{PhlowError, ProcessError};

/// Maps a command failure to the exit status phlow should report.
#[must_use]
pub fn exit_code_for(err: &anyhow::Error) -> ExitCode {
    ExitCode::from(exit_status_for(err))
}

/// Child process failures propagate the child's exit code; codes outside
/// `1..=255` and every other error map to 1.
#[must_use]
pub fn exit_status_for(err: &anyhow::Error) -> u8 {
    let code = process_error(err)
        .and_then(ProcessError::exit_code)
        .unwrap_or(1);

    u8::try_from(code).ok().filter(|c| *c != 0).unwrap_or(1)
}

/// Whether the failure was an abort rather than an ordinary command error.
#[must_use]
pub fn is_fatal(err: &anyhow::Error) -> bool {
    process_error(err).is_some_and(ProcessError::is_fatal)
}

fn process_error(err: &anyhow::Error) -> Option<&ProcessError> {
    err.downcast_ref::<ProcessError>().or_else(|| {
        err.downcast_ref::<PhlowError>()
            .and_then(PhlowError::as_process)
    })
}
