// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! `exec` and `which` command implementations.

use std::io::Write as _;

use crate::cli::exec::{ExecArgs, WhichArgs};
use crate::config::Config;
use crate::core::process::{ProcessBuilder, is_executable_available};
use crate::error::Result;

/// Runs an external program in the current directory.
///
/// Captured stdout and stderr are replayed on success; on failure the
/// returned `ProcessError` carries the exit code and stderr.
///
/// # Errors
///
/// Returns the `ProcessError` if the program cannot start or exits non-zero.
pub fn run_exec_command(args: &ExecArgs, config: &Config) -> Result<()> {
    let result = ProcessBuilder::new(&args.program)
        .args(&args.args)
        .on_start_failure(config.process.on_start_failure)
        .run()?;

    std::io::stdout().write_all(result.stdout().as_bytes())?;
    std::io::stderr().write_all(result.stderr().as_bytes())?;
    Ok(())
}

/// Prints the resolved path of each executable.
///
/// # Errors
///
/// Returns the lookup error for the first executable missing from PATH.
/// Every name is still checked and reported before returning.
pub fn run_which_command(args: &WhichArgs) -> Result<()> {
    let mut first_missing = None;

    for name in &args.names {
        match is_executable_available(name) {
            Ok(()) => {
                if let Some(path) = ProcessBuilder::find(name) {
                    println!("{name}: {}", path.display());
                }
            }
            Err(e) => {
                eprintln!("{e}");
                if first_missing.is_none() {
                    first_missing = Some(e);
                }
            }
        }
    }

    first_missing.map_or(Ok(()), |e| Err(e.into()))
}
