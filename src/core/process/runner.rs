// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process execution and lifecycle management.
//!
//! ```text
//!            run()
//!              |
//!              v
//!     build_command()
//!     args, cwd, env, stdio
//!              |
//!              v
//!          spawn() ---- Err ---> StartFailed { exit_code: 1 }
//!              |                 (Abort policy: StartAborted)
//!              v
//!     wait_with_output() - Err -> OutputError
//!              |
//!              v
//!      exit_code == 0 ? ---- no --> ExecutionFailed { exit_code, stderr }
//!              |
//!              v
//!       CommandResult
//!    { exit_code, stdout, stderr }
//! ```

use std::process::{Command, ExitStatus, Stdio};
use tracing::{debug, error, trace, warn};

use super::builder::{CommandResult, ProcessBuilder, StartFailurePolicy};
use crate::error::{GENERIC_FAILURE_CODE, ProcessError, ProcessResult};

impl ProcessBuilder {
    /// Returns the display name for this process.
    fn display_name(&self) -> String {
        self.name_override().map_or_else(
            || {
                self.program().file_stem().map_or_else(
                    || "process".to_string(),
                    |s| s.to_string_lossy().into_owned(),
                )
            },
            String::from,
        )
    }

    /// Returns the full command line as a string (for logging and errors).
    #[must_use]
    pub fn command_line(&self) -> String {
        use std::fmt::Write as _;

        let mut cmd = format!("{}", self.program().display());
        for arg in self.args_slice() {
            let arg = arg.to_string_lossy();
            if arg.contains(' ') {
                let _ = write!(cmd, " \"{arg}\"");
            } else {
                let _ = write!(cmd, " {arg}");
            }
        }
        cmd
    }

    /// Spawns the process and blocks until it exits.
    ///
    /// # Errors
    ///
    /// - `StartFailed` if the process could not be spawned (exit code 1).
    /// - `StartAborted` instead of `StartFailed` under [`StartFailurePolicy::Abort`].
    /// - `OutputError` if waiting on the child or reading its pipes fails.
    /// - `ExecutionFailed` if the process exits with a non-zero status.
    pub fn run(self) -> ProcessResult<CommandResult> {
        let name = self.display_name();
        let cmd_line = self.command_line();

        if let Some(cwd) = self.working_dir() {
            debug!(cwd = %cwd.display(), "cd");
        }
        debug!(cmd = %cmd_line, "exec");

        let mut command = self.build_command();

        let child = match command.spawn() {
            Ok(child) => child,
            Err(source) => {
                error!(process = %name, cmd = %cmd_line, error = %source, "failed to start");
                if self.start_failure_policy() == StartFailurePolicy::Abort {
                    return Err(ProcessError::StartAborted {
                        command: cmd_line,
                        source,
                    });
                }
                return Err(ProcessError::StartFailed {
                    command: cmd_line,
                    stderr: String::new(),
                    exit_code: GENERIC_FAILURE_CODE,
                    source,
                });
            }
        };

        trace!(process = %name, pid = child.id(), "spawned");

        let output = child
            .wait_with_output()
            .map_err(|source| ProcessError::OutputError {
                command: cmd_line.clone(),
                source,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

        if !output.status.success() {
            let exit_code = exit_code_of(output.status);
            warn!(process = %name, exit_code, stderr = %stderr.trim(), "exit status");
            return Err(ProcessError::ExecutionFailed {
                command: cmd_line,
                exit_code,
                stderr,
            });
        }

        trace!(process = %name, exit_code = 0, "completed");
        Ok(CommandResult::new(0, stdout, stderr))
    }

    /// Builds the std Command from this builder's configuration.
    fn build_command(&self) -> Command {
        let mut command = Command::new(self.program());

        command.args(self.args_slice());

        if let Some(cwd) = self.working_dir() {
            command.current_dir(cwd);
        }

        for (key, value) in self.environment() {
            command.env(key, value);
        }

        command
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());

        command
    }
}

/// Extracts the real exit code from a wait status.
///
/// Signal-terminated children report `128 + signal` on Unix.
fn exit_code_of(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt as _;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    GENERIC_FAILURE_CODE
}

/// Runs `program` with `args` in the current directory and returns its stdout.
///
/// # Errors
///
/// Returns the [`ProcessError`] produced by [`ProcessBuilder::run`].
pub fn execute<I, S>(program: &str, args: I) -> ProcessResult<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<std::ffi::OsStr>,
{
    ProcessBuilder::new(program)
        .args(args)
        .run()
        .map(CommandResult::into_stdout)
}

/// Checks that `program` resolves against PATH.
///
/// # Errors
///
/// Returns `ProcessError::ExecutableNotFound` naming the executable when absent.
pub fn is_executable_available(program: &str) -> ProcessResult<()> {
    ProcessBuilder::which(program).map(|_| ())
}
