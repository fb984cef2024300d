// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!       PhlowError (~24 bytes)
//!              |
//!   +------+---+---+------+
//!   |      |       |      |
//!   v      v       v      v
//! Bail  Process  Config   Io
//!         Box     Box    Box
//!
//! Process  StartFailed, StartAborted, ExecutionFailed,
//!          ExecutableNotFound, OutputError
//! Config   ParseError, InvalidValue
//! ```
//!
//! Library code returns [`ProcessError`] untouched so callers see the real
//! exit code and stderr; command handlers work in [`Result`] (`anyhow`).

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`PhlowError`].
pub type PhlowResult<T> = std::result::Result<T, PhlowError>;

/// Result type using [`ProcessError`].
pub type ProcessResult<T> = std::result::Result<T, ProcessError>;

/// Exit code reported when a process has no real exit status.
pub const GENERIC_FAILURE_CODE: i32 = 1;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at ~24 bytes on the stack.
#[derive(Debug, Error)]
pub enum PhlowError {
    /// Fatal error that should terminate the application.
    #[error("fatal error: {0}")]
    Bailed(Box<str>),

    /// Process execution error.
    #[error("process error: {0}")]
    Process(#[from] Box<ProcessError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// I/O error.
    #[error("io error: {0}")]
    Io(Box<std::io::Error>),
}

/// Create a fatal [`PhlowError::Bailed`] that terminates the application.
pub fn bail_out(message: impl Into<String>) -> PhlowError {
    PhlowError::Bailed(message.into().into_boxed_str())
}

impl PhlowError {
    /// Returns the underlying process error, if any.
    #[must_use]
    pub fn as_process(&self) -> Option<&ProcessError> {
        match self {
            Self::Process(e) => Some(e),
            _ => None,
        }
    }
}

// --- From implementations for boxing ---

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for PhlowError {
                fn from(err: $error) -> Self {
                    PhlowError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ProcessError => Process,
    ConfigError => Config,
    std::io::Error => Io,
}

// --- Process Errors ---

/// Process execution errors.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Executable not found in PATH.
    #[error("{name} is not in $PATH")]
    ExecutableNotFound { name: String },

    /// The process could not be launched at all.
    #[error("failed to start '{command}': {source}")]
    StartFailed {
        command: String,
        stderr: String,
        exit_code: i32,
        #[source]
        source: std::io::Error,
    },

    /// The process could not be launched under the `abort` policy.
    ///
    /// Fatal: callers propagate it to `main`, which exits with
    /// [`GENERIC_FAILURE_CODE`] once the log writers are flushed.
    #[error("failed to start '{command}', aborting: {source}")]
    StartAborted {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The process started and exited with a non-zero status.
    #[error("'{command}' exited with code {exit_code}: {}", .stderr.trim())]
    ExecutionFailed {
        command: String,
        exit_code: i32,
        stderr: String,
    },

    /// Waiting on or reading from a started process failed.
    #[error("failed to read output from '{command}': {source}")]
    OutputError {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

impl ProcessError {
    /// Exit code carried by this error.
    ///
    /// Start failures report [`GENERIC_FAILURE_CODE`]; lookups that never
    /// spawned anything report `None`.
    #[must_use]
    pub const fn exit_code(&self) -> Option<i32> {
        match self {
            Self::StartFailed { exit_code, .. } | Self::ExecutionFailed { exit_code, .. } => {
                Some(*exit_code)
            }
            Self::StartAborted { .. } | Self::OutputError { .. } => Some(GENERIC_FAILURE_CODE),
            Self::ExecutableNotFound { .. } => None,
        }
    }

    /// Captured stderr text, if a process was involved.
    #[must_use]
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::StartFailed { stderr, .. } | Self::ExecutionFailed { stderr, .. } => {
                Some(stderr)
            }
            Self::StartAborted { .. }
            | Self::OutputError { .. }
            | Self::ExecutableNotFound { .. } => None,
        }
    }

    /// Whether the process never got to run.
    #[must_use]
    pub const fn is_start_failure(&self) -> bool {
        matches!(
            self,
            Self::StartFailed { .. } | Self::StartAborted { .. } | Self::ExecutableNotFound { .. }
        )
    }

    /// Whether this error must end the program instead of being handled.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::StartAborted { .. })
    }
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration sources.
    #[error("failed to parse config: {message}")]
    ParseError { message: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },
}

#[cfg(test)]
mod tests;
