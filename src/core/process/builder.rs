// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process builder with configuration options.
//!
//! ```text
//! ProcessBuilder
//!  • new/which/exists/find
//!  • arg/args/cwd/env/name/on_start_failure
//!  • run() --> CommandResult
//!
//! StartFailurePolicy: Return (default) | Abort
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};
use std::sync::{OnceLock, RwLock};

use crate::error::{ConfigError, ProcessError, ProcessResult};

/// Static cache for executable paths resolved via `which`.
static EXECUTABLE_CACHE: OnceLock<RwLock<BTreeMap<String, PathBuf>>> = OnceLock::new();

/// Get the executable cache, initializing if needed.
fn exe_cache() -> &'static RwLock<BTreeMap<String, PathBuf>> {
    EXECUTABLE_CACHE.get_or_init(|| RwLock::new(BTreeMap::new()))
}

/// What to do when a process cannot even be started.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartFailurePolicy {
    /// Log the failure and hand a `StartFailed` error back to the caller.
    #[default]
    Return,
    /// Log the failure and return a fatal `StartAborted` error, which ends
    /// phlow with exit code 1.
    Abort,
}

impl std::fmt::Display for StartFailurePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Return => write!(f, "return"),
            Self::Abort => write!(f, "abort"),
        }
    }
}

impl std::str::FromStr for StartFailurePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "return" => Ok(Self::Return),
            "abort" => Ok(Self::Abort),
            _ => Err(ConfigError::InvalidValue {
                section: "process".to_string(),
                key: "on_start_failure".to_string(),
                message: format!("expected 'return' or 'abort', got '{s}'"),
            }),
        }
    }
}

/// Output from a completed process.
///
/// Stdout and stderr are captured separately and never interleaved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    exit_code: i32,
    stdout: String,
    stderr: String,
}

impl CommandResult {
    /// Creates a new `CommandResult` (for internal use).
    pub(super) const fn new(exit_code: i32, stdout: String, stderr: String) -> Self {
        Self {
            exit_code,
            stdout,
            stderr,
        }
    }

    /// Returns the process exit code (0 = success).
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        self.exit_code
    }

    /// Returns captured stdout.
    #[must_use]
    pub fn stdout(&self) -> &str {
        &self.stdout
    }

    /// Returns captured stderr.
    #[must_use]
    pub fn stderr(&self) -> &str {
        &self.stderr
    }

    /// Consumes the result, returning stdout.
    #[must_use]
    pub fn into_stdout(self) -> String {
        self.stdout
    }

    /// Returns true if the process exited successfully (code 0).
    #[must_use]
    pub const fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Builder for configuring and running a process.
#[derive(Debug, Clone)]
pub struct ProcessBuilder {
    /// Path to the executable
    program: PathBuf,
    /// Command-line arguments, passed to the OS unchanged
    args: Vec<OsString>,
    /// Working directory (None = inherit the caller's)
    cwd: Option<PathBuf>,
    /// Extra environment variables layered over the inherited environment
    env: BTreeMap<String, String>,
    /// Display name for logging
    name: Option<String>,
    /// Behaviour when spawning fails
    on_start_failure: StartFailurePolicy,
}

impl ProcessBuilder {
    /// Creates a new `ProcessBuilder` for the given program.
    ///
    /// The program can be an absolute path, relative path, or just the executable name.
    /// A bare name is resolved via PATH by the OS when the process is spawned.
    pub fn new(program: impl AsRef<Path>) -> Self {
        Self {
            program: program.as_ref().to_path_buf(),
            args: Vec::new(),
            cwd: None,
            env: BTreeMap::new(),
            name: None,
            on_start_failure: StartFailurePolicy::default(),
        }
    }

    /// Creates a `ProcessBuilder` after resolving the program via PATH.
    ///
    /// Results are cached for subsequent lookups of the same program.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError::ExecutableNotFound` if the executable is not found in PATH.
    pub fn which(program: &str) -> ProcessResult<Self> {
        Self::find(program)
            .map(Self::new)
            .ok_or_else(|| ProcessError::ExecutableNotFound {
                name: program.to_string(),
            })
    }

    /// Checks if an executable exists in PATH.
    #[must_use]
    pub fn exists(program: &str) -> bool {
        Self::find(program).is_some()
    }

    /// Finds the full path to an executable in PATH.
    ///
    /// Results are cached for subsequent lookups.
    /// Returns `None` if the executable is not found.
    #[must_use]
    pub fn find(program: &str) -> Option<PathBuf> {
        // Check cache first (read lock)
        {
            let cache = exe_cache()
                .read()
                .unwrap_or_else(std::sync::PoisonError::into_inner);
            if let Some(path) = cache.get(program) {
                return Some(path.clone());
            }
        }

        which::which(program).map_or(None, |path| {
            {
                let mut cache = exe_cache()
                    .write()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                cache.insert(program.to_string(), path.clone());
            }
            Some(path)
        })
    }

    /// Adds an argument to the command.
    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    /// Adds multiple arguments to the command.
    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|arg| arg.as_ref().to_os_string()));
        self
    }

    /// Sets the working directory for the process.
    #[must_use]
    pub fn cwd(mut self, dir: impl AsRef<Path>) -> Self {
        self.cwd = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Sets an environment variable on top of the inherited environment.
    #[must_use]
    pub fn env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Sets a display name for logging.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the behaviour when the process cannot be started.
    #[must_use]
    pub const fn on_start_failure(mut self, policy: StartFailurePolicy) -> Self {
        self.on_start_failure = policy;
        self
    }

    // Getters for field access within the process module

    /// Returns a reference to the program path.
    #[must_use]
    pub const fn program(&self) -> &PathBuf {
        &self.program
    }

    /// Returns a slice of the arguments.
    #[must_use]
    pub fn args_slice(&self) -> &[OsString] {
        &self.args
    }

    /// Returns a reference to the working directory, if set.
    #[must_use]
    pub const fn working_dir(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }

    /// Returns the extra environment variables.
    pub(super) const fn environment(&self) -> &BTreeMap<String, String> {
        &self.env
    }

    /// Returns the display name, if set.
    pub(super) fn name_override(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the start failure policy.
    #[must_use]
    pub const fn start_failure_policy(&self) -> StartFailurePolicy {
        self.on_start_failure
    }
}
