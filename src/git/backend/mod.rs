// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitBackend (trait) --> ShellBackend --> ProcessBuilder --> git CLI
//! ```

use bon::Builder;
use std::path::{Path, PathBuf};

use crate::core::process::{CommandResult, ProcessBuilder, StartFailurePolicy};
use crate::error::ProcessResult;

/// Something that can run a git subcommand and hand back its stdout.
///
/// Errors are the runner's own [`crate::error::ProcessError`], unchanged.
pub trait GitBackend {
    /// Run `git <args>` and return raw stdout.
    ///
    /// # Errors
    ///
    /// Returns a `ProcessError` if git cannot be started or exits non-zero.
    fn git(&self, args: &[&str]) -> ProcessResult<String>;

    /// Repository directory the commands run in (None = current directory).
    fn repository(&self) -> Option<&Path>;
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// Every call is a fresh subprocess; no state is kept between calls.
#[derive(Debug, Clone, Builder)]
pub struct ShellBackend {
    /// git executable name or path.
    #[builder(into, default = PathBuf::from("git"))]
    executable: PathBuf,
    /// Working directory for git (None = inherit).
    #[builder(into)]
    repository: Option<PathBuf>,
    #[builder(default)]
    on_start_failure: StartFailurePolicy,
}

impl Default for ShellBackend {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl ShellBackend {
    /// Returns the configured git executable.
    #[must_use]
    pub fn executable(&self) -> &Path {
        &self.executable
    }

    /// Prepares a git invocation. Sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    fn command(&self, args: &[&str]) -> ProcessBuilder {
        let builder = ProcessBuilder::new(&self.executable)
            .name("git")
            .args(args)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .on_start_failure(self.on_start_failure);

        match &self.repository {
            Some(dir) => builder.cwd(dir),
            None => builder,
        }
    }
}

impl GitBackend for ShellBackend {
    fn git(&self, args: &[&str]) -> ProcessResult<String> {
        self.command(args).run().map(CommandResult::into_stdout)
    }

    fn repository(&self) -> Option<&Path> {
        self.repository.as_deref()
    }
}

#[cfg(test)]
mod tests;
