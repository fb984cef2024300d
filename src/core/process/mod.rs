// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Blocking process spawning with captured output.
//!
//! ```text
//! ProcessBuilder::new("git")
//!   .args() .cwd() .env() .on_start_failure()
//!   .run()
//!       --> std::process::Command
//!           stdout/stderr piped separately
//!       --> CommandResult { exit_code, stdout, stderr }
//!
//! execute(name, args)          --> stdout text
//! is_executable_available(name) --> PATH lookup
//! ```

pub mod builder;
mod runner;

pub use builder::{CommandResult, ProcessBuilder, StartFailurePolicy};
pub use runner::{execute, is_executable_available};
