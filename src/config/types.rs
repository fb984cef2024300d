// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration types for phlow-rs.
//!
//! # Config Structure
//!
//! ```text
//! Config: GlobalConfig, ProcessConfig, GitConfig
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::core::process::StartFailurePolicy;
use crate::git::BranchListing;
use crate::logging::LogLevel;

/// Global configuration options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for stdout output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file (unset = no file log).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// Subprocess execution options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessConfig {
    /// Whether a failure to start a process is returned or aborts phlow.
    pub on_start_failure: StartFailurePolicy,
}

/// Git invocation options.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GitConfig {
    /// git executable name or path.
    pub executable: PathBuf,
    /// Branch listing format.
    pub branch_listing: BranchListing,
    /// Repository directory (unset = current directory).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repository: Option<PathBuf>,
}

impl Default for GitConfig {
    fn default() -> Self {
        Self {
            executable: PathBuf::from("git"),
            branch_listing: BranchListing::default(),
            repository: None,
        }
    }
}
