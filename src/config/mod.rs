// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for phlow-rs.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. local phlow.toml (cwd)
//! 3. --ini FILE (repeatable)
//! 4. PHLOW_* env vars
//! 5. CLI overrides (--set, -C, --log-level)
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! PHLOW_GIT__EXECUTABLE=/usr/bin/git      → git.executable
//! PHLOW_GIT__BRANCH_LISTING=plain         → git.branch_listing
//! PHLOW_PROCESS__ON_START_FAILURE=abort   → process.on_start_failure
//! ```

pub mod loader;
pub mod types;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;

use loader::ConfigLoader;
use types::{GitConfig, GlobalConfig, ProcessConfig};

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Subprocess options.
    pub process: ProcessConfig,
    /// Git options.
    pub git: GitConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use phlow_rs::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("phlow.toml")
    ///     .with_env_prefix("PHLOW")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Format configuration options for display, one `key = value` per line.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();

        options.insert(
            "global.output_log_level",
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level",
            self.global.file_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.log_file",
            self.global
                .log_file
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );
        options.insert(
            "process.on_start_failure",
            self.process.on_start_failure.to_string(),
        );
        options.insert(
            "git.executable",
            self.git.executable.display().to_string(),
        );
        options.insert("git.branch_listing", self.git.branch_listing.to_string());
        options.insert(
            "git.repository",
            self.git
                .repository
                .as_ref()
                .map_or_else(String::new, |p| p.display().to_string()),
        );

        let max_key_len = options.keys().map(|k| k.len()).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }
}
