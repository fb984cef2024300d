// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch listing formats.
//!
//! ```text
//! Plain  git branch --no-color               "* master\n  foo\n"
//! Short  git branch --format=%(refname:short) "master\nfoo\n"
//! ```
//!
//! Both formats drop parenthesised pseudo entries such as
//! `(HEAD detached at 1a2b3c)`.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How branch names are queried from git and parsed back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BranchListing {
    /// Human-oriented `git branch` output with the `* ` current marker.
    Plain,
    /// One short ref name per line, no markers.
    #[default]
    Short,
}

impl BranchListing {
    /// Arguments passed to git for this format.
    #[must_use]
    pub const fn args(self) -> &'static [&'static str] {
        match self {
            Self::Plain => &["branch", "--no-color"],
            Self::Short => &["branch", "--format=%(refname:short)"],
        }
    }

    /// Parses git's listing into branch names, in git's order.
    #[must_use]
    pub fn parse(self, output: &str) -> Vec<String> {
        output
            .lines()
            .map(|line| match self {
                Self::Plain => strip_marker(line),
                Self::Short => line.trim(),
            })
            .filter(|name| !name.is_empty() && !name.starts_with('('))
            .map(str::to_string)
            .collect()
    }
}

/// Removes the two-column marker `git branch` prints before each name.
///
/// `* ` marks the current branch, `+ ` a branch checked out in another worktree.
fn strip_marker(line: &str) -> &str {
    line.strip_prefix("* ")
        .or_else(|| line.strip_prefix("+ "))
        .unwrap_or(line)
        .trim()
}

impl std::fmt::Display for BranchListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::Short => write!(f, "short"),
        }
    }
}

impl std::str::FromStr for BranchListing {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "plain" => Ok(Self::Plain),
            "short" => Ok(Self::Short),
            _ => Err(ConfigError::InvalidValue {
                section: "git".to_string(),
                key: "branch_listing".to_string(),
                message: format!("expected 'plain' or 'short', got '{s}'"),
            }),
        }
    }
}
