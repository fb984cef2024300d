// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch command implementation for phlow-rs.

use crate::cli::branch::{BranchArgs, BranchSubcommand};
use crate::config::Config;
use crate::core::process::is_executable_available;
use crate::error::Result;
use crate::git::Git;
use crate::utility::text::concat;

/// Main handler for branch command.
///
/// # Errors
///
/// Returns an error if git is not on PATH or the git invocation fails.
pub fn run_branch_command(args: &BranchArgs, config: &Config) -> Result<()> {
    is_executable_available(&config.git.executable.to_string_lossy())?;

    let git = Git::from_config(config);
    let branch = git.branch();

    match &args.subcommand {
        BranchSubcommand::List(list) => {
            let branches = branch.list_branches()?;
            println!("{}", format_branch_list(&branches, list.json)?);
        }
        BranchSubcommand::Create(create) => {
            let created = branch.create_branch(&create.name)?;
            println!("{}", created_message(&created));
        }
        BranchSubcommand::Current => {
            println!("{}", branch.current_branch()?);
        }
    }
    Ok(())
}

/// Renders a branch list, one name per line or as a JSON array.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_branch_list(branches: &[String], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string(branches)?)
    } else {
        Ok(branches.join("\n"))
    }
}

#[must_use]
pub fn created_message(branch: &str) -> String {
    concat(&["created branch '", branch, "'"])
}
