// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch command arguments.
//!
//! # Subcommands
//!
//! ```text
//! branch list [--json]   → local branches, git order
//! branch create NAME     → git checkout -b NAME
//! branch current         → git rev-parse --abbrev-ref HEAD
//! ```

use clap::{Args, Subcommand};

/// Arguments for the `branch` command.
#[derive(Debug, Clone, Args)]
pub struct BranchArgs {
    /// Branch subcommand.
    #[command(subcommand)]
    pub subcommand: BranchSubcommand,
}

/// Branch subcommands.
#[derive(Debug, Clone, Subcommand)]
pub enum BranchSubcommand {
    /// Lists local branches.
    List(ListArgs),

    /// Creates a branch and checks it out.
    Create(CreateArgs),

    /// Prints the current branch.
    Current,
}

/// Arguments for list subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Prints the branches as a JSON array.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for create subcommand.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Name of the new branch.
    #[arg(value_name = "NAME")]
    pub name: String,
}
