// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for phlow-rs using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! phlow [global options] <command>
//! version
//! options
//! inis
//! branch {list|create|current}
//! exec PROGRAM [ARGS...]
//! which NAME...
//! ```

pub mod branch;
pub mod exec;
pub mod global;

#[cfg(test)]
mod tests;

use crate::cli::branch::BranchArgs;
use crate::cli::exec::{ExecArgs, WhichArgs};
use crate::cli::global::GlobalOptions;
use clap::{Parser, Subcommand};

/// git-phlow branch tooling - Rust Port
#[derive(Debug, Parser)]
#[command(
    name = "phlow",
    author,
    version,
    about = "git-phlow branch tooling",
    long_about = "phlow-rs Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Thin wrapper around the git command line for branch work.\n\n\
                  `phlow branch list` lists local branches, `phlow branch create\n\
                  <name>` creates and checks out a branch. See\n\
                  `phlow <command> --help` for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  phlow loads `phlow.toml` from the current directory if present.\n\
                  Additional files can be given with --ini and are loaded after it.\n\
                  PHLOW_<SECTION>__<KEY> environment variables override files, and\n\
                  --set section.key=value overrides everything."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the config files used by phlow.
    Inis,

    /// Lists, creates and inspects branches.
    Branch(BranchArgs),

    /// Runs an external command and propagates its exit code.
    Exec(ExecArgs),

    /// Checks that executables are on PATH.
    Which(WhichArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
