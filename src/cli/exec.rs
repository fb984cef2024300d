// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process command arguments.

use clap::Args;

/// Arguments for the `exec` command.
#[derive(Debug, Clone, Args)]
pub struct ExecArgs {
    /// Program to run.
    #[arg(value_name = "PROGRAM")]
    pub program: String,

    /// Arguments passed to the program unchanged.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    pub args: Vec<String>,
}

/// Arguments for the `which` command.
#[derive(Debug, Clone, Args)]
pub struct WhichArgs {
    /// Executables to look up.
    #[arg(value_name = "NAME", required = true)]
    pub names: Vec<String>,
}
