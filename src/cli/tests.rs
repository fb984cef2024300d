// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::branch::BranchSubcommand;
use crate::cli::{Cli, Command};
use clap::Parser;

#[test]
fn test_parse_version() {
    let cli = Cli::try_parse_from(["phlow", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn test_parse_branch_create() {
    let cli = Cli::try_parse_from(["phlow", "branch", "create", "testphlow"]).unwrap();
    let Some(Command::Branch(args)) = cli.command else {
        panic!("expected branch command");
    };
    let BranchSubcommand::Create(create) = args.subcommand else {
        panic!("expected create subcommand");
    };
    assert_eq!(create.name, "testphlow");
}

#[test]
fn test_parse_branch_list_json() {
    let cli = Cli::try_parse_from(["phlow", "branch", "list", "--json"]).unwrap();
    let Some(Command::Branch(args)) = cli.command else {
        panic!("expected branch command");
    };
    assert!(matches!(args.subcommand, BranchSubcommand::List(ref l) if l.json));
}

#[test]
fn test_parse_exec_keeps_hyphen_args() {
    let cli = Cli::try_parse_from(["phlow", "exec", "git", "log", "--oneline", "-n", "3"]).unwrap();
    let Some(Command::Exec(args)) = cli.command else {
        panic!("expected exec command");
    };
    assert_eq!(args.program, "git");
    assert_eq!(args.args, ["log", "--oneline", "-n", "3"]);
}

#[test]
fn test_parse_which_requires_name() {
    assert!(Cli::try_parse_from(["phlow", "which"]).is_err());
}

#[test]
fn test_global_options_to_overrides() {
    let cli = Cli::try_parse_from([
        "phlow",
        "-l",
        "4",
        "-C",
        "/work/repo",
        "-s",
        "git.branch_listing=plain",
        "branch",
        "current",
    ])
    .unwrap();

    insta::assert_debug_snapshot!(cli.global.to_config_overrides(), @r#"
    [
        "git.branch_listing=plain",
        "global.output_log_level=4",
        "global.file_log_level=4",
        "git.repository=/work/repo",
    ]
    "#);
}

#[test]
fn test_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["phlow", "-l", "7", "version"]).is_err());
}
