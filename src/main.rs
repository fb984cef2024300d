// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Version | Options | Inis | Branch | Exec | Which
//! ```

use std::process::ExitCode;

use phlow_rs::cli::global::GlobalOptions;
use phlow_rs::cli::{self, Command};
use phlow_rs::cmd::branch::run_branch_command;
use phlow_rs::cmd::config::{run_inis_command, run_options_command};
use phlow_rs::cmd::exec::{run_exec_command, run_which_command};
use phlow_rs::cmd::{exit_code_for, is_fatal};
use phlow_rs::config::Config;
use phlow_rs::config::loader::ConfigLoader;
use phlow_rs::error::bail_out;
use phlow_rs::logging::{LogConfig, init_logging};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let config = match load_config(&cli.global) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&build_log_config(&config)) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn build_log_config(config: &Config) -> LogConfig {
    LogConfig::builder()
        .with_console_level(config.global.output_log_level)
        .with_file_level(config.global.file_log_level)
        .maybe_with_log_file(config.global.log_file.clone())
        .build()
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            println!("{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            run_inis_command(&build_config_loader(&cli.global).format_loaded_files());
            Ok(())
        }
        Some(Command::Branch(args)) => run_branch_command(args, config),
        Some(Command::Exec(args)) => run_exec_command(args, config),
        Some(Command::Which(args)) => run_which_command(args),
        None => {
            eprintln!("No command specified. Use --help for usage information.");
            Err(bail_out("no command specified").into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        // `_log_guard` must drop before exit, so fatal errors return here too
        Err(e) if is_fatal(&e) => {
            eprintln!("Aborting: {e:#}");
            exit_code_for(&e)
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            exit_code_for(&e)
        }
    }
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new().add_toml_file_optional("phlow.toml");
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix("PHLOW")
}

fn load_config(global: &GlobalOptions) -> phlow_rs::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for assignment in global.to_config_overrides() {
        loader = loader.set_assignment(&assignment)?;
    }
    loader.build()
}
