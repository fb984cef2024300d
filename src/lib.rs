// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                  main.rs
//!                     |
//!          +----------+----------+
//!          v                     v
//!       cli (clap)         cmd (handlers)
//!          |           branch / exec / config
//!          +----------+----------+
//!                     v
//!        ,---------------------------,
//!        |          config           |
//!        |   TOML, layered settings  |
//!        '-------------+-------------'
//!                      v
//!                     git
//!           BranchAccessor, listing,
//!           per-repo lock, backend
//!                      |
//!   +------------------v----------------------+
//!   |  core   process: builder, runner        |
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod core;
pub mod error;
pub mod git;
pub mod logging;
pub mod utility;
