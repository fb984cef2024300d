// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Core modules for process management.
//!
//! ```text
//!        core
//!         |
//!         v
//!      process
//!         |
//!   Builder  CommandResult
//!   execute  is_executable_available
//! ```

pub mod process;
