// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!          Git::from_config / Git::new
//!                    |
//!                .branch()
//!                    v
//!   ,---------------------------------,
//!   |         BranchAccessor          |
//!   |  list / create / current        |
//!   '---+-------------+----------+----'
//!       |             |          |
//!       v             v          v
//!  BranchListing    lock    GitBackend (trait)
//!  plain | short  per repo       |
//!                                v
//!                          ShellBackend
//!                       ProcessBuilder -> git
//! ```

pub mod backend;
pub mod branch;
pub mod listing;
pub mod lock;


pub use backend::{GitBackend, ShellBackend};
pub use branch::BranchAccessor;
pub use listing::BranchListing;

use crate::config::Config;

/// Entry point for git access against one repository.
#[derive(Debug, Clone, Default)]
pub struct Git<B: GitBackend = ShellBackend> {
    backend: B,
    listing: BranchListing,
}

impl Git {
    /// Git in the current directory with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Git configured from the `[git]` and `[process]` sections.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let backend = ShellBackend::builder()
            .executable(config.git.executable.clone())
            .maybe_repository(config.git.repository.clone())
            .on_start_failure(config.process.on_start_failure)
            .build();
        Self::with_backend(backend, config.git.branch_listing)
    }
}

impl<B: GitBackend> Git<B> {
    #[must_use]
    pub const fn with_backend(backend: B, listing: BranchListing) -> Self {
        Self { backend, listing }
    }

    /// Branch operations.
    #[must_use]
    pub const fn branch(&self) -> BranchAccessor<'_, B> {
        BranchAccessor::new(&self.backend, self.listing)
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    #[must_use]
    pub const fn listing(&self) -> BranchListing {
        self.listing
    }
}
