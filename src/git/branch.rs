// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch operations.
//!
//! ```text
//! list_branches()   git branch (BranchListing::args)  --> Vec<String>
//! create_branch(n)  git checkout -b n                 --> n
//! current_branch()  git rev-parse --abbrev-ref HEAD   --> String
//! ```
//!
//! Errors from the backend are returned as-is.

use tracing::{debug, info, instrument};

use super::backend::GitBackend;
use super::listing::BranchListing;
use super::lock::with_repository_lock;
use crate::error::ProcessResult;

/// Branch queries and mutations against one repository.
#[derive(Debug)]
pub struct BranchAccessor<'a, B: GitBackend> {
    backend: &'a B,
    listing: BranchListing,
}

impl<'a, B: GitBackend> BranchAccessor<'a, B> {
    #[must_use]
    pub const fn new(backend: &'a B, listing: BranchListing) -> Self {
        Self { backend, listing }
    }

    /// Lists local branches in the order git prints them.
    ///
    /// # Errors
    ///
    /// Returns the `ProcessError` from running git.
    #[instrument(level = "debug", skip(self))]
    pub fn list_branches(&self) -> ProcessResult<Vec<String>> {
        let output = self.git(self.listing.args())?;
        let branches = self.listing.parse(&output);
        debug!(count = branches.len(), listing = %self.listing, "listed branches");
        Ok(branches)
    }

    /// Creates `name` and checks it out.
    ///
    /// # Errors
    ///
    /// Returns the `ProcessError` from running git, e.g. when the branch
    /// already exists.
    #[instrument(level = "debug", skip(self))]
    pub fn create_branch(&self, name: &str) -> ProcessResult<String> {
        self.git(&["checkout", "-b", name])?;
        info!(branch = name, "created branch");
        Ok(name.to_string())
    }

    /// Returns the abbreviated name of `HEAD`.
    ///
    /// # Errors
    ///
    /// Returns the `ProcessError` from running git.
    #[instrument(level = "debug", skip(self))]
    pub fn current_branch(&self) -> ProcessResult<String> {
        let output = self.git(&["rev-parse", "--abbrev-ref", "HEAD"])?;
        Ok(output.trim_end().to_string())
    }

    fn git(&self, args: &[&str]) -> ProcessResult<String> {
        with_repository_lock(self.backend.repository(), || self.backend.git(args))
    }
}
