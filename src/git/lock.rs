// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-repository serialization.
//!
//! ```text
//! canonical repo path --> Arc<Mutex<()>>
//!   with_repository_lock(path, || git ...)
//! ```
//!
//! Only serializes callers inside this process; other processes still rely
//! on git's own `.lock` files.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

static REPO_LOCKS: OnceLock<Mutex<BTreeMap<PathBuf, Arc<Mutex<()>>>>> = OnceLock::new();

fn repo_locks() -> &'static Mutex<BTreeMap<PathBuf, Arc<Mutex<()>>>> {
    REPO_LOCKS.get_or_init(|| Mutex::new(BTreeMap::new()))
}

/// Key used for a repository: its canonical path when it can be resolved.
fn lock_key(repository: Option<&Path>) -> PathBuf {
    let path = repository.map_or_else(
        || std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
        Path::to_path_buf,
    );
    std::fs::canonicalize(&path).unwrap_or(path)
}

/// Returns the lock shared by every caller working on `repository`.
#[must_use]
pub fn repository_lock(repository: Option<&Path>) -> Arc<Mutex<()>> {
    let key = lock_key(repository);
    let mut locks = repo_locks()
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    Arc::clone(locks.entry(key).or_default())
}

/// Runs `f` while holding the lock for `repository`.
pub fn with_repository_lock<T>(repository: Option<&Path>, f: impl FnOnce() -> T) -> T {
    let lock = repository_lock(repository);
    let _guard = lock.lock().unwrap_or_else(PoisonError::into_inner);
    f()
}
