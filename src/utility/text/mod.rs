// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! String helpers for user-facing messages.

/// Concatenates `parts` into one string with a single allocation.
///
/// ```
/// use phlow_rs::utility::text::concat;
///
/// assert_eq!(concat(&["created '", "x", "' new"]), "created 'x' new");
/// ```
#[must_use]
pub fn concat(parts: &[&str]) -> String {
    let mut out = String::with_capacity(parts.iter().map(|p| p.len()).sum());
    for part in parts {
        out.push_str(part);
    }
    out
}

#[cfg(test)]
mod tests;
