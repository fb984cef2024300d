// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::concat;

#[test]
fn test_concat_ascii() {
    assert_eq!(
        concat(&["created '", "something", "' new"]),
        "created 'something' new"
    );
}

#[test]
fn test_concat_multibyte() {
    let (a, b) = ("j$¢‰¿≈", "¯¯¯");
    let joined = concat(&[a, b]);
    assert_eq!(joined, format!("{a}{b}"));
    assert_eq!(joined.as_bytes(), [a.as_bytes(), b.as_bytes()].concat());
}

#[test]
fn test_concat_empty() {
    assert_eq!(concat(&[]), "");
    assert_eq!(concat(&["", "x", ""]), "x");
}
