// phlow-rs: git-phlow Branch Tooling - Rust Port
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{LogConfig, LogLevel};
use std::path::Path;

#[test]
fn test_log_level_conversion() {
    let conversions = vec![
        ("from_int(0)", LogLevel::from_int(0)),
        ("from_int(3)", LogLevel::from_int(3)),
        ("from_int(5)", LogLevel::from_int(5)),
        ("from_int(100)", LogLevel::from_int(100)),
    ];
    insta::assert_debug_snapshot!(conversions, @r#"
    [
        (
            "from_int(0)",
            LogLevel(
                0,
            ),
        ),
        (
            "from_int(3)",
            LogLevel(
                3,
            ),
        ),
        (
            "from_int(5)",
            LogLevel(
                5,
            ),
        ),
        (
            "from_int(100)",
            LogLevel(
                6,
            ),
        ),
    ]
    "#);
}

#[test]
fn test_log_level_bounds() {
    assert!(LogLevel::new(6).is_ok());
    assert!(LogLevel::new(7).is_err());
    assert_eq!(LogLevel::from_u8(7), None);
    assert_eq!(u8::from(LogLevel::DEBUG), 4);
}

#[test]
fn test_filter_strings() {
    let filters: Vec<_> = (0..=6)
        .map(|level| LogLevel::from_int(level).to_filter_string())
        .collect();
    insta::assert_debug_snapshot!(filters, @r#"
    [
        "off",
        "error",
        "warn",
        "phlow_rs=info,warn",
        "phlow_rs=debug,warn",
        "phlow_rs=trace,warn",
        "trace",
    ]
    "#);
}

#[test]
fn test_log_config_defaults() {
    let config = LogConfig::default();
    assert_eq!(config.console_level(), LogLevel::INFO);
    assert_eq!(config.file_level(), LogLevel::TRACE);
    assert!(config.log_file().is_none());
    assert!(!config.show_target());

    let config = LogConfig::builder().with_log_file("logs/phlow.log").build();
    assert_eq!(config.log_file(), Some(Path::new("logs/phlow.log")));
}
