// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;

#[test]
fn test_resolve_now() {
    let cli = parse(&["vq", "resolve", "q", "--now", "2024-01-02T00:00:00Z"]).unwrap();
    match cli.command {
        Command::Resolve { query, now } => {
            assert_eq!(query, "q");
            assert_eq!(now.now.as_deref(), Some("2024-01-02T00:00:00Z"));
        }
        _ => panic!("Expected Resolve command"),
    }
}

#[test]
fn test_range_requires_preset_or_custom() {
    assert!(parse(&["vq", "range"]).is_err());
    assert!(parse(&["vq", "range", "--preset", "1h"]).is_ok());
    assert!(parse(&["vq", "range", "--custom", "90m"]).is_ok());
}

#[test]
fn test_range_preset_conflicts_with_custom() {
    assert!(parse(&["vq", "range", "--preset", "1h", "--custom", "90m"]).is_err());
}

#[test]
fn test_range_all_options() {
    let cli = parse(&[
        "vq", "range", "-f", "CloseTime", "--custom", "2w", "-q", "RunId = 'r'",
    ])
    .unwrap();
    match cli.command {
        Command::Range {
            field,
            preset,
            custom,
            query,
        } => {
            assert_eq!(field.as_deref(), Some("CloseTime"));
            assert_eq!(preset, None);
            assert_eq!(custom.as_deref(), Some("2w"));
            assert_eq!(query.as_deref(), Some("RunId = 'r'"));
        }
        _ => panic!("Expected Range command"),
    }
}

#[test]
fn test_duration_positional() {
    let cli = parse(&["vq", "duration", "90m"]).unwrap();
    assert!(matches!(cli.command, Command::Duration { ref text, .. } if text == "90m"));
}
