// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use std::path::PathBuf;

// Each variable is exercised by exactly one test so parallel tests never
// race on the same variable.

#[test]
fn test_vars_constants() {
    assert_eq!(vars::VQ_CONFIG_DIR, "VQ_CONFIG_DIR");
    assert_eq!(vars::VQ_LOG, "VQ_LOG");
    assert_eq!(vars::NO_COLOR, "NO_COLOR");
    assert_eq!(vars::COLOR, "COLOR");
}

#[test]
fn test_config_dir() {
    std::env::remove_var("VQ_CONFIG_DIR");
    assert_eq!(config_dir(), None);

    std::env::set_var("VQ_CONFIG_DIR", "");
    assert_eq!(config_dir(), None);

    std::env::set_var("VQ_CONFIG_DIR", "/tmp/vq-test");
    assert_eq!(config_dir(), Some(PathBuf::from("/tmp/vq-test")));
    std::env::remove_var("VQ_CONFIG_DIR");
}

#[test]
fn test_log_filter() {
    std::env::remove_var("VQ_LOG");
    assert_eq!(log_filter(), None);

    std::env::set_var("VQ_LOG", "debug");
    assert_eq!(log_filter().as_deref(), Some("debug"));
    std::env::remove_var("VQ_LOG");
}

#[test]
fn test_no_color() {
    std::env::remove_var("NO_COLOR");
    assert!(!no_color());

    std::env::set_var("NO_COLOR", "true");
    assert!(!no_color());

    std::env::set_var("NO_COLOR", "1");
    assert!(no_color());
    std::env::remove_var("NO_COLOR");
}

#[test]
fn test_force_color() {
    std::env::remove_var("COLOR");
    assert!(!force_color());

    std::env::set_var("COLOR", "yes");
    assert!(!force_color());

    std::env::set_var("COLOR", "1");
    assert!(force_color());
    std::env::remove_var("COLOR");
}
