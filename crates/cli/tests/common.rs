// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Fixed reference time used with `--now`.
pub const NOW: &str = "2024-01-02T00:00:00Z";

/// The `vq` binary with no ambient configuration or colors.
pub fn vq() -> Command {
    let mut cmd = cargo_bin_cmd!("vq");
    cmd.env_remove("VQ_CONFIG_DIR")
        .env_remove("VQ_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// `vq` pointed at an isolated config directory.
pub fn vq_in(temp: &TempDir) -> Command {
    let mut cmd = vq();
    cmd.arg("--config-dir").arg(temp.path());
    cmd
}

/// Save a filter, asserting success.
pub fn save_filter(temp: &TempDir, name: &str, query: &str, default: bool) {
    let mut cmd = vq_in(temp);
    cmd.args(["filter", "save", name, query]);
    if default {
        cmd.arg("--default");
    }
    cmd.assert().success();
}

/// Contents of the config file in `temp`.
pub fn config_contents(temp: &TempDir) -> String {
    std::fs::read_to_string(temp.path().join("config.toml")).unwrap_or_default()
}

/// Run `cmd`, assert success, and compare stdout with a line diff on mismatch.
pub fn assert_stdout(cmd: &mut Command, expected: &str) {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    similar_asserts::assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim_end(),
        expected.trim_end()
    );
}
