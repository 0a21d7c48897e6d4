// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn help_lists_command_sections() {
    vq().arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Composing:"))
        .stdout(predicate::str::contains("Saved Filters:"))
        .stdout(predicate::str::contains("Options:"))
        .stdout(predicate::str::contains("Get started:"));
}

#[test]
fn no_command_fails() {
    vq().assert().failure();
}

#[test]
fn version_flag() {
    vq().arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("vq "));
}

#[test]
fn completion_bash() {
    vq().args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("_vq"));
}

#[test]
fn no_color_output_is_plain() {
    vq().arg("fields")
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[").not());
}

#[test]
fn forced_color_paints_suggestions() {
    vq().env_remove("NO_COLOR")
        .env("COLOR", "1")
        .args(["suggest", "Exec"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\x1b[38;5;110mExecutionStatus"));
}

#[test]
fn quiet_by_default() {
    vq().args(["suggest", "Exec"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn log_filter_from_environment() {
    vq().env("VQ_LOG", "debug")
        .args(["suggest", "Exec"])
        .assert()
        .success()
        .stderr(predicate::str::contains("suggest"));
}
