// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn resolve_with_fixed_now() {
    vq().args(["resolve", "StartTime > '${TIME:24h}'", "--now", NOW])
        .assert()
        .success()
        .stdout("StartTime > '2024-01-01T00:00:00Z'\n");
}

#[test]
fn resolve_leaves_malformed_placeholders() {
    vq().args(["resolve", "StartTime > '${TIME:1y}'", "--now", NOW])
        .assert()
        .success()
        .stdout("StartTime > '${TIME:1y}'\n");
}

#[test]
fn resolve_without_placeholders_is_unchanged() {
    vq().args(["resolve", "WorkflowId = 'a'"])
        .assert()
        .success()
        .stdout("WorkflowId = 'a'\n");
}

#[test]
fn resolve_rejects_bad_timestamp() {
    vq().args(["resolve", "x", "--now", "yesterday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid timestamp 'yesterday'"));
}

#[test]
fn duration_canonical_forms() {
    vq().args(["duration", "90M"])
        .assert()
        .success()
        .stdout(predicate::str::contains("duration: 90m"))
        .stdout(predicate::str::contains("shorthand: 1h"))
        .stdout(predicate::str::contains("placeholder: ${TIME:1h}"))
        .stdout(predicate::str::contains("minutes: 90"));
}

#[test]
fn duration_json() {
    let output = vq().args(["duration", "2w", "-o", "json"]).output().unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["shorthand"], "14d");
    assert_eq!(json["minutes"], 20160);
}

#[test]
fn duration_rejects_fraction() {
    vq().args(["duration", "1.5h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("fractional durations are not allowed"));
}

#[test]
fn duration_rejects_empty() {
    vq().args(["duration", ""])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty duration"));
}

#[test]
fn range_preset_uses_default_field() {
    let temp = TempDir::new().unwrap();
    vq_in(&temp)
        .args(["range", "--preset", "24h"])
        .assert()
        .success()
        .stdout("StartTime > '${TIME:1d}'\n");
}

#[test]
fn range_uses_configured_time_field() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "time_field = \"CloseTime\"\n").unwrap();
    vq_in(&temp)
        .args(["range", "--preset", "7d"])
        .assert()
        .success()
        .stdout("CloseTime > '${TIME:7d}'\n");
}

#[test]
fn range_custom_with_field_and_query() {
    vq().args([
        "range",
        "--custom",
        "90m",
        "--field",
        "CloseTime",
        "--query",
        "ExecutionStatus = 'Failed'",
    ])
    .assert()
    .success()
    .stdout("ExecutionStatus = 'Failed' AND CloseTime > '${TIME:1h}'\n");
}

#[test]
fn range_all_leaves_query_unchanged() {
    vq().args(["range", "--field", "StartTime", "--preset", "All", "-q", "RunId = 'r'"])
        .assert()
        .success()
        .stdout("RunId = 'r'\n");
}

#[test]
fn range_unknown_preset_fails() {
    vq().args(["range", "--field", "StartTime", "--preset", "2d"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown date range preset: '2d'"));
}

#[test]
fn range_invalid_custom_fails() {
    vq().args(["range", "--field", "StartTime", "--custom", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration 'soon'"));
}

#[test]
fn range_malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "time_field = [").unwrap();
    vq_in(&temp)
        .args(["range", "--preset", "1h"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("config error: failed to parse config"));
}
