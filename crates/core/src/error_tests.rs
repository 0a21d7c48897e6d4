// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    filter_not_found = { Error::FilterNotFound("nightly".into()), "nightly" },
    filter_exists = { Error::FilterExists("nightly".into()), "already exists" },
    field_empty = { Error::FieldEmpty { field: "filter name" }, "filter name cannot be empty" },
    store = { Error::Store("disk full".into()), "disk full" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn invalid_duration_display_includes_input_and_hint() {
    let err = Error::invalid_duration("3x", "unknown unit 'x'");
    let msg = err.to_string();
    assert!(msg.contains("'3x'"));
    assert!(msg.contains("unknown unit"));
    assert!(msg.contains("hint:"));
}

#[parameterized(
    parse = { Error::invalid_duration("", "empty"), ErrorKind::Parse },
    validation_empty = { Error::FieldEmpty { field: "filter name" }, ErrorKind::Validation },
    validation_exists = { Error::FilterExists("a".into()), ErrorKind::Validation },
    not_found = { Error::FilterNotFound("a".into()), ErrorKind::NotFound },
    store = { Error::Store("x".into()), ErrorKind::Store },
)]
fn error_kind(err: Error, expected: ErrorKind) {
    assert_eq!(err.kind(), expected);
}
