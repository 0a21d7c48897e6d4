// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

fn at_end(text: &str) -> Slot {
    classify(text, text.chars().count())
}

fn value_of(field: &str) -> Slot {
    Slot::Value {
        field: Some(find_field(field).unwrap()),
    }
}

const CONNECTOR: Slot = Slot::Connector {
    after_connector: false,
};
const AFTER_CONNECTOR: Slot = Slot::Connector {
    after_connector: true,
};

// ─────────────────────────────────────────────────────────────────────────────
// Slot classification
// ─────────────────────────────────────────────────────────────────────────────

#[parameterized(
    empty = { "" },
    partial_field = { "Exec" },
    leading_space = { "   " },
    open_paren = { "(" },
    open_paren_partial = { "(Work" },
    unknown_first_word = { "Foo " },
    unknown_first_word_partial = { "Foo B" },
    unknown_first_word_in_parens = { "(Foo " },
    sort_key = { "ExecutionStatus = 'Failed' ORDER BY " },
    sort_key_partial = { "ExecutionStatus = 'Failed' ORDER BY Sta" },
)]
fn field_position(text: &str) {
    assert_eq!(at_end(text), Slot::Field);
}

#[parameterized(
    known_field = { "ExecutionStatus " },
    case_insensitive = { "executionstatus " },
    partial_operator = { "StartTime >" },
    after_connector = { "ExecutionStatus = 'Failed' AND StartTime " },
    in_parens = { "(WorkflowType " },
)]
fn operator_position(text: &str) {
    assert_eq!(at_end(text), Slot::Operator);
}

#[parameterized(
    status_eq = { "ExecutionStatus = ", "ExecutionStatus" },
    status_ne = { "ExecutionStatus != ", "ExecutionStatus" },
    start_gt = { "StartTime > ", "StartTime" },
    close_le = { "CloseTime <= ", "CloseTime" },
    partial_value = { "ExecutionStatus = 'Ru", "ExecutionStatus" },
    inline_operator = { "StartTime>= ", "StartTime" },
    between_first = { "StartTime BETWEEN ", "StartTime" },
    between_second = { "StartTime BETWEEN '${TIME:7d}' AND ", "StartTime" },
    second_condition = { "WorkflowId = 'a' OR ExecutionStatus = ", "ExecutionStatus" },
    open_quote = { "WorkflowType = 'my long ", "WorkflowType" },
)]
fn value_position(text: &str, field: &str) {
    assert_eq!(at_end(text), value_of(field));
}

#[test]
fn compact_condition_without_spaces_is_one_token() {
    let ctx = analyze("ExecutionStatus='Ru", 19);
    assert_eq!(ctx.slot, Slot::Field);
    assert_eq!(ctx.current_token, "ExecutionStatus='Ru");
}

#[test]
fn value_position_for_unknown_field_has_no_hint() {
    assert_eq!(at_end("= "), Slot::Value { field: None });
    assert_eq!(at_end("StartTime == "), value_of("StartTime"));
}

#[parameterized(
    quoted_value = { "ExecutionStatus = 'Failed' " },
    partial_connector = { "ExecutionStatus = 'Failed' AN" },
    duration_value = { "ExecutionDuration > 2h " },
    closing_paren = { "(ExecutionStatus = 'Failed') " },
    closing_paren_no_space = { "(ExecutionStatus = 'Failed')" },
    compact_condition = { "ExecutionStatus='Failed' " },
    placeholder_value = { "StartTime > '${TIME:1d}' " },
    multi_word_quote = { "WorkflowType = 'my long type' " },
    after_between = { "StartTime BETWEEN '${TIME:7d}' AND '${TIME:1d}' " },
)]
fn connector_position(text: &str) {
    assert_eq!(at_end(text), CONNECTOR);
}

#[parameterized(
    and = { "ExecutionStatus = 'Failed' AND " },
    or_lower = { "ExecutionStatus = 'Failed' or " },
    partial_field = { "ExecutionStatus = 'Failed' AND Sta" },
    leading_and = { "AND " },
)]
fn after_connector_position(text: &str) {
    assert_eq!(at_end(text), AFTER_CONNECTOR);
}

#[parameterized(
    two_unknown_words = { "Foo Bar " },
    unknown_after_connector = { "WorkflowId = 'a' AND Foo " },
    garbage = { "ExecutionStatus = 'Failed' garbage " },
    bad_operator = { "ExecutionStatus ! " },
    operator_after_value = { "ExecutionStatus = 'Failed' = " },
    between_without_and = { "StartTime BETWEEN 'a' OR " },
)]
fn fallback_position(text: &str) {
    assert_eq!(at_end(text), Slot::Any);
}

#[parameterized(
    between_first_bound = { "StartTime BETWEEN '${TIME:7d}' " },
    between_partial_and = { "StartTime BETWEEN '${TIME:7d}' AN" },
    between_multi_word_bound = { "WorkflowType BETWEEN 'a b' " },
)]
fn between_awaits_and(text: &str) {
    assert_eq!(at_end(text), Slot::BetweenAnd);
}

#[parameterized(
    after_order = { "ExecutionStatus = 'Failed' ORDER " },
    after_sort_key = { "ExecutionStatus = 'Failed' ORDER BY StartTime " },
    after_direction = { "ExecutionStatus = 'Failed' ORDER BY StartTime DESC " },
)]
fn end_position(text: &str) {
    assert_eq!(at_end(text), Slot::End);
}

#[test]
fn unknown_word_recovers_after_connector() {
    assert_eq!(at_end("Foo Bar AND "), AFTER_CONNECTOR);
    assert_eq!(at_end("Foo Bar AND StartTime "), Slot::Operator);
}

// ─────────────────────────────────────────────────────────────────────────────
// Cursor handling and token extraction
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn cursor_past_end_is_clamped() {
    let ctx = analyze("ExecutionStatus = ", 19);
    assert_eq!(ctx.slot, value_of("ExecutionStatus"));
    assert_eq!(ctx.current_token, "");
    assert_eq!(ctx.token_range, 18..18);
}

#[test]
fn cursor_in_middle_ignores_text_after_it() {
    let text = "ExecutionStatus = 'Failed'";
    let ctx = analyze(text, 16);
    assert_eq!(ctx.slot, Slot::Operator);
    assert_eq!(ctx.current_token, "");
}

#[test]
fn current_token_is_partial_word() {
    let ctx = analyze("ExecutionStatus = 'Fa", 21);
    assert_eq!(ctx.current_token, "'Fa");
    assert_eq!(ctx.token_range, 18..21);
}

#[test]
fn current_token_stops_at_paren() {
    let ctx = analyze("(Exec", 5);
    assert_eq!(ctx.current_token, "Exec");
    assert_eq!(ctx.token_range, 1..5);
}

#[test]
fn cursor_counts_characters_not_bytes() {
    // 'é' is two bytes; cursor 18 is just after it.
    let text = "WorkflowId = 'café' ";
    let ctx = analyze(text, 18);
    assert_eq!(ctx.current_token, "'café");
    assert_eq!(ctx.token_range, 13..19);
}

#[test]
fn byte_offset_clamps() {
    assert_eq!(byte_offset("abc", 0), 0);
    assert_eq!(byte_offset("abc", 2), 2);
    assert_eq!(byte_offset("abc", 10), 3);
    assert_eq!(byte_offset("", 1), 0);
}

#[test]
fn tolerates_arbitrary_input() {
    for text in ["'''", "(((", ")))", "= = =", "!!!", "AND OR AND", "'a b c", "ORDER BY BY"] {
        for cursor in 0..=text.chars().count() + 1 {
            let _ = analyze(text, cursor);
        }
    }
}
