// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Cursor context detection for partially typed queries.
//!
//! The text before the cursor is split into the token being typed and the
//! completed words before it. The words are fed through a small state
//! machine (expect field → expect operator → expect value → expect
//! connector) whose final state names the grammatical [`Slot`] at the
//! cursor. This is a heuristic over tokens, not a parser: it never fails,
//! and anything it cannot follow lands in [`Slot::Any`].
//!
//! ```text
//! |                            Field
//! ExecutionStatus |            Operator
//! ExecutionStatus = |          Value (ExecutionStatus)
//! ExecutionStatus = 'Failed' | Connector
//! ... AND |                    Connector (after connector: fields too)
//! ... ORDER BY |               Field (sort key)
//! ... ORDER BY StartTime |     End
//! ```

use std::ops::Range;

use crate::catalog::{find_field, is_comparison_operator, is_logical_connector, FieldDescriptor};

/// Grammatical role of the token at the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Start of a condition: a field name is expected.
    Field,
    /// A known field was just completed: a comparison operator is expected.
    Operator,
    /// A comparison operator was just completed. `field` is the field the
    /// comparison applies to, when it is a known field.
    Value {
        field: Option<&'static FieldDescriptor>,
    },
    /// A condition is complete: a logical connector is expected. When the
    /// previous word already was a connector, a new field is expected too.
    Connector { after_connector: bool },
    /// The first bound of `BETWEEN` is complete: only `AND` may follow.
    BetweenAnd,
    /// Nothing from the catalogs fits here, as after `ORDER` or a sort key.
    End,
    /// The words before the cursor could not be followed.
    Any,
}

/// Result of analyzing the text before the cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryContext<'a> {
    pub slot: Slot,
    /// The partial token immediately before the cursor (may be empty).
    pub current_token: &'a str,
    /// Byte range of `current_token` within the full text.
    pub token_range: Range<usize>,
}

/// Classify the slot at `cursor` (a character offset, clamped to the text).
pub fn classify(text: &str, cursor: usize) -> Slot {
    analyze(text, cursor).slot
}

/// Analyze the text up to `cursor` (a character offset, clamped to the text).
pub fn analyze(text: &str, cursor: usize) -> QueryContext<'_> {
    let end = byte_offset(text, cursor);
    let before = &text[..end];

    let token_start = before
        .rfind(is_token_boundary)
        .map_or(0, |i| i + boundary_len(before, i));
    let current_token = &before[token_start..];
    let prefix = &before[..token_start];

    let state = prefix
        .split(is_token_boundary)
        .filter(|w| !w.is_empty())
        .fold(State::START, State::step);

    QueryContext {
        slot: state.slot(),
        current_token,
        token_range: token_start..end,
    }
}

/// Convert a character offset into a byte offset, clamping to the end.
pub(crate) fn byte_offset(text: &str, chars: usize) -> usize {
    text.char_indices()
        .nth(chars)
        .map_or(text.len(), |(i, _)| i)
}

fn is_token_boundary(c: char) -> bool {
    c.is_whitespace() || c == '(' || c == ')'
}

fn boundary_len(s: &str, at: usize) -> usize {
    s[at..].chars().next().map_or(1, char::len_utf8)
}

fn is_operator_char(c: char) -> bool {
    matches!(c, '=' | '<' | '>' | '!')
}

fn has_open_quote(word: &str) -> bool {
    word.matches('\'').count() % 2 == 1
}

/// Split a word like `StartTime>='x'` into field, operator, and value parts.
/// Returns `None` unless the word contains a complete comparison operator.
fn split_inline_condition(word: &str) -> Option<(&str, &str, &str)> {
    let op_start = word.find(is_operator_char)?;
    let rest = &word[op_start..];
    let op_len = rest.find(|c| !is_operator_char(c)).unwrap_or(rest.len());
    let op = &rest[..op_len];
    if !is_comparison_operator(op) {
        return None;
    }
    Some((&word[..op_start], op, &rest[op_len..]))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    ExpectField {
        after_connector: bool,
    },
    ExpectOperator {
        field: &'static FieldDescriptor,
    },
    ExpectValue {
        field: Option<&'static FieldDescriptor>,
        between: bool,
    },
    /// Inside a quoted literal that spans several words.
    InQuote {
        field: Option<&'static FieldDescriptor>,
        between: bool,
    },
    /// After the first bound of `BETWEEN a AND b`.
    ExpectBetweenAnd {
        field: Option<&'static FieldDescriptor>,
    },
    ExpectConnector,
    /// After `ORDER`, waiting for `BY`.
    AfterOrder,
    /// After `ORDER BY`, waiting for the sort key.
    ExpectSortField,
    /// After the sort key; `ASC`/`DESC` and further keys are absorbed.
    SortComplete,
    /// A lone unknown first word, still read as a field being named.
    FirstWord,
    Unknown,
}

impl State {
    const START: State = State::ExpectField {
        after_connector: false,
    };

    fn step(self, word: &str) -> State {
        match self {
            State::ExpectField { after_connector } => {
                let next = Self::after_field_word(word);
                if !after_connector && next == State::Unknown && !word.contains(is_operator_char) {
                    State::FirstWord
                } else {
                    next
                }
            }
            State::ExpectOperator { field } => Self::after_operator_word(field, word),
            State::ExpectValue { field, between } => Self::after_value_word(field, between, word),
            State::InQuote { field, between } => {
                if has_open_quote(word) {
                    Self::value_complete(field, between)
                } else {
                    self
                }
            }
            State::ExpectBetweenAnd { field } => {
                if word.eq_ignore_ascii_case("AND") {
                    State::ExpectValue {
                        field,
                        between: false,
                    }
                } else {
                    State::Unknown
                }
            }
            State::ExpectConnector => {
                if word.eq_ignore_ascii_case("ORDER") {
                    State::AfterOrder
                } else {
                    Self::connector_or_unknown(word)
                }
            }
            State::AfterOrder => {
                if word.eq_ignore_ascii_case("BY") {
                    State::ExpectSortField
                } else {
                    State::Unknown
                }
            }
            State::ExpectSortField | State::SortComplete => State::SortComplete,
            State::FirstWord | State::Unknown => Self::connector_or_unknown(word),
        }
    }

    fn after_field_word(word: &str) -> State {
        if is_logical_connector(word) {
            return State::ExpectField {
                after_connector: true,
            };
        }
        if let Some(field) = find_field(word) {
            return State::ExpectOperator { field };
        }
        match split_inline_condition(word) {
            Some((field, op, value)) => {
                Self::after_operator(find_field(field), op).then_value(value)
            }
            None => State::Unknown,
        }
    }

    fn after_operator_word(field: &'static FieldDescriptor, word: &str) -> State {
        if is_comparison_operator(word) {
            return Self::after_operator(Some(field), word);
        }
        if is_logical_connector(word) {
            return State::ExpectField {
                after_connector: true,
            };
        }
        match split_inline_condition(word) {
            Some(("", op, value)) => Self::after_operator(Some(field), op).then_value(value),
            _ => State::Unknown,
        }
    }

    fn after_operator(field: Option<&'static FieldDescriptor>, op: &str) -> State {
        State::ExpectValue {
            field,
            between: op.eq_ignore_ascii_case("BETWEEN"),
        }
    }

    fn after_value_word(
        field: Option<&'static FieldDescriptor>,
        between: bool,
        word: &str,
    ) -> State {
        if word.starts_with('\'') && has_open_quote(word) {
            State::InQuote { field, between }
        } else {
            Self::value_complete(field, between)
        }
    }

    fn value_complete(field: Option<&'static FieldDescriptor>, between: bool) -> State {
        if between {
            State::ExpectBetweenAnd { field }
        } else {
            State::ExpectConnector
        }
    }

    /// Continue with an inline value such as the `'x'` of `StartTime>'x'`.
    fn then_value(self, value: &str) -> State {
        if value.is_empty() {
            self
        } else {
            self.step(value)
        }
    }

    fn connector_or_unknown(word: &str) -> State {
        if is_logical_connector(word) {
            State::ExpectField {
                after_connector: true,
            }
        } else {
            State::Unknown
        }
    }

    fn slot(self) -> Slot {
        match self {
            State::ExpectField {
                after_connector: false,
            } => Slot::Field,
            State::ExpectField {
                after_connector: true,
            } => Slot::Connector {
                after_connector: true,
            },
            State::ExpectOperator { .. } => Slot::Operator,
            State::ExpectValue { field, .. } | State::InQuote { field, .. } => {
                Slot::Value { field }
            }
            State::FirstWord | State::ExpectSortField => Slot::Field,
            State::ExpectBetweenAnd { .. } => Slot::BetweenAnd,
            State::ExpectConnector => Slot::Connector {
                after_connector: false,
            },
            State::AfterOrder | State::SortComplete => Slot::End,
            State::Unknown => Slot::Any,
        }
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
