// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion suggestions for the slot at the cursor.
//!
//! [`suggest`] and [`accept`] are pure functions of the text and cursor.
//! [`Composer`] wraps them with a buffer and a selection so a text input
//! can chain Tab completions: every accepted suggestion ends in a space,
//! which moves the cursor into the next slot.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::catalog::{
    comparison_operators, logical_operators, ExecutionStatus, FieldDescriptor, FieldKind,
    OperatorDescriptor, TimeExpression, FIELDS, TIME_EXPRESSIONS,
};
use crate::context::{analyze, Slot};
use crate::placeholder;

/// Upper bound on the number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 8;

/// Suggestions are ordered by category first, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SuggestionCategory {
    Field,
    Operator,
    Value,
    Time,
}

/// A single completion candidate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Suggestion {
    /// Text shown in the completion list, matched against the typed prefix.
    pub display_text: String,
    /// Text that replaces the current token when accepted.
    pub insert_text: String,
    pub description: String,
    pub category: SuggestionCategory,
}

impl Suggestion {
    fn new(
        display_text: impl Into<String>,
        insert_text: impl Into<String>,
        description: &str,
        category: SuggestionCategory,
    ) -> Self {
        Suggestion {
            display_text: display_text.into(),
            insert_text: insert_text.into(),
            description: description.to_string(),
            category,
        }
    }

    fn field(field: &FieldDescriptor) -> Self {
        Self::new(
            field.name,
            format!("{} ", field.name),
            field.description,
            SuggestionCategory::Field,
        )
    }

    fn operator(op: &OperatorDescriptor) -> Self {
        Self::new(
            op.symbol,
            format!("{} ", op.symbol),
            op.description,
            SuggestionCategory::Operator,
        )
    }

    fn status(status: ExecutionStatus) -> Self {
        Self::new(
            status.as_str(),
            format!("'{}' ", status.as_str()),
            status.description(),
            SuggestionCategory::Value,
        )
    }

    fn time(expr: &TimeExpression) -> Self {
        Self::new(
            expr.label,
            format!("{} ", expr.insert_text()),
            expr.description,
            SuggestionCategory::Time,
        )
    }
}

/// Suggest completions for the token before `cursor` (a character offset).
///
/// At most [`MAX_SUGGESTIONS`] entries, ordered by category and then by
/// catalog order, keeping only candidates whose display text starts with
/// the current token (ignoring case). In a value slot a leading `'` on the
/// current token is ignored for matching.
pub fn suggest(text: &str, cursor: usize) -> Vec<Suggestion> {
    let ctx = analyze(text, cursor);
    let needle = match ctx.slot {
        Slot::Value { .. } => ctx.current_token.trim_start_matches('\''),
        _ => ctx.current_token,
    }
    .to_lowercase();

    let mut suggestions: Vec<Suggestion> = candidates(ctx.slot)
        .into_iter()
        .filter(|s| s.display_text.to_lowercase().starts_with(&needle))
        .collect();
    suggestions.sort_by_key(|s| s.category);
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}

fn candidates(slot: Slot) -> Vec<Suggestion> {
    let fields = || FIELDS.iter().map(Suggestion::field);
    let connectors = || {
        logical_operators()
            .filter(|op| op.symbol == "AND" || op.symbol == "OR")
            .map(Suggestion::operator)
    };
    let and = || {
        logical_operators()
            .filter(|op| op.symbol == "AND")
            .map(Suggestion::operator)
    };

    match slot {
        Slot::Field => fields().collect(),
        Slot::Operator => comparison_operators().map(Suggestion::operator).collect(),
        Slot::Value { field } => match field.map(|f| f.kind) {
            Some(FieldKind::Status) => ExecutionStatus::ALL
                .into_iter()
                .map(Suggestion::status)
                .collect(),
            Some(FieldKind::Time) => TIME_EXPRESSIONS.iter().map(Suggestion::time).collect(),
            _ => Vec::new(),
        },
        Slot::Connector {
            after_connector: true,
        } => fields().chain(connectors()).collect(),
        Slot::Connector {
            after_connector: false,
        } => connectors().collect(),
        Slot::BetweenAnd => and().collect(),
        Slot::End => Vec::new(),
        Slot::Any => fields()
            .chain(comparison_operators().map(Suggestion::operator))
            .collect(),
    }
}

/// Replace the token before `cursor` with the suggestion's insert text.
///
/// Returns the new text and the new cursor (a character offset just past
/// the inserted text). When the text after the cursor already starts with
/// whitespace, the suggestion's trailing space is not duplicated and the
/// cursor skips over the existing one.
pub fn accept(text: &str, cursor: usize, suggestion: &Suggestion) -> (String, usize) {
    let ctx = analyze(text, cursor);
    let head = &text[..ctx.token_range.start];
    let tail = &text[ctx.token_range.end..];

    let mut insert = suggestion.insert_text.as_str();
    let mut skip = 0;
    if insert.ends_with(' ') && tail.starts_with(char::is_whitespace) {
        insert = insert.trim_end_matches(' ');
        skip = 1;
    }

    let new_cursor = head.chars().count() + insert.chars().count() + skip;
    (format!("{head}{insert}{tail}"), new_cursor)
}

/// An editable query buffer with live suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composer {
    text: String,
    cursor: usize,
    suggestions: Vec<Suggestion>,
    selected: usize,
}

impl Default for Composer {
    fn default() -> Self {
        Self::new()
    }
}

impl Composer {
    pub fn new() -> Self {
        Self::with_input("", 0)
    }

    pub fn with_input(text: impl Into<String>, cursor: usize) -> Self {
        let mut composer = Composer {
            text: String::new(),
            cursor: 0,
            suggestions: Vec::new(),
            selected: 0,
        };
        composer.set_input(text, cursor);
        composer
    }

    /// Replace the buffer and cursor, recomputing suggestions.
    /// The cursor is clamped to the text length.
    pub fn set_input(&mut self, text: impl Into<String>, cursor: usize) {
        self.text = text.into();
        self.cursor = cursor.min(self.text.chars().count());
        self.refresh();
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn slot(&self) -> Slot {
        analyze(&self.text, self.cursor).slot
    }

    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected(&self) -> Option<&Suggestion> {
        self.suggestions.get(self.selected)
    }

    /// Move the selection down, wrapping to the top.
    pub fn select_next(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = (self.selected + 1) % self.suggestions.len();
        }
    }

    /// Move the selection up, wrapping to the bottom.
    pub fn select_prev(&mut self) {
        if !self.suggestions.is_empty() {
            self.selected = self
                .selected
                .checked_sub(1)
                .unwrap_or(self.suggestions.len() - 1);
        }
    }

    /// Accept the selected suggestion. Returns false if there is none.
    pub fn accept_selected(&mut self) -> bool {
        match self.selected().cloned() {
            Some(suggestion) => {
                self.accept(&suggestion);
                true
            }
            None => false,
        }
    }

    /// Splice a suggestion into the buffer and recompute suggestions.
    pub fn accept(&mut self, suggestion: &Suggestion) {
        let (text, cursor) = accept(&self.text, self.cursor, suggestion);
        self.text = text;
        self.cursor = cursor;
        self.refresh();
    }

    /// The buffer with all time placeholders resolved against `now`.
    pub fn resolved(&self, now: DateTime<Utc>) -> String {
        placeholder::resolve(&self.text, now)
    }

    fn refresh(&mut self) {
        self.suggestions = suggest(&self.text, self.cursor);
        self.selected = 0;
    }
}

#[cfg(test)]
#[path = "suggest_tests.rs"]
mod tests;
