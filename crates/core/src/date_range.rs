// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Date range selection.
//!
//! [`DateRangeSelector`] turns either a preset ("last 24 hours") or a typed
//! duration into a query fragment of the form
//! `<field> > '${TIME:<shorthand>}'`. A zero duration means "no bound" and
//! produces an empty fragment.

use crate::duration::{parse_duration, Duration};
use crate::error::Error;
use crate::placeholder;

/// A named time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRangePreset {
    pub label: &'static str,
    pub description: &'static str,
    /// Zero means unbounded.
    pub duration: Duration,
}

impl DateRangePreset {
    pub fn fragment(&self, field: &str) -> String {
        time_bound_fragment(field, &self.duration)
    }
}

pub static PRESETS: &[DateRangePreset] = &[
    DateRangePreset {
        label: "1h",
        description: "Last hour",
        duration: Duration::hours(1),
    },
    DateRangePreset {
        label: "24h",
        description: "Last 24 hours",
        duration: Duration::hours(24),
    },
    DateRangePreset {
        label: "7d",
        description: "Last 7 days",
        duration: Duration::days(7),
    },
    DateRangePreset {
        label: "30d",
        description: "Last 30 days",
        duration: Duration::days(30),
    },
    DateRangePreset {
        label: "All",
        description: "No time bound",
        duration: Duration::ZERO,
    },
];

/// Look up a preset by label, ignoring case.
pub fn find_preset(label: &str) -> Option<&'static DateRangePreset> {
    PRESETS.iter().find(|p| p.label.eq_ignore_ascii_case(label))
}

/// Build `<field> > '${TIME:<shorthand>}'`, or an empty string for a zero
/// duration.
pub fn time_bound_fragment(field: &str, duration: &Duration) -> String {
    if duration.is_zero() {
        return String::new();
    }
    format!("{field} > '{}'", placeholder::encode(duration))
}

/// Join a condition onto a query with `AND`. An empty fragment leaves the
/// query unchanged; an empty query yields the fragment alone.
pub fn append_condition(query: &str, fragment: &str) -> String {
    let query = query.trim();
    let fragment = fragment.trim();
    if fragment.is_empty() {
        query.to_string()
    } else if query.is_empty() {
        fragment.to_string()
    } else {
        format!("{query} AND {fragment}")
    }
}

/// Which input the selector is taking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeMode {
    /// Choosing from [`PRESETS`].
    Preset,
    /// Typing a duration such as `3d`.
    Custom,
}

/// State machine behind the date range picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateRangeSelector {
    field: String,
    mode: RangeMode,
    selected: usize,
    custom_input: String,
    error: Option<Error>,
}

impl DateRangeSelector {
    /// A selector targeting `field` (e.g. `StartTime`), in preset mode with
    /// the first preset selected.
    pub fn new(field: impl Into<String>) -> Self {
        DateRangeSelector {
            field: field.into(),
            mode: RangeMode::Preset,
            selected: 0,
            custom_input: String::new(),
            error: None,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn set_field(&mut self, field: impl Into<String>) {
        self.field = field.into();
    }

    pub fn mode(&self) -> RangeMode {
        self.mode
    }

    /// Switch between preset and custom mode.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            RangeMode::Preset => RangeMode::Custom,
            RangeMode::Custom => RangeMode::Preset,
        };
        self.error = None;
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn selected_preset(&self) -> &'static DateRangePreset {
        &PRESETS[self.selected]
    }

    /// Select a preset by index. Out-of-range indexes are ignored.
    pub fn select(&mut self, index: usize) {
        if index < PRESETS.len() {
            self.selected = index;
        }
    }

    /// Select a preset by label, ignoring case. Returns `false` and keeps the
    /// current selection when no preset has that label.
    pub fn select_label(&mut self, label: &str) -> bool {
        let Some(preset) = find_preset(label) else {
            return false;
        };
        if let Some(index) = PRESETS.iter().position(|p| p.label == preset.label) {
            self.selected = index;
        }
        true
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % PRESETS.len();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.checked_sub(1).unwrap_or(PRESETS.len() - 1);
    }

    pub fn custom_input(&self) -> &str {
        &self.custom_input
    }

    pub fn set_custom_input(&mut self, text: impl Into<String>) {
        self.custom_input = text.into();
        self.error = None;
    }

    pub fn push_char(&mut self, c: char) {
        self.custom_input.push(c);
        self.error = None;
    }

    pub fn pop_char(&mut self) {
        self.custom_input.pop();
        self.error = None;
    }

    /// The parse error from the last custom-mode [`confirm`](Self::confirm),
    /// for inline display.
    pub fn error(&self) -> Option<&Error> {
        self.error.as_ref()
    }

    /// Produce the query fragment for the current choice.
    ///
    /// In custom mode an unparsable duration yields an empty fragment and
    /// records the error; it is never fatal.
    pub fn confirm(&mut self) -> String {
        match self.mode {
            RangeMode::Preset => {
                self.error = None;
                self.selected_preset().fragment(&self.field)
            }
            RangeMode::Custom => match parse_duration(&self.custom_input) {
                Ok(duration) => {
                    self.error = None;
                    time_bound_fragment(&self.field, &duration)
                }
                Err(err) => {
                    tracing::debug!(input = %self.custom_input, "custom date range rejected");
                    self.error = Some(err);
                    String::new()
                }
            },
        }
    }
}

#[cfg(test)]
#[path = "date_range_tests.rs"]
mod tests;
