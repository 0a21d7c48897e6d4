// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `vq suggest` and `vq accept`.

use serde::Serialize;
use vq_core::{Composer, Slot, Suggestion};

use super::{cursor_or_end, pad};
use crate::cli::OutputFormat;
use crate::colors;
use crate::error::{Error, Result};

#[derive(Serialize)]
struct SuggestOutputJson<'a> {
    slot: &'static str,
    suggestions: &'a [Suggestion],
}

#[derive(Serialize)]
struct AcceptOutputJson<'a> {
    text: &'a str,
    cursor: usize,
    suggestions: &'a [Suggestion],
}

pub fn suggest(text: &str, cursor: Option<usize>, format: OutputFormat) -> Result<()> {
    let composer = Composer::with_input(text, cursor_or_end(text, cursor));
    tracing::debug!(
        slot = slot_name(composer.slot()),
        count = composer.suggestions().len(),
        "suggest"
    );

    match format {
        OutputFormat::Text => {
            if composer.suggestions().is_empty() {
                println!("No suggestions");
            }
            for line in format_suggestions(composer.suggestions()) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let output = SuggestOutputJson {
                slot: slot_name(composer.slot()),
                suggestions: composer.suggestions(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn accept(text: &str, pick: usize, cursor: Option<usize>, format: OutputFormat) -> Result<()> {
    let mut composer = Composer::with_input(text, cursor_or_end(text, cursor));
    apply_pick(&mut composer, pick)?;

    match format {
        OutputFormat::Text => println!("{}", composer.text()),
        OutputFormat::Json => {
            let output = AcceptOutputJson {
                text: composer.text(),
                cursor: composer.cursor(),
                suggestions: composer.suggestions(),
            };
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Move the selection to `pick` and accept it.
pub(crate) fn apply_pick(composer: &mut Composer, pick: usize) -> Result<()> {
    let available = composer.suggestions().len();
    if pick >= available {
        return Err(Error::NoSuchSuggestion { pick, available });
    }
    while composer.selected_index() != pick {
        composer.select_next();
    }
    composer.accept_selected();
    Ok(())
}

/// One line per suggestion: index, display text, description.
pub(crate) fn format_suggestions(suggestions: &[Suggestion]) -> Vec<String> {
    let width = suggestions
        .iter()
        .map(|s| s.display_text.chars().count())
        .max()
        .unwrap_or(0);
    suggestions
        .iter()
        .enumerate()
        .map(|(i, s)| {
            format!(
                "{i:>2}  {}{}  {}",
                colors::category(s.category, &s.display_text),
                pad(&s.display_text, width),
                s.description
            )
        })
        .collect()
}

pub(crate) fn slot_name(slot: Slot) -> &'static str {
    match slot {
        Slot::Field => "field",
        Slot::Operator => "operator",
        Slot::Value { .. } => "value",
        Slot::Connector { .. } | Slot::BetweenAnd => "connector",
        Slot::End => "end",
        Slot::Any => "any",
    }
}

#[cfg(test)]
#[path = "compose_tests.rs"]
mod tests;
