// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color utilities for help and suggestion output.
//!
//! Respects environment variables:
//! - `NO_COLOR=1`: Disables colors
//! - `COLOR=1`: Forces colors even without TTY

use std::io::IsTerminal;

use vq_core::SuggestionCategory;

use crate::env;

/// ANSI 256-color codes.
pub mod codes {
    /// Section headers: pastel cyan/steel blue
    pub const HEADER: u8 = 74;
    /// Commands/literals: light grey
    pub const LITERAL: u8 = 250;
    /// Default values/context: medium grey
    pub const CONTEXT: u8 = 245;

    /// Suggestion categories
    pub const FIELD: u8 = 110;
    pub const OPERATOR: u8 = 180;
    pub const VALUE: u8 = 150;
    pub const TIME: u8 = 176;

    /// Pre-formatted ANSI escape sequences for use in tests
    pub const HEADER_START: &str = "\x1b[38;5;74m";
    pub const FIELD_START: &str = "\x1b[38;5;110m";
    pub const RESET: &str = "\x1b[0m";
}

/// Check if colors should be enabled based on TTY and environment variables.
pub fn should_colorize() -> bool {
    if env::no_color() {
        return false;
    }
    if env::force_color() {
        return true;
    }
    std::io::stdout().is_terminal()
}

/// Format a 256-color ANSI escape sequence for foreground color.
fn fg256(code: u8) -> String {
    format!("\x1b[38;5;{code}m")
}

/// ANSI reset sequence.
const RESET: &str = "\x1b[0m";

fn paint(code: u8, text: &str) -> String {
    format!("{}{}{}", fg256(code), text, RESET)
}

/// Apply header color (section titles) to text.
pub fn header(text: &str) -> String {
    paint(codes::HEADER, text)
}

/// Apply literal color (commands, options) to text.
pub fn literal(text: &str) -> String {
    paint(codes::LITERAL, text)
}

/// Apply context color (descriptions, hints) to text.
pub fn context(text: &str) -> String {
    paint(codes::CONTEXT, text)
}

/// Apply `paint` only when colors are enabled.
pub fn auto(paint: fn(&str) -> String, text: &str) -> String {
    if should_colorize() {
        paint(text)
    } else {
        text.to_string()
    }
}

/// Colorize an examples block for `after_help`.
///
/// Lines ending in `:` are headers. Example lines split at the first run of
/// two spaces into a literal command and a context description.
pub fn examples(text: &str) -> String {
    paint_examples(text, should_colorize())
}

fn paint_examples(text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let mut result = String::with_capacity(text.len() + 256);
    for line in text.lines() {
        if !result.is_empty() {
            result.push('\n');
        }
        let trimmed = line.trim_start();
        let indent = &line[..line.len() - trimmed.len()];
        result.push_str(indent);

        if trimmed.ends_with(':') && !trimmed.contains("  ") {
            result.push_str(&header(trimmed));
        } else if let Some(split) = trimmed.find("  ") {
            let (cmd, desc) = trimmed.split_at(split);
            let desc_start = desc.len() - desc.trim_start().len();
            result.push_str(&literal(cmd));
            result.push_str(&desc[..desc_start]);
            result.push_str(&context(&desc[desc_start..]));
        } else if !trimmed.is_empty() {
            result.push_str(&literal(trimmed));
        }
    }
    result
}

/// Color a suggestion's display text by its category, if colors are enabled.
pub fn category(category: SuggestionCategory, text: &str) -> String {
    paint_category(category, text, should_colorize())
}

fn paint_category(category: SuggestionCategory, text: &str, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let code = match category {
        SuggestionCategory::Field => codes::FIELD,
        SuggestionCategory::Operator => codes::OPERATOR,
        SuggestionCategory::Value => codes::VALUE,
        SuggestionCategory::Time => codes::TIME,
    };
    paint(code, text)
}

#[cfg(test)]
#[path = "colors_tests.rs"]
mod tests;
