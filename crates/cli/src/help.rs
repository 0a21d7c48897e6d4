// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Help text generation with colorization support.

use crate::colors;
use clap::builder::styling::Styles;

/// Generate clap Styles for help output.
pub fn styles() -> Styles {
    if !colors::should_colorize() {
        return Styles::plain();
    }

    use anstyle::{Ansi256Color, Color, Style};

    let header = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::HEADER))));
    let literal = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::LITERAL))));
    let context = Style::new().fg_color(Some(Color::Ansi256(Ansi256Color(colors::codes::CONTEXT))));

    Styles::styled()
        .header(header)
        .usage(header)
        .literal(literal)
        .placeholder(context)
        .valid(context)
}

/// Main help template with colorized Options header.
pub fn template() -> String {
    format!(
        "{{about-with-newline}}
{{usage-heading}} {{usage}}

{{before-help}}{}
{{options}}{{after-help}}",
        colors::auto(colors::header, "Options:")
    )
}

const COMMANDS: &[(&str, &[(&str, &str)])] = &[
    (
        "Composing:",
        &[
            ("suggest", "Suggest completions at the cursor"),
            ("accept", "Apply a suggestion to the query"),
            ("fields", "List searchable fields"),
            ("templates", "List query templates"),
        ],
    ),
    (
        "Time:",
        &[
            ("resolve", "Replace time placeholders with timestamps"),
            ("duration", "Normalize a duration"),
            ("range", "Build a date range condition"),
        ],
    ),
    (
        "Saved Filters:",
        &[("filter", "Manage saved filters")],
    ),
    ("Setup:", &[("completion", "Generate shell completions")]),
];

/// Commands list shown before options in main help.
pub fn commands() -> String {
    let mut out = String::new();
    for (section, entries) in COMMANDS {
        out.push_str(&colors::auto(colors::header, section));
        out.push('\n');
        for (name, about) in *entries {
            let name = colors::auto(colors::literal, &format!("{name:<10}"));
            out.push_str(&format!("  {name}  {about}\n"));
        }
        out.push('\n');
    }
    out
}

const QUICKSTART: &str = "\
Get started:
  vq suggest \"Exec\"                           Complete a field name
  vq suggest \"ExecutionStatus = \"             Complete a status value
  vq range --preset 24h --query \"WorkflowType = 'payment'\"
  vq resolve \"StartTime > '${TIME:1d}'\"       Resolve time placeholders
  vq filter save failed \"ExecutionStatus = 'Failed'\" --default
  vq filter apply                             Resolve the default filter";

/// Quickstart examples shown after the options list.
pub fn quickstart() -> String {
    colors::examples(QUICKSTART)
}

#[cfg(test)]
#[path = "help_tests.rs"]
mod tests;
