// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that share common options.

use clap::{Args, ValueEnum};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Output format selection.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct OutputArgs {
    /// Output format (text, json)
    #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
    pub output: OutputFormat,
}

/// Cursor position within the query text.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct CursorArgs {
    /// Cursor position in characters (default: end of text)
    #[arg(long, short = 'c', value_name = "N")]
    pub cursor: Option<usize>,
}

/// Reference time for placeholder resolution.
#[derive(Args, Clone, Debug, Default)]
pub struct NowArgs {
    /// Resolve relative to this RFC 3339 timestamp instead of the current time
    #[arg(long, value_name = "TIMESTAMP")]
    pub now: Option<String>,
}
