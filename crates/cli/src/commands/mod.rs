// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod catalog;
pub mod compose;
pub mod filter;
pub mod time;

use chrono::{DateTime, Utc};

use crate::cli::NowArgs;
use crate::error::{Error, Result};

/// Reference time for placeholder resolution: `--now` if given, else the
/// current time.
pub fn reference_time(now: &NowArgs) -> Result<DateTime<Utc>> {
    match now.now.as_deref() {
        Some(text) => parse_timestamp(text),
        None => Ok(Utc::now()),
    }
}

/// Parse an RFC 3339 timestamp into UTC.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(text.trim())
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::InvalidTimestamp {
            input: text.to_string(),
            reason: e.to_string(),
        })
}

/// Cursor position, defaulting to the end of `text`.
pub fn cursor_or_end(text: &str, cursor: Option<usize>) -> usize {
    cursor.unwrap_or_else(|| text.chars().count())
}

/// Padding needed to bring `text` to `width` characters, measured before
/// any coloring.
pub(crate) fn pad(text: &str, width: usize) -> String {
    let len = text.chars().count();
    " ".repeat(width.saturating_sub(len))
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
