// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Relative-time placeholders.
//!
//! A placeholder like `${TIME:24h}` stands for "24 hours before the query
//! runs". Saved and in-progress queries keep placeholders; they are only
//! replaced with absolute RFC 3339 timestamps by [`resolve`], right before
//! the query is handed to the service.
//!
//! Placeholder-like text that does not match `${TIME:<digits><unit>}` is
//! passed through untouched rather than reported.

use std::borrow::Cow;
use std::sync::LazyLock;

use chrono::{DateTime, SecondsFormat, Utc};
use regex::{Captures, Regex};

use crate::duration::{format_duration_shorthand, parse_duration, Duration};

// Using match with unreachable! since the pattern is hard-coded and known-valid.
static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\$\{TIME:(\d+[mhdw])\}") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// Encode a duration as a placeholder token, using its canonical shorthand.
///
/// ```ignore
/// assert_eq!(encode(&Duration::hours(24)), "${TIME:1d}");
/// ```
pub fn encode(duration: &Duration) -> String {
    format!("${{TIME:{}}}", format_duration_shorthand(duration))
}

/// Returns true if the query contains at least one well-formed placeholder.
pub fn has_placeholders(query: &str) -> bool {
    PLACEHOLDER_RE.is_match(query)
}

/// Replace every well-formed placeholder with `now - duration` as an
/// RFC 3339 UTC timestamp with second precision.
///
/// Only the `${...}` span is replaced; surrounding quotes stay as written.
/// Resolving already-resolved text is a no-op.
pub fn resolve(query: &str, now: DateTime<Utc>) -> String {
    let resolved = PLACEHOLDER_RE.replace_all(query, |caps: &Captures<'_>| {
        let whole = caps.get(0).map_or("", |m| m.as_str());
        let shorthand = caps.get(1).map_or("", |m| m.as_str());
        match timestamp_before(now, shorthand) {
            Some(ts) => ts,
            None => {
                tracing::debug!(placeholder = whole, "leaving unresolvable placeholder");
                whole.to_string()
            }
        }
    });

    if let Cow::Owned(_) = resolved {
        tracing::debug!(%now, "resolved time placeholders");
    }
    resolved.into_owned()
}

fn timestamp_before(now: DateTime<Utc>, shorthand: &str) -> Option<String> {
    let delta = parse_duration(shorthand).ok()?.to_time_delta()?;
    let at = now.checked_sub_signed(delta)?;
    Some(at.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[cfg(test)]
#[path = "placeholder_tests.rs"]
mod tests;
