// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `vq resolve`, `vq duration`, and `vq range`.

use std::path::Path;

use vq_core::catalog::find_field;
use vq_core::date_range::append_condition;
use vq_core::placeholder;
use vq_core::{format_duration_shorthand, parse_duration, resolve_placeholders, DateRangeSelector};

use super::reference_time;
use crate::cli::{NowArgs, OutputFormat};
use crate::config::Config;
use crate::error::{Error, Result};

pub fn resolve(query: &str, now: &NowArgs) -> Result<()> {
    let now = reference_time(now)?;
    if !placeholder::has_placeholders(query) {
        tracing::debug!("query has no time placeholders");
    }
    println!("{}", resolve_placeholders(query, now));
    Ok(())
}

pub fn duration(text: &str, format: OutputFormat) -> Result<()> {
    let duration = parse_duration(text)?;
    let shorthand = format_duration_shorthand(&duration);
    let token = placeholder::encode(&duration);
    let minutes = duration.total_minutes();

    match format {
        OutputFormat::Text => {
            println!("duration: {duration}");
            println!("shorthand: {shorthand}");
            println!("placeholder: {token}");
            println!("minutes: {minutes}");
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "duration": duration.to_string(),
                "shorthand": shorthand,
                "placeholder": token,
                "minutes": minutes,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Where the range comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeSource<'a> {
    Preset(&'a str),
    Custom(&'a str),
}

pub fn range(
    config_dir: &Path,
    field: Option<&str>,
    source: RangeSource<'_>,
    query: Option<&str>,
) -> Result<()> {
    let field = match field {
        Some(field) => field.to_string(),
        None => Config::load(config_dir)?.time_field,
    };
    if find_field(&field).is_none() {
        tracing::warn!(field = %field, "date range on a field outside the catalog");
    }
    println!("{}", build_range(&field, source, query)?);
    Ok(())
}

/// Build the condition for `source` on `field`, appended to `query` when
/// one is given.
pub(crate) fn build_range(field: &str, source: RangeSource<'_>, query: Option<&str>) -> Result<String> {
    let mut selector = DateRangeSelector::new(field);
    match source {
        RangeSource::Preset(label) => {
            if !selector.select_label(label) {
                return Err(Error::UnknownPreset(label.to_string()));
            }
        }
        RangeSource::Custom(text) => {
            selector.toggle_mode();
            selector.set_custom_input(text);
        }
    }

    let fragment = selector.confirm();
    if let Some(err) = selector.error() {
        return Err(err.clone().into());
    }
    Ok(append_condition(query.unwrap_or_default(), &fragment))
}

#[cfg(test)]
#[path = "time_tests.rs"]
mod tests;
