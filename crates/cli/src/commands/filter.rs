// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `vq filter ...`: saved filter management.
//!
//! Each command loads the collection from the store, applies one change,
//! and writes it back.

use vq_core::{resolve_placeholders, FilterStore, SavedFilter, SavedFilters};

use super::{pad, reference_time};
use crate::cli::{NowArgs, OutputFormat};
use crate::colors;
use crate::error::{Error, Result};

const DEFAULT_MARKER: &str = "(default)";

fn update<T>(
    store: &dyn FilterStore,
    change: impl FnOnce(&mut SavedFilters) -> vq_core::Result<T>,
) -> Result<T> {
    let mut filters = SavedFilters::load_from(store)?;
    let result = change(&mut filters)?;
    filters.persist(store)?;
    Ok(result)
}

pub fn save(store: &dyn FilterStore, name: &str, query: &str, default: bool) -> Result<()> {
    update(store, |filters| filters.save(name, query, default))?;
    tracing::info!(name = name.trim(), default, "saved filter");
    if default {
        println!("Saved filter '{}' as default", name.trim());
    } else {
        println!("Saved filter '{}'", name.trim());
    }
    Ok(())
}

pub fn list(store: &dyn FilterStore, format: OutputFormat) -> Result<()> {
    let filters = SavedFilters::load_from(store)?;
    match format {
        OutputFormat::Text => {
            if filters.is_empty() {
                println!("No saved filters");
            }
            for line in format_filters(filters.list()) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(filters.list())?);
        }
    }
    Ok(())
}

pub fn show(store: &dyn FilterStore, name: &str, format: OutputFormat) -> Result<()> {
    let filters = SavedFilters::load_from(store)?;
    let filter = filters
        .get(name)
        .ok_or_else(|| vq_core::Error::FilterNotFound(name.to_string()))?;
    match format {
        OutputFormat::Text => {
            println!("{}", filter.query);
            if filter.is_default {
                println!("{}", colors::auto(colors::context, DEFAULT_MARKER));
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(filter)?),
    }
    Ok(())
}

pub fn delete(store: &dyn FilterStore, name: &str) -> Result<()> {
    let removed = update(store, |filters| filters.delete(name))?;
    tracing::info!(name = %removed.name, "deleted filter");
    if removed.is_default {
        println!("Deleted filter '{}' (no default filter now)", removed.name);
    } else {
        println!("Deleted filter '{}'", removed.name);
    }
    Ok(())
}

pub fn set_default(store: &dyn FilterStore, name: &str) -> Result<()> {
    update(store, |filters| filters.set_default(name))?;
    tracing::info!(name, "set default filter");
    println!("Default filter is now '{name}'");
    Ok(())
}

pub fn clear_default(store: &dyn FilterStore) -> Result<()> {
    update(store, |filters| {
        filters.clear_default();
        Ok(())
    })?;
    println!("Cleared default filter");
    Ok(())
}

pub fn rename(store: &dyn FilterStore, old: &str, new: &str) -> Result<()> {
    update(store, |filters| filters.rename(old, new))?;
    tracing::info!(old, new = new.trim(), "renamed filter");
    println!("Renamed filter '{}' to '{}'", old, new.trim());
    Ok(())
}

pub fn apply(store: &dyn FilterStore, name: Option<&str>, now: &NowArgs) -> Result<()> {
    let now = reference_time(now)?;
    let filters = SavedFilters::load_from(store)?;
    let query = select(&filters, name)?;
    println!("{}", resolve_placeholders(query, now));
    Ok(())
}

/// The named filter's query, or the default filter's when no name is given.
pub(crate) fn select<'a>(filters: &'a SavedFilters, name: Option<&str>) -> Result<&'a str> {
    let filter = match name {
        Some(name) => filters
            .get(name)
            .ok_or_else(|| vq_core::Error::FilterNotFound(name.to_string()))?,
        None => filters.default_filter().ok_or(Error::NoDefaultFilter)?,
    };
    Ok(&filter.query)
}

pub(crate) fn format_filters(filters: &[SavedFilter]) -> Vec<String> {
    let width = filters
        .iter()
        .map(|f| f.name.chars().count())
        .max()
        .unwrap_or(0);
    filters
        .iter()
        .map(|f| {
            let mut line = format!(
                "{}{}  {}",
                colors::auto(colors::literal, &f.name),
                pad(&f.name, width),
                f.query
            );
            if f.is_default {
                line.push_str("  ");
                line.push_str(&colors::auto(colors::context, DEFAULT_MARKER));
            }
            line
        })
        .collect()
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
