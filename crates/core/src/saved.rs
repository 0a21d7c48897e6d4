// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Named, persisted queries.
//!
//! A [`SavedFilter`] keeps its query unresolved, so `${TIME:...}`
//! placeholders are re-evaluated every time the filter is applied. At most
//! one filter in a [`SavedFilters`] collection is the default. Every
//! mutation validates first and then changes the collection, so a rejected
//! call leaves it untouched.
//!
//! Persistence belongs to a [`FilterStore`]; this module never does I/O.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A named query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFilter {
    pub name: String,
    /// Query text, possibly containing time placeholders.
    pub query: String,
    #[serde(default)]
    pub is_default: bool,
}

/// External persistence for saved filters.
pub trait FilterStore {
    /// Load every saved filter, in display order.
    fn load(&self) -> Result<Vec<SavedFilter>>;

    /// Replace the stored filters with `filters`.
    fn store(&self, filters: &[SavedFilter]) -> Result<()>;
}

/// An ordered collection of saved filters with a single default.
///
/// Insertion order is display order; nothing here sorts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SavedFilters {
    filters: Vec<SavedFilter>,
}

impl SavedFilters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from stored entries.
    ///
    /// If more than one entry claims to be the default, only the first
    /// keeps the flag.
    pub fn from_vec(mut filters: Vec<SavedFilter>) -> Self {
        let mut seen_default = false;
        for filter in &mut filters {
            if filter.is_default {
                if seen_default {
                    tracing::warn!(name = %filter.name, "dropping duplicate default filter flag");
                    filter.is_default = false;
                }
                seen_default = true;
            }
        }
        SavedFilters { filters }
    }

    pub fn load_from(store: &dyn FilterStore) -> Result<Self> {
        Ok(Self::from_vec(store.load()?))
    }

    pub fn persist(&self, store: &dyn FilterStore) -> Result<()> {
        store.store(&self.filters)
    }

    pub fn list(&self) -> &[SavedFilter] {
        &self.filters
    }

    pub fn into_vec(self) -> Vec<SavedFilter> {
        self.filters
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&SavedFilter> {
        self.position(name).map(|i| &self.filters[i])
    }

    pub fn default_filter(&self) -> Option<&SavedFilter> {
        self.filters.iter().find(|f| f.is_default)
    }

    /// Save a filter, replacing any existing filter with the same name in
    /// place. Saving with `is_default` clears the flag everywhere else.
    ///
    /// Names are trimmed here and in every lookup.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldEmpty`] if the name is empty or blank.
    pub fn save(&mut self, name: &str, query: &str, is_default: bool) -> Result<()> {
        let name = validate_name(name)?;

        if is_default {
            self.clear_default();
        }

        let filter = SavedFilter {
            name: name.to_string(),
            query: query.to_string(),
            is_default,
        };
        match self.position(name) {
            Some(i) => {
                tracing::debug!(name, "replacing saved filter");
                self.filters[i] = filter;
            }
            None => {
                tracing::debug!(name, "adding saved filter");
                self.filters.push(filter);
            }
        }
        Ok(())
    }

    /// Remove a filter by name and return it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilterNotFound`] if no filter has that name.
    pub fn delete(&mut self, name: &str) -> Result<SavedFilter> {
        let i = self.require(name)?;
        tracing::debug!(name, "deleting saved filter");
        Ok(self.filters.remove(i))
    }

    /// Make `name` the only default filter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilterNotFound`] if no filter has that name.
    pub fn set_default(&mut self, name: &str) -> Result<()> {
        let i = self.require(name)?;
        self.clear_default();
        self.filters[i].is_default = true;
        Ok(())
    }

    /// Clear the default flag on every filter.
    pub fn clear_default(&mut self) {
        for filter in &mut self.filters {
            filter.is_default = false;
        }
    }

    /// Rename a filter, keeping its position, query, and default flag.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldEmpty`] for a blank new name,
    /// [`Error::FilterNotFound`] if `old` does not exist, and
    /// [`Error::FilterExists`] if another filter already uses `new`.
    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        let new = validate_name(new)?;
        let i = self.require(old)?;
        if old.trim() != new && self.position(new).is_some() {
            return Err(Error::FilterExists(new.to_string()));
        }
        self.filters[i].name = new.to_string();
        Ok(())
    }

    fn position(&self, name: &str) -> Option<usize> {
        let name = name.trim();
        self.filters.iter().position(|f| f.name == name)
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| Error::FilterNotFound(name.trim().to_string()))
    }
}

fn validate_name(name: &str) -> Result<&str> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::FieldEmpty {
            field: "filter name",
        });
    }
    Ok(name)
}

#[cfg(test)]
#[path = "saved_tests.rs"]
mod tests;
