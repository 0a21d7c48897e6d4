// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for vq-core operations.
//!
//! None of these abort an editing session: callers render them as inline
//! messages next to the input that produced them.

use thiserror::Error;

/// All possible errors that can occur in vq-core operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid duration '{input}': {reason}\n  hint: use <number><unit> where unit is m, h, d, or w (e.g. 30m, 24h, 7d, 2w)")]
    InvalidDuration { input: String, reason: String },

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("saved filter not found: {0}")]
    FilterNotFound(String),

    #[error("saved filter already exists: {0}\n  hint: delete it first or pick another name")]
    FilterExists(String),

    #[error("filter store error: {0}")]
    Store(String),
}

/// Broad classification of an [`Error`], for callers deciding how to
/// present it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed user text (durations).
    Parse,
    /// Input rejected before it reached the store.
    Validation,
    /// A referenced saved filter does not exist.
    NotFound,
    /// The external store failed.
    Store,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::InvalidDuration { .. } => ErrorKind::Parse,
            Error::FieldEmpty { .. } | Error::FilterExists(_) => ErrorKind::Validation,
            Error::FilterNotFound(_) => ErrorKind::NotFound,
            Error::Store(_) => ErrorKind::Store,
        }
    }

    pub(crate) fn invalid_duration(input: &str, reason: impl Into<String>) -> Self {
        Error::InvalidDuration {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for vq-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
