// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the vq CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] vq_core::Error),

    #[error("invalid timestamp '{input}': {reason}\n  hint: use RFC 3339, e.g. 2024-01-02T00:00:00Z")]
    InvalidTimestamp { input: String, reason: String },

    #[error("unknown date range preset: '{0}'\n  hint: valid presets are: {presets}", presets = preset_labels())]
    UnknownPreset(String),

    #[error("unknown template: '{0}'\n  hint: run 'vq templates' to list templates")]
    UnknownTemplate(String),

    #[error("invalid template parameter '{0}'\n  hint: use --set KEY=VALUE")]
    InvalidParam(String),

    #[error("no suggestion at index {pick} ({available} available)")]
    NoSuchSuggestion { pick: usize, available: usize },

    #[error("no default filter set\n  hint: name a filter or mark one with 'vq filter default <NAME>'")]
    NoDefaultFilter,

    #[error("could not determine the config directory\n  hint: pass --config-dir or set VQ_CONFIG_DIR")]
    NoConfigDir,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

fn preset_labels() -> String {
    vq_core::date_range::PRESETS
        .iter()
        .map(|p| p.label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// A specialized Result type for vq CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
