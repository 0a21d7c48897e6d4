// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! User configuration management.
//!
//! Configuration is stored in `config.toml` inside the config directory:
//! - `time_field`: the field date-range fragments target (default `StartTime`)
//! - `[[filters]]`: saved filters (`name`, `query`, `is_default`)
//!
//! The directory is taken from `--config-dir`, then `VQ_CONFIG_DIR`, then
//! the platform config directory joined with `vq`.

use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use vq_core::{FilterStore, SavedFilter};

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "vq";
const CONFIG_FILE_NAME: &str = "config.toml";
const FILTERS_KEY: &str = "filters";

/// User configuration stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Config {
    /// Field that date-range fragments compare against.
    #[serde(default = "default_time_field")]
    pub time_field: String,
    /// Saved filters, in display order.
    #[serde(default)]
    pub filters: Vec<SavedFilter>,
}

fn default_time_field() -> String {
    "StartTime".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Config {
            time_field: default_time_field(),
            filters: Vec::new(),
        }
    }
}

impl Config {
    /// Loads configuration from the given directory.
    ///
    /// A missing file yields the default configuration.
    pub fn load(config_dir: &Path) -> Result<Self> {
        let path = config_path(config_dir);
        let Some(content) = read_optional(&path)? else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Config::default());
        };
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        tracing::debug!(path = %path.display(), filters = config.filters.len(), "loaded config");
        Ok(config)
    }
}

/// Resolve the config directory from an explicit override, the environment,
/// or the platform default.
pub fn resolve_config_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = env::config_dir() {
        return Ok(dir);
    }
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or(Error::NoConfigDir)
}

/// Path of the config file within `config_dir`.
pub fn config_path(config_dir: &Path) -> PathBuf {
    config_dir.join(CONFIG_FILE_NAME)
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(Error::Config(format!("failed to read config: {}", e))),
    }
}

fn write_config(config_dir: &Path, content: &str) -> Result<()> {
    fs::create_dir_all(config_dir)?;
    let path = config_path(config_dir);
    fs::write(&path, content)?;
    tracing::debug!(path = %path.display(), "wrote config");
    Ok(())
}

/// Saved-filter store backed by the `[[filters]]` array of `config.toml`.
///
/// Writing replaces only the filters; any other keys in the file are kept.
#[derive(Debug, Clone)]
pub struct TomlFilterStore {
    config_dir: PathBuf,
}

impl TomlFilterStore {
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        TomlFilterStore {
            config_dir: config_dir.into(),
        }
    }

    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    fn write_filters(&self, filters: &[SavedFilter]) -> Result<()> {
        let path = config_path(&self.config_dir);
        let mut table = match read_optional(&path)? {
            Some(content) => toml::from_str::<toml::Table>(&content)
                .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?,
            None => toml::Table::new(),
        };
        if filters.is_empty() {
            table.remove(FILTERS_KEY);
        } else {
            let value = toml::Value::try_from(filters)
                .map_err(|e| Error::Config(format!("failed to serialize filters: {}", e)))?;
            table.insert(FILTERS_KEY.to_string(), value);
        }
        let content = toml::to_string_pretty(&table)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        write_config(&self.config_dir, &content)
    }
}

fn store_error(err: Error) -> vq_core::Error {
    vq_core::Error::Store(err.to_string())
}

impl FilterStore for TomlFilterStore {
    fn load(&self) -> vq_core::Result<Vec<SavedFilter>> {
        Config::load(&self.config_dir)
            .map(|config| config.filters)
            .map_err(store_error)
    }

    fn store(&self, filters: &[SavedFilter]) -> vq_core::Result<()> {
        self.write_filters(filters).map_err(store_error)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
