// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vqrs - command-line front end for the vq query composer.
//!
//! This crate wires [`vq_core`] to a terminal: it parses commands, loads the
//! user's `config.toml`, persists saved filters through
//! [`TomlFilterStore`], and prints suggestions and resolved queries.
//!
//! # Main Components
//!
//! - [`Cli`] - clap command definitions
//! - [`Config`] - user configuration (`time_field`, saved filters)
//! - [`Error`] - error types for all operations

mod cli;
pub mod colors;
mod commands;
pub mod env;
pub mod help;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, CursorArgs, FilterCommand, NowArgs, OutputArgs, OutputFormat};
pub use config::{resolve_config_dir, Config, TomlFilterStore};
pub use error::{Error, Result};

use clap::CommandFactory;
use clap_complete::generate;

use commands::time::RangeSource;

/// Run a parsed command line.
pub fn run(cli: Cli) -> Result<()> {
    let config_dir = || resolve_config_dir(cli.config_dir.as_deref());

    match cli.command {
        Command::Suggest {
            text,
            cursor,
            output,
        } => commands::compose::suggest(&text, cursor.cursor, output.output),
        Command::Accept {
            text,
            pick,
            cursor,
            output,
        } => commands::compose::accept(&text, pick, cursor.cursor, output.output),
        Command::Fields { output } => commands::catalog::fields(output.output),
        Command::Templates { name, set, output } => {
            commands::catalog::templates(name.as_deref(), &set, output.output)
        }
        Command::Resolve { query, now } => commands::time::resolve(&query, &now),
        Command::Duration { text, output } => commands::time::duration(&text, output.output),
        Command::Range {
            field,
            preset,
            custom,
            query,
        } => {
            let source = match custom.as_deref() {
                Some(text) => RangeSource::Custom(text),
                None => RangeSource::Preset(preset.as_deref().unwrap_or_default()),
            };
            commands::time::range(&config_dir()?, field.as_deref(), source, query.as_deref())
        }
        Command::Filter(cmd) => {
            let store = TomlFilterStore::new(config_dir()?);
            tracing::debug!(dir = %store.config_dir().display(), "using filter store");
            run_filter(&store, cmd)
        }
        Command::Completion { shell } => {
            let mut cmd = Cli::command();
            generate(shell, &mut cmd, "vq", &mut std::io::stdout());
            Ok(())
        }
    }
}

fn run_filter(store: &TomlFilterStore, cmd: FilterCommand) -> Result<()> {
    match cmd {
        FilterCommand::Save {
            name,
            query,
            default,
        } => commands::filter::save(store, &name, &query, default),
        FilterCommand::List { output } => commands::filter::list(store, output.output),
        FilterCommand::Show { name, output } => commands::filter::show(store, &name, output.output),
        FilterCommand::Delete { name } => commands::filter::delete(store, &name),
        FilterCommand::Default { name } => commands::filter::set_default(store, &name),
        FilterCommand::ClearDefault => commands::filter::clear_default(store),
        FilterCommand::Rename { old, new } => commands::filter::rename(store, &old, &new),
        FilterCommand::Apply { name, now } => commands::filter::apply(store, name.as_deref(), &now),
    }
}
