// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use crate::colors;
use crate::help;
use clap::{Parser, Subcommand};
use clap_complete::Shell;

pub use args::{CursorArgs, NowArgs, OutputArgs, OutputFormat};

#[derive(Parser)]
#[command(name = "vq")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compose, complete, and save workflow visibility queries")]
#[command(
    long_about = "Compose, complete, and save workflow visibility queries.\n\n\
    Suggests fields, operators, and values as you type, keeps relative time bounds \
    as ${TIME:..} placeholders, and stores named filters with a single default."
)]
#[command(help_template = help::template())]
#[command(before_help = help::commands())]
#[command(after_help = help::quickstart())]
#[command(styles = help::styles())]
pub struct Cli {
    /// Directory holding config.toml (default: $VQ_CONFIG_DIR or the user config dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    // ─────────────────────────────────────────────────────────────────────────
    // Composing
    // ─────────────────────────────────────────────────────────────────────────
    /// Suggest completions for the token at the cursor
    #[command(after_help = colors::examples("\
Examples:
  vq suggest \"\"                              Field names
  vq suggest \"Exec\"                          Fields starting with Exec
  vq suggest \"ExecutionStatus \"              Comparison operators
  vq suggest \"StartTime > \"                  Relative time expressions
  vq suggest \"WorkflowId = 'a' \" -o json     Connectors, as JSON"))]
    Suggest {
        /// Query text typed so far
        text: String,

        #[command(flatten)]
        cursor: CursorArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Replace the token at the cursor with a suggestion
    #[command(after_help = colors::examples("\
Examples:
  vq accept \"Exec\" --pick 0                  ExecutionStatus
  vq accept \"ExecutionStatus = \" --pick 1    ExecutionStatus = 'Completed'"))]
    Accept {
        /// Query text typed so far
        text: String,

        /// Index of the suggestion to apply, as listed by `vq suggest`
        #[arg(long, short = 'p', value_name = "N")]
        pick: usize,

        #[command(flatten)]
        cursor: CursorArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List searchable fields
    Fields {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// List query templates, or fill one in
    #[command(after_help = colors::examples("\
Examples:
  vq templates                               List templates
  vq templates failed-24h                    Print one template's query
  vq templates by-type --set type=payment    Fill in a parameter"))]
    Templates {
        /// Template to print instead of listing all
        name: Option<String>,

        /// Parameter value for the named template (repeatable)
        #[arg(long = "set", short = 's', value_name = "KEY=VALUE", requires = "name")]
        set: Vec<String>,

        #[command(flatten)]
        output: OutputArgs,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Time
    // ─────────────────────────────────────────────────────────────────────────
    /// Replace ${TIME:..} placeholders with absolute timestamps
    #[command(after_help = colors::examples("\
Examples:
  vq resolve \"StartTime > '${TIME:1d}'\"
  vq resolve \"StartTime > '${TIME:24h}'\" --now 2024-01-02T00:00:00Z"))]
    Resolve {
        /// Query text containing placeholders
        query: String,

        #[command(flatten)]
        now: NowArgs,
    },

    /// Parse a duration and print its canonical forms
    #[command(after_help = colors::examples("\
Examples:
  vq duration 90m        1h, ${TIME:1h}, 90 minutes
  vq duration 2W         2w, ${TIME:14d}, 20160 minutes"))]
    Duration {
        /// Duration text: <number><unit> with unit m, h, d, or w
        text: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Build a date range condition, optionally appended to a query
    #[command(after_help = colors::examples("\
Examples:
  vq range --preset 24h                      StartTime > '${TIME:1d}'
  vq range --custom 90m --field CloseTime    CloseTime > '${TIME:1h}'
  vq range --preset 7d --query \"ExecutionStatus = 'Failed'\""))]
    Range {
        /// Field to bound (default: time_field from config)
        #[arg(long, short = 'f')]
        field: Option<String>,

        /// Preset window (1h, 24h, 7d, 30d, All)
        #[arg(long, conflicts_with = "custom", required_unless_present = "custom")]
        preset: Option<String>,

        /// Custom duration, e.g. 90m or 2w
        #[arg(long)]
        custom: Option<String>,

        /// Query to append the condition to
        #[arg(long, short = 'q')]
        query: Option<String>,
    },

    // ─────────────────────────────────────────────────────────────────────────
    // Saved filters
    // ─────────────────────────────────────────────────────────────────────────
    /// Manage saved filters
    #[command(subcommand)]
    Filter(FilterCommand),

    /// Generate shell completions
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  vq completion bash > ~/.local/share/bash-completion/completions/vq
  vq completion zsh > ~/.zfunc/_vq
  vq completion fish > ~/.config/fish/completions/vq.fish")
    )]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Saved filter management commands.
#[derive(Subcommand)]
pub enum FilterCommand {
    /// Save a query under a name, replacing any filter with that name
    #[command(
        arg_required_else_help = true,
        after_help = colors::examples("\
Examples:
  vq filter save failed \"ExecutionStatus = 'Failed'\"
  vq filter save recent \"StartTime > '${TIME:1d}'\" --default")
    )]
    Save {
        /// Filter name
        name: String,

        /// Query text (time placeholders are kept unresolved)
        query: String,

        /// Make this the default filter
        #[arg(long)]
        default: bool,
    },

    /// List saved filters
    List {
        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show a saved filter
    #[command(arg_required_else_help = true)]
    Show {
        /// Filter name
        name: String,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Delete a saved filter
    #[command(arg_required_else_help = true)]
    Delete {
        /// Filter name
        name: String,
    },

    /// Make a saved filter the default
    #[command(arg_required_else_help = true)]
    Default {
        /// Filter name
        name: String,
    },

    /// Unset the default filter
    ClearDefault,

    /// Rename a saved filter
    #[command(arg_required_else_help = true)]
    Rename {
        /// Current name
        old: String,

        /// New name
        new: String,
    },

    /// Print a saved filter's query with placeholders resolved
    #[command(after_help = colors::examples("\
Examples:
  vq filter apply                            Resolve the default filter
  vq filter apply failed                     Resolve a named filter"))]
    Apply {
        /// Filter name (default: the default filter)
        name: Option<String>,

        #[command(flatten)]
        now: NowArgs,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
