// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! vq-core: interactive composer for visibility queries.
//!
//! Given query text and a cursor, this crate works out which part of a
//! condition is being typed and offers completions; it keeps relative time
//! bounds as `${TIME:<n><unit>}` placeholders until a query is executed;
//! and it models named saved filters with a single default.
//!
//! Everything here is synchronous and free of I/O. Rendering, key handling,
//! persistence, and query execution belong to the caller.
//!
//! ```text
//! ExecutionStatus = 'Failed' AND StartTime > '${TIME:1d}'
//! field           op value   connector     placeholder
//! ```

pub mod catalog;
pub mod context;
pub mod date_range;
pub mod duration;
pub mod error;
pub mod placeholder;
pub mod saved;
pub mod suggest;

pub use context::{analyze, classify, QueryContext, Slot};
pub use date_range::{DateRangePreset, DateRangeSelector, RangeMode};
pub use duration::{format_duration_shorthand, parse_duration, Duration, DurationUnit};
pub use error::{Error, ErrorKind, Result};
pub use placeholder::resolve as resolve_placeholders;
pub use saved::{FilterStore, SavedFilter, SavedFilters};
pub use suggest::{accept, suggest, Composer, Suggestion, SuggestionCategory, MAX_SUGGESTIONS};
