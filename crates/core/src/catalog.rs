// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Static vocabulary of the visibility query language.
//!
//! Fields, operators, status literals, relative time expressions, and canned
//! query templates. These tables are immutable and ordered; suggestion order
//! follows table order.

use std::fmt;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::duration::Duration;
use crate::placeholder;

/// What kind of literal a field compares against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free-form identifier or name.
    Keyword,
    /// One of the [`ExecutionStatus`] literals.
    Status,
    /// A timestamp; relative time expressions apply.
    Time,
    /// A length of time, e.g. `ExecutionDuration > 2h`.
    Duration,
}

/// A searchable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub kind: FieldKind,
}

pub static FIELDS: &[FieldDescriptor] = &[
    FieldDescriptor {
        name: "WorkflowId",
        description: "Workflow identifier",
        kind: FieldKind::Keyword,
    },
    FieldDescriptor {
        name: "WorkflowType",
        description: "Workflow type name",
        kind: FieldKind::Keyword,
    },
    FieldDescriptor {
        name: "ExecutionStatus",
        description: "Current execution status",
        kind: FieldKind::Status,
    },
    FieldDescriptor {
        name: "StartTime",
        description: "When the execution started",
        kind: FieldKind::Time,
    },
    FieldDescriptor {
        name: "CloseTime",
        description: "When the execution closed",
        kind: FieldKind::Time,
    },
    FieldDescriptor {
        name: "ExecutionDuration",
        description: "How long the execution ran",
        kind: FieldKind::Duration,
    },
    FieldDescriptor {
        name: "TaskQueue",
        description: "Task queue the execution runs on",
        kind: FieldKind::Keyword,
    },
    FieldDescriptor {
        name: "RunId",
        description: "Run identifier",
        kind: FieldKind::Keyword,
    },
];

/// Look up a field by name, ignoring case.
pub fn find_field(name: &str) -> Option<&'static FieldDescriptor> {
    FIELDS.iter().find(|f| f.name.eq_ignore_ascii_case(name))
}

/// A comparison operator or logical connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorDescriptor {
    pub symbol: &'static str,
    pub description: &'static str,
    pub is_logical: bool,
}

pub static OPERATORS: &[OperatorDescriptor] = &[
    OperatorDescriptor {
        symbol: "=",
        description: "Equals",
        is_logical: false,
    },
    OperatorDescriptor {
        symbol: "!=",
        description: "Not equals",
        is_logical: false,
    },
    OperatorDescriptor {
        symbol: ">",
        description: "Greater than",
        is_logical: false,
    },
    OperatorDescriptor {
        symbol: ">=",
        description: "Greater than or equal",
        is_logical: false,
    },
    OperatorDescriptor {
        symbol: "<",
        description: "Less than",
        is_logical: false,
    },
    OperatorDescriptor {
        symbol: "<=",
        description: "Less than or equal",
        is_logical: false,
    },
    OperatorDescriptor {
        symbol: "BETWEEN",
        description: "Within a range (BETWEEN a AND b)",
        is_logical: false,
    },
    OperatorDescriptor {
        symbol: "AND",
        description: "Both conditions must match",
        is_logical: true,
    },
    OperatorDescriptor {
        symbol: "OR",
        description: "Either condition may match",
        is_logical: true,
    },
    OperatorDescriptor {
        symbol: "ORDER BY",
        description: "Sort results by a field",
        is_logical: true,
    },
];

pub fn comparison_operators() -> impl Iterator<Item = &'static OperatorDescriptor> {
    OPERATORS.iter().filter(|op| !op.is_logical)
}

pub fn logical_operators() -> impl Iterator<Item = &'static OperatorDescriptor> {
    OPERATORS.iter().filter(|op| op.is_logical)
}

/// Returns true for a complete comparison operator token (`=`, `!=`, `>=`,
/// `BETWEEN`, ...). Anything ending in `=` counts, so `==` is accepted.
pub fn is_comparison_operator(word: &str) -> bool {
    matches!(word, "<" | ">") || word.ends_with('=') || word.eq_ignore_ascii_case("BETWEEN")
}

/// Returns true for `AND` / `OR` in any case.
pub fn is_logical_connector(word: &str) -> bool {
    word.eq_ignore_ascii_case("AND") || word.eq_ignore_ascii_case("OR")
}

/// Literal values of the `ExecutionStatus` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutionStatus {
    Running,
    Completed,
    Failed,
    Canceled,
    Terminated,
    TimedOut,
    ContinuedAsNew,
}

impl ExecutionStatus {
    pub const ALL: [ExecutionStatus; 7] = [
        ExecutionStatus::Running,
        ExecutionStatus::Completed,
        ExecutionStatus::Failed,
        ExecutionStatus::Canceled,
        ExecutionStatus::Terminated,
        ExecutionStatus::TimedOut,
        ExecutionStatus::ContinuedAsNew,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ExecutionStatus::Running => "Running",
            ExecutionStatus::Completed => "Completed",
            ExecutionStatus::Failed => "Failed",
            ExecutionStatus::Canceled => "Canceled",
            ExecutionStatus::Terminated => "Terminated",
            ExecutionStatus::TimedOut => "TimedOut",
            ExecutionStatus::ContinuedAsNew => "ContinuedAsNew",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ExecutionStatus::Running => "Still executing",
            ExecutionStatus::Completed => "Finished successfully",
            ExecutionStatus::Failed => "Finished with a failure",
            ExecutionStatus::Canceled => "Canceled on request",
            ExecutionStatus::Terminated => "Forcefully terminated",
            ExecutionStatus::TimedOut => "Exceeded its timeout",
            ExecutionStatus::ContinuedAsNew => "Continued as a new run",
        }
    }
}

impl fmt::Display for ExecutionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named relative offset such as "7 days ago".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeExpression {
    pub label: &'static str,
    pub description: &'static str,
    pub offset: Duration,
}

impl TimeExpression {
    /// Quoted placeholder to insert after a time comparison.
    pub fn insert_text(&self) -> String {
        format!("'{}'", placeholder::encode(&self.offset))
    }
}

pub static TIME_EXPRESSIONS: &[TimeExpression] = &[
    TimeExpression {
        label: "1 hour ago",
        description: "Within the last hour",
        offset: Duration::hours(1),
    },
    TimeExpression {
        label: "24 hours ago",
        description: "Within the last day",
        offset: Duration::hours(24),
    },
    TimeExpression {
        label: "7 days ago",
        description: "Within the last week",
        offset: Duration::days(7),
    },
    TimeExpression {
        label: "30 days ago",
        description: "Within the last month",
        offset: Duration::days(30),
    },
];

// Using match with unreachable! since the pattern is hard-coded and known-valid.
static TEMPLATE_PARAM_RE: LazyLock<Regex> =
    LazyLock::new(|| match Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}") {
        Ok(re) => re,
        Err(_) => unreachable!("static regex pattern"),
    });

/// A canned query. `${name}` parameters must be filled in before use;
/// `${TIME:...}` placeholders are left for resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub query: &'static str,
}

impl QueryTemplate {
    /// Names of the parameters this template still needs, in order of first
    /// appearance.
    pub fn params(&self) -> Vec<&'static str> {
        let mut params: Vec<&'static str> = Vec::new();
        for caps in TEMPLATE_PARAM_RE.captures_iter(self.query) {
            if let Some(name) = caps.get(1).map(|m| m.as_str()) {
                if !params.contains(&name) {
                    params.push(name);
                }
            }
        }
        params
    }

    /// Substitute parameters. Parameters without a value stay as written.
    pub fn fill(&self, values: &[(&str, &str)]) -> String {
        TEMPLATE_PARAM_RE
            .replace_all(self.query, |caps: &Captures<'_>| {
                let whole = caps.get(0).map_or("", |m| m.as_str());
                let name = caps.get(1).map_or("", |m| m.as_str());
                values
                    .iter()
                    .find(|(key, _)| *key == name)
                    .map_or_else(|| whole.to_string(), |(_, value)| value.to_string())
            })
            .into_owned()
    }
}

pub static TEMPLATES: &[QueryTemplate] = &[
    QueryTemplate {
        name: "running",
        description: "Executions that are still running",
        query: "ExecutionStatus = 'Running'",
    },
    QueryTemplate {
        name: "failed-24h",
        description: "Executions that failed in the last 24 hours",
        query: "ExecutionStatus = 'Failed' AND CloseTime > '${TIME:1d}'",
    },
    QueryTemplate {
        name: "timed-out-7d",
        description: "Executions that timed out in the last week",
        query: "ExecutionStatus = 'TimedOut' AND CloseTime > '${TIME:7d}'",
    },
    QueryTemplate {
        name: "long-running",
        description: "Running executions started more than a day ago",
        query: "ExecutionStatus = 'Running' AND StartTime < '${TIME:1d}'",
    },
    QueryTemplate {
        name: "by-type",
        description: "Executions of one workflow type",
        query: "WorkflowType = '${type}'",
    },
    QueryTemplate {
        name: "by-type-failed",
        description: "Failed executions of one workflow type",
        query: "WorkflowType = '${type}' AND ExecutionStatus = 'Failed'",
    },
    QueryTemplate {
        name: "by-queue",
        description: "Executions on one task queue",
        query: "TaskQueue = '${queue}'",
    },
];

/// Look up a template by name, ignoring case.
pub fn find_template(name: &str) -> Option<&'static QueryTemplate> {
    TEMPLATES.iter().find(|t| t.name.eq_ignore_ascii_case(name))
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
