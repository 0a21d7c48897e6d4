// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `vq fields` and `vq templates`.

use serde::Serialize;
use vq_core::catalog::{
    find_template, FieldDescriptor, FieldKind, QueryTemplate, FIELDS, TEMPLATES,
};

use super::pad;
use crate::cli::OutputFormat;
use crate::colors;
use crate::error::{Error, Result};

#[derive(Serialize)]
struct FieldJson {
    name: &'static str,
    kind: &'static str,
    description: &'static str,
}

impl From<&FieldDescriptor> for FieldJson {
    fn from(field: &FieldDescriptor) -> Self {
        FieldJson {
            name: field.name,
            kind: kind_name(field.kind),
            description: field.description,
        }
    }
}

#[derive(Serialize)]
struct TemplateJson {
    name: &'static str,
    description: &'static str,
    query: &'static str,
    params: Vec<&'static str>,
}

impl From<&QueryTemplate> for TemplateJson {
    fn from(template: &QueryTemplate) -> Self {
        TemplateJson {
            name: template.name,
            description: template.description,
            query: template.query,
            params: template.params(),
        }
    }
}

pub fn fields(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for line in format_fields(FIELDS) {
                println!("{line}");
            }
        }
        OutputFormat::Json => {
            let output: Vec<FieldJson> = FIELDS.iter().map(FieldJson::from).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

pub fn templates(name: Option<&str>, set: &[String], format: OutputFormat) -> Result<()> {
    if let Some(name) = name {
        return template(name, set, format);
    }
    match format {
        OutputFormat::Text => {
            for (i, template) in TEMPLATES.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                println!("{}", format_template(template));
            }
        }
        OutputFormat::Json => {
            let output: Vec<TemplateJson> = TEMPLATES.iter().map(TemplateJson::from).collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

fn template(name: &str, set: &[String], format: OutputFormat) -> Result<()> {
    let template = find_template(name).ok_or_else(|| Error::UnknownTemplate(name.to_string()))?;
    let values = parse_params(set)?;
    let query = template.fill(&values);
    let missing: Vec<&str> = template
        .params()
        .into_iter()
        .filter(|param| !values.iter().any(|(key, _)| key == param))
        .collect();
    if !missing.is_empty() {
        tracing::warn!(template = template.name, missing = ?missing, "template parameters left unfilled");
    }

    match format {
        OutputFormat::Text => println!("{query}"),
        OutputFormat::Json => {
            let output = serde_json::json!({
                "name": template.name,
                "query": query,
                "missing": missing,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}

/// Split `KEY=VALUE` arguments. Keys must be non-empty.
pub(crate) fn parse_params(set: &[String]) -> Result<Vec<(&str, &str)>> {
    set.iter()
        .map(|arg| match arg.split_once('=') {
            Some((key, value)) if !key.trim().is_empty() => Ok((key.trim(), value)),
            _ => Err(Error::InvalidParam(arg.clone())),
        })
        .collect()
}

pub(crate) fn kind_name(kind: FieldKind) -> &'static str {
    match kind {
        FieldKind::Keyword => "keyword",
        FieldKind::Status => "status",
        FieldKind::Time => "time",
        FieldKind::Duration => "duration",
    }
}

pub(crate) fn format_fields(fields: &[FieldDescriptor]) -> Vec<String> {
    let width = fields.iter().map(|f| f.name.len()).max().unwrap_or(0);
    fields
        .iter()
        .map(|f| {
            format!(
                "{}{}  {:<8}  {}",
                colors::auto(colors::literal, f.name),
                pad(f.name, width),
                kind_name(f.kind),
                f.description
            )
        })
        .collect()
}

pub(crate) fn format_template(template: &QueryTemplate) -> String {
    let mut out = format!("{}  {}\n  {}", template.name, template.description, template.query);
    let params = template.params();
    if !params.is_empty() {
        out.push_str(&format!("\n  params: {}", params.join(", ")));
    }
    out
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
