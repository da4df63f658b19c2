// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Benchmark report export (JSON or CSV, chosen by file extension).

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::stats::Scenario;
use crate::config::resolve_path;
use crate::error::{Error, Result};
use crate::fs_util;

const CSV_HEADER: [&str; 7] = [
    "scenario",
    "runs",
    "average_ms",
    "median_ms",
    "p95_ms",
    "min_ms",
    "max_ms",
];

/// Export file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Pick the format from the file extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path.extension().and_then(|e| e.to_str()).map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(Self::Json),
            Some("csv") => Ok(Self::Csv),
            _ => Err(Error::config(
                "Unsupported output format. Use a .json or .csv file extension.",
            )),
        }
    }
}

/// Everything written to a JSON export.
#[derive(Debug, Clone, Serialize)]
pub struct BenchReport {
    pub generated_at: DateTime<Utc>,
    /// Target command as the user would type it after the entry script.
    pub command: String,
    pub runs: usize,
    pub warmups: usize,
    pub compare_cache: bool,
    pub scenarios: Vec<Scenario>,
}

impl BenchReport {
    pub fn new(
        command: &[String],
        runs: usize,
        warmups: usize,
        compare_cache: bool,
        scenarios: Vec<Scenario>,
    ) -> Self {
        Self {
            generated_at: Utc::now(),
            command: command.join(" "),
            runs,
            warmups,
            compare_cache,
            scenarios,
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut encoded = serde_json::to_string_pretty(self).map_err(|source| Error::Encoding {
            what: "benchmark report",
            source,
        })?;
        encoded.push('\n');
        Ok(encoded)
    }

    /// Header plus one row per scenario; numbers with six decimals.
    pub fn to_csv(&self) -> String {
        let mut out = String::new();
        push_csv_row(&mut out, CSV_HEADER.iter().map(|h| h.to_string()));
        for s in &self.scenarios {
            push_csv_row(
                &mut out,
                [
                    s.name.clone(),
                    s.runs.to_string(),
                    format!("{:.6}", s.average_ms),
                    format!("{:.6}", s.median_ms),
                    format!("{:.6}", s.p95_ms),
                    format!("{:.6}", s.min_ms),
                    format!("{:.6}", s.max_ms),
                ],
            );
        }
        out
    }

    /// Write the report to `output` (relative to `base`), returning the
    /// resolved path.
    pub fn export(&self, output: &Path, base: &Path) -> Result<PathBuf> {
        let path = resolve_path(base, output);
        let contents = match ExportFormat::from_path(&path)? {
            ExportFormat::Json => self.to_json()?,
            ExportFormat::Csv => self.to_csv(),
        };
        fs_util::write_atomic(&path, contents.as_bytes())?;
        tracing::debug!("exported benchmark report {}", path.display());
        Ok(path)
    }
}

fn push_csv_row(out: &mut String, fields: impl IntoIterator<Item = String>) {
    for (i, field) in fields.into_iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&csv_field(&field));
    }
    out.push('\n');
}

/// Quote a field containing a delimiter, quote, backslash or whitespace.
fn csv_field(field: &str) -> String {
    let needs_quotes = field.chars().any(|c| matches!(c, ',' | '"' | '\\') || c.is_whitespace());
    if needs_quotes {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

#[cfg(test)]
#[path = "export_tests.rs"]
mod tests;
