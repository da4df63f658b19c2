// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Plain-text summary table.

use std::fmt::Write;

use super::stats::Scenario;

const HEADERS: [&str; 7] = [
    "Scenario",
    "Runs",
    "Avg (ms)",
    "Median (ms)",
    "P95 (ms)",
    "Min (ms)",
    "Max (ms)",
];

/// Render `scenarios` as an aligned table with two decimals per statistic.
pub fn render(scenarios: &[Scenario]) -> String {
    let rows: Vec<[String; 7]> = scenarios
        .iter()
        .map(|s| {
            [
                s.name.clone(),
                s.runs.to_string(),
                format!("{:.2}", s.average_ms),
                format!("{:.2}", s.median_ms),
                format!("{:.2}", s.p95_ms),
                format!("{:.2}", s.min_ms),
                format!("{:.2}", s.max_ms),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let mut out = String::new();
    write_row(&mut out, &HEADERS, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    write_row(&mut out, &rule, &widths);
    for row in &rows {
        write_row(&mut out, row, &widths);
    }
    out
}

/// Name left-aligned, numbers right-aligned.
fn write_row<S: AsRef<str>>(out: &mut String, cells: &[S], widths: &[usize; 7]) {
    let mut line = String::new();
    for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let cell = cell.as_ref();
        // Writing to a String cannot fail.
        let _ = if i == 0 {
            write!(line, "{cell:<width$}")
        } else {
            write!(line, "{cell:>width$}")
        };
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
