// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Summary statistics over measured durations.

use serde::{Deserialize, Serialize};

/// Aggregated statistics for one named scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    pub name: String,
    /// Measured (not warmup) runs the statistics were computed from.
    pub runs: usize,
    pub average_ms: f64,
    pub median_ms: f64,
    pub p95_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl Scenario {
    /// Aggregate `durations` (milliseconds, any order).
    ///
    /// Returns `None` for an empty list.
    pub fn from_durations(name: impl Into<String>, durations: &[f64]) -> Option<Self> {
        if durations.is_empty() {
            return None;
        }

        let mut sorted = durations.to_vec();
        sorted.sort_by(f64::total_cmp);

        let n = sorted.len();
        let average_ms = sorted.iter().sum::<f64>() / n as f64;

        Some(Self {
            name: name.into(),
            runs: n,
            average_ms,
            median_ms: median(&sorted),
            p95_ms: sorted[p95_index(n)],
            min_ms: sorted[0],
            max_ms: sorted[n - 1],
        })
    }
}

/// Median of a non-empty sorted slice.
fn median(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2.0
    } else {
        sorted[mid]
    }
}

/// Nearest-rank index of the 95th percentile: `ceil(0.95 * n) - 1`, clamped.
pub fn p95_index(n: usize) -> usize {
    let rank = (n as f64 * 0.95).ceil() as usize;
    rank.saturating_sub(1).min(n.saturating_sub(1))
}

/// Percentage improvement of `optimized` over `baseline` averages.
///
/// Zero when the baseline is not positive.
pub fn improvement(baseline_ms: f64, optimized_ms: f64) -> f64 {
    if baseline_ms <= 0.0 {
        0.0
    } else {
        (baseline_ms - optimized_ms) / baseline_ms * 100.0
    }
}

#[cfg(test)]
#[path = "stats_tests.rs"]
mod tests;
