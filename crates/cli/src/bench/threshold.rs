// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pass/fail gating on benchmark results.

use super::stats::{Scenario, improvement};
use super::{CACHED, UNCACHED};
use crate::error::{Error, Result};

/// Operator-supplied limits. Unset limits are not checked.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Thresholds {
    /// Fail if any scenario's average exceeds this (ms).
    pub max_average_ms: Option<f64>,
    /// Fail if any scenario's p95 exceeds this (ms).
    pub max_p95_ms: Option<f64>,
    /// Require at least this % improvement in cache-comparison mode.
    pub min_improvement: Option<f64>,
}

impl Thresholds {
    /// Parse limits from raw option strings.
    pub fn parse(
        max_average_ms: Option<&str>,
        max_p95_ms: Option<&str>,
        min_improvement: Option<&str>,
    ) -> Result<Self> {
        Ok(Self {
            max_average_ms: parse_optional_float(max_average_ms)?,
            max_p95_ms: parse_optional_float(max_p95_ms)?,
            min_improvement: parse_optional_float(min_improvement)?,
        })
    }

    /// Reject limits that cannot apply to the chosen mode.
    pub fn check_mode(&self, compare_cache: bool) -> Result<()> {
        if self.min_improvement.is_some() && !compare_cache {
            return Err(Error::config(
                "Minimum improvement threshold requires --compare-cache mode.",
            ));
        }
        Ok(())
    }

    /// Fail on the first limit that `scenarios` violate.
    ///
    /// A value equal to a maximum passes.
    pub fn enforce(&self, scenarios: &[Scenario], compare_cache: bool) -> Result<()> {
        if let Some(limit) = self.max_average_ms
            && let Some(s) = scenarios.iter().find(|s| s.average_ms > limit)
        {
            return Err(Error::Threshold(format!(
                "max average {limit:.2}ms exceeded by \"{}\" at {:.2}ms.",
                s.name, s.average_ms
            )));
        }

        if let Some(limit) = self.max_p95_ms
            && let Some(s) = scenarios.iter().find(|s| s.p95_ms > limit)
        {
            return Err(Error::Threshold(format!(
                "max p95 {limit:.2}ms exceeded by \"{}\" at {:.2}ms.",
                s.name, s.p95_ms
            )));
        }

        if let Some(minimum) = self.min_improvement {
            self.check_mode(compare_cache)?;
            let uncached = find_scenario(scenarios, UNCACHED)?;
            let cached = find_scenario(scenarios, CACHED)?;
            let got = improvement(uncached.average_ms, cached.average_ms);
            if got < minimum {
                return Err(Error::Threshold(format!(
                    "minimum improvement {minimum:.2}% not met (got {got:.2}%)."
                )));
            }
        }

        Ok(())
    }
}

/// Parse an optional numeric option; blank means unset.
pub fn parse_optional_float(value: Option<&str>) -> Result<Option<f64>> {
    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return Ok(None);
    };
    match raw.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(Error::config("Benchmark threshold options must be numeric.")),
    }
}

fn find_scenario<'a>(scenarios: &'a [Scenario], name: &str) -> Result<&'a Scenario> {
    scenarios
        .iter()
        .find(|s| s.name == name)
        .ok_or_else(|| {
            Error::config(format!("Required benchmark scenario [{name}] was not produced."))
        })
}

#[cfg(test)]
#[path = "threshold_tests.rs"]
mod tests;
