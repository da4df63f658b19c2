// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Startup latency benchmarking.
//!
//! A scenario runs the target command through the [`Launcher`] a number of
//! warmup times (discarded) and then a number of measured times. Any non-zero
//! exit aborts the scenario; failed runs are never retried.

pub mod export;
pub mod stats;
pub mod table;
pub mod threshold;

use std::path::Path;

use crate::config::MaintenanceConfig;
use crate::error::{Error, Result};
use crate::launcher::Launcher;
use crate::maintenance;
use crate::process::ProcessRunner;
use crate::progress::Progress;

pub use stats::Scenario;

/// Scenario name in single-scenario mode.
pub const CURRENT: &str = "current";
/// Scenario measured after the cache was cleared.
pub const UNCACHED: &str = "uncached";
/// Scenario measured after the cache was rebuilt.
pub const CACHED: &str = "cached";

/// What to run and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchPlan {
    /// Arguments passed after the entry script.
    pub command: Vec<String>,
    pub runs: usize,
    pub warmups: usize,
}

impl BenchPlan {
    /// Build a plan; `runs` is clamped to at least one.
    pub fn new(command: Vec<String>, runs: usize, warmups: usize) -> Result<Self> {
        if command.is_empty() {
            return Err(Error::config(
                "Target command is empty. Provide a valid command with --command.",
            ));
        }
        Ok(Self { command, runs: runs.max(1), warmups })
    }
}

/// Scenarios produced by one benchmark invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchOutcome {
    pub scenarios: Vec<Scenario>,
    /// Average improvement of `cached` over `uncached`, in comparison mode.
    pub improvement: Option<f64>,
}

/// Runs scenarios through a [`ProcessRunner`].
pub struct Harness<'a> {
    runner: &'a dyn ProcessRunner,
    launcher: &'a Launcher,
    cwd: &'a Path,
    progress: Progress,
}

impl<'a> Harness<'a> {
    pub fn new(
        runner: &'a dyn ProcessRunner,
        launcher: &'a Launcher,
        cwd: &'a Path,
        progress: Progress,
    ) -> Self {
        Self { runner, launcher, cwd, progress }
    }

    /// Benchmark the command as-is, producing the `current` scenario.
    pub fn single(&self, plan: &BenchPlan) -> Result<BenchOutcome> {
        let scenario = self.run_scenario(CURRENT, plan)?;
        Ok(BenchOutcome { scenarios: vec![scenario], improvement: None })
    }

    /// Benchmark with caches cleared, then with caches rebuilt.
    pub fn compare_cache(
        &self,
        plan: &BenchPlan,
        maintenance: &MaintenanceConfig,
    ) -> Result<BenchOutcome> {
        self.progress.heading("Scenario: uncached");
        self.run_maintenance(&maintenance.clear)?;
        let uncached = self.run_scenario(UNCACHED, plan)?;

        self.progress.heading("Scenario: cached");
        self.run_maintenance(&maintenance.build)?;
        let cached = self.run_scenario(CACHED, plan)?;

        let improvement = stats::improvement(uncached.average_ms, cached.average_ms);
        Ok(BenchOutcome { scenarios: vec![uncached, cached], improvement: Some(improvement) })
    }

    /// Run warmups then measured runs and aggregate the measured durations.
    pub fn run_scenario(&self, name: &str, plan: &BenchPlan) -> Result<Scenario> {
        let argv = self.launcher.argv(&plan.command);
        let runs = plan.runs.max(1);

        for i in 1..=plan.warmups {
            let result = self.runner.run(&argv, self.cwd)?;
            if !result.success() {
                return Err(Error::ProcessFailure {
                    context: format!("Warmup run failed for scenario \"{name}\""),
                    output: result.diagnostic().to_string(),
                });
            }
            self.progress.detail(&format!("warmup {i}: {:.2}ms", result.duration_ms));
        }

        let mut durations = Vec::with_capacity(runs);
        for i in 1..=runs {
            let result = self.runner.run(&argv, self.cwd)?;
            if !result.success() {
                return Err(Error::ProcessFailure {
                    context: format!("Run {i} failed for scenario \"{name}\""),
                    output: result.diagnostic().to_string(),
                });
            }
            self.progress.detail(&format!("run {i}: {:.2}ms", result.duration_ms));
            durations.push(result.duration_ms);
        }

        tracing::debug!("scenario {} measured {} run(s)", name, durations.len());
        Scenario::from_durations(name, &durations)
            .ok_or_else(|| Error::config(format!("Scenario \"{name}\" produced no runs.")))
    }

    fn run_maintenance(&self, steps: &[String]) -> Result<()> {
        maintenance::run_steps(
            self.runner,
            self.launcher,
            self.cwd,
            steps,
            &self.progress,
            |step| format!("Failed while running \"{step}\""),
        )
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
