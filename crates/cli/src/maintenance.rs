// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Maintenance subcommands (cache clear/build) run through the entry script.

use std::path::Path;

use crate::error::{Error, Result};
use crate::launcher::Launcher;
use crate::process::ProcessRunner;
use crate::progress::Progress;

/// Run `steps` in order, stopping at the first non-zero exit.
///
/// `describe` turns the failing step into the error context.
pub fn run_steps(
    runner: &dyn ProcessRunner,
    launcher: &Launcher,
    cwd: &Path,
    steps: &[String],
    progress: &Progress,
    describe: impl Fn(&str) -> String,
) -> Result<()> {
    for step in steps {
        progress.heading(&format!("Running {step}..."));
        let result = runner.run(&launcher.argv(&[step]), cwd)?;
        if !result.success() {
            return Err(Error::ProcessFailure {
                context: describe(step),
                output: result.diagnostic().to_string(),
            });
        }
    }
    Ok(())
}

/// Error context for a failed optimize step.
pub fn optimize_failure(step: &str) -> String {
    format!("Optimize failed at step \"{step}\"")
}

/// Error context for a failed optimize --clear step.
pub fn optimize_clear_failure(step: &str) -> String {
    format!("Optimize clear failed at step \"{step}\"")
}

#[cfg(test)]
#[path = "maintenance_tests.rs"]
mod tests;
