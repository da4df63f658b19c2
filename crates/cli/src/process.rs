// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Child process execution with timing.
//!
//! Processes run one at a time and block the caller until exit. There is
//! no timeout: a hung child hangs the caller.

use std::path::Path;
use std::process::{Command, Stdio};
use std::time::Instant;

use crate::error::{Error, Result};

/// Outcome of a single child process.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
    /// Wall-clock time from spawn to exit, in milliseconds.
    pub duration_ms: f64,
}

impl ProcessResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// Captured output for error messages: stderr, or stdout when stderr is blank.
    pub fn diagnostic(&self) -> &str {
        let stderr = self.stderr.trim();
        if stderr.is_empty() {
            self.stdout.trim()
        } else {
            stderr
        }
    }
}

/// Runs argument vectors as child processes.
pub trait ProcessRunner {
    /// Run `argv` in `cwd`, capturing stdout and stderr.
    ///
    /// Fails only when the process cannot be started; a non-zero exit is
    /// reported through [`ProcessResult::exit_code`].
    fn run(&self, argv: &[String], cwd: &Path) -> Result<ProcessResult>;
}

/// [`ProcessRunner`] backed by `std::process`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> Result<ProcessResult> {
        let Some((program, args)) = argv.split_first() else {
            return Err(Error::Spawn {
                program: String::new(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidInput, "empty command"),
            });
        };

        tracing::debug!("spawning {:?} in {}", argv, cwd.display());

        let start = Instant::now();
        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| Error::Spawn { program: program.clone(), source })?;
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        Ok(ProcessResult {
            // Killed by a signal: no exit code
            exit_code: output.status.code().unwrap_or(1),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            duration_ms,
        })
    }
}

/// Replace every `placeholder` in `template` with `value`.
pub fn substitute(template: &[String], placeholder: &str, value: &str) -> Vec<String> {
    template.iter().map(|arg| arg.replace(placeholder, value)).collect()
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
