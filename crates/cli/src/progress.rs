// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Human-facing progress output.
//!
//! Headings always go to stderr; per-run detail only with `--verbose`.
//! Results belong on stdout and never pass through here.

/// Progress writer. Writes to stderr.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    headings: bool,
    verbose: bool,
}

impl Progress {
    pub fn new(verbose: bool) -> Self {
        Self { headings: true, verbose }
    }

    /// A writer that prints nothing.
    pub fn silent() -> Self {
        Self { headings: false, verbose: false }
    }

    /// Print a section heading.
    pub fn heading(&self, title: &str) {
        if self.headings {
            eprintln!("{}", title);
        }
    }

    /// Print an indented detail line (verbose only).
    pub fn detail(&self, msg: &str) {
        if self.verbose {
            eprintln!("  {}", msg);
        }
    }
}
