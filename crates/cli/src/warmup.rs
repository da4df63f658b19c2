// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Container warmup.
//!
//! Order of operations:
//! 1. fingerprint gate (compile only when stale)
//! 2. structural validation of the artifact
//! 3. execution-cache refresh of the artifact (best-effort)
//! 4. preload script regeneration
//! 5. metrics emission (best-effort)

use std::time::Instant;

use crate::artifact;
use crate::compiler::Compiler;
use crate::config::CachePaths;
use crate::error::{Error, Result};
use crate::exec_cache::{self, ExecCache};
use crate::fingerprint;
use crate::metrics::{self, WarmupOutcome};
use crate::preload;
use crate::validate::ArtifactShape;

/// Warms the compiled container cache.
pub struct Warmup<'a> {
    pub compiler: &'a dyn Compiler,
    pub exec_cache: &'a dyn ExecCache,
    pub paths: &'a CachePaths,
    pub shape: &'a ArtifactShape,
    /// Cache files primed by the preload script.
    pub preload_files: &'a [String],
}

impl Warmup<'_> {
    /// Run the warmup.
    ///
    /// Fails when the artifact cannot be built or validated. Metrics are
    /// written when possible; their absence is not a failure.
    pub fn run(&self) -> Result<WarmupOutcome> {
        if !self.compiler.can_compile() {
            return Err(Error::config(
                "Current container implementation does not support compilation.",
            ));
        }

        let start = Instant::now();
        let requested = self.compiler.fingerprint();
        let target = &self.paths.artifact;

        let status = fingerprint::ensure_fresh(self.compiler, target, requested.as_deref())?;
        self.shape.validate(target)?;
        exec_cache::refresh(self.exec_cache, target);

        preload::write(&self.paths.preload, self.preload_files)?;
        exec_cache::prime(self.exec_cache, &self.paths.preload);

        // Re-read: a skipped build still reports the artifact's own counters
        let meta = artifact::read_metadata(target).unwrap_or_default();
        let duration_ms = start.elapsed().as_secs_f64() * 1000.0;

        let outcome = WarmupOutcome::new(
            status,
            target,
            &self.paths.preload,
            &meta,
            requested.as_deref(),
            duration_ms,
        );
        metrics::emit(&outcome, &self.paths.metrics);

        tracing::info!(
            "warmup {} in {:.2}ms ({}/{} bindings optimized)",
            outcome.status.as_str(),
            outcome.warmup_duration_ms,
            outcome.optimized_bindings,
            outcome.total_bindings
        );
        Ok(outcome)
    }
}

#[cfg(test)]
#[path = "warmup_tests.rs"]
mod tests;
