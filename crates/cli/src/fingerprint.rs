// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rebuild-or-skip decision for the compiled artifact.
//!
//! The artifact is reused only when the compiler can prove freshness: a
//! non-empty requested fingerprint equal to the one recorded for the
//! existing artifact. Anything else rebuilds.

use std::path::Path;

use serde::Serialize;

use crate::artifact;
use crate::compiler::Compiler;
use crate::error::Result;

/// Outcome of the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WarmupStatus {
    /// The compiler was invoked.
    Compiled,
    /// The existing artifact matched and was kept.
    UpToDate,
}

impl WarmupStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            WarmupStatus::Compiled => "compiled",
            WarmupStatus::UpToDate => "up_to_date",
        }
    }
}

/// Rebuild decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Skip,
    Rebuild,
}

/// Decide whether the artifact must be rebuilt.
pub fn decide(requested: Option<&str>, existing: Option<&str>) -> Decision {
    match (requested, existing) {
        (Some(requested), Some(existing))
            if !requested.is_empty()
                && !existing.is_empty()
                && constant_time_eq(requested.as_bytes(), existing.as_bytes()) =>
        {
            Decision::Skip
        }
        _ => Decision::Rebuild,
    }
}

/// Compare without early exit on the first differing byte.
///
/// Length is not secret: unequal lengths return immediately.
pub fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut diff: u8 = 0;
    for (x, y) in a.iter().zip(b) {
        diff |= x ^ y;
    }
    diff == 0
}

/// Apply the gate to `target`, compiling through `compiler` when stale.
pub fn ensure_fresh(
    compiler: &dyn Compiler,
    target: &Path,
    requested: Option<&str>,
) -> Result<WarmupStatus> {
    // A sidecar without its artifact describes nothing
    let existing = target.is_file().then(|| artifact::read_metadata(target)).flatten();
    let existing_fingerprint = existing.as_ref().and_then(|m| m.fingerprint());

    match decide(requested, existing_fingerprint) {
        Decision::Skip => {
            tracing::debug!("artifact {} is up to date", target.display());
            Ok(WarmupStatus::UpToDate)
        }
        Decision::Rebuild => {
            tracing::debug!(
                "rebuilding {} (requested {:?}, existing {:?})",
                target.display(),
                requested,
                existing_fingerprint
            );
            compiler.compile(target)?;
            Ok(WarmupStatus::Compiled)
        }
    }
}

#[cfg(test)]
#[path = "fingerprint_tests.rs"]
mod tests;
