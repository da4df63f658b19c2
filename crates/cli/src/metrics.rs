// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Warmup metrics side-file.
//!
//! Each warmup replaces `container-metrics.json` in the cache directory
//! with a record of what it did. The record is instrumentation only: a
//! failure to write it never fails the warmup.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::artifact::ArtifactMetadata;
use crate::error::{Error, Result};
use crate::fingerprint::WarmupStatus;
use crate::fs_util;

/// Result of one warmup, as persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WarmupOutcome {
    pub generated_at: DateTime<Utc>,
    pub status: WarmupStatus,
    pub cache_file: PathBuf,
    pub preload_file: PathBuf,
    pub fingerprint: Option<String>,
    pub total_bindings: u64,
    pub optimized_bindings: u64,
    pub optimized_classes: u64,
    pub fallback_bindings: u64,
    #[serde(serialize_with = "round4")]
    pub compile_hit_rate: f64,
    #[serde(serialize_with = "round4")]
    pub fallback_rate: f64,
    #[serde(serialize_with = "round4")]
    pub warmup_duration_ms: f64,
}

impl WarmupOutcome {
    /// Build the outcome from whatever metadata the compiler exposed.
    ///
    /// The embedded fingerprint wins over the requested one.
    pub fn new(
        status: WarmupStatus,
        cache_file: &Path,
        preload_file: &Path,
        meta: &ArtifactMetadata,
        requested_fingerprint: Option<&str>,
        warmup_duration_ms: f64,
    ) -> Self {
        let fallback_bindings = meta.fallback_bindings();
        Self {
            generated_at: Utc::now(),
            status,
            cache_file: cache_file.to_path_buf(),
            preload_file: preload_file.to_path_buf(),
            fingerprint: meta.fingerprint().or(requested_fingerprint).map(String::from),
            total_bindings: meta.total_bindings,
            optimized_bindings: meta.optimized_bindings,
            optimized_classes: meta.optimized_classes,
            fallback_bindings,
            compile_hit_rate: rate(meta.optimized_bindings, meta.total_bindings),
            fallback_rate: rate(fallback_bindings, meta.total_bindings),
            warmup_duration_ms,
        }
    }

    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut encoded = serde_json::to_string_pretty(self).map_err(|source| Error::Encoding {
            what: "warmup metrics",
            source,
        })?;
        encoded.push('\n');
        Ok(encoded)
    }

    /// Replace the metrics file at `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs_util::write_atomic(path, self.to_json()?.as_bytes())
    }
}

/// `part / total` as a percentage; zero when `total` is zero.
pub fn rate(part: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        part as f64 / total as f64 * 100.0
    }
}

/// Persist `outcome`, logging instead of failing.
///
/// Returns whether the file was written.
pub fn emit(outcome: &WarmupOutcome, path: &Path) -> bool {
    match outcome.save(path) {
        Ok(()) => {
            tracing::debug!("wrote warmup metrics {}", path.display());
            true
        }
        Err(e) => {
            tracing::warn!("warmup metrics not written: {}", e);
            false
        }
    }
}

fn round4<S: serde::Serializer>(
    value: &f64,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_f64((value * 10_000.0).round() / 10_000.0)
}

#[cfg(test)]
#[path = "metrics_tests.rs"]
mod tests;
