// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Container cache removal.

use std::path::PathBuf;

use crate::artifact;
use crate::config::CachePaths;
use crate::error::Result;
use crate::exec_cache::ExecCache;
use crate::fs_util;

/// Remove the artifact, its metadata sidecar, the preload script and the
/// metrics file.
///
/// Each existing file is dropped from the execution cache first
/// (best-effort). Returns the files that were actually removed; stale
/// lock files are removed as well but not reported.
pub fn clear(paths: &CachePaths, exec_cache: &dyn ExecCache) -> Result<Vec<PathBuf>> {
    let targets = [
        paths.artifact.clone(),
        artifact::metadata_path(&paths.artifact),
        paths.preload.clone(),
        paths.metrics.clone(),
    ];

    let mut removed = Vec::new();
    for path in targets {
        if !path.is_file() {
            continue;
        }
        if let Err(e) = exec_cache.invalidate(&path) {
            tracing::debug!("exec cache invalidate skipped: {}", e);
        }
        if fs_util::remove_if_exists(&path)? {
            tracing::debug!("removed {}", path.display());
            removed.push(path);
        }
    }

    // Interrupted writes can leave their lock files behind
    for path in [&paths.preload, &paths.metrics] {
        let lock = fs_util::lock_path(path);
        if fs_util::remove_if_exists(&lock)? {
            tracing::debug!("removed stale {}", lock.display());
        }
    }
    Ok(removed)
}

#[cfg(test)]
#[path = "clear_tests.rs"]
mod tests;
