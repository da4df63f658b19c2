// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled artifact metadata.
//!
//! The compiler writes `<artifact>.meta.json` next to the artifact it
//! generates. Reading the sidecar is cheap and never touches the artifact
//! itself.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Suffix appended to the artifact file name to locate its sidecar.
pub const METADATA_SUFFIX: &str = ".meta.json";

/// Metadata describing a compiled artifact.
///
/// Every field is optional in the file; absent counters read as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArtifactMetadata {
    pub fingerprint: Option<String>,
    pub generated_at: Option<String>,
    pub total_bindings: u64,
    pub optimized_bindings: u64,
    pub optimized_classes: u64,
    /// Name of the compiled entry-point type.
    pub entry_point: Option<String>,
    /// Base contracts the entry point extends or implements.
    pub extends: Vec<String>,
}

impl ArtifactMetadata {
    /// Fingerprint, if present and non-empty.
    pub fn fingerprint(&self) -> Option<&str> {
        self.fingerprint.as_deref().filter(|f| !f.is_empty())
    }

    /// Bindings that could not be optimized.
    ///
    /// Saturates at zero if the compiler reports more optimized than total.
    pub fn fallback_bindings(&self) -> u64 {
        self.total_bindings.saturating_sub(self.optimized_bindings)
    }
}

/// Location of the metadata sidecar for `artifact`.
pub fn metadata_path(artifact: &Path) -> PathBuf {
    let mut name = artifact.file_name().map(OsString::from).unwrap_or_default();
    name.push(METADATA_SUFFIX);
    artifact.with_file_name(name)
}

/// Read the metadata sidecar for `artifact`.
///
/// Returns `None` when the sidecar is missing or unreadable.
pub fn read_metadata(artifact: &Path) -> Option<ArtifactMetadata> {
    let path = metadata_path(artifact);
    let content = match std::fs::read_to_string(&path) {
        Ok(c) => c,
        Err(e) => {
            if e.kind() != std::io::ErrorKind::NotFound {
                tracing::debug!("cannot read {}: {}", path.display(), e);
            }
            return None;
        }
    };
    match serde_json::from_str(&content) {
        Ok(meta) => Some(meta),
        Err(e) => {
            tracing::debug!("malformed artifact metadata {}: {}", path.display(), e);
            None
        }
    }
}

#[cfg(test)]
#[path = "artifact_tests.rs"]
mod tests;
