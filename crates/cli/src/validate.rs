// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Structural validation of the compiled artifact.

use std::path::Path;

use crate::artifact::{self, ArtifactMetadata};
use crate::config::CompilerConfig;
use crate::error::{Error, Result};

/// Expected shape of a usable compiled artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactShape {
    /// Entry-point type the artifact must declare.
    pub entry_point: String,
    /// Base contract the entry point must extend.
    pub base_contract: String,
}

impl ArtifactShape {
    pub fn from_config(config: &CompilerConfig) -> Self {
        Self {
            entry_point: config.entry_point.clone(),
            base_contract: config.base_contract.clone(),
        }
    }

    /// Confirm the artifact at `path` exists and has this shape.
    pub fn validate(&self, path: &Path) -> Result<ArtifactMetadata> {
        if !path.is_file() {
            return Err(Error::ArtifactMissing { path: path.to_path_buf() });
        }

        let invalid = |reason: String| Error::ArtifactInvalid { path: path.to_path_buf(), reason };

        let Some(meta) = artifact::read_metadata(path) else {
            return Err(invalid(format!(
                "metadata {} is missing or unreadable",
                artifact::metadata_path(path).display()
            )));
        };

        match meta.entry_point.as_deref() {
            Some(entry) if entry == self.entry_point => {}
            Some(other) => {
                return Err(invalid(format!(
                    "entry point [{other}] found, expected [{}]",
                    self.entry_point
                )));
            }
            None => {
                return Err(invalid(format!(
                    "compiled entry point [{}] is missing",
                    self.entry_point
                )));
            }
        }

        if !meta.extends.iter().any(|base| *base == self.base_contract) {
            return Err(invalid(format!(
                "entry point [{}] does not extend [{}]",
                self.entry_point, self.base_contract
            )));
        }

        Ok(meta)
    }
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
