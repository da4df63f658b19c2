// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file discovery.
//!
//! Walks from the current directory up to the git root looking for prewarm.toml.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE;

/// Find prewarm.toml starting from `start_dir` and walking up to git root.
pub fn find_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE);
        if config_path.is_file() {
            return Some(config_path);
        }

        // Stop at git root
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Directory commands resolve relative paths against.
///
/// The directory holding the config file when one was found, otherwise `cwd`.
pub fn base_dir(config_path: Option<&Path>, cwd: &Path) -> PathBuf {
    config_path
        .and_then(Path::parent)
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| cwd.to_path_buf())
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
