// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Boot-time preload script.
//!
//! The script lives in the cache directory and, when executed at process
//! boot, compiles every known cache file into the runtime's execution
//! cache. Files that do not exist yet are skipped at boot, so the list can
//! name caches that are built later.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::Result;
use crate::fs_util;

/// Render the preload script for `cache_files` (names relative to the cache directory).
pub fn render(cache_files: &[String]) -> String {
    let mut script = String::from("<?php\n\ndeclare(strict_types=1);\n\n$cacheFiles = [\n");
    for name in cache_files {
        let _ = writeln!(script, "    __DIR__ . '/{}',", escape_single_quoted(name));
    }
    script.push_str(
        "];\n\
         \n\
         if (!function_exists('opcache_compile_file')) {\n    return;\n}\n\
         \n\
         foreach ($cacheFiles as $cacheFile) {\n    \
         if (is_file($cacheFile)) {\n        \
         @opcache_compile_file($cacheFile);\n    \
         }\n}\n",
    );
    script
}

/// Write the preload script to `path`, replacing any previous version.
pub fn write(path: &Path, cache_files: &[String]) -> Result<()> {
    fs_util::write_atomic(path, render(cache_files).as_bytes())?;
    tracing::debug!("wrote preload script {}", path.display());
    Ok(())
}

fn escape_single_quoted(s: &str) -> String {
    s.replace('\\', "\\\\").replace('\'', "\\'")
}

#[cfg(test)]
#[path = "preload_tests.rs"]
mod tests;
