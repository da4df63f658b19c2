// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `prewarm clear` command implementation.

use prewarm::clear;
use prewarm::error::ExitCode;
use prewarm::services::Services;

/// Run the `prewarm clear` command.
pub fn run(services: &Services) -> anyhow::Result<ExitCode> {
    let paths = services.cache_paths();
    let removed = clear::clear(&paths, services.exec_cache.as_ref())?;
    tracing::debug!("removed {} cache file(s)", removed.len());
    println!("Container cache cleared at {}", paths.artifact.display());
    Ok(ExitCode::Success)
}
