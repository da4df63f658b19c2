// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `prewarm warmup` command implementation.

use prewarm::error::{Error, ExitCode};
use prewarm::fingerprint::WarmupStatus;
use prewarm::services::Services;
use prewarm::warmup::Warmup;

/// Run the `prewarm warmup` command.
pub fn run(services: &Services) -> anyhow::Result<ExitCode> {
    let paths = services.cache_paths();
    let shape = services.artifact_shape();

    let warmup = Warmup {
        compiler: services.compiler.as_ref(),
        exec_cache: services.exec_cache.as_ref(),
        paths: &paths,
        shape: &shape,
        preload_files: &services.config.cache.preload_files,
    };

    let outcome = match warmup.run() {
        Ok(outcome) => outcome,
        Err(e @ Error::Configuration(_)) => return Err(e.into()),
        Err(e) => anyhow::bail!("Container warmup failed: {e}"),
    };

    let cache_file = outcome.cache_file.display();
    match outcome.status {
        WarmupStatus::UpToDate => println!("Container cache already up to date at {cache_file}"),
        WarmupStatus::Compiled => println!("Container cache warmed at {cache_file}"),
    }
    Ok(ExitCode::Success)
}
