// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `prewarm optimize` command implementation.

use prewarm::cli::OptimizeArgs;
use prewarm::error::ExitCode;
use prewarm::maintenance;
use prewarm::progress::Progress;
use prewarm::services::Services;

/// Run the `prewarm optimize` command.
pub fn run(
    services: &Services,
    args: &OptimizeArgs,
    progress: Progress,
) -> anyhow::Result<ExitCode> {
    let launcher = services.launcher(None, args.entry.as_deref());
    let maintenance_config = &services.config.maintenance;

    if args.clear {
        maintenance::run_steps(
            services.runner.as_ref(),
            &launcher,
            &services.base,
            &maintenance_config.clear,
            &progress,
            maintenance::optimize_clear_failure,
        )?;
        println!("Caches cleared successfully.");
    } else {
        maintenance::run_steps(
            services.runner.as_ref(),
            &launcher,
            &services.base,
            &maintenance_config.build,
            &progress,
            maintenance::optimize_failure,
        )?;
        println!("Caches optimized successfully.");
    }
    Ok(ExitCode::Success)
}
