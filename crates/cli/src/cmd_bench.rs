// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `prewarm bench` command implementation.
//!
//! Every option is validated before the first process is spawned, so a
//! typo in a threshold or export path never costs a full benchmark run.

use prewarm::bench::export::{BenchReport, ExportFormat};
use prewarm::bench::threshold::Thresholds;
use prewarm::bench::{BenchPlan, Harness, table};
use prewarm::cli::BenchArgs;
use prewarm::error::ExitCode;
use prewarm::launcher::normalize_command;
use prewarm::progress::Progress;
use prewarm::services::Services;

/// Run the `prewarm bench` command.
pub fn run(services: &Services, args: &BenchArgs, progress: Progress) -> anyhow::Result<ExitCode> {
    let thresholds = Thresholds::parse(
        args.max_average_ms.as_deref(),
        args.max_p95_ms.as_deref(),
        args.min_improvement.as_deref(),
    )?;
    thresholds.check_mode(args.compare_cache)?;

    let output = args.output.as_ref().filter(|p| !p.as_os_str().is_empty());
    if let Some(path) = output {
        ExportFormat::from_path(path)?;
    }

    let bench = &services.config.bench;
    let launcher = services.launcher(args.interpreter.as_deref(), args.entry.as_deref());
    let raw_command = args.command.as_deref().unwrap_or(&bench.command);
    let plan = BenchPlan::new(
        normalize_command(raw_command, &launcher),
        args.runs.unwrap_or(bench.runs),
        args.warmups.unwrap_or(bench.warmups),
    )?;

    progress.heading(&format!(
        "Benchmarking \"{}\" ({} run(s), {} warmup(s))",
        plan.command.join(" "),
        plan.runs,
        plan.warmups
    ));
    progress.heading("Measured time includes process startup and application boot.");

    let harness = Harness::new(services.runner.as_ref(), &launcher, &services.base, progress);
    let outcome = if args.compare_cache {
        harness.compare_cache(&plan, &services.config.maintenance)?
    } else {
        harness.single(&plan)?
    };

    print!("{}", table::render(&outcome.scenarios));
    match outcome.improvement {
        Some(improvement) => println!("Average startup improvement with caches: {improvement:.2}%"),
        None => println!("Startup benchmark complete."),
    }

    // Export first: a run that misses a threshold still leaves its report
    if let Some(path) = output {
        let report = BenchReport::new(
            &plan.command,
            plan.runs,
            plan.warmups,
            args.compare_cache,
            outcome.scenarios.clone(),
        );
        let written = report.export(path, &services.base)?;
        println!("Benchmark results exported to {}", written.display());
    }

    thresholds.enforce(&outcome.scenarios, args.compare_cache)?;
    Ok(ExitCode::Success)
}
