// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Warm the compiled container cache and measure startup latency
#[derive(Parser)]
#[command(name = "prewarm")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "PREWARM_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile the container cache if stale, validate it and write metrics
    Warmup,
    /// Benchmark process startup latency
    Bench(BenchArgs),
    /// Remove the compiled container cache
    Clear,
    /// Run the cache build (or clear) maintenance subcommands
    Optimize(OptimizeArgs),
}

#[derive(clap::Args)]
pub struct BenchArgs {
    /// Measured runs per scenario [default: 20]
    #[arg(long, value_name = "N")]
    pub runs: Option<usize>,

    /// Discarded warmup runs per scenario [default: 3]
    #[arg(long, value_name = "N")]
    pub warmups: Option<usize>,

    /// Command to benchmark, passed to the entry script [default: "list --raw"]
    #[arg(long, value_name = "CMD")]
    pub command: Option<String>,

    /// Entry script, relative to the project directory
    #[arg(long, value_name = "PATH")]
    pub entry: Option<String>,

    /// Interpreter used to run the entry script
    #[arg(long, value_name = "BIN")]
    pub interpreter: Option<String>,

    /// Compare startup with caches cleared against caches built
    #[arg(long)]
    pub compare_cache: bool,

    /// Fail unless caches improve average startup by at least PCT percent
    #[arg(long, value_name = "PCT")]
    pub min_improvement: Option<String>,

    /// Fail if any scenario's average exceeds MS milliseconds
    #[arg(long = "max-average-ms", value_name = "MS")]
    pub max_average_ms: Option<String>,

    /// Fail if any scenario's p95 exceeds MS milliseconds
    #[arg(long = "max-p95-ms", value_name = "MS")]
    pub max_p95_ms: Option<String>,

    /// Write results to a .json or .csv file
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

#[derive(clap::Args)]
pub struct OptimizeArgs {
    /// Run the clear subcommands instead of the build subcommands
    #[arg(long)]
    pub clear: bool,

    /// Entry script, relative to the project directory
    #[arg(long, value_name = "PATH")]
    pub entry: Option<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
