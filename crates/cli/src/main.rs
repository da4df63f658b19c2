// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod cmd_bench;
mod cmd_clear;
mod cmd_optimize;
mod cmd_warmup;

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use prewarm::cli::{Cli, Command};
use prewarm::config::{self, Config};
use prewarm::discovery;
use prewarm::error::ExitCode;
use prewarm::progress::Progress;
use prewarm::services::Services;

/// Environment variable holding the log filter.
const LOG_ENV: &str = "PREWARM_LOG";

fn main() -> std::process::ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version print to stdout and succeed
            let code = if e.use_stderr() { ExitCode::Failure } else { ExitCode::Success };
            let _ = e.print();
            return code.into();
        }
    };

    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        // Library errors already carry their cause in the message
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::Failure.into()
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .try_init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let services = load_services(cli.config.as_deref(), &cwd)?;
    let progress = Progress::new(cli.verbose);

    match &cli.command {
        Command::Warmup => cmd_warmup::run(&services),
        Command::Bench(args) => cmd_bench::run(&services, args, progress),
        Command::Clear => cmd_clear::run(&services),
        Command::Optimize(args) => cmd_optimize::run(&services, args, progress),
    }
}

/// Resolve the config file (explicit or discovered) and wire providers.
fn load_services(explicit: Option<&Path>, cwd: &Path) -> anyhow::Result<Services> {
    let config_path = match explicit {
        Some(path) => Some(config::resolve_path(cwd, path)),
        None => discovery::find_config(cwd),
    };

    let config = match &config_path {
        Some(path) => {
            tracing::debug!("using config {}", path.display());
            config::load(path)?
        }
        None => Config::default(),
    };

    let base = discovery::base_dir(config_path.as_deref(), cwd);
    Ok(Services::system(config, base))
}
