// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing for `prewarm.toml`.
//!
//! A missing file is not an error: every section has defaults matching
//! the conventional cache layout.

pub mod defaults;

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};

/// Supported config file version.
pub const CONFIG_VERSION: i64 = 1;

/// Config file name searched for by discovery.
pub const CONFIG_FILE: &str = "prewarm.toml";

/// Root configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config format version.
    pub version: i64,

    #[serde(default)]
    pub cache: CacheConfig,

    #[serde(default)]
    pub compiler: CompilerConfig,

    #[serde(default)]
    pub exec_cache: ExecCacheConfig,

    #[serde(default)]
    pub bench: BenchConfig,

    #[serde(default)]
    pub maintenance: MaintenanceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            cache: CacheConfig::default(),
            compiler: CompilerConfig::default(),
            exec_cache: ExecCacheConfig::default(),
            bench: BenchConfig::default(),
            maintenance: MaintenanceConfig::default(),
        }
    }
}

/// Cache directory layout.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Cache directory, relative to the base directory unless absolute.
    pub dir: PathBuf,

    /// Compiled artifact file name inside `dir`.
    pub artifact: String,

    /// Preload script file name inside `dir`.
    pub preload: String,

    /// Warmup metrics file name inside `dir`.
    pub metrics: String,

    /// Cache files the preload script primes.
    pub preload_files: Vec<String>,
}

impl Default for CacheConfig {
    fn default() -> Self {
        use defaults::cache;
        Self {
            dir: PathBuf::from(cache::DIR),
            artifact: cache::ARTIFACT.to_string(),
            preload: cache::PRELOAD.to_string(),
            metrics: cache::METRICS.to_string(),
            preload_files: cache::PRELOAD_FILES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Resolved cache file locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CachePaths {
    pub dir: PathBuf,
    pub artifact: PathBuf,
    pub preload: PathBuf,
    pub metrics: PathBuf,
}

impl CacheConfig {
    /// Resolve cache file locations against the base directory.
    pub fn paths(&self, base: &Path) -> CachePaths {
        let dir = resolve_path(base, &self.dir);
        CachePaths {
            artifact: dir.join(&self.artifact),
            preload: dir.join(&self.preload),
            metrics: dir.join(&self.metrics),
            dir,
        }
    }
}

/// External compiler invocation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CompilerConfig {
    /// Compile command argv; `{target}` is replaced with the artifact path.
    pub compile: Option<Vec<String>>,

    /// Fingerprint command argv; trimmed stdout is the fingerprint.
    pub fingerprint: Option<Vec<String>>,

    /// Entry-point type the compiled artifact must declare.
    pub entry_point: String,

    /// Base contract the entry point must extend.
    pub base_contract: String,
}

impl Default for CompilerConfig {
    fn default() -> Self {
        Self {
            compile: None,
            fingerprint: None,
            entry_point: defaults::compiler::ENTRY_POINT.to_string(),
            base_contract: defaults::compiler::BASE_CONTRACT.to_string(),
        }
    }
}

/// Optional execution-cache hooks. `{path}` is replaced with the file path.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ExecCacheConfig {
    pub invalidate: Option<Vec<String>>,
    pub compile: Option<Vec<String>>,
}

impl ExecCacheConfig {
    pub fn is_configured(&self) -> bool {
        self.invalidate.is_some() || self.compile.is_some()
    }
}

/// Benchmark defaults, overridable from the command line.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BenchConfig {
    pub interpreter: String,
    pub entry: String,
    pub command: String,
    pub runs: usize,
    pub warmups: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        use defaults::bench;
        Self {
            interpreter: bench::INTERPRETER.to_string(),
            entry: bench::ENTRY.to_string(),
            command: bench::COMMAND.to_string(),
            runs: bench::RUNS,
            warmups: bench::WARMUPS,
        }
    }
}

/// Maintenance subcommands run through the entry script.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct MaintenanceConfig {
    pub clear: Vec<String>,
    pub build: Vec<String>,
}

impl Default for MaintenanceConfig {
    fn default() -> Self {
        use defaults::maintenance;
        Self {
            clear: maintenance::CLEAR.iter().map(|s| s.to_string()).collect(),
            build: maintenance::BUILD.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Join `path` to `base` unless it is already absolute.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Load and validate a config file.
pub fn load(path: &Path) -> Result<Config> {
    let content =
        std::fs::read_to_string(path).map_err(|e| Error::io("failed to read config", path, e))?;
    parse(&content, path)
}

/// Parse config content; `path` is used for error messages only.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let config: Config = toml::from_str(content)
        .map_err(|e| Error::config(format!("invalid config {}: {}", path.display(), e)))?;

    if config.version != CONFIG_VERSION {
        return Err(Error::config(format!(
            "unsupported config version {} in {} (expected {})",
            config.version,
            path.display(),
            CONFIG_VERSION
        )));
    }

    for (name, argv) in [
        ("compiler.compile", &config.compiler.compile),
        ("compiler.fingerprint", &config.compiler.fingerprint),
        ("exec_cache.invalidate", &config.exec_cache.invalidate),
        ("exec_cache.compile", &config.exec_cache.compile),
    ] {
        if argv.as_ref().is_some_and(|a| a.is_empty()) {
            return Err(Error::config(format!("{name} must not be empty in {}", path.display())));
        }
    }

    Ok(config)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
