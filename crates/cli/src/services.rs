// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborators wired once at startup and handed to every command.

use std::path::PathBuf;
use std::sync::Arc;

use crate::compiler::{CommandCompiler, Compiler};
use crate::config::{CachePaths, Config, defaults};
use crate::exec_cache::{CommandExecCache, ExecCache, NoopExecCache};
use crate::launcher::{Launcher, resolve_entry};
use crate::process::{ProcessRunner, SystemRunner};
use crate::validate::ArtifactShape;

/// Resolved configuration plus the providers built from it.
pub struct Services {
    pub config: Config,
    /// Directory relative paths resolve against.
    pub base: PathBuf,
    pub runner: Arc<dyn ProcessRunner>,
    pub compiler: Box<dyn Compiler>,
    pub exec_cache: Box<dyn ExecCache>,
}

impl Services {
    /// Wire providers that spawn real processes.
    pub fn system(config: Config, base: PathBuf) -> Self {
        Self::with_runner(config, base, Arc::new(SystemRunner))
    }

    /// Wire providers around an explicit process runner.
    pub fn with_runner(config: Config, base: PathBuf, runner: Arc<dyn ProcessRunner>) -> Self {
        let compiler = Box::new(CommandCompiler::new(&config.compiler, &base, Arc::clone(&runner)));
        let exec_cache: Box<dyn ExecCache> = if config.exec_cache.is_configured() {
            Box::new(CommandExecCache::new(&config.exec_cache, &base, Arc::clone(&runner)))
        } else {
            Box::new(NoopExecCache)
        };

        Self { config, base, runner, compiler, exec_cache }
    }

    pub fn cache_paths(&self) -> CachePaths {
        self.config.cache.paths(&self.base)
    }

    pub fn artifact_shape(&self) -> ArtifactShape {
        ArtifactShape::from_config(&self.config.compiler)
    }

    /// Launcher for the entry script, with optional CLI overrides.
    pub fn launcher(&self, interpreter: Option<&str>, entry: Option<&str>) -> Launcher {
        let interpreter = interpreter
            .map(str::trim)
            .filter(|i| !i.is_empty())
            .unwrap_or(&self.config.bench.interpreter);
        let entry = entry.unwrap_or(&self.config.bench.entry);
        Launcher::new(interpreter, resolve_entry(entry, &self.base, defaults::bench::ENTRY))
    }
}

#[cfg(test)]
#[path = "services_tests.rs"]
mod tests;
