// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Execution-cache hooks.
//!
//! Some runtimes keep a compiled-code cache keyed by file. After the
//! artifact changes, warmup asks that cache to drop the stale entry and
//! recompile. This is advisory: callers log and ignore hook failures.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::ExecCacheConfig;
use crate::error::{Error, Result};
use crate::process::{ProcessRunner, substitute};

/// Placeholder replaced with the file path in hook commands.
pub const PATH_PLACEHOLDER: &str = "{path}";

/// Optional runtime execution cache.
pub trait ExecCache {
    /// Drop any cached compilation of `path`.
    fn invalidate(&self, path: &Path) -> Result<()>;

    /// Compile `path` into the cache ahead of first use.
    fn compile(&self, path: &Path) -> Result<()>;
}

/// Runtime without an execution cache.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopExecCache;

impl ExecCache for NoopExecCache {
    fn invalidate(&self, _path: &Path) -> Result<()> {
        Ok(())
    }

    fn compile(&self, _path: &Path) -> Result<()> {
        Ok(())
    }
}

/// Execution cache driven through configured commands.
pub struct CommandExecCache {
    invalidate: Option<Vec<String>>,
    compile: Option<Vec<String>>,
    cwd: PathBuf,
    runner: Arc<dyn ProcessRunner>,
}

impl CommandExecCache {
    pub fn new(config: &ExecCacheConfig, cwd: &Path, runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            invalidate: config.invalidate.clone(),
            compile: config.compile.clone(),
            cwd: cwd.to_path_buf(),
            runner,
        }
    }

    fn hook(&self, name: &str, template: Option<&Vec<String>>, path: &Path) -> Result<()> {
        let Some(template) = template else {
            return Ok(());
        };
        let argv = substitute(template, PATH_PLACEHOLDER, &path.to_string_lossy());
        let result = self.runner.run(&argv, &self.cwd)?;
        if result.success() {
            Ok(())
        } else {
            Err(Error::ProcessFailure {
                context: format!("exec cache {name} hook failed for {}", path.display()),
                output: result.diagnostic().to_string(),
            })
        }
    }
}

impl ExecCache for CommandExecCache {
    fn invalidate(&self, path: &Path) -> Result<()> {
        self.hook("invalidate", self.invalidate.as_ref(), path)
    }

    fn compile(&self, path: &Path) -> Result<()> {
        self.hook("compile", self.compile.as_ref(), path)
    }
}

/// Invalidate then recompile `path`, logging and swallowing failures.
pub fn refresh(cache: &dyn ExecCache, path: &Path) {
    if let Err(e) = cache.invalidate(path) {
        tracing::debug!("exec cache invalidate skipped: {}", e);
    }
    prime(cache, path);
}

/// Compile `path` into the cache, logging and swallowing failures.
pub fn prime(cache: &dyn ExecCache, path: &Path) {
    if let Err(e) = cache.compile(path) {
        tracing::debug!("exec cache compile skipped: {}", e);
    }
}

#[cfg(test)]
#[path = "exec_cache_tests.rs"]
mod tests;
