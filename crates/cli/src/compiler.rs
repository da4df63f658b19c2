// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dependency-graph compiler collaborator.
//!
//! The compiler itself lives outside this crate. Warmup only needs to ask
//! it for a fingerprint of the current binding graph and to compile that
//! graph to a target path.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config::CompilerConfig;
use crate::error::{Error, Result};
use crate::process::{ProcessRunner, substitute};

/// Placeholder replaced with the artifact path in the compile command.
pub const TARGET_PLACEHOLDER: &str = "{target}";

/// Narrow contract the warmup depends on.
pub trait Compiler {
    /// Whether this compiler can produce an artifact at all.
    fn can_compile(&self) -> bool {
        true
    }

    /// Compile the current binding graph to `target`.
    fn compile(&self, target: &Path) -> Result<()>;

    /// Content fingerprint of the current binding graph.
    ///
    /// `None` when the compiler cannot report one.
    fn fingerprint(&self) -> Option<String>;
}

/// [`Compiler`] driven through external commands.
pub struct CommandCompiler {
    compile: Option<Vec<String>>,
    fingerprint: Option<Vec<String>>,
    cwd: PathBuf,
    runner: Arc<dyn ProcessRunner>,
}

impl CommandCompiler {
    pub fn new(config: &CompilerConfig, cwd: &Path, runner: Arc<dyn ProcessRunner>) -> Self {
        Self {
            compile: config.compile.clone(),
            fingerprint: config.fingerprint.clone(),
            cwd: cwd.to_path_buf(),
            runner,
        }
    }
}

impl Compiler for CommandCompiler {
    fn can_compile(&self) -> bool {
        self.compile.is_some()
    }

    fn compile(&self, target: &Path) -> Result<()> {
        let Some(template) = &self.compile else {
            return Err(Error::config(
                "configured compiler does not support compilation (set compiler.compile)",
            ));
        };

        let argv = substitute(template, TARGET_PLACEHOLDER, &target.to_string_lossy());
        let result = self.runner.run(&argv, &self.cwd)?;
        if !result.success() {
            return Err(Error::ProcessFailure {
                context: format!("Compiler exited with code {}", result.exit_code),
                output: result.diagnostic().to_string(),
            });
        }
        Ok(())
    }

    fn fingerprint(&self) -> Option<String> {
        let argv = self.fingerprint.as_ref()?;
        match self.runner.run(argv, &self.cwd) {
            Ok(result) if result.success() => {
                let fingerprint = result.stdout.trim();
                (!fingerprint.is_empty()).then(|| fingerprint.to_string())
            }
            Ok(result) => {
                tracing::warn!(
                    "fingerprint command exited with code {}: {}",
                    result.exit_code,
                    result.diagnostic()
                );
                None
            }
            Err(e) => {
                tracing::warn!("fingerprint command unavailable: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
