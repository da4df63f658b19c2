//! Shared unit test utilities.
//!
//! Provides common helpers for unit tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tempfile::TempDir;

use crate::error::Result;
use crate::process::{ProcessResult, ProcessRunner};

/// Creates a temp directory with a minimal prewarm.toml.
pub fn temp_project() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("prewarm.toml"), "version = 1\n").unwrap();
    dir
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// Builds an owned argv from string slices.
pub fn argv(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| s.to_string()).collect()
}

/// A successful process result with the given duration.
pub fn ok_after(duration_ms: f64) -> ProcessResult {
    ProcessResult { exit_code: 0, stdout: String::new(), stderr: String::new(), duration_ms }
}

/// A failed process result with the given stderr.
pub fn failed_with(stderr: &str) -> ProcessResult {
    ProcessResult {
        exit_code: 1,
        stdout: String::new(),
        stderr: stderr.to_string(),
        duration_ms: 1.0,
    }
}

/// A [`ProcessRunner`] that replays canned results and records every call.
///
/// Once the script is exhausted every further call succeeds after 1ms.
#[derive(Default)]
pub struct ScriptedRunner {
    script: Mutex<VecDeque<ProcessResult>>,
    calls: Mutex<Vec<(Vec<String>, PathBuf)>>,
}

impl ScriptedRunner {
    pub fn new(script: Vec<ProcessResult>) -> Self {
        Self { script: Mutex::new(script.into()), calls: Mutex::new(Vec::new()) }
    }

    /// Recorded argv of every call, in order.
    pub fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().iter().map(|(argv, _)| argv.clone()).collect()
    }

    /// Working directory of every call, in order.
    pub fn dirs(&self) -> Vec<PathBuf> {
        self.calls.lock().unwrap().iter().map(|(_, cwd)| cwd.clone()).collect()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl ProcessRunner for ScriptedRunner {
    fn run(&self, argv: &[String], cwd: &Path) -> Result<ProcessResult> {
        self.calls.lock().unwrap().push((argv.to_vec(), cwd.to_path_buf()));
        Ok(self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| ok_after(1.0)))
    }
}

/// An in-memory [`Compiler`](crate::compiler::Compiler).
///
/// `compile` writes an artifact plus a metadata sidecar carrying `emits`,
/// shaped like a valid compiled container.
pub struct FakeCompiler {
    pub fingerprint: Option<String>,
    pub emits: crate::artifact::ArtifactMetadata,
    pub compiles: Mutex<Vec<PathBuf>>,
}

impl FakeCompiler {
    pub fn new(fingerprint: Option<&str>) -> Self {
        Self {
            fingerprint: fingerprint.map(String::from),
            emits: crate::artifact::ArtifactMetadata {
                fingerprint: fingerprint.map(String::from),
                generated_at: Some("2026-01-01T00:00:00+00:00".to_string()),
                total_bindings: 8,
                optimized_bindings: 6,
                optimized_classes: 5,
                entry_point: Some("CompiledContainer".to_string()),
                extends: vec!["Container".to_string()],
            },
            compiles: Mutex::new(Vec::new()),
        }
    }

    pub fn compile_count(&self) -> usize {
        self.compiles.lock().unwrap().len()
    }
}

impl crate::compiler::Compiler for FakeCompiler {
    fn compile(&self, target: &Path) -> Result<()> {
        write_artifact(target, &self.emits);
        self.compiles.lock().unwrap().push(target.to_path_buf());
        Ok(())
    }

    fn fingerprint(&self) -> Option<String> {
        self.fingerprint.clone()
    }
}

/// Writes an artifact file and its metadata sidecar.
pub fn write_artifact(target: &Path, meta: &crate::artifact::ArtifactMetadata) {
    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(target, "<?php // compiled\n").unwrap();
    fs::write(
        crate::artifact::metadata_path(target),
        serde_json::to_string(meta).unwrap(),
    )
    .unwrap();
}

/// An [`ExecCache`](crate::exec_cache::ExecCache) that records hook calls.
///
/// With `fail` set every hook returns an error.
#[derive(Default)]
pub struct RecordingExecCache {
    pub fail: bool,
    pub hooks: Mutex<Vec<(String, PathBuf)>>,
}

impl RecordingExecCache {
    /// Recorded `(hook, path)` pairs, in order.
    pub fn calls(&self) -> Vec<(String, PathBuf)> {
        self.hooks.lock().unwrap().clone()
    }

    fn record(&self, hook: &str, path: &Path) -> Result<()> {
        self.hooks.lock().unwrap().push((hook.to_string(), path.to_path_buf()));
        if self.fail {
            Err(crate::error::Error::config("no execution cache"))
        } else {
            Ok(())
        }
    }
}

impl crate::exec_cache::ExecCache for RecordingExecCache {
    fn invalidate(&self, path: &Path) -> Result<()> {
        self.record("invalidate", path)
    }

    fn compile(&self, path: &Path) -> Result<()> {
        self.record("compile", path)
    }
}
