//! Test helpers for behavioral specifications.
//!
//! Projects are temp directories holding a `prewarm.toml` and small shell
//! scripts standing in for the application entry script and the compiler.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(dead_code)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Returns a Command configured to run the prewarm binary
pub fn prewarm_cmd() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("prewarm"));
    cmd.env_remove("PREWARM_CONFIG").env_remove("PREWARM_LOG");
    cmd
}

/// Entry script: `list` succeeds, maintenance steps are logged,
/// `fail` exits non-zero with a message on stderr.
pub const APP_SH: &str = r#"case "$1" in
  list) echo "commands" ;;
  fail) echo "boom" >&2; exit 3 ;;
  quiet-fail) echo "stdout only"; exit 2 ;;
  cache-*) echo "$1" >> maintenance.log ;;
  *) echo "unknown command $1" >&2; exit 1 ;;
esac
"#;

/// Fingerprint command: contents of graph.txt.
pub const FINGERPRINT_SH: &str = "cat graph.txt\n";

/// Compiler: writes the artifact plus its metadata sidecar and logs the call.
pub const COMPILE_SH: &str = r#"fp=$(cat graph.txt)
mkdir -p "$(dirname "$1")"
echo "<?php // compiled" > "$1"
printf '{"fingerprint":"%s","generated_at":"2026-01-01T00:00:00+00:00","total_bindings":8,"optimized_bindings":6,"optimized_classes":5,"entry_point":"CompiledContainer","extends":["Container"]}\n' "$fp" > "$1.meta.json"
echo "$1" >> compile.log
"#;

/// Config wiring the scripts above.
pub const CONFIG: &str = r#"version = 1

[compiler]
compile = ["sh", "compile.sh", "{target}"]
fingerprint = ["sh", "fingerprint.sh"]

[bench]
interpreter = "sh"
entry = "app.sh"
command = "list"
runs = 3
warmups = 1
"#;

/// A temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// An empty directory, marked as a repository root so config discovery
    /// never escapes it.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// A project with the scripted application, compiler and config.
    pub fn scripted() -> Self {
        let temp = Self::empty();
        temp.file("prewarm.toml", CONFIG);
        temp.file("app.sh", APP_SH);
        temp.file("compile.sh", COMPILE_SH);
        temp.file("fingerprint.sh", FINGERPRINT_SH);
        temp.file("graph.txt", "graph-v1\n");
        temp
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a file, creating parent directories.
    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }

    /// Append to prewarm.toml.
    pub fn config(&self, extra: &str) {
        let path = self.dir.path().join("prewarm.toml");
        let mut content = std::fs::read_to_string(&path).unwrap_or_default();
        content.push_str(extra);
        std::fs::write(path, content).unwrap();
    }

    pub fn read(&self, path: &str) -> String {
        std::fs::read_to_string(self.dir.path().join(path)).unwrap()
    }

    pub fn exists(&self, path: &str) -> bool {
        self.dir.path().join(path).exists()
    }

    /// Lines of a log file, empty when it does not exist.
    pub fn log(&self, path: &str) -> Vec<String> {
        std::fs::read_to_string(self.dir.path().join(path))
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    pub fn cache_file(&self, name: &str) -> PathBuf {
        self.dir.path().join("storage/core/cache").join(name)
    }
}
