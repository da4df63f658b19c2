// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! How the application under test is launched.
//!
//! Every benchmarked or maintenance invocation is
//! `[interpreter, entry script, ...args]`.

use std::path::{Path, PathBuf};

/// Interpreter plus entry script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Launcher {
    pub interpreter: String,
    pub entry: PathBuf,
}

impl Launcher {
    pub fn new(interpreter: impl Into<String>, entry: impl Into<PathBuf>) -> Self {
        Self { interpreter: interpreter.into(), entry: entry.into() }
    }

    /// Full argv for running `args` through the entry script.
    pub fn argv<S: AsRef<str>>(&self, args: &[S]) -> Vec<String> {
        let mut argv = Vec::with_capacity(args.len() + 2);
        argv.push(self.interpreter.clone());
        argv.push(self.entry.to_string_lossy().into_owned());
        argv.extend(args.iter().map(|a| a.as_ref().to_string()));
        argv
    }
}

/// Resolve the entry script against `base`.
///
/// Absolute paths are kept, relative ones joined to `base`, and an empty
/// value falls back to `default`.
pub fn resolve_entry(entry: &str, base: &Path, default: &str) -> PathBuf {
    let entry = entry.trim();
    let entry = if entry.is_empty() { default } else { entry };
    let path = Path::new(entry);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(entry.trim_start_matches('/'))
    }
}

/// Tokenize a free-form target command.
///
/// A leading interpreter token and a leading entry-script token are
/// dropped, so `php denosys list --raw`, `denosys list --raw` and
/// `list --raw` all normalize to `["list", "--raw"]`.
pub fn normalize_command(raw: &str, launcher: &Launcher) -> Vec<String> {
    let mut tokens: Vec<&str> = raw.split_whitespace().collect();

    if tokens
        .first()
        .is_some_and(|t| *t == launcher.interpreter || same_file_name(t, &launcher.interpreter))
    {
        tokens.remove(0);
    }

    let entry_name = launcher.entry.file_name();
    if let Some(first) = tokens.first()
        && entry_name.is_some()
        && Path::new(first).file_name() == entry_name
    {
        tokens.remove(0);
    }

    tokens.into_iter().map(String::from).collect()
}

fn same_file_name(a: &str, b: &str) -> bool {
    match (Path::new(a).file_name(), Path::new(b).file_name()) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
#[path = "launcher_tests.rs"]
mod tests;
