// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error taxonomy and process exit codes.
//!
//! Every fatal condition bubbles up to the command boundary as an [`Error`],
//! where it is printed as a single line and mapped to [`ExitCode::Failure`].

use std::path::PathBuf;

/// Process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,
    Failure = 1,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        std::process::ExitCode::from(code as u8)
    }
}

/// Errors produced by the warmup and benchmark subsystem.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The OS could not create a child process.
    #[error("unable to start process `{program}`: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// A child process exited non-zero.
    #[error("{context}: {output}")]
    ProcessFailure { context: String, output: String },

    /// The compiled artifact was not created.
    #[error("compiled artifact was not created: {}", path.display())]
    ArtifactMissing { path: PathBuf },

    /// The compiled artifact exists but is not of the expected shape.
    #[error("compiled artifact {} is invalid: {reason}", path.display())]
    ArtifactInvalid { path: PathBuf, reason: String },

    /// Invalid input or configuration.
    #[error("{0}")]
    Configuration(String),

    /// A value could not be serialized.
    #[error("failed to encode {what}: {source}")]
    Encoding {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A benchmark threshold was not met.
    #[error("Benchmark threshold failed: {0}")]
    Threshold(String),

    /// Filesystem failure.
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn config(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }

    pub fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io { action, path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
