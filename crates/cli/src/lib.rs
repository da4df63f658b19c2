// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Startup-cache warmup and startup latency benchmarking.

pub mod artifact;
pub mod bench;
pub mod clear;
pub mod cli;
pub mod compiler;
pub mod config;
pub mod discovery;
pub mod error;
pub mod exec_cache;
pub mod fingerprint;
pub mod fs_util;
pub mod launcher;
pub mod maintenance;
pub mod metrics;
pub mod preload;
pub mod process;
pub mod progress;
pub mod services;
pub mod validate;
pub mod warmup;

#[cfg(test)]
pub mod test_utils;
