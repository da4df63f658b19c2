// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Config structs delegate to these constants from their `Default` impls.

/// Cache directory layout.
pub mod cache {
    /// Cache directory, relative to the base directory.
    pub const DIR: &str = "storage/core/cache";

    /// Compiled container artifact file name.
    pub const ARTIFACT: &str = "container.php";

    /// Preload script file name.
    pub const PRELOAD: &str = "preload.php";

    /// Warmup metrics file name.
    pub const METRICS: &str = "container-metrics.json";

    /// Cache files primed by the preload script.
    pub const PRELOAD_FILES: [&str; 3] = ["config.php", "routes.php", "container.php"];
}

/// Expected shape of the compiled artifact.
pub mod compiler {
    /// Entry-point type the compiled artifact must declare.
    pub const ENTRY_POINT: &str = "CompiledContainer";

    /// Base contract the entry point must extend.
    pub const BASE_CONTRACT: &str = "Container";
}

/// Benchmark defaults.
pub mod bench {
    /// Interpreter used to launch the entry script.
    pub const INTERPRETER: &str = "php";

    /// Entry script, relative to the base directory.
    pub const ENTRY: &str = "denosys";

    /// Lightweight introspection command.
    pub const COMMAND: &str = "list --raw";

    /// Measured runs per scenario.
    pub const RUNS: usize = 20;

    /// Warmup runs per scenario.
    pub const WARMUPS: usize = 3;
}

/// Maintenance subcommands.
pub mod maintenance {
    /// Subcommands that force a cold state.
    pub const CLEAR: [&str; 3] = [
        "cache-clear-config",
        "cache-clear-routes",
        "cache-clear-container",
    ];

    /// Subcommands that force a warm state, in build order.
    pub const BUILD: [&str; 3] = [
        "cache-build-config",
        "cache-build-routes",
        "cache-build-container",
    ];
}
