//! Optimize behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > optimize runs the build subcommands in order
#[test]
fn optimize_runs_build_steps() {
    let temp = Project::scripted();

    prewarm_cmd()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Caches optimized successfully."))
        .stderr(predicates::str::contains("Running cache-build-config..."));

    assert_eq!(
        temp.log("maintenance.log"),
        vec!["cache-build-config", "cache-build-routes", "cache-build-container"]
    );
}

/// > optimize --clear runs the clear subcommands
#[test]
fn optimize_clear_runs_clear_steps() {
    let temp = Project::scripted();

    prewarm_cmd()
        .args(["optimize", "--clear"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Caches cleared successfully."));

    assert_eq!(
        temp.log("maintenance.log"),
        vec!["cache-clear-config", "cache-clear-routes", "cache-clear-container"]
    );
}

/// > The first failing step aborts with its output
#[test]
fn optimize_stops_at_failing_step() {
    let temp = Project::scripted();
    temp.config("\n[maintenance]\nbuild = [\"cache-build-config\", \"fail\", \"cache-build-routes\"]\n");

    prewarm_cmd()
        .arg("optimize")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Optimize failed at step \"fail\": boom"));

    assert_eq!(temp.log("maintenance.log"), vec!["cache-build-config"]);
}

/// > --entry overrides the configured entry script
#[test]
fn optimize_entry_override() {
    let temp = Project::scripted();
    temp.file("bin/other.sh", "echo \"other $1\" >> other.log\n");

    prewarm_cmd()
        .args(["optimize", "--entry", "bin/other.sh"])
        .current_dir(temp.path())
        .assert()
        .success();

    assert_eq!(temp.log("other.log").len(), 3);
    assert!(!temp.exists("maintenance.log"));
}
