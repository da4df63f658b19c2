//! Warmup behavioral specifications.
//!
//! Compile-when-stale, artifact validation, preload script and metrics.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

fn metrics(temp: &Project) -> serde_json::Value {
    let path = temp.cache_file("container-metrics.json");
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

/// > First warmup compiles, validates and records metrics
#[test]
fn first_warmup_compiles() {
    let temp = Project::scripted();

    prewarm_cmd()
        .arg("warmup")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Container cache warmed at"));

    assert_eq!(temp.log("compile.log").len(), 1);
    assert!(temp.cache_file("container.php").exists());
    assert!(temp.cache_file("preload.php").exists());

    let m = metrics(&temp);
    assert_eq!(m["status"], "compiled");
    assert_eq!(m["fingerprint"], "graph-v1");
    assert_eq!(m["total_bindings"], 8);
    assert_eq!(m["optimized_bindings"], 6);
    assert_eq!(m["fallback_bindings"], 2);
    assert_eq!(m["compile_hit_rate"], 75.0);
    assert_eq!(m["fallback_rate"], 25.0);
}

/// > Identical fingerprints skip the compile
#[test]
fn unchanged_graph_is_up_to_date() {
    let temp = Project::scripted();
    prewarm_cmd().arg("warmup").current_dir(temp.path()).assert().success();

    prewarm_cmd()
        .arg("warmup")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("already up to date"));

    assert_eq!(temp.log("compile.log").len(), 1);
    assert_eq!(metrics(&temp)["status"], "up_to_date");
}

/// > A changed fingerprint triggers a rebuild
#[test]
fn changed_graph_recompiles() {
    let temp = Project::scripted();
    prewarm_cmd().arg("warmup").current_dir(temp.path()).assert().success();

    temp.file("graph.txt", "graph-v2\n");
    prewarm_cmd()
        .arg("warmup")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("warmed"));

    assert_eq!(temp.log("compile.log").len(), 2);
    assert_eq!(metrics(&temp)["fingerprint"], "graph-v2");
}

/// > A deleted artifact is rebuilt even when its metadata remains
#[test]
fn deleted_artifact_recompiles() {
    let temp = Project::scripted();
    prewarm_cmd().arg("warmup").current_dir(temp.path()).assert().success();

    std::fs::remove_file(temp.cache_file("container.php")).unwrap();
    prewarm_cmd()
        .arg("warmup")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("warmed"));

    assert_eq!(temp.log("compile.log").len(), 2);
    assert!(temp.cache_file("container.php").exists());
}

/// > Without a fingerprint capability every warmup recompiles
#[test]
fn missing_fingerprint_always_recompiles() {
    let temp = Project::scripted();
    temp.file(
        "prewarm.toml",
        "version = 1\n\n[compiler]\ncompile = [\"sh\", \"compile.sh\", \"{target}\"]\n",
    );

    for _ in 0..2 {
        prewarm_cmd().arg("warmup").current_dir(temp.path()).assert().success();
    }
    assert_eq!(temp.log("compile.log").len(), 2);
}

/// > Preload script lists the cache files
#[test]
fn preload_script_lists_cache_files() {
    let temp = Project::scripted();
    prewarm_cmd().arg("warmup").current_dir(temp.path()).assert().success();

    let preload = temp.read("storage/core/cache/preload.php");
    assert!(preload.contains("'/config.php'"));
    assert!(preload.contains("'/routes.php'"));
    assert!(preload.contains("'/container.php'"));
}

/// > No compile command means compilation is unsupported
#[test]
fn no_compiler_fails_with_configuration_error() {
    let temp = Project::empty();
    temp.file("prewarm.toml", "version = 1\n");

    prewarm_cmd()
        .arg("warmup")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("does not support compilation"));
}

/// > A failing compiler aborts the warmup with its output
#[test]
fn compiler_failure_is_reported() {
    let temp = Project::scripted();
    temp.file("compile.sh", "echo 'syntax error in bindings' >&2\nexit 4\n");

    prewarm_cmd()
        .arg("warmup")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("Container warmup failed"))
        .stderr(predicates::str::contains("syntax error in bindings"));

    assert!(!temp.cache_file("container-metrics.json").exists());
}

/// > An artifact with the wrong shape fails validation
#[test]
fn invalid_artifact_fails_validation() {
    let temp = Project::scripted();
    temp.file(
        "prewarm.toml",
        &CONFIG.replace("[bench]", "entry_point = \"OtherContainer\"\n\n[bench]"),
    );

    prewarm_cmd()
        .arg("warmup")
        .current_dir(temp.path())
        .assert()
        .code(1)
        .stderr(predicates::str::contains("OtherContainer"));
}

/// > The execution cache hooks run when configured
#[test]
fn exec_cache_hooks_run() {
    let temp = Project::scripted();
    temp.config(
        r#"
[exec_cache]
compile = ["sh", "-c", "echo \"$0\" >> hooks.log", "{path}"]
"#,
    );

    prewarm_cmd().arg("warmup").current_dir(temp.path()).assert().success();

    let hooks = temp.log("hooks.log");
    assert_eq!(hooks.len(), 2);
    assert!(hooks[0].ends_with("container.php"));
    assert!(hooks[1].ends_with("preload.php"));
}
