//! Clear behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > clear removes everything warmup produced
#[test]
fn clear_removes_warmup_output() {
    let temp = Project::scripted();
    prewarm_cmd().arg("warmup").current_dir(temp.path()).assert().success();

    prewarm_cmd()
        .arg("clear")
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Container cache cleared at"));

    for name in [
        "container.php",
        "container.php.meta.json",
        "preload.php",
        "container-metrics.json",
    ] {
        assert!(!temp.cache_file(name).exists(), "{name} should be removed");
    }
    let left: Vec<_> = std::fs::read_dir(temp.cache_file(""))
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert!(left.is_empty(), "left after clear: {left:?}");
}

/// > clear on a cold cache succeeds
#[test]
fn clear_without_cache_succeeds() {
    let temp = Project::scripted();

    prewarm_cmd()
        .arg("clear")
        .current_dir(temp.path())
        .assert()
        .success();
}

/// > The next warmup after clear compiles again
#[test]
fn warmup_after_clear_recompiles() {
    let temp = Project::scripted();
    for cmd in ["warmup", "clear", "warmup"] {
        prewarm_cmd().arg(cmd).current_dir(temp.path()).assert().success();
    }
    assert_eq!(temp.log("compile.log").len(), 2);
}
