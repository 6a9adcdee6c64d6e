//! `eboard config` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn prints_default_config() {
    let out = stdout_of(&["config"]);
    assert!(out.contains("event_capacity = 100"), "{out}");
    assert!(out.contains("sender_capacity = 50"), "{out}");
    assert!(out.contains("listener_capacity = 50"), "{out}");
    assert!(out.contains("update_interval = \"10ms\""), "{out}");
}

#[test]
fn writes_config_file() {
    let project = Project::empty();
    let path = project.path().join("nested/board.toml");

    eboard()
        .args(["config", "--output"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote config to"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, stdout_of(&["config"]));
}

#[test]
fn written_config_runs_a_board() {
    let project = Project::empty();
    let path = project.path().join("board.toml");
    eboard()
        .args(["config", "--output"])
        .arg(&path)
        .assert()
        .success();

    eboard()
        .args(["run", "--duration", "50ms", "--config"])
        .arg(&path)
        .assert()
        .success();
}
