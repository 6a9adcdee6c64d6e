//! Argument and configuration error specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn missing_subcommand_fails() {
    eboard().assert().failure();
}

#[test]
fn unknown_state_filter_is_rejected() {
    eboard()
        .args(["run", "--duration", "10ms", "--state", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown state filter 'sideways'"));
}

#[test]
fn invalid_span_is_rejected() {
    eboard()
        .args(["run", "--duration", "10ms", "--span", "soon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid time span 'soon'"));
}

#[test]
fn missing_config_file_is_created_with_defaults() {
    let project = Project::empty();
    let path = project.path().join("absent.toml");
    eboard()
        .args(["run", "--duration", "10ms", "--config"])
        .arg(&path)
        .assert()
        .success();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, stdout_of(&["config"]));
}

#[test]
fn malformed_config_file_fails() {
    let project = Project::empty();
    let path = project.file("board.toml", "event_capacity = \"lots\"\n");
    eboard()
        .args(["run", "--duration", "10ms", "--config", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config"));

    // Only a missing file is replaced by defaults
    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "event_capacity = \"lots\"\n"
    );
}
