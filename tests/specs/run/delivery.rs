//! `eboard run` delivery specs

use crate::prelude::*;
use crate::prelude::assert_eq;

fn delivered(out: &str, listener: &str) -> usize {
    out.lines()
        .filter(|line| line.starts_with(&format!("{listener}\t")))
        .count()
}

#[test]
fn default_listener_receives_clock_ticks() {
    let out = stdout_of(&["run", "--duration", "400ms", "--tick", "20ms"]);
    assert!(delivered(&out, "print-0") > 0, "{out}");
    assert!(out.contains("print-0\ttick@clock\t"), "{out}");
}

#[test]
fn listener_on_clock_address_receives_ticks() {
    let out = stdout_of(&[
        "run", "--duration", "400ms", "--tick", "20ms", "--listen", "tick@clock",
    ]);
    assert!(delivered(&out, "print-0") > 0, "{out}");
}

#[test]
fn unrelated_listener_receives_nothing() {
    let out = stdout_of(&[
        "run",
        "--duration",
        "300ms",
        "--tick",
        "20ms",
        "--listen",
        "tick@clock",
        "--listen",
        "press@keyboard",
    ]);
    assert!(delivered(&out, "print-0") > 0, "{out}");
    assert_eq!(delivered(&out, "print-1"), 0);
}

#[test]
fn nonzero_duration_filter_excludes_ticks() {
    // Clock ticks have zero duration
    let out = stdout_of(&[
        "run", "--duration", "300ms", "--tick", "20ms", "--state", "nonzerodur",
    ]);
    assert_eq!(delivered(&out, "print-0"), 0);
}

#[test]
fn json_lines_describe_each_delivery() {
    let out = stdout_of(&[
        "run", "--duration", "400ms", "--tick", "20ms", "--json",
    ]);
    let records: Vec<serde_json::Value> = out
        .lines()
        .filter(|line| line.starts_with('{'))
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    assert!(!records.is_empty(), "{out}");
    for record in records {
        assert_eq!(record["listener"], "print-0");
        assert_eq!(record["sender"], "clock");
        assert_eq!(record["event"], "tick");
    }
}

#[test]
fn log_file_receives_board_logs() {
    let project = Project::empty();
    let log = project.path().join("logs/eboard.log");

    eboard()
        .env("RUST_LOG", "info")
        .args(["run", "--duration", "50ms", "--log-file"])
        .arg(&log)
        .assert()
        .success();

    let text = std::fs::read_to_string(&log).unwrap();
    assert!(text.contains("starting event board"), "{text}");
    assert!(text.contains("stopping event board"), "{text}");
}
