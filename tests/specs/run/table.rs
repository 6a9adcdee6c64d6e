//! Final board table specs

use crate::prelude::*;

const HEADER: &str = "#\ttype\tsender\tevent\ttime\tdur\tsize";

fn table_rows(out: &str) -> Vec<&str> {
    out.lines()
        .skip_while(|line| *line != HEADER)
        .skip(2)
        .take_while(|line| line.starts_with(|c: char| c.is_ascii_digit()))
        .collect()
}

#[test]
fn run_ends_with_board_table() {
    let out = stdout_of(&["run", "--duration", "300ms", "--tick", "20ms"]);
    assert!(out.contains(HEADER), "{out}");

    let rows = table_rows(&out);
    assert!(!rows.is_empty(), "{out}");
    assert!(rows[0].starts_with("000\tTUPLE\tclock\ttick\t"), "{out}");
    assert!(rows.iter().all(|row| row.ends_with("\t0\t4")), "{out}");
}

#[test]
fn table_is_bounded_by_event_capacity() {
    let project = Project::empty();
    let config = project.file(
        "board.toml",
        "event_capacity = 3\nupdate_interval = \"5ms\"\n",
    );

    let out = stdout_of(&[
        "run", "--duration", "300ms", "--tick", "10ms", "--config", &config,
    ]);
    let rows = table_rows(&out);
    assert!(!rows.is_empty(), "{out}");
    assert!(rows.len() <= 3, "{out}");
}
