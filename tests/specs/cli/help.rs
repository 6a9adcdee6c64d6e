//! Help and version specs

use crate::prelude::*;

#[test]
fn help_lists_subcommands() {
    eboard()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("address"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn version_names_the_binary() {
    eboard()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("eboard"));
}

#[test]
fn run_help_documents_listener_options() {
    eboard()
        .args(["run", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--listen"))
        .stdout(predicate::str::contains("--span"))
        .stdout(predicate::str::contains("--state"));
}
