//! `eboard address` specs

use crate::prelude::*;
use crate::prelude::assert_eq;

#[test]
fn address_with_both_sides() {
    assert_eq!(
        stdout_of(&["address", "click,move@mouse"]),
        "click,move@mouse\nevents: click, move\nsenders: mouse\n"
    );
}

#[test]
fn address_without_senders_matches_any_sender() {
    assert_eq!(
        stdout_of(&["address", "click"]),
        "click@*\nevents: click\nsenders: *\n"
    );
}

#[test]
fn star_is_a_wildcard_side() {
    assert_eq!(
        stdout_of(&["address", "*@keyboard"]),
        "*@keyboard\nevents: *\nsenders: keyboard\n"
    );
}

#[test]
fn duplicate_names_collapse() {
    assert_eq!(
        stdout_of(&["address", "a,b,a@s,s"]),
        "a,b@s\nevents: a, b\nsenders: s\n"
    );
}
