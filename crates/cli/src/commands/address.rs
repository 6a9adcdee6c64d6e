// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `eboard address <ADDR>` - Show how an event address is read

use anyhow::Result;
use clap::Args;
use eb_core::EventAddress;

#[derive(Args)]
pub struct AddressArgs {
    /// Address of the form `events@senders` (e.g. "click,move@mouse")
    pub address: String,
}

pub fn address(args: AddressArgs) -> Result<()> {
    let parsed = EventAddress::parse(&args.address);

    println!("{}", parsed);
    println!(
        "events: {}",
        side(parsed.matches_all_events(), parsed.events())
    );
    println!(
        "senders: {}",
        side(parsed.matches_all_senders(), parsed.senders())
    );
    Ok(())
}

fn side(wildcard: bool, names: &[String]) -> String {
    if wildcard {
        "*".to_string()
    } else {
        names.join(", ")
    }
}
