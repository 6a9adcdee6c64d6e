// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Tabular dump of events

use eb_core::{Event, IdRegistry};
use std::io::{self, Write};

pub const TABLE_HEADER: &str = "#\ttype\tsender\tevent\ttime\tdur\tsize";
const TABLE_RULE: &str = "--------------------------------------------------------";

/// Write one row per event, in the order given
///
/// Returns `Ok(false)` if printing stopped at an event carrying an invalid id.
pub fn write_table<'a, R, W>(
    events: impl IntoIterator<Item = &'a Event>,
    registry: &R,
    out: &mut W,
) -> io::Result<bool>
where
    R: IdRegistry,
    W: Write + ?Sized,
{
    writeln!(out, "{}", TABLE_HEADER)?;
    writeln!(out, "{}", TABLE_RULE)?;

    for (i, event) in events.into_iter().enumerate() {
        let names = if event.has_valid_ids() {
            registry
                .name_of(event.sender_id)
                .zip(registry.name_of(event.event_id))
        } else {
            None
        };
        let Some((sender, name)) = names else {
            tracing::warn!(
                sender_id = event.sender_id,
                event_id = event.event_id,
                "abort printing because of an invalid sender/event id"
            );
            return Ok(false);
        };

        writeln!(
            out,
            "{:03}\t{}\t{}\t{}\t{}\t{}\t{}",
            i,
            event.kind.name(),
            sender,
            name,
            event.time,
            event.duration,
            event.size()
        )?;
    }

    Ok(true)
}

#[cfg(test)]
#[path = "print_tests.rs"]
mod tests;
