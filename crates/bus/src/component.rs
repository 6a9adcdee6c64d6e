// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Capabilities the board expects from producers and consumers

use crate::matcher::Matches;
use crate::shared::Publisher;

/// A component that publishes events onto the board
pub trait EventSender: Send {
    /// Name used in log output
    fn name(&self) -> &str;

    /// Address of the events this sender produces, for log output
    fn address(&self) -> Option<String> {
        None
    }

    /// Receive the publishing handle; returning false refuses registration
    fn set_event_listener(&mut self, publisher: Publisher) -> bool;

    /// Called when the board starts (or on registration with a running board)
    fn on_start(&mut self) {}

    /// Called when the board stops, after its worker has exited
    fn on_flush(&mut self) {}
}

/// A component notified of matching events
pub trait EventListener: Send {
    /// Name used in log output
    fn name(&self) -> &str;

    /// Handle a board cycle that delivered `new_events` matching events
    ///
    /// The newest `new_events` items of `events` are the ones that arrived this
    /// cycle. Runs on the board worker with the board locked: publishing is fine,
    /// calling back into the board's lifecycle is not.
    fn update(&mut self, events: &mut Matches<'_>, new_events: usize, now_ms: u32) -> bool;

    fn on_start(&mut self) {}

    fn on_flush(&mut self) {}

    /// Disabled listeners are skipped for a cycle
    fn is_enabled(&self) -> bool {
        true
    }
}
