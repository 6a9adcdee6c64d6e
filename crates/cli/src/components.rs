// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Board components used by `eboard run`

use eb_bus::{EventListener, EventSender, Matches, PublishError, Publisher};
use eb_core::{Event, IdRegistry, PipelineClock};
use serde::Serialize;
use std::io::Write;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread::{self, JoinHandle};
use std::time::Duration;

pub const CLOCK_SENDER: &str = "clock";
pub const CLOCK_EVENT: &str = "tick";

/// Publishes a `tick@clock` event every period while the board runs
///
/// Each tick carries its sequence number as a one-element tuple payload.
pub struct ClockSender<C: PipelineClock> {
    sender_id: u32,
    event_id: u32,
    period: Duration,
    clock: C,
    publisher: Option<Publisher>,
    ticker: Option<Ticker>,
}

struct Ticker {
    handle: JoinHandle<()>,
    stop_tx: mpsc::Sender<()>,
}

impl<C: PipelineClock> ClockSender<C> {
    pub fn new(registry: &impl IdRegistry, clock: C, period: Duration) -> Self {
        Self {
            sender_id: registry.resolve_or_create(CLOCK_SENDER),
            event_id: registry.resolve_or_create(CLOCK_EVENT),
            period: period.max(Duration::from_millis(1)),
            clock,
            publisher: None,
            ticker: None,
        }
    }
}

impl<C: PipelineClock> EventSender for ClockSender<C> {
    fn name(&self) -> &str {
        CLOCK_SENDER
    }

    fn address(&self) -> Option<String> {
        Some(format!("{}@{}", CLOCK_EVENT, CLOCK_SENDER))
    }

    fn set_event_listener(&mut self, publisher: Publisher) -> bool {
        self.publisher = Some(publisher);
        true
    }

    fn on_start(&mut self) {
        if self.ticker.is_some() {
            return;
        }
        let Some(publisher) = self.publisher.clone() else {
            tracing::warn!("clock sender started without a board");
            return;
        };

        let (stop_tx, stop_rx) = mpsc::channel();
        let (sender_id, event_id, period) = (self.sender_id, self.event_id, self.period);
        let clock = self.clock.clone();
        let spawned = thread::Builder::new()
            .name("eboard-clock".to_string())
            .spawn(move || {
                let mut seq: u32 = 0;
                while let Err(RecvTimeoutError::Timeout) = stop_rx.recv_timeout(period) {
                    let event = Event::new(sender_id, event_id)
                        .at(clock.now_ms())
                        .with_tuple(&[seq as f32]);
                    match publisher.publish(&event) {
                        Ok(()) => seq = seq.wrapping_add(1),
                        Err(PublishError::QueueFull { capacity }) => {
                            tracing::warn!(capacity, "clock tick dropped")
                        }
                        Err(e) => tracing::debug!(error = %e, "clock tick not published"),
                    }
                }
            });

        match spawned {
            Ok(handle) => self.ticker = Some(Ticker { handle, stop_tx }),
            Err(e) => tracing::error!(error = %e, "failed to spawn clock sender"),
        }
    }

    fn on_flush(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            let _ = ticker.stop_tx.send(());
            if ticker.handle.join().is_err() {
                tracing::error!("clock sender thread panicked");
            }
        }
    }
}

/// How a [`PrintListener`] renders deliveries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Output {
    /// `listener<TAB>event@sender<TAB>time<TAB>duration`
    Text,
    /// One JSON object per event
    Json,
}

#[derive(Serialize)]
struct Delivery<'a> {
    listener: &'a str,
    sender: String,
    event: String,
    #[serde(flatten)]
    record: &'a Event,
}

/// Writes each newly delivered event to `out`
pub struct PrintListener<R: IdRegistry> {
    name: String,
    registry: R,
    output: Output,
    out: Box<dyn Write + Send>,
}

impl<R: IdRegistry> PrintListener<R> {
    pub fn new(name: String, registry: R, output: Output, out: Box<dyn Write + Send>) -> Self {
        Self {
            name,
            registry,
            output,
            out,
        }
    }

    fn label(&self, id: u32) -> String {
        self.registry.name_of(id).unwrap_or_else(|| id.to_string())
    }

    fn write_event(&mut self, event: &Event) -> std::io::Result<()> {
        let sender = self.label(event.sender_id);
        let name = self.label(event.event_id);
        match self.output {
            Output::Text => writeln!(
                self.out,
                "{}\t{}@{}\t{}\t{}",
                self.name, name, sender, event.time, event.duration
            ),
            Output::Json => {
                let delivery = Delivery {
                    listener: &self.name,
                    sender,
                    event: name,
                    record: event,
                };
                let line = serde_json::to_string(&delivery)?;
                writeln!(self.out, "{}", line)
            }
        }
    }
}

impl<R: IdRegistry> EventListener for PrintListener<R> {
    fn name(&self) -> &str {
        &self.name
    }

    fn update(&mut self, events: &mut Matches<'_>, new_events: usize, _now_ms: u32) -> bool {
        for event in events.take(new_events) {
            if let Err(e) = self.write_event(event) {
                tracing::warn!(listener = %self.name, error = %e, "failed to print event");
                return false;
            }
        }
        self.out.flush().is_ok()
    }
}

#[cfg(test)]
#[path = "components_tests.rs"]
mod tests;
