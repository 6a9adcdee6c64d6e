// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The event board
//!
//! Producers publish copies of events into a bounded queue. Once per tick the
//! worker moves them into the shared ring buffer and, with the board locked,
//! tells every enabled listener how many of the new events match its
//! subscription. Listeners then pull those events through their matcher.

use crate::component::{EventListener, EventSender};
use crate::config::BusConfig;
use crate::error::{BusError, PublishError};
use crate::list::EventList;
use crate::matcher::{ListenerMatcher, Matches};
use crate::print::write_table;
use crate::queue::EventQueue;
use crate::shared::{BusState, Publisher, Shared};
use crate::worker::Worker;
use eb_core::{
    Event, EventAddress, IdRegistry, InternRegistry, PipelineClock, StateFilter, SystemClock,
};
use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard};

struct Registration {
    listener: Box<dyn EventListener>,
    matcher: ListenerMatcher,
    /// Matches counted in the current cycle
    new_events: usize,
}

/// Everything guarded by the board lock
pub(crate) struct Board {
    events: EventList,
    senders: Vec<Box<dyn EventSender>>,
    listeners: Vec<Registration>,
}

impl Board {
    fn new(event_capacity: usize) -> Self {
        Self {
            events: EventList::new(event_capacity),
            senders: Vec::new(),
            listeners: Vec::new(),
        }
    }

    /// Drain the queue and notify listeners if anything arrived
    pub(crate) fn tick<C: PipelineClock>(&mut self, queue: &EventQueue, clock: &C) -> usize {
        let arrived = queue.drain(&mut self.events);
        if arrived > 0 {
            tracing::trace!(arrived, "event board tick");
            self.process(arrived, clock);
        }
        arrived
    }

    /// Count the `n` newest events per listener, then notify enabled listeners
    fn process<C: PipelineClock>(&mut self, n: usize, clock: &C) -> bool {
        let Board {
            events, listeners, ..
        } = self;

        let now = clock.now_ms();
        for registration in listeners.iter_mut() {
            registration.matcher.set_time(now);
            registration.new_events = 0;
        }

        events.reset();
        for _ in 0..n {
            let Some(event) = events.next() else {
                break;
            };
            for registration in listeners.iter_mut() {
                if registration.matcher.check(event) {
                    registration.new_events += 1;
                }
            }
        }

        let events: &EventList = events;
        for registration in listeners.iter_mut() {
            let Registration {
                listener,
                matcher,
                new_events,
            } = registration;
            if !listener.is_enabled() {
                continue;
            }

            let now = clock.now_ms();
            matcher.set_time(now);
            matcher.reset(events);
            let mut matches = Matches::new(matcher, events);
            if !listener.update(&mut matches, *new_events, now) {
                tracing::debug!(listener = listener.name(), "listener update returned false");
            }
        }

        true
    }
}

/// In-process publish/subscribe board with periodic batched delivery
pub struct EventBus<C: PipelineClock = SystemClock, R: IdRegistry = InternRegistry> {
    config: BusConfig,
    clock: C,
    registry: R,
    shared: Arc<Shared>,
    board: Arc<Mutex<Board>>,
    worker: Mutex<Option<Worker>>,
    /// Serializes start, stop and clear
    lifecycle: Mutex<()>,
}

impl EventBus {
    /// Board on the system clock with a fresh registry
    pub fn with_defaults(config: BusConfig) -> Self {
        Self::new(config, SystemClock::new(), InternRegistry::new())
    }
}

impl<C: PipelineClock, R: IdRegistry> EventBus<C, R> {
    pub fn new(config: BusConfig, clock: C, registry: R) -> Self {
        let config = config.normalized();
        Self {
            shared: Arc::new(Shared::new(config.event_capacity)),
            board: Arc::new(Mutex::new(Board::new(config.event_capacity))),
            worker: Mutex::new(None),
            lifecycle: Mutex::new(()),
            config,
            clock,
            registry,
        }
    }

    fn lock_board(&self) -> MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Taken before the board lock by everything that runs lifecycle hooks
    fn lock_lifecycle(&self) -> MutexGuard<'_, ()> {
        self.lifecycle.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn config(&self) -> &BusConfig {
        &self.config
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn registry(&self) -> &R {
        &self.registry
    }

    pub fn state(&self) -> BusState {
        self.shared.state()
    }

    pub fn is_running(&self) -> bool {
        self.state() == BusState::Running
    }

    /// Handle for publishing without a reference to the board
    pub fn publisher(&self) -> Publisher {
        Publisher::new(Arc::clone(&self.shared))
    }

    /// Register a producer; it receives a [`Publisher`] before this returns
    pub fn register_sender(&self, mut sender: Box<dyn EventSender>) -> Result<(), BusError> {
        let _lifecycle = self.lock_lifecycle();
        let mut board = self.lock_board();

        let capacity = self.config.sender_capacity;
        if board.senders.len() >= capacity {
            tracing::warn!(capacity, "#sender exceeds available space");
            return Err(BusError::SenderCapacity { capacity });
        }

        if !sender.set_event_listener(self.publisher()) {
            let name = sender.name().to_string();
            tracing::warn!(sender = %name, "sender refused the event board");
            return Err(BusError::SenderRejected { name });
        }

        tracing::info!(
            "'{}' sends '{}'",
            sender.name(),
            sender.address().as_deref().unwrap_or("*")
        );

        if self.is_running() {
            sender.on_start();
        }

        board.senders.push(sender);
        Ok(())
    }

    /// Subscribe a consumer to `address` (`None` matches everything)
    ///
    /// Unknown names are interned so listeners may subscribe before their
    /// senders exist. `span_ms == 0` means no time window.
    pub fn register_listener(
        &self,
        mut listener: Box<dyn EventListener>,
        address: Option<&str>,
        span_ms: u32,
        filter: StateFilter,
    ) -> Result<(), BusError> {
        let parsed = address.map(EventAddress::parse).unwrap_or_default();
        let senders = self.resolve_all(parsed.senders(), "sender");
        let events = self.resolve_all(parsed.events(), "event");

        let _lifecycle = self.lock_lifecycle();
        let mut board = self.lock_board();

        let capacity = self.config.listener_capacity;
        if board.listeners.len() >= capacity {
            tracing::warn!(capacity, "#listener exceeds available space");
            return Err(BusError::ListenerCapacity { capacity });
        }

        tracing::info!(
            "'{}' receives '{}'",
            listener.name(),
            address.unwrap_or("*")
        );

        if self.is_running() {
            listener.on_start();
        }

        board.listeners.push(Registration {
            listener,
            matcher: ListenerMatcher::new(senders, events, span_ms, filter),
            new_events: 0,
        });
        Ok(())
    }

    fn resolve_all(&self, names: &[String], kind: &str) -> Vec<u32> {
        names
            .iter()
            .map(|name| match self.registry.resolve(name) {
                Some(id) => id,
                None => {
                    tracing::warn!(kind, name = %name, "unknown name in address, interning");
                    self.registry.resolve_or_create(name)
                }
            })
            .collect()
    }

    /// Queue a copy of `event` for the next tick
    pub fn publish(&self, event: &Event) -> Result<(), PublishError> {
        self.shared.publish(event)
    }

    /// Run sender and listener start hooks, then spawn the worker
    pub fn start(&self) -> Result<(), BusError> {
        let _lifecycle = self.lock_lifecycle();

        if self.state() != BusState::Stopped {
            tracing::warn!("event board already running");
            return Ok(());
        }

        tracing::info!("starting event board");
        // Senders may already publish from their start hook
        self.shared.set_state(BusState::Starting);

        {
            let mut board = self.lock_board();
            for sender in board.senders.iter_mut() {
                sender.on_start();
            }
            for registration in board.listeners.iter_mut() {
                registration.listener.on_start();
            }
        }
        self.shared.set_state(BusState::Running);

        let worker = Worker::spawn(
            Arc::clone(&self.board),
            Arc::clone(&self.shared),
            self.clock.clone(),
            self.config.update_interval,
        );
        match worker {
            Ok(worker) => {
                *self.worker.lock().unwrap_or_else(|e| e.into_inner()) = Some(worker);
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to spawn event board worker");
                self.shared.set_state(BusState::Stopped);
                self.shared.queue.clear();
                Err(BusError::Spawn(e))
            }
        }
    }

    /// Join the worker, run flush hooks, and empty the queue and list
    ///
    /// Must not be called from a listener callback.
    pub fn stop(&self) {
        let _lifecycle = self.lock_lifecycle();

        if self.state() != BusState::Running {
            tracing::warn!("event board not running");
            return;
        }

        tracing::info!("stopping event board");
        self.shared.set_state(BusState::Stopping);

        let worker = self.worker.lock().unwrap_or_else(|e| e.into_inner()).take();
        if let Some(worker) = worker {
            worker.stop();
        }

        let mut board = self.lock_board();
        for registration in board.listeners.iter_mut() {
            registration.listener.on_flush();
        }
        for sender in board.senders.iter_mut() {
            sender.on_flush();
        }

        board.events.clear();
        let dropped = self.shared.queue.clear();
        if dropped > 0 {
            tracing::debug!(dropped, "discarded events published during shutdown");
        }

        self.shared.set_state(BusState::Stopped);
    }

    /// Drop every sender and listener registration
    pub fn clear(&self) -> Result<(), BusError> {
        let _lifecycle = self.lock_lifecycle();

        if self.state() != BusState::Stopped {
            tracing::warn!("cannot clear a running event board");
            return Err(BusError::NotStopped);
        }

        let mut board = self.lock_board();
        board.listeners.clear();
        board.senders.clear();
        Ok(())
    }

    /// Notify listeners about the `n` newest events in the list
    pub fn process(&self, n: usize) -> bool {
        self.lock_board().process(n, &self.clock)
    }

    /// One worker cycle on the calling thread; returns the events delivered
    pub fn tick(&self) -> usize {
        self.lock_board().tick(&self.shared.queue, &self.clock)
    }

    pub fn sender_count(&self) -> usize {
        self.lock_board().senders.len()
    }

    pub fn listener_count(&self) -> usize {
        self.lock_board().listeners.len()
    }

    /// Events in the list
    pub fn len(&self) -> usize {
        self.lock_board().events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Events queued for the next tick
    pub fn pending(&self) -> usize {
        self.shared.queue.len()
    }

    /// Copy of the list, newest first
    pub fn events(&self) -> Vec<Event> {
        self.lock_board().events.iter().cloned().collect()
    }

    /// Write the list as a table, newest first
    pub fn print<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<bool> {
        let board = self.lock_board();
        write_table(board.events.iter(), &self.registry, out)
    }
}

impl<C: PipelineClock, R: IdRegistry> Drop for EventBus<C, R> {
    fn drop(&mut self) {
        if self.is_running() {
            self.stop();
        }
    }
}

#[cfg(test)]
#[path = "bus_tests.rs"]
mod tests;
