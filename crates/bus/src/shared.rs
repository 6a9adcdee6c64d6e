// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! State shared between the board, its worker and its publishers

use crate::error::PublishError;
use crate::queue::EventQueue;
use eb_core::Event;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

/// Lifecycle of an event board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum BusState {
    Stopped = 0,
    Starting = 1,
    Running = 2,
    Stopping = 3,
}

impl BusState {
    /// Publishing is open while starting and running
    pub fn accepts_events(self) -> bool {
        matches!(self, BusState::Starting | BusState::Running)
    }

    fn from_u8(value: u8) -> Self {
        match value {
            1 => BusState::Starting,
            2 => BusState::Running,
            3 => BusState::Stopping,
            _ => BusState::Stopped,
        }
    }
}

pub(crate) struct Shared {
    state: AtomicU8,
    pub(crate) queue: EventQueue,
}

impl Shared {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            state: AtomicU8::new(BusState::Stopped as u8),
            queue: EventQueue::new(capacity),
        }
    }

    pub(crate) fn state(&self) -> BusState {
        BusState::from_u8(self.state.load(Ordering::Acquire))
    }

    pub(crate) fn set_state(&self, state: BusState) {
        self.state.store(state as u8, Ordering::Release);
    }

    pub(crate) fn publish(&self, event: &Event) -> Result<(), PublishError> {
        if !self.state().accepts_events() {
            return Err(PublishError::NotRunning);
        }
        if !event.has_valid_ids() {
            tracing::warn!(
                sender_id = event.sender_id,
                event_id = event.event_id,
                "rejecting event with invalid id"
            );
            return Err(PublishError::InvalidId);
        }
        if !self.queue.push(event) {
            return Err(PublishError::QueueFull {
                capacity: self.queue.capacity(),
            });
        }
        Ok(())
    }
}

/// Handle through which a sender publishes onto its board
#[derive(Clone)]
pub struct Publisher {
    shared: Arc<Shared>,
}

impl Publisher {
    pub(crate) fn new(shared: Arc<Shared>) -> Self {
        Self { shared }
    }

    /// Queue a copy of `event` for the next board cycle
    pub fn publish(&self, event: &Event) -> Result<(), PublishError> {
        self.shared.publish(event)
    }

    pub fn is_running(&self) -> bool {
        self.shared.state() == BusState::Running
    }

    pub fn state(&self) -> BusState {
        self.shared.state()
    }
}
