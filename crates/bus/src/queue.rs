// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Bounded handoff queue between producers and the board worker
//!
//! Producers never block on a full queue: the newest event is dropped and
//! the push reports failure instead.

use crate::list::EventList;
use eb_core::Event;
use std::collections::VecDeque;
use std::sync::Mutex;

pub struct EventQueue {
    items: Mutex<VecDeque<Event>>,
    capacity: usize,
}

impl EventQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            items: Mutex::new(VecDeque::with_capacity(capacity)),
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.lock().unwrap_or_else(|e| e.into_inner()).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enqueue a copy of `event`; false if the queue is full
    pub fn push(&self, event: &Event) -> bool {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        if items.len() >= self.capacity {
            tracing::warn!(capacity = self.capacity, "event queue full, dropping event");
            return false;
        }
        items.push_back(event.clone());
        true
    }

    /// Move every queued event into `dest` in arrival order
    pub fn drain(&self, dest: &mut EventList) -> usize {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        let count = items.len();
        for event in items.drain(..) {
            dest.push(event);
        }
        count
    }

    /// Discard every queued event, returning how many were dropped
    pub fn clear(&self) -> usize {
        let mut items = self.items.lock().unwrap_or_else(|e| e.into_inner());
        let count = items.len();
        items.clear();
        count
    }
}

#[cfg(test)]
#[path = "queue_tests.rs"]
mod tests;
