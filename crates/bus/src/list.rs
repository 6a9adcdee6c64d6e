// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fixed-capacity ring buffer of events
//!
//! Pushing into a full list overwrites the oldest event. Reads go newest
//! first, either by index or through a restartable cursor, so readers that
//! only care about recent events can stop early.

use eb_core::Event;

pub struct EventList {
    slots: Vec<Option<Event>>,
    /// Next slot to write
    head: usize,
    /// Valid entries, saturates at capacity
    count: usize,
    /// Offset from the newest event of the next cursor read
    cursor: usize,
    remaining: usize,
}

impl EventList {
    /// Create a list holding at most `capacity` events (at least one)
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            count: 0,
            cursor: 0,
            remaining: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Store an event, evicting the oldest one when full
    pub fn push(&mut self, event: Event) {
        self.slots[self.head] = Some(event);
        self.head = (self.head + 1) % self.capacity();
        if self.count < self.capacity() {
            self.count += 1;
        }
    }

    /// Event `index` steps back from the newest (0 = most recent)
    pub fn get(&self, index: usize) -> Option<&Event> {
        if index >= self.count {
            return None;
        }
        let capacity = self.capacity();
        let slot = (self.head + capacity - 1 - index) % capacity;
        self.slots[slot].as_ref()
    }

    /// Rewind the cursor to the newest event
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.remaining = self.count;
    }

    /// Next event under the cursor, newest first
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&Event> {
        if self.remaining == 0 {
            return None;
        }
        let index = self.cursor;
        self.cursor += 1;
        self.remaining -= 1;
        self.get(index)
    }

    /// Iterate newest first without touching the cursor
    pub fn iter(&self) -> impl Iterator<Item = &Event> + '_ {
        (0..self.count).filter_map(move |i| self.get(i))
    }

    /// Drop every event and rewind both cursors
    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.head = 0;
        self.count = 0;
        self.cursor = 0;
        self.remaining = 0;
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
