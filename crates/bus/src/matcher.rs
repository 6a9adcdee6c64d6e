// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-listener event selection
//!
//! Each listener owns a [`ListenerMatcher`] holding its filters and its own
//! cursor into the shared [`EventList`]. During a notification the matcher is
//! bound to the list as [`Matches`], which the listener iterates newest first.

use crate::list::EventList;
use eb_core::{Event, StateFilter};

/// Scan progress of a matcher within one bus cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchPhase {
    /// Freshly reset
    Idle,
    Scanning,
    /// Walked past the last eligible event
    Done,
}

/// Predicate over sender, event, time window and state
#[derive(Debug, Clone)]
pub struct ListenerMatcher {
    senders: Vec<u32>,
    events: Vec<u32>,
    span_ms: u32,
    filter: StateFilter,
    now_ms: u32,
    phase: MatchPhase,
    cursor: usize,
    remaining: usize,
}

impl ListenerMatcher {
    /// Empty id sets match any sender/event; a zero span disables the window
    pub fn new(senders: Vec<u32>, events: Vec<u32>, span_ms: u32, filter: StateFilter) -> Self {
        Self {
            senders,
            events,
            span_ms,
            filter,
            now_ms: 0,
            phase: MatchPhase::Idle,
            cursor: 0,
            remaining: 0,
        }
    }

    /// Matcher accepting every valid event
    pub fn any() -> Self {
        Self::new(Vec::new(), Vec::new(), 0, StateFilter::All)
    }

    pub fn senders(&self) -> &[u32] {
        &self.senders
    }

    pub fn events(&self) -> &[u32] {
        &self.events
    }

    pub fn span_ms(&self) -> u32 {
        self.span_ms
    }

    pub fn filter(&self) -> StateFilter {
        self.filter
    }

    pub fn now_ms(&self) -> u32 {
        self.now_ms
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    /// Set the reference time for the retrospective window
    pub fn set_time(&mut self, now_ms: u32) {
        self.now_ms = now_ms;
    }

    /// Oldest time still inside the window, if the window is bounded
    pub fn window_start(&self) -> Option<u32> {
        (self.span_ms > 0).then(|| self.now_ms.saturating_sub(self.span_ms))
    }

    /// Rewind to the newest event of `list`
    pub fn reset(&mut self, list: &EventList) {
        self.phase = MatchPhase::Idle;
        self.cursor = 0;
        self.remaining = list.len();
    }

    fn in_window(&self, event: &Event) -> bool {
        self.window_start().map_or(true, |start| event.time >= start)
    }

    /// Side-effect free test of a single event
    pub fn check(&self, event: &Event) -> bool {
        event.has_valid_ids()
            && (self.senders.is_empty() || self.senders.contains(&event.sender_id))
            && (self.events.is_empty() || self.events.contains(&event.event_id))
            && self.in_window(event)
            && self.filter.accepts(event)
    }

    /// Advance the cursor to the next matching event of `list`
    ///
    /// Stops at the first event older than the window.
    pub fn advance<'a>(&mut self, list: &'a EventList) -> Option<&'a Event> {
        if self.phase == MatchPhase::Done {
            return None;
        }
        self.phase = MatchPhase::Scanning;

        while self.remaining > 0 {
            let index = self.cursor;
            self.cursor += 1;
            self.remaining -= 1;

            let Some(event) = list.get(index) else {
                break;
            };
            if !self.in_window(event) {
                break;
            }
            if self.check(event) {
                return Some(event);
            }
        }

        self.phase = MatchPhase::Done;
        None
    }
}

/// A listener's matcher bound to the shared list for one notification
pub struct Matches<'a> {
    matcher: &'a mut ListenerMatcher,
    list: &'a EventList,
}

impl<'a> Matches<'a> {
    pub fn new(matcher: &'a mut ListenerMatcher, list: &'a EventList) -> Self {
        Self { matcher, list }
    }

    /// Restart iteration from the newest event
    pub fn reset(&mut self) {
        self.matcher.reset(self.list);
    }

    /// Number of matching events currently in the list
    pub fn size(&self) -> usize {
        let mut probe = self.matcher.clone();
        probe.reset(self.list);
        std::iter::from_fn(|| probe.advance(self.list)).count()
    }

    /// Reference time of this notification
    pub fn now_ms(&self) -> u32 {
        self.matcher.now_ms()
    }

    pub fn matcher(&self) -> &ListenerMatcher {
        self.matcher
    }
}

impl<'a> Iterator for Matches<'a> {
    type Item = &'a Event;

    fn next(&mut self) -> Option<&'a Event> {
        self.matcher.advance(self.list)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
