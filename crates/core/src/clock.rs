// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline clock abstraction for testable time handling

use std::sync::{Arc, Mutex};
use std::time::Instant;

/// Elapsed time since pipeline start, in milliseconds
///
/// Implementations must be monotonically non-decreasing.
pub trait PipelineClock: Clone + Send + Sync + 'static {
    fn now_ms(&self) -> u32;
}

/// Real clock counting from its creation
#[derive(Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    /// Clock whose zero is the given instant
    pub fn starting_at(start: Instant) -> Self {
        Self { start }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl PipelineClock for SystemClock {
    fn now_ms(&self) -> u32 {
        u32::try_from(self.start.elapsed().as_millis()).unwrap_or(u32::MAX)
    }
}

/// Fake clock for testing with controllable time
#[derive(Clone, Default)]
pub struct FakeClock {
    current: Arc<Mutex<u32>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock reading `ms` until moved
    pub fn at(ms: u32) -> Self {
        let clock = Self::new();
        clock.set(ms);
        clock
    }

    /// Advance the clock by `ms`, saturating
    pub fn advance(&self, ms: u32) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = current.saturating_add(ms);
    }

    /// Set the clock to a specific time
    pub fn set(&self, ms: u32) {
        let mut current = self.current.lock().unwrap_or_else(|e| e.into_inner());
        *current = ms;
    }
}

impl PipelineClock for FakeClock {
    fn now_ms(&self) -> u32 {
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
