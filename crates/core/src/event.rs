// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event value type carried through the board
//!
//! An event is a timestamped message identified by a sender id and an
//! event-name id. Both ids come from an [`IdRegistry`](crate::IdRegistry);
//! the payload is an owned byte buffer, so cloning an event copies it.

use crate::registry::INVALID_ID;
use serde::Serialize;

/// Lifecycle state of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventState {
    /// The event is finished and will not be updated again
    #[default]
    Completed,
    /// The event is ongoing; later events with the same glue id may follow
    Continued,
}

impl EventState {
    pub fn name(&self) -> &'static str {
        match self {
            EventState::Completed => "COMPLETED",
            EventState::Continued => "CONTINUED",
        }
    }
}

/// How the payload bytes are to be interpreted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PayloadKind {
    #[default]
    Empty,
    /// Little-endian `f32` values
    Tuple,
    /// Pairs of little-endian `u32` name id and `f32` value
    Map,
    /// UTF-8 text
    String,
    /// Opaque bytes
    Bytes,
}

impl PayloadKind {
    pub fn name(&self) -> &'static str {
        match self {
            PayloadKind::Empty => "EMPTY",
            PayloadKind::Tuple => "TUPLE",
            PayloadKind::Map => "MAP",
            PayloadKind::String => "STRING",
            PayloadKind::Bytes => "BYTES",
        }
    }
}

const F32_SIZE: usize = std::mem::size_of::<f32>();
const MAP_ENTRY_SIZE: usize = std::mem::size_of::<u32>() + F32_SIZE;

/// A discrete, timestamped event
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Event {
    pub sender_id: u32,
    pub event_id: u32,
    /// Start time in milliseconds since pipeline start
    pub time: u32,
    /// Duration in milliseconds
    pub duration: u32,
    /// Confidence in `[0, 1]`
    pub prob: f32,
    pub state: EventState,
    /// Shared by sub-events that belong to the same logical event
    pub glue_id: Option<u32>,
    pub kind: PayloadKind,
    pub payload: Vec<u8>,
}

impl Event {
    pub fn new(sender_id: u32, event_id: u32) -> Self {
        Self {
            sender_id,
            event_id,
            time: 0,
            duration: 0,
            prob: 1.0,
            state: EventState::Completed,
            glue_id: None,
            kind: PayloadKind::Empty,
            payload: Vec::new(),
        }
    }

    pub fn at(self, time: u32) -> Self {
        Self { time, ..self }
    }

    pub fn lasting(self, duration: u32) -> Self {
        Self { duration, ..self }
    }

    pub fn with_state(self, state: EventState) -> Self {
        Self { state, ..self }
    }

    /// Set the confidence, clamped to `[0, 1]`
    pub fn with_prob(self, prob: f32) -> Self {
        let prob = if prob.is_nan() { 0.0 } else { prob.clamp(0.0, 1.0) };
        Self { prob, ..self }
    }

    pub fn with_glue(self, glue_id: u32) -> Self {
        Self {
            glue_id: Some(glue_id),
            ..self
        }
    }

    pub fn with_string(self, text: &str) -> Self {
        Self {
            kind: PayloadKind::String,
            payload: text.as_bytes().to_vec(),
            ..self
        }
    }

    pub fn with_tuple(self, values: &[f32]) -> Self {
        let payload = values.iter().flat_map(|v| v.to_le_bytes()).collect();
        Self {
            kind: PayloadKind::Tuple,
            payload,
            ..self
        }
    }

    pub fn with_map(self, entries: &[(u32, f32)]) -> Self {
        let mut payload = Vec::with_capacity(entries.len() * MAP_ENTRY_SIZE);
        for (id, value) in entries {
            payload.extend_from_slice(&id.to_le_bytes());
            payload.extend_from_slice(&value.to_le_bytes());
        }
        Self {
            kind: PayloadKind::Map,
            payload,
            ..self
        }
    }

    pub fn with_bytes(self, bytes: Vec<u8>) -> Self {
        let kind = if bytes.is_empty() {
            PayloadKind::Empty
        } else {
            PayloadKind::Bytes
        };
        Self {
            kind,
            payload: bytes,
            ..self
        }
    }

    /// Both ids were resolved through a registry
    pub fn has_valid_ids(&self) -> bool {
        self.sender_id != INVALID_ID && self.event_id != INVALID_ID
    }

    /// Payload size in bytes
    pub fn size(&self) -> usize {
        self.payload.len()
    }

    /// End of the event (`time + duration`), saturating
    pub fn end(&self) -> u32 {
        self.time.saturating_add(self.duration)
    }

    /// Payload as text, if this is a string event
    pub fn as_str(&self) -> Option<&str> {
        match self.kind {
            PayloadKind::String => std::str::from_utf8(&self.payload).ok(),
            _ => None,
        }
    }

    /// Payload as tuple values, if this is a well-formed tuple event
    pub fn tuple(&self) -> Option<Vec<f32>> {
        if self.kind != PayloadKind::Tuple || self.payload.len() % F32_SIZE != 0 {
            return None;
        }
        Some(
            self.payload
                .chunks_exact(F32_SIZE)
                .map(|c| f32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                .collect(),
        )
    }

    /// Payload as `(name id, value)` pairs, if this is a well-formed map event
    pub fn map(&self) -> Option<Vec<(u32, f32)>> {
        if self.kind != PayloadKind::Map || self.payload.len() % MAP_ENTRY_SIZE != 0 {
            return None;
        }
        Some(
            self.payload
                .chunks_exact(MAP_ENTRY_SIZE)
                .map(|c| {
                    (
                        u32::from_le_bytes([c[0], c[1], c[2], c[3]]),
                        f32::from_le_bytes([c[4], c[5], c[6], c[7]]),
                    )
                })
                .collect(),
        )
    }
}

impl Default for Event {
    fn default() -> Self {
        Self::new(INVALID_ID, INVALID_ID)
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
