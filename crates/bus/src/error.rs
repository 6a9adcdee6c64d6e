// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the event board

use thiserror::Error;

/// Registration and lifecycle failures
#[derive(Debug, Error)]
pub enum BusError {
    #[error("#sender exceeds available space '{capacity}'")]
    SenderCapacity { capacity: usize },
    #[error("#listener exceeds available space '{capacity}'")]
    ListenerCapacity { capacity: usize },
    #[error("sender '{name}' refused the event board")]
    SenderRejected { name: String },
    #[error("event board must be stopped")]
    NotStopped,
    #[error("failed to spawn event board worker: {0}")]
    Spawn(#[source] std::io::Error),
}

/// Reasons an event was not accepted for delivery
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum PublishError {
    #[error("event board is not running")]
    NotRunning,
    #[error("event queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },
    #[error("event carries an invalid sender or event id")]
    InvalidId,
}
