// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! eb-bus: the event board runtime
//!
//! This crate provides:
//! - `EventBus`, a bounded publish/subscribe board with periodic batched delivery
//! - The `EventSender` / `EventListener` capabilities components implement
//! - Per-listener matching over the shared ring buffer of recent events
//! - TOML configuration for capacities and the update interval

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod bus;
mod component;
mod config;
mod error;
mod list;
mod matcher;
mod print;
mod queue;
mod shared;
mod worker;

pub use bus::EventBus;
pub use component::{EventListener, EventSender};
pub use config::{BusConfig, ConfigError};
pub use error::{BusError, PublishError};
pub use list::EventList;
pub use matcher::{ListenerMatcher, MatchPhase, Matches};
pub use print::{write_table, TABLE_HEADER};
pub use queue::EventQueue;
pub use shared::{BusState, Publisher};
