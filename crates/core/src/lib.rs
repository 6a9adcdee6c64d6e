// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! eb-core: value types shared by the event board
//!
//! This crate provides:
//! - `Event` with its state and payload kinds
//! - `EventAddress` subscription strings (`events@senders`)
//! - Listener filters (`StateFilter`, time spans)
//! - Collaborator traits for id interning and the pipeline clock

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod address;
pub mod clock;
pub mod event;
pub mod filter;
pub mod registry;

pub use address::EventAddress;
pub use clock::{FakeClock, PipelineClock, SystemClock};
pub use event::{Event, EventState, PayloadKind};
pub use filter::{parse_span, SpanError, StateFilter, StateFilterError};
pub use registry::{IdRegistry, InternRegistry, INVALID_ID};
