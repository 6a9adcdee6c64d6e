// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Listener-side filters: event state and retrospective time span

use crate::event::{Event, EventState};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Which events a listener accepts, by state or duration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StateFilter {
    #[default]
    All,
    Completed,
    Continued,
    /// Only events without a duration
    ZeroDur,
    /// Only events with a duration
    NonZeroDur,
}

impl StateFilter {
    pub fn accepts(&self, event: &Event) -> bool {
        match self {
            StateFilter::All => true,
            StateFilter::Completed => event.state == EventState::Completed,
            StateFilter::Continued => event.state == EventState::Continued,
            StateFilter::ZeroDur => event.duration == 0,
            StateFilter::NonZeroDur => event.duration > 0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StateFilter::All => "all",
            StateFilter::Completed => "completed",
            StateFilter::Continued => "continued",
            StateFilter::ZeroDur => "zerodur",
            StateFilter::NonZeroDur => "nonzerodur",
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown state filter '{0}'")]
pub struct StateFilterError(pub String);

impl FromStr for StateFilter {
    type Err = StateFilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(StateFilter::All),
            "completed" => Ok(StateFilter::Completed),
            "continued" => Ok(StateFilter::Continued),
            "zerodur" => Ok(StateFilter::ZeroDur),
            "nonzerodur" => Ok(StateFilter::NonZeroDur),
            other => Err(StateFilterError(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum SpanError {
    #[error("invalid time span '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("time span '{0}' does not fit in u32 milliseconds")]
    TooLarge(String),
}

/// Parse a listener time span into milliseconds
///
/// Plain numbers are milliseconds (`"1500"`); anything else goes through
/// humantime (`"2s"`, `"250ms"`, `"1m 30s"`). `"0"` disables the window.
pub fn parse_span(input: &str) -> Result<u32, SpanError> {
    if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
        return input
            .parse::<u32>()
            .map_err(|_| SpanError::TooLarge(input.to_string()));
    }

    let duration = humantime::parse_duration(input).map_err(|source| SpanError::Invalid {
        input: input.to_string(),
        source,
    })?;
    u32::try_from(duration.as_millis()).map_err(|_| SpanError::TooLarge(input.to_string()))
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
