// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Subscription addresses
//!
//! Syntax: `[event1,event2][@sender1,sender2]`
//!   - `click@mouse` matches `click` events from `mouse`
//!   - `click` matches `click` events from any sender
//!   - `@mouse` and `*@mouse` match every event from `mouse`
//!   - `` and `*@*` match everything
//!
//! Names are compared exactly: no trimming, no case folding.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

const WILDCARD: &str = "*";
const SEPARATOR: char = '@';
const DELIMITER: char = ',';

/// Parsed subscription target; an empty side matches everything
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EventAddress {
    events: Vec<String>,
    senders: Vec<String>,
}

impl EventAddress {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse an address string
    pub fn parse(address: &str) -> Self {
        let (events, senders) = match address.split_once(SEPARATOR) {
            Some((events, senders)) => (events, senders),
            None => (address, ""),
        };

        let mut parsed = Self::new();
        parsed.set_events(events);
        parsed.set_senders(senders);
        parsed
    }

    /// Replace the event side with a comma-separated list
    pub fn set_events(&mut self, names: &str) {
        self.events.clear();
        self.add_events(names);
    }

    /// Replace the sender side with a comma-separated list
    pub fn set_senders(&mut self, names: &str) {
        self.senders.clear();
        self.add_senders(names);
    }

    /// Append a comma-separated list to the event side
    pub fn add_events(&mut self, names: &str) {
        Self::merge(&mut self.events, names);
    }

    /// Append a comma-separated list to the sender side
    pub fn add_senders(&mut self, names: &str) {
        Self::merge(&mut self.senders, names);
    }

    /// Reset both sides to wildcards
    pub fn clear(&mut self) {
        self.events.clear();
        self.senders.clear();
    }

    fn merge(side: &mut Vec<String>, names: &str) {
        for name in names.split(DELIMITER) {
            if name.is_empty() {
                continue;
            }
            // A wildcard swallows the whole side
            if name == WILDCARD {
                side.clear();
                return;
            }
            if !side.iter().any(|n| n == name) {
                side.push(name.to_string());
            }
        }
    }

    pub fn events(&self) -> &[String] {
        &self.events
    }

    pub fn senders(&self) -> &[String] {
        &self.senders
    }

    pub fn matches_all_events(&self) -> bool {
        self.events.is_empty()
    }

    pub fn matches_all_senders(&self) -> bool {
        self.senders.is_empty()
    }

    fn write_side(f: &mut fmt::Formatter<'_>, side: &[String]) -> fmt::Result {
        if side.is_empty() {
            return f.write_str(WILDCARD);
        }
        for (i, name) in side.iter().enumerate() {
            if i > 0 {
                write!(f, "{}", DELIMITER)?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}

impl fmt::Display for EventAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Self::write_side(f, &self.events)?;
        write!(f, "{}", SEPARATOR)?;
        Self::write_side(f, &self.senders)
    }
}

impl FromStr for EventAddress {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

#[cfg(test)]
#[path = "address_tests.rs"]
mod tests;
