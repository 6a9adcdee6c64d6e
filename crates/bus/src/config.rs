// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Event board configuration

use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

/// Errors loading or saving a configuration file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Sizing and scheduling of an event board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BusConfig {
    /// Ring buffer and queue size
    pub event_capacity: usize,
    /// Maximum registered senders
    pub sender_capacity: usize,
    /// Maximum registered listeners
    pub listener_capacity: usize,
    /// Worker tick period
    #[serde(with = "humantime_serde")]
    pub update_interval: Duration,
}

impl Default for BusConfig {
    fn default() -> Self {
        Self {
            event_capacity: 100,
            sender_capacity: 50,
            listener_capacity: 50,
            update_interval: Duration::from_millis(10),
        }
    }
}

impl BusConfig {
    /// Copy with zero capacities and a zero interval raised to their minimum
    pub fn normalized(&self) -> Self {
        Self {
            event_capacity: self.event_capacity.max(1),
            sender_capacity: self.sender_capacity.max(1),
            listener_capacity: self.listener_capacity.max(1),
            update_interval: self.update_interval.max(Duration::from_millis(1)),
        }
    }

    pub fn with_event_capacity(self, event_capacity: usize) -> Self {
        Self {
            event_capacity,
            ..self
        }
    }

    pub fn with_sender_capacity(self, sender_capacity: usize) -> Self {
        Self {
            sender_capacity,
            ..self
        }
    }

    pub fn with_listener_capacity(self, listener_capacity: usize) -> Self {
        Self {
            listener_capacity,
            ..self
        }
    }

    pub fn with_update_interval(self, update_interval: Duration) -> Self {
        Self {
            update_interval,
            ..self
        }
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string(self)?)
    }

    /// Load a config file; missing keys take their defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, self.to_toml()?)?;
        Ok(())
    }

    /// Load a config file, writing the defaults first if it does not exist
    pub fn load_or_init(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Self::from_toml(&content),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                let config = Self::default();
                config.save(path)?;
                tracing::info!(path = %path.display(), "wrote default event board config");
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
