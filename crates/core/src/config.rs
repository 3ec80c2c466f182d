// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Agent configuration
//!
//! The agent reads a small JSON document before every cycle:
//!
//! ```json
//! { "path_to_clean": "/var/spool/drop", "check_frequency": 15 }
//! ```
//!
//! `check_frequency` is in minutes. Anything that does not yield both fields
//! with the right types is a [`ConfigError`] and never reaches the scheduler.

use crate::scheduler::arm_delay;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// File name of the configuration document, next to the executable
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Documents shorter than this are treated as absent without parsing
pub const MIN_CONFIG_BYTES: usize = 10;

/// Errors produced while loading or validating the configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("config unreadable: {0}")]
    Unreadable(String),
    #[error("config too small: {len} bytes (minimum {min})", min = MIN_CONFIG_BYTES)]
    TooSmall { len: usize },
    #[error("config parse error: {0}")]
    Parse(String),
    #[error("check_frequency must be a whole number of minutes between 1 and {max}, got {value}", max = u32::MAX)]
    InvalidFrequency { value: String },
}

/// Validated agent configuration, immutable for the cycle that loaded it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    target_path: String,
    check_frequency_minutes: u32,
}

/// Wire shape of the document. Unknown keys are ignored.
#[derive(Deserialize)]
struct RawConfig {
    path_to_clean: String,
    check_frequency: serde_json::Number,
}

impl Configuration {
    /// Build a configuration directly; the frequency must be positive
    pub fn new(
        target_path: impl Into<String>,
        check_frequency_minutes: u32,
    ) -> Result<Self, ConfigError> {
        if check_frequency_minutes == 0 {
            return Err(ConfigError::InvalidFrequency {
                value: "0".to_string(),
            });
        }
        Ok(Self {
            target_path: target_path.into(),
            check_frequency_minutes,
        })
    }

    /// Parse a raw document.
    ///
    /// Buffers under [`MIN_CONFIG_BYTES`] are rejected before any JSON
    /// parsing is attempted.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        if bytes.len() < MIN_CONFIG_BYTES {
            return Err(ConfigError::TooSmall { len: bytes.len() });
        }

        let raw: RawConfig =
            serde_json::from_slice(bytes).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let minutes = coerce_minutes(&raw.check_frequency)?;
        tracing::trace!(path = %raw.path_to_clean, minutes, "parsed config");

        Self::new(raw.path_to_clean, minutes)
    }

    /// Directory the cleanup operation should run against
    pub fn target_path(&self) -> &str {
        &self.target_path
    }

    /// Minutes between cycles
    pub fn check_frequency_minutes(&self) -> u32 {
        self.check_frequency_minutes
    }

    /// Delay until the next cycle
    pub fn check_interval(&self) -> Duration {
        arm_delay(self.check_frequency_minutes)
    }
}

/// Integer coercion for `check_frequency`: integers pass through, floats are
/// truncated toward zero. The result must fit a positive `u32`.
fn coerce_minutes(number: &serde_json::Number) -> Result<u32, ConfigError> {
    let invalid = || ConfigError::InvalidFrequency {
        value: number.to_string(),
    };

    let whole = if let Some(n) = number.as_u64() {
        n
    } else if number.as_i64().is_some() {
        // Negative integer
        return Err(invalid());
    } else {
        match number.as_f64() {
            Some(f) if f.is_finite() && f >= 1.0 && f < 4_294_967_296.0 => f.trunc() as u64,
            _ => return Err(invalid()),
        }
    };

    match u32::try_from(whole) {
        Ok(0) | Err(_) => Err(invalid()),
        Ok(minutes) => Ok(minutes),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
