// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Time source for cleanup deadlines
//!
//! The runtime stamps each armed timer with `now() + arm_delay(minutes)`.
//! Tests swap in [`FakeClock`] so a multi-day interval elapses instantly.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Where the runtime reads "now" when arming and polling timers
pub trait Clock: Clone + Send + Sync {
    fn now(&self) -> Instant;
}

/// Monotonic clock used by the daemon
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-cranked clock. Clones share one instant, so a test can hold a
/// handle while the runtime owns another.
#[derive(Clone, Debug)]
pub struct FakeClock {
    instant: Arc<Mutex<Instant>>,
}

impl FakeClock {
    pub fn new() -> Self {
        Self {
            instant: Arc::new(Mutex::new(Instant::now())),
        }
    }

    pub fn advance(&self, duration: Duration) {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner()) += duration;
    }

    /// Advance by whole minutes, the unit of `check_frequency`
    pub fn advance_minutes(&self, minutes: u64) {
        self.advance(Duration::from_secs(minutes * 60));
    }

    /// Jump to `deadline` so a timer armed for it is due. Never moves backwards.
    pub fn advance_to(&self, deadline: Instant) {
        let mut instant = self.instant.lock().unwrap_or_else(|e| e.into_inner());
        if deadline > *instant {
            *instant = deadline;
        }
    }
}

impl Default for FakeClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for FakeClock {
    fn now(&self) -> Instant {
        *self.instant.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
