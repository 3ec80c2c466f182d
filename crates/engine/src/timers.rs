// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Timer table: deadlines keyed by timer id

use fc_core::{Event, TimerId};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Pending timers. At most one deadline exists per id.
#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: HashMap<TimerId, Instant>,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm `id` to fire `duration` after `now`, replacing any existing deadline
    pub fn set_timer(&mut self, id: TimerId, duration: Duration, now: Instant) {
        // Saturate far-future deadlines instead of overflowing Instant
        let deadline = now
            .checked_add(duration)
            .unwrap_or_else(|| far_future(now));
        self.timers.insert(id, deadline);
    }

    /// Disarm `id`. Returns whether a deadline was pending.
    pub fn cancel_timer(&mut self, id: &TimerId) -> bool {
        self.timers.remove(id).is_some()
    }

    /// Remove and return every timer due at or before `now`, earliest first
    pub fn fired_timers(&mut self, now: Instant) -> Vec<Event> {
        let mut due: Vec<(TimerId, Instant)> = self
            .timers
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (id.clone(), *deadline))
            .collect();
        due.sort_by_key(|(_, deadline)| *deadline);

        for (id, _) in &due {
            self.timers.remove(id);
        }

        due.into_iter().map(|(id, _)| Event::Timer { id }).collect()
    }

    /// Earliest pending deadline
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.values().min().copied()
    }

    pub fn deadline(&self, id: &TimerId) -> Option<Instant> {
        self.timers.get(id).copied()
    }

    pub fn is_armed(&self, id: &TimerId) -> bool {
        self.timers.contains_key(id)
    }

    pub fn has_timers(&self) -> bool {
        !self.timers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }
}

/// Roughly a century past `now`, or `now` itself if even that overflows
fn far_future(now: Instant) -> Instant {
    const CENTURY: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);
    now.checked_add(CENTURY).unwrap_or(now)
}

#[cfg(test)]
#[path = "timers_tests.rs"]
mod tests;
