// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cleanup schedule state machine
//!
//! The schedule owns one logical timer. A successful cycle arms it for
//! `check_frequency` minutes; when it fires the timer is consumed and a new
//! cycle runs, which re-arms only if it succeeds. A failed cycle leaves the
//! schedule unarmed: there is no retry at a default interval. Shutdown is
//! terminal.

use crate::effect::Effect;
use std::time::Duration;

const MILLIS_PER_MINUTE: u64 = 60_000;

/// Id of the single recurring cleanup timer
pub const CLEANUP_TIMER_ID: &str = "cleanup";

/// Identifier for a timer
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TimerId(pub String);

impl TimerId {
    /// The well-known cleanup timer
    pub fn cleanup() -> Self {
        TimerId(CLEANUP_TIMER_ID.to_string())
    }
}

impl std::fmt::Display for TimerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TimerId {
    fn from(s: String) -> Self {
        TimerId(s)
    }
}

impl From<&str> for TimerId {
    fn from(s: &str) -> Self {
        TimerId(s.to_string())
    }
}

/// Delay before the next cycle: exactly `60_000 * minutes` milliseconds
pub fn arm_delay(minutes: u32) -> Duration {
    Duration::from_millis(MILLIS_PER_MINUTE * u64::from(minutes))
}

/// Where the schedule stands
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleState {
    /// No timer pending: before the first successful cycle, while a fired
    /// timer's cycle runs, or after a failed cycle
    Unarmed,
    /// Timer pending for `interval_minutes`
    Armed { interval_minutes: u32 },
    /// Shut down; nothing further runs
    Disarmed,
}

/// Inputs that move the schedule
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ScheduleEvent {
    /// A cycle finished and loaded this interval
    CycleSucceeded { interval_minutes: u32 },
    /// A cycle stopped early
    CycleFailed { reason: String },
    /// A timer expired
    TimerFired { id: TimerId },
    /// Close or session end
    Shutdown,
}

/// The schedule for one named timer
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scheduler {
    timer_id: TimerId,
    state: ScheduleState,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(TimerId::cleanup())
    }
}

impl Scheduler {
    pub fn new(timer_id: TimerId) -> Self {
        Self {
            timer_id,
            state: ScheduleState::Unarmed,
        }
    }

    /// Pure transition function - returns new schedule and effects
    pub fn transition(&self, event: ScheduleEvent) -> (Scheduler, Vec<Effect>) {
        match (&self.state, event) {
            (ScheduleState::Disarmed, event) => {
                tracing::debug!(?event, "schedule disarmed, ignoring");
                (self.clone(), vec![])
            }

            // Unarmed/Armed → Armed: same id, so any pending deadline is replaced
            (
                ScheduleState::Unarmed | ScheduleState::Armed { .. },
                ScheduleEvent::CycleSucceeded { interval_minutes },
            ) => {
                let effects = vec![Effect::SetTimer {
                    id: self.timer_id.clone(),
                    duration: arm_delay(interval_minutes),
                }];
                (self.with_state(ScheduleState::Armed { interval_minutes }), effects)
            }

            // Fail-stop: never left armed after a failure
            (ScheduleState::Armed { .. }, ScheduleEvent::CycleFailed { reason }) => {
                tracing::debug!(reason = %reason, "cycle failed while armed, disarming timer");
                let effects = vec![Effect::CancelTimer {
                    id: self.timer_id.clone(),
                }];
                (self.with_state(ScheduleState::Unarmed), effects)
            }
            (ScheduleState::Unarmed, ScheduleEvent::CycleFailed { reason }) => {
                tracing::debug!(reason = %reason, "cycle failed, schedule stays unarmed");
                (self.clone(), vec![])
            }

            // Armed → Unarmed: consume the fired timer, then run the next cycle
            (ScheduleState::Armed { .. }, ScheduleEvent::TimerFired { id })
                if id == self.timer_id =>
            {
                let effects = vec![Effect::CancelTimer { id }, Effect::RunCycle];
                (self.with_state(ScheduleState::Unarmed), effects)
            }
            (_, ScheduleEvent::TimerFired { id }) => {
                tracing::debug!(timer_id = %id, state = ?self.state, "ignoring stale timer");
                (self.clone(), vec![])
            }

            (ScheduleState::Armed { .. }, ScheduleEvent::Shutdown) => {
                let effects = vec![Effect::CancelTimer {
                    id: self.timer_id.clone(),
                }];
                (self.with_state(ScheduleState::Disarmed), effects)
            }
            (ScheduleState::Unarmed, ScheduleEvent::Shutdown) => {
                (self.with_state(ScheduleState::Disarmed), vec![])
            }
        }
    }

    fn with_state(&self, state: ScheduleState) -> Scheduler {
        Scheduler {
            state,
            ..self.clone()
        }
    }

    pub fn state(&self) -> &ScheduleState {
        &self.state
    }

    pub fn timer_id(&self) -> &TimerId {
        &self.timer_id
    }

    pub fn is_armed(&self) -> bool {
        matches!(self.state, ScheduleState::Armed { .. })
    }

    pub fn is_disarmed(&self) -> bool {
        matches!(self.state, ScheduleState::Disarmed)
    }

    /// Interval of the pending timer, if armed
    pub fn interval(&self) -> Option<Duration> {
        match self.state {
            ScheduleState::Armed { interval_minutes } => Some(arm_delay(interval_minutes)),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "scheduler_tests.rs"]
mod tests;
