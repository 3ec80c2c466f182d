// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Effects requested by handlers and the scheduler, executed by the runtime

use crate::event::EventKind;
use crate::scheduler::TimerId;
use crate::traced::TracedEffect;
use std::time::Duration;

/// Side effects that pure state machines request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Arm a timer, replacing any deadline already set for the same id
    SetTimer { id: TimerId, duration: Duration },
    /// Disarm a timer
    CancelTimer { id: TimerId },
    /// Run one maintenance cycle
    RunCycle,
    /// Invalidate the surface so it gets repainted
    Redraw,
    /// Leave the event loop
    Quit,
    /// Hand an unmapped event to the environment's default handling
    DefaultHandling { kind: EventKind },
}

impl TracedEffect for Effect {
    fn name(&self) -> &'static str {
        match self {
            Effect::SetTimer { .. } => "set_timer",
            Effect::CancelTimer { .. } => "cancel_timer",
            Effect::RunCycle => "run_cycle",
            Effect::Redraw => "redraw",
            Effect::Quit => "quit",
            Effect::DefaultHandling { .. } => "default_handling",
        }
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        match self {
            Effect::SetTimer { id, duration } => vec![
                ("timer_id", id.to_string()),
                ("duration_ms", duration.as_millis().to_string()),
            ],
            Effect::CancelTimer { id } => vec![("timer_id", id.to_string())],
            Effect::DefaultHandling { kind } => vec![("kind", format!("{:?}", kind))],
            Effect::RunCycle | Effect::Redraw | Effect::Quit => vec![],
        }
    }
}

#[cfg(test)]
#[path = "effect_tests.rs"]
mod tests;
