// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Runtime for the file cleaner agent

use crate::cycle::{CycleStats, MaintenanceCycle};
use crate::error::RuntimeError;
use crate::handlers::{dispatch_table, AgentState};
use crate::timers::TimerQueue;
use fc_adapters::{Cleaner, ConfigStore, DirectoryProbe};
use fc_core::{Clock, Effect, Event, EventRouter, ScheduleEvent, ScheduleState, TracedEffect};
use std::collections::VecDeque;
use std::time::Instant;
use tracing::Instrument;

/// Runtime adapter dependencies
pub struct RuntimeDeps<S, P, K> {
    pub config: S,
    pub probe: P,
    pub cleaner: K,
}

/// What executing one effect produced
#[derive(Default)]
struct Executed {
    effects: Vec<Effect>,
    event: Option<Event>,
}

/// Runtime that owns the dispatch table, schedule and timers
pub struct Runtime<S, P, K, C: Clock> {
    cycle: MaintenanceCycle<S, P, K>,
    router: EventRouter<AgentState>,
    state: AgentState,
    timers: TimerQueue,
    clock: C,
    stats: CycleStats,
    quit: bool,
}

impl<S, P, K, C> Runtime<S, P, K, C>
where
    S: ConfigStore,
    P: DirectoryProbe,
    K: Cleaner,
    C: Clock,
{
    /// Create a new runtime
    pub fn new(deps: RuntimeDeps<S, P, K>, clock: C) -> Self {
        Self {
            cycle: MaintenanceCycle::new(deps),
            router: dispatch_table(),
            state: AgentState::default(),
            timers: TimerQueue::new(),
            clock,
            stats: CycleStats::default(),
            quit: false,
        }
    }

    /// Replace the dispatch table
    pub fn with_router(mut self, router: EventRouter<AgentState>) -> Self {
        self.router = router;
        self
    }

    /// Run the first cycle.
    ///
    /// Returns any events that were produced by effects (to be fed back into the event loop).
    pub async fn startup(&mut self) -> Vec<Event> {
        tracing::info!("running initial cycle");
        self.execute_all(vec![Effect::RunCycle]).await
    }

    /// Handle an incoming event
    ///
    /// Returns any events that were produced by effects (to be fed back into the event loop).
    pub async fn handle_event(&mut self, event: Event) -> Result<Vec<Event>, RuntimeError> {
        tracing::debug!(event = %event.name(), "handling event");
        let effects = self.router.dispatch(&mut self.state, &event)?;
        Ok(self.execute_all(effects).await)
    }

    /// Handle an event and everything it feeds back, until nothing is left
    pub async fn process(&mut self, event: Event) -> Result<(), RuntimeError> {
        let mut pending = VecDeque::from([event]);
        while let Some(event) = pending.pop_front() {
            pending.extend(self.handle_event(event).await?);
        }
        Ok(())
    }

    /// Timers due at the clock's current instant
    pub fn fired_timers(&mut self) -> Vec<Event> {
        let now = self.clock.now();
        self.timers.fired_timers(now)
    }

    /// Process every timer that is due
    pub async fn tick(&mut self) -> Result<(), RuntimeError> {
        for event in self.fired_timers() {
            self.process(event).await?;
        }
        Ok(())
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.timers.next_deadline()
    }

    pub fn schedule_state(&self) -> &ScheduleState {
        self.state.scheduler.state()
    }

    pub fn state(&self) -> &AgentState {
        &self.state
    }

    pub fn timers(&self) -> &TimerQueue {
        &self.timers
    }

    pub fn stats(&self) -> &CycleStats {
        &self.stats
    }

    /// Whether a handler asked the loop to exit
    pub fn quit_requested(&self) -> bool {
        self.quit
    }

    async fn execute_all(&mut self, effects: Vec<Effect>) -> Vec<Event> {
        let mut queue = VecDeque::from(effects);
        let mut result_events = Vec::new();

        while let Some(effect) = queue.pop_front() {
            let executed = self.execute(effect).await;
            queue.extend(executed.effects);
            result_events.extend(executed.event);
        }

        result_events
    }

    /// Execute a single effect with tracing
    async fn execute(&mut self, effect: Effect) -> Executed {
        let span = tracing::info_span!("effect", effect = effect.name());

        async {
            tracing::info!(fields = ?effect.fields(), "executing");

            let start = std::time::Instant::now();
            let executed = self.execute_inner(effect).await;

            tracing::info!(
                elapsed_ms = start.elapsed().as_millis() as u64,
                has_event = executed.event.is_some(),
                "completed"
            );
            executed
        }
        .instrument(span)
        .await
    }

    async fn execute_inner(&mut self, effect: Effect) -> Executed {
        match effect {
            Effect::SetTimer { id, duration } => {
                let now = self.clock.now();
                self.timers.set_timer(id, duration, now);
                Executed::default()
            }

            Effect::CancelTimer { id } => {
                self.timers.cancel_timer(&id);
                Executed::default()
            }

            Effect::RunCycle => {
                if self.state.scheduler.is_disarmed() {
                    tracing::info!("schedule disarmed, skipping cycle");
                    return Executed::default();
                }

                let outcome = self.cycle.run().await;
                self.stats.record(&outcome);

                let schedule_event = match outcome {
                    Ok(config) => {
                        tracing::info!(
                            check_frequency = config.check_frequency_minutes(),
                            "cycle succeeded"
                        );
                        ScheduleEvent::CycleSucceeded {
                            interval_minutes: config.check_frequency_minutes(),
                        }
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "cycle failed, schedule stopped");
                        ScheduleEvent::CycleFailed {
                            reason: e.to_string(),
                        }
                    }
                };

                Executed {
                    effects: self.state.apply(schedule_event),
                    event: None,
                }
            }

            Effect::Redraw => Executed {
                effects: vec![],
                event: Some(Event::Paint),
            },

            Effect::Quit => {
                self.quit = true;
                Executed::default()
            }

            Effect::DefaultHandling { kind } => {
                tracing::trace!(?kind, "default handling");
                Executed::default()
            }
        }
    }
}

#[cfg(test)]
#[path = "runtime_tests.rs"]
mod tests;
