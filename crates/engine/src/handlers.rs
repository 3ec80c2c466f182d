// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Dispatch table for the agent's event loop

use fc_core::{
    Effect, Event, EventKind, EventRecord, EventRouter, HandlerError, ScheduleEvent, Scheduler,
};

/// Everything the handlers are allowed to touch
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AgentState {
    pub scheduler: Scheduler,
    /// Paint events handled
    pub paints: u64,
    /// Background erases handled
    pub erases: u64,
}

impl AgentState {
    /// Feed the schedule one input, keeping the new state
    pub fn apply(&mut self, event: ScheduleEvent) -> Vec<Effect> {
        let (next, effects) = self.scheduler.transition(event);
        self.scheduler = next;
        effects
    }
}

/// The agent's handlers, in lookup order
pub fn dispatch_table() -> EventRouter<AgentState> {
    EventRouter::with_default_fallback(vec![
        EventRecord::new(EventKind::Paint, on_paint),
        EventRecord::new(EventKind::EraseBackground, on_erase_background),
        EventRecord::new(EventKind::DisplayChange, on_display_change),
        EventRecord::new(EventKind::Close, on_shutdown),
        EventRecord::new(EventKind::EndSession, on_shutdown),
        EventRecord::new(EventKind::Timer, on_timer),
    ])
}

fn on_paint(state: &mut AgentState, _: &Event) -> Result<Vec<Effect>, HandlerError> {
    state.paints += 1;
    Ok(vec![])
}

// Handled here so the default erase never runs
fn on_erase_background(state: &mut AgentState, _: &Event) -> Result<Vec<Effect>, HandlerError> {
    state.erases += 1;
    Ok(vec![])
}

fn on_display_change(_: &mut AgentState, _: &Event) -> Result<Vec<Effect>, HandlerError> {
    Ok(vec![Effect::Redraw])
}

fn on_shutdown(state: &mut AgentState, event: &Event) -> Result<Vec<Effect>, HandlerError> {
    tracing::info!(event = %event.name(), "shutting down");
    let mut effects = state.apply(ScheduleEvent::Shutdown);
    effects.push(Effect::Quit);
    Ok(effects)
}

fn on_timer(state: &mut AgentState, event: &Event) -> Result<Vec<Effect>, HandlerError> {
    let Event::Timer { id } = event else {
        return Err(HandlerError::UnexpectedEvent {
            kind: EventKind::Timer,
            event: event.name(),
        });
    };
    Ok(state.apply(ScheduleEvent::TimerFired { id: id.clone() }))
}

#[cfg(test)]
#[path = "handlers_tests.rs"]
mod tests;
