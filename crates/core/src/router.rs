// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Table-driven event dispatch
//!
//! An [`EventRouter`] holds an ordered list of [`EventRecord`]s. Dispatch
//! scans the list front to back and invokes the first record whose kind
//! matches, so an earlier record shadows any later one registered for the
//! same kind. Events with no record go to the router's fallback handler.
//!
//! The router owns no state of its own: everything a handler touches is
//! passed in as the context `C`.

use crate::effect::Effect;
use crate::event::{Event, EventKind};
use thiserror::Error;

/// Errors raised by handlers. The router never catches these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HandlerError {
    #[error("{kind:?} handler received unexpected event {event}")]
    UnexpectedEvent { kind: EventKind, event: String },
    #[error("{kind:?} handler failed: {message}")]
    Failed { kind: EventKind, message: String },
}

/// A handler receives the dispatch context and the event with its parameters
pub type Handler<C> = fn(&mut C, &Event) -> Result<Vec<Effect>, HandlerError>;

/// One row of the dispatch table
pub struct EventRecord<C> {
    pub kind: EventKind,
    pub handler: Handler<C>,
}

impl<C> EventRecord<C> {
    pub fn new(kind: EventKind, handler: Handler<C>) -> Self {
        Self { kind, handler }
    }
}

impl<C> Clone for EventRecord<C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<C> Copy for EventRecord<C> {}

impl<C> std::fmt::Debug for EventRecord<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRecord")
            .field("kind", &self.kind)
            .finish_non_exhaustive()
    }
}

/// Ordered dispatch table with an explicit fallback
pub struct EventRouter<C> {
    records: Vec<EventRecord<C>>,
    fallback: Handler<C>,
}

impl<C> EventRouter<C> {
    pub fn new(records: Vec<EventRecord<C>>, fallback: Handler<C>) -> Self {
        Self { records, fallback }
    }

    /// Router whose unmapped events go to [`pass_through`]
    pub fn with_default_fallback(records: Vec<EventRecord<C>>) -> Self {
        Self::new(records, pass_through::<C>)
    }

    /// First record registered for `kind`, if any
    pub fn lookup(&self, kind: EventKind) -> Option<&EventRecord<C>> {
        self.records.iter().find(|record| record.kind == kind)
    }

    /// Route an event to its handler, or to the fallback when unmapped.
    ///
    /// Handler errors propagate unchanged to the caller.
    pub fn dispatch(&self, ctx: &mut C, event: &Event) -> Result<Vec<Effect>, HandlerError> {
        match self.lookup(event.kind()) {
            Some(record) => {
                tracing::trace!(event = %event.name(), "dispatching");
                (record.handler)(ctx, event)
            }
            None => {
                tracing::trace!(event = %event.name(), "unmapped, using fallback");
                (self.fallback)(ctx, event)
            }
        }
    }

    /// Registered kinds in table order, duplicates included
    pub fn kinds(&self) -> impl Iterator<Item = EventKind> + '_ {
        self.records.iter().map(|record| record.kind)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl<C> std::fmt::Debug for EventRouter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventRouter")
            .field("records", &self.records)
            .finish_non_exhaustive()
    }
}

/// Standard fallback: defer to the environment's default handling
pub fn pass_through<C>(_ctx: &mut C, event: &Event) -> Result<Vec<Effect>, HandlerError> {
    Ok(vec![Effect::DefaultHandling { kind: event.kind() }])
}

#[cfg(test)]
#[path = "router_tests.rs"]
mod tests;
