// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Events delivered to the agent's event loop

use crate::scheduler::TimerId;

/// Asynchronous notifications routed through the dispatch table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Surface needs repainting
    Paint,
    /// Surface background needs erasing before a paint
    EraseBackground,
    /// Display settings changed (resolution, monitor layout)
    DisplayChange,
    /// User asked the agent to close
    Close,
    /// Login session is ending
    EndSession,
    /// A timer expired
    Timer { id: TimerId },
    /// Anything the agent does not recognize, by platform code
    Other { code: u32 },
}

/// Identifier used as the dispatch table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Paint,
    EraseBackground,
    DisplayChange,
    Close,
    EndSession,
    Timer,
    Other(u32),
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Paint => EventKind::Paint,
            Event::EraseBackground => EventKind::EraseBackground,
            Event::DisplayChange => EventKind::DisplayChange,
            Event::Close => EventKind::Close,
            Event::EndSession => EventKind::EndSession,
            Event::Timer { .. } => EventKind::Timer,
            Event::Other { code } => EventKind::Other(*code),
        }
    }

    /// Event name for logging
    /// Format: "category:action"
    pub fn name(&self) -> String {
        match self {
            Event::Paint => "surface:paint".to_string(),
            Event::EraseBackground => "surface:erase".to_string(),
            Event::DisplayChange => "surface:display-change".to_string(),
            Event::Close => "agent:close".to_string(),
            Event::EndSession => "agent:end-session".to_string(),
            Event::Timer { .. } => "timer:fired".to_string(),
            Event::Other { code } => format!("other:{}", code),
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
