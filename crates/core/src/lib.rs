// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! fc-core: Core library for the file cleaner agent
//!
//! This crate provides:
//! - The agent configuration and its validation
//! - Events, effects, and the table-driven event router
//! - The pure cleanup schedule state machine
//! - A clock abstraction for driving timers in tests

pub mod clock;
pub mod config;
pub mod effect;
pub mod event;
pub mod router;
pub mod scheduler;
pub mod traced;

// Re-exports
pub use clock::{Clock, FakeClock, SystemClock};
pub use config::{ConfigError, Configuration, CONFIG_FILE_NAME, MIN_CONFIG_BYTES};
pub use effect::Effect;
pub use event::{Event, EventKind};
pub use router::{pass_through, EventRecord, EventRouter, Handler, HandlerError};
pub use scheduler::{
    arm_delay, ScheduleEvent, ScheduleState, Scheduler, TimerId, CLEANUP_TIMER_ID,
};
pub use traced::TracedEffect;
