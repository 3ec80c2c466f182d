// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! File cleaner execution engine

mod cycle;
mod error;
mod handlers;
mod runtime;
mod timers;

pub use cycle::{CycleStats, MaintenanceCycle};
pub use error::{CycleError, RuntimeError};
pub use handlers::{dispatch_table, AgentState};
pub use runtime::{Runtime, RuntimeDeps};
pub use timers::TimerQueue;
