// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the engine runtime

use fc_adapters::{CleanError, ProbeError};
use fc_core::{ConfigError, HandlerError};
use thiserror::Error;

/// Why a maintenance cycle stopped early
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CycleError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    TargetUnavailable(#[from] ProbeError),
    #[error(transparent)]
    Cleanup(#[from] CleanError),
}

/// Errors that can occur in the runtime
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("dispatch error: {0}")]
    Dispatch(#[from] HandlerError),
}
