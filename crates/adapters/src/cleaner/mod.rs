// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pluggable cleanup operations
//!
//! The scheduling core only needs to know whether a pass succeeded. What a
//! pass does to the directory is up to the implementation.

mod listing;
mod noop;

pub use listing::{Inventory, ListingCleaner};
pub use noop::NoOpCleaner;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CleanCall, FakeCleaner};

use crate::probe::DirectoryHandle;
use async_trait::async_trait;
use thiserror::Error;

/// Errors from cleanup operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CleanError {
    #[error("cleanup failed: {0}")]
    Failed(String),
}

/// Adapter that performs one cleanup pass over a validated directory
#[async_trait]
pub trait Cleaner: Clone + Send + Sync + 'static {
    async fn clean(&self, dir: &DirectoryHandle) -> Result<(), CleanError>;
}
