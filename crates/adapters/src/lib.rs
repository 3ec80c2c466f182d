// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the agent's I/O boundaries: configuration, target
//! directory, and the cleanup operation

pub mod cleaner;
pub mod config;
pub mod probe;
pub mod traced;

pub use cleaner::{CleanError, Cleaner, Inventory, ListingCleaner, NoOpCleaner};
pub use config::{ConfigStore, FileConfigStore};
pub use probe::{DirectoryHandle, DirectoryProbe, FsDirectoryProbe, ProbeError};
pub use traced::{TracedCleaner, TracedConfigStore, TracedDirectoryProbe};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use cleaner::{CleanCall, FakeCleaner};
#[cfg(any(test, feature = "test-support"))]
pub use config::FakeConfigStore;
#[cfg(any(test, feature = "test-support"))]
pub use probe::{FakeDirectoryProbe, ProbeCall};
