// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration sources

mod file;

pub use file::FileConfigStore;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeConfigStore;

use async_trait::async_trait;
use fc_core::{ConfigError, Configuration};

/// Adapter that produces the current configuration, re-read every cycle
#[async_trait]
pub trait ConfigStore: Clone + Send + Sync + 'static {
    async fn load(&self) -> Result<Configuration, ConfigError>;
}
