// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake configuration store for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::ConfigStore;
use async_trait::async_trait;
use fc_core::{ConfigError, Configuration};
use std::sync::{Arc, Mutex};

/// In-memory configuration document. Starts absent.
#[derive(Clone, Default)]
pub struct FakeConfigStore {
    contents: Arc<Mutex<Option<Vec<u8>>>>,
    loads: Arc<Mutex<usize>>,
}

impl FakeConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with a valid document
    pub fn with_config(path: &str, minutes: u32) -> Self {
        let store = Self::new();
        store.set_config(path, minutes);
        store
    }

    /// Replace the raw document
    pub fn set_contents(&self, bytes: impl Into<Vec<u8>>) {
        *self.contents.lock().unwrap_or_else(|e| e.into_inner()) = Some(bytes.into());
    }

    /// Replace the document with a valid one
    pub fn set_config(&self, path: &str, minutes: u32) {
        self.set_contents(format!(
            r#"{{"path_to_clean": {:?}, "check_frequency": {}}}"#,
            path, minutes
        ));
    }

    /// Make the document unreadable
    pub fn remove(&self) {
        *self.contents.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Number of `load` calls so far
    pub fn load_count(&self) -> usize {
        *self.loads.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl ConfigStore for FakeConfigStore {
    async fn load(&self) -> Result<Configuration, ConfigError> {
        *self.loads.lock().unwrap_or_else(|e| e.into_inner()) += 1;

        let contents = self
            .contents
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        match contents {
            Some(bytes) => Configuration::from_bytes(&bytes),
            None => Err(ConfigError::Unreadable("no config document".to_string())),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
