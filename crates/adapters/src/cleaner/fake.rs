// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake cleaner for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{CleanError, Cleaner};
use crate::probe::DirectoryHandle;
use async_trait::async_trait;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Recorded cleaner call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CleanCall {
    Clean { path: PathBuf },
}

/// Cleaner with a scripted outcome. Succeeds until told otherwise.
#[derive(Clone, Default)]
pub struct FakeCleaner {
    failure: Arc<Mutex<Option<String>>>,
    calls: Arc<Mutex<Vec<CleanCall>>>,
}

impl FakeCleaner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent pass fail with `reason`
    pub fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = Some(reason.to_string());
    }

    /// Make subsequent passes succeed again
    pub fn succeed(&self) {
        *self.failure.lock().unwrap_or_else(|e| e.into_inner()) = None;
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<CleanCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl Cleaner for FakeCleaner {
    async fn clean(&self, dir: &DirectoryHandle) -> Result<(), CleanError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(CleanCall::Clean {
                path: dir.path().to_path_buf(),
            });

        let failure = self
            .failure
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone();
        match failure {
            Some(reason) => Err(CleanError::Failed(reason)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
