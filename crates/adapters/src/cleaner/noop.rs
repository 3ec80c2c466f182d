// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op cleaner

use super::{CleanError, Cleaner};
use crate::probe::DirectoryHandle;
use async_trait::async_trait;

/// Cleaner that does nothing and always succeeds.
///
/// Keeps the schedule running when no cleanup policy is configured.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoOpCleaner;

impl NoOpCleaner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Cleaner for NoOpCleaner {
    async fn clean(&self, _dir: &DirectoryHandle) -> Result<(), CleanError> {
        Ok(())
    }
}
