// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake directory probe for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{DirectoryHandle, DirectoryProbe, ProbeError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Recorded probe call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProbeCall {
    Resolve { path: String },
}

/// In-memory filesystem of directories and files
#[derive(Clone, Default)]
pub struct FakeDirectoryProbe {
    directories: Arc<Mutex<HashSet<String>>>,
    files: Arc<Mutex<HashSet<String>>>,
    denied: Arc<Mutex<HashMap<String, String>>>,
    calls: Arc<Mutex<Vec<ProbeCall>>>,
}

impl FakeDirectoryProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_directory(&self, path: &str) {
        self.directories
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_string());
    }

    pub fn add_file(&self, path: &str) {
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_string());
    }

    /// Directory exists but cannot be opened
    pub fn deny(&self, path: &str, reason: &str) {
        self.add_directory(path);
        self.denied
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(path.to_string(), reason.to_string());
    }

    pub fn remove(&self, path: &str) {
        self.directories
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(path);
        self.files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(path);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<ProbeCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

#[async_trait]
impl DirectoryProbe for FakeDirectoryProbe {
    async fn resolve(&self, path: &str) -> Result<DirectoryHandle, ProbeError> {
        self.calls
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(ProbeCall::Resolve {
                path: path.to_string(),
            });

        if let Some(reason) = self
            .denied
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(path)
        {
            return Err(ProbeError::Inaccessible {
                path: path.to_string(),
                reason: reason.clone(),
            });
        }

        if self
            .directories
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(path)
        {
            return Ok(DirectoryHandle::new(PathBuf::from(path)));
        }

        if self
            .files
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .contains(path)
        {
            return Err(ProbeError::NotADirectory(path.to_string()));
        }

        Err(ProbeError::Missing(path.to_string()))
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
