// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Target directory resolution

mod fs;

pub use fs::FsDirectoryProbe;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeDirectoryProbe, ProbeCall};

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// The configured target cannot be used this cycle
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProbeError {
    #[error("target unavailable: {0} does not exist")]
    Missing(String),
    #[error("target unavailable: {0} is not a directory")]
    NotADirectory(String),
    #[error("target unavailable: cannot open {path}: {reason}")]
    Inaccessible { path: String, reason: String },
}

/// A directory confirmed to exist at resolution time.
///
/// Only probes construct handles. Handles are cycle-scoped: the next cycle
/// resolves the path again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryHandle {
    path: PathBuf,
}

impl DirectoryHandle {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Adapter that turns a configured path into a validated directory
#[async_trait]
pub trait DirectoryProbe: Clone + Send + Sync + 'static {
    async fn resolve(&self, path: &str) -> Result<DirectoryHandle, ProbeError>;
}
