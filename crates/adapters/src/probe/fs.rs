// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Filesystem directory probe

use super::{DirectoryHandle, DirectoryProbe, ProbeError};
use async_trait::async_trait;
use std::io::ErrorKind;

/// Probe backed by the local filesystem
#[derive(Clone, Copy, Debug, Default)]
pub struct FsDirectoryProbe;

impl FsDirectoryProbe {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DirectoryProbe for FsDirectoryProbe {
    async fn resolve(&self, path: &str) -> Result<DirectoryHandle, ProbeError> {
        let inaccessible = |e: std::io::Error| ProbeError::Inaccessible {
            path: path.to_string(),
            reason: e.to_string(),
        };

        let metadata = match tokio::fs::metadata(path).await {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(ProbeError::Missing(path.to_string()))
            }
            Err(e) => return Err(inaccessible(e)),
        };
        if !metadata.is_dir() {
            return Err(ProbeError::NotADirectory(path.to_string()));
        }

        // Must be openable for listing, not merely present
        let _listing = tokio::fs::read_dir(path).await.map_err(inaccessible)?;

        let canonical = tokio::fs::canonicalize(path).await.map_err(inaccessible)?;
        Ok(DirectoryHandle::new(canonical))
    }
}

#[cfg(test)]
#[path = "fs_tests.rs"]
mod tests;
