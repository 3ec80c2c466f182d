// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! JSON configuration file on disk

use super::ConfigStore;
use async_trait::async_trait;
use fc_core::{ConfigError, Configuration, MIN_CONFIG_BYTES};
use std::path::{Path, PathBuf};

/// Reads the configuration document from a fixed path
#[derive(Clone, Debug)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigStore for FileConfigStore {
    async fn load(&self) -> Result<Configuration, ConfigError> {
        let unreadable = |e: std::io::Error| {
            ConfigError::Unreadable(format!("{}: {}", self.path.display(), e))
        };

        // Size gate before reading the body
        let len = tokio::fs::metadata(&self.path).await.map_err(unreadable)?.len();
        if len < MIN_CONFIG_BYTES as u64 {
            return Err(ConfigError::TooSmall { len: len as usize });
        }

        let bytes = tokio::fs::read(&self.path).await.map_err(unreadable)?;
        Configuration::from_bytes(&bytes)
    }
}

#[cfg(test)]
#[path = "file_tests.rs"]
mod tests;
