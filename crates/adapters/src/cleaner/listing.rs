// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cleaner that inventories the target directory without modifying it

use super::{CleanError, Cleaner};
use crate::probe::DirectoryHandle;
use async_trait::async_trait;

/// Entry counts from one listing pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Inventory {
    pub files: usize,
    pub directories: usize,
    pub other: usize,
    pub bytes: u64,
}

/// Enumerates the top level of the directory and logs what it found.
/// Deletes nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct ListingCleaner;

impl ListingCleaner {
    pub fn new() -> Self {
        Self
    }

    pub async fn inventory(&self, dir: &DirectoryHandle) -> Result<Inventory, CleanError> {
        let failed = |e: std::io::Error| {
            CleanError::Failed(format!("listing {}: {}", dir.path().display(), e))
        };

        let mut entries = tokio::fs::read_dir(dir.path()).await.map_err(failed)?;
        let mut inventory = Inventory::default();

        while let Some(entry) = entries.next_entry().await.map_err(failed)? {
            let file_type = entry.file_type().await.map_err(failed)?;
            if file_type.is_dir() {
                inventory.directories += 1;
            } else if file_type.is_file() {
                inventory.files += 1;
                // Entry may vanish between listing and stat
                if let Ok(metadata) = entry.metadata().await {
                    inventory.bytes += metadata.len();
                }
            } else {
                inventory.other += 1;
            }
        }

        Ok(inventory)
    }
}

#[async_trait]
impl Cleaner for ListingCleaner {
    async fn clean(&self, dir: &DirectoryHandle) -> Result<(), CleanError> {
        let inventory = self.inventory(dir).await?;
        tracing::info!(
            dir = %dir.path().display(),
            files = inventory.files,
            directories = inventory.directories,
            other = inventory.other,
            bytes = inventory.bytes,
            "directory inventoried"
        );
        Ok(())
    }
}

#[cfg(test)]
#[path = "listing_tests.rs"]
mod tests;
