// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::cleaner::{CleanError, Cleaner};
use crate::config::ConfigStore;
use crate::probe::{DirectoryHandle, DirectoryProbe, ProbeError};
use async_trait::async_trait;
use fc_core::{ConfigError, Configuration};
use tracing::Instrument;

/// Wrapper that adds tracing to any ConfigStore
#[derive(Clone)]
pub struct TracedConfigStore<S> {
    inner: S,
}

impl<S> TracedConfigStore<S> {
    pub fn new(inner: S) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<S: ConfigStore> ConfigStore for TracedConfigStore<S> {
    async fn load(&self) -> Result<Configuration, ConfigError> {
        let span = tracing::info_span!("config.load");

        async {
            let start = std::time::Instant::now();
            let result = self.inner.load().await;
            let elapsed = start.elapsed();

            match &result {
                Ok(config) => tracing::info!(
                    path_to_clean = config.target_path(),
                    check_frequency = config.check_frequency_minutes(),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "config loaded"
                ),
                Err(e) => tracing::warn!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "config rejected"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any DirectoryProbe
#[derive(Clone)]
pub struct TracedDirectoryProbe<P> {
    inner: P,
}

impl<P> TracedDirectoryProbe<P> {
    pub fn new(inner: P) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<P: DirectoryProbe> DirectoryProbe for TracedDirectoryProbe<P> {
    async fn resolve(&self, path: &str) -> Result<DirectoryHandle, ProbeError> {
        let span = tracing::info_span!("probe.resolve", path);

        async {
            let result = self.inner.resolve(path).await;
            match &result {
                Ok(handle) => {
                    tracing::debug!(resolved = %handle.path().display(), "directory ready")
                }
                Err(e) => tracing::warn!(error = %e, "target unavailable"),
            }
            result
        }
        .instrument(span)
        .await
    }
}

/// Wrapper that adds tracing to any Cleaner
#[derive(Clone)]
pub struct TracedCleaner<C> {
    inner: C,
}

impl<C> TracedCleaner<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: Cleaner> Cleaner for TracedCleaner<C> {
    async fn clean(&self, dir: &DirectoryHandle) -> Result<(), CleanError> {
        let span = tracing::info_span!("cleaner.clean", dir = %dir.path().display());

        async {
            tracing::info!("starting");

            let start = std::time::Instant::now();
            let result = self.inner.clean(dir).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(()) => tracing::info!(elapsed_ms = elapsed.as_millis() as u64, "cleaned"),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "clean failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
