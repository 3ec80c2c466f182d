// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! One maintenance cycle: load config, resolve the target, clean it

use crate::error::CycleError;
use crate::RuntimeDeps;
use fc_adapters::{Cleaner, ConfigStore, DirectoryProbe};
use fc_core::Configuration;
use tracing::Instrument;

/// Runs the config → probe → clean pipeline, stopping at the first failure
pub struct MaintenanceCycle<S, P, K> {
    config: S,
    probe: P,
    cleaner: K,
}

impl<S, P, K> MaintenanceCycle<S, P, K>
where
    S: ConfigStore,
    P: DirectoryProbe,
    K: Cleaner,
{
    pub fn new(deps: RuntimeDeps<S, P, K>) -> Self {
        Self {
            config: deps.config,
            probe: deps.probe,
            cleaner: deps.cleaner,
        }
    }

    /// Run one cycle.
    ///
    /// The configuration is re-read every time, so edits take effect on the
    /// next cycle. Returns the configuration that was used so the caller can
    /// re-arm with its interval.
    pub async fn run(&self) -> Result<Configuration, CycleError> {
        let span = tracing::info_span!("cycle");

        async {
            let config = self.config.load().await?;
            let dir = self.probe.resolve(config.target_path()).await?;
            self.cleaner.clean(&dir).await?;
            Ok::<_, CycleError>(config)
        }
        .instrument(span)
        .await
    }
}

/// Running tally of cycle outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleStats {
    pub succeeded: u64,
    pub failed: u64,
    pub last_failure: Option<String>,
}

impl CycleStats {
    pub fn record(&mut self, outcome: &Result<Configuration, CycleError>) {
        match outcome {
            Ok(_) => self.succeeded += 1,
            Err(e) => {
                self.failed += 1;
                self.last_failure = Some(e.to_string());
            }
        }
    }

    pub fn total(&self) -> u64 {
        self.succeeded + self.failed
    }
}

#[cfg(test)]
#[path = "cycle_tests.rs"]
mod tests;
