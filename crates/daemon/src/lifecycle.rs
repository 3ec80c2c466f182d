// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Daemon lifecycle management: paths, startup, signals.

use std::path::{Path, PathBuf};
use std::time::Instant;

use fc_adapters::{
    FileConfigStore, FsDirectoryProbe, ListingCleaner, TracedCleaner, TracedConfigStore,
    TracedDirectoryProbe,
};
use fc_core::{Event, SystemClock, CONFIG_FILE_NAME};
use fc_engine::{Runtime, RuntimeDeps};
use thiserror::Error;
use tracing::info;

/// Log file written next to the executable
pub const LOG_FILE_NAME: &str = "filecleaner.log";

/// Startup marker prefix written to log before anything else.
/// Full format: "--- fcd: starting (pid: 12345) ---"
pub const STARTUP_MARKER_PREFIX: &str = "--- fcd: starting (pid: ";

/// Daemon runtime with concrete adapter types (wrapped with tracing)
pub type DaemonRuntime = Runtime<
    TracedConfigStore<FileConfigStore>,
    TracedDirectoryProbe<FsDirectoryProbe>,
    TracedCleaner<ListingCleaner>,
    SystemClock,
>;

/// Daemon configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Directory holding the executable
    pub exe_dir: PathBuf,
    /// Path to the agent configuration document
    pub config_path: PathBuf,
    /// Path to daemon log file
    pub log_path: PathBuf,
}

impl Config {
    /// Config and log live beside the running executable
    pub fn beside_executable() -> Result<Self, LifecycleError> {
        let exe = std::env::current_exe()?;
        let dir = exe.parent().ok_or(LifecycleError::NoExecutableDir)?;
        Ok(Self::in_dir(dir))
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self {
            exe_dir: dir.to_path_buf(),
            config_path: dir.join(CONFIG_FILE_NAME),
            log_path: dir.join(LOG_FILE_NAME),
        }
    }
}

#[derive(Debug, Error)]
pub enum LifecycleError {
    #[error("Could not determine executable directory")]
    NoExecutableDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Runtime error: {0}")]
    Runtime(String),
}

/// Daemon state during operation
pub struct DaemonState {
    /// Configuration
    pub config: Config,
    /// Runtime for event processing
    pub runtime: DaemonRuntime,
    /// When daemon started
    pub start_time: Instant,
}

impl DaemonState {
    /// Process an event through the runtime, including every event it
    /// feeds back (e.g. the paint after a redraw)
    pub async fn process_event(&mut self, event: Event) -> Result<(), LifecycleError> {
        self.runtime
            .process(event)
            .await
            .map_err(|e| LifecycleError::Runtime(e.to_string()))
    }

    /// Dispatch every timer that is due
    pub async fn fire_due_timers(&mut self) -> Result<(), LifecycleError> {
        self.runtime
            .tick()
            .await
            .map_err(|e| LifecycleError::Runtime(e.to_string()))
    }

    pub fn quit_requested(&self) -> bool {
        self.runtime.quit_requested()
    }

    /// Log final statistics
    pub fn shutdown(&self) {
        let stats = self.runtime.stats();
        info!(
            uptime_secs = self.start_time.elapsed().as_secs(),
            cycles_succeeded = stats.succeeded,
            cycles_failed = stats.failed,
            "daemon stopped"
        );
    }
}

/// Start the daemon and run the first cycle
pub async fn startup(config: &Config) -> Result<DaemonState, LifecycleError> {
    info!(config = %config.config_path.display(), "starting");

    let runtime = Runtime::new(
        RuntimeDeps {
            config: TracedConfigStore::new(FileConfigStore::new(&config.config_path)),
            probe: TracedDirectoryProbe::new(FsDirectoryProbe::new()),
            cleaner: TracedCleaner::new(ListingCleaner::new()),
        },
        SystemClock,
    );

    let mut daemon = DaemonState {
        config: config.clone(),
        runtime,
        start_time: Instant::now(),
    };

    for event in daemon.runtime.startup().await {
        daemon.process_event(event).await?;
    }

    Ok(daemon)
}

/// Append the startup marker to the log file
pub fn write_startup_marker(config: &Config) -> Result<(), LifecycleError> {
    use std::io::Write;

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)?;
    writeln!(file, "{}{}) ---", STARTUP_MARKER_PREFIX, std::process::id())?;

    Ok(())
}

/// OS termination requests, delivered as agent events
#[cfg(unix)]
pub struct ShutdownSignals {
    sigint: tokio::signal::unix::Signal,
    sigterm: tokio::signal::unix::Signal,
}

#[cfg(unix)]
impl ShutdownSignals {
    pub fn new() -> Result<Self, LifecycleError> {
        use tokio::signal::unix::{signal, SignalKind};

        Ok(Self {
            sigint: signal(SignalKind::interrupt())?,
            sigterm: signal(SignalKind::terminate())?,
        })
    }

    /// SIGINT closes the agent; SIGTERM ends the session
    pub async fn recv(&mut self) -> Event {
        tokio::select! {
            _ = self.sigint.recv() => {
                info!("Received SIGINT");
                Event::Close
            }
            _ = self.sigterm.recv() => {
                info!("Received SIGTERM");
                Event::EndSession
            }
        }
    }
}

/// OS termination requests, delivered as agent events
#[cfg(not(unix))]
pub struct ShutdownSignals;

#[cfg(not(unix))]
impl ShutdownSignals {
    pub fn new() -> Result<Self, LifecycleError> {
        Ok(Self)
    }

    /// Ctrl-C closes the agent
    pub async fn recv(&mut self) -> Event {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                info!("Received Ctrl-C");
                Event::Close
            }
            Err(e) => {
                tracing::error!(error = %e, "cannot listen for Ctrl-C");
                std::future::pending().await
            }
        }
    }
}

#[cfg(test)]
#[path = "lifecycle_tests.rs"]
mod tests;
