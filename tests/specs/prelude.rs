//! Shared harness for agent specs

#![allow(dead_code)]

pub use fc_core::{Event, ScheduleState, TimerId};
pub use std::time::Duration;

use fc_adapters::{FakeCleaner, FileConfigStore, FsDirectoryProbe};
use fc_core::{Clock, FakeClock, CONFIG_FILE_NAME};
use fc_engine::{Runtime, RuntimeDeps};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub type SpecRuntime = Runtime<FileConfigStore, FsDirectoryProbe, FakeCleaner, FakeClock>;

/// An installed agent: a directory holding the config document and a
/// target folder to clean
pub struct Agent {
    dir: TempDir,
    pub runtime: SpecRuntime,
    pub cleaner: FakeCleaner,
    pub clock: FakeClock,
}

impl Agent {
    /// Installed with a valid config pointing at `drop/`
    pub fn installed(frequency: u32) -> Self {
        let agent = Self::bare();
        std::fs::create_dir(agent.target()).unwrap();
        agent.configure(&agent.target(), frequency);
        agent
    }

    /// No config document and no target folder yet
    pub fn bare() -> Self {
        let dir = tempfile::tempdir().unwrap();
        let cleaner = FakeCleaner::new();
        let clock = FakeClock::new();

        let runtime = Runtime::new(
            RuntimeDeps {
                config: FileConfigStore::new(dir.path().join(CONFIG_FILE_NAME)),
                probe: FsDirectoryProbe::new(),
                cleaner: cleaner.clone(),
            },
            clock.clone(),
        );

        Self {
            dir,
            runtime,
            cleaner,
            clock,
        }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    /// Default target folder
    pub fn target(&self) -> PathBuf {
        self.root().join("drop")
    }

    pub fn configure(&self, target: &Path, frequency: u32) {
        self.write_config(&format!(
            r#"{{"path_to_clean": {:?}, "check_frequency": {}}}"#,
            target.display().to_string(),
            frequency
        ));
    }

    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.root().join(CONFIG_FILE_NAME), contents).unwrap();
    }

    pub async fn start(&mut self) {
        let events = self.runtime.startup().await;
        for event in events {
            self.runtime.process(event).await.unwrap();
        }
    }

    /// Move time forward and dispatch whatever fired
    pub async fn wait_minutes(&mut self, minutes: u64) {
        self.clock.advance_minutes(minutes);
        self.runtime.tick().await.unwrap();
    }

    pub async fn send(&mut self, event: Event) {
        self.runtime.process(event).await.unwrap();
    }

    pub fn state(&self) -> &ScheduleState {
        self.runtime.schedule_state()
    }

    pub fn cycles_cleaned(&self) -> usize {
        self.cleaner.calls().len()
    }

    /// Time left until the cleanup timer fires
    pub fn time_to_next_cycle(&self) -> Option<Duration> {
        self.runtime
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(self.clock.now()))
    }
}

pub fn armed(minutes: u32) -> ScheduleState {
    ScheduleState::Armed {
        interval_minutes: minutes,
    }
}
