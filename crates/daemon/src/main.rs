// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! File cleaner daemon (fcd)
//!
//! Background agent that runs a maintenance cycle on start and then every
//! `check_frequency` minutes, until closed or the session ends.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod lifecycle;

use tracing::{error, info};

use crate::lifecycle::{write_startup_marker, Config, LifecycleError, ShutdownSignals};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::beside_executable()?;

    // Write startup marker to log (before tracing setup)
    write_startup_marker(&config)?;

    let _log_guard = setup_logging(&config)?;

    info!("Starting fcd in {}", config.exe_dir.display());

    let mut signals = ShutdownSignals::new()?;

    let mut daemon = match lifecycle::startup(&config).await {
        Ok(d) => d,
        Err(e) => {
            write_startup_error(&config, &e);
            error!("Failed to start daemon: {}", e);
            return Err(e.into());
        }
    };

    info!(
        config = %daemon.config.config_path.display(),
        state = ?daemon.runtime.schedule_state(),
        "Daemon ready"
    );

    // Main event loop
    while !daemon.quit_requested() {
        let deadline = daemon.runtime.next_deadline();

        tokio::select! {
            _ = sleep_until(deadline) => {
                if let Err(e) = daemon.fire_due_timers().await {
                    error!("Error processing timer: {}", e);
                }
            }

            event = signals.recv() => {
                if let Err(e) = daemon.process_event(event).await {
                    error!("Error processing signal: {}", e);
                }
            }
        }
    }

    daemon.shutdown();
    Ok(())
}

/// Sleep until `deadline`, or forever when nothing is armed
async fn sleep_until(deadline: Option<std::time::Instant>) {
    match deadline {
        Some(deadline) => tokio::time::sleep_until(tokio::time::Instant::from_std(deadline)).await,
        None => std::future::pending().await,
    }
}

/// Write startup error synchronously to log file.
/// Tracing is non-blocking and may not flush before the process exits.
fn write_startup_error(config: &Config, error: &LifecycleError) {
    use std::io::Write;

    let Ok(mut file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&config.log_path)
    else {
        return;
    };
    let _ = writeln!(file, "ERROR Failed to start daemon: {}", error);
}

fn setup_logging(
    config: &Config,
) -> Result<tracing_appender::non_blocking::WorkerGuard, LifecycleError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let file_appender = tracing_appender::rolling::never(
        &config.exe_dir,
        config
            .log_path
            .file_name()
            .ok_or(LifecycleError::NoExecutableDir)?,
    );
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();

    Ok(guard)
}
