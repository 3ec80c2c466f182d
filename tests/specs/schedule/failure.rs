//! Failure specs
//!
//! A failed cycle stops the schedule. There is no retry.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn cleaner_failure_stops_schedule() {
    let mut agent = Agent::installed(5);
    agent.start().await;
    agent.cleaner.fail_with("access denied");

    agent.wait_minutes(5).await;

    assert_eq!(agent.state(), &ScheduleState::Unarmed);
    assert_eq!(agent.time_to_next_cycle(), None);

    // Even a fixed cleaner is never called again
    agent.cleaner.succeed();
    agent.wait_minutes(600).await;
    assert_eq!(agent.cycles_cleaned(), 2);
}

#[tokio::test]
async fn config_removed_between_cycles_stops_schedule() {
    let mut agent = Agent::installed(5);
    agent.start().await;
    std::fs::remove_file(agent.root().join("config.json")).unwrap();

    agent.wait_minutes(5).await;

    assert_eq!(agent.state(), &ScheduleState::Unarmed);
    assert_eq!(agent.cycles_cleaned(), 1);
    assert_eq!(agent.runtime.stats().failed, 1);
}

#[tokio::test]
async fn target_removed_between_cycles_stops_schedule() {
    let mut agent = Agent::installed(5);
    agent.start().await;
    std::fs::remove_dir(agent.target()).unwrap();

    agent.wait_minutes(5).await;

    assert_eq!(agent.state(), &ScheduleState::Unarmed);
    assert!(!agent.runtime.timers().has_timers());
}
