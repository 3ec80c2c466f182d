//! Shutdown specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn close_disarms_and_quits() {
    let mut agent = Agent::installed(5);
    agent.start().await;

    agent.send(Event::Close).await;

    assert!(agent.runtime.quit_requested());
    assert_eq!(agent.state(), &ScheduleState::Disarmed);
    assert_eq!(agent.time_to_next_cycle(), None);
}

#[tokio::test]
async fn session_end_disarms_and_quits() {
    let mut agent = Agent::installed(5);
    agent.start().await;

    agent.send(Event::EndSession).await;

    assert!(agent.runtime.quit_requested());
    assert_eq!(agent.state(), &ScheduleState::Disarmed);
}

#[tokio::test]
async fn timer_queued_before_close_is_ignored() {
    let mut agent = Agent::installed(5);
    agent.start().await;
    agent.clock.advance_minutes(5);
    let queued = agent.runtime.fired_timers();

    agent.send(Event::Close).await;
    for event in queued {
        agent.send(event).await;
    }

    assert_eq!(agent.state(), &ScheduleState::Disarmed);
    assert_eq!(agent.cycles_cleaned(), 1);
}

#[tokio::test]
async fn close_before_any_success_still_quits() {
    let mut agent = Agent::bare();
    agent.start().await;

    agent.send(Event::Close).await;

    assert!(agent.runtime.quit_requested());
    assert_eq!(agent.state(), &ScheduleState::Disarmed);
}
