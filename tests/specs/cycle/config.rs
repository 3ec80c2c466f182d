//! Configuration specs
//!
//! The config document is re-read every cycle and gates everything else.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn valid_config_arms_for_its_frequency() {
    let mut agent = Agent::installed(5);

    agent.start().await;

    assert_eq!(agent.state(), &armed(5));
    assert_eq!(agent.time_to_next_cycle(), Some(Duration::from_millis(300_000)));
    assert_eq!(agent.cycles_cleaned(), 1);
}

#[tokio::test]
async fn missing_config_leaves_agent_idle() {
    let mut agent = Agent::bare();

    agent.start().await;

    assert_eq!(agent.state(), &ScheduleState::Unarmed);
    assert_eq!(agent.time_to_next_cycle(), None);
    assert_eq!(agent.cycles_cleaned(), 0);
}

#[tokio::test]
async fn tiny_config_is_rejected() {
    let mut agent = Agent::bare();
    agent.write_config("{}");

    agent.start().await;

    assert_eq!(agent.state(), &ScheduleState::Unarmed);
    assert!(agent
        .runtime
        .stats()
        .last_failure
        .as_deref()
        .unwrap()
        .contains("too small"));
}

#[tokio::test]
async fn malformed_config_is_rejected() {
    let mut agent = Agent::bare();
    agent.write_config("{ this is not json }");

    agent.start().await;

    assert_eq!(agent.state(), &ScheduleState::Unarmed);
    assert_eq!(agent.cycles_cleaned(), 0);
}

#[tokio::test]
async fn zero_frequency_is_rejected() {
    let mut agent = Agent::installed(5);
    agent.write_config(&format!(
        r#"{{"path_to_clean": {:?}, "check_frequency": 0}}"#,
        agent.target().display().to_string()
    ));

    agent.start().await;

    assert_eq!(agent.state(), &ScheduleState::Unarmed);
    assert_eq!(agent.cycles_cleaned(), 0);
}

#[tokio::test]
async fn daily_frequency_is_exact() {
    let mut agent = Agent::installed(1440);

    agent.start().await;

    assert_eq!(
        agent.time_to_next_cycle(),
        Some(Duration::from_millis(86_400_000))
    );
}
