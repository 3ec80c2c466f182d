//! Target directory specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn regular_file_target_is_unavailable() {
    let mut agent = Agent::bare();
    let file = agent.root().join("report.txt");
    std::fs::write(&file, "data").unwrap();
    agent.configure(&file, 5);

    agent.start().await;

    assert_eq!(agent.state(), &ScheduleState::Unarmed);
    assert_eq!(agent.cycles_cleaned(), 0);
    assert!(agent
        .runtime
        .stats()
        .last_failure
        .as_deref()
        .unwrap()
        .contains("not a directory"));
}

#[tokio::test]
async fn missing_target_is_unavailable() {
    let mut agent = Agent::bare();
    agent.configure(&agent.root().join("nowhere"), 5);

    agent.start().await;

    assert_eq!(agent.state(), &ScheduleState::Unarmed);
    assert_eq!(agent.cycles_cleaned(), 0);
}

#[tokio::test]
async fn cleaner_receives_the_canonical_directory() {
    let mut agent = Agent::installed(5);

    agent.start().await;

    let expected = agent.target().canonicalize().unwrap();
    assert_eq!(
        agent.cleaner.calls(),
        vec![fc_adapters::CleanCall::Clean { path: expected }]
    );
}
