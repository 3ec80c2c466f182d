//! Re-arm specs
//!
//! Each successful cycle arms the single cleanup timer for the interval it
//! just read.

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn nothing_runs_before_the_interval() {
    let mut agent = Agent::installed(5);
    agent.start().await;

    agent.wait_minutes(4).await;

    assert_eq!(agent.cycles_cleaned(), 1);
    assert_eq!(agent.time_to_next_cycle(), Some(Duration::from_secs(60)));
}

#[tokio::test]
async fn timer_runs_next_cycle_and_rearms() {
    let mut agent = Agent::installed(5);
    agent.start().await;

    agent.wait_minutes(5).await;
    agent.wait_minutes(5).await;

    assert_eq!(agent.cycles_cleaned(), 3);
    assert_eq!(agent.state(), &armed(5));
    assert_eq!(agent.runtime.timers().len(), 1);
}

#[tokio::test]
async fn edited_frequency_takes_effect_on_next_rearm() {
    let mut agent = Agent::installed(5);
    agent.start().await;
    agent.configure(&agent.target(), 60);

    // The pending timer keeps its old deadline
    assert_eq!(agent.time_to_next_cycle(), Some(Duration::from_secs(300)));

    agent.wait_minutes(5).await;

    assert_eq!(agent.state(), &armed(60));
    assert_eq!(agent.time_to_next_cycle(), Some(Duration::from_secs(3600)));
}

#[tokio::test]
async fn retargeting_cleans_the_new_directory() {
    let mut agent = Agent::installed(5);
    agent.start().await;

    let other = agent.root().join("other");
    std::fs::create_dir(&other).unwrap();
    agent.configure(&other, 5);
    agent.wait_minutes(5).await;

    let calls = agent.cleaner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(
        calls[1],
        fc_adapters::CleanCall::Clean {
            path: other.canonicalize().unwrap()
        }
    );
}
