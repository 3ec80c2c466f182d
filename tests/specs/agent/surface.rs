//! Surface event specs

use crate::prelude::*;
use similar_asserts::assert_eq;

#[tokio::test]
async fn display_change_repaints_once() {
    let mut agent = Agent::installed(5);
    agent.start().await;

    agent.send(Event::DisplayChange).await;

    assert_eq!(agent.runtime.state().paints, 1);
    assert_eq!(agent.state(), &armed(5));
}

#[tokio::test]
async fn unknown_events_do_not_disturb_schedule() {
    let mut agent = Agent::installed(5);
    agent.start().await;

    for code in [0x0001, 0x0113, 0xC000] {
        agent.send(Event::Other { code }).await;
    }

    assert_eq!(agent.state(), &armed(5));
    assert!(!agent.runtime.quit_requested());
    assert_eq!(agent.cycles_cleaned(), 1);
}

#[tokio::test]
async fn foreign_timer_is_ignored() {
    let mut agent = Agent::installed(5);
    agent.start().await;

    agent
        .send(Event::Timer {
            id: TimerId::from("tray-refresh"),
        })
        .await;

    assert_eq!(agent.state(), &armed(5));
    assert_eq!(agent.cycles_cleaned(), 1);
}
