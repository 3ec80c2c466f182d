// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_is_monotonic() {
    let clock = SystemClock;
    let t1 = clock.now();
    let t2 = clock.now();
    assert!(t2 >= t1);
}

#[test]
fn fake_clock_only_moves_when_advanced() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    assert_eq!(clock.now(), t1);

    clock.advance(Duration::from_millis(250));
    assert_eq!(clock.now().duration_since(t1), Duration::from_millis(250));
}

#[test]
fn fake_clock_advances_in_minutes() {
    let clock = FakeClock::new();
    let t1 = clock.now();
    clock.advance_minutes(5);
    assert_eq!(clock.now().duration_since(t1), Duration::from_secs(300));
}

#[test]
fn fake_clock_clones_share_time() {
    let clock1 = FakeClock::new();
    let clock2 = clock1.clone();
    let t1 = clock1.now();
    clock2.advance(Duration::from_secs(30));
    assert_eq!(clock1.now().duration_since(t1), Duration::from_secs(30));
}

#[test]
fn fake_clock_jumps_to_deadline_but_not_back() {
    let clock = FakeClock::new();
    let start = clock.now();
    let deadline = start + Duration::from_secs(86_400);

    clock.advance_to(deadline);
    assert_eq!(clock.now(), deadline);

    clock.advance_to(start);
    assert_eq!(clock.now(), deadline);
}
