// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn set_timer_fields_report_milliseconds() {
    let effect = Effect::SetTimer {
        id: TimerId::from("cleanup"),
        duration: Duration::from_secs(120),
    };
    assert_eq!(effect.name(), "set_timer");
    assert_eq!(
        effect.fields(),
        vec![
            ("timer_id", "cleanup".to_string()),
            ("duration_ms", "120000".to_string()),
        ]
    );
}

#[test]
fn unit_effects_have_no_fields() {
    for effect in [Effect::RunCycle, Effect::Redraw, Effect::Quit] {
        assert!(effect.fields().is_empty(), "{}", effect.name());
    }
}

#[test]
fn default_handling_names_the_kind() {
    let effect = Effect::DefaultHandling {
        kind: EventKind::Other(7),
    };
    assert_eq!(effect.fields(), vec![("kind", "Other(7)".to_string())]);
}
