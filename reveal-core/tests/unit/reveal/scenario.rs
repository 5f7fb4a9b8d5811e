use super::*;
use crate::reveal::{stage::Cause, wrapper::Phase};

const PAGE: &str = r#"{
    "inner_height": 1000,
    "instances": [
        { "label": "hero", "top": 100, "config": { "opacity": 1, "y": 40 } },
        { "label": "card", "top": 2000, "config": { "opacity": 0.9, "onScroll": true, "viewPort": 0.5 } },
        { "label": "ad", "top": 4000, "config": { "onScroll": true } }
    ],
    "events": [
        { "at_ms": 1000, "action": { "scroll": { "y": 1200 } } },
        { "at_ms": 1100, "action": { "scroll": { "y": 1600 } } },
        { "at_ms": 1150, "action": { "unmount": "ad" } }
    ]
}"#;

#[test]
fn replays_a_page() {
    let scenario = Scenario::from_json_str(PAGE).unwrap();
    let replay = scenario.replay().unwrap();

    // last event 1150 + longest duration 400 + 1
    assert_eq!(replay.until_ms, 1551.0);

    let hero = &replay.finals[0];
    assert_eq!(hero.phase, "settled");
    let style = hero.style.as_ref().unwrap();
    assert_eq!(style.snapshot.opacity, Some(1.0));
    assert_eq!(style.snapshot.transform.as_deref(), Some("none"));

    // card top: 2000 - 1200 = 800 (not < 500), then 400 (< 500)
    let card_entries: Vec<_> = replay
        .timeline
        .iter()
        .filter(|e| replay.label(e.instance) == "card")
        .collect();
    assert_eq!(card_entries.len(), 3);
    assert_eq!(card_entries[1].cause, Cause::Scroll);
    assert_eq!(card_entries[1].at_ms, 1100.0);
    assert_eq!(card_entries[2].cause, Cause::Timer);
    assert_eq!(card_entries[2].at_ms, 1300.0);
    assert_eq!(card_entries[2].phase, Phase::Settled);

    let ad = &replay.finals[2];
    assert!(!ad.mounted);
    assert_eq!(ad.phase, "unmounted");
    assert!(ad.style.is_none());
}

#[test]
fn events_are_played_in_time_order() {
    let scenario = Scenario::from_json_str(
        r#"{
            "instances": [{ "label": "a", "top": 5000, "config": { "onScroll": true } }],
            "events": [
                { "at_ms": 500, "action": { "unmount": "a" } },
                { "at_ms": 100, "action": { "scroll": { "y": 4900 } } }
            ],
            "until_ms": 1000
        }"#,
    )
    .unwrap();
    let replay = scenario.replay().unwrap();
    let causes: Vec<Cause> = replay.timeline.iter().map(|e| e.cause).collect();
    assert_eq!(
        causes,
        vec![Cause::Mount, Cause::Scroll, Cause::Timer, Cause::Unmount]
    );
}

#[test]
fn unmount_before_timer_prevents_settling() {
    let scenario = Scenario::from_json_str(
        r#"{
            "instances": [{ "label": "a", "top": 0, "config": { "opacity": 1, "duration": 1000 } }],
            "events": [{ "at_ms": 499, "action": { "unmount": "a" } }]
        }"#,
    )
    .unwrap();
    let replay = scenario.replay().unwrap();
    assert!(replay.timeline.iter().all(|e| e.phase != Phase::Settled));
}

#[test]
fn validation_rejects_bad_references() {
    let dup = Scenario::from_json_str(
        r#"{ "instances": [{ "label": "a", "top": 0 }, { "label": "a", "top": 1 }] }"#,
    )
    .unwrap();
    assert!(dup.replay().is_err());

    let unknown = Scenario::from_json_str(
        r#"{
            "instances": [{ "label": "a", "top": 0 }],
            "events": [{ "at_ms": 1, "action": { "revisit": "b" } }]
        }"#,
    )
    .unwrap();
    assert!(matches!(
        unknown.validate().unwrap_err(),
        RevealError::Validation(_)
    ));

    assert!(Scenario::from_json_str("{}").is_err());
}
