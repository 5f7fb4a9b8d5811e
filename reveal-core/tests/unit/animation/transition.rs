use super::*;

fn spec(duration_ms: f64, delay_ms: f64) -> TransitionSpec {
    TransitionSpec {
        duration_ms,
        ease: Ease::Linear,
        delay_ms,
    }
}

#[test]
fn css_shorthand_matches_inline_style() {
    assert_eq!(
        spec(400.0, 0.0).css(),
        "all 400ms cubic-bezier(0, 0, 1.0, 1.0) 0ms"
    );
    let eased = TransitionSpec {
        duration_ms: 250.5,
        ease: Ease::EaseOut,
        delay_ms: 100.0,
    };
    assert_eq!(eased.css(), "all 250.5ms ease-out 100ms");
}

#[test]
fn progress_waits_for_delay_then_runs_linearly() {
    let s = spec(400.0, 100.0);
    assert_eq!(s.progress_at(50.0), 0.0);
    assert_eq!(s.progress_at(100.0), 0.0);
    assert_eq!(s.progress_at(300.0), 0.5);
    assert_eq!(s.progress_at(500.0), 1.0);
    assert_eq!(s.progress_at(10_000.0), 1.0);
}

#[test]
fn non_positive_duration_jumps_to_end() {
    assert_eq!(spec(0.0, 0.0).progress_at(0.0), 1.0);
    assert_eq!(spec(-5.0, 10.0).progress_at(5.0), 0.0);
    assert_eq!(spec(-5.0, 10.0).progress_at(10.0), 1.0);
    assert_eq!(spec(-5.0, 10.0).total_ms(), 10.0);
}
