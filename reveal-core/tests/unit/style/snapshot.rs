use super::*;

#[test]
fn overlay_preserves_unset_fields() {
    let prev = StyleSnapshot {
        opacity: Some(0.0),
        transform: Some("translateX(10px) rotate(0deg)".to_string()),
        ..StyleSnapshot::default()
    };
    let patch = StyleSnapshot {
        transform: Some("none".to_string()),
        color: Some("red".to_string()),
        ..StyleSnapshot::default()
    };

    let next = prev.overlay(&patch);
    assert_eq!(next.opacity, Some(0.0));
    assert_eq!(next.transform.as_deref(), Some("none"));
    assert_eq!(next.color.as_deref(), Some("red"));
    assert_eq!(next.background_color, None);

    // previous snapshot is untouched
    assert_eq!(
        prev.transform.as_deref(),
        Some("translateX(10px) rotate(0deg)")
    );
}

#[test]
fn empty_overlay_is_identity() {
    let prev = StyleSnapshot {
        opacity: Some(0.4),
        background_color: Some("#000".to_string()),
        ..StyleSnapshot::default()
    };
    assert_eq!(prev.overlay(&StyleSnapshot::default()), prev);
    assert!(StyleSnapshot::default().is_empty());
    assert!(!prev.is_empty());
}

#[test]
fn declarations_follow_css_names() {
    let s = StyleSnapshot {
        opacity: Some(0.5),
        transform: Some("none".to_string()),
        background_color: Some("blue".to_string()),
        color: Some("white".to_string()),
    };
    assert_eq!(
        s.declarations(),
        vec![
            ("opacity", "0.5".to_string()),
            ("transform", "none".to_string()),
            ("background-color", "blue".to_string()),
            ("color", "white".to_string()),
        ]
    );
}

#[test]
fn serializes_camel_case_and_skips_unset() {
    let s = StyleSnapshot {
        background_color: Some("blue".to_string()),
        ..StyleSnapshot::default()
    };
    assert_eq!(
        serde_json::to_string(&s).unwrap(),
        r#"{"backgroundColor":"blue"}"#
    );
}
