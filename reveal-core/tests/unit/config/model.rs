use super::*;

#[test]
fn defaults_match_component_props() {
    let c = RevealConfig::default();
    assert_eq!(c.duration, 400.0);
    assert_eq!(c.delay, 0.0);
    assert_eq!(c.ease, Ease::Linear);
    assert_eq!(c.view_port, 0.8);
    assert!(!c.on_scroll);
    assert!(!c.reverse);
    assert!(!c.has_motion());
}

#[test]
fn parses_prop_style_json() {
    let c = RevealConfig::from_json_str(
        r##"{
            "opacity": 0.5,
            "duration": 1000,
            "ease": "ease-in-out",
            "x": "10%",
            "y": 20,
            "rotate": 15,
            "onScroll": true,
            "viewPort": 0.5,
            "backgroundColor": "#111",
            "color": "white"
        }"##,
    )
    .unwrap();
    assert_eq!(c.opacity, Some(0.5));
    assert_eq!(c.duration, 1000.0);
    assert_eq!(c.delay, 0.0);
    assert_eq!(c.ease, Ease::EaseInOut);
    assert_eq!(c.x, Some(Offset::Raw("10%".to_string())));
    assert_eq!(c.y, Some(Offset::Px(20.0)));
    assert_eq!(c.rotate, Some(15.0));
    assert!(c.on_scroll);
    assert_eq!(c.view_port, 0.5);
    assert_eq!(c.background_color.as_deref(), Some("#111"));
    assert_eq!(c.color.as_deref(), Some("white"));
}

#[test]
fn unknown_ease_is_a_config_error() {
    let err = RevealConfig::from_json_str(r#"{ "ease": "bounce" }"#).unwrap_err();
    assert!(matches!(err, RevealError::Config(_)));
}

#[test]
fn missing_file_is_a_config_error() {
    let err = RevealConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(err.to_string().contains("open reveal config"));
}

#[test]
fn validate_is_strict_but_opt_in() {
    assert!(RevealConfig::default().validate().is_ok());

    let c = RevealConfig {
        duration: -1.0,
        ..RevealConfig::default()
    };
    assert!(c.validate().is_err());

    let c = RevealConfig {
        view_port: 1.5,
        ..RevealConfig::default()
    };
    assert!(c.validate().is_err());

    let c = RevealConfig {
        opacity: Some(2.0),
        ..RevealConfig::default()
    };
    assert!(c.validate().is_err());

    let c = RevealConfig {
        x: Some(Offset::Raw("  ".to_string())),
        ..RevealConfig::default()
    };
    assert!(c.validate().is_err());
}

#[test]
fn plain_config_has_only_bare_rotation() {
    let c = RevealConfig::default();
    assert!(c.pre_mount_style().is_empty());
    let initial = c.initial_style();
    assert_eq!(initial.opacity, None);
    assert_eq!(initial.transform.as_deref(), Some("rotate(0deg)"));
}

#[test]
fn opacity_starts_hidden_and_targets_configured_value() {
    let c = RevealConfig {
        opacity: Some(0.5),
        ..RevealConfig::default()
    };
    assert_eq!(c.pre_mount_style().opacity, Some(0.0));
    assert_eq!(c.initial_style().opacity, Some(0.0));
    assert_eq!(c.target_patch().opacity, Some(0.5));
}

#[test]
fn colors_only_appear_in_target() {
    let c = RevealConfig {
        background_color: Some("black".to_string()),
        color: Some("white".to_string()),
        ..RevealConfig::default()
    };
    let initial = c.initial_style();
    assert_eq!(initial.background_color, None);
    assert_eq!(initial.color, None);

    let target = c.target_patch();
    assert_eq!(target.transform.as_deref(), Some("none"));
    assert_eq!(target.background_color.as_deref(), Some("black"));
    assert_eq!(target.color.as_deref(), Some("white"));
}

#[test]
fn schedule_delay_is_half_duration_then_one_ms() {
    let c = RevealConfig {
        duration: 600.0,
        ..RevealConfig::default()
    };
    assert_eq!(c.schedule_delay_ms(true), 300.0);
    assert_eq!(c.schedule_delay_ms(false), 1.0);
}
