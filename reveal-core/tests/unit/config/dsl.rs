use super::*;

#[test]
fn builder_sets_every_field() {
    let c = RevealConfigBuilder::new()
        .opacity(0.8)
        .duration(1200.0)
        .delay(50.0)
        .ease(Ease::EaseIn)
        .x("5vw")
        .y(12)
        .rotate(-10.0)
        .on_scroll(true)
        .view_port(0.6)
        .background_color("navy")
        .color("gold")
        .reverse(true)
        .build()
        .unwrap();

    assert_eq!(c.opacity, Some(0.8));
    assert_eq!(c.duration, 1200.0);
    assert_eq!(c.delay, 50.0);
    assert_eq!(c.ease, Ease::EaseIn);
    assert_eq!(c.x, Some(Offset::from("5vw")));
    assert_eq!(c.y, Some(Offset::Px(12.0)));
    assert_eq!(c.rotate, Some(-10.0));
    assert!(c.on_scroll);
    assert_eq!(c.view_port, 0.6);
    assert_eq!(c.background_color.as_deref(), Some("navy"));
    assert_eq!(c.color.as_deref(), Some("gold"));
    assert!(c.reverse);
}

#[test]
fn permissive_unless_strict() {
    assert!(RevealConfigBuilder::new().duration(-100.0).build().is_ok());
    assert!(
        RevealConfigBuilder::new()
            .duration(-100.0)
            .strict()
            .build()
            .is_err()
    );
}
