use super::*;

fn spec(x: Option<Offset>, y: Option<Offset>, rotate_deg: f64) -> TransformSpec {
    TransformSpec { x, y, rotate_deg }
}

#[test]
fn rotation_is_always_present() {
    assert_eq!(TransformSpec::default().css(), "rotate(0deg)");
    assert_eq!(spec(None, None, 45.0).css(), "rotate(45deg)");
    assert_eq!(spec(None, None, -7.5).css(), "rotate(-7.5deg)");
}

#[test]
fn single_axis_uses_axis_function() {
    assert_eq!(
        spec(Some(Offset::Px(100.0)), None, 0.0).css(),
        "translateX(100px) rotate(0deg)"
    );
    assert_eq!(
        spec(Some(Offset::from("10%")), None, 0.0).css(),
        "translateX(10%) rotate(0deg)"
    );
    assert_eq!(
        spec(None, Some(Offset::Px(-30.0)), 0.0).css(),
        "translateY(-30px) rotate(0deg)"
    );
}

#[test]
fn both_axes_use_translate() {
    assert_eq!(
        spec(Some(Offset::Px(50.0)), Some(Offset::Px(20.0)), 0.0).css(),
        "translate(50px, 20px) rotate(0deg)"
    );
    assert_eq!(
        spec(Some(Offset::from("-50%")), Some(Offset::Px(20.0)), 90.0).css(),
        "translate(-50%, 20px) rotate(90deg)"
    );
}

#[test]
fn affine_matches_pixel_transform() {
    let t = spec(Some(Offset::Px(10.0)), Some(Offset::Px(-2.5)), 0.0);
    assert_eq!(
        t.to_affine(),
        Some(Affine::translate(Vec2::new(10.0, -2.5)))
    );
    assert_eq!(TransformSpec::default().to_affine(), Some(Affine::IDENTITY));
}

#[test]
fn affine_rotates_before_translating() {
    let t = spec(Some(Offset::Px(10.0)), None, 90.0);
    let p = t.to_affine().unwrap() * kurbo::Point::new(1.0, 0.0);
    assert!((p.x - 10.0).abs() < 1e-9);
    assert!((p.y - 1.0).abs() < 1e-9);
}

#[test]
fn affine_is_unavailable_for_relative_units() {
    assert_eq!(spec(Some(Offset::from("10%")), None, 0.0).to_affine(), None);
}
