use super::*;

#[test]
fn rgba8_premul_rounds_like_straight_to_premul_conversion() {
    assert_eq!(Rgba8::rgb(10, 20, 30).to_premul(), [10, 20, 30, 255]);
    assert_eq!(Rgba8::rgba(255, 0, 128, 0).to_premul(), [0, 0, 0, 0]);
    assert_eq!(
        Rgba8::rgba(100, 50, 200, 128).to_premul(),
        [
            ((100u16 * 128 + 127) / 255) as u8,
            ((50u16 * 128 + 127) / 255) as u8,
            ((200u16 * 128 + 127) / 255) as u8,
            128
        ]
    );
}

#[test]
fn rgba8_serializes_as_hex() {
    let opaque = serde_json::to_value(Rgba8::rgb(255, 105, 180)).unwrap();
    assert_eq!(opaque, serde_json::json!("#ff69b4"));

    let translucent = serde_json::to_value(Rgba8::rgba(0, 0, 0, 0x4d)).unwrap();
    assert_eq!(translucent, serde_json::json!("#0000004d"));
}

#[test]
fn rgba8_lerp_endpoints_and_midpoint() {
    let a = Rgba8::rgb(0, 100, 200);
    let b = Rgba8::rgb(200, 100, 0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5), Rgba8::rgb(100, 100, 100));
}

#[test]
fn slot_overlap_ignores_touching_edges() {
    let a = Slot::new(0.0, 0.0, 10.0, 10.0);
    let touching = Slot::new(10.0, 0.0, 10.0, 10.0);
    let crossing = Slot::new(5.0, 5.0, 10.0, 10.0);
    assert!(!a.overlaps(touching));
    assert!(a.overlaps(crossing));
    assert!(crossing.overlaps(a));
}

#[test]
fn slot_centered_keeps_center() {
    let cell = Slot::new(10.0, 20.0, 100.0, 50.0);
    let inner = cell.centered(40.0, 10.0);
    assert_eq!(inner.center(), cell.center());
    assert_eq!((inner.w, inner.h), (40.0, 10.0));
}
