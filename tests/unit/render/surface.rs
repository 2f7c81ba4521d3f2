use super::*;

#[test]
fn zero_or_oversized_canvas_is_a_canvas_error() {
    for canvas in [
        Canvas::new(0, 10),
        Canvas::new(10, 0),
        Canvas::new(70_000, 10),
    ] {
        let err = Surface::new(canvas).err().unwrap();
        assert!(matches!(err, PhotoboothError::Canvas(_)), "{canvas:?}");
    }
}

#[test]
fn layers_composite_in_order() {
    let mut surface = Surface::new(Canvas::new(8, 4)).unwrap();
    let red = surface
        .render_layer(|ctx| {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(255, 0, 0, 255));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, 8.0, 4.0));
            Ok(())
        })
        .unwrap();
    let blue_left = surface
        .render_layer(|ctx| {
            ctx.set_paint(vello_cpu::peniko::Color::from_rgba8(0, 0, 255, 255));
            ctx.fill_rect(&vello_cpu::kurbo::Rect::new(0.0, 0.0, 4.0, 4.0));
            Ok(())
        })
        .unwrap();
    surface.composite(&red).unwrap();
    surface.composite(&blue_left).unwrap();

    let rgba = surface.to_rgba8();
    assert_eq!(rgba.len(), 8 * 4 * 4);
    assert_eq!(&rgba[0..4], &[0, 0, 255, 255]);
    let right = (2 * 8 + 6) * 4;
    assert_eq!(&rgba[right..right + 4], &[255, 0, 0, 255]);
}

#[test]
fn image_paint_rejects_mismatched_buffers() {
    assert!(image_paint(&[0u8; 12], 2, 2).is_err());
    assert!(image_paint(&[255u8; 16], 2, 2).is_ok());
}
