use super::*;

fn solid_png(w: u32, h: u32, rgba: [u8; 4]) -> PhotoSource {
    let img = image::RgbaImage::from_pixel(w, h, image::Rgba(rgba));
    let mut bytes = Vec::new();
    PngEncoder::new(&mut bytes)
        .write_image(img.as_raw(), w, h, ExtendedColorType::Rgba8)
        .unwrap();
    PhotoSource::Encoded(bytes)
}

#[test]
fn rejects_empty_sources_and_zero_count() {
    let err = compose(&[], 4, 4, None).unwrap_err();
    assert!(matches!(err, PhotoboothError::Validation(_)));

    let one = [solid_png(4, 4, [255, 0, 0, 255])];
    let err = compose(&one, 0, 4, None).unwrap_err();
    assert!(matches!(err, PhotoboothError::Validation(_)));
}

#[test]
fn missing_sources_leave_slots_blank() {
    let sources = [solid_png(8, 8, [255, 0, 0, 255])];
    let out = compose(&sources, 3, 1, None).unwrap();
    assert_eq!(out.slots.len(), 3);
    assert_eq!(out.drawn, vec![true, false, false]);
}

#[test]
fn excess_sources_are_ignored() {
    let sources: Vec<_> = (0..5).map(|_| solid_png(8, 8, [0, 0, 255, 255])).collect();
    let out = compose(&sources, 4, 2, None).unwrap();
    assert_eq!(out.drawn, vec![true; 4]);
}

#[test]
fn canvas_wraps_layout_with_padding() {
    let sources: Vec<_> = (0..6).map(|_| solid_png(40, 30, [0, 255, 0, 255])).collect();
    let out = compose(&sources, 6, 3, None).unwrap();
    assert_eq!(out.rgba.len(), (out.width * out.height * 4) as usize);
    let min_x = out.slots.iter().map(|s| s.x).fold(f64::INFINITY, f64::min);
    let min_y = out.slots.iter().map(|s| s.y).fold(f64::INFINITY, f64::min);
    assert!((min_x - 20.0).abs() < 1e-9);
    assert!((min_y - 20.0).abs() < 1e-9);
}

#[test]
fn sequential_and_parallel_decode_agree() {
    let sources: Vec<_> = (0..3)
        .map(|i| solid_png(30, 20, [80 * i as u8, 10, 200, 255]))
        .collect();
    let seq = compose_with_opts(
        &sources,
        3,
        5,
        Some(1),
        &ComposeOpts::default().with_parallel_decode(false),
    )
    .unwrap();
    let par = compose_with_opts(&sources, 3, 5, Some(1), &ComposeOpts::default()).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn png_and_data_uri_outputs() {
    let sources = [solid_png(8, 8, [255, 0, 0, 255])];
    let out = compose(&sources, 1, 8, None).unwrap();
    let png = out.encode_png().unwrap();
    assert_eq!(&png[1..4], b"PNG");
    let decoded = image::load_from_memory(&png).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (out.width, out.height));
    assert!(out.to_data_uri().unwrap().starts_with("data:image/png;base64,"));
}
