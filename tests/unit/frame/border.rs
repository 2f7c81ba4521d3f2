use super::*;
use crate::foundation::core::Canvas;
use crate::frame::config::frame_config;
use crate::render::surface::Surface;

fn square_layout() -> Vec<Slot> {
    vec![
        Slot::new(20.0, 20.0, 100.0, 100.0),
        Slot::new(130.0, 20.0, 100.0, 100.0),
        Slot::new(20.0, 130.0, 100.0, 100.0),
        Slot::new(130.0, 130.0, 100.0, 100.0),
    ]
}

#[test]
fn band_is_inset_from_layout_bounds() {
    let band = border_band(&square_layout()).unwrap();
    // Bounds 210x210, inset 8.4, band 193.2, thickness 3.864.
    assert!((band.inset - 8.4).abs() < 1e-9);
    assert!((band.rect.x0 - 28.4).abs() < 1e-9);
    assert!((band.rect.x1 - 221.6).abs() < 1e-9);
    assert!((band.thickness - 0.02 * 193.2).abs() < 1e-9);
    assert!((band.motif_size() - band.thickness * 1.5).abs() < 1e-9);
}

#[test]
fn empty_layout_has_no_band() {
    assert!(border_band(&[]).is_none());
}

#[test]
fn edge_positions_stop_before_the_far_spacing() {
    assert_eq!(edge_positions(0.0, 100.0, 20.0), vec![20.0, 40.0, 60.0]);
    assert_eq!(edge_positions(0.0, 40.0, 20.0), Vec::<f64>::new());
    assert!(edge_positions(0.0, 100.0, 0.0).is_empty());
    assert!(edge_positions(0.0, 100.0, f64::NAN).is_empty());
}

#[test]
fn simple_pattern_has_no_motifs() {
    let band = border_band(&square_layout()).unwrap();
    assert!(motif_placements(&band, PatternType::Simple).is_empty());
}

#[test]
fn corners_get_scaled_motifs() {
    let band = border_band(&square_layout()).unwrap();
    let placements = motif_placements(&band, PatternType::Star);
    let corners: Vec<_> = placements.iter().filter(|m| m.corner).collect();
    assert_eq!(corners.len(), 4);
    for c in corners {
        assert!((c.size - band.motif_size() * 1.5).abs() < 1e-9);
    }
}

#[test]
fn edge_motifs_never_overlap_corner_motifs() {
    let layout = vec![Slot::new(0.0, 0.0, 793.0, 400.0)];
    let band = border_band(&layout).unwrap();
    for pattern in [PatternType::Heart, PatternType::Star, PatternType::Flower] {
        let placements = motif_placements(&band, pattern);
        assert!(placements.iter().any(|m| !m.corner));
        for e in placements.iter().filter(|m| !m.corner) {
            for c in placements.iter().filter(|m| m.corner) {
                let reach = (e.size + c.size) * 0.5;
                let dx = (e.center.x - c.center.x).abs();
                let dy = (e.center.y - c.center.y).abs();
                assert!(dx.max(dy) >= reach, "{pattern:?} edge motif touches a corner");
            }
        }
    }
}

#[test]
fn simple_frame_draws_double_line() {
    let layout = square_layout();
    let band = border_band(&layout).unwrap();
    let config = frame_config(4).unwrap();
    let surface = Surface::new(Canvas::new(250, 250)).unwrap();
    let layer = surface
        .render_layer(|ctx| draw_frame(ctx, &layout, config))
        .unwrap();

    let px = |x: f64, y: f64| {
        let i = ((y as usize) * 250 + x as usize) * 4;
        [layer[i], layer[i + 1], layer[i + 2], layer[i + 3]]
    };
    let mid = 125.0;
    assert_eq!(px(band.rect.x0, mid), [0x33, 0x33, 0x33, 255]);
    assert_eq!(px(5.0, 5.0)[3], 0);
    assert_eq!(px(mid, mid)[3], 0);
}

#[test]
fn flower_frame_draws_gradient_centers() {
    let layout = vec![Slot::new(10.0, 10.0, 600.0, 600.0)];
    let band = border_band(&layout).unwrap();
    let config = frame_config(3).unwrap();
    let surface = Surface::new(Canvas::new(640, 640)).unwrap();
    let layer = surface
        .render_layer(|ctx| draw_frame(ctx, &layout, config))
        .unwrap();

    let corner = band.rect.origin();
    let i = ((corner.y as usize) * 640 + corner.x as usize) * 4;
    // Gold at the disc center: strong red, no blue.
    assert_eq!(layer[i + 3], 255);
    assert!(layer[i] > 240 && layer[i + 2] < 16);
}

fn render_corner_pixel(template_id: u32) -> ([u8; 4], [u8; 4]) {
    let layout = vec![Slot::new(10.0, 10.0, 600.0, 600.0)];
    let band = border_band(&layout).unwrap();
    let config = frame_config(template_id).unwrap();
    let surface = Surface::new(Canvas::new(640, 640)).unwrap();
    let layer = surface
        .render_layer(|ctx| draw_frame(ctx, &layout, config))
        .unwrap();

    let at = |x: f64, y: f64| {
        let i = ((y as usize) * 640 + x as usize) * 4;
        [layer[i], layer[i + 1], layer[i + 2], layer[i + 3]]
    };
    let corner = band.rect.origin();
    (at(corner.x, corner.y), at(320.0, 320.0))
}

#[test]
fn heart_frame_fills_corner_motif_with_pattern_color() {
    let (corner, inside) = render_corner_pixel(1);
    let c = frame_config(1).unwrap().pattern_color;
    assert_eq!(corner, [c.r, c.g, c.b, 255]);
    assert_eq!(inside[3], 0);
}

#[test]
fn star_frame_fills_corner_motif_with_pattern_color() {
    let (corner, inside) = render_corner_pixel(2);
    let c = frame_config(2).unwrap().pattern_color;
    assert_eq!(corner, [c.r, c.g, c.b, 255]);
    assert_eq!(inside[3], 0);
}
