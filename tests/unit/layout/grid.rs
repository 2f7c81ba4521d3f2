use super::*;

const REF: Canvas = Canvas::new(800, 600);

fn assert_valid(layout: &[Slot], reference: Canvas) {
    let (w, h) = (reference.width_f64(), reference.height_f64());
    for (i, s) in layout.iter().enumerate() {
        assert!(s.w > 0.0 && s.h > 0.0, "slot {i} has no area: {s:?}");
        assert!(s.x >= 0.0 && s.y >= 0.0, "slot {i} starts outside: {s:?}");
        assert!(s.x + s.w <= w + 1e-9, "slot {i} exceeds width: {s:?}");
        assert!(s.y + s.h <= h + 1e-9, "slot {i} exceeds height: {s:?}");
        for (j, other) in layout.iter().enumerate().skip(i + 1) {
            assert!(!s.overlaps(*other), "slots {i} and {j} overlap");
        }
    }
}

#[test]
fn supported_counts_yield_exact_non_overlapping_slots() {
    for count in [3usize, 4, 6] {
        let layout = generate_grid(count, REF);
        assert_eq!(layout.len(), count);
        assert_valid(&layout, REF);
    }
}

#[test]
fn three_photos_stack_full_width_rows() {
    let layout = generate_grid(3, REF);
    for s in &layout {
        assert_eq!(s.x, 4.0);
        assert_eq!(s.w, 792.0);
        assert!((s.h - layout[0].h).abs() < 1e-9);
    }
    assert!((layout[1].y - (layout[0].y + layout[0].h + 6.0)).abs() < 1e-9);
}

#[test]
fn four_photos_are_centered_equal_squares() {
    let layout = generate_grid(4, REF);
    for s in &layout {
        assert_eq!(s.w, s.h);
        assert_eq!(s.w, 293.0);
    }
    let bbox = crate::layout::bounding_box(&layout).unwrap();
    assert!((bbox.center().x - 400.0).abs() < 1e-9);
    assert!((bbox.center().y - 300.0).abs() < 1e-9);
}

#[test]
fn six_photos_form_two_columns_three_rows() {
    let layout = generate_grid(6, REF);
    let xs: Vec<f64> = layout.iter().map(|s| s.x).collect();
    assert_eq!(xs[0], xs[2]);
    assert_eq!(xs[1], xs[3]);
    assert!(xs[1] > xs[0]);
    assert!(layout[2].y > layout[0].y && layout[4].y > layout[2].y);
}

#[test]
fn fallback_counts_stay_inside_reference() {
    for count in [1usize, 2, 5, 7, 12, 150] {
        let layout = generate_grid(count, REF);
        assert_eq!(layout.len(), count);
        assert_valid(&layout, REF);
    }
    assert!(generate_grid(0, REF).is_empty());
}
