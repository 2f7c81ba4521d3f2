use super::*;

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn heart_fits_its_size_box() {
    let bbox = heart(Point::new(50.0, 50.0), 20.0).bounding_box();
    assert!(close(bbox.x0, 40.0) && close(bbox.x1, 60.0));
    assert!(bbox.y0 >= 40.0 - 1e-6);
    assert!(close(bbox.y1, 60.0));
}

#[test]
fn star_tip_points_up_and_spans_size() {
    let path = star(Point::new(0.0, 0.0), 10.0);
    let bbox = path.bounding_box();
    assert!(close(bbox.y0, -5.0));
    assert!(bbox.x0 > -5.0 && bbox.x1 < 5.0);
    assert_eq!(path.elements().len(), 11);
}

#[test]
fn flower_has_five_petals_around_center() {
    let c = Point::new(10.0, 10.0);
    let petals = flower_petals(c, 20.0);
    assert_eq!(petals.len(), 5);
    let union = petals
        .iter()
        .map(|p| p.bounding_box())
        .reduce(|a, b| a.union(b))
        .unwrap();
    assert!(union.contains(c));
    assert!(union.width() <= 20.0 + 1e-6 && union.height() <= 20.0 + 1e-6);
}

#[test]
fn corner_triangle_points_inward() {
    let tri = corner_triangle(Point::new(100.0, 0.0), -1.0, 1.0, 8.0).bounding_box();
    assert!(close(tri.x0, 92.0) && close(tri.x1, 100.0));
    assert!(close(tri.y0, 0.0) && close(tri.y1, 8.0));
}
