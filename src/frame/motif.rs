use std::f64::consts::{FRAC_PI_2, PI, TAU};

use vello_cpu::kurbo::{BezPath, Ellipse, Point, Shape, Vec2};

const FLATTEN_TOLERANCE: f64 = 0.1;

/// Heart of overall width/height `size` centered on `c`.
pub(crate) fn heart(c: Point, size: f64) -> BezPath {
    let s = size * 0.5;
    let mut p = BezPath::new();
    p.move_to((c.x, c.y - s * 0.4));
    p.curve_to(
        (c.x, c.y - s),
        (c.x - s, c.y - s),
        (c.x - s, c.y - s * 0.4),
    );
    p.curve_to(
        (c.x - s, c.y + s * 0.2),
        (c.x, c.y + s * 0.6),
        (c.x, c.y + s),
    );
    p.curve_to(
        (c.x, c.y + s * 0.6),
        (c.x + s, c.y + s * 0.2),
        (c.x + s, c.y - s * 0.4),
    );
    p.curve_to(
        (c.x + s, c.y - s),
        (c.x, c.y - s),
        (c.x, c.y - s * 0.4),
    );
    p.close_path();
    p
}

/// Upright five-pointed star with outer diameter `size` centered on `c`.
pub(crate) fn star(c: Point, size: f64) -> BezPath {
    const POINTS: usize = 5;
    let outer = size * 0.5;
    let inner = outer * 0.4;
    let mut p = BezPath::new();
    for i in 0..POINTS * 2 {
        let r = if i % 2 == 0 { outer } else { inner };
        let angle = -FRAC_PI_2 + i as f64 * PI / POINTS as f64;
        let pt = c + Vec2::new(angle.cos(), angle.sin()) * r;
        if i == 0 {
            p.move_to(pt);
        } else {
            p.line_to(pt);
        }
    }
    p.close_path();
    p
}

/// Five elliptical petals rotated around `c`, spanning roughly `size`.
pub(crate) fn flower_petals(c: Point, size: f64) -> Vec<BezPath> {
    const PETALS: usize = 5;
    let reach = size * 0.25;
    let radii = Vec2::new(size * 0.25, size * 0.14);
    (0..PETALS)
        .map(|i| {
            let angle = -FRAC_PI_2 + i as f64 * TAU / PETALS as f64;
            let center = c + Vec2::new(angle.cos(), angle.sin()) * reach;
            Ellipse::new(center, radii, angle).to_path(FLATTEN_TOLERANCE)
        })
        .collect()
}

/// Radius of the gradient disc at the heart of a flower of `size`.
pub(crate) fn flower_center_radius(size: f64) -> f64 {
    size * 0.16
}

/// Right triangle with its right angle at `corner`, legs of `len` running along `dx` and `dy`.
pub(crate) fn corner_triangle(corner: Point, dx: f64, dy: f64, len: f64) -> BezPath {
    let mut p = BezPath::new();
    p.move_to(corner);
    p.line_to((corner.x + dx * len, corner.y));
    p.line_to((corner.x, corner.y + dy * len));
    p.close_path();
    p
}

#[cfg(test)]
#[path = "../../tests/unit/frame/motif.rs"]
mod tests;
