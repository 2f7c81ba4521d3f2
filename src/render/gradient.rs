use crate::foundation::core::Rgba8;

/// Color at `t` along evenly spaced `stops`.
pub(crate) fn sample_stops(stops: &[Rgba8], t: f64) -> Rgba8 {
    match stops {
        [] => Rgba8::rgba(0, 0, 0, 0),
        [only] => *only,
        _ => {
            let segments = (stops.len() - 1) as f64;
            let pos = t.clamp(0.0, 1.0) * segments;
            let i = (pos.floor() as usize).min(stops.len() - 2);
            stops[i].lerp(stops[i + 1], pos - i as f64)
        }
    }
}

/// Straight RGBA8 linear gradient from the top-left corner to the bottom-right corner.
pub(crate) fn diagonal_gradient_rgba8(stops: &[Rgba8], width: u32, height: u32) -> Vec<u8> {
    let (w, h) = (f64::from(width), f64::from(height));
    let len2 = (w * w + h * h).max(f64::EPSILON);
    let mut bytes = vec![0u8; (width as usize) * (height as usize) * 4];
    for (i, px) in bytes.chunks_exact_mut(4).enumerate() {
        let x = (i % width as usize) as f64 + 0.5;
        let y = (i / width as usize) as f64 + 0.5;
        let c = sample_stops(stops, (x * w + y * h) / len2);
        px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }
    bytes
}

/// Straight RGBA8 radial gradient filling a `diameter`² square, `inner` at the center.
pub(crate) fn radial_gradient_rgba8(inner: Rgba8, outer: Rgba8, diameter: u32) -> Vec<u8> {
    let d = diameter.max(1);
    let r = f64::from(d) * 0.5;
    let mut bytes = vec![0u8; (d as usize) * (d as usize) * 4];
    for (i, px) in bytes.chunks_exact_mut(4).enumerate() {
        let x = (i % d as usize) as f64 + 0.5 - r;
        let y = (i / d as usize) as f64 + 0.5 - r;
        let c = inner.lerp(outer, (x * x + y * y).sqrt() / r);
        px.copy_from_slice(&[c.r, c.g, c.b, c.a]);
    }
    bytes
}

#[cfg(test)]
#[path = "../../tests/unit/render/gradient.rs"]
mod tests;
