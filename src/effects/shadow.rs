use crate::foundation::{
    core::Rgba8,
    error::{PhotoboothError, PhotoboothResult},
};

/// Softening radius of every drop shadow, in pixels.
pub(crate) const SHADOW_BLUR_RADIUS: usize = 4;
const SHADOW_BLUR_SIGMA: f64 = 2.0;

/// Offset and tint of a drop shadow.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct ShadowParams {
    pub(crate) dx: i32,
    pub(crate) dy: i32,
    pub(crate) color: Rgba8,
}

impl Default for ShadowParams {
    fn default() -> Self {
        Self {
            dx: 2,
            dy: 2,
            color: Rgba8::rgba(0, 0, 0, 77),
        }
    }
}

/// Premultiplied shadow layer cast by the coverage of a premultiplied `layer`.
pub(crate) fn drop_shadow(
    layer: &[u8],
    width: u32,
    height: u32,
    params: ShadowParams,
) -> PhotoboothResult<Vec<u8>> {
    let (w, h) = (width as usize, height as usize);
    if layer.len() != w * h * 4 {
        return Err(PhotoboothError::canvas(
            "drop_shadow expects a layer matching width*height*4",
        ));
    }

    let tint = params.color.to_premul();
    let mut cast = vec![0u8; layer.len()];
    for y in 0..h {
        let Some(sy) = shifted(y, params.dy, h) else {
            continue;
        };
        for x in 0..w {
            let Some(sx) = shifted(x, params.dx, w) else {
                continue;
            };
            let coverage = u16::from(layer[(sy * w + sx) * 4 + 3]);
            if coverage == 0 {
                continue;
            }
            let px = &mut cast[(y * w + x) * 4..][..4];
            for (out, &t) in px.iter_mut().zip(&tint) {
                *out = ((u16::from(t) * coverage + 127) / 255) as u8;
            }
        }
    }

    if w == 0 || h == 0 {
        return Ok(cast);
    }
    let kernel = shadow_kernel();
    let mut tmp = vec![0u8; cast.len()];
    blur_pass(&cast, &mut tmp, w, h, &kernel, Axis::Horizontal);
    blur_pass(&tmp, &mut cast, w, h, &kernel, Axis::Vertical);
    Ok(cast)
}

/// Source coordinate that lands on `pos` after shifting by `delta`, if it is in bounds.
fn shifted(pos: usize, delta: i32, len: usize) -> Option<usize> {
    let src = pos as i64 - i64::from(delta);
    (0..len as i64).contains(&src).then_some(src as usize)
}

/// Gaussian taps in 16.16 fixed point, summing to exactly `1 << 16`.
fn shadow_kernel() -> [u32; 2 * SHADOW_BLUR_RADIUS + 1] {
    let r = SHADOW_BLUR_RADIUS as f64;
    let denom = 2.0 * SHADOW_BLUR_SIGMA * SHADOW_BLUR_SIGMA;
    let weight = |i: usize| (-((i as f64 - r).powi(2)) / denom).exp();
    let sum: f64 = (0..=2 * SHADOW_BLUR_RADIUS).map(weight).sum();

    let mut taps = std::array::from_fn(|i| ((weight(i) / sum) * 65536.0).round() as u32);
    let total: u32 = taps.iter().sum();
    let mid = &mut taps[SHADOW_BLUR_RADIUS];
    *mid = (*mid + 65536).saturating_sub(total);
    taps
}

#[derive(Clone, Copy)]
enum Axis {
    Horizontal,
    Vertical,
}

fn blur_pass(
    src: &[u8],
    dst: &mut [u8],
    w: usize,
    h: usize,
    kernel: &[u32],
    axis: Axis,
) {
    let (len, stride) = match axis {
        Axis::Horizontal => (w, 1),
        Axis::Vertical => (h, w),
    };
    for y in 0..h {
        for x in 0..w {
            let pos = match axis {
                Axis::Horizontal => x,
                Axis::Vertical => y,
            };
            let base = (y * w + x) - pos * stride;
            let mut acc = [0u64; 4];
            for (k, &tap) in kernel.iter().enumerate() {
                // Edge pixels repeat past the border.
                let sample = (pos + k).saturating_sub(SHADOW_BLUR_RADIUS).min(len - 1);
                let idx = (base + sample * stride) * 4;
                for (a, &v) in acc.iter_mut().zip(&src[idx..idx + 4]) {
                    *a += u64::from(tap) * u64::from(v);
                }
            }
            let out = &mut dst[(y * w + x) * 4..][..4];
            for (o, a) in out.iter_mut().zip(acc) {
                *o = ((a + 32768) >> 16).min(255) as u8;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/shadow.rs"]
mod tests;
