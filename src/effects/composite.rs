use crate::foundation::error::{PhotoboothError, PhotoboothResult};

pub(crate) type PremulRgba8 = [u8; 4];

/// Porter-Duff source-over for one premultiplied pixel.
pub(crate) fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    match src[3] {
        0 => dst,
        255 => src,
        sa => {
            let inv = 255u16 - u16::from(sa);
            std::array::from_fn(|i| src[i].saturating_add(mul_div255(u16::from(dst[i]), inv)))
        }
    }
}

pub(crate) fn over_in_place(dst: &mut [u8], src: &[u8]) -> PhotoboothResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(PhotoboothError::canvas(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

fn mul_div255(x: u16, y: u16) -> u8 {
    (((u32::from(x) * u32::from(y)) + 127) / 255) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/composite.rs"]
mod tests;
