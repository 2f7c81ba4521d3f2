use std::sync::Arc;

use crate::{
    assets::decode::{premultiply_rgba8_in_place, unpremultiply_rgba8_in_place},
    effects::composite::over_in_place,
    foundation::{
        core::Canvas,
        error::{PhotoboothError, PhotoboothResult},
    },
};

/// The mutable output canvas: a premultiplied RGBA8 pixmap.
///
/// `vello_cpu` renders into a fresh buffer, so drawing happens on transparent layers that are
/// then premul-over composited onto the surface.
pub(crate) struct Surface {
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
}

impl Surface {
    pub(crate) fn new(canvas: Canvas) -> PhotoboothResult<Self> {
        let width: u16 = canvas
            .width
            .try_into()
            .map_err(|_| PhotoboothError::canvas("canvas width exceeds u16"))?;
        let height: u16 = canvas
            .height
            .try_into()
            .map_err(|_| PhotoboothError::canvas("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(PhotoboothError::canvas(format!(
                "canvas must have a non-zero area, got {width}x{height}"
            )));
        }
        Ok(Self {
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
        })
    }

    pub(crate) fn canvas(&self) -> Canvas {
        Canvas::new(u32::from(self.width), u32::from(self.height))
    }

    /// Run `draw` on a transparent layer the size of the surface and return its premul bytes.
    pub(crate) fn render_layer<F>(&self, draw: F) -> PhotoboothResult<Vec<u8>>
    where
        F: FnOnce(&mut vello_cpu::RenderContext) -> PhotoboothResult<()>,
    {
        let mut ctx = vello_cpu::RenderContext::new(self.width, self.height);
        draw(&mut ctx)?;
        ctx.flush();
        let mut layer = vello_cpu::Pixmap::new(self.width, self.height);
        ctx.render_to_pixmap(&mut layer);
        Ok(layer.data_as_u8_slice().to_vec())
    }

    /// Premul-over `layer` onto the surface.
    pub(crate) fn composite(&mut self, layer: &[u8]) -> PhotoboothResult<()> {
        over_in_place(self.pixmap.data_as_u8_slice_mut(), layer)
    }

    /// Straight-alpha RGBA8 copy of the surface.
    pub(crate) fn to_rgba8(&self) -> Vec<u8> {
        let mut out = self.pixmap.data_as_u8_slice().to_vec();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }
}

/// Wrap straight-alpha RGBA8 bytes as a `vello_cpu` image paint.
pub(crate) fn image_paint(
    rgba_straight: &[u8],
    width: u32,
    height: u32,
) -> PhotoboothResult<vello_cpu::Image> {
    let w: u16 = width
        .try_into()
        .map_err(|_| PhotoboothError::canvas("image width exceeds u16"))?;
    let h: u16 = height
        .try_into()
        .map_err(|_| PhotoboothError::canvas("image height exceeds u16"))?;
    if rgba_straight.len() != (width as usize) * (height as usize) * 4 {
        return Err(PhotoboothError::canvas("image byte length mismatch"));
    }

    let mut premul = rgba_straight.to_vec();
    premultiply_rgba8_in_place(&mut premul);

    let mut may_have_opacities = false;
    let mut pixels = Vec::with_capacity((width as usize) * (height as usize));
    for px in premul.chunks_exact(4) {
        may_have_opacities |= px[3] != 255;
        pixels.push(vello_cpu::peniko::color::PremulRgba8::from_u8_array([
            px[0], px[1], px[2], px[3],
        ]));
    }
    let pixmap = vello_cpu::Pixmap::from_parts_with_opacity(pixels, w, h, may_have_opacities);
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
