//! The composition orchestrator: photos in, one decorated image out.

use image::{ExtendedColorType, ImageEncoder, codecs::png::PngEncoder};

pub(crate) mod opts;
pub(crate) mod pipeline;

use crate::{
    assets::{PhotoSource, decode::to_data_uri},
    compose::opts::ComposeOpts,
    effects::filter::{Filter, apply_filter},
    foundation::{
        core::Slot,
        error::{PhotoboothError, PhotoboothResult},
    },
    frame::config::resolve_frame_config,
    layout::{
        adapt::adapt_layout,
        fit::{apply_offset, fit_canvas},
        grid::generate_grid,
    },
    render::surface::Surface,
};

/// A finished composition.
#[derive(Clone, Debug, PartialEq)]
pub struct ComposedImage {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Straight-alpha RGBA8 pixels, row-major.
    pub rgba: Vec<u8>,
    /// Final slot rectangles in canvas coordinates.
    pub slots: Vec<Slot>,
    /// `drawn[i]` is `true` when slot `i` received a photo.
    pub drawn: Vec<bool>,
}

impl ComposedImage {
    pub fn encode_png(&self) -> PhotoboothResult<Vec<u8>> {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(&self.rgba, self.width, self.height, ExtendedColorType::Rgba8)
            .map_err(|e| PhotoboothError::encode(format!("png: {e}")))?;
        Ok(out)
    }

    /// `data:image/png;base64,...`
    pub fn to_data_uri(&self) -> PhotoboothResult<String> {
        Ok(to_data_uri("image/png", &self.encode_png()?))
    }
}

/// Compose `sources` into a decorated strip with default options.
///
/// `photo_count` selects the layout family (3, 4 and 6 are adapted to the photos, any other
/// count gets a plain column). `template_id` picks a frame configuration and falls back to the
/// first one when unknown. `filter_id` selects a color filter (`None` or `0` for none).
///
/// Individual photos that fail to decode leave their slot blank. An empty source list or a
/// zero photo count is rejected; a canvas that cannot be allocated is fatal.
pub fn compose(
    sources: &[PhotoSource],
    photo_count: usize,
    template_id: u32,
    filter_id: Option<u32>,
) -> PhotoboothResult<ComposedImage> {
    compose_with_opts(
        sources,
        photo_count,
        template_id,
        filter_id,
        &ComposeOpts::default(),
    )
}

/// Like [`compose`], but returns the encoded PNG.
pub fn compose_png(
    sources: &[PhotoSource],
    photo_count: usize,
    template_id: u32,
    filter_id: Option<u32>,
) -> PhotoboothResult<Vec<u8>> {
    compose(sources, photo_count, template_id, filter_id)?.encode_png()
}

#[tracing::instrument(skip(sources, opts), fields(source_count = sources.len()))]
pub fn compose_with_opts(
    sources: &[PhotoSource],
    photo_count: usize,
    template_id: u32,
    filter_id: Option<u32>,
    opts: &ComposeOpts,
) -> PhotoboothResult<ComposedImage> {
    if sources.is_empty() {
        return Err(PhotoboothError::validation("no photo sources to compose"));
    }
    if photo_count == 0 {
        return Err(PhotoboothError::validation("photo count must be at least 1"));
    }
    if sources.len() > photo_count {
        tracing::warn!(
            sources = sources.len(),
            photo_count,
            "more photo sources than slots, ignoring the excess"
        );
    }

    let config = resolve_frame_config(template_id);
    let filter = Filter::from_id(filter_id);
    let initial = generate_grid(photo_count, opts.reference);

    let photos = pipeline::decode_sources(sources, photo_count, opts.parallel_decode);
    let sizes: Vec<_> = photos
        .iter()
        .map(|p| p.as_ref().map(|p| p.size()))
        .collect();

    let adapted = adapt_layout(&initial, &sizes, opts.reference, photo_count);
    let fit = fit_canvas(&adapted, opts.canvas_padding);
    let slots = apply_offset(&adapted, fit.offset);
    tracing::debug!(
        width = fit.canvas.width,
        height = fit.canvas.height,
        offset = ?fit.offset,
        "resolved canvas"
    );

    let mut surface = Surface::new(fit.canvas)?;
    pipeline::draw_background(&mut surface, config)?;
    let drawn = pipeline::draw_photos(&mut surface, &slots, &photos, opts)?;
    pipeline::draw_frame_with_shadow(&mut surface, &slots, config)?;

    let mut rgba = surface.to_rgba8();
    apply_filter(&mut rgba, filter);

    Ok(ComposedImage {
        width: fit.canvas.width,
        height: fit.canvas.height,
        rgba,
        slots,
        drawn,
    })
}

#[cfg(test)]
#[path = "../tests/unit/compose/compose.rs"]
mod tests;
