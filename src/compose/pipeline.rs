use image::imageops::{self, FilterType};
use rayon::prelude::*;
use vello_cpu::kurbo::{Affine, RoundedRect, Shape, Stroke};

use crate::{
    assets::{Photo, PhotoSource, decode::decode_photo},
    compose::opts::ComposeOpts,
    effects::shadow::{ShadowParams, drop_shadow},
    foundation::{
        core::{Rgba8, Slot},
        error::PhotoboothResult,
    },
    frame::{border::draw_frame, config::FrameConfig},
    render::{
        gradient::diagonal_gradient_rgba8,
        rect_to_cpu,
        surface::{Surface, image_paint},
    },
};

const PHOTO_BACKDROP: Rgba8 = Rgba8::rgb(0xf5, 0xf5, 0xf5);
const PHOTO_BACKDROP_OUTSET: f64 = 4.0;
const PHOTO_BACKDROP_RADIUS: f64 = 12.0;
const PHOTO_OUTLINE: Rgba8 = Rgba8::rgba(0, 0, 0, 20);
const PHOTO_OUTLINE_WIDTH: f64 = 2.0;
const FLATTEN_TOLERANCE: f64 = 0.1;

/// Decode the first `photo_count` sources. Index `i` of the result belongs to slot `i`;
/// failures and missing sources are `None`.
pub(crate) fn decode_sources(
    sources: &[PhotoSource],
    photo_count: usize,
    parallel: bool,
) -> Vec<Option<Photo>> {
    let decode_one = |i: usize| -> Option<Photo> {
        let source = sources.get(i)?;
        match decode_photo(source) {
            Ok(photo) => Some(photo),
            Err(err) => {
                tracing::warn!(index = i, error = %err, "photo failed to decode, leaving slot blank");
                None
            }
        }
    };

    if parallel {
        (0..photo_count).into_par_iter().map(decode_one).collect()
    } else {
        (0..photo_count).map(decode_one).collect()
    }
}

pub(crate) fn draw_background(
    surface: &mut Surface,
    config: &FrameConfig,
) -> PhotoboothResult<()> {
    let canvas = surface.canvas();
    let full = vello_cpu::kurbo::Rect::new(0.0, 0.0, canvas.width_f64(), canvas.height_f64());
    let layer = surface.render_layer(|ctx| {
        match config.gradient_stops {
            Some(stops) => {
                let bytes = diagonal_gradient_rgba8(stops, canvas.width, canvas.height);
                ctx.set_paint(image_paint(&bytes, canvas.width, canvas.height)?);
            }
            None => ctx.set_paint(config.background.to_cpu()),
        }
        ctx.fill_rect(&full);
        Ok(())
    })?;
    surface.composite(&layer)
}

/// Draw every present photo into its slot. Returns which slots received a photo.
pub(crate) fn draw_photos(
    surface: &mut Surface,
    slots: &[Slot],
    photos: &[Option<Photo>],
    opts: &ComposeOpts,
) -> PhotoboothResult<Vec<bool>> {
    let mut drawn = vec![false; slots.len()];
    let layer = surface.render_layer(|ctx| {
        for (i, (slot, photo)) in slots.iter().zip(photos).enumerate() {
            let Some(photo) = photo else {
                continue;
            };
            match draw_photo(ctx, *slot, photo, opts.corner_radius) {
                Ok(()) => drawn[i] = true,
                Err(err) => {
                    tracing::warn!(index = i, error = %err, "photo could not be drawn, leaving slot blank");
                }
            }
        }
        Ok(())
    })?;
    surface.composite(&layer)?;
    Ok(drawn)
}

fn draw_photo(
    ctx: &mut vello_cpu::RenderContext,
    slot: Slot,
    photo: &Photo,
    corner_radius: f64,
) -> PhotoboothResult<()> {
    let rect = rect_to_cpu(slot.rect());
    let fitted = cover_resize(photo, slot);
    let paint = image_paint(fitted.as_raw(), fitted.width(), fitted.height())?;
    let origin = (rect.x0, rect.y0);

    ctx.set_transform(Affine::IDENTITY);
    ctx.set_paint_transform(Affine::IDENTITY);
    ctx.set_paint(PHOTO_BACKDROP.to_cpu());
    let backdrop = RoundedRect::from_rect(
        rect.inflate(PHOTO_BACKDROP_OUTSET, PHOTO_BACKDROP_OUTSET),
        PHOTO_BACKDROP_RADIUS,
    );
    ctx.fill_path(&backdrop.to_path(FLATTEN_TOLERANCE));

    let clip = RoundedRect::from_rect(rect, corner_radius).to_path(FLATTEN_TOLERANCE);
    ctx.set_paint_transform(Affine::translate(origin));
    ctx.set_paint(paint);
    ctx.fill_path(&clip);
    ctx.set_paint_transform(Affine::IDENTITY);

    ctx.set_paint(PHOTO_OUTLINE.to_cpu());
    ctx.set_stroke(Stroke::new(PHOTO_OUTLINE_WIDTH));
    ctx.stroke_path(&clip);
    Ok(())
}

/// Center-crop `photo` to the aspect ratio of `slot`, then resize the crop to the slot's pixel
/// size. The result is never larger than the slot.
pub(crate) fn cover_resize(photo: &Photo, slot: Slot) -> image::RgbaImage {
    let (iw, ih) = (photo.width(), photo.height());
    let dw = slot.w.ceil().max(1.0) as u32;
    let dh = slot.h.ceil().max(1.0) as u32;

    let slot_aspect = slot.w / slot.h;
    let (cw, ch) = if f64::from(iw) / f64::from(ih) > slot_aspect {
        let cw = (f64::from(ih) * slot_aspect).round().clamp(1.0, f64::from(iw));
        (cw as u32, ih)
    } else {
        let ch = (f64::from(iw) / slot_aspect).round().clamp(1.0, f64::from(ih));
        (iw, ch as u32)
    };
    let crop = imageops::crop_imm(
        photo.pixels.as_ref(),
        (iw - cw) / 2,
        (ih - ch) / 2,
        cw,
        ch,
    );
    imageops::resize(&*crop, dw, dh, FilterType::Triangle)
}

/// Draw the decorative frame on its own layer, under-laid with its drop shadow.
pub(crate) fn draw_frame_with_shadow(
    surface: &mut Surface,
    slots: &[Slot],
    config: &FrameConfig,
) -> PhotoboothResult<()> {
    let canvas = surface.canvas();
    let layer = surface.render_layer(|ctx| draw_frame(ctx, slots, config))?;
    let shadow = drop_shadow(&layer, canvas.width, canvas.height, ShadowParams::default())?;
    surface.composite(&shadow)?;
    surface.composite(&layer)
}

#[cfg(test)]
#[path = "../../tests/unit/compose/pipeline.rs"]
mod tests;
