use crate::{
    foundation::core::{Canvas, Slot, Vec2},
    layout::{Layout, bounding_box},
};

/// Padding used by [`fit_canvas`] callers that have no stronger opinion.
pub const DEFAULT_CANVAS_PADDING: f64 = 30.0;

/// Canvas size used when there is nothing to bound.
pub const FALLBACK_CANVAS: Canvas = Canvas::new(800, 600);

/// Output canvas that tightly wraps a layout plus padding.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CanvasFit {
    /// Exact bounding width including padding.
    pub width: f64,
    /// Exact bounding height including padding.
    pub height: f64,
    /// Pixel canvas, `width`/`height` rounded up.
    pub canvas: Canvas,
    /// Subtract from every slot to anchor the padded bounding box at the origin.
    pub offset: Vec2,
}

/// Compute the minimal canvas around `layout` with `padding` on every side.
///
/// An empty layout yields [`FALLBACK_CANVAS`] with a zero offset.
pub fn fit_canvas(layout: &[Slot], padding: f64) -> CanvasFit {
    let Some(bbox) = bounding_box(layout) else {
        return CanvasFit {
            width: FALLBACK_CANVAS.width_f64(),
            height: FALLBACK_CANVAS.height_f64(),
            canvas: FALLBACK_CANVAS,
            offset: Vec2::ZERO,
        };
    };

    let width = bbox.width() + 2.0 * padding;
    let height = bbox.height() + 2.0 * padding;
    CanvasFit {
        width,
        height,
        canvas: Canvas::new(ceil_px(width), ceil_px(height)),
        offset: Vec2::new(bbox.x0 - padding, bbox.y0 - padding),
    }
}

/// Re-anchor a layout by subtracting `offset` from every slot.
pub fn apply_offset(layout: &[Slot], offset: Vec2) -> Layout {
    layout.iter().map(|s| s.translate(-offset)).collect()
}

fn ceil_px(v: f64) -> u32 {
    // Absorb float noise so an exact 140.0000000001 does not become 141.
    (v - 1e-6).ceil().max(1.0) as u32
}

#[cfg(test)]
#[path = "../../tests/unit/layout/fit.rs"]
mod tests;
