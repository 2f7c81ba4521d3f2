use vello_cpu::kurbo::{Affine, Circle, Shape, Stroke};

use crate::{
    foundation::{
        core::{Point, Rect, Rgba8, Slot},
        error::PhotoboothResult,
    },
    frame::{
        config::{FrameConfig, PatternType},
        motif,
    },
    layout::bounding_box,
    render::{gradient::radial_gradient_rgba8, point_to_cpu, rect_to_cpu, surface::image_paint},
};

/// Inset of the border band from the layout bounds, relative to the smaller bounds dimension.
pub const BORDER_INSET_RATIO: f64 = 0.04;
/// Border thickness, relative to the smaller band dimension.
pub const BORDER_THICKNESS_RATIO: f64 = 0.02;
/// Edge motif size, relative to the border thickness.
pub const MOTIF_SIZE_RATIO: f64 = 1.5;

const FLOWER_CENTER_INNER: Rgba8 = Rgba8::rgb(0xff, 0xd7, 0x00);
const FLOWER_CENTER_OUTER: Rgba8 = Rgba8::rgb(0xff, 0xa5, 0x00);
const CORNER_ACCENT_RATIO: f64 = 2.5;
const FLATTEN_TOLERANCE: f64 = 0.1;

/// Rectangle the frame decorations are drawn along.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BorderBand {
    /// Band rectangle; motifs sit centered on its edges.
    pub rect: Rect,
    /// Distance between the layout bounds and `rect`.
    pub inset: f64,
    /// Line thickness of the band.
    pub thickness: f64,
}

impl BorderBand {
    pub fn motif_size(&self) -> f64 {
        self.thickness * MOTIF_SIZE_RATIO
    }
}

/// Band for `layout`, or `None` when the layout is empty or degenerate.
pub fn border_band(layout: &[Slot]) -> Option<BorderBand> {
    let bounds = bounding_box(layout)?;
    let inset = BORDER_INSET_RATIO * bounds.width().min(bounds.height());
    // Inward: the band overlays the outer margin of the outer photos.
    let rect = bounds.inset(-inset);
    if rect.width() <= 0.0 || rect.height() <= 0.0 {
        return None;
    }
    let thickness = BORDER_THICKNESS_RATIO * rect.width().min(rect.height());
    Some(BorderBand {
        rect,
        inset,
        thickness,
    })
}

/// Motif positions strictly between `start + spacing` and `end - spacing`.
///
/// The first position is `start + spacing`; tiling stops before the last full spacing so
/// nothing lands on the corner at `end`.
pub fn edge_positions(start: f64, end: f64, spacing: f64) -> Vec<f64> {
    if !spacing.is_finite() || spacing <= 0.0 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let mut p = start + spacing;
    while p < end - spacing {
        out.push(p);
        p += spacing;
    }
    out
}

/// One motif instance on the border.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotifPlacement {
    pub center: Point,
    pub size: f64,
    pub corner: bool,
}

/// Every motif drawn for `pattern`: edge instances first, then the four corners.
///
/// The `Simple` pattern has no motifs.
pub fn motif_placements(band: &BorderBand, pattern: PatternType) -> Vec<MotifPlacement> {
    if pattern == PatternType::Simple {
        return Vec::new();
    }
    let r = band.rect;
    let size = band.motif_size();
    let spacing = size * pattern.spacing_factor();
    let edge = |center: Point| MotifPlacement {
        center,
        size,
        corner: false,
    };

    let mut out = Vec::new();
    for x in edge_positions(r.x0, r.x1, spacing) {
        out.push(edge(Point::new(x, r.y0)));
        out.push(edge(Point::new(x, r.y1)));
    }
    for y in edge_positions(r.y0, r.y1, spacing) {
        out.push(edge(Point::new(r.x0, y)));
        out.push(edge(Point::new(r.x1, y)));
    }
    let corner_size = size * pattern.corner_scale();
    for (x, y) in [(r.x0, r.y0), (r.x1, r.y0), (r.x0, r.y1), (r.x1, r.y1)] {
        out.push(MotifPlacement {
            center: Point::new(x, y),
            size: corner_size,
            corner: true,
        });
    }
    out
}

/// Draw the decorative frame for `config` around `layout` into `ctx`.
pub(crate) fn draw_frame(
    ctx: &mut vello_cpu::RenderContext,
    layout: &[Slot],
    config: &FrameConfig,
) -> PhotoboothResult<()> {
    let Some(band) = border_band(layout) else {
        tracing::debug!(template_id = config.id, "empty layout, skipping frame");
        return Ok(());
    };
    tracing::debug!(
        template_id = config.id,
        pattern = ?config.pattern,
        band = ?band.rect,
        thickness = band.thickness,
        "drawing frame"
    );

    ctx.set_transform(Affine::IDENTITY);
    ctx.set_paint_transform(Affine::IDENTITY);
    ctx.set_paint(config.pattern_color.to_cpu());

    match config.pattern {
        PatternType::Simple => draw_double_line(ctx, &band, config.pattern_color),
        PatternType::Heart => {
            for m in motif_placements(&band, config.pattern) {
                ctx.fill_path(&motif::heart(point_to_cpu(m.center), m.size));
            }
            Ok(())
        }
        PatternType::Star => {
            for m in motif_placements(&band, config.pattern) {
                ctx.fill_path(&motif::star(point_to_cpu(m.center), m.size));
            }
            Ok(())
        }
        PatternType::Flower => {
            for m in motif_placements(&band, config.pattern) {
                draw_flower(ctx, m, config.pattern_color)?;
            }
            Ok(())
        }
    }
}

fn draw_flower(
    ctx: &mut vello_cpu::RenderContext,
    m: MotifPlacement,
    petal_color: Rgba8,
) -> PhotoboothResult<()> {
    let c = point_to_cpu(m.center);
    ctx.set_paint_transform(Affine::IDENTITY);
    ctx.set_paint(petal_color.to_cpu());
    for petal in motif::flower_petals(c, m.size) {
        ctx.fill_path(&petal);
    }

    let radius = motif::flower_center_radius(m.size);
    let diameter = (radius * 2.0).ceil().max(1.0) as u32;
    let disc = radial_gradient_rgba8(FLOWER_CENTER_INNER, FLOWER_CENTER_OUTER, diameter);
    let paint = image_paint(&disc, diameter, diameter)?;
    let half = f64::from(diameter) * 0.5;
    ctx.set_paint_transform(Affine::translate((c.x - half, c.y - half)));
    ctx.set_paint(paint);
    ctx.fill_path(&Circle::new(c, radius).to_path(FLATTEN_TOLERANCE));
    ctx.set_paint_transform(Affine::IDENTITY);
    Ok(())
}

fn draw_double_line(
    ctx: &mut vello_cpu::RenderContext,
    band: &BorderBand,
    color: Rgba8,
) -> PhotoboothResult<()> {
    let t = band.thickness;
    ctx.set_paint(color.to_cpu());

    ctx.set_stroke(Stroke::new(t));
    ctx.stroke_rect(&rect_to_cpu(band.rect));

    let inner = band.rect.inset(-0.8 * t);
    if inner.width() > 0.0 && inner.height() > 0.0 {
        ctx.set_stroke(Stroke::new(0.4 * t));
        ctx.stroke_rect(&rect_to_cpu(inner));
    }

    // Accents sit on the inner corners of the double line, legs pointing into the band.
    let len = t * CORNER_ACCENT_RATIO;
    for (corner, dx, dy) in [
        (inner.origin(), 1.0, 1.0),
        (Point::new(inner.x1, inner.y0), -1.0, 1.0),
        (Point::new(inner.x0, inner.y1), 1.0, -1.0),
        (Point::new(inner.x1, inner.y1), -1.0, -1.0),
    ] {
        ctx.fill_path(&motif::corner_triangle(point_to_cpu(corner), dx, dy, len));
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/frame/border.rs"]
mod tests;
