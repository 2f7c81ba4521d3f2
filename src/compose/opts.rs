use crate::foundation::core::Canvas;

/// Reference size the layout grid is generated against.
pub const REFERENCE_CANVAS: Canvas = Canvas::new(800, 600);
/// Canvas padding used around the adapted layout when composing.
pub const COMPOSE_CANVAS_PADDING: f64 = 20.0;
/// Corner radius of the rounded photo clip.
pub const PHOTO_CORNER_RADIUS: f64 = 8.0;

const PARALLEL_DECODE_ENV: &str = "PHOTOBOOTH_PARALLEL_DECODE";

/// Tunables for [`compose_with_opts`](crate::compose_with_opts).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComposeOpts {
    /// Reference canvas for the layout grid generator.
    pub reference: Canvas,
    /// Padding between the adapted layout and the output canvas edge.
    pub canvas_padding: f64,
    /// Photo clip corner radius.
    pub corner_radius: f64,
    /// Decode photo sources concurrently.
    pub parallel_decode: bool,
}

impl Default for ComposeOpts {
    fn default() -> Self {
        Self {
            reference: REFERENCE_CANVAS,
            canvas_padding: COMPOSE_CANVAS_PADDING,
            corner_radius: PHOTO_CORNER_RADIUS,
            parallel_decode: true,
        }
    }
}

impl ComposeOpts {
    /// Defaults, with `PHOTOBOOTH_PARALLEL_DECODE=0|1` overriding `parallel_decode`.
    pub fn from_env() -> Self {
        let parallel_decode = std::env::var(PARALLEL_DECODE_ENV)
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);
        Self {
            parallel_decode,
            ..Self::default()
        }
    }

    pub fn with_reference(mut self, reference: Canvas) -> Self {
        self.reference = reference;
        self
    }

    pub fn with_canvas_padding(mut self, padding: f64) -> Self {
        self.canvas_padding = padding;
        self
    }

    pub fn with_corner_radius(mut self, radius: f64) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_parallel_decode(mut self, parallel: bool) -> Self {
        self.parallel_decode = parallel;
        self
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/opts.rs"]
mod tests;
