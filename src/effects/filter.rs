use rayon::prelude::*;
use serde::Serialize;

/// Per-pixel color transform applied to the finished canvas.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Filter {
    Pink,
    Sunset,
    Vintage,
    Bright,
    #[default]
    None,
}

impl Filter {
    /// Every selectable filter, in id order. `None` is not listed.
    pub const ALL: [Filter; 4] = [Filter::Pink, Filter::Sunset, Filter::Vintage, Filter::Bright];

    pub fn id(self) -> Option<u32> {
        match self {
            Filter::Pink => Some(1),
            Filter::Sunset => Some(2),
            Filter::Vintage => Some(3),
            Filter::Bright => Some(4),
            Filter::None => None,
        }
    }

    /// `None` and `0` mean no filter. Unknown ids are logged and treated as no filter.
    pub fn from_id(id: Option<u32>) -> Self {
        match id {
            None | Some(0) => Filter::None,
            Some(1) => Filter::Pink,
            Some(2) => Filter::Sunset,
            Some(3) => Filter::Vintage,
            Some(4) => Filter::Bright,
            Some(other) => {
                tracing::warn!(filter_id = other, "unknown filter id, applying none");
                Filter::None
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Filter::Pink => "Cute Pink",
            Filter::Sunset => "Sunset",
            Filter::Vintage => "Vintage",
            Filter::Bright => "Bright",
            Filter::None => "None",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Filter::Pink => "Soft warm pink tint",
            Filter::Sunset => "Warm orange tones with cooled blues",
            Filter::Vintage => "Classic sepia",
            Filter::Bright => "Lifted brightness and contrast",
            Filter::None => "Unmodified colors",
        }
    }

    /// Transforms one straight-alpha RGB triple. Clamping happens once, at the end.
    fn map_rgb(self, [r, g, b]: [f32; 3]) -> [f32; 3] {
        match self {
            Filter::Pink => [r * 1.2, g * 1.1, b * 1.15],
            Filter::Sunset => [r * 1.3, g * 1.1, b * 0.9],
            Filter::Vintage => [
                0.393 * r + 0.769 * g + 0.189 * b,
                0.349 * r + 0.686 * g + 0.168 * b,
                0.272 * r + 0.534 * g + 0.131 * b,
            ],
            Filter::Bright => [r * 1.2 + 20.0, g * 1.2 + 20.0, b * 1.2 + 20.0],
            Filter::None => [r, g, b],
        }
    }
}

/// Catalog entry for one selectable filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct FilterInfo {
    pub id: u32,
    pub name: &'static str,
    pub description: &'static str,
}

pub fn filter_catalog() -> Vec<FilterInfo> {
    Filter::ALL
        .iter()
        .filter_map(|f| {
            f.id().map(|id| FilterInfo {
                id,
                name: f.name(),
                description: f.description(),
            })
        })
        .collect()
}

/// Applies `filter` to a straight-alpha RGBA8 buffer in place. Alpha is never touched.
///
/// Reapplying a non-identity filter compounds its effect.
pub fn apply_filter(rgba: &mut [u8], filter: Filter) {
    if filter == Filter::None {
        return;
    }
    const CHUNK_PIXELS: usize = 4096;
    rgba.par_chunks_mut(CHUNK_PIXELS * 4).for_each(|chunk| {
        for px in chunk.chunks_exact_mut(4) {
            let out = filter.map_rgb([f32::from(px[0]), f32::from(px[1]), f32::from(px[2])]);
            px[0] = to_channel(out[0]);
            px[1] = to_channel(out[1]);
            px[2] = to_channel(out[2]);
        }
    });
}

fn to_channel(v: f32) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

#[cfg(test)]
#[path = "../../tests/unit/effects/filter.rs"]
mod tests;
