//! Slot geometry: the initial grid, aspect-ratio adaptation and canvas fitting.
//!
//! Every stage is a pure function from one [`Layout`] to the next.

use crate::foundation::core::{Canvas, Rect, Slot};

pub(crate) mod adapt;
pub(crate) mod fit;
pub(crate) mod grid;

/// Ordered slots, index-aligned with the ordered photos (slot `i` holds photo `i`).
pub type Layout = Vec<Slot>;

/// Outer padding of every grid, as a fraction of the reference width.
pub const PADDING_RATIO: f64 = 0.005;
/// Gap between neighbouring photos, as a fraction of the reference height.
pub const GAP_RATIO: f64 = 0.01;

#[derive(Clone, Copy, Debug)]
pub(crate) struct GridMetrics {
    pub(crate) width: f64,
    pub(crate) height: f64,
    pub(crate) padding: f64,
    pub(crate) gap: f64,
}

impl GridMetrics {
    pub(crate) fn for_reference(reference: Canvas) -> Self {
        let width = reference.width_f64();
        let height = reference.height_f64();
        Self {
            width,
            height,
            padding: width * PADDING_RATIO,
            gap: height * GAP_RATIO,
        }
    }

    pub(crate) fn avail_width(self) -> f64 {
        (self.width - 2.0 * self.padding).max(0.0)
    }

    pub(crate) fn avail_height(self) -> f64 {
        (self.height - 2.0 * self.padding).max(0.0)
    }
}

/// Smallest axis-aligned rectangle containing every slot, `None` for an empty layout.
pub fn bounding_box(layout: &[Slot]) -> Option<Rect> {
    let (first, rest) = layout.split_first()?;
    Some(
        rest.iter()
            .fold(first.rect(), |acc, slot| acc.union(slot.rect())),
    )
}
