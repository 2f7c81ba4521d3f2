use crate::{
    assets::PhotoSize,
    foundation::core::{Canvas, Slot},
    layout::{GridMetrics, Layout},
};

/// Replace equal-cell slots with slots that show each photo undistorted.
///
/// `sizes[i]` is the native size of photo `i`; `None` (or a missing entry) marks a photo
/// that failed to load. The strategy depends on the layout family:
///
/// - 3 photos: one shared slot size from the mean aspect ratio, centered horizontally.
/// - 4 photos: fixed squares sized from the reference width, regardless of aspect ratio.
/// - 6 photos: each photo fitted and centered inside its own cell.
/// - any other count: the input layout, unchanged.
///
/// When no photo loaded at all the input layout is returned unchanged.
pub fn adapt_layout(
    initial: &[Slot],
    sizes: &[Option<PhotoSize>],
    reference: Canvas,
    photo_count: usize,
) -> Layout {
    let aspects: Vec<Option<f64>> = (0..initial.len())
        .map(|i| sizes.get(i).copied().flatten().and_then(PhotoSize::aspect))
        .collect();
    if aspects.iter().all(Option::is_none) {
        return initial.to_vec();
    }

    let m = GridMetrics::for_reference(reference);
    match photo_count {
        3 => uniform_column(initial, &aspects, m),
        4 => fixed_squares(initial, &aspects, m),
        6 => fit_cells(initial, &aspects),
        _ => initial.to_vec(),
    }
}

fn uniform_column(initial: &[Slot], aspects: &[Option<f64>], m: GridMetrics) -> Layout {
    let loaded: Vec<f64> = aspects.iter().flatten().copied().collect();
    let mean_aspect = loaded.iter().sum::<f64>() / loaded.len() as f64;

    let h = (m.avail_height() - 2.0 * m.gap) / 3.0;
    let w = (h * mean_aspect).min(m.avail_width());
    let x = (m.width - w) * 0.5;
    (0..initial.len())
        .map(|i| Slot::new(x, m.padding + i as f64 * (h + m.gap), w, h))
        .collect()
}

fn fixed_squares(initial: &[Slot], aspects: &[Option<f64>], m: GridMetrics) -> Layout {
    let side = (m.avail_width() - m.gap) / 2.0;
    initial
        .iter()
        .zip(aspects)
        .enumerate()
        .map(|(i, (orig, aspect))| {
            let (row, col) = ((i / 2) as f64, (i % 2) as f64);
            let cell = Slot::new(
                m.padding + col * (side + m.gap),
                m.padding + row * (side + m.gap),
                side,
                side,
            );
            match aspect {
                Some(_) => cell,
                // Unadapted size, anchored in its own cell so it cannot overlap a neighbour.
                None => cell.centered(orig.w.min(side), orig.h.min(side)),
            }
        })
        .collect()
}

fn fit_cells(initial: &[Slot], aspects: &[Option<f64>]) -> Layout {
    initial
        .iter()
        .zip(aspects)
        .map(|(cell, aspect)| match aspect {
            Some(a) => fit_aspect(*cell, *a),
            None => *cell,
        })
        .collect()
}

/// Largest rectangle of aspect ratio `aspect` that fits inside `cell`, centered in it.
pub fn fit_aspect(cell: Slot, aspect: f64) -> Slot {
    if aspect > cell.aspect() {
        cell.centered(cell.w, cell.w / aspect)
    } else {
        cell.centered(cell.h * aspect, cell.h)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/adapt.rs"]
mod tests;
