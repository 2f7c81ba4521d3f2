use crate::{
    foundation::core::{Canvas, Slot},
    layout::{GridMetrics, Layout},
};

/// Produce the initial equal-cell grid for `photo_count` photos inside `reference`.
///
/// - 3: one column of three full-width rows.
/// - 4: a centered 2×2 grid of squares.
/// - 6: two columns by three rows.
/// - anything else: one column of `photo_count` rows.
///
/// A zero count yields an empty layout.
pub fn generate_grid(photo_count: usize, reference: Canvas) -> Layout {
    let m = GridMetrics::for_reference(reference);
    match photo_count {
        0 => Vec::new(),
        4 => square_grid(m),
        6 => two_by_three(m),
        n => single_column(n, m),
    }
}

fn single_column(n: usize, m: GridMetrics) -> Layout {
    let rows = n as f64;
    // Long columns shrink the gap instead of pushing rows past the bottom edge.
    let gap = m.gap.min(m.avail_height() / (2.0 * rows));
    let h = (m.avail_height() - gap * (rows - 1.0)) / rows;
    (0..n)
        .map(|i| Slot::new(m.padding, m.padding + i as f64 * (h + gap), m.avail_width(), h))
        .collect()
}

fn square_grid(m: GridMetrics) -> Layout {
    let side = ((m.avail_width() - m.gap) / 2.0).min((m.avail_height() - m.gap) / 2.0);
    let extent = 2.0 * side + m.gap;
    let x0 = (m.width - extent) * 0.5;
    let y0 = (m.height - extent) * 0.5;
    (0..4)
        .map(|i| {
            let (row, col) = ((i / 2) as f64, (i % 2) as f64);
            Slot::new(
                x0 + col * (side + m.gap),
                y0 + row * (side + m.gap),
                side,
                side,
            )
        })
        .collect()
}

fn two_by_three(m: GridMetrics) -> Layout {
    let w = (m.avail_width() - m.gap) / 2.0;
    let h = (m.avail_height() - 2.0 * m.gap) / 3.0;
    (0..6)
        .map(|i| {
            let (row, col) = ((i / 2) as f64, (i % 2) as f64);
            Slot::new(
                m.padding + col * (w + m.gap),
                m.padding + row * (h + m.gap),
                w,
                h,
            )
        })
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;
