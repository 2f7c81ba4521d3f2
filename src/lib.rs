//! Photobooth compositing engine.
//!
//! Turns an ordered list of photos into a single decorated strip:
//!
//! - a grid layout for the photo count, adapted to each photo's real aspect ratio
//! - a canvas sized tightly around the adapted layout
//! - a procedural decorative frame (hearts, stars, flowers or a double line)
//! - an optional per-pixel color filter
//!
//! The engine is stateless. [`compose`] is the main entry point; the individual stages are
//! public so callers can inspect geometry without rendering.
#![forbid(unsafe_code)]

mod assets;
mod compose;
mod effects;
mod foundation;
mod frame;
mod layout;
mod render;

pub use crate::foundation::core::{Canvas, Point, Rect, Rgba8, Slot, Vec2};
pub use crate::foundation::error::{PhotoboothError, PhotoboothResult};

pub use crate::assets::decode::decode_photo;
pub use crate::assets::{Photo, PhotoSize, PhotoSource};
pub use crate::compose::opts::{
    COMPOSE_CANVAS_PADDING, ComposeOpts, PHOTO_CORNER_RADIUS, REFERENCE_CANVAS,
};
pub use crate::compose::{ComposedImage, compose, compose_png, compose_with_opts};
pub use crate::effects::filter::{Filter, FilterInfo, apply_filter, filter_catalog};
pub use crate::frame::border::{
    BORDER_INSET_RATIO, BORDER_THICKNESS_RATIO, BorderBand, MOTIF_SIZE_RATIO, MotifPlacement,
    border_band, edge_positions, motif_placements,
};
pub use crate::frame::config::{
    FrameConfig, PatternType, frame_config, frame_configs, resolve_frame_config,
};
pub use crate::layout::adapt::{adapt_layout, fit_aspect};
pub use crate::layout::fit::{
    CanvasFit, DEFAULT_CANVAS_PADDING, FALLBACK_CANVAS, apply_offset, fit_canvas,
};
pub use crate::layout::grid::generate_grid;
pub use crate::layout::{GAP_RATIO, Layout, PADDING_RATIO, bounding_box};
