//! Pixel-level effects: compositing, drop shadows and color filters.

pub(crate) mod composite;
pub(crate) mod filter;
pub(crate) mod shadow;
