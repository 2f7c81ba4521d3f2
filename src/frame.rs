//! Decorative frames: the static configuration table and the procedural border renderer.

pub(crate) mod border;
pub(crate) mod config;
pub(crate) mod motif;
