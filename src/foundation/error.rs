/// Convenience result type used across the compositing engine.
pub type PhotoboothResult<T> = Result<T, PhotoboothError>;

/// Top-level error taxonomy used by engine APIs.
///
/// Only [`PhotoboothError::Validation`] and [`PhotoboothError::Canvas`] ever escape
/// [`crate::compose`]; per-photo decode failures are recovered inside the pipeline.
#[derive(thiserror::Error, Debug)]
pub enum PhotoboothError {
    /// Invalid caller input (empty photo list, zero photo count, bad geometry).
    #[error("validation error: {0}")]
    Validation(String),

    /// A single photo source could not be turned into pixels.
    #[error("decode error: {0}")]
    Decode(String),

    /// The output surface could not be allocated.
    #[error("canvas error: {0}")]
    Canvas(String),

    /// The final raster could not be encoded.
    #[error("encode error: {0}")]
    Encode(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PhotoboothError {
    /// Build a [`PhotoboothError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`PhotoboothError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`PhotoboothError::Canvas`] value.
    pub fn canvas(msg: impl Into<String>) -> Self {
        Self::Canvas(msg.into())
    }

    /// Build a [`PhotoboothError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
