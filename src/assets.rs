use std::sync::Arc;

pub(crate) mod decode;

/// One encoded photo handed to the compositor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PhotoSource {
    /// Raw encoded image bytes (PNG, JPEG, ...).
    Encoded(Vec<u8>),
    /// A `data:image/<fmt>;base64,<payload>` URI.
    DataUri(String),
}

impl From<Vec<u8>> for PhotoSource {
    fn from(value: Vec<u8>) -> Self {
        Self::Encoded(value)
    }
}

impl From<&[u8]> for PhotoSource {
    fn from(value: &[u8]) -> Self {
        Self::Encoded(value.to_vec())
    }
}

impl From<String> for PhotoSource {
    fn from(value: String) -> Self {
        Self::DataUri(value)
    }
}

impl From<&str> for PhotoSource {
    fn from(value: &str) -> Self {
        Self::DataUri(value.to_owned())
    }
}

/// A decoded photo: immutable straight-alpha RGBA8 pixels with known dimensions.
#[derive(Clone, Debug)]
pub struct Photo {
    pub(crate) pixels: Arc<image::RgbaImage>,
}

impl Photo {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Dimensions as a [`PhotoSize`].
    pub fn size(&self) -> PhotoSize {
        PhotoSize {
            width: self.width(),
            height: self.height(),
        }
    }
}

/// Native dimensions of a loaded photo, all the layout resolver needs to know about it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoSize {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl PhotoSize {
    /// Width over height, `None` for degenerate sizes.
    pub fn aspect(self) -> Option<f64> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        Some(f64::from(self.width) / f64::from(self.height))
    }
}
