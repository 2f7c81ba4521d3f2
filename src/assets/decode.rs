use std::sync::Arc;

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose};

use crate::{
    assets::{Photo, PhotoSource},
    foundation::error::{PhotoboothError, PhotoboothResult},
};

/// Decode a photo source into pixels.
///
/// Any failure is reported as [`PhotoboothError::Decode`]; the compositor treats it as an
/// absent photo rather than aborting.
pub fn decode_photo(source: &PhotoSource) -> PhotoboothResult<Photo> {
    let decoded = match source {
        PhotoSource::Encoded(bytes) => decode_image(bytes),
        PhotoSource::DataUri(uri) => {
            parse_data_uri(uri).and_then(|bytes| decode_image(&bytes))
        }
    };
    decoded.map_err(|e| PhotoboothError::decode(format!("{e:#}")))
}

fn decode_image(bytes: &[u8]) -> anyhow::Result<Photo> {
    let dyn_img = image::load_from_memory(bytes).context("decode image from memory")?;
    let rgba = dyn_img.to_rgba8();
    if rgba.width() == 0 || rgba.height() == 0 {
        anyhow::bail!("decoded image has zero area");
    }
    Ok(Photo {
        pixels: Arc::new(rgba),
    })
}

fn parse_data_uri(uri: &str) -> anyhow::Result<Vec<u8>> {
    let uri = uri.trim();
    if !uri.starts_with("data:image/") {
        anyhow::bail!("photo string is not a data:image/ uri");
    }
    let marker = ";base64,";
    let start = uri
        .find(marker)
        .context("data uri is missing the ;base64, marker")?;
    general_purpose::STANDARD
        .decode(&uri[start + marker.len()..])
        .context("decode base64 payload")
}

/// Encode bytes as a `data:<mime>;base64,` URI.
pub(crate) fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!(
        "data:{mime};base64,{}",
        general_purpose::STANDARD.encode(bytes)
    )
}

pub(crate) fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        px[0] = ((px[0] as u16 * a + 127) / 255) as u8;
        px[1] = ((px[1] as u16 * a + 127) / 255) as u8;
        px[2] = ((px[2] as u16 * a + 127) / 255) as u8;
    }
}

pub(crate) fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = px[3] as u16;
        if a == 0 || a == 255 {
            continue;
        }
        for c in &mut px[..3] {
            *c = ((*c as u16 * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
