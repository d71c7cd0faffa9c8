use std::path::Path;

use crate::foundation::error::{IconError, IconResult};

/// Decoded source image in straight (non-premultiplied) RGBA8.
#[derive(Clone, Debug)]
pub struct SourceImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data, one `Rgba<u8>` per pixel.
    pub pixels: image::RgbaImage,
}

/// Read and decode the image at `path`.
///
/// A missing file, an I/O failure, or undecodable bytes all map to
/// [`IconError::ImageLoad`] with the path in the message.
pub fn load_source(path: &Path) -> IconResult<SourceImage> {
    let bytes = std::fs::read(path).map_err(|e| {
        IconError::image_load(format!("read source image '{}': {e}", path.display()))
    })?;
    decode_image(&bytes).map_err(|e| match e {
        IconError::ImageLoad(msg) => {
            IconError::image_load(format!("'{}': {msg}", path.display()))
        }
        other => other,
    })
}

/// Decode encoded image bytes (format sniffed from content) and convert to RGBA8.
///
/// Sources without alpha get a fully opaque channel; grayscale and indexed sources are
/// expanded to RGB.
pub fn decode_image(bytes: &[u8]) -> IconResult<SourceImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| IconError::image_load(format!("decode image: {e}")))?;
    let pixels = dyn_img.to_rgba8();
    let (width, height) = pixels.dimensions();
    tracing::debug!(
        width,
        height,
        color = ?dyn_img.color(),
        "decoded source image"
    );

    Ok(SourceImage {
        width,
        height,
        pixels,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
