use crate::{ColorAnalysisError, Result};
use image::{ImageReader, RgbImage};
use std::io::Cursor;

/// Decode an uploaded file into an 8-bit RGB raster.
///
/// The format is sniffed from the bytes. Alpha is dropped and grayscale is expanded so every
/// decodable image ends up with exactly three channels.
pub fn decode_image(bytes: &[u8]) -> Result<RgbImage> {
    if bytes.is_empty() {
        return Err(ColorAnalysisError::InvalidImage("empty upload".to_string()));
    }

    let image = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| ColorAnalysisError::InvalidImage(e.to_string()))?
        .decode()?
        .to_rgb8();

    ensure_not_empty(image.width(), image.height())?;
    Ok(image)
}

/// Wrap a raw interleaved buffer as an RGB raster.
pub fn raster_from_raw(width: u32, height: u32, channels: u8, data: Vec<u8>) -> Result<RgbImage> {
    if channels != 3 {
        return Err(ColorAnalysisError::InvalidImage(format!(
            "expected 3 color channels, got {channels}"
        )));
    }
    ensure_not_empty(width, height)?;

    let expected = width as usize * height as usize * 3;
    let actual = data.len();
    RgbImage::from_raw(width, height, data).ok_or_else(|| {
        ColorAnalysisError::InvalidImage(format!(
            "buffer holds {actual} bytes, {width}x{height} RGB needs {expected}"
        ))
    })
}

pub(crate) fn ensure_not_empty(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        return Err(ColorAnalysisError::InvalidImage(format!(
            "image has no pixels ({width}x{height})"
        )));
    }
    Ok(())
}
