//! PNG to JPEG conversion.

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageError, ImageFormat};
use std::io::{self, Cursor};
use thiserror::Error;

/// JPEG quality used when none is configured.
pub const DEFAULT_JPEG_QUALITY: u8 = 75;

/// Failure converting a single file.
///
/// Each variant names the step that failed and keeps the underlying error
/// as its source. The file path lives on the walker's `FailedFile`.
#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("failed to read image file")]
    Read(#[source] io::Error),

    #[error("failed to decode PNG")]
    Decode(#[source] ImageError),

    #[error("failed to encode JPEG")]
    Encode(#[source] ImageError),

    #[error("failed to write JPEG file")]
    Write(#[source] io::Error),

    #[error("failed to delete PNG file")]
    Delete(#[source] io::Error),
}

/// Re-encodes PNG bytes as JPEG.
///
/// Alpha is discarded since JPEG has no transparency. Quality is clamped
/// to 1..=100.
///
/// # Arguments
///
/// * `bytes`: Encoded PNG image
/// * `quality`: JPEG quality (1-100)
///
/// # Errors
///
/// Returns `ConvertError::Decode` if bytes are not a valid PNG and
/// `ConvertError::Encode` if the JPEG encoder rejects the pixel data.
pub fn png_to_jpeg(bytes: &[u8], quality: u8) -> Result<Vec<u8>, ConvertError> {
    let decoded = image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .map_err(ConvertError::Decode)?;

    let rgb = decoded.to_rgb8();
    let (width, height) = rgb.dimensions();

    let mut buffer = Vec::new();
    let mut encoder =
        JpegEncoder::new_with_quality(Cursor::new(&mut buffer), quality.clamp(1, 100));
    encoder
        .encode(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
        .map_err(ConvertError::Encode)?;

    Ok(buffer)
}
