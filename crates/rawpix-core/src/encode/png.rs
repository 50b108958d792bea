//! PNG encoding for export.
//!
//! PNG keeps the alpha channel and is lossless, so an exported file holds
//! exactly the rendered pixels. Encoding goes through the `image` crate's
//! PNG encoder with RGBA8 colour.

use image::codecs::png::PngEncoder;
use image::ExtendedColorType;
use image::ImageEncoder;
use std::io::Cursor;
use thiserror::Error;

use crate::decode::PixelGrid;

/// The 8-byte signature every PNG file starts with.
pub const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

/// Errors that can occur during PNG encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel count doesn't match the grid dimensions
    #[error("Invalid pixel data: expected {expected} pixels (width * height), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// PNG encoding failed
    #[error("PNG encoding failed: {0}")]
    EncodingFailed(String),
}

/// Encode a pixel grid to PNG bytes.
///
/// Each packed ARGB pixel is written as an RGBA8 sample, so alpha is
/// preserved.
///
/// # Errors
///
/// Returns an error if:
/// - Width or height is zero
/// - The pixel count doesn't match width * height
/// - Encoding fails internally
///
/// # Example
///
/// ```ignore
/// use rawpix_core::encode::encode_png;
///
/// let png = encode_png(&grid)?;
/// std::fs::write("out.png", png)?;
/// ```
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, EncodeError> {
    let (width, height) = grid.dimensions();

    // Validate dimensions
    if width == 0 || height == 0 {
        return Err(EncodeError::InvalidDimensions { width, height });
    }

    // Validate pixel count
    let expected = (width as usize) * (height as usize);
    if grid.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: grid.pixels.len(),
        });
    }

    let rgba = grid.to_rgba_bytes();
    let mut buffer = Cursor::new(Vec::new());

    PngEncoder::new(&mut buffer)
        .write_image(&rgba, width, height, ExtendedColorType::Rgba8)
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(buffer.into_inner())
}
