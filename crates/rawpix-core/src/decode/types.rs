//! Core types for raw pixel decoding.

use thiserror::Error;

/// Fully transparent black, the value of every cell the byte stream does not cover.
pub const TRANSPARENT_BLACK: u32 = 0;

/// Bytes per decoded pixel (R, G, B, A).
pub const BYTES_PER_PIXEL: usize = 4;

/// Error types for raw pixel decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// Width or height is zero, or the grid would not fit in memory.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Pack one RGBA byte group into an ARGB8888 value.
///
/// Alpha lands in the most significant byte, then red, green and blue.
#[inline]
pub fn pack_argb(r: u8, g: u8, b: u8, a: u8) -> u32 {
    (u32::from(a) << 24) | (u32::from(r) << 16) | (u32::from(g) << 8) | u32::from(b)
}

/// Split an ARGB8888 value back into `[r, g, b, a]`.
#[inline]
pub fn unpack_rgba(pixel: u32) -> [u8; 4] {
    let [a, r, g, b] = pixel.to_be_bytes();
    [r, g, b, a]
}

/// Number of cells in a `width` x `height` grid, or `None` if it overflows.
pub(crate) fn cell_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

/// Byte length of a stream that exactly fills a `width` x `height` grid.
pub fn expected_byte_len(width: u32, height: u32) -> Option<usize> {
    cell_count(width, height)?.checked_mul(BYTES_PER_PIXEL)
}

/// A rectangular grid of packed ARGB8888 pixels.
///
/// Pixels are stored in raster order: the pixel at `(x, y)` lives at index
/// `y * width + x`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    /// Grid width in pixels.
    pub width: u32,
    /// Grid height in pixels.
    pub height: u32,
    /// Packed ARGB pixels in row-major order.
    /// Length should be width * height.
    pub pixels: Vec<u32>,
}

impl PixelGrid {
    /// Create a new PixelGrid with the given dimensions and pixel data.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Self {
        debug_assert_eq!(
            Some(pixels.len()),
            cell_count(width, height),
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a grid with every cell set to transparent black.
    ///
    /// # Errors
    ///
    /// Returns `DecodeError::InvalidDimensions` if either dimension is zero
    /// or the grid's byte size overflows `usize`.
    pub fn transparent(width: u32, height: u32) -> Result<Self, DecodeError> {
        let len = match cell_count(width, height) {
            Some(len) if len > 0 && expected_byte_len(width, height).is_some() => len,
            _ => return Err(DecodeError::InvalidDimensions { width, height }),
        };
        Ok(Self {
            width,
            height,
            pixels: vec![TRANSPARENT_BLACK; len],
        })
    }

    /// Get the pixel at `(x, y)`, or `None` outside the grid.
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(self.index(x, y)).copied()
    }

    /// Raster index of `(x, y)`. Caller guarantees the coordinate is in bounds.
    #[inline]
    pub(crate) fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get the grid dimensions as `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid grid.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }

    /// Interleaved RGBA8 bytes (4 bytes per pixel), the layout encoders and
    /// canvas APIs expect.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        self.pixels.iter().flat_map(|&p| unpack_rgba(p)).collect()
    }

    /// Convert to an image::RgbaImage for encoding.
    pub fn to_rgba_image(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.to_rgba_bytes())
    }
}
