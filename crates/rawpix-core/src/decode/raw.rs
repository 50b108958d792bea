//! Raw RGBA byte stream decoding.
//!
//! The input is a headerless dump of pixels, 4 bytes each in R, G, B, A
//! order, laid out row by row. Nothing in the stream says how wide a row
//! is, so the caller supplies the resolution and the decoder maps the bytes
//! onto it as best it can:
//!
//! - a trailing group of fewer than 4 bytes is ignored
//! - pixels that would land below the last row are dropped
//! - cells the stream never reaches stay transparent black
//!
//! Neither a short nor a long stream is an error.

use log::{debug, warn};

use super::types::{expected_byte_len, pack_argb, DecodeError, PixelGrid, BYTES_PER_PIXEL};

/// Decode a raw RGBA8 byte stream into a `width` x `height` grid.
///
/// The k-th complete 4-byte group becomes the pixel at
/// `(k % width, k / width)`, packed as `(A << 24) | (R << 16) | (G << 8) | B`.
///
/// # Arguments
///
/// * `bytes` - Raw pixel bytes, 4 per pixel in R, G, B, A order
/// * `width` - Grid width in pixels
/// * `height` - Grid height in pixels
///
/// # Errors
///
/// Returns `DecodeError::InvalidDimensions` if either dimension is zero or
/// the grid size overflows. No buffer is allocated in that case.
///
/// # Example
///
/// ```ignore
/// let grid = decode_raw_rgba(&[0x10, 0x20, 0x30, 0x40], 1, 1)?;
/// assert_eq!(grid.pixels[0], 0x4010_2030);
/// ```
pub fn decode_raw_rgba(bytes: &[u8], width: u32, height: u32) -> Result<PixelGrid, DecodeError> {
    let mut grid = PixelGrid::transparent(width, height)?;
    let len = grid.pixels.len();

    // Raster order means group k lands at index k, so anything past `len`
    // is below the last row and dropped by `zip`.
    for (dst, group) in grid
        .pixels
        .iter_mut()
        .zip(bytes.chunks_exact(BYTES_PER_PIXEL))
    {
        *dst = pack_argb(group[0], group[1], group[2], group[3]);
    }

    let decoded = (bytes.len() / BYTES_PER_PIXEL).min(len);
    if Some(bytes.len()) != expected_byte_len(width, height) {
        warn!(
            "raw stream of {} bytes does not match {}x{} grid: {} of {} pixels decoded",
            bytes.len(),
            width,
            height,
            decoded,
            len
        );
    }
    debug!("decoded {}x{} grid from {} bytes", width, height, bytes.len());

    Ok(grid)
}


// ============================================================================
// Property-Based Tests
// ============================================================================

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: the grid always has exactly width * height cells.
        #[test]
        fn prop_grid_size_fixed(
            bytes in proptest::collection::vec(any::<u8>(), 0..256),
            width in 1u32..16,
            height in 1u32..16,
        ) {
            let grid = decode_raw_rgba(&bytes, width, height).unwrap();
            prop_assert_eq!(grid.pixels.len(), (width * height) as usize);
        }

        /// Property: a stream of 4k + r bytes decodes exactly its k groups.
        #[test]
        fn prop_partial_group_ignored(
            k in 0usize..20,
            rem in 0usize..4,
            fill in 1u8..=255,
        ) {
            let bytes = vec![fill; k * 4 + rem];
            let grid = decode_raw_rgba(&bytes, 5, 5).unwrap();

            let non_zero = grid.pixels.iter().filter(|&&p| p != 0).count();
            prop_assert_eq!(non_zero, k.min(25));
        }
    }
}
