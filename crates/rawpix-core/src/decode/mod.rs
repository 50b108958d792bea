//! Raw byte stream decoding for rawpix.
//!
//! This module turns a headerless RGBA8 byte dump into a [`PixelGrid`] of
//! packed ARGB8888 values at a caller-chosen resolution.
//!
//! # Layout
//!
//! - 4 bytes per pixel, in R, G, B, A order
//! - row-major, no padding between rows
//! - packed as `(A << 24) | (R << 16) | (G << 8) | B`
//!
//! # Examples
//!
//! ```ignore
//! use rawpix_core::decode::decode_raw_rgba;
//!
//! let bytes = std::fs::read("capture.data").unwrap();
//! let grid = decode_raw_rgba(&bytes, 1536, 2048).unwrap();
//! println!("Decoded {}x{} grid", grid.width, grid.height);
//! ```

mod raw;
mod types;

pub use raw::decode_raw_rgba;
pub use types::{
    expected_byte_len, pack_argb, unpack_rgba, DecodeError, PixelGrid, BYTES_PER_PIXEL,
    TRANSPARENT_BLACK,
};
