//! Raw decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { decode_raw_rgba } from '@rawpix/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const grid = decode_raw_rgba(bytes, 1536, 2048);
//! console.log(`Decoded ${grid.width}x${grid.height}`);
//! ```

use crate::types::JsPixelGrid;
use rawpix_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a raw RGBA8 byte stream into a pixel grid.
///
/// Short streams leave the remaining cells transparent black; long streams
/// and trailing partial pixels are ignored.
///
/// # Arguments
///
/// * `bytes` - Raw pixel bytes as a `Uint8Array`, 4 per pixel in R, G, B, A order
/// * `width` - Grid width in pixels
/// * `height` - Grid height in pixels
///
/// # Errors
///
/// Returns an error if width or height is zero.
#[wasm_bindgen]
pub fn decode_raw_rgba(bytes: &[u8], width: u32, height: u32) -> Result<JsPixelGrid, JsValue> {
    decode::decode_raw_rgba(bytes, width, height)
        .map(JsPixelGrid::from_grid)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Byte length of a stream that exactly fills a `width` x `height` grid.
///
/// Returns `undefined` if the size overflows.
#[wasm_bindgen]
pub fn expected_byte_len(width: u32, height: u32) -> Option<usize> {
    decode::expected_byte_len(width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_byte_len() {
        assert_eq!(expected_byte_len(3, 2), Some(24));
    }

    #[test]
    fn test_decode_through_core() {
        // Result<_, JsValue> only works on wasm32; check the wrapper conversion
        let grid = decode::decode_raw_rgba(&[0x10, 0x20, 0x30, 0x40], 1, 1).unwrap();
        let js = JsPixelGrid::from_grid(grid);
        assert_eq!(js.pixels(), vec![0x4010_2030]);
    }
}
