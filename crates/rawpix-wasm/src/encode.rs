//! Image encoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! import { encode_png } from '@rawpix/wasm';
//!
//! const png = encode_png(shown);
//! const blob = new Blob([png], { type: 'image/png' });
//! ```

use crate::types::JsPixelGrid;
use rawpix_core::encode;
use wasm_bindgen::prelude::*;

/// Encode a JsPixelGrid to PNG bytes, alpha included.
///
/// # Errors
///
/// Returns an error if the grid is empty, its pixel count doesn't match
/// width * height, or encoding fails.
#[wasm_bindgen]
pub fn encode_png(grid: &JsPixelGrid) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(&grid.to_grid()).map_err(|e| JsValue::from_str(&e.to_string()))
}
