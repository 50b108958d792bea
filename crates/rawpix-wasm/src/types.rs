//! WASM-compatible wrapper types for pixel grids.
//!
//! This module provides JavaScript-friendly types that wrap the core rawpix types,
//! handling the conversion between Rust and JavaScript data representations.

use rawpix_core::decode::PixelGrid;
use wasm_bindgen::prelude::*;
use wasm_bindgen::Clamped;

/// A pixel grid wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()`, `rgba()` and
/// `to_image_data()` each copy it out to JavaScript memory.
#[wasm_bindgen]
pub struct JsPixelGrid {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

#[wasm_bindgen]
impl JsPixelGrid {
    /// Create a new JsPixelGrid from dimensions and packed ARGB pixels.
    ///
    /// # Arguments
    /// * `width` - Grid width in pixels
    /// * `height` - Grid height in pixels
    /// * `pixels` - Packed ARGB pixels (one u32 per pixel, row-major order)
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> JsPixelGrid {
        JsPixelGrid {
            width,
            height,
            pixels,
        }
    }

    /// Get the grid width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the grid height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns packed ARGB pixels as Uint32Array.
    pub fn pixels(&self) -> Vec<u32> {
        self.pixels.clone()
    }

    /// Returns interleaved RGBA8 bytes as Uint8Array.
    pub fn rgba(&self) -> Vec<u8> {
        self.to_grid().to_rgba_bytes()
    }

    /// Build canvas `ImageData` for `putImageData`.
    pub fn to_image_data(&self) -> Result<web_sys::ImageData, JsValue> {
        let rgba = self.rgba();
        web_sys::ImageData::new_with_u8_clamped_array_and_sh(Clamped(&rgba), self.width, self.height)
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelGrid {
    /// Wrap a core PixelGrid without copying.
    pub(crate) fn from_grid(grid: PixelGrid) -> Self {
        Self {
            width: grid.width,
            height: grid.height,
            pixels: grid.pixels,
        }
    }

    /// Convert back to a core PixelGrid.
    ///
    /// Note: This clones the pixel data.
    pub(crate) fn to_grid(&self) -> PixelGrid {
        PixelGrid {
            width: self.width,
            height: self.height,
            pixels: self.pixels.clone(),
        }
    }
}
