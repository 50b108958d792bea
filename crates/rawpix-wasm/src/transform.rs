//! WASM bindings for rotation and flip rendering.
//!
//! Callers keep the grid returned by `decode_raw_rgba` as the original and
//! pass it to `render` every time the transform state changes.

use crate::types::JsPixelGrid;
use rawpix_core::transform::{self, rotated_dimensions as core_rotated_dimensions};
use wasm_bindgen::prelude::*;

/// Render an original grid with a rotation and optional flips.
///
/// Rotation is applied first, then the vertical flip, then the horizontal flip.
///
/// # Arguments
///
/// * `original` - The decoded grid, not a previous render
/// * `angle_degrees` - Rotation in degrees, any sign, multiple of 90
/// * `flip_vertical` - Mirror top to bottom
/// * `flip_horizontal` - Mirror left to right
///
/// # Example (TypeScript)
///
/// ```typescript
/// angle += 90;
/// const shown = render(original, angle, flipV, flipH);
/// ```
#[wasm_bindgen]
pub fn render(
    original: &JsPixelGrid,
    angle_degrees: i32,
    flip_vertical: bool,
    flip_horizontal: bool,
) -> Result<JsPixelGrid, JsValue> {
    let src = original.to_grid();
    transform::render(&src, angle_degrees, flip_vertical, flip_horizontal)
        .map(JsPixelGrid::from_grid)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Output `[width, height]` of a rotation, without rendering.
#[wasm_bindgen]
pub fn rotated_dimensions(width: u32, height: u32, angle_degrees: i32) -> Result<Vec<u32>, JsValue> {
    core_rotated_dimensions(width, height, angle_degrees)
        .map(|(w, h)| vec![w, h])
        .map_err(|e| JsValue::from_str(&e.to_string()))
}


#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    fn test_grid(width: u32, height: u32) -> JsPixelGrid {
        JsPixelGrid::new(width, height, (0..width * height).collect())
    }

    #[wasm_bindgen_test]
    fn test_render_identity() {
        let img = test_grid(3, 2);
        let result = render(&img, 0, false, false).unwrap();
        assert_eq!(result.pixels(), img.pixels());
    }

    #[wasm_bindgen_test]
    fn test_render_rejects_bad_angle() {
        let img = test_grid(3, 2);
        assert!(render(&img, 45, false, false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_render_rejects_short_pixel_buffer() {
        let img = JsPixelGrid::new(4, 4, vec![0; 3]);
        assert!(render(&img, 90, false, false).is_err());
        assert!(render(&img, 0, true, false).is_err());
    }

    #[wasm_bindgen_test]
    fn test_rotated_dimensions() {
        assert_eq!(rotated_dimensions(100, 50, 270).unwrap(), vec![50, 100]);
        assert!(rotated_dimensions(100, 50, 10).is_err());
    }
}
