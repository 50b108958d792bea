//! Viewer session WASM bindings.
//!
//! The session owns the loaded bytes, the original grid and the transform
//! state, so a UI only forwards button clicks and draws `current()`.
//!
//! # Example
//!
//! ```typescript
//! const session = new JsViewerSession({ maxDimension: 5000 });
//! session.load(new Uint8Array(await file.arrayBuffer()));
//! rotateRight.onclick = () => { session.rotate_right(); draw(session.current()); };
//! ```

use crate::types::JsPixelGrid;
use rawpix_core::{TransformState, ViewerConfig, ViewerSession};
use wasm_bindgen::prelude::*;

/// Viewer session wrapper for JavaScript
#[wasm_bindgen]
pub struct JsViewerSession {
    inner: ViewerSession,
}

#[wasm_bindgen]
impl JsViewerSession {
    /// Create a session from an optional config object.
    ///
    /// Missing fields use the defaults (1536x2048, max 5000 per side).
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<JsViewerSession, JsValue> {
        let config: ViewerConfig = if config.is_undefined() || config.is_null() {
            ViewerConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&e.to_string()))?
        };
        Ok(Self {
            inner: ViewerSession::new(config),
        })
    }

    /// Load a new byte source and reset the transform state.
    pub fn load(&mut self, bytes: Vec<u8>) -> Result<(), JsValue> {
        self.inner
            .load(bytes)
            .map(|_| ())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Change the decode resolution, re-decoding a loaded source.
    pub fn set_resolution(&mut self, width: u32, height: u32) -> Result<(), JsValue> {
        self.inner
            .set_resolution(width, height)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn rotate_left(&mut self) -> Result<(), JsValue> {
        self.inner
            .rotate_left()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn rotate_right(&mut self) -> Result<(), JsValue> {
        self.inner
            .rotate_right()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn toggle_flip_vertical(&mut self) -> Result<(), JsValue> {
        self.inner
            .toggle_flip_vertical()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    pub fn toggle_flip_horizontal(&mut self) -> Result<(), JsValue> {
        self.inner
            .toggle_flip_horizontal()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// The rendered grid, or `undefined` if nothing is loaded.
    pub fn current(&self) -> Option<JsPixelGrid> {
        self.inner.current().cloned().map(JsPixelGrid::from_grid)
    }

    /// Get the transform state as `{ angle, flipVertical, flipHorizontal }`.
    pub fn state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.state())
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Replace the transform state from a JS object and re-render.
    pub fn set_state(&mut self, value: JsValue) -> Result<(), JsValue> {
        let state: TransformState =
            serde_wasm_bindgen::from_value(value).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner
            .set_state(state)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Current decode width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.resolution().0
    }

    /// Current decode height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.resolution().1
    }

    #[wasm_bindgen(getter)]
    pub fn loaded(&self) -> bool {
        self.inner.is_loaded()
    }

    /// Encode the rendered grid as PNG.
    pub fn export_png(&self) -> Result<Vec<u8>, JsValue> {
        self.inner
            .export_png()
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> JsViewerSession {
        JsViewerSession {
            inner: ViewerSession::new(ViewerConfig {
                default_width: 2,
                default_height: 2,
                max_dimension: 8,
            }),
        }
    }

    #[test]
    fn test_current_empty_before_load() {
        let s = session();
        assert!(!s.loaded());
        assert!(s.current().is_none());
        assert_eq!((s.width(), s.height()), (2, 2));
    }

    #[test]
    fn test_current_after_core_load() {
        let mut s = session();
        s.inner.load(vec![1, 2, 3, 4]).unwrap();
        s.inner.rotate_right().unwrap();

        let grid = s.current().unwrap();
        assert_eq!(grid.width(), 2);
        assert_eq!(grid.pixels().len(), 4);
        assert!(s.loaded());
    }
}
