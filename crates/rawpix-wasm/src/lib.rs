//! rawpix WASM - WebAssembly bindings for rawpix
//!
//! This crate exposes rawpix-core decoding, transforms and encoding to
//! JavaScript/TypeScript applications. The browser side owns file pickers,
//! buttons and the canvas; everything pixel-related happens here.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper for pixel grids
//! - `decode` - Raw RGBA byte stream decoding
//! - `transform` - Rotation and flip rendering
//! - `encode` - PNG export
//! - `session` - Stateful viewer session
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_raw_rgba, render } from '@rawpix/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const original = decode_raw_rgba(bytes, 1536, 2048);
//! const shown = render(original, 90, false, false);
//! ctx.putImageData(shown.to_image_data(), 0, 0);
//! ```

use log::info;
use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod session;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_raw_rgba, expected_byte_len};
pub use encode::encode_png;
pub use session::JsViewerSession;
pub use transform::{render, rotated_dimensions};
pub use types::JsPixelGrid;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
    info!("rawpix wasm {} ready", version());
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
