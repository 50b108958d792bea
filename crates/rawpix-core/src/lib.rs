//! rawpix Core - raw pixel decoding and quadrant transforms
//!
//! This crate turns headerless RGBA8 byte dumps into pixel grids, applies
//! rotations and flips to them, and encodes the result as PNG.
//!
//! # Pipeline
//!
//! ```text
//! raw bytes -> decode -> original grid -> render(state) -> shown grid -> encode
//! ```
//!
//! [`ViewerSession`] ties the steps together for an interactive viewer and
//! always renders from the original grid.

pub mod config;
pub mod decode;
pub mod encode;
pub mod session;
pub mod state;
pub mod transform;

pub use config::ViewerConfig;
pub use decode::{decode_raw_rgba, DecodeError, PixelGrid};
pub use encode::{encode_png, EncodeError};
pub use session::{SessionError, ViewerSession};
pub use state::TransformState;
pub use transform::{render, render_state, Quadrant, TransformError};
