//! Image encoding for rawpix.
//!
//! This module provides functionality for:
//! - Encoding rendered pixel grids to PNG with alpha preserved
//!
//! # Examples
//!
//! ```ignore
//! use rawpix_core::encode::encode_png;
//!
//! let png_bytes = encode_png(&grid).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod png;

pub use png::{encode_png, EncodeError, PNG_SIGNATURE};
