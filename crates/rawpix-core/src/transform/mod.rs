//! Geometric transforms: quadrant rotation and flips.
//!
//! All transforms are exact pixel permutations. They take a grid by
//! reference and return a new grid; nothing is modified in place.
//!
//! # Transform Order
//!
//! [`render`] always applies the steps in this order:
//! 1. Rotation (0, 90, 180 or 270 degrees)
//! 2. Vertical flip
//! 3. Horizontal flip
//!
//! # Coordinate System
//!
//! - Angles are integer degrees, any sign, multiples of 90
//! - Origin is the top-left corner, x grows right, y grows down

mod flip;
mod render;
mod rotation;

pub use flip::{flip_horizontal, flip_vertical};
pub use render::{render, render_state};
pub use rotation::{
    rotate_180, rotate_270, rotate_90, rotated_dimensions, Quadrant, TransformError,
};
