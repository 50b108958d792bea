//! Quadrant rotation by exact coordinate remapping.
//!
//! Only multiples of 90 degrees are supported, so every kernel is a pure
//! permutation of pixels: no interpolation, no resampling, no canvas
//! expansion. Each kernel walks the source in raster order and writes every
//! destination cell exactly once into a fresh buffer.
//!
//! # Mappings
//!
//! For a source of `w` x `h`:
//!
//! ```text
//! 90:   dst(y, w-1-x)       = src(x, y)    output h x w
//! 180:  dst(w-1-x, h-1-y)   = src(x, y)    output w x h
//! 270:  dst(h-1-y, x)       = src(x, y)    output h x w
//! ```

use thiserror::Error;

use crate::decode::PixelGrid;

/// Error types for transform operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    /// The rotation angle is not a multiple of 90 degrees.
    #[error("Unsupported rotation angle: {0} degrees (must be a multiple of 90)")]
    UnsupportedAngle(i32),

    /// Pixel count doesn't match the grid dimensions.
    #[error("Invalid pixel data: expected {expected} pixels (width * height), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },
}

/// A rotation restricted to whole quarter turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Quadrant {
    /// No rotation.
    #[default]
    Deg0,
    /// One quarter turn, `dst(y, w-1-x) = src(x, y)`.
    Deg90,
    /// Half turn.
    Deg180,
    /// Three quarter turns, `dst(h-1-y, x) = src(x, y)`.
    Deg270,
}

impl Quadrant {
    /// Normalize an angle of any sign and magnitude to a quadrant.
    ///
    /// The angle is reduced with a Euclidean remainder, so `-90` and `270`
    /// map to the same quadrant. Angles that are not a multiple of 90 are
    /// rejected rather than rounded.
    pub fn from_degrees(angle_degrees: i32) -> Result<Self, TransformError> {
        if angle_degrees % 90 != 0 {
            return Err(TransformError::UnsupportedAngle(angle_degrees));
        }
        Ok(match angle_degrees.rem_euclid(360) {
            0 => Quadrant::Deg0,
            90 => Quadrant::Deg90,
            180 => Quadrant::Deg180,
            _ => Quadrant::Deg270,
        })
    }

    /// The normalized angle in degrees, one of 0, 90, 180 or 270.
    pub fn degrees(self) -> i32 {
        match self {
            Quadrant::Deg0 => 0,
            Quadrant::Deg90 => 90,
            Quadrant::Deg180 => 180,
            Quadrant::Deg270 => 270,
        }
    }

    /// Returns true if this rotation swaps width and height.
    #[inline]
    pub fn swaps_dimensions(self) -> bool {
        matches!(self, Quadrant::Deg90 | Quadrant::Deg270)
    }

    /// Apply this rotation to a grid, producing a new grid.
    pub fn apply(self, grid: &PixelGrid) -> PixelGrid {
        match self {
            Quadrant::Deg0 => grid.clone(),
            Quadrant::Deg90 => rotate_90(grid),
            Quadrant::Deg180 => rotate_180(grid),
            Quadrant::Deg270 => rotate_270(grid),
        }
    }
}

/// Rotate a grid one quarter turn: `dst(y, w-1-x) = src(x, y)`.
///
/// The output is `height` x `width`.
pub fn rotate_90(grid: &PixelGrid) -> PixelGrid {
    let (w, h) = grid.dimensions();
    let mut out = vec![0u32; grid.pixels.len()];

    // Output width is the source height
    for y in 0..h {
        for x in 0..w {
            let (dst_x, dst_y) = (y, w - 1 - x);
            out[dst_y as usize * h as usize + dst_x as usize] = grid.pixels[grid.index(x, y)];
        }
    }

    PixelGrid {
        width: h,
        height: w,
        pixels: out,
    }
}

/// Rotate a grid a half turn: `dst(w-1-x, h-1-y) = src(x, y)`.
pub fn rotate_180(grid: &PixelGrid) -> PixelGrid {
    let (w, h) = grid.dimensions();
    let mut out = vec![0u32; grid.pixels.len()];

    for y in 0..h {
        for x in 0..w {
            let (dst_x, dst_y) = (w - 1 - x, h - 1 - y);
            out[dst_y as usize * w as usize + dst_x as usize] = grid.pixels[grid.index(x, y)];
        }
    }

    PixelGrid {
        width: w,
        height: h,
        pixels: out,
    }
}

/// Rotate a grid three quarter turns: `dst(h-1-y, x) = src(x, y)`.
///
/// The output is `height` x `width`.
pub fn rotate_270(grid: &PixelGrid) -> PixelGrid {
    let (w, h) = grid.dimensions();
    let mut out = vec![0u32; grid.pixels.len()];

    for y in 0..h {
        for x in 0..w {
            let (dst_x, dst_y) = (h - 1 - y, x);
            out[dst_y as usize * h as usize + dst_x as usize] = grid.pixels[grid.index(x, y)];
        }
    }

    PixelGrid {
        width: h,
        height: w,
        pixels: out,
    }
}

/// Compute the output dimensions of a quadrant rotation without rendering.
///
/// # Errors
///
/// Returns `TransformError::UnsupportedAngle` for angles that are not a
/// multiple of 90.
pub fn rotated_dimensions(
    width: u32,
    height: u32,
    angle_degrees: i32,
) -> Result<(u32, u32), TransformError> {
    let quadrant = Quadrant::from_degrees(angle_degrees)?;
    if quadrant.swaps_dimensions() {
        Ok((height, width))
    } else {
        Ok((width, height))
    }
}
