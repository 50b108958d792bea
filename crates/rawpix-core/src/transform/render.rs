//! Combined rotate + flip rendering.
//!
//! `render` is the single entry point the viewer uses. It always starts from
//! the grid it is given, which callers keep as the untouched original decode,
//! so the output depends only on `(original, angle, flip_v, flip_h)` and
//! never on earlier renders.

use log::{debug, trace};

use super::flip::{flip_horizontal, flip_vertical};
use super::rotation::{Quadrant, TransformError};
use crate::decode::PixelGrid;
use crate::state::TransformState;

/// Render an original grid with a rotation and optional flips.
///
/// Steps run in a fixed order, each on the previous step's output:
/// 1. Rotation by the normalized quadrant
/// 2. Vertical flip, if `flip_v`
/// 3. Horizontal flip, if `flip_h`
///
/// # Arguments
///
/// * `original` - The decoded grid, never a previous render
/// * `angle_degrees` - Rotation in degrees, any sign, multiple of 90
/// * `flip_v` - Mirror top to bottom after rotating
/// * `flip_h` - Mirror left to right after the vertical flip
///
/// # Errors
///
/// Returns an error, and produces no grid, if:
/// - `angle_degrees` is not a multiple of 90 (`UnsupportedAngle`)
/// - the pixel count doesn't match width * height (`InvalidPixelData`)
///
/// # Example
///
/// ```ignore
/// let shown = render(&original, -90, false, true)?;
/// ```
pub fn render(
    original: &PixelGrid,
    angle_degrees: i32,
    flip_v: bool,
    flip_h: bool,
) -> Result<PixelGrid, TransformError> {
    let quadrant = Quadrant::from_degrees(angle_degrees)?;

    // Kernels index by coordinate, so a short buffer must be caught here
    let expected = (original.width as usize).saturating_mul(original.height as usize);
    if original.pixels.len() != expected {
        return Err(TransformError::InvalidPixelData {
            expected,
            actual: original.pixels.len(),
        });
    }

    trace!("rotate {} degrees", quadrant.degrees());
    let mut grid = quadrant.apply(original);

    if flip_v {
        trace!("flip vertical");
        grid = flip_vertical(&grid);
    }
    if flip_h {
        trace!("flip horizontal");
        grid = flip_horizontal(&grid);
    }

    debug!(
        "rendered {}x{} -> {}x{} (angle {}, flip_v {}, flip_h {})",
        original.width,
        original.height,
        grid.width,
        grid.height,
        angle_degrees,
        flip_v,
        flip_h
    );

    Ok(grid)
}

/// Render an original grid with an accumulated [`TransformState`].
pub fn render_state(
    original: &PixelGrid,
    state: &TransformState,
) -> Result<PixelGrid, TransformError> {
    render(
        original,
        state.angle,
        state.flip_vertical,
        state.flip_horizontal,
    )
}


// ============================================================================
// Property-Based Tests
// ============================================================================
