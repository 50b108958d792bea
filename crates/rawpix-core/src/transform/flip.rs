//! Mirror operations.
//!
//! Both flips keep the grid dimensions and write into a fresh buffer, so a
//! flip never reads a cell it has already overwritten.

use crate::decode::PixelGrid;

/// Mirror a grid top to bottom: `dst(x, h-1-y) = src(x, y)`.
pub fn flip_vertical(grid: &PixelGrid) -> PixelGrid {
    let (w, h) = grid.dimensions();
    let mut out = vec![0u32; grid.pixels.len()];

    // Whole rows move, so copy them as slices
    let row_len = w as usize;
    for y in 0..h as usize {
        let src = &grid.pixels[y * row_len..(y + 1) * row_len];
        let dst_y = h as usize - 1 - y;
        out[dst_y * row_len..(dst_y + 1) * row_len].copy_from_slice(src);
    }

    PixelGrid {
        width: w,
        height: h,
        pixels: out,
    }
}

/// Mirror a grid left to right: `dst(w-1-x, y) = src(x, y)`.
pub fn flip_horizontal(grid: &PixelGrid) -> PixelGrid {
    let (w, h) = grid.dimensions();
    let mut out = vec![0u32; grid.pixels.len()];

    for y in 0..h {
        for x in 0..w {
            let dst_idx = y as usize * w as usize + (w - 1 - x) as usize;
            out[dst_idx] = grid.pixels[grid.index(x, y)];
        }
    }

    PixelGrid {
        width: w,
        height: h,
        pixels: out,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_grid(width: u32, height: u32) -> PixelGrid {
        PixelGrid::new(width, height, (0..width * height).collect())
    }

    #[test]
    fn test_flip_vertical_mapping() {
        // 0 1 2
        // 3 4 5
        let src = test_grid(3, 2);
        let dst = flip_vertical(&src);

        assert_eq!(dst.dimensions(), (3, 2));
        assert_eq!(dst.pixels, vec![3, 4, 5, 0, 1, 2]);
    }

    #[test]
    fn test_flip_horizontal_mapping() {
        let src = test_grid(3, 2);
        let dst = flip_horizontal(&src);

        assert_eq!(dst.dimensions(), (3, 2));
        assert_eq!(dst.pixels, vec![2, 1, 0, 5, 4, 3]);
    }

    #[test]
    fn test_flip_odd_height_keeps_middle_row() {
        let src = test_grid(2, 3);
        let dst = flip_vertical(&src);
        assert_eq!(dst.get(0, 1), src.get(0, 1));
        assert_eq!(dst.get(1, 1), src.get(1, 1));
    }

    #[test]
    fn test_flip_single_pixel() {
        let src = PixelGrid::new(1, 1, vec![42]);
        assert_eq!(flip_vertical(&src), src);
        assert_eq!(flip_horizontal(&src), src);
    }

    #[test]
    fn test_flips_are_involutions() {
        let src = test_grid(5, 4);
        assert_eq!(flip_vertical(&flip_vertical(&src)), src);
        assert_eq!(flip_horizontal(&flip_horizontal(&src)), src);
    }

    #[test]
    fn test_flip_does_not_touch_source() {
        let src = test_grid(4, 4);
        let before = src.clone();
        let _ = flip_horizontal(&src);
        let _ = flip_vertical(&src);
        assert_eq!(src, before);
    }
}
