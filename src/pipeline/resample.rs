//! Fit-inside nearest-neighbour resampling.
//!
//! Mirrors what a canvas draw with smoothing disabled does: uniform scale
//! `min(N/w, N/h)`, centered in the square target, transparent letterbox
//! padding. Nearest-neighbour only, so no blended colours ever reach the
//! quantizer.

use image::RgbaImage;

use crate::types::{Colour, PixelGrid};

/// Resample a source image onto a transparent N×N grid.
///
/// `size == 0` and empty sources both yield the empty grid; degenerate
/// inputs are a defined no-op, not an error.
pub fn resample(image: &RgbaImage, size: u32) -> PixelGrid {
    let mut grid = PixelGrid::new(size);

    let (src_w, src_h) = image.dimensions();
    if size == 0 || src_w == 0 || src_h == 0 {
        return grid;
    }

    let n = f64::from(size);
    let scale = (n / f64::from(src_w)).min(n / f64::from(src_h));
    let draw_w = f64::from(src_w) * scale;
    let draw_h = f64::from(src_h) * scale;
    let off_x = (n - draw_w) / 2.0;
    let off_y = (n - draw_h) / 2.0;

    for y in 0..size {
        // Map the target pixel centre back into source space.
        let fy = (f64::from(y) + 0.5 - off_y) / scale;
        for x in 0..size {
            let fx = (f64::from(x) + 0.5 - off_x) / scale;
            if fx < 0.0 || fy < 0.0 || fx >= f64::from(src_w) || fy >= f64::from(src_h) {
                continue; // letterbox area stays transparent
            }
            let sx = (fx as u32).min(src_w - 1);
            let sy = (fy as u32).min(src_h - 1);
            let px = image.get_pixel(sx, sy).0;
            grid.set(x, y, Colour::new(px[0], px[1], px[2], px[3]));
        }
    }

    grid
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
        RgbaImage::from_pixel(width, height, image::Rgba(rgba))
    }

    #[test]
    fn test_square_source_fills_grid() {
        let img = solid(10, 10, [255, 0, 0, 255]);
        let grid = resample(&img, 4);
        assert!(grid.pixels().iter().all(|p| *p == Colour::rgb(255, 0, 0)));
    }

    #[test]
    fn test_wide_source_letterboxes_vertically() {
        // 2x1 into 4x4: scale 2, draw rect 4x2 centred at rows 1-2.
        let mut img = solid(2, 1, [0, 0, 0, 255]);
        img.put_pixel(1, 0, image::Rgba([255, 255, 255, 255]));
        let grid = resample(&img, 4);

        for x in 0..4 {
            assert!(grid.get(x, 0).unwrap().is_transparent());
            assert!(grid.get(x, 3).unwrap().is_transparent());
        }
        for y in 1..3 {
            assert_eq!(grid.get(0, y), Some(Colour::rgb(0, 0, 0)));
            assert_eq!(grid.get(1, y), Some(Colour::rgb(0, 0, 0)));
            assert_eq!(grid.get(2, y), Some(Colour::rgb(255, 255, 255)));
            assert_eq!(grid.get(3, y), Some(Colour::rgb(255, 255, 255)));
        }
    }

    #[test]
    fn test_identity_size() {
        let mut img = solid(2, 2, [10, 20, 30, 255]);
        img.put_pixel(1, 1, image::Rgba([1, 2, 3, 4]));
        let grid = resample(&img, 2);
        assert_eq!(grid.get(0, 0), Some(Colour::rgb(10, 20, 30)));
        assert_eq!(grid.get(1, 1), Some(Colour::new(1, 2, 3, 4)));
    }

    #[test]
    fn test_zero_size_is_empty() {
        let img = solid(8, 8, [255, 0, 0, 255]);
        let grid = resample(&img, 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_empty_source_is_transparent() {
        let img = RgbaImage::new(0, 0);
        let grid = resample(&img, 4);
        assert_eq!(grid.len(), 16);
        assert!(grid.pixels().iter().all(|p| p.is_transparent()));
    }

    #[test]
    fn test_upscale_preserves_source_pixels() {
        // 2x2 checkerboard into 8x8: each source pixel covers a 4x4 block.
        let mut img = solid(2, 2, [0, 0, 0, 255]);
        img.put_pixel(1, 0, image::Rgba([255, 255, 255, 255]));
        img.put_pixel(0, 1, image::Rgba([255, 255, 255, 255]));
        let grid = resample(&img, 8);
        assert_eq!(grid.get(0, 0), Some(Colour::rgb(0, 0, 0)));
        assert_eq!(grid.get(3, 3), Some(Colour::rgb(0, 0, 0)));
        assert_eq!(grid.get(4, 0), Some(Colour::rgb(255, 255, 255)));
        assert_eq!(grid.get(0, 4), Some(Colour::rgb(255, 255, 255)));
        assert_eq!(grid.get(7, 7), Some(Colour::rgb(0, 0, 0)));
    }
}
