//! PNG export for blueprint grids.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{PxGridError, Result};
use crate::types::PixelGrid;

/// Write a blueprint grid to a PNG file.
///
/// `scale` is an integer nearest-neighbour upscale factor (1 = no scaling),
/// so the exported image stays crisp pixel art.
pub fn write_png(grid: &PixelGrid, path: &Path, scale: u32) -> Result<()> {
    if grid.is_empty() {
        return Err(PxGridError::Image {
            path: path.to_path_buf(),
            message: "Cannot export an empty grid".to_string(),
        });
    }

    let scale = scale.max(1);
    let side = grid.size() * scale;

    let mut img: RgbaImage = ImageBuffer::new(side, side);

    for y in 0..grid.size() {
        for x in 0..grid.size() {
            let colour = grid.get(x, y).unwrap_or_default();
            let rgba = Rgba(colour.to_rgba());

            // Fill scaled pixels
            for sy in 0..scale {
                for sx in 0..scale {
                    img.put_pixel(x * scale + sx, y * scale + sy, rgba);
                }
            }
        }
    }

    img.save(path).map_err(|e| PxGridError::Image {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}
