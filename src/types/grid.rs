//! Fixed-size pixel grid.

use super::Colour;

/// A square pixel grid (row-major, origin top-left).
///
/// Every pipeline run allocates a fresh grid; results are snapshots and are
/// never updated incrementally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    size: u32,
    pixels: Vec<Colour>,
}

impl PixelGrid {
    /// Create a fully transparent grid of the given side length.
    pub fn new(size: u32) -> Self {
        Self {
            size,
            pixels: vec![Colour::TRANSPARENT; (size as usize).pow(2)],
        }
    }

    /// Side length in pixels.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Total cell count (size squared).
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// True for the degenerate zero-size grid.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: u32, y: u32) -> Option<Colour> {
        if x >= self.size || y >= self.size {
            return None;
        }
        Some(self.pixels[(y * self.size + x) as usize])
    }

    /// Set a pixel at the given position. Out-of-bounds writes are ignored.
    pub fn set(&mut self, x: u32, y: u32, colour: Colour) {
        if x < self.size && y < self.size {
            self.pixels[(y * self.size + x) as usize] = colour;
        }
    }

    /// All pixels in raster order.
    pub fn pixels(&self) -> &[Colour] {
        &self.pixels
    }

    /// Mutable view of all pixels in raster order.
    pub fn pixels_mut(&mut self) -> &mut [Colour] {
        &mut self.pixels
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.pixels.len() * 4);
        for colour in &self.pixels {
            buffer.extend_from_slice(&colour.to_rgba());
        }
        buffer
    }
}
