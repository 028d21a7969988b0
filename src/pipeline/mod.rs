//! The image-to-blueprint pipeline.
//!
//! One synchronous, run-to-completion pass: resample the source onto the
//! target grid, quantize against the active palette, optionally reduce to
//! the top-K colours, and bundle the result. Every invocation recomputes
//! from scratch and returns an immutable snapshot; hosts wanting debounce
//! or cancellation layer that on top.

mod quantize;
mod reduce;
mod resample;

pub use quantize::{quantize, UsedColour};
pub use reduce::reduce;
pub use resample::resample;

use image::RgbaImage;

use crate::error::Result;
use crate::types::{ActivePalette, PixelGrid, TierFilter};

/// Upper bound on the target grid side length.
pub const MAX_SIZE: u32 = 2048;

/// Pipeline configuration: target size, tier filter, and colour budget.
#[derive(Debug, Clone, Copy)]
pub struct BlueprintConfig {
    /// Target grid side length. `0` short-circuits to an empty result.
    pub size: u32,
    /// Which palette tiers are paintable.
    pub tier_filter: TierFilter,
    /// Optional colour budget. `None`, `0`, or any value at least the
    /// distinct colour count disables reduction.
    pub colour_limit: Option<usize>,
}

impl Default for BlueprintConfig {
    fn default() -> Self {
        Self {
            size: 128,
            tier_filter: TierFilter::All,
            colour_limit: None,
        }
    }
}

/// The result of one pipeline run.
#[derive(Debug, Clone)]
pub struct Blueprint {
    /// The quantized (and possibly reduced) output grid.
    pub grid: PixelGrid,
    /// Distinct colour usage, descending by count. Counts always reflect
    /// the pre-reduction distribution.
    pub used_colours: Vec<UsedColour>,
    /// Cells excluded from painting.
    pub transparent_pixels: usize,
    /// Cells that need paint: `size² - transparent_pixels`.
    pub paintable_pixels: usize,
}

impl Blueprint {
    fn empty() -> Self {
        Self {
            grid: PixelGrid::new(0),
            used_colours: Vec::new(),
            transparent_pixels: 0,
            paintable_pixels: 0,
        }
    }
}

/// Run the full pipeline over a decoded source image.
///
/// A non-positive size is defined to produce the empty blueprint rather
/// than an error, so transient out-of-range host input degrades gracefully.
pub fn process(image: &RgbaImage, config: &BlueprintConfig) -> Result<Blueprint> {
    if config.size == 0 {
        return Ok(Blueprint::empty());
    }

    let palette = ActivePalette::select(config.tier_filter)?;

    let mut grid = resample(image, config.size);
    let (used_colours, transparent_pixels) = quantize(&mut grid, &palette);

    // Out-of-range limits clamp to a no-op inside `reduce`.
    let limit = config.colour_limit.unwrap_or(0);
    if let Some(reduced) = reduce(&grid, &used_colours, limit)? {
        grid = reduced;
    }

    let paintable_pixels = grid.len().saturating_sub(transparent_pixels);

    Ok(Blueprint {
        grid,
        used_colours,
        transparent_pixels,
        paintable_pixels,
    })
}
