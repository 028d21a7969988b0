//! pxgrid - Palette-constrained pixel-art blueprint generator
//!
//! A library for converting arbitrary raster images into fixed-size grids
//! whose every pixel comes from a constrained, named colour palette, for
//! preparing artwork for pixel-placement canvases.

pub mod cli;
pub mod error;
pub mod export;
pub mod output;
pub mod pipeline;
pub mod types;

pub use error::{PxGridError, Result};
pub use export::write_png;
pub use pipeline::{process, Blueprint, BlueprintConfig, UsedColour, MAX_SIZE};
pub use types::{ActivePalette, Colour, PixelGrid, Tier, TierFilter, PALETTE};
