//! Core domain types for pxgrid.
//!
//! This module contains the fundamental types used throughout the pipeline:
//! - `Colour` - RGBA colour values
//! - `PALETTE` / `ActivePalette` - the paintable colour registry and its
//!   tier-filtered subsets
//! - `PixelGrid` - the square output grid

mod colour;
mod grid;
mod palette;

pub use colour::Colour;
pub use grid::PixelGrid;
pub use palette::{ActiveColour, ActivePalette, PaletteColour, Tier, TierFilter, PALETTE};
