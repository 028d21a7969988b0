//! Palette quantization and colour usage statistics.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{ActivePalette, PixelGrid, Tier};

/// Usage statistics for one distinct output colour.
#[derive(Debug, Clone, Serialize)]
pub struct UsedColour {
    pub hex: String,
    pub name: String,
    pub tier: Tier,
    /// Number of grid cells mapped to this colour.
    pub count: usize,
}

/// Quantize every opaque cell to its nearest active-palette colour.
///
/// Transparent cells (alpha exactly 0) are left untouched and counted
/// separately; opaque cells get the winning colour's RGB and alpha 255.
/// Returns the frequency table sorted by descending count (ties keep
/// first-encounter order from the raster scan) and the transparent count.
pub fn quantize(grid: &mut PixelGrid, palette: &ActivePalette) -> (Vec<UsedColour>, usize) {
    let mut used: Vec<UsedColour> = Vec::new();
    let mut index_by_hex: HashMap<&'static str, usize> = HashMap::new();
    let mut transparent = 0usize;

    for pixel in grid.pixels_mut() {
        if pixel.is_transparent() {
            transparent += 1;
            continue;
        }

        let winner = palette.nearest(*pixel);
        pixel.r = winner.colour.r;
        pixel.g = winner.colour.g;
        pixel.b = winner.colour.b;
        pixel.a = 255;

        match index_by_hex.get(winner.hex) {
            Some(&i) => used[i].count += 1,
            None => {
                index_by_hex.insert(winner.hex, used.len());
                used.push(UsedColour {
                    hex: winner.hex.to_string(),
                    name: winner.name.to_string(),
                    tier: winner.tier,
                    count: 1,
                });
            }
        }
    }

    // Stable sort: equal counts keep first-encounter order.
    used.sort_by(|a, b| b.count.cmp(&a.count));

    (used, transparent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Colour, TierFilter};

    fn grid_from(colours: &[Colour]) -> PixelGrid {
        let size = (colours.len() as f64).sqrt() as u32;
        assert_eq!((size * size) as usize, colours.len());
        let mut grid = PixelGrid::new(size);
        for (i, &c) in colours.iter().enumerate() {
            grid.set(i as u32 % size, i as u32 / size, c);
        }
        grid
    }

    #[test]
    fn test_opaque_pixels_become_palette_members() {
        let palette = ActivePalette::select(TierFilter::All).unwrap();
        let mut grid = grid_from(&[
            Colour::rgb(250, 3, 10),
            Colour::rgb(5, 190, 100),
            Colour::rgb(70, 60, 180),
            Colour::rgb(240, 220, 60),
        ]);

        let (used, transparent) = quantize(&mut grid, &palette);

        assert_eq!(transparent, 0);
        assert_eq!(used.iter().map(|u| u.count).sum::<usize>(), 4);
        for pixel in grid.pixels() {
            assert!(pixel.is_opaque());
            assert!(palette
                .entries()
                .iter()
                .any(|e| e.colour.r == pixel.r && e.colour.g == pixel.g && e.colour.b == pixel.b));
        }
    }

    #[test]
    fn test_transparent_cells_skipped() {
        let palette = ActivePalette::select(TierFilter::All).unwrap();
        let mut grid = grid_from(&[
            Colour::TRANSPARENT,
            Colour::rgb(255, 0, 0),
            Colour::TRANSPARENT,
            Colour::TRANSPARENT,
        ]);

        let (used, transparent) = quantize(&mut grid, &palette);

        assert_eq!(transparent, 3);
        assert_eq!(used.len(), 1);
        assert_eq!(used[0].hex, "#ed1c24");
        assert_eq!(used[0].count, 1);
        assert!(grid.get(0, 0).unwrap().is_transparent());
    }

    #[test]
    fn test_partial_alpha_counts_as_opaque() {
        // Anything above alpha 0 is paintable and gets forced to 255.
        let palette = ActivePalette::select(TierFilter::All).unwrap();
        let mut grid = grid_from(&[Colour::new(255, 0, 0, 1)]);

        let (used, transparent) = quantize(&mut grid, &palette);

        assert_eq!(transparent, 0);
        assert_eq!(used[0].count, 1);
        assert!(grid.get(0, 0).unwrap().is_opaque());
    }

    #[test]
    fn test_frequency_table_sorted_descending() {
        let palette = ActivePalette::select(TierFilter::All).unwrap();
        let mut grid = grid_from(&[
            Colour::rgb(255, 255, 255),
            Colour::rgb(0, 0, 0),
            Colour::rgb(0, 0, 0),
            Colour::rgb(0, 0, 0),
        ]);

        let (used, _) = quantize(&mut grid, &palette);

        assert_eq!(used.len(), 2);
        assert_eq!(used[0].hex, "#000000");
        assert_eq!(used[0].count, 3);
        assert_eq!(used[1].hex, "#ffffff");
        assert_eq!(used[1].count, 1);
    }

    #[test]
    fn test_count_ties_keep_scan_order() {
        let palette = ActivePalette::select(TierFilter::All).unwrap();
        // White first in the raster scan, black second; equal counts.
        let mut grid = grid_from(&[
            Colour::rgb(255, 255, 255),
            Colour::rgb(0, 0, 0),
            Colour::rgb(255, 255, 255),
            Colour::rgb(0, 0, 0),
        ]);

        let (used, _) = quantize(&mut grid, &palette);

        assert_eq!(used[0].hex, "#ffffff");
        assert_eq!(used[1].hex, "#000000");
    }

    #[test]
    fn test_free_only_filter() {
        let palette = ActivePalette::select(TierFilter::FreeOnly).unwrap();
        // #aaaaaa is the premium Medium Gray; with free colours only it
        // must land on a free gray instead.
        let mut grid = grid_from(&[Colour::rgb(0xaa, 0xaa, 0xaa)]);

        let (used, _) = quantize(&mut grid, &palette);

        assert_eq!(used.len(), 1);
        assert_eq!(used[0].tier, Tier::Free);
        assert_ne!(used[0].hex, "#aaaaaa");
    }
}
