//! The paintable colour registry and tier-filtered active palettes.

use std::fmt;

use serde::Serialize;

use crate::error::Result;

use super::Colour;

/// Pricing tier of a registry colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Premium,
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tier::Free => write!(f, "free"),
            Tier::Premium => write!(f, "premium"),
        }
    }
}

/// Which tiers are eligible for nearest-colour matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TierFilter {
    /// Free-tier colours only.
    FreeOnly,
    /// Every registry colour.
    #[default]
    All,
}

/// A named registry colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteColour {
    pub name: &'static str,
    pub hex: &'static str,
    pub tier: Tier,
}

const fn free(name: &'static str, hex: &'static str) -> PaletteColour {
    PaletteColour { name, hex, tier: Tier::Free }
}

const fn premium(name: &'static str, hex: &'static str) -> PaletteColour {
    PaletteColour { name, hex, tier: Tier::Premium }
}

/// The full colour registry, in canonical order.
///
/// Order matters: it is the tie-break precedence for nearest-colour search.
pub const PALETTE: &[PaletteColour] = &[
    free("Black", "#000000"),
    free("Dark Gray", "#3c3c3c"),
    free("Gray", "#787878"),
    free("Light Gray", "#d2d2d2"),
    free("White", "#ffffff"),
    free("Deep Red", "#600018"),
    free("Red", "#ed1c24"),
    free("Orange", "#ff7f27"),
    free("Gold", "#f6aa09"),
    free("Yellow", "#f9dd3b"),
    free("Light Yellow", "#fffabc"),
    free("Dark Green", "#0eb968"),
    free("Green", "#13e67b"),
    free("Light Green", "#87ff5e"),
    free("Dark Teal", "#0c816e"),
    free("Teal", "#10aea6"),
    free("Light Teal", "#13e1bc"),
    free("Cyan", "#60f7f2"),
    free("Dark Blue", "#28509e"),
    free("Blue", "#4093e4"),
    free("Indigo", "#6b50f6"),
    free("Light Indigo", "#99b1fb"),
    free("Dark Purple", "#780c99"),
    free("Purple", "#aa38b9"),
    free("Light Purple", "#e09ff9"),
    free("Dark Pink", "#cb007a"),
    free("Pink", "#ec1f80"),
    free("Light Pink", "#f38da9"),
    free("Dark Brown", "#684634"),
    free("Brown", "#95682a"),
    free("Beige", "#f8b277"),
    premium("Medium Gray", "#aaaaaa"),
    premium("Dark Red", "#a50e1e"),
    premium("Light Red", "#fa8072"),
    premium("Dark Orange", "#e45c1a"),
    premium("Dark Goldenrod", "#9c8431"),
    premium("Goldenrod", "#c5ad31"),
    premium("Light Goldenrod", "#e8d45f"),
    premium("Dark Olive", "#4a6b3a"),
    premium("Olive", "#5a944a"),
    premium("Light Olive", "#84c573"),
    premium("Dark Cyan", "#0f799f"),
    premium("Light Cyan", "#bbfaf2"),
    premium("Light Blue", "#7dc7ff"),
    premium("Dark Indigo", "#4d31b8"),
    premium("Dark Slate Blue", "#4a4284"),
    premium("Slate Blue", "#7a71c4"),
    premium("Light Slate Blue", "#b5aef1"),
    premium("Dark Peach", "#9b5249"),
    premium("Peach", "#d18078"),
    premium("Light Peach", "#fab6a4"),
    premium("Light Brown", "#dba463"),
    premium("Dark Tan", "#7b6352"),
    premium("Tan", "#9c846b"),
    premium("Light Tan", "#d6b594"),
    premium("Dark Beige", "#d18051"),
    premium("Light Beige", "#ffc5a5"),
    premium("Dark Stone", "#6d643f"),
    premium("Stone", "#948c6b"),
    premium("Light Stone", "#cdc59e"),
    premium("Dark Slate", "#333941"),
    premium("Slate", "#6d758d"),
    premium("Light Slate", "#b3b9d1"),
];

/// A registry colour with its hex resolved to an RGB value.
#[derive(Debug, Clone, Copy)]
pub struct ActiveColour {
    pub name: &'static str,
    pub hex: &'static str,
    pub tier: Tier,
    pub colour: Colour,
}

/// The tier-filtered subset of the registry eligible for matching.
///
/// Entries keep registry order, so nearest-colour ties resolve to the
/// earlier registry entry deterministically.
#[derive(Debug, Clone)]
pub struct ActivePalette {
    entries: Vec<ActiveColour>,
}

impl ActivePalette {
    /// Select the active palette for a tier filter.
    ///
    /// Resolves each entry's hex string; the shipped registry is trusted,
    /// so a `Format` error here means the registry data itself is broken.
    pub fn select(filter: TierFilter) -> Result<Self> {
        let mut entries = Vec::with_capacity(PALETTE.len());
        for entry in PALETTE {
            if filter == TierFilter::FreeOnly && entry.tier != Tier::Free {
                continue;
            }
            entries.push(ActiveColour {
                name: entry.name,
                hex: entry.hex,
                tier: entry.tier,
                colour: Colour::from_hex(entry.hex)?,
            });
        }
        Ok(Self { entries })
    }

    /// Find the nearest active colour by squared RGB distance.
    ///
    /// Strict `<` during the linear scan keeps the first minimum, so exact
    /// ties go to the earlier entry.
    pub fn nearest(&self, colour: Colour) -> &ActiveColour {
        let mut best = &self.entries[0];
        let mut best_dist = colour.distance_sq(best.colour);
        for entry in &self.entries[1..] {
            let dist = colour.distance_sq(entry.colour);
            if dist < best_dist {
                best_dist = dist;
                best = entry;
            }
        }
        best
    }

    /// Active colours in registry order.
    pub fn entries(&self) -> &[ActiveColour] {
        &self.entries
    }

    /// Number of active colours.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True only for a hypothetical empty selection; the registry always
    /// has free colours, so `select` never produces this.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
