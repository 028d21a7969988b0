//! Top-K palette reduction.
//!
//! A second quantization pass restricted to the K most frequently used
//! colours from a prior pass. Produces a new grid rather than rewriting the
//! input, so callers keeping the pre-reduction grid see no aliasing.

use crate::error::Result;
use crate::types::{Colour, PixelGrid};

use super::quantize::UsedColour;

/// Re-map every opaque cell to the nearest of the top-`limit` colours.
///
/// Returns `None` when the limit is a no-op (`0`, or at least the distinct
/// colour count); the caller keeps the original grid. The frequency table
/// is deliberately not recomputed — reported counts keep the pre-reduction
/// distribution, and callers needing post-reduction counts must re-run
/// [`quantize`](super::quantize::quantize) themselves.
pub fn reduce(
    grid: &PixelGrid,
    used: &[UsedColour],
    limit: usize,
) -> Result<Option<PixelGrid>> {
    if limit == 0 || limit >= used.len() {
        return Ok(None);
    }

    // `used` is sorted by descending count, so the reduced palette is its
    // head. Entry 0 (most frequent) is the natural fallback: nearest-colour
    // search converges there for cells whose colour fell out of the top K.
    let mut reduced: Vec<Colour> = Vec::with_capacity(limit);
    for entry in &used[..limit] {
        reduced.push(Colour::from_hex(&entry.hex)?);
    }

    let mut out = grid.clone();
    for pixel in out.pixels_mut() {
        if pixel.is_transparent() {
            continue;
        }
        let mut best = reduced[0];
        let mut best_dist = pixel.distance_sq(best);
        for &candidate in &reduced[1..] {
            let dist = pixel.distance_sq(candidate);
            if dist < best_dist {
                best_dist = dist;
                best = candidate;
            }
        }
        pixel.r = best.r;
        pixel.g = best.g;
        pixel.b = best.b;
        pixel.a = 255;
    }

    Ok(Some(out))
}
