//! Nearest palette color search.
//!
//! Every entry is converted to YUV and measured against the query with
//! Euclidean distance. The scan is exhaustive; palettes are small.
//!
//! # Ties
//!
//! Candidates replace the current best only when strictly closer, so the
//! entry that comes first in the palette wins a tie. [`find_nearest_par`]
//! reproduces that order after its parallel reduction.

use crate::yuv::{rgb_to_yuv, yuv_distance};
use crate::{ColorError, ColorResult, Palette, PaletteEntry};
use rayon::prelude::*;
use rgb2pal_math::MatrixEngine;

/// Result of a nearest-color search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Match {
    /// Winning palette entry.
    pub entry: PaletteEntry,
    /// YUV distance from the query to `entry`.
    pub distance: f64,
    /// Position of `entry` in the palette (0-based, file order).
    pub position: usize,
}

/// Finds the palette entry closest to `query`.
///
/// # Errors
///
/// Returns [`ColorError::EmptyPalette`] if `palette` has no entries.
///
/// # Example
///
/// ```rust
/// use rgb2pal_color::{find_nearest, load_palette};
///
/// let palette = load_palette("1=000000\n2=ffffff\n".as_bytes()).unwrap();
/// let found = find_nearest(0x202020, &palette).unwrap();
/// assert_eq!(found.entry.index, 1);
/// ```
pub fn find_nearest(query: u32, palette: &Palette) -> ColorResult<Match> {
    let mut engine = MatrixEngine::new();
    find_nearest_with(&mut engine, query, palette)
}

/// Same as [`find_nearest`], reusing a caller-owned engine.
pub fn find_nearest_with(
    engine: &mut MatrixEngine,
    query: u32,
    palette: &Palette,
) -> ColorResult<Match> {
    let target = rgb_to_yuv(engine, query)?;

    let mut min = f64::MAX;
    let mut best = None;
    for (position, entry) in palette.iter().enumerate() {
        let distance = yuv_distance(target, rgb_to_yuv(engine, entry.rgb)?);
        if distance < min {
            min = distance;
            best = Some(Match {
                entry: *entry,
                distance,
                position,
            });
        }
    }

    best.ok_or(ColorError::EmptyPalette)
}

/// Parallel [`find_nearest`] on the current rayon pool.
///
/// Each worker gets its own [`MatrixEngine`]. The result is identical to the
/// serial search, including tie-breaks.
pub fn find_nearest_par(query: u32, palette: &Palette) -> ColorResult<Match> {
    let target = rgb_to_yuv(&mut MatrixEngine::new(), query)?;

    palette
        .entries()
        .par_iter()
        .enumerate()
        .map_init(MatrixEngine::new, |engine, (position, entry)| -> ColorResult<Match> {
            let distance = yuv_distance(target, rgb_to_yuv(engine, entry.rgb)?);
            Ok(Match {
                entry: *entry,
                distance,
                position,
            })
        })
        .try_reduce_with(|a, b| Ok(closer(a, b)))
        .unwrap_or(Err(ColorError::EmptyPalette))
}

fn closer(a: Match, b: Match) -> Match {
    if b.distance < a.distance || (b.distance == a.distance && b.position < a.position) {
        b
    } else {
        a
    }
}
