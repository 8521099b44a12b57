//! Palette struct with precomputed Lab entries and nearest-color matching.

use std::collections::HashMap;

use super::error::PaletteError;
use crate::color::{Lab, Rgb};
use crate::diff::ciede2000;

/// Built-in reference palette: 12 colors spaced evenly around the hue
/// wheel at full saturation and value, from pure red through magenta-red.
///
/// Provided as a convenience for callers; any ordered set of colors can
/// be used instead.
pub const REFERENCE_COLORS: [Rgb; 12] = [
    Rgb::new(255, 0, 0),
    Rgb::new(255, 153, 0),
    Rgb::new(255, 255, 0),
    Rgb::new(153, 255, 0),
    Rgb::new(0, 255, 0),
    Rgb::new(0, 255, 153),
    Rgb::new(0, 255, 255),
    Rgb::new(0, 153, 255),
    Rgb::new(0, 0, 255),
    Rgb::new(153, 0, 255),
    Rgb::new(255, 0, 255),
    Rgb::new(255, 0, 153),
];

/// An ordered set of candidate colors with perceptual matching.
///
/// Entry order is preserved: when two candidates are equidistant from a
/// target, the earlier-indexed one wins, so matching is reproducible for
/// a given palette ordering. Duplicate entries are allowed; the duplicate
/// at the higher index simply never wins.
///
/// # Precomputation
///
/// The Lab conversion of every entry is done once at construction, so a
/// matching call converts only the target. This follows from matching
/// being O(n) distance evaluations over a brute-force linear scan — the
/// right shape for the palettes this crate targets (tens of entries),
/// with no indexing structure to maintain.
///
/// # Example
///
/// ```
/// use lab_match::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.closest(Rgb::new(30, 30, 30)), Rgb::new(0, 0, 0));
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<Rgb>,
    labs: Vec<Lab>,
}

impl Palette {
    /// Create a palette from an ordered slice of candidate colors.
    ///
    /// # Errors
    ///
    /// Returns [`PaletteError::Empty`] if `colors` is empty. A palette
    /// with no candidates has no meaningful nearest match, and failing
    /// here keeps the matching calls themselves infallible.
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self::from_colors(colors.to_vec()))
    }

    /// The built-in 12-color reference palette ([`REFERENCE_COLORS`]).
    pub fn reference() -> Self {
        // Infallible: the reference set is non-empty by construction.
        Self::from_colors(REFERENCE_COLORS.to_vec())
    }

    fn from_colors(colors: Vec<Rgb>) -> Self {
        let labs: Vec<Lab> = colors.iter().map(|&c| Lab::from(c)).collect();
        tracing::trace!(entries = colors.len(), "palette constructed");
        Self { colors, labs }
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Returns true if the palette is empty.
    ///
    /// Note: this always returns `false` since empty palettes are
    /// rejected at construction time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get the color at the given index.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// Get the precomputed Lab conversion of the entry at the given index.
    #[inline]
    pub fn lab(&self, idx: usize) -> Lab {
        self.labs[idx]
    }

    /// Iterate over the palette entries in order.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }

    /// Find the palette entry nearest to the given Lab color.
    ///
    /// Returns `(index, distance)` where `distance` is the CIEDE2000
    /// difference to that entry. The scan runs left to right and only a
    /// strict improvement replaces the running best, so ties keep the
    /// earliest index.
    pub fn find_nearest(&self, color: Lab) -> (usize, f64) {
        let mut best_idx = 0;
        let mut best_dist = f64::INFINITY;

        for (i, &candidate) in self.labs.iter().enumerate() {
            let dist = ciede2000(color, candidate);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
            }
        }

        (best_idx, best_dist)
    }

    /// Find the palette color perceptually closest to `target`.
    ///
    /// Converts the target to Lab once, then scans the precomputed
    /// palette entries with [`find_nearest`](Self::find_nearest). The
    /// returned value is the winning entry's original device color, all
    /// three channels intact.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::{Palette, Rgb};
    ///
    /// let palette = Palette::reference();
    /// assert_eq!(palette.closest(Rgb::new(200, 10, 10)), Rgb::new(255, 0, 0));
    /// ```
    pub fn closest(&self, target: Rgb) -> Rgb {
        let (idx, dist) = self.find_nearest(Lab::from(target));
        tracing::trace!(
            input = ?target.to_bytes(),
            matched = ?self.colors[idx].to_bytes(),
            distance = dist,
            "closest palette entry"
        );
        self.colors[idx]
    }

    /// Map each source color to its closest palette entry.
    ///
    /// The result is keyed by the source color's exact channel values.
    /// A source value that appears more than once overwrites its entry
    /// with an identical result, so duplicates are harmless.
    ///
    /// # Example
    ///
    /// ```
    /// use lab_match::{Palette, Rgb};
    ///
    /// let palette = Palette::reference();
    /// let mapping = palette.map(&[Rgb::new(200, 10, 10), Rgb::new(10, 10, 200)]);
    /// assert_eq!(mapping[&Rgb::new(200, 10, 10)], Rgb::new(255, 0, 0));
    /// ```
    pub fn map(&self, sources: &[Rgb]) -> HashMap<Rgb, Rgb> {
        let mut mapping = HashMap::with_capacity(sources.len());
        for &source in sources {
            mapping.insert(source, self.closest(source));
        }
        tracing::trace!(
            sources = sources.len(),
            distinct = mapping.len(),
            "palette mapping built"
        );
        mapping
    }
}
