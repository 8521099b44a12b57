//! Palette types and nearest-color matching
//!
//! A [`Palette`] is an ordered set of candidate colors with their Lab
//! conversions precomputed at construction. Matching is a brute-force
//! CIEDE2000 scan with first-minimum-wins tie-breaking.

#[allow(clippy::module_inception)]
mod palette;

mod error;

pub use error::PaletteError;
pub use palette::{Palette, REFERENCE_COLORS};
