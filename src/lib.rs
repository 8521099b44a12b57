//! lab-match: CIEDE2000 color difference and nearest-palette matching
//!
//! This library computes perceptual color difference between two colors
//! and uses that metric to find, for a given color, its closest match
//! within a reference palette.
//!
//! # Quick Start
//!
//! ```
//! use lab_match::{Palette, Rgb};
//!
//! let palette = Palette::reference();
//! let matched = palette.closest(Rgb::new(200, 10, 10));
//! assert_eq!(matched, Rgb::new(255, 0, 0));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! Rgb ──> Xyz ──> Lab ──> ciede2000(Lab, Lab) ──> ΔE00
//!                                  │
//!                     Palette scan (arg-min) ──> matched Rgb
//! ```
//!
//! Device RGB is not perceptually uniform: equal channel steps do not
//! look like equal color steps, so distances measured directly on RGB
//! channels rank candidate colors wrongly. The pipeline therefore
//! converts through CIE XYZ (D65 illuminant, 2° observer) into CIE
//! L*a*b* and measures difference there with CIEDE2000, the CIE's
//! refinement of the plain Euclidean ΔE with lightness/chroma/hue
//! weighting and a rotation term for the blue region.
//!
//! Every operation is a pure, total, synchronous computation: no I/O, no
//! shared state, no failure modes beyond rejecting an empty palette at
//! construction.

pub mod color;
pub mod diff;
pub mod palette;


pub use color::{Lab, Rgb, Xyz};
pub use diff::ciede2000;
pub use palette::{Palette, PaletteError, REFERENCE_COLORS};
