//! Error types for palette operations

use thiserror::Error;

/// Error type for palette validation.
///
/// The matching operations themselves are total; the only way to misuse a
/// palette is to construct one with no candidates, and that is rejected
/// here rather than surfacing as an undefined match later.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    /// No colors provided in the palette
    #[error("palette cannot be empty")]
    Empty,
}
