//! Device RGB color type
//!
//! The 8-bit RGB triple is the input and output currency of the crate:
//! palette entries, match targets, and match results are all `Rgb`.

/// A device color as 8-bit red/green/blue channel intensities.
///
/// `Rgb` is a plain value type: equality and hashing go by exact channel
/// values, which is what allows it to key a palette mapping. There is no
/// alpha channel.
///
/// All color math happens in [`Lab`](crate::Lab) space; `Rgb` only enters
/// and leaves the pipeline. Convert with [`Lab::from`](crate::Lab).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0..=255)
    pub r: u8,
    /// Green channel (0..=255)
    pub g: u8,
    /// Blue channel (0..=255)
    pub b: u8,
}

impl Rgb {
    /// Create a new Rgb color.
    ///
    /// # Example
    /// ```
    /// use lab_match::Rgb;
    /// let red = Rgb::new(255, 0, 0);
    /// assert_eq!(red.r, 255);
    /// ```
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create an Rgb color from a byte array [R, G, B].
    #[inline]
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2])
    }

    /// Convert to a byte array [R, G, B].
    #[inline]
    pub const fn to_bytes(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}
