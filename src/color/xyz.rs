//! CIE 1931 XYZ tristimulus color type
//!
//! XYZ is the device-independent intermediate between device RGB and
//! [`Lab`](crate::Lab). Values follow the 0-100 convention of the
//! reference transform tables, so the D65/2° white point sits at
//! X=95.047, Y=100.000, Z=108.883.

use super::rgb::Rgb;

/// A color in the CIE 1931 XYZ space (D65 illuminant, 2° observer).
///
/// Ephemeral by design: produced from [`Rgb`] and immediately consumed by
/// the [`Lab`](crate::Lab) conversion. Components are unbounded but stay
/// close to 0..=100 for colors inside the sRGB gamut.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    /// X tristimulus value
    pub x: f64,
    /// Y tristimulus value (luminance)
    pub y: f64,
    /// Z tristimulus value
    pub z: f64,
}

impl Xyz {
    /// Create a new Xyz color.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// sRGB inverse gamma, scaled to the 0-100 XYZ convention.
///
/// Channel values above the 0.04045 knee follow the 2.4-exponent curve;
/// values below it are on the linear toe with divisor 12.92.
#[inline]
fn gamma_expand(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4) * 100.0
    } else {
        c / 12.92 * 100.0
    }
}

impl From<Rgb> for Xyz {
    /// Convert device RGB to XYZ.
    ///
    /// Channels are normalized to 0..=1, gamma-expanded, then pushed
    /// through the sRGB→XYZ matrix for D65/2°. The matrix rows use the
    /// 4-decimal reference-table coefficients.
    fn from(color: Rgb) -> Self {
        let r = gamma_expand(color.r as f64 / 255.0);
        let g = gamma_expand(color.g as f64 / 255.0);
        let b = gamma_expand(color.b as f64 / 255.0);

        Xyz {
            x: r * 0.4124 + g * 0.3576 + b * 0.1805,
            y: r * 0.2126 + g * 0.7152 + b * 0.0722,
            z: r * 0.0193 + g * 0.1192 + b * 0.9505,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_maps_to_origin() {
        let xyz = Xyz::from(Rgb::new(0, 0, 0));
        assert_eq!(xyz.x, 0.0);
        assert_eq!(xyz.y, 0.0);
        assert_eq!(xyz.z, 0.0);
    }

    /// White must land on the D65 reference white. If this breaks, the
    /// gamma scaling or the matrix rows are off and every downstream
    /// Lab value (and thus every match) is wrong.
    #[test]
    fn test_white_maps_to_reference_white() {
        let xyz = Xyz::from(Rgb::new(255, 255, 255));
        assert!((xyz.x - 95.05).abs() < 0.01, "X should be ~95.047, got {}", xyz.x);
        assert!((xyz.y - 100.0).abs() < 0.01, "Y should be ~100.0, got {}", xyz.y);
        assert!((xyz.z - 108.9).abs() < 0.01, "Z should be ~108.883, got {}", xyz.z);
    }

    /// The two gamma branches must agree at the knee to ~1e-3; a larger
    /// step would mean one branch lost its scale factor.
    #[test]
    fn test_gamma_branches_continuous_at_knee() {
        let below = gamma_expand(0.04045);
        let above = gamma_expand(0.04045 + 1e-9);
        assert!(
            (below - above).abs() < 1e-3,
            "gamma discontinuity at knee: {} vs {}",
            below,
            above
        );
    }

    #[test]
    fn test_primaries_match_matrix_rows() {
        // Pure red gamma-expands to 100.0, so XYZ is the first matrix column x100
        let red = Xyz::from(Rgb::new(255, 0, 0));
        assert!((red.x - 41.24).abs() < 1e-9);
        assert!((red.y - 21.26).abs() < 1e-9);
        assert!((red.z - 1.93).abs() < 1e-9);

        let blue = Xyz::from(Rgb::new(0, 0, 255));
        assert!((blue.x - 18.05).abs() < 1e-9);
        assert!((blue.y - 7.22).abs() < 1e-9);
        assert!((blue.z - 95.05).abs() < 1e-9);
    }
}
