//! CIE L*a*b* color type
//!
//! L*a*b* is the perceptually-motivated space the CIEDE2000 metric is
//! defined over. L* is lightness, a* the green-red axis, b* the
//! blue-yellow axis.

use super::rgb::Rgb;
use super::xyz::Xyz;

// D65/2° reference white, 0-100 XYZ convention.
const REF_X: f64 = 95.047;
const REF_Y: f64 = 100.000;
const REF_Z: f64 = 108.883;

/// A color in CIE L*a*b* space (D65/2° reference white).
///
/// # Components
///
/// - `l`: Lightness, nominally 0.0 (black) to 100.0 (white)
/// - `a`: Green-red axis, typically -128..=127 for real colors
/// - `b`: Blue-yellow axis, typically -128..=127 for real colors
///
/// Values are not clamped; the conversion is total over all RGB input and
/// the metric tolerates anything finite.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    /// Lightness
    pub l: f64,
    /// Green-red axis
    pub a: f64,
    /// Blue-yellow axis
    pub b: f64,
}

impl Lab {
    /// Create a new Lab color.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

/// Lab transfer function: cube root above the 0.008856 cusp, the
/// 7.787·v + 16/116 linear segment below it.
#[inline]
fn lab_f(v: f64) -> f64 {
    if v > 0.008856 {
        v.cbrt()
    } else {
        7.787 * v + 16.0 / 116.0
    }
}

impl From<Xyz> for Lab {
    /// Convert XYZ to L*a*b* against the D65/2° reference white.
    fn from(color: Xyz) -> Self {
        let fx = lab_f(color.x / REF_X);
        let fy = lab_f(color.y / REF_Y);
        let fz = lab_f(color.z / REF_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }
}

impl From<Rgb> for Lab {
    /// Convert device RGB to L*a*b* through the XYZ intermediate.
    ///
    /// This is the only conversion entry point the matcher uses.
    ///
    /// # Example
    /// ```
    /// use lab_match::{Lab, Rgb};
    ///
    /// let black = Lab::from(Rgb::new(0, 0, 0));
    /// assert!(black.l.abs() < 1e-9);
    /// ```
    #[inline]
    fn from(color: Rgb) -> Self {
        Lab::from(Xyz::from(color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_black_known_vector() {
        let black = Lab::from(Rgb::new(0, 0, 0));
        assert!(black.l.abs() < 1e-9, "black L* should be 0, got {}", black.l);
        assert!(black.a.abs() < 1e-9, "black a* should be 0, got {}", black.a);
        assert!(black.b.abs() < 1e-9, "black b* should be 0, got {}", black.b);
    }

    #[test]
    fn test_white_known_vector() {
        let white = Lab::from(Rgb::new(255, 255, 255));
        assert!(
            (white.l - 100.0).abs() < 0.5,
            "white L* should be ~100, got {}",
            white.l
        );
        assert!(white.a.abs() < 0.5, "white a* should be ~0, got {}", white.a);
        assert!(white.b.abs() < 0.5, "white b* should be ~0, got {}", white.b);
    }

    /// Greys sit on the neutral axis: a* and b* stay near zero for the
    /// whole ramp, and L* is monotonic in the channel value.
    #[test]
    fn test_grey_ramp_neutral_and_monotonic() {
        let mut prev_l = -1.0;
        for v in (0..=255).step_by(15) {
            let grey = Lab::from(Rgb::new(v as u8, v as u8, v as u8));
            assert!(
                grey.a.abs() < 0.6 && grey.b.abs() < 0.6,
                "grey {} drifted off the neutral axis: a={}, b={}",
                v,
                grey.a,
                grey.b
            );
            assert!(grey.l > prev_l, "L* not monotonic at grey {}", v);
            prev_l = grey.l;
        }
    }

    /// Cross-check against the palette crate's independent CIELAB
    /// implementation. Our matrix uses the 4-decimal reference-table
    /// coefficients, theirs the 7-decimal ones, so agreement is to ~0.5
    /// per axis rather than machine epsilon.
    #[test]
    fn test_lab_matches_palette_crate() {
        use palette::white_point::D65;
        use palette::{IntoColor, Lab as RefLab, LinSrgb, Srgb as RefSrgb};

        let test_colors = [
            (255u8, 0u8, 0u8),
            (0, 255, 0),
            (0, 0, 255),
            (255, 255, 0),
            (128, 128, 128),
            (255, 153, 0),
            (200, 10, 10),
            (1, 2, 3),
        ];

        for (r, g, b) in test_colors {
            let ours = Lab::from(Rgb::new(r, g, b));

            let srgb: RefSrgb<f64> =
                RefSrgb::new(r as f64 / 255.0, g as f64 / 255.0, b as f64 / 255.0);
            let linear: LinSrgb<f64> = srgb.into_linear();
            let theirs: RefLab<D65, f64> = linear.into_color();

            assert!(
                (ours.l - theirs.l).abs() < 0.5,
                "L* mismatch for ({r},{g},{b}): ours={}, palette={}",
                ours.l,
                theirs.l
            );
            assert!(
                (ours.a - theirs.a).abs() < 0.5,
                "a* mismatch for ({r},{g},{b}): ours={}, palette={}",
                ours.a,
                theirs.a
            );
            assert!(
                (ours.b - theirs.b).abs() < 0.5,
                "b* mismatch for ({r},{g},{b}): ours={}, palette={}",
                ours.b,
                theirs.b
            );
        }
    }
}
