//! CIEDE2000 color difference
//!
//! Implements the CIE ΔE00 formula (CIE Technical Report 142-2001) with
//! the parametric factors kL = kC = kH = 1. CIEDE2000 refines the earlier
//! ΔE formulas with chroma, hue and lightness weighting plus a rotation
//! term that corrects the blue region.
//!
//! The formula is sensitive to exact boundary handling at the 180°/360°
//! hue wraparounds, so the case analyses below keep the branch order of
//! the published formulation.

use crate::color::Lab;

// 25^7, the constant in the G and RC chroma compensation terms.
const POW25_7: f64 = 6103515625.0;

/// CIEDE2000 perceptual distance between two L*a*b* colors.
///
/// Returns ΔE00 ≥ 0. The metric is symmetric under argument swap for
/// finite inputs and zero for identical inputs. Rough perceptual scale:
/// below 1.0 the difference is imperceptible, above 10.0 the colors are
/// clearly different.
///
/// # Example
///
/// ```
/// use lab_match::{ciede2000, Lab, Rgb};
///
/// let red = Lab::from(Rgb::new(255, 0, 0));
/// let dark_red = Lab::from(Rgb::new(200, 10, 10));
/// assert!(ciede2000(red, red) < 1e-9);
/// assert!(ciede2000(red, dark_red) > 0.0);
/// ```
pub fn ciede2000(color1: Lab, color2: Lab) -> f64 {
    let (l1, a1, b1) = (color1.l, color1.a, color1.b);
    let (l2, a2, b2) = (color2.l, color2.a, color2.b);

    const KL: f64 = 1.0;
    const KC: f64 = 1.0;
    const KH: f64 = 1.0;

    // Step 1: raw chromas and the G compensation factor. G shrinks a*
    // near the neutral axis to counter chromatic non-uniformity there.
    let c1 = a1.hypot(b1);
    let c2 = a2.hypot(b2);

    let c_mean = (c1 + c2) / 2.0;
    let c_mean_pow7 = c_mean.powi(7);
    let g = 0.5 * (1.0 - (c_mean_pow7 / (c_mean_pow7 + POW25_7)).sqrt());

    let a1p = (1.0 + g) * a1;
    let a2p = (1.0 + g) * a2;

    let c1p = a1p.hypot(b1);
    let c2p = a2p.hypot(b2);

    let h1p = hue_angle(a1p, b1);
    let h2p = hue_angle(a2p, b2);

    // Step 2: pairwise differences ΔL', ΔC', ΔH'.
    let dl = l2 - l1;
    let dc = c2p - c1p;

    let dh = hue_diff(c1p, c2p, h1p, h2p);
    let dh_big = 2.0 * (c1p * c2p).sqrt() * (dh.to_radians() / 2.0).sin();

    // Step 3: means, weighting functions and the rotation term.
    let l_mean = (l1 + l2) / 2.0;
    let cp_mean = (c1p + c2p) / 2.0;
    let h_mean = hue_mean(c1p, c2p, h1p, h2p);

    let t = 1.0 - 0.17 * (h_mean - 30.0).to_radians().cos()
        + 0.24 * (2.0 * h_mean).to_radians().cos()
        + 0.32 * (3.0 * h_mean + 6.0).to_radians().cos()
        - 0.20 * (4.0 * h_mean - 63.0).to_radians().cos();

    let delta_theta = 30.0 * (-((h_mean - 275.0) / 25.0).powi(2)).exp();

    let cp_mean_pow7 = cp_mean.powi(7);
    let rc = (cp_mean_pow7 / (cp_mean_pow7 + POW25_7)).sqrt();
    let rt = -2.0 * rc * (2.0 * delta_theta).to_radians().sin();

    let l_mean_minus_50_sq = (l_mean - 50.0) * (l_mean - 50.0);
    let sl = 1.0 + 0.015 * l_mean_minus_50_sq / (20.0 + l_mean_minus_50_sq).sqrt();
    let sc = 1.0 + 0.045 * cp_mean;
    let sh = 1.0 + 0.015 * cp_mean * t;

    let term_l = dl / (sl * KL);
    let term_c = dc / (sc * KC);
    let term_h = dh_big / (sh * KH);

    // The radicand is non-negative on paper; floating-point cancellation
    // can push it a hair below zero, so floor it before the root.
    let radicand = term_l * term_l + term_c * term_c + term_h * term_h + rt * term_c * term_h;
    radicand.max(0.0).sqrt()
}

/// Hue angle h' in degrees, in [0, 360).
///
/// Takes b* as the sine-proportional argument and the adjusted a' as the
/// cosine-proportional one. A fully neutral sample (a' = b = 0) has no
/// defined hue; the formula fixes it at 0.
#[inline]
fn hue_angle(ap: f64, b: f64) -> f64 {
    if ap == 0.0 && b == 0.0 {
        return 0.0;
    }
    let h = b.atan2(ap).to_degrees();
    if h < 0.0 {
        h + 360.0
    } else {
        h
    }
}

/// Hue difference Δh' in degrees, wrapped into [-180, 180].
///
/// The three guarded branches are exhaustive for finite angles in
/// [0, 360); only non-finite input can fall through, and that is an
/// internal fault rather than a representable color.
fn hue_diff(c1p: f64, c2p: f64, h1p: f64, h2p: f64) -> f64 {
    if c1p * c2p == 0.0 {
        return 0.0;
    }
    let d = h2p - h1p;
    if d.abs() <= 180.0 {
        d
    } else if d > 180.0 {
        d - 360.0
    } else if d < -180.0 {
        d + 360.0
    } else {
        unreachable!("hue difference {d} outside (-360, 360)");
    }
}

/// Mean hue h̄' in degrees.
///
/// When either sample is neutral the plain sum is used (the published
/// formulation's convention); otherwise the mean is taken on the short
/// arc between the two hues. Same exhaustiveness contract as
/// [`hue_diff`].
fn hue_mean(c1p: f64, c2p: f64, h1p: f64, h2p: f64) -> f64 {
    if c1p * c2p == 0.0 {
        return h1p + h2p;
    }
    let sum = h1p + h2p;
    if (h1p - h2p).abs() <= 180.0 {
        sum / 2.0
    } else if sum < 360.0 {
        (sum + 360.0) / 2.0
    } else if sum >= 360.0 {
        (sum - 360.0) / 2.0
    } else {
        unreachable!("hue sum {sum} escaped the mean-hue case analysis");
    }
}
