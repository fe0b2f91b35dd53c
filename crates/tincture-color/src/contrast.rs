// SPDX-License-Identifier: MIT
//
// WCAG relative luminance and contrast.
//
// WCAG 2.x defines contrast between two colors as
//
//   (L_lighter + 0.05) / (L_darker + 0.05)
//
// with L the relative luminance in [0, 1]. On the XYZ 0–100 scale the same
// ratio is (Y_lighter + 5) / (Y_darker + 5), so `ln(Y + 5)` is a scale on
// which equal steps are equal contrast ratios. The mixer interpolates
// lightness on that scale.

use crate::color::{Color, srgb_to_linear};

/// Rec. 709 luminance weights for linear R, G, B.
const LUMA: [f64; 3] = [0.2126, 0.7152, 0.0722];

/// WCAG relative luminance in [0, 1].
#[must_use]
pub fn relative_luminance(color: Color) -> f64 {
    color
        .channels()
        .iter()
        .zip(LUMA)
        .map(|(&ch, weight)| weight * srgb_to_linear(f64::from(ch) / 255.0))
        .sum()
}

/// WCAG contrast ratio, in [1, 21] whichever color comes first.
#[must_use]
pub fn contrast_ratio(a: Color, b: Color) -> f64 {
    let (la, lb) = (relative_luminance(a), relative_luminance(b));
    (la.max(lb) + 0.05) / (la.min(lb) + 0.05)
}

/// Map an XYZ luminance (0–100) onto the logarithmic contrast scale.
#[inline]
#[must_use]
pub fn contrast_scale(y: f64) -> f64 {
    (y + 5.0).ln()
}

/// Inverse of [`contrast_scale`]. Not clamped: extrapolated scale values can
/// land outside 0–100.
#[inline]
#[must_use]
pub fn luminance_from_scale(k: f64) -> f64 {
    k.exp() - 5.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
