// SPDX-License-Identifier: MIT
//
// Contrast-aware color mixing.
//
// Both inputs go to CIE-LAB. The chromatic axes a*/b* are interpolated
// linearly. Lightness is NOT interpolated linearly: the luminance Y of each
// input is mapped onto the WCAG contrast scale ln(Y + 5), interpolated
// there, mapped back and clamped to [0, 100], and only then converted to
// LAB lightness. Equal ratio steps therefore give equal contrast-ratio
// steps, which is what makes a p10/p25/p50/p75 shade ramp look evenly
// spaced against its background.
//
// Ratios outside [0, 1] extrapolate. The luminance clamp keeps lightness in
// range; a*/b* may overshoot and are clamped per channel on the way back to
// sRGB.
#![allow(clippy::suboptimal_flops)]

use crate::color::{Color, Lab, Xyz};
use crate::contrast::{contrast_scale, luminance_from_scale};

/// Mix `c1` toward `c2`.
///
/// `ratio` = 0.0 returns `c1`, `ratio` = 1.0 returns `c2` (exactly, after
/// rounding). Any finite ratio is accepted.
#[must_use]
pub fn mix(c1: Color, c2: Color, ratio: f64) -> Color {
    let xyz1 = c1.to_xyz();
    let xyz2 = c2.to_xyz();
    let lab1 = xyz1.to_lab();
    let lab2 = xyz2.to_lab();

    let k = lerp(contrast_scale(xyz1.y), contrast_scale(xyz2.y), ratio);
    let y = luminance_from_scale(k).clamp(0.0, 100.0);
    let l = Xyz::new(0.0, y, 0.0).to_lab().l;

    let a = lerp(lab1.a, lab2.a, ratio);
    let b = lerp(lab1.b, lab2.b, ratio);

    Lab::new(l, a, b).to_color()
}

#[inline]
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
