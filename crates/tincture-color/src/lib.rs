// SPDX-License-Identifier: MIT
//
// tincture-color: color values for the tincture palette engine.
//
// Palette colors are exact 8-bit sRGB triples; perceptual work happens on
// derived CIE-XYZ / CIE-LAB / LCH views and comes back through rounding.
// The mixer interpolates lightness on the WCAG contrast scale so shade
// ramps step evenly in apparent brightness.

pub mod color;
pub mod contrast;
pub mod mix;

pub use color::{Color, Lab, Lch, ParseColorError, Xyz, hue_diff};
pub use contrast::{contrast_ratio, relative_luminance};
pub use mix::mix;
