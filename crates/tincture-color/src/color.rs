// SPDX-License-Identifier: MIT
//
// tincture color system: exact 8-bit sRGB values with CIE views.
//
// Single-character variable names (r, g, b, x, y, z, l, a, c, h) are the
// standard mathematical convention in color science. Renaming them would
// make the code harder to compare against published conversion formulas.
#![allow(clippy::many_single_char_names)]
//
// A palette color is stored exactly as it was written: three 8-bit sRGB
// channels. Everything perceptual (lightness, chroma, mixing) happens on
// derived XYZ/LAB values, and results come back to integers by rounding.
//
// Conversion pipeline:
//
//   sRGB (u8) ↔ linear sRGB ↔ CIE-XYZ (D65, 0–100) ↔ CIE-LAB → LCH
//
// XYZ stays on the 0–100 scale so that Y is directly the luminance used by
// the WCAG contrast formula (see `contrast.rs`).
//
// The arithmetic below is written as plain multiply/add chains rather than
// fused `mul_add`: shade outputs are compared channel-for-channel against
// published palettes, and fused rounding can flip a channel by one.
#![allow(clippy::suboptimal_flops)]

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An opaque sRGB color with 8 bits per channel.
///
/// `Color` is the unit every palette slot, shade and alias resolves to. It is
/// immutable: all operations return new values. Perceptual views are derived
/// on demand with [`to_xyz`](Self::to_xyz) and [`to_lab`](Self::to_lab).
///
/// # Examples
///
/// ```
/// use tincture_color::Color;
///
/// let red = Color::hex("#ff5555").unwrap();
/// assert_eq!(red.channels(), [0xff, 0x55, 0x55]);
/// assert_eq!(red.to_hex(), "#ff5555");
///
/// let lab = red.to_lab();
/// assert!(lab.l > 50.0 && lab.a > 0.0);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    r: u8,
    g: u8,
    b: u8,
}

impl Color {
    /// Pure black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Pure white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);

    // ─── Constructors ────────────────────────────────────────────────────

    /// Create a color from 8-bit sRGB channels.
    #[inline]
    #[must_use]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a hex string.
    ///
    /// Supports `#RGB` and `#RRGGBB`, with or without the `#`, in any case.
    /// Returns `None` if the string is not a valid hex color.
    #[must_use]
    pub fn hex(s: &str) -> Option<Self> {
        parse_hex(s)
    }

    // ─── Channels ────────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn red(self) -> u8 {
        self.r
    }

    #[inline]
    #[must_use]
    pub const fn green(self) -> u8 {
        self.g
    }

    #[inline]
    #[must_use]
    pub const fn blue(self) -> u8 {
        self.b
    }

    /// All three channels as `[r, g, b]`.
    #[inline]
    #[must_use]
    pub const fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb`.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    // ─── Perceptual views ────────────────────────────────────────────────

    /// Convert to CIE-XYZ (D65 white, 0–100 scale).
    #[must_use]
    pub fn to_xyz(self) -> Xyz {
        let r = srgb_to_linear(f64::from(self.r) / 255.0);
        let g = srgb_to_linear(f64::from(self.g) / 255.0);
        let b = srgb_to_linear(f64::from(self.b) / 255.0);

        Xyz {
            x: (r * 0.412_456_4 + g * 0.357_576_1 + b * 0.180_437_5) * 100.0,
            y: (r * 0.212_672_9 + g * 0.715_152_2 + b * 0.072_175) * 100.0,
            z: (r * 0.019_333_9 + g * 0.119_192 + b * 0.950_304_1) * 100.0,
        }
    }

    /// Convert to CIE-LAB (through XYZ).
    #[must_use]
    pub fn to_lab(self) -> Lab {
        self.to_xyz().to_lab()
    }

    /// Mix toward `other` with the contrast-aware mixer.
    ///
    /// Shorthand for [`crate::mix::mix`]`(self, other, ratio)`.
    #[must_use]
    pub fn mix(self, other: Self, ratio: f64) -> Self {
        crate::mix::mix(self, other, ratio)
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_hex(s).ok_or_else(|| ParseColorError(s.to_string()))
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// A string that is not a `#RGB` / `#RRGGBB` hex color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(pub String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid hex color: {:?}", self.0)
    }
}

impl std::error::Error for ParseColorError {}

// ─── CIE-XYZ ─────────────────────────────────────────────────────────────────

/// Reference white (D65, 2° observer) on the 0–100 scale.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// CIE-XYZ tristimulus values, D65, 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    /// Luminance. 0 for black, 100 for the reference white.
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    #[inline]
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Convert to CIE-LAB.
    #[must_use]
    pub fn to_lab(self) -> Lab {
        let fx = lab_f(self.x / WHITE_X);
        let fy = lab_f(self.y / WHITE_Y);
        let fz = lab_f(self.z / WHITE_Z);

        Lab {
            l: 116.0 * fy - 16.0,
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
        }
    }

    /// Convert back to 8-bit sRGB.
    ///
    /// Out-of-gamut channels are clamped to [0, 1] before scaling, then each
    /// channel is rounded to the nearest integer.
    #[must_use]
    pub fn to_color(self) -> Color {
        let x = self.x / 100.0;
        let y = self.y / 100.0;
        let z = self.z / 100.0;

        let r = x * 3.240_454_2 + y * -1.537_138_5 + z * -0.498_531_4;
        let g = x * -0.969_266 + y * 1.876_010_8 + z * 0.041_556;
        let b = x * 0.055_643_4 + y * -0.204_025_9 + z * 1.057_225_2;

        Color::rgb(
            to_u8(linear_to_srgb(r)),
            to_u8(linear_to_srgb(g)),
            to_u8(linear_to_srgb(b)),
        )
    }
}

// ─── CIE-LAB / LCH ───────────────────────────────────────────────────────────

/// CIE-LAB (D65). `l` is 0–100; `a`/`b` are unbounded but roughly ±128 for
/// sRGB colors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl Lab {
    #[inline]
    #[must_use]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }

    /// Convert to CIE-XYZ.
    #[must_use]
    pub fn to_xyz(self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz {
            x: lab_f_inv(fx) * WHITE_X,
            y: lab_f_inv(fy) * WHITE_Y,
            z: lab_f_inv(fz) * WHITE_Z,
        }
    }

    /// Convert to 8-bit sRGB (through XYZ, clamped and rounded).
    #[must_use]
    pub fn to_color(self) -> Color {
        self.to_xyz().to_color()
    }

    /// Cylindrical view: lightness, chroma, hue in degrees.
    #[must_use]
    pub fn to_lch(self) -> Lch {
        let c = self.a.hypot(self.b);
        let h = if c < 1e-8 {
            0.0 // Achromatic, hue is undefined, default to 0
        } else {
            normalize_hue(self.b.atan2(self.a).to_degrees())
        };
        Lch { l: self.l, c, h }
    }
}

/// CIE-LCH(ab): the polar form of [`Lab`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lch {
    pub l: f64,
    pub c: f64,
    /// Hue angle in degrees, [0, 360).
    pub h: f64,
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
fn normalize_hue(h: f64) -> f64 {
    let h = h % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

/// Absolute hue difference (shortest arc on the color wheel), in degrees.
#[inline]
#[must_use]
pub fn hue_diff(a: f64, b: f64) -> f64 {
    let d = (a - b).abs() % 360.0;
    if d > 180.0 { 360.0 - d } else { d }
}

// ─── Transfer functions ──────────────────────────────────────────────────────

const LAB_EPSILON: f64 = 0.008_856;
const LAB_KAPPA: f64 = 7.787;

#[inline]
fn lab_f(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.powf(1.0 / 3.0)
    } else {
        LAB_KAPPA * t + 16.0 / 116.0
    }
}

#[inline]
fn lab_f_inv(t: f64) -> f64 {
    let t3 = t * t * t;
    if t3 > LAB_EPSILON {
        t3
    } else {
        (t - 16.0 / 116.0) / LAB_KAPPA
    }
}

/// Convert a single sRGB component (0.0–1.0) to linear light.
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c > 0.040_45 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Convert a single linear component to sRGB, clamped to 0.0–1.0.
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    let c = if c > 0.003_130_8 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        c * 12.92
    };
    c.clamp(0.0, 1.0)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding to nearest.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Hex Parsing ─────────────────────────────────────────────────────────────

fn parse_hex(s: &str) -> Option<Color> {
    let s = s.strip_prefix('#').unwrap_or(s);
    let bytes = s.as_bytes();

    match bytes.len() {
        // #RGB
        3 => {
            let r = parse_hex_digit(bytes[0])?;
            let g = parse_hex_digit(bytes[1])?;
            let b = parse_hex_digit(bytes[2])?;
            Some(Color::rgb(r << 4 | r, g << 4 | g, b << 4 | b))
        }
        // #RRGGBB
        6 => {
            let r = parse_hex_byte(&bytes[0..2])?;
            let g = parse_hex_byte(&bytes[2..4])?;
            let b = parse_hex_byte(&bytes[4..6])?;
            Some(Color::rgb(r, g, b))
        }
        _ => None,
    }
}

#[inline]
const fn parse_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

#[inline]
fn parse_hex_byte(bytes: &[u8]) -> Option<u8> {
    let hi = parse_hex_digit(bytes[0])?;
    let lo = parse_hex_digit(bytes[1])?;
    Some(hi << 4 | lo)
}

// ─── Tests ───────────────────────────────────────────────────────────────────
