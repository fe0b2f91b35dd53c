//! The nine-color input palette and its textual encoding.
//!
//! A palette is always exactly nine colors in a fixed order:
//!
//! ```text
//! background - foreground - c1 - c2 - c3 - c4 - c5 - c6 - c7
//! ```
//!
//! The text form is nine groups of six hex digits joined by `-`, e.g.
//! `282936-e9e9f4-ff5555-ffb86c-f1fa8c-50fa7b-8be9fd-bd93f9-ff79c6`.
//! Decoding never fails loudly: anything that does not match the pattern
//! decodes to `None`.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use tincture_color::Color;

/// Number of accent slots (`c1..c7`).
pub const ACCENT_COUNT: usize = 7;

static PALETTE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9a-fA-F]{6}-){8}[0-9a-fA-F]{6}$").expect("palette pattern is a valid regex")
});

/// Background, foreground and seven accent colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Palette {
    pub background: Color,
    pub foreground: Color,
    pub accents: [Color; ACCENT_COUNT],
}

impl Palette {
    #[must_use]
    pub const fn new(background: Color, foreground: Color, accents: [Color; ACCENT_COUNT]) -> Self {
        Self {
            background,
            foreground,
            accents,
        }
    }

    /// Build from the nine colors in encoding order.
    #[must_use]
    pub const fn from_colors(colors: [Color; 9]) -> Self {
        let [background, foreground, c1, c2, c3, c4, c5, c6, c7] = colors;
        Self::new(background, foreground, [c1, c2, c3, c4, c5, c6, c7])
    }

    /// The nine colors in encoding order.
    #[must_use]
    pub const fn colors(&self) -> [Color; 9] {
        let [c1, c2, c3, c4, c5, c6, c7] = self.accents;
        [self.background, self.foreground, c1, c2, c3, c4, c5, c6, c7]
    }

    /// Accent by slot name (`"c1"` .. `"c7"`).
    #[must_use]
    pub fn accent(&self, slot: &str) -> Option<Color> {
        let index: usize = slot.strip_prefix('c')?.parse().ok()?;
        index
            .checked_sub(1)
            .and_then(|i| self.accents.get(i))
            .copied()
    }

    /// Decode the dash-joined hex form. Case-insensitive; `None` on any
    /// structural mismatch.
    #[must_use]
    pub fn decode(s: &str) -> Option<Self> {
        if !PALETTE_PATTERN.is_match(s) {
            return None;
        }
        let mut colors = [Color::BLACK; 9];
        for (slot, group) in colors.iter_mut().zip(s.split('-')) {
            *slot = Color::hex(group)?;
        }
        Some(Self::from_colors(colors))
    }

    /// Encode as nine lowercase hex groups joined by `-`.
    #[must_use]
    pub fn encode(&self) -> String {
        self.colors()
            .iter()
            .map(|c| c.to_hex()[1..].to_string())
            .collect::<Vec<_>>()
            .join("-")
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

/// Error for the `FromStr` impl; carries the rejected input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MalformedPalette(pub String);

impl fmt::Display for MalformedPalette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "malformed palette {:?}: expected nine 6-digit hex groups joined by '-'",
            self.0
        )
    }
}

impl std::error::Error for MalformedPalette {}

impl FromStr for Palette {
    type Err = MalformedPalette;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s).ok_or_else(|| MalformedPalette(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
