//! Shade sets: a color plus its blends toward the background.
//!
//! Every foreground/accent slot gets a small map of shade name → color.
//! `p10`..`p75` sit between the background and the color, `p125` overshoots
//! past it, and `p100` is always the untouched input.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tincture_color::{Color, mix};

/// Shade name under which the unmixed color is stored.
pub const ORIGINAL: &str = "p100";

/// Ordered shade name → blend ratio (0 = background, 1 = the color).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShadeRatios(IndexMap<String, f64>);

impl Default for ShadeRatios {
    fn default() -> Self {
        Self(
            [("p10", 0.1), ("p25", 0.25), ("p50", 0.5), ("p75", 0.75), ("p125", 1.25)]
                .into_iter()
                .map(|(name, ratio)| (name.to_string(), ratio))
                .collect(),
        )
    }
}

impl ShadeRatios {
    #[must_use]
    pub fn new(ratios: IndexMap<String, f64>) -> Self {
        Self(ratios)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, &ratio)| (name.as_str(), ratio))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Shade name → color for one slot, in configuration order with
/// [`ORIGINAL`] last.
pub type ShadeSet = IndexMap<String, Color>;

/// Mix `color` against `background` at every configured ratio.
///
/// The unmixed color is written under [`ORIGINAL`] after the mixed shades,
/// so it stays exact even if the ratios also name `p100`.
#[must_use]
pub fn build_shades(background: Color, color: Color, ratios: &ShadeRatios) -> ShadeSet {
    let mut shades: ShadeSet = ratios
        .iter()
        .map(|(name, ratio)| (name.to_string(), mix(background, color, ratio)))
        .collect();
    shades.insert(ORIGINAL.to_string(), color);
    shades
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
