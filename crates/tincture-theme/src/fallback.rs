//! The `todo` group: a large numbered palette of placeholder colors.
//!
//! Templates often need more named colors than a theme defines. The `todo`
//! group gives every such slot a loud, obviously-unthemed color so gaps
//! show up on screen instead of silently rendering empty.

use serde::{Deserialize, Serialize};
use tincture_color::Color;

use crate::error::{Result, ThemeError};
use crate::tree::ColorTree;

/// Tree key of the fallback group.
pub const FALLBACK_KEY: &str = "todo";

const DEFAULT_BASE: [Color; 10] = [
    Color::rgb(0xff, 0xff, 0xff),
    Color::rgb(0xff, 0x00, 0x00),
    Color::rgb(0xff, 0xff, 0x00),
    Color::rgb(0x00, 0xff, 0x00),
    Color::rgb(0x00, 0xff, 0xff),
    Color::rgb(0x00, 0x00, 0xff),
    Color::rgb(0xff, 0x00, 0xff),
    Color::rgb(0xff, 0x80, 0x00),
    Color::rgb(0x00, 0x00, 0x00),
    Color::rgb(0x80, 0x80, 0x80),
];

/// Base colors (`base0..`) and how many numbered entries (`c0..`) cycle
/// through them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FallbackConfig {
    pub base: Vec<Color>,
    pub count: usize,
}

impl Default for FallbackConfig {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE.to_vec(),
            count: 500,
        }
    }
}

/// Insert the fallback group under [`FALLBACK_KEY`].
///
/// Each `base{i}` is an owned color; each `c{i}` aliases `base{i % len}`.
pub(crate) fn insert_fallback(tree: &mut ColorTree, config: &FallbackConfig) -> Result<()> {
    if config.base.is_empty() && config.count > 0 {
        return Err(ThemeError::InvalidConfig(
            "fallback: `count` is non-zero but `base` has no colors".to_string(),
        ));
    }

    let group = tree.branch(ColorTree::ROOT, FALLBACK_KEY, FALLBACK_KEY)?;
    let mut bases = Vec::with_capacity(config.base.len());
    for (i, &color) in config.base.iter().enumerate() {
        let key = format!("base{i}");
        let path = format!("{FALLBACK_KEY}.{key}");
        bases.push((tree.insert_color(group, &key, color, &path)?, path));
    }
    for i in 0..config.count {
        let key = format!("c{i}");
        let path = format!("{FALLBACK_KEY}.{key}");
        let (target, reference) = &bases[i % bases.len()];
        tree.alias(group, &key, *target, &path, reference)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
