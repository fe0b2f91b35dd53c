//! Tree assembly: palette + configuration → [`ColorTree`].

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::fallback::insert_fallback;
use crate::palette::Palette;
use crate::role::{assign_roles, slot_name};
use crate::semantic::resolve;
use crate::shade::{ShadeSet, build_shades};
use crate::tree::{ColorTree, NodeId};

/// Build the full color tree for one palette.
///
/// Insertion order is fixed and later steps can only see earlier ones:
///
/// 1. `background`, a single color;
/// 2. `foreground` and `c1`..`c7`, each a shade set over the background;
/// 3. `red`..`magenta`, aliases of the accent groups picked by role search;
/// 4. `todo`, the fallback group (unless disabled);
/// 5. the semantic document.
pub fn build(palette: &Palette, config: &ThemeConfig) -> Result<ColorTree> {
    let mut tree = ColorTree::new();
    let background = palette.background;

    tree.insert_color(ColorTree::ROOT, "background", background, "background")?;
    insert_shade_set(
        &mut tree,
        "foreground",
        &build_shades(background, palette.foreground, &config.shades),
    )?;
    for (slot, &accent) in palette.accents.iter().enumerate() {
        insert_shade_set(
            &mut tree,
            &slot_name(slot),
            &build_shades(background, accent, &config.shades),
        )?;
    }

    let roles = assign_roles(&palette.accents, &config.roles);
    for (role, slot) in roles.iter() {
        let name = role.name();
        let reference = slot_name(slot);
        let target = tree.resolve(name, &reference)?;
        tree.alias(ColorTree::ROOT, name, target, name, &reference)?;
    }

    if let Some(fallback) = &config.fallback {
        insert_fallback(&mut tree, fallback)?;
    }

    resolve(&config.semantic, &mut tree)?;

    tracing::debug!(
        nodes = tree.node_count(),
        top_level = tree.root().len(),
        "built color tree"
    );
    Ok(tree)
}

fn insert_shade_set(tree: &mut ColorTree, key: &str, shades: &ShadeSet) -> Result<NodeId> {
    let group = tree.branch(ColorTree::ROOT, key, key)?;
    for (shade, &color) in shades {
        tree.insert_color(group, shade, color, &format!("{key}.{shade}"))?;
    }
    Ok(group)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
