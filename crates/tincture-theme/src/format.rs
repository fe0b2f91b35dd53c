//! Formatter: every color in a tree, spelled every way a template may want.
//!
//! Each leaf color becomes a map of format name → string, so a template
//! reads `{{ ui.error.hex }}` or `{{ ui.error.frac_r }}` without any logic
//! of its own.

use indexmap::IndexMap;
use serde::Serialize;
use tincture_color::Color;

use crate::tree::{Branch, ColorNode, ColorTree};

/// A named color → string conversion.
pub type FormatFn = fn(Color) -> String;

/// Every format applied to each leaf, in output order.
pub const FORMATS: [(&str, FormatFn); 11] = [
    ("hex", hex),
    ("hex_bgr", hex_bgr),
    ("hex_r", hex_r),
    ("hex_g", hex_g),
    ("hex_b", hex_b),
    ("dec_r", dec_r),
    ("dec_g", dec_g),
    ("dec_b", dec_b),
    ("frac_r", frac_r),
    ("frac_g", frac_g),
    ("frac_b", frac_b),
];

fn hex(c: Color) -> String {
    format!("{:02x}{:02x}{:02x}", c.red(), c.green(), c.blue())
}

fn hex_bgr(c: Color) -> String {
    format!("{:02x}{:02x}{:02x}", c.blue(), c.green(), c.red())
}

fn hex_r(c: Color) -> String {
    format!("{:02x}", c.red())
}

fn hex_g(c: Color) -> String {
    format!("{:02x}", c.green())
}

fn hex_b(c: Color) -> String {
    format!("{:02x}", c.blue())
}

fn dec_r(c: Color) -> String {
    c.red().to_string()
}

fn dec_g(c: Color) -> String {
    c.green().to_string()
}

fn dec_b(c: Color) -> String {
    c.blue().to_string()
}

fn frac_r(c: Color) -> String {
    frac(c.red())
}

fn frac_g(c: Color) -> String {
    frac(c.green())
}

fn frac_b(c: Color) -> String {
    frac(c.blue())
}

/// Channel as a fraction of 255, printed the shortest way that round-trips.
fn frac(channel: u8) -> String {
    (f64::from(channel) / 255.0).to_string()
}

// ---------------------------------------------------------------------------
// FormattedNode
// ---------------------------------------------------------------------------

/// A [`ColorTree`] with every color replaced by its formatted strings.
///
/// Serializes as plain nested JSON objects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FormattedNode {
    Leaf(IndexMap<&'static str, String>),
    Inner(IndexMap<String, FormattedNode>),
}

impl FormattedNode {
    /// The string at a dotted path ending in a format name, such as
    /// `"ui.error.hex"`. Paths that stop at a color or a group, or run past
    /// a format name, give `None`.
    #[must_use]
    pub fn text(&self, path: &str) -> Option<&str> {
        let mut node = self;
        let mut segments = path.split('.');
        while let Some(segment) = segments.next() {
            match node {
                Self::Inner(children) => node = children.get(segment)?,
                Self::Leaf(formats) => {
                    let value = formats.get(segment)?;
                    return segments.next().is_none().then_some(value.as_str());
                }
            }
        }
        None
    }
}

/// Format every color of one value.
#[must_use]
pub fn format_color(color: Color) -> IndexMap<&'static str, String> {
    FORMATS
        .iter()
        .map(|&(name, format)| (name, format(color)))
        .collect()
}

/// Format a whole tree. Aliased nodes are expanded at every path that
/// names them.
#[must_use]
pub fn format(tree: &ColorTree) -> FormattedNode {
    format_branch(tree.root())
}

fn format_branch(branch: Branch<'_>) -> FormattedNode {
    FormattedNode::Inner(
        branch
            .iter()
            .map(|(key, node)| (key.to_string(), format_node(node)))
            .collect(),
    )
}

fn format_node(node: ColorNode<'_>) -> FormattedNode {
    match node {
        ColorNode::Leaf(color) => FormattedNode::Leaf(format_color(color)),
        ColorNode::Inner(branch) => format_branch(branch),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
