//! Minimal `{{ dotted.path }}` substitution over a [`FormattedNode`].
//!
//! Logic-less: no sections, no escaping, no partials. A token naming a path
//! that does not end in a formatted string renders as nothing.

use std::sync::LazyLock;

use regex::{Captures, Regex};

use crate::config::ThemeConfig;
use crate::error::Result;
use crate::format::{FormattedNode, format};
use crate::palette::Palette;
use crate::theme::build;

static TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{\s*([\w.]+)\s*\}\}").expect("token pattern is a valid regex"));

/// Replace every `{{ path }}` token in `template` with the string at that
/// path in `view`.
#[must_use]
pub fn render(template: &str, view: &FormattedNode) -> String {
    TOKEN
        .replace_all(template, |caps: &Captures<'_>| {
            let path = &caps[1];
            view.text(path).map_or_else(
                || {
                    tracing::debug!(path, "template token has no value");
                    String::new()
                },
                str::to_string,
            )
        })
        .into_owned()
}

/// Build, format and render in one step.
pub fn render_palette(template: &str, palette: &Palette, config: &ThemeConfig) -> Result<String> {
    let tree = build(palette, config)?;
    Ok(render(template, &format(&tree)))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
