//! Errors raised while building a color tree.
//!
//! Every failure is fatal for the whole build: there is no partial tree.
//! Malformed palette strings are not errors here; [`Palette::decode`]
//! returns `None` for those.
//!
//! [`Palette::decode`]: crate::palette::Palette::decode

use std::fmt;

use thiserror::Error;

/// What already occupies a path that a semantic entry tried to write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Occupant {
    /// A color owned by that path (a shade, the background, a fallback entry).
    OwnedLeaf,
    /// A subtree owned by that path (a shade set, a semantic group).
    OwnedSubtree,
    /// An alias to a color.
    AliasedLeaf,
    /// An alias to a subtree (e.g. a hue role pointing at `c3`).
    AliasedSubtree,
}

impl fmt::Display for Occupant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::OwnedLeaf => "owned color",
            Self::OwnedSubtree => "owned subtree",
            Self::AliasedLeaf => "color alias",
            Self::AliasedSubtree => "subtree alias",
        })
    }
}

#[derive(Debug, Error)]
pub enum ThemeError {
    /// A reference path did not resolve against the tree built so far.
    #[error(
        "unresolved reference {reference:?} at {key:?}: no {segment:?} (segment {position})"
    )]
    UnresolvedReference {
        /// Dotted output path of the entry holding the reference.
        key: String,
        /// The full reference as written.
        reference: String,
        /// 0-based index of the segment that failed.
        position: usize,
        /// The segment text that failed.
        segment: String,
    },

    /// A path already holds something the entry may not replace.
    #[error(
        "cannot write {reference:?} to {path:?}: path already holds {existing} {existing_path:?}"
    )]
    AliasConflict {
        /// Dotted output path being written.
        path: String,
        /// The reference being aliased, or `{…}` for a nested group.
        reference: String,
        existing: Occupant,
        /// Path of the occupant: its own path when owned, its target when
        /// an alias.
        existing_path: String,
    },

    /// The reference resolves to a subtree that contains the entry itself.
    #[error("alias {reference:?} at {path:?} would make the tree cyclic")]
    CyclicAlias { path: String, reference: String },

    #[error("failed to parse configuration JSON: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
