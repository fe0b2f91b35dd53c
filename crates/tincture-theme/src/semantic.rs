//! Semantic configuration: named aliases layered over the built colors.
//!
//! A semantic document is a JSON object. Each value is one of:
//!
//! - a dotted reference such as `"red.p100"` or `"ui.muted"`, aliased under
//!   the key;
//! - a nested object, which becomes a group of its own;
//! - the literal `"BUILT_IN"`, meaning the key is populated by the builder
//!   itself (the `todo` fallback group) and must be left alone.
//!
//! Entries are resolved strictly in document order. A reference can only
//! see what the builder or earlier entries already inserted; there is no
//! second pass.
//!
//! A key repeated within one object is kept twice, in order, so the tree
//! decides: a group and an alias at the same path is an alias conflict,
//! two groups merge, and a later alias of the same kind redirects an
//! earlier one.

use std::fmt;

use serde::Deserialize;
use serde::de::{self, DeserializeSeed, Deserializer, MapAccess, Visitor};
use serde_json::Value;

use crate::error::Result;
use crate::tree::{ColorTree, NodeId};

/// Value marking a key as populated by the builder.
pub const BUILT_IN: &str = "BUILT_IN";

const BUILTIN_DOCUMENT: &str = include_str!("../semantic.json");

/// One entry of a semantic document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SemanticValue {
    /// Leave the key alone.
    BuiltIn,
    /// Alias the node at this dotted path.
    Reference(String),
    /// A nested group.
    Group(SemanticConfig),
}

/// An ordered semantic document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticConfig {
    entries: Vec<(String, SemanticValue)>,
}

impl SemanticConfig {
    /// The document shipped with the library.
    ///
    /// # Panics
    ///
    /// Never in practice: the embedded document is checked by the tests.
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_DOCUMENT).expect("built-in semantic document is valid")
    }

    /// Parse a semantic document from JSON text.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Convert an already-parsed JSON value.
    ///
    /// A [`Value`] has already collapsed repeated keys; use [`from_json`]
    /// to see every entry.
    ///
    /// [`from_json`]: Self::from_json
    pub fn from_value(value: &Value) -> Result<Self> {
        Ok(Self::deserialize(value)?)
    }

    /// Append an entry after the existing ones.
    pub fn insert(&mut self, key: impl Into<String>, value: SemanticValue) {
        self.entries.push((key.into(), value));
    }

    /// The first entry under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&SemanticValue> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, value)| value)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SemanticValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Parsing
// ---------------------------------------------------------------------------

impl<'de> Deserialize<'de> for SemanticConfig {
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        GroupSeed { path: "" }.deserialize(deserializer)
    }
}

/// An object at `path`; the root document when `path` is empty.
struct GroupSeed<'p> {
    path: &'p str,
}

impl<'de> DeserializeSeed<'de> for GroupSeed<'_> {
    type Value = SemanticConfig;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<SemanticConfig, D::Error> {
        deserializer.deserialize_map(self)
    }
}

impl<'de> Visitor<'de> for GroupSeed<'_> {
    type Value = SemanticConfig;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_empty() {
            f.write_str("a semantic document object")
        } else {
            write!(f, "an object for semantic group {}", self.path)
        }
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        mut map: A,
    ) -> std::result::Result<SemanticConfig, A::Error> {
        let mut config = SemanticConfig::default();
        while let Some(key) = map.next_key::<String>()? {
            let path = join(self.path, &key);
            let value = map.next_value_seed(EntrySeed { path: &path })?;
            config.entries.push((key, value));
        }
        Ok(config)
    }
}

/// The value of one entry at `path`.
struct EntrySeed<'p> {
    path: &'p str,
}

impl<'de> DeserializeSeed<'de> for EntrySeed<'_> {
    type Value = SemanticValue;

    fn deserialize<D: Deserializer<'de>>(
        self,
        deserializer: D,
    ) -> std::result::Result<SemanticValue, D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de> Visitor<'de> for EntrySeed<'_> {
    type Value = SemanticValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a reference string or an object for semantic {}", self.path)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> std::result::Result<SemanticValue, E> {
        Ok(if value == BUILT_IN {
            SemanticValue::BuiltIn
        } else {
            SemanticValue::Reference(value.to_string())
        })
    }

    fn visit_map<A: MapAccess<'de>>(
        self,
        map: A,
    ) -> std::result::Result<SemanticValue, A::Error> {
        GroupSeed { path: self.path }
            .visit_map(map)
            .map(SemanticValue::Group)
    }
}

fn join(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

// ---------------------------------------------------------------------------
// Resolution
// ---------------------------------------------------------------------------

/// Apply a semantic document to `tree`, in document order.
///
/// Fails on the first reference that does not resolve, on any write the
/// tree refuses (see [`crate::tree`]), and on any alias that would make a
/// group contain itself. On failure the tree is left partially updated and
/// should be discarded.
pub fn resolve(config: &SemanticConfig, tree: &mut ColorTree) -> Result<()> {
    resolve_group(config, tree, ColorTree::ROOT, "")
}

fn resolve_group(
    config: &SemanticConfig,
    tree: &mut ColorTree,
    parent: NodeId,
    prefix: &str,
) -> Result<()> {
    for (key, value) in config.iter() {
        let path = join(prefix, key);
        match value {
            SemanticValue::BuiltIn => {
                tracing::trace!(path = %path, "left for the builder");
            }
            SemanticValue::Reference(reference) => {
                let target = tree.resolve(&path, reference)?;
                tree.alias(parent, key, target, &path, reference)?;
                tracing::trace!(path = %path, reference = %reference, "aliased");
            }
            SemanticValue::Group(group) => {
                let id = tree.branch(parent, key, &path)?;
                resolve_group(group, tree, id, &path)?;
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
