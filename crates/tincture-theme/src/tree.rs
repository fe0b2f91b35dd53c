//! The color tree: named colors and named groups of colors.
//!
//! Nodes live in an arena owned by [`ColorTree`] and are addressed by
//! [`NodeId`]. Every node has exactly one *owning* entry (the path that
//! created it) and any number of *alias* entries elsewhere in the tree.
//! Aliasing a node stores its id again under a new key, so `red.p50` and
//! `c1.p50` are literally the same node, not two copies of one color.
//!
//! Writes follow a small set of rules:
//!
//! - owned entries are never replaced;
//! - an alias may replace an earlier alias of the same kind (color over
//!   color, group over group);
//! - anything else at an occupied key is an [`AliasConflict`];
//! - a group alias that would make a group contain itself is a
//!   [`CyclicAlias`].
//!
//! Together these keep the structure a DAG, so walking it always ends.
//!
//! [`AliasConflict`]: ThemeError::AliasConflict
//! [`CyclicAlias`]: ThemeError::CyclicAlias

use std::fmt;

use indexmap::IndexMap;
use tincture_color::Color;

use crate::error::{Occupant, Result, ThemeError};

/// Handle to a node in a [`ColorTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug, Clone)]
enum Node {
    Leaf(Color),
    Inner(IndexMap<String, Entry>),
}

#[derive(Debug, Clone)]
struct Entry {
    id: NodeId,
    alias: bool,
    /// The owning path, or for an alias the reference it was made from.
    origin: String,
}

impl Entry {
    fn owned(id: NodeId, path: &str) -> Self {
        Self {
            id,
            alias: false,
            origin: path.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// ColorTree
// ---------------------------------------------------------------------------

/// A rooted tree of named colors with shared (aliased) nodes.
#[derive(Debug, Clone)]
pub struct ColorTree {
    nodes: Vec<Node>,
}

impl Default for ColorTree {
    fn default() -> Self {
        Self::new()
    }
}

impl ColorTree {
    /// The root group.
    pub const ROOT: NodeId = NodeId(0);

    /// A tree with an empty root group.
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::Inner(IndexMap::new())],
        }
    }

    /// Number of distinct nodes, root included. Aliases add no nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// View of the root group.
    #[must_use]
    pub const fn root(&self) -> Branch<'_> {
        Branch {
            tree: self,
            id: Self::ROOT,
        }
    }

    /// Look up a dotted path such as `"ui.error"` or `"red.p100"`.
    #[must_use]
    pub fn get(&self, path: &str) -> Option<ColorNode<'_>> {
        self.walk(path).ok().map(|id| self.view(id))
    }

    /// The color at a dotted path, if that path names a color.
    #[must_use]
    pub fn color(&self, path: &str) -> Option<Color> {
        match self.get(path)? {
            ColorNode::Leaf(color) => Some(color),
            ColorNode::Inner(_) => None,
        }
    }

    // -- Building ----------------------------------------------------------

    /// Store an owned color under `parent.key`.
    pub(crate) fn insert_color(
        &mut self,
        parent: NodeId,
        key: &str,
        color: Color,
        path: &str,
    ) -> Result<NodeId> {
        if let Some(entry) = self.children(parent).get(key) {
            return Err(self.conflict(path, &color.to_hex(), entry));
        }
        let id = self.push(Node::Leaf(color));
        self.children_mut(parent)
            .insert(key.to_string(), Entry::owned(id, path));
        Ok(id)
    }

    /// The owned group at `parent.key`, created empty if the key is free.
    pub(crate) fn branch(&mut self, parent: NodeId, key: &str, path: &str) -> Result<NodeId> {
        match self.children(parent).get(key) {
            None => {
                let id = self.push(Node::Inner(IndexMap::new()));
                self.children_mut(parent)
                    .insert(key.to_string(), Entry::owned(id, path));
                Ok(id)
            }
            Some(&Entry {
                id, alias: false, ..
            }) if self.is_inner(id) => Ok(id),
            Some(entry) => Err(self.conflict(path, "{…}", entry)),
        }
    }

    /// Store `target` under `parent.key` as an alias.
    pub(crate) fn alias(
        &mut self,
        parent: NodeId,
        key: &str,
        target: NodeId,
        path: &str,
        reference: &str,
    ) -> Result<()> {
        if self.is_inner(target) && (target == parent || self.reaches(target, parent)) {
            return Err(ThemeError::CyclicAlias {
                path: path.to_string(),
                reference: reference.to_string(),
            });
        }
        if let Some(entry) = self.children(parent).get(key) {
            let replaceable = entry.alias && self.is_inner(entry.id) == self.is_inner(target);
            if !replaceable {
                return Err(self.conflict(path, reference, entry));
            }
        }
        self.children_mut(parent).insert(
            key.to_string(),
            Entry {
                id: target,
                alias: true,
                origin: reference.to_string(),
            },
        );
        Ok(())
    }

    /// Resolve a dotted reference from the root, reporting where it failed.
    ///
    /// `key` is the dotted path of the entry that holds the reference; it
    /// only appears in the error.
    pub(crate) fn resolve(&self, key: &str, reference: &str) -> Result<NodeId> {
        self.walk(reference)
            .map_err(|(position, segment)| ThemeError::UnresolvedReference {
                key: key.to_string(),
                reference: reference.to_string(),
                position,
                segment: segment.to_string(),
            })
    }

    // -- Internals ---------------------------------------------------------

    /// Follow `path` segment by segment. On failure, returns the index and
    /// text of the first segment that did not resolve.
    fn walk<'p>(&self, path: &'p str) -> std::result::Result<NodeId, (usize, &'p str)> {
        let mut current = Self::ROOT;
        for (position, segment) in path.split('.').enumerate() {
            current = match &self.nodes[current.0] {
                Node::Inner(children) => children
                    .get(segment)
                    .map(|entry| entry.id)
                    .ok_or((position, segment))?,
                Node::Leaf(_) => return Err((position, segment)),
            };
        }
        Ok(current)
    }

    /// Whether `to` is reachable from `from` through any entries.
    fn reaches(&self, from: NodeId, to: NodeId) -> bool {
        let mut seen = vec![false; self.nodes.len()];
        let mut stack = vec![from];
        while let Some(id) = stack.pop() {
            if id == to {
                return true;
            }
            if std::mem::replace(&mut seen[id.0], true) {
                continue;
            }
            if let Node::Inner(children) = &self.nodes[id.0] {
                stack.extend(children.values().map(|entry| entry.id));
            }
        }
        false
    }

    fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    fn is_inner(&self, id: NodeId) -> bool {
        matches!(self.nodes[id.0], Node::Inner(_))
    }

    fn conflict(&self, path: &str, reference: &str, entry: &Entry) -> ThemeError {
        let existing = match (entry.alias, self.is_inner(entry.id)) {
            (false, false) => Occupant::OwnedLeaf,
            (false, true) => Occupant::OwnedSubtree,
            (true, false) => Occupant::AliasedLeaf,
            (true, true) => Occupant::AliasedSubtree,
        };
        ThemeError::AliasConflict {
            path: path.to_string(),
            reference: reference.to_string(),
            existing,
            existing_path: entry.origin.clone(),
        }
    }

    fn children(&self, id: NodeId) -> &IndexMap<String, Entry> {
        match &self.nodes[id.0] {
            Node::Inner(children) => children,
            Node::Leaf(_) => unreachable!("node {id:?} is a color, not a group"),
        }
    }

    fn children_mut(&mut self, id: NodeId) -> &mut IndexMap<String, Entry> {
        match &mut self.nodes[id.0] {
            Node::Inner(children) => children,
            Node::Leaf(_) => unreachable!("node {id:?} is a color, not a group"),
        }
    }

    fn view(&self, id: NodeId) -> ColorNode<'_> {
        match &self.nodes[id.0] {
            Node::Leaf(color) => ColorNode::Leaf(*color),
            Node::Inner(_) => ColorNode::Inner(Branch { tree: self, id }),
        }
    }
}

// ---------------------------------------------------------------------------
// Read-only views
// ---------------------------------------------------------------------------

/// A node seen through the tree: a color or a group.
#[derive(Debug, Clone, Copy)]
pub enum ColorNode<'a> {
    Leaf(Color),
    Inner(Branch<'a>),
}

impl ColorNode<'_> {
    #[must_use]
    pub const fn as_color(&self) -> Option<Color> {
        match self {
            Self::Leaf(color) => Some(*color),
            Self::Inner(_) => None,
        }
    }
}

/// A group in a [`ColorTree`]. Iteration follows insertion order.
#[derive(Clone, Copy)]
pub struct Branch<'a> {
    tree: &'a ColorTree,
    id: NodeId,
}

impl<'a> Branch<'a> {
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<ColorNode<'a>> {
        self.tree
            .children(self.id)
            .get(key)
            .map(|entry| self.tree.view(entry.id))
    }

    /// Whether `key` is an alias (`Some(true)`), owned (`Some(false)`) or
    /// absent (`None`).
    #[must_use]
    pub fn is_alias(&self, key: &str) -> Option<bool> {
        self.tree.children(self.id).get(key).map(|entry| entry.alias)
    }

    pub fn iter(self) -> impl Iterator<Item = (&'a str, ColorNode<'a>)> + 'a {
        let tree = self.tree;
        tree.children(self.id)
            .iter()
            .map(move |(key, entry)| (key.as_str(), tree.view(entry.id)))
    }

    pub fn keys(self) -> impl Iterator<Item = &'a str> + 'a {
        self.tree.children(self.id).keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.children(self.id).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for Branch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
