// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Node identity: child-index paths and the keys derived from them.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::node::ConceptNode;

/// Position of a node in its tree as the child indices leading to it from the root.
///
/// The root is the empty path. Paths display as dot-separated indices, for
/// example `"0.1.2"`, and parse back from the same form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodePath(Vec<usize>);

impl NodePath {
    /// The root path.
    #[must_use]
    pub const fn root() -> Self {
        Self(Vec::new())
    }

    /// Builds a path from child indices, outermost first.
    #[must_use]
    pub fn from_indices(indices: impl IntoIterator<Item = usize>) -> Self {
        Self(indices.into_iter().collect())
    }

    /// Returns the path of this node's `index`-th child.
    #[must_use]
    pub fn child(&self, index: usize) -> Self {
        let mut indices = Vec::with_capacity(self.0.len() + 1);
        indices.extend_from_slice(&self.0);
        indices.push(index);
        Self(indices)
    }

    /// Returns the parent path, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        let (_, head) = self.0.split_last()?;
        Some(Self(head.to_vec()))
    }

    /// Returns the child indices, outermost first.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.0
    }

    /// Returns the depth of the addressed node; the root has depth `0`.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` for the root path.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if `self` addresses `other` or one of its ancestors.
    #[must_use]
    pub fn is_prefix_of(&self, other: &Self) -> bool {
        other.0.starts_with(&self.0)
    }

    /// Follows this path through `old` and returns the path of the matching
    /// node in `new`.
    ///
    /// Nodes match when every label from the root down is unchanged. Among
    /// siblings sharing a label, the n-th one in `old` matches the n-th one in
    /// `new`. Returns `None` if some step has no match.
    #[must_use]
    pub fn rebase(&self, old: &ConceptNode, new: &ConceptNode) -> Option<Self> {
        if old.label() != new.label() {
            return None;
        }
        let mut indices = Vec::with_capacity(self.0.len());
        let (mut old, mut new) = (old, new);
        for &index in &self.0 {
            let siblings = old.children();
            let target = siblings.get(index)?;
            let rank = siblings[..index]
                .iter()
                .filter(|sibling| sibling.label() == target.label())
                .count();
            let (new_index, next) = new
                .children()
                .iter()
                .enumerate()
                .filter(|(_, child)| child.label() == target.label())
                .nth(rank)?;
            indices.push(new_index);
            old = target;
            new = next;
        }
        Some(Self(indices))
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, index) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{index}")?;
        }
        Ok(())
    }
}

/// Error returned when a string is not a dot-separated list of child indices.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("invalid node path segment {segment:?}")]
pub struct ParseNodePathError {
    segment: alloc::string::String,
}

impl FromStr for NodePath {
    type Err = ParseNodePathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        s.split('.')
            .map(|segment| {
                segment.parse::<usize>().map_err(|_| ParseNodePathError {
                    segment: segment.into(),
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Key under which a node's collapse state is recorded.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKey {
    /// Keyed by position in the tree; unique per node.
    Path(NodePath),
    /// Keyed by display label; nodes sharing a label share the key.
    Label(Arc<str>),
}

impl NodeKey {
    /// Returns the path, for path keys.
    #[must_use]
    pub fn as_path(&self) -> Option<&NodePath> {
        match self {
            Self::Path(path) => Some(path),
            Self::Label(_) => None,
        }
    }
}

impl From<NodePath> for NodeKey {
    fn from(path: NodePath) -> Self {
        Self::Path(path)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{path}"),
            Self::Label(label) => f.write_str(label),
        }
    }
}

/// How node keys are derived while walking a tree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum KeyStrategy {
    /// One key per node, from its child-index path.
    #[default]
    Path,
    /// One key per distinct label.
    ///
    /// Every node with the same label collapses and expands together.
    Label,
}

impl KeyStrategy {
    /// Derives the key for the node at `path` carrying `label`.
    #[must_use]
    pub fn key_for(self, path: &[usize], label: &Arc<str>) -> NodeKey {
        match self {
            Self::Path => NodeKey::Path(NodePath::from_indices(path.iter().copied())),
            Self::Label => NodeKey::Label(Arc::clone(label)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;
    use alloc::sync::Arc;

    use super::{KeyStrategy, NodeKey, NodePath};
    use crate::node::ConceptNode;

    #[test]
    fn path_display_and_parse_agree() {
        let path = NodePath::from_indices([0, 1, 2]);
        assert_eq!(path.to_string(), "0.1.2");
        assert_eq!("0.1.2".parse::<NodePath>(), Ok(path));
        assert_eq!("".parse::<NodePath>(), Ok(NodePath::root()));
        assert!("0..1".parse::<NodePath>().is_err());
        assert!("a".parse::<NodePath>().is_err());
    }

    #[test]
    fn child_and_parent_navigate() {
        let root = NodePath::root();
        assert!(root.is_root());
        assert_eq!(root.parent(), None);

        let grandchild = root.child(1).child(0);
        assert_eq!(grandchild.indices(), &[1, 0]);
        assert_eq!(grandchild.depth(), 2);
        assert_eq!(grandchild.parent(), Some(NodePath::from_indices([1])));
        assert!(root.is_prefix_of(&grandchild));
        assert!(NodePath::from_indices([1]).is_prefix_of(&grandchild));
        assert!(!NodePath::from_indices([0]).is_prefix_of(&grandchild));
    }

    #[test]
    fn strategies_key_duplicate_labels_differently() {
        let label: Arc<str> = Arc::from("Energy");

        let a = KeyStrategy::Path.key_for(&[0], &label);
        let b = KeyStrategy::Path.key_for(&[1, 0], &label);
        assert_ne!(a, b);
        assert_eq!(a.as_path(), Some(&NodePath::from_indices([0])));

        let a = KeyStrategy::Label.key_for(&[0], &label);
        let b = KeyStrategy::Label.key_for(&[1, 0], &label);
        assert_eq!(a, b);
        assert_eq!(a, NodeKey::Label(label));
        assert_eq!(a.to_string(), "Energy");
    }

    #[test]
    fn rebase_follows_labels_across_edits() {
        let old = ConceptNode::with_children(
            "A",
            [
                ConceptNode::with_children("B", [ConceptNode::new("D")]),
                ConceptNode::new("C"),
            ],
        );
        let inserted = ConceptNode::with_children(
            "A",
            [
                ConceptNode::new("X"),
                ConceptNode::with_children("B", [ConceptNode::new("D")]),
                ConceptNode::new("C"),
            ],
        );
        let b = NodePath::from_indices([0]);
        let d = NodePath::from_indices([0, 0]);
        assert_eq!(b.rebase(&old, &inserted), Some(NodePath::from_indices([1])));
        assert_eq!(d.rebase(&old, &inserted), Some(NodePath::from_indices([1, 0])));
        assert_eq!(NodePath::root().rebase(&old, &inserted), Some(NodePath::root()));

        let renamed = ConceptNode::with_children("A", [ConceptNode::new("C")]);
        assert_eq!(b.rebase(&old, &renamed), None);
        assert_eq!(NodePath::from_indices([9]).rebase(&old, &inserted), None);
        assert_eq!(b.rebase(&old, &ConceptNode::new("Z")), None);
    }

    #[test]
    fn rebase_keeps_duplicate_labels_in_sibling_order() {
        let old = ConceptNode::with_children(
            "Root",
            [ConceptNode::new("Energy"), ConceptNode::new("Energy")],
        );
        let new = ConceptNode::with_children(
            "Root",
            [
                ConceptNode::new("Energy"),
                ConceptNode::new("Matter"),
                ConceptNode::new("Energy"),
            ],
        );
        let second = NodePath::from_indices([1]);
        assert_eq!(second.rebase(&old, &new), Some(NodePath::from_indices([2])));
    }
}
