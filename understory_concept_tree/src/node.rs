// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Concept nodes and validated trees.

use alloc::sync::Arc;
use alloc::vec::Vec;

/// One idea in a concept map: a label plus an ordered list of child ideas.
///
/// Child order is display order (top to bottom in a left-to-right map) and is
/// preserved by every consumer. Nodes are immutable once built; the builder
/// methods consume and return `Self`.
///
/// With the `serde` feature the node deserializes from the upstream shape,
/// accepting either `label` or `topic` for the text and treating a missing
/// `children` array as empty.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConceptNode {
    #[cfg_attr(feature = "serde", serde(alias = "topic"))]
    label: Arc<str>,
    #[cfg_attr(
        feature = "serde",
        serde(default, skip_serializing_if = "Vec::is_empty")
    )]
    children: Vec<ConceptNode>,
}

impl ConceptNode {
    /// Creates a leaf node.
    #[must_use]
    pub fn new(label: impl Into<Arc<str>>) -> Self {
        Self {
            label: label.into(),
            children: Vec::new(),
        }
    }

    /// Creates a node with the given children, in order.
    #[must_use]
    pub fn with_children(
        label: impl Into<Arc<str>>,
        children: impl IntoIterator<Item = Self>,
    ) -> Self {
        Self {
            label: label.into(),
            children: children.into_iter().collect(),
        }
    }

    /// Appends a child, returning the extended node.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Returns the display label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the shared label handle.
    ///
    /// Positioned output clones this handle rather than the text.
    #[must_use]
    pub fn label_arc(&self) -> &Arc<str> {
        &self.label
    }

    /// Returns the children in display order.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns `true` if the node has at least one child in the source data.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Returns the child reached by following `indices` from this node.
    #[must_use]
    pub fn descendant(&self, indices: &[usize]) -> Option<&Self> {
        indices
            .iter()
            .try_fold(self, |node, &index| node.children.get(index))
    }

    /// Counts this node and all of its descendants.
    #[must_use]
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack: Vec<&Self> = Vec::from([self]);
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.children.iter());
        }
        count
    }

    /// Returns the number of levels in this subtree; a leaf has depth `1`.
    ///
    /// Walks with an explicit stack so arbitrarily deep input cannot exhaust the
    /// call stack before it is validated.
    #[must_use]
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack: Vec<(&Self, usize)> = Vec::from([(self, 1)]);
        while let Some((node, level)) = stack.pop() {
            max = max.max(level);
            stack.extend(node.children.iter().map(|child| (child, level + 1)));
        }
        max
    }
}

/// Error returned when a source tree is rejected at ingestion.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TreeError {
    /// The root node's label is empty or only whitespace.
    #[error("root concept has an empty label")]
    EmptyRootLabel,
    /// The tree has more levels than the configured limit.
    #[error("concept tree is {depth} levels deep, exceeding the limit of {limit}")]
    TooDeep {
        /// Number of levels in the rejected tree.
        depth: usize,
        /// Maximum number of levels accepted.
        limit: usize,
    },
    /// The JSON input did not match the concept tree shape.
    #[cfg(feature = "json")]
    #[error("malformed concept tree JSON")]
    Json(#[from] serde_json::Error),
}

/// A source tree that passed ingestion checks.
///
/// Validation is deliberately minimal: the root must carry a non-blank label,
/// and the tree must not exceed a depth limit. Everything else (blank child
/// labels, duplicate labels, wide fan-out) is laid out as given.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConceptTree {
    root: ConceptNode,
}

impl ConceptTree {
    /// Depth limit applied by [`ConceptTree::new`].
    ///
    /// Upstream generation produces at most four levels; the limit only guards
    /// against adversarial input.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Validates `root` with [`ConceptTree::DEFAULT_MAX_DEPTH`].
    pub fn new(root: ConceptNode) -> Result<Self, TreeError> {
        Self::with_max_depth(root, Self::DEFAULT_MAX_DEPTH)
    }

    /// Validates `root`, accepting at most `max_depth` levels.
    pub fn with_max_depth(root: ConceptNode, max_depth: usize) -> Result<Self, TreeError> {
        let result = Self::check(&root, max_depth);
        if let Err(err) = &result {
            tracing::warn!(%err, "rejected concept tree");
        }
        result.map(|()| Self { root })
    }

    /// Parses and validates a tree from its JSON form.
    ///
    /// Nodes are objects with a `topic` (or `label`) string and an optional
    /// `children` array.
    #[cfg(feature = "json")]
    pub fn from_json(json: &str) -> Result<Self, TreeError> {
        let root: ConceptNode = serde_json::from_str(json).map_err(|err| {
            tracing::warn!(%err, "concept tree JSON did not parse");
            TreeError::from(err)
        })?;
        Self::new(root)
    }

    /// Returns the root node.
    #[must_use]
    pub fn root(&self) -> &ConceptNode {
        &self.root
    }

    /// Consumes the tree, returning the root node.
    #[must_use]
    pub fn into_root(self) -> ConceptNode {
        self.root
    }

    fn check(root: &ConceptNode, max_depth: usize) -> Result<(), TreeError> {
        if root.label.trim().is_empty() {
            return Err(TreeError::EmptyRootLabel);
        }
        let depth = root.depth();
        if depth > max_depth {
            return Err(TreeError::TooDeep {
                depth,
                limit: max_depth,
            });
        }
        Ok(())
    }
}

impl AsRef<ConceptNode> for ConceptTree {
    fn as_ref(&self) -> &ConceptNode {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::{ConceptNode, ConceptTree, TreeError};

    fn sample() -> ConceptNode {
        ConceptNode::with_children(
            "A",
            [
                ConceptNode::with_children("B", [ConceptNode::new("D")]),
                ConceptNode::new("C"),
            ],
        )
    }

    #[test]
    fn counts_and_depth() {
        let root = sample();
        assert_eq!(root.node_count(), 4);
        assert_eq!(root.depth(), 3);
        assert_eq!(ConceptNode::new("leaf").depth(), 1);
    }

    #[test]
    fn descendant_follows_child_indices() {
        let root = sample();
        assert_eq!(root.descendant(&[]).map(ConceptNode::label), Some("A"));
        assert_eq!(root.descendant(&[0, 0]).map(ConceptNode::label), Some("D"));
        assert_eq!(root.descendant(&[1]).map(ConceptNode::label), Some("C"));
        assert!(root.descendant(&[1, 0]).is_none());
        assert!(root.descendant(&[5]).is_none());
    }

    #[test]
    fn builder_preserves_child_order() {
        let root = ConceptNode::new("r")
            .with_child(ConceptNode::new("first"))
            .with_child(ConceptNode::new("second"));
        let labels: alloc::vec::Vec<&str> = root.children().iter().map(ConceptNode::label).collect();
        assert_eq!(labels, ["first", "second"]);
    }

    #[test]
    fn rejects_blank_root_label() {
        assert!(matches!(
            ConceptTree::new(ConceptNode::new("")),
            Err(TreeError::EmptyRootLabel)
        ));
        assert!(matches!(
            ConceptTree::new(ConceptNode::new("  \t")),
            Err(TreeError::EmptyRootLabel)
        ));
    }

    #[test]
    fn blank_child_labels_are_accepted() {
        let root = ConceptNode::with_children("root", [ConceptNode::new("")]);
        assert!(ConceptTree::new(root).is_ok());
    }

    #[test]
    fn rejects_trees_over_the_depth_limit() {
        let root = sample();
        assert!(ConceptTree::with_max_depth(root.clone(), 3).is_ok());
        match ConceptTree::with_max_depth(root, 2) {
            Err(TreeError::TooDeep { depth, limit }) => {
                assert_eq!(depth, 3);
                assert_eq!(limit, 2);
            }
            other => panic!("expected TooDeep, got {other:?}"),
        }
    }

    #[cfg(feature = "json")]
    #[test]
    fn parses_upstream_json_shape() {
        let json = r#"{
            "topic": "Cells",
            "children": [
                { "topic": "Nucleus", "children": [{ "topic": "DNA" }] },
                { "topic": "Membrane" }
            ]
        }"#;
        let tree = ConceptTree::from_json(json).unwrap();
        let root = tree.root();
        assert_eq!(root.label(), "Cells");
        assert_eq!(root.children().len(), 2);
        assert_eq!(root.children()[0].children()[0].label(), "DNA");
        assert!(!root.children()[1].has_children());
    }

    #[cfg(feature = "json")]
    #[test]
    fn accepts_label_field_name() {
        let tree = ConceptTree::from_json(r#"{ "label": "Root", "children": [] }"#).unwrap();
        assert_eq!(tree.root().label(), "Root");
    }

    #[cfg(feature = "json")]
    #[test]
    fn malformed_json_is_reported_not_substituted() {
        assert!(matches!(
            ConceptTree::from_json(r#"{ "children": [] }"#),
            Err(TreeError::Json(_))
        ));
        assert!(matches!(
            ConceptTree::from_json(r#"{ "topic": 7 }"#),
            Err(TreeError::Json(_))
        ));
        assert!(matches!(
            ConceptTree::from_json(r#"{ "topic": "" }"#),
            Err(TreeError::EmptyRootLabel)
        ));
    }
}
