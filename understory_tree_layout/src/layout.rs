// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The layout pass and its output.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::ops::Range;

use kurbo::{Point, Rect, Size, Vec2};
use understory_concept_tree::{CollapseState, ConceptNode, ConceptTree, NodeKey, NodePath};

use crate::config::LayoutConfig;

/// A node placed in content coordinates.
///
/// `children` holds only the *visible* children: it is empty for a collapsed
/// node even when the source node has children. [`PositionedNode::source_child_count`]
/// still reports the source data, so renderers can offer an expand affordance.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedNode {
    /// Collapse-state key of this node.
    pub key: NodeKey,
    /// Position of the source node in its tree, whatever the key strategy.
    pub path: NodePath,
    /// Display label, shared with the source node.
    pub label: Arc<str>,
    /// Left edge of the node box.
    pub x: f64,
    /// Top edge of the node box.
    pub y: f64,
    /// Depth in the tree; the root has depth `0`.
    pub depth: usize,
    /// Top of the vertical band reserved for this subtree.
    pub subtree_top: f64,
    /// Height of the vertical band reserved for this subtree.
    pub subtree_height: f64,
    /// Number of children in the source node, visible or not.
    pub source_child_count: usize,
    /// Whether this node is collapsed and has children to hide.
    pub collapsed: bool,
    /// Visible children in display order.
    pub children: Vec<Self>,
}

impl PositionedNode {
    /// Returns the top-left corner of the node box.
    #[must_use]
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the node box for the given node size.
    #[must_use]
    pub fn rect(&self, node_size: Size) -> Rect {
        Rect::from_origin_size(self.origin(), node_size)
    }

    /// Returns `true` if the source node has children, whether or not they are visible.
    #[must_use]
    pub fn has_source_children(&self) -> bool {
        self.source_child_count > 0
    }

    /// Returns the source node this was placed from.
    ///
    /// `root` must be the tree passed to [`layout`]; any other tree gives the
    /// node at the same path, if there is one.
    #[must_use]
    pub fn source<'a>(&self, root: &'a ConceptNode) -> Option<&'a ConceptNode> {
        root.descendant(self.path.indices())
    }

    /// Returns the vertical band reserved for this subtree.
    #[must_use]
    pub fn subtree_span(&self) -> Range<f64> {
        self.subtree_top..self.subtree_top + self.subtree_height
    }

    fn translate(&mut self, offset: Vec2) {
        self.x += offset.x;
        self.y += offset.y;
        self.subtree_top += offset.y;
        for child in &mut self.children {
            child.translate(offset);
        }
    }
}

/// Output of [`layout`]: the positioned tree and the padded content size.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutResult {
    /// The positioned root.
    pub root: PositionedNode,
    /// Width of the node bounding box plus padding on both sides.
    pub content_width: f64,
    /// Height of the node bounding box plus padding on both sides.
    pub content_height: f64,
    /// Size of every node box.
    pub node_size: Size,
}

impl LayoutResult {
    /// Returns the content size.
    #[must_use]
    pub fn content_size(&self) -> Size {
        Size::new(self.content_width, self.content_height)
    }

    /// Returns the content rectangle, anchored at the content origin.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::from_origin_size(Point::ORIGIN, self.content_size())
    }

    /// Returns the box of `node`.
    #[must_use]
    pub fn node_rect(&self, node: &PositionedNode) -> Rect {
        node.rect(self.node_size)
    }

    /// Iterates all positioned nodes in pre-order.
    pub fn nodes(&self) -> Nodes<'_> {
        Nodes {
            stack: Vec::from([&self.root]),
        }
    }

    /// Iterates visible parent→child relationships in pre-order of the child.
    pub fn edges(&self) -> Edges<'_> {
        Edges {
            stack: Vec::from([(&self.root, 0)]),
        }
    }

    /// Returns the number of positioned (visible) nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes().count()
    }

    /// Always `false`: a layout contains at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Finds the visible node with `key`.
    ///
    /// With label keys several nodes may share a key; the first in pre-order wins.
    #[must_use]
    pub fn find(&self, key: &NodeKey) -> Option<&PositionedNode> {
        self.nodes().find(|node| &node.key == key)
    }

    /// Returns the node whose box contains `point`, if any.
    ///
    /// Node boxes never overlap, so at most one node matches.
    #[must_use]
    pub fn node_at(&self, point: Point) -> Option<&PositionedNode> {
        self.nodes()
            .find(|node| self.node_rect(node).contains(point))
    }
}

/// Pre-order iterator over the nodes of a [`LayoutResult`].
#[derive(Clone, Debug)]
pub struct Nodes<'a> {
    stack: Vec<&'a PositionedNode>,
}

impl<'a> Iterator for Nodes<'a> {
    type Item = &'a PositionedNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children.iter().rev());
        Some(node)
    }
}

/// A visible parent→child relationship.
#[derive(Clone, Copy, Debug)]
pub struct Edge<'a> {
    /// The parent node.
    pub parent: &'a PositionedNode,
    /// The child node.
    pub child: &'a PositionedNode,
}

/// Iterator over the visible edges of a [`LayoutResult`].
#[derive(Clone, Debug)]
pub struct Edges<'a> {
    stack: Vec<(&'a PositionedNode, usize)>,
}

impl<'a> Iterator for Edges<'a> {
    type Item = Edge<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(top) = self.stack.last_mut() {
            let (parent, index) = *top;
            if let Some(child) = parent.children.get(index) {
                top.1 += 1;
                self.stack.push((child, 0));
                return Some(Edge { parent, child });
            }
            self.stack.pop();
        }
        None
    }
}

/// Lays out `root` left to right, hiding the descendants of collapsed nodes.
///
/// Depth maps to the horizontal axis and sibling order to the vertical axis:
/// - Each node's `x` is `depth * (node_width + horizontal_spacing)`.
/// - Leaves, and nodes whose children are hidden, stack at a running vertical cursor.
/// - A node with visible children is centered between its first and last visible child.
/// - A subtree reserves `max(node_height, Σ(child + spacing) - spacing)` vertically.
///
/// Finally the tree is translated so its bounding box starts at
/// `(padding, padding)`. The pass is pure: identical inputs give identical
/// outputs, and neither `root` nor `collapsed` is modified.
///
/// The pass recurses once per tree level and does not check `root`'s depth.
/// Pass roots of trees accepted by [`ConceptTree`], or call [`layout_tree`],
/// so the ingestion depth limit bounds the recursion.
#[must_use]
pub fn layout(root: &ConceptNode, collapsed: &CollapseState, config: &LayoutConfig) -> LayoutResult {
    let mut pass = Pass {
        collapsed,
        config,
        path: Vec::new(),
        visited: 0,
    };
    let mut positioned = pass.place(root, 0, 0.0);

    let bounds = bounding_box(&positioned, config.node_size());
    positioned.translate(Vec2::new(
        config.padding - bounds.x0,
        config.padding - bounds.y0,
    ));

    let result = LayoutResult {
        root: positioned,
        content_width: bounds.width() + 2.0 * config.padding,
        content_height: bounds.height() + 2.0 * config.padding,
        node_size: config.node_size(),
    };
    tracing::debug!(
        nodes = pass.visited,
        collapsed = collapsed.len(),
        width = result.content_width,
        height = result.content_height,
        "laid out concept tree"
    );
    result
}

/// Lays out a validated tree; see [`layout`].
#[must_use]
pub fn layout_tree(
    tree: &ConceptTree,
    collapsed: &CollapseState,
    config: &LayoutConfig,
) -> LayoutResult {
    layout(tree.root(), collapsed, config)
}

struct Pass<'a> {
    collapsed: &'a CollapseState,
    config: &'a LayoutConfig,
    path: Vec<usize>,
    visited: usize,
}

impl Pass<'_> {
    fn place(&mut self, node: &ConceptNode, depth: usize, cursor: f64) -> PositionedNode {
        self.visited += 1;
        let key = self.config.key_strategy.key_for(&self.path, node.label_arc());
        let collapsed = node.has_children() && self.collapsed.is_collapsed(&key);
        let spacing = self.config.vertical_spacing;

        let mut children = Vec::new();
        if !collapsed {
            children.reserve(node.children().len());
            let mut child_cursor = cursor;
            for (index, child) in node.children().iter().enumerate() {
                self.path.push(index);
                let positioned = self.place(child, depth + 1, child_cursor);
                self.path.pop();
                child_cursor += positioned.subtree_height + spacing;
                children.push(positioned);
            }
        }

        let (y, subtree_height) = match (children.first(), children.last()) {
            (Some(first), Some(last)) => {
                let stacked: f64 = children
                    .iter()
                    .map(|child| child.subtree_height + spacing)
                    .sum::<f64>()
                    - spacing;
                (
                    (first.y + last.y) / 2.0,
                    stacked.max(self.config.node_height),
                )
            }
            _ => (cursor, self.config.node_height),
        };

        PositionedNode {
            key,
            path: NodePath::from_indices(self.path.iter().copied()),
            label: Arc::clone(node.label_arc()),
            x: self.config.column_x(depth),
            y,
            depth,
            subtree_top: cursor,
            subtree_height,
            source_child_count: node.children().len(),
            collapsed,
            children,
        }
    }
}

fn bounding_box(root: &PositionedNode, node_size: Size) -> Rect {
    let mut bounds = root.rect(node_size);
    let mut stack: Vec<&PositionedNode> = root.children.iter().collect();
    while let Some(node) = stack.pop() {
        bounds = bounds.union(node.rect(node_size));
        stack.extend(node.children.iter());
    }
    bounds
}
