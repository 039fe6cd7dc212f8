// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;

use kurbo::{Circle, CubicBez, Point, Rect, RoundedRect, Shape};
use peniko::Color;
use understory_concept_tree::NodeKey;
use understory_tree_layout::LayoutResult;

use crate::style::DisplayStyle;

bitflags::bitflags! {
    /// Per-node display state.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct NodeFlags: u8 {
        /// The node is the tree root.
        const ROOT         = 0b0000_0001;
        /// The source node has children, visible or not.
        const HAS_CHILDREN = 0b0000_0010;
        /// The node is collapsed and hides its children.
        const COLLAPSED    = 0b0000_0100;
    }
}

/// A node box with its label.
#[derive(Clone, Debug)]
pub struct NodeItem {
    /// Collapse-state key of the node.
    pub key: NodeKey,
    /// Label to draw centered in the box.
    pub label: Arc<str>,
    /// Box outline in content coordinates.
    pub shape: RoundedRect,
    /// Box fill.
    pub fill: Color,
    /// Box outline color.
    pub stroke: Color,
    /// Box outline width; `0.0` means no outline.
    pub stroke_width: f64,
    /// Label color.
    pub text: Color,
    /// Display state.
    pub flags: NodeFlags,
}

/// A curve connecting a parent to one of its visible children.
#[derive(Clone, Debug)]
pub struct EdgeItem {
    /// Key of the parent node.
    pub parent: NodeKey,
    /// Key of the child node.
    pub child: NodeKey,
    /// Curve from the parent's right-edge midpoint to the child's left-edge midpoint.
    pub curve: CubicBez,
    /// Stroke color.
    pub color: Color,
    /// Stroke width.
    pub width: f64,
}

/// The collapse/expand affordance of a node with children.
#[derive(Clone, Debug)]
pub struct ToggleItem {
    /// Key to toggle when the affordance is activated.
    pub key: NodeKey,
    /// Affordance outline, centered on the node's right-edge midpoint.
    pub circle: Circle,
    /// Whether the node is currently collapsed.
    pub collapsed: bool,
    /// Affordance fill.
    pub fill: Color,
}

/// Result of [`DisplayList::hit_test`].
#[derive(Clone, Copy, Debug)]
pub enum Hit<'a> {
    /// The point is on a collapse/expand affordance.
    Toggle(&'a ToggleItem),
    /// The point is on a node box.
    Node(&'a NodeItem),
}

impl Hit<'_> {
    /// Returns the key of the hit node.
    #[must_use]
    pub fn key(&self) -> &NodeKey {
        match self {
            Self::Toggle(toggle) => &toggle.key,
            Self::Node(node) => &node.key,
        }
    }
}

/// Drawable primitives for one laid-out concept map, in content coordinates.
///
/// Paint order is edges, then nodes, then toggles. Render adapters map the
/// geometry to screen space with the camera's content→screen transform.
#[derive(Clone, Debug, Default)]
pub struct DisplayList {
    /// Node boxes in pre-order.
    pub nodes: Vec<NodeItem>,
    /// Curves for visible parent→child relationships.
    pub edges: Vec<EdgeItem>,
    /// Affordances for every node whose source node has children.
    pub toggles: Vec<ToggleItem>,
    /// Content rectangle of the layout.
    pub bounds: Rect,
}

impl DisplayList {
    /// Builds the display list for `layout`.
    #[must_use]
    pub fn build(layout: &LayoutResult, style: &DisplayStyle) -> Self {
        let node_count = layout.len();
        let mut nodes = Vec::with_capacity(node_count);
        let mut toggles = Vec::new();

        for node in layout.nodes() {
            let rect = layout.node_rect(node);
            let mut flags = NodeFlags::empty();
            flags.set(NodeFlags::ROOT, node.depth == 0);
            flags.set(NodeFlags::HAS_CHILDREN, node.has_source_children());
            flags.set(NodeFlags::COLLAPSED, node.collapsed);

            let root = flags.contains(NodeFlags::ROOT);
            nodes.push(NodeItem {
                key: node.key.clone(),
                label: Arc::clone(&node.label),
                shape: RoundedRect::from_rect(rect, style.corner_radius),
                fill: if root { style.root_fill } else { style.node_fill },
                stroke: style.node_stroke,
                stroke_width: if root { 0.0 } else { style.stroke_width },
                text: if root { style.root_text } else { style.node_text },
                flags,
            });

            if node.has_source_children() {
                toggles.push(ToggleItem {
                    key: node.key.clone(),
                    circle: Circle::new(right_mid(rect), style.toggle_radius),
                    collapsed: node.collapsed,
                    fill: style.toggle_fill,
                });
            }
        }

        let edges = layout
            .edges()
            .map(|edge| EdgeItem {
                parent: edge.parent.key.clone(),
                child: edge.child.key.clone(),
                curve: edge_curve(layout.node_rect(edge.parent), layout.node_rect(edge.child)),
                color: style.edge_color,
                width: style.edge_width,
            })
            .collect();

        Self {
            nodes,
            edges,
            toggles,
            bounds: layout.content_rect(),
        }
    }

    /// Returns the topmost item under a content-space point.
    ///
    /// Toggles are tested before node boxes since they overlap box edges.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<Hit<'_>> {
        if let Some(toggle) = self
            .toggles
            .iter()
            .rev()
            .find(|toggle| toggle.circle.contains(point))
        {
            return Some(Hit::Toggle(toggle));
        }
        self.nodes
            .iter()
            .rev()
            .find(|node| node.shape.contains(point))
            .map(Hit::Node)
    }

    /// Iterates node boxes that intersect a content-space rectangle.
    ///
    /// Pass the camera's visible content rectangle to cull off-screen nodes.
    pub fn nodes_in(&self, visible: Rect) -> impl Iterator<Item = &NodeItem> + '_ {
        self.nodes
            .iter()
            .filter(move |node| node.shape.rect().intersect(visible).area() > 0.0)
    }
}

/// Returns the edge curve between two node boxes laid out left to right.
///
/// The curve leaves the parent's right-edge midpoint and enters the child's
/// left-edge midpoint horizontally, with both control points at the
/// horizontal midpoint between them.
#[must_use]
pub fn edge_curve(parent: Rect, child: Rect) -> CubicBez {
    let start = right_mid(parent);
    let end = Point::new(child.x0, child.center().y);
    let mid_x = (start.x + end.x) / 2.0;
    CubicBez::new(
        start,
        Point::new(mid_x, start.y),
        Point::new(mid_x, end.y),
        end,
    )
}

fn right_mid(rect: Rect) -> Point {
    Point::new(rect.x1, rect.center().y)
}
