// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tree_layout --heading-base-level=0

//! Understory Tree Layout: deterministic placement of collapsible concept trees.
//!
//! Given a [`ConceptNode`](understory_concept_tree::ConceptNode) tree and a
//! [`CollapseState`](understory_concept_tree::CollapseState), [`layout`]
//! computes a positioned tree in content coordinates plus the padded content
//! size. Depth runs left to right and siblings stack top to bottom; every node
//! box has the same size.
//!
//! Layout is separate from viewing. It is re-run when the tree or the collapse
//! state changes, never when the camera pans or zooms.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_concept_tree::{CollapseState, ConceptNode};
//! use understory_tree_layout::{LayoutConfig, PADDING, layout};
//!
//! let root = ConceptNode::with_children(
//!     "A",
//!     [
//!         ConceptNode::with_children("B", [ConceptNode::new("D")]),
//!         ConceptNode::new("C"),
//!     ],
//! );
//! let result = layout(&root, &CollapseState::new(), &LayoutConfig::default());
//!
//! let b = &result.root.children[0];
//! let d = &b.children[0];
//! assert_eq!(d.x, 2.0 * 230.0 + PADDING);
//! assert_eq!(b.y, d.y);
//! assert!(result.nodes().all(|n| n.x >= PADDING && n.y >= PADDING));
//! ```
//!
//! ## Invariants
//!
//! - Every subtree reserves at least one node height.
//! - Sibling subtrees occupy disjoint vertical bands separated by at least the
//!   vertical spacing.
//! - A node's `x` depends only on its depth.
//! - A node with visible children is vertically centered between the first and
//!   last of them.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod layout;

pub use config::{
    HORIZONTAL_SPACING, LayoutConfig, NODE_HEIGHT, NODE_WIDTH, PADDING, VERTICAL_SPACING,
};
pub use layout::{Edge, Edges, LayoutResult, Nodes, PositionedNode, layout, layout_tree};
