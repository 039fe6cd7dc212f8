// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_concept_display --heading-base-level=0

//! Understory Concept Display: backend-neutral drawables for a laid-out concept map.
//!
//! [`DisplayList::build`] turns a [`LayoutResult`](understory_tree_layout::LayoutResult)
//! into rounded node boxes, cubic edge curves, and collapse/expand affordances,
//! all in content coordinates and styled by a [`DisplayStyle`]. A renderer
//! draws the list through the camera's content→screen transform; the list
//! itself holds no screen-space state and survives pans and zooms unchanged.
//!
//! [`DisplayList::hit_test`] answers "what is under this content point?" with
//! toggles taking priority over the boxes they overlap.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_concept_display::{DisplayList, DisplayStyle, Hit, NodeFlags};
//! use understory_concept_tree::{CollapseState, ConceptNode};
//! use understory_tree_layout::{LayoutConfig, layout};
//!
//! let root = ConceptNode::with_children("A", [ConceptNode::new("B")]);
//! let result = layout(&root, &CollapseState::new(), &LayoutConfig::default());
//! let list = DisplayList::build(&result, &DisplayStyle::default());
//!
//! assert_eq!(list.nodes.len(), 2);
//! assert_eq!(list.edges.len(), 1);
//! assert!(list.nodes[0].flags.contains(NodeFlags::ROOT | NodeFlags::HAS_CHILDREN));
//!
//! let toggle = &list.toggles[0];
//! assert!(matches!(list.hit_test(toggle.circle.center), Some(Hit::Toggle(_))));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod list;
mod style;

pub use list::{DisplayList, EdgeItem, Hit, NodeFlags, NodeItem, ToggleItem, edge_curve};
pub use style::DisplayStyle;
