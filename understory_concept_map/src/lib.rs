// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_concept_map --heading-base-level=0

//! Understory Concept Map: one value holding everything an interactive concept map view needs.
//!
//! [`ConceptMap`] ties together the Understory building blocks:
//! - a validated [`ConceptTree`](understory_concept_tree::ConceptTree) and its
//!   [`CollapseState`](understory_concept_tree::CollapseState),
//! - a cached [`LayoutResult`](understory_tree_layout::LayoutResult), recomputed
//!   only when the tree, the geometry, or the collapse state changes,
//! - a [`Camera2D`](understory_camera2d::Camera2D) and the
//!   [`PanZoomState`](understory_pan_zoom::PanZoomState) that drives it,
//! - [`DisplayList`](understory_concept_display::DisplayList) construction and
//!   hit testing of collapse affordances in screen space.
//!
//! Each instance is independent; nothing is shared between maps.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_concept_display::DisplayStyle;
//! use understory_concept_map::ConceptMap;
//! use understory_concept_tree::{ConceptNode, ConceptTree};
//! use understory_pan_zoom::PointerEvent;
//!
//! let tree = ConceptTree::new(ConceptNode::with_children(
//!     "Cells",
//!     [ConceptNode::with_children("Organelles", [ConceptNode::new("Nucleus")])],
//! ))
//! .unwrap();
//!
//! let mut map = ConceptMap::new(Size::new(800.0, 600.0));
//! map.set_tree(tree);
//! assert_eq!(map.camera().zoom(), 1.0);
//!
//! // Scroll up over the middle of the surface to zoom in.
//! let wheel = PointerEvent::Wheel { position: Point::new(400.0, 300.0), delta: -1.0 };
//! assert!(map.handle_pointer(wheel).viewport_changed);
//!
//! let list = map.display_list(&DisplayStyle::default()).unwrap();
//! assert_eq!(list.nodes.len(), 3);
//! ```
//!
//! ## Features
//!
//! - `json` (default): [`ConceptMap::set_tree_json`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod map;

pub use map::ConceptMap;
