// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_concept_tree --heading-base-level=0

//! Understory Concept Tree: the data model behind concept maps.
//!
//! A concept map starts from a rooted tree of labeled ideas, usually produced by
//! an external summarization step. This crate provides:
//! - [`ConceptNode`]: an immutable, ordered tree of labels.
//! - [`ConceptTree`]: a validated root, rejected once at ingestion when malformed.
//! - [`NodeKey`] / [`NodePath`] / [`KeyStrategy`]: how nodes are identified across
//!   re-layouts.
//! - [`CollapseState`]: which nodes are currently collapsed, tracked without
//!   touching the source tree.
//!
//! It does **not** compute positions; see `understory_tree_layout` for that.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_concept_tree::{CollapseState, ConceptNode, ConceptTree, NodeKey, NodePath};
//!
//! let root = ConceptNode::with_children(
//!     "Photosynthesis",
//!     [
//!         ConceptNode::with_children("Light reactions", [ConceptNode::new("Thylakoid")]),
//!         ConceptNode::new("Calvin cycle"),
//!     ],
//! );
//! let tree = ConceptTree::new(root).unwrap();
//! assert_eq!(tree.root().node_count(), 4);
//!
//! let mut collapsed = CollapseState::new();
//! let light = NodeKey::Path(NodePath::from_indices([0]));
//! collapsed.toggle(light.clone());
//! assert!(collapsed.is_collapsed(&light));
//! ```
//!
//! ## Node identity
//!
//! Source trees carry no identity field, and labels are not guaranteed to be
//! unique. [`KeyStrategy::Path`] (the default) keys each node by the child
//! indices leading to it from the root, so two nodes with the same label collapse
//! independently. [`KeyStrategy::Label`] keys nodes by their label instead, which
//! makes every node sharing a label share its collapse state.
//!
//! ## Features
//!
//! - `serde`: derive `Serialize`/`Deserialize` for [`ConceptNode`] and [`KeyStrategy`].
//! - `json` (default): [`ConceptTree::from_json`] for the upstream JSON shape
//!   (`{"topic": "...", "children": [...]}`).
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod collapse;
mod key;
mod node;

pub use collapse::CollapseState;
pub use key::{KeyStrategy, NodeKey, NodePath, ParseNodePathError};
pub use node::{ConceptNode, ConceptTree, TreeError};
