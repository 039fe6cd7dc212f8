// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end behavior of a concept map view: layout, collapse, and camera together.

use kurbo::{Point, Size};
use understory_camera2d::ViewportState;
use understory_concept_display::DisplayStyle;
use understory_concept_map::ConceptMap;
use understory_concept_tree::{ConceptNode, ConceptTree, NodeKey, NodePath};
use understory_pan_zoom::PointerEvent;

// A(B(D), C) lays out to 610×120 plus 40 padding on each side.
const CONTENT: Size = Size::new(690.0, 200.0);

fn sample() -> ConceptTree {
    ConceptTree::new(ConceptNode::with_children(
        "A",
        [
            ConceptNode::with_children("B", [ConceptNode::new("D")]),
            ConceptNode::new("C"),
        ],
    ))
    .unwrap()
}

fn b_key() -> NodeKey {
    NodeKey::Path(NodePath::from_indices([0]))
}

/// A map whose surface matches the content, so screen and content coincide.
fn map() -> ConceptMap {
    let mut map = ConceptMap::new(CONTENT);
    map.set_tree(sample());
    map
}

fn label_at(map: &mut ConceptMap, key: &NodeKey) -> Option<(f64, f64)> {
    map.layout()?.find(key).map(|node| (node.x, node.y))
}

#[test]
fn set_tree_fits_the_camera_to_the_content() {
    let mut map = map();
    assert_eq!(
        map.camera().viewport(),
        ViewportState::new(0.0, 0.0, CONTENT.width, CONTENT.height)
    );
    let layout = map.layout().unwrap();
    assert_eq!(layout.content_size(), CONTENT);
    assert_eq!(layout.len(), 4);
}

#[test]
fn collapsing_a_branch_hides_it_and_recenters_the_parent() {
    let mut map = map();
    assert_eq!(label_at(&mut map, &NodeKey::Path(NodePath::root())), Some((40.0, 75.0)));

    assert_eq!(map.toggle(&b_key()), Some(true));
    assert!(map.is_collapsed(&b_key()));

    let layout = map.layout().unwrap();
    assert_eq!(layout.len(), 3);
    let labels: Vec<&str> = layout.nodes().map(|n| &*n.label).collect();
    assert_eq!(labels, ["A", "B", "C"]);
    let c = &layout.root.children[1];
    assert_eq!(c.y, 40.0 + 70.0);
    assert_eq!(layout.root.y, 75.0);

    assert_eq!(map.toggle(&b_key()), Some(false));
    assert_eq!(map.layout().unwrap().len(), 4);
}

#[test]
fn toggling_leaves_or_unknown_keys_is_inert() {
    let mut map = map();
    let c = NodeKey::Path(NodePath::from_indices([1]));
    assert_eq!(map.toggle(&c), None);
    assert_eq!(map.toggle(&NodeKey::Path(NodePath::from_indices([7, 2]))), None);
    assert_eq!(map.toggle(&NodeKey::Label("B".into())), None);
    assert!(map.collapse_state().is_empty());
    assert!(!map.needs_layout());
}

#[test]
fn toggle_affordance_is_hit_in_screen_space() {
    let mut map = map();
    let style = DisplayStyle::default();

    // B's affordance sits on the right-edge midpoint of its box.
    assert_eq!(map.toggle_at(Point::new(420.0, 65.0), &style), Some(b_key()));
    assert!(map.is_collapsed(&b_key()));

    // Inside C's box but away from any affordance.
    assert_eq!(map.toggle_at(Point::new(300.0, 135.0), &style), None);
    assert_eq!(
        map.node_at(Point::new(300.0, 135.0)),
        Some(NodeKey::Path(NodePath::from_indices([1])))
    );

    assert_eq!(map.toggle_at(Point::new(420.0, 65.0), &style), Some(b_key()));
    assert!(!map.is_collapsed(&b_key()));
}

#[test]
fn hit_testing_follows_the_camera() {
    let mut map = map();
    let style = DisplayStyle::default();
    map.handle_pointer(PointerEvent::Down(Point::new(10.0, 10.0)));
    map.handle_pointer(PointerEvent::Move(Point::new(20.0, 30.0)));
    map.handle_pointer(PointerEvent::Up(Point::new(20.0, 30.0)));

    // The content moved right and down with the drag.
    assert_eq!(map.toggle_at(Point::new(430.0, 85.0), &style), Some(b_key()));
}

#[test]
fn camera_motion_does_not_invalidate_layout() {
    let mut map = map();
    map.layout();
    map.handle_pointer(PointerEvent::Down(Point::new(0.0, 0.0)));
    map.handle_pointer(PointerEvent::Move(Point::new(50.0, 25.0)));
    map.handle_pointer(PointerEvent::Wheel {
        position: Point::new(300.0, 100.0),
        delta: -1.0,
    });
    assert!(!map.needs_layout());
    assert!(map.interaction().is_panning());
}

#[test]
fn update_tree_keeps_collapse_state_and_camera() {
    let mut map = map();
    map.toggle(&b_key());
    map.handle_pointer(PointerEvent::Wheel {
        position: Point::new(100.0, 100.0),
        delta: -1.0,
    });
    let viewport = map.camera().viewport();

    let grown = ConceptTree::new(ConceptNode::with_children(
        "A",
        [
            ConceptNode::with_children("B", [ConceptNode::new("D"), ConceptNode::new("E")]),
            ConceptNode::new("C"),
            ConceptNode::new("F"),
        ],
    ))
    .unwrap();
    map.update_tree(grown);
    assert!(map.needs_layout());
    assert!(map.is_collapsed(&b_key()));
    assert_eq!(map.camera().viewport(), viewport);
    // B stays collapsed, so D and E are hidden.
    assert_eq!(map.layout().unwrap().len(), 4);
}

#[test]
fn update_tree_carries_collapse_state_by_label() {
    let mut map = map();
    map.toggle(&b_key());

    // A sibling inserted before B shifts it to index 1.
    let inserted = ConceptTree::new(ConceptNode::with_children(
        "A",
        [
            ConceptNode::new("X"),
            ConceptNode::with_children("B", [ConceptNode::new("D")]),
            ConceptNode::new("C"),
        ],
    ))
    .unwrap();
    map.update_tree(inserted);

    let moved_b = NodeKey::Path(NodePath::from_indices([1]));
    assert!(map.is_collapsed(&moved_b));
    assert!(!map.is_collapsed(&b_key()));
    let labels: Vec<&str> = map.layout().unwrap().nodes().map(|n| &*n.label).collect();
    assert_eq!(labels, ["A", "X", "B", "C"]);

    // Renaming the collapsed node drops its state.
    let renamed = ConceptTree::new(ConceptNode::with_children(
        "A",
        [
            ConceptNode::new("X"),
            ConceptNode::with_children("Beta", [ConceptNode::new("D")]),
            ConceptNode::new("C"),
        ],
    ))
    .unwrap();
    map.update_tree(renamed);
    assert!(map.collapse_state().is_empty());
    assert_eq!(map.layout().unwrap().len(), 5);
}

#[test]
fn set_tree_starts_fresh() {
    let mut map = map();
    map.toggle(&b_key());
    map.handle_pointer(PointerEvent::Wheel {
        position: Point::new(100.0, 100.0),
        delta: -1.0,
    });
    map.handle_pointer(PointerEvent::Down(Point::new(5.0, 5.0)));

    map.set_tree(sample());
    assert!(map.collapse_state().is_empty());
    assert!(!map.interaction().is_panning());
    assert_eq!(map.camera().zoom(), 1.0);
}

#[test]
fn reset_view_refits_after_zooming() {
    let mut map = map();
    for _ in 0..3 {
        map.handle_pointer(PointerEvent::Wheel {
            position: Point::new(200.0, 50.0),
            delta: -1.0,
        });
    }
    assert!(map.camera().zoom() > 1.0);
    map.reset_view();
    assert_eq!(
        map.camera().viewport(),
        ViewportState::new(0.0, 0.0, CONTENT.width, CONTENT.height)
    );
}

#[test]
fn clear_tree_drops_everything() {
    let mut map = map();
    map.toggle(&b_key());
    map.clear_tree();
    assert!(map.tree().is_none());
    assert!(map.layout().is_none());
    assert!(map.display_list(&DisplayStyle::default()).is_none());
    assert!(map.collapse_state().is_empty());
    assert_eq!(map.toggle(&b_key()), None);
}

#[test]
fn degenerate_surface_ignores_screen_queries() {
    let mut map = map();
    map.set_surface_size(Size::ZERO);
    let style = DisplayStyle::default();
    assert_eq!(map.toggle_at(Point::new(420.0, 65.0), &style), None);
    assert_eq!(map.node_at(Point::new(60.0, 90.0)), None);
    assert!(!map.handle_pointer(PointerEvent::Down(Point::new(1.0, 1.0))).is_changed());
}

#[cfg(feature = "json")]
#[test]
fn json_trees_accept_topic_or_label() {
    let mut map = ConceptMap::new(Size::new(800.0, 600.0));
    map.set_tree_json(r#"{"topic":"Root","children":[{"label":"Child"}]}"#)
        .unwrap();
    let layout = map.layout().unwrap();
    assert_eq!(layout.len(), 2);
    assert_eq!(&*layout.root.children[0].label, "Child");

    assert!(map.set_tree_json(r#"{"topic":"   "}"#).is_err());
    assert!(map.set_tree_json("not json").is_err());
    // Failed loads keep the previous tree.
    assert_eq!(map.tree().unwrap().root().label(), "Root");
}
