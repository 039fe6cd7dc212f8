// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec;

use kurbo::{Point, Size};
use understory_camera2d::Camera2D;
use understory_concept_display::{DisplayList, DisplayStyle, Hit};
use understory_concept_tree::{CollapseState, ConceptNode, ConceptTree, KeyStrategy, NodeKey};
use understory_pan_zoom::{Outcome, PanZoomState, PointerEvent};
use understory_tree_layout::{LayoutConfig, LayoutResult};

/// Revisions of the layout inputs at the time of a layout pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Stamp {
    input: u64,
    collapse: u64,
}

/// View state for one concept map.
///
/// Owns the source tree, its collapse state, the last layout, the camera, and
/// the pan/zoom interaction. Layout is recomputed lazily: mutations only bump
/// revisions, and [`ConceptMap::layout`] re-runs the pass when they differ
/// from the ones it last saw. Camera motion never invalidates the layout.
#[derive(Clone, Debug)]
pub struct ConceptMap {
    config: LayoutConfig,
    tree: Option<ConceptTree>,
    input_revision: u64,
    collapsed: CollapseState,
    layout: Option<LayoutResult>,
    laid_out: Option<Stamp>,
    camera: Camera2D,
    interaction: PanZoomState,
}

impl ConceptMap {
    /// Creates an empty map for a surface of the given size.
    #[must_use]
    pub fn new(surface: Size) -> Self {
        Self::with_config(surface, LayoutConfig::default())
    }

    /// Creates an empty map with custom layout geometry.
    #[must_use]
    pub fn with_config(surface: Size, config: LayoutConfig) -> Self {
        Self {
            config,
            tree: None,
            input_revision: 0,
            collapsed: CollapseState::new(),
            layout: None,
            laid_out: None,
            camera: Camera2D::new(surface),
            interaction: PanZoomState::new(),
        }
    }

    /// Shows a new tree.
    ///
    /// Expands every node, cancels any drag in progress, lays the tree out,
    /// and fits the camera to the new content.
    pub fn set_tree(&mut self, tree: ConceptTree) {
        self.tree = Some(tree);
        self.input_revision += 1;
        self.collapsed.clear();
        self.interaction = PanZoomState::new();
        self.reset_view();
    }

    /// Parses and shows a tree from its JSON form.
    ///
    /// On error the current tree is left untouched.
    #[cfg(feature = "json")]
    pub fn set_tree_json(&mut self, json: &str) -> Result<(), understory_concept_tree::TreeError> {
        let tree = ConceptTree::from_json(json)?;
        self.set_tree(tree);
        Ok(())
    }

    /// Replaces the tree while keeping the collapse state and the camera.
    ///
    /// With path keys, each collapsed node is carried over to the node with
    /// the same chain of labels in the new tree (see
    /// [`NodePath::rebase`](understory_concept_tree::NodePath::rebase)), so
    /// inserting or removing siblings does not move collapse state onto other
    /// nodes. Keys with no match are dropped. Label keys are kept as they are.
    /// The next [`ConceptMap::layout`] call re-runs the pass.
    pub fn update_tree(&mut self, tree: ConceptTree) {
        if let (KeyStrategy::Path, Some(old)) = (self.config.key_strategy, self.tree.as_ref()) {
            let rebased: CollapseState = self
                .collapsed
                .iter()
                .filter_map(|key| key.as_path()?.rebase(old.root(), tree.root()))
                .map(NodeKey::Path)
                .collect();
            if rebased != self.collapsed {
                tracing::trace!(
                    kept = rebased.len(),
                    dropped = self.collapsed.len() - rebased.len(),
                    "collapse state carried over to edited tree"
                );
                self.collapsed.clear();
                self.collapsed.extend(rebased.iter().cloned());
            }
        }
        self.tree = Some(tree);
        self.input_revision += 1;
    }

    /// Removes the tree, its layout, and all collapse state.
    pub fn clear_tree(&mut self) {
        self.tree = None;
        self.input_revision += 1;
        self.collapsed.clear();
        self.layout = None;
        self.laid_out = None;
        self.interaction = PanZoomState::new();
    }

    /// Returns the current tree, if any.
    #[must_use]
    pub fn tree(&self) -> Option<&ConceptTree> {
        self.tree.as_ref()
    }

    /// Returns the layout geometry.
    #[must_use]
    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Replaces the layout geometry.
    ///
    /// Switching the key strategy expands everything, since keys of one
    /// strategy never match nodes under the other.
    pub fn set_config(&mut self, config: LayoutConfig) {
        if config == self.config {
            return;
        }
        if config.key_strategy != self.config.key_strategy {
            self.collapsed.clear();
        }
        self.config = config;
        self.input_revision += 1;
    }

    /// Returns the collapse state.
    #[must_use]
    pub fn collapse_state(&self) -> &CollapseState {
        &self.collapsed
    }

    /// Flips the collapse state of the node named by `key`.
    ///
    /// Returns whether the node is now collapsed, or `None` without changing
    /// anything if `key` does not name a node with children in the current tree.
    pub fn toggle(&mut self, key: &NodeKey) -> Option<bool> {
        let tree = self.tree.as_ref()?;
        if !names_parent(tree.root(), key, self.config.key_strategy) {
            tracing::trace!(%key, "ignored toggle of unknown node");
            return None;
        }
        let collapsed = self.collapsed.toggle(key.clone());
        tracing::trace!(%key, collapsed, "node toggled");
        Some(collapsed)
    }

    /// Returns `true` if `key` is collapsed.
    #[must_use]
    pub fn is_collapsed(&self, key: &NodeKey) -> bool {
        self.collapsed.is_collapsed(key)
    }

    /// Expands every node.
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Returns `true` if the next [`ConceptMap::layout`] call will re-run the pass.
    #[must_use]
    pub fn needs_layout(&self) -> bool {
        self.tree.is_some() && (self.layout.is_none() || self.laid_out != Some(self.stamp()))
    }

    /// Returns the layout of the current tree, re-running the pass if the tree,
    /// the geometry, or the collapse state changed since the last call.
    ///
    /// Any number of toggles between two calls costs a single pass.
    pub fn layout(&mut self) -> Option<&LayoutResult> {
        let tree = self.tree.as_ref()?;
        let stamp = self.stamp();
        if self.layout.is_none() || self.laid_out != Some(stamp) {
            self.layout = Some(understory_tree_layout::layout_tree(
                tree,
                &self.collapsed,
                &self.config,
            ));
            self.laid_out = Some(stamp);
        }
        self.layout.as_ref()
    }

    /// Fits the camera to the current content.
    ///
    /// Does nothing without a tree.
    pub fn reset_view(&mut self) {
        if let Some(size) = self.layout().map(LayoutResult::content_size) {
            self.camera.reset(size.width, size.height);
        }
    }

    /// Sets the drawing surface size.
    ///
    /// The viewport is kept; call [`ConceptMap::reset_view`] to fit again.
    pub fn set_surface_size(&mut self, size: Size) {
        self.camera.set_surface_size(size);
    }

    /// Returns the camera.
    #[must_use]
    pub fn camera(&self) -> &Camera2D {
        &self.camera
    }

    /// Returns the camera for configuration such as zoom limits.
    pub fn camera_mut(&mut self) -> &mut Camera2D {
        &mut self.camera
    }

    /// Returns the pan/zoom interaction state.
    #[must_use]
    pub fn interaction(&self) -> &PanZoomState {
        &self.interaction
    }

    /// Feeds a screen-space pointer event to the pan/zoom state machine.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Outcome {
        self.interaction.handle(event, &mut self.camera)
    }

    /// Builds the drawables for the current layout.
    pub fn display_list(&mut self, style: &DisplayStyle) -> Option<DisplayList> {
        self.layout().map(|layout| DisplayList::build(layout, style))
    }

    /// Returns the key of the node box under a screen point.
    pub fn node_at(&mut self, screen: Point) -> Option<NodeKey> {
        let content = self.camera.screen_to_content(screen)?;
        self.layout()?.node_at(content).map(|node| node.key.clone())
    }

    /// Toggles the node whose collapse affordance is under a screen point.
    ///
    /// Returns the toggled key; points elsewhere, including on a node box
    /// outside its affordance, change nothing.
    pub fn toggle_at(&mut self, screen: Point, style: &DisplayStyle) -> Option<NodeKey> {
        let content = self.camera.screen_to_content(screen)?;
        let list = DisplayList::build(self.layout()?, style);
        let Some(Hit::Toggle(toggle)) = list.hit_test(content) else {
            return None;
        };
        let key = toggle.key.clone();
        let collapsed = self.collapsed.toggle(key.clone());
        tracing::trace!(%key, collapsed, "node toggled");
        Some(key)
    }

    fn stamp(&self) -> Stamp {
        Stamp {
            input: self.input_revision,
            collapse: self.collapsed.revision(),
        }
    }
}

/// Returns `true` if `key`, under `strategy`, names a node that has children.
fn names_parent(root: &ConceptNode, key: &NodeKey, strategy: KeyStrategy) -> bool {
    match (key, strategy) {
        (NodeKey::Path(path), KeyStrategy::Path) => root
            .descendant(path.indices())
            .is_some_and(ConceptNode::has_children),
        (NodeKey::Label(label), KeyStrategy::Label) => {
            let mut stack = vec![root];
            while let Some(node) = stack.pop() {
                if node.has_children() && node.label() == &**label {
                    return true;
                }
                stack.extend(node.children());
            }
            false
        }
        _ => false,
    }
}
