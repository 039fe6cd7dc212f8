// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;
use understory_concept_tree::KeyStrategy;

/// Default width of every node box, in content units.
pub const NODE_WIDTH: f64 = 150.0;
/// Default height of every node box, in content units.
pub const NODE_HEIGHT: f64 = 50.0;
/// Default gap between a node box and the boxes of its children.
pub const HORIZONTAL_SPACING: f64 = 80.0;
/// Default gap between stacked sibling subtrees.
pub const VERTICAL_SPACING: f64 = 20.0;
/// Default margin around the laid-out content on every side.
pub const PADDING: f64 = 40.0;

/// Geometry and identity settings shared by layout and rendering.
///
/// All lengths are in content units and are expected to be finite and
/// non-negative, with a positive node size.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LayoutConfig {
    /// Width of every node box.
    pub node_width: f64,
    /// Height of every node box.
    pub node_height: f64,
    /// Horizontal gap between depth columns.
    pub horizontal_spacing: f64,
    /// Vertical gap between sibling subtrees.
    pub vertical_spacing: f64,
    /// Margin added around the content bounding box.
    pub padding: f64,
    /// How collapse-state keys are derived for each node.
    pub key_strategy: KeyStrategy,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            node_width: NODE_WIDTH,
            node_height: NODE_HEIGHT,
            horizontal_spacing: HORIZONTAL_SPACING,
            vertical_spacing: VERTICAL_SPACING,
            padding: PADDING,
            key_strategy: KeyStrategy::default(),
        }
    }
}

impl LayoutConfig {
    /// Returns the size of a node box.
    #[must_use]
    pub fn node_size(&self) -> Size {
        Size::new(self.node_width, self.node_height)
    }

    /// Returns the horizontal distance between consecutive depth columns.
    #[must_use]
    pub fn column_step(&self) -> f64 {
        self.node_width + self.horizontal_spacing
    }

    /// Returns the pre-translation `x` of nodes at `depth`.
    #[must_use]
    pub fn column_x(&self, depth: usize) -> f64 {
        depth as f64 * self.column_step()
    }

    /// Returns a copy using `strategy` for node keys.
    #[must_use]
    pub fn with_key_strategy(mut self, strategy: KeyStrategy) -> Self {
        self.key_strategy = strategy;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::{LayoutConfig, NODE_HEIGHT, NODE_WIDTH};

    #[test]
    fn defaults_match_constants() {
        let config = LayoutConfig::default();
        assert_eq!(config.node_size().width, NODE_WIDTH);
        assert_eq!(config.node_size().height, NODE_HEIGHT);
        assert_eq!(config.column_step(), 230.0);
        assert_eq!(config.column_x(2), 460.0);
    }
}
