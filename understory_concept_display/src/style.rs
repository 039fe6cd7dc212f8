// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::Color;

/// Colors and dimensions used when building a [`crate::DisplayList`].
///
/// Lengths are in content units, so they scale with the camera.
#[derive(Clone, Copy, Debug)]
pub struct DisplayStyle {
    /// Fill of the root node box.
    pub root_fill: Color,
    /// Label color on the root node.
    pub root_text: Color,
    /// Fill of every other node box.
    pub node_fill: Color,
    /// Outline of every other node box.
    pub node_stroke: Color,
    /// Label color on every other node.
    pub node_text: Color,
    /// Width of node outlines.
    pub stroke_width: f64,
    /// Corner radius of node boxes.
    pub corner_radius: f64,
    /// Color of edge curves.
    pub edge_color: Color,
    /// Width of edge curves.
    pub edge_width: f64,
    /// Radius of the collapse/expand affordance.
    pub toggle_radius: f64,
    /// Fill of the collapse/expand affordance.
    pub toggle_fill: Color,
}

impl Default for DisplayStyle {
    fn default() -> Self {
        Self {
            root_fill: Color::from_rgba8(168, 85, 247, 255),
            root_text: Color::WHITE,
            node_fill: Color::WHITE,
            node_stroke: Color::from_rgba8(226, 232, 240, 255),
            node_text: Color::from_rgba8(30, 41, 59, 255),
            stroke_width: 1.0,
            corner_radius: 8.0,
            edge_color: Color::from_rgba8(203, 213, 225, 255),
            edge_width: 2.0,
            toggle_radius: 8.0,
            toggle_fill: Color::from_rgba8(99, 102, 241, 255),
        }
    }
}
