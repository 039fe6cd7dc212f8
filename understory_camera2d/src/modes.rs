// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Clamp behavior for panning relative to the content rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not apply any clamping; the camera may move freely.
    #[default]
    None,
    /// Clamp so that the camera never moves completely off the content.
    ///
    /// After a pan or zoom, the viewport is shifted back until it at least
    /// touches the content rectangle recorded by the last reset.
    KeepSomeVisible,
}

/// How [`crate::Camera2D::reset`] maps the content onto the surface.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitMode {
    /// Show exactly the content rectangle, scaling each axis independently.
    ///
    /// Content is distorted when its aspect ratio differs from the surface's.
    #[default]
    Stretch,
    /// Show the whole content at a uniform scale, centered.
    ///
    /// The viewport grows along one axis to match the surface aspect ratio.
    /// Falls back to [`FitMode::Stretch`] while the surface is degenerate.
    Contain,
}

/// Direction of a single zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomDirection {
    /// Show less content: the viewport shrinks by the zoom factor.
    In,
    /// Show more content: the viewport grows by the zoom factor.
    Out,
}

impl ZoomDirection {
    /// Maps a wheel delta to a direction: positive zooms out, negative zooms in.
    ///
    /// Returns `None` for zero or non-finite deltas.
    #[must_use]
    pub fn from_wheel_delta(delta: f64) -> Option<Self> {
        if !delta.is_finite() || delta == 0.0 {
            None
        } else if delta > 0.0 {
            Some(Self::Out)
        } else {
            Some(Self::In)
        }
    }

    /// Returns `+1` for [`ZoomDirection::Out`] and `-1` for [`ZoomDirection::In`].
    #[must_use]
    pub fn signum(self) -> i8 {
        match self {
            Self::In => -1,
            Self::Out => 1,
        }
    }
}
