// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

/// Raw pointer input in screen coordinates, relative to the drawing surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    /// A button was pressed.
    Down(Point),
    /// The pointer moved.
    Move(Point),
    /// The button was released.
    Up(Point),
    /// The pointer left the surface.
    Leave,
    /// A wheel or trackpad scroll at the given position.
    ///
    /// Positive `delta` zooms out, negative zooms in.
    Wheel {
        /// Pointer position when the wheel turned.
        position: Point,
        /// Vertical scroll delta; only its sign is used.
        delta: f64,
    },
}

/// What an input event changed, so callers can decide whether to redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Outcome {
    /// The camera viewport moved or changed size.
    pub viewport_changed: bool,
    /// The interaction moved between idle and panning.
    pub state_changed: bool,
}

impl Outcome {
    /// Nothing changed.
    pub const NONE: Self = Self {
        viewport_changed: false,
        state_changed: false,
    };

    /// Returns `true` if anything changed.
    #[must_use]
    pub fn is_changed(self) -> bool {
        self.viewport_changed || self.state_changed
    }
}
