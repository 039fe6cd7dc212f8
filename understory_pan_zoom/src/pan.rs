// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag-to-pan lifecycle.
//!
//! ## Usage
//!
//! 1) On button press, call [`PanZoomState::pointer_down`]. The content point
//!    under the pointer is captured as the pan anchor.
//! 2) On each move, call [`PanZoomState::pointer_move`]; while panning, the
//!    screen delta since the previous event pans the camera.
//! 3) On release or when the pointer leaves the surface, call
//!    [`PanZoomState::pointer_up`] / [`PanZoomState::pointer_leave`].
//! 4) Wheel input goes to [`PanZoomState::wheel`] at any time.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::{Point, Size};
//! use understory_camera2d::Camera2D;
//! use understory_pan_zoom::PanZoomState;
//!
//! let mut camera = Camera2D::new(Size::new(200.0, 100.0));
//! camera.reset(200.0, 100.0);
//! let mut pan = PanZoomState::new();
//!
//! pan.pointer_down(Point::new(10.0, 10.0), &camera);
//! assert!(pan.is_panning());
//!
//! pan.pointer_move(Point::new(30.0, 15.0), &mut camera);
//! assert_eq!(camera.viewport().x, -20.0);
//! assert_eq!(camera.viewport().y, -5.0);
//!
//! pan.pointer_up();
//! assert!(!pan.is_panning());
//! ```

use kurbo::Point;
use understory_camera2d::{Camera2D, ZoomDirection};

use crate::event::{Outcome, PointerEvent};

/// Current phase of the interaction.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InteractionState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A drag is panning the camera.
    Panning {
        /// Content point under the pointer when the drag started.
        anchor: Point,
        /// Screen position of the previous pointer event.
        last: Point,
    },
}

/// Routes pointer input into camera pans and zooms.
///
/// The machine holds only the drag lifecycle; the camera is passed in on each
/// call so one state machine never outlives or aliases the camera it drives.
#[derive(Clone, Copy, Debug, Default)]
pub struct PanZoomState {
    state: InteractionState,
}

impl PanZoomState {
    /// Creates an idle state machine.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: InteractionState::Idle,
        }
    }

    /// Returns the current phase.
    #[must_use]
    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// Returns `true` while a drag is in progress.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.state, InteractionState::Panning { .. })
    }

    /// Returns the content-space point captured when the current drag started.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        match self.state {
            InteractionState::Panning { anchor, .. } => Some(anchor),
            InteractionState::Idle => None,
        }
    }

    /// Dispatches `event` to the matching handler.
    pub fn handle(&mut self, event: PointerEvent, camera: &mut Camera2D) -> Outcome {
        match event {
            PointerEvent::Down(position) => self.pointer_down(position, camera),
            PointerEvent::Move(position) => self.pointer_move(position, camera),
            PointerEvent::Up(_) => self.pointer_up(),
            PointerEvent::Leave => self.pointer_leave(),
            PointerEvent::Wheel { position, delta } => self.wheel(position, delta, camera),
        }
    }

    /// Starts a drag at `position`.
    ///
    /// A press while already panning restarts the drag from the new position.
    /// Stays idle while the camera surface is degenerate.
    pub fn pointer_down(&mut self, position: Point, camera: &Camera2D) -> Outcome {
        let Some(anchor) = camera.screen_to_content(position) else {
            return Outcome::NONE;
        };
        let was_panning = self.is_panning();
        self.state = InteractionState::Panning {
            anchor,
            last: position,
        };
        tracing::trace!(x = anchor.x, y = anchor.y, "pan started");
        Outcome {
            viewport_changed: false,
            state_changed: !was_panning,
        }
    }

    /// Pans by the screen delta since the previous event, if a drag is active.
    pub fn pointer_move(&mut self, position: Point, camera: &mut Camera2D) -> Outcome {
        let InteractionState::Panning { anchor, last } = self.state else {
            return Outcome::NONE;
        };
        let before = camera.viewport();
        camera.pan_by_screen(position - last);
        self.state = InteractionState::Panning {
            anchor,
            last: position,
        };
        Outcome {
            viewport_changed: camera.viewport() != before,
            state_changed: false,
        }
    }

    /// Ends the drag.
    pub fn pointer_up(&mut self) -> Outcome {
        self.end()
    }

    /// Ends the drag when the pointer leaves the surface.
    pub fn pointer_leave(&mut self) -> Outcome {
        self.end()
    }

    /// Zooms one step about the content point under `position`.
    ///
    /// Does not change the drag phase. A drag in progress continues from its
    /// previous screen position against the zoomed camera.
    pub fn wheel(&mut self, position: Point, delta: f64, camera: &mut Camera2D) -> Outcome {
        let Some(direction) = ZoomDirection::from_wheel_delta(delta) else {
            return Outcome::NONE;
        };
        let before = camera.viewport();
        camera.zoom_at_screen(position, direction);
        Outcome {
            viewport_changed: camera.viewport() != before,
            state_changed: false,
        }
    }

    fn end(&mut self) -> Outcome {
        if !self.is_panning() {
            return Outcome::NONE;
        }
        self.state = InteractionState::Idle;
        tracing::trace!("pan ended");
        Outcome {
            viewport_changed: false,
            state_changed: true,
        }
    }
}
