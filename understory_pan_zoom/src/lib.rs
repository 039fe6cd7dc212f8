// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom --heading-base-level=0

//! Understory Pan Zoom: a pointer state machine driving a [`Camera2D`](understory_camera2d::Camera2D).
//!
//! Many canvas-style views share the same two gestures: drag anywhere to pan,
//! scroll to zoom about the cursor. [`PanZoomState`] tracks the drag lifecycle
//! (`Idle` → `Panning` → `Idle`) and turns raw screen-space pointer input into
//! camera calls. Wheel input zooms regardless of the drag phase and never
//! changes it.
//!
//! The crate does not assume a UI toolkit. Translate your toolkit's events into
//! [`PointerEvent`]s (or call the per-event methods directly) and redraw when
//! the returned [`Outcome`] reports a change.
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_camera2d::Camera2D;
//! use understory_pan_zoom::{PanZoomState, PointerEvent};
//!
//! let mut camera = Camera2D::new(Size::new(800.0, 600.0));
//! camera.reset(800.0, 600.0);
//! let mut input = PanZoomState::new();
//!
//! for event in [
//!     PointerEvent::Down(Point::new(100.0, 100.0)),
//!     PointerEvent::Move(Point::new(140.0, 90.0)),
//!     PointerEvent::Up(Point::new(140.0, 90.0)),
//!     PointerEvent::Wheel { position: Point::new(400.0, 300.0), delta: -1.0 },
//! ] {
//!     if input.handle(event, &mut camera).is_changed() {
//!         // request a redraw
//!     }
//! }
//! assert!(camera.zoom() > 1.0);
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod event;
mod pan;

pub use event::{Outcome, PointerEvent};
pub use pan::{InteractionState, PanZoomState};
