// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_camera2d --heading-base-level=0

//! Understory Camera 2D: a content-space camera rectangle over a drawing surface.
//!
//! Where a uniform pan+zoom viewport stores a scale and an offset, this crate
//! stores the camera itself: a rectangle in content coordinates
//! ([`ViewportState`]) that is stretched over the whole drawing surface. That
//! matches simple scroll/zoom semantics for diagrams such as concept maps:
//! - "Fit everything" is just `viewport = content rect`.
//! - X and Y scale independently; nothing letterboxes unless asked to
//!   ([`FitMode::Contain`]).
//!
//! It does **not** know what the content is. Callers are expected to:
//! - Lay out their content elsewhere and call [`Camera2D::reset`] with its size.
//! - Feed pointer deltas into [`Camera2D::pan_by_screen`] and wheel steps
//!   into [`Camera2D::zoom_at`].
//! - Draw through [`Camera2D::content_to_screen_transform`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use understory_camera2d::{Camera2D, ZoomDirection};
//!
//! let mut camera = Camera2D::new(Size::new(800.0, 600.0));
//! camera.reset(1200.0, 900.0);
//!
//! // Drag the content 40 pixels to the right.
//! camera.pan_by_screen(Vec2::new(40.0, 0.0));
//!
//! // Zoom in one step about the point under the cursor.
//! let cursor = Point::new(400.0, 300.0);
//! let under = camera.screen_to_content(cursor).unwrap();
//! camera.zoom_at(under, ZoomDirection::In);
//! let still_under = camera.screen_to_content(cursor).unwrap();
//! assert!((still_under.x - under.x).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - Panning is expressed in screen units and scaled into content units.
//! - Zooming is a fixed multiplicative step about an anchor point.
//! - Every operation is total: zero-size surfaces and non-finite input leave
//!   the camera untouched.
//!
//! This crate is `no_std`.

#![no_std]

mod camera;
mod modes;

pub use camera::{Camera2D, Camera2DDebugInfo, DEFAULT_ZOOM_FACTOR, ViewportState};
pub use modes::{ClampMode, FitMode, ZoomDirection};
