// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size, Vec2};

use crate::modes::{ClampMode, FitMode, ZoomDirection};

/// Multiplicative step applied by one [`Camera2D::zoom_at`] call.
pub const DEFAULT_ZOOM_FACTOR: f64 = 1.1;

/// The camera rectangle, in content coordinates.
///
/// This rectangle is mapped onto the whole drawing surface. Width and height
/// are always positive; the aspect ratio need not match the surface.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportState {
    /// Left edge in content coordinates.
    pub x: f64,
    /// Top edge in content coordinates.
    pub y: f64,
    /// Width in content units.
    pub width: f64,
    /// Height in content units.
    pub height: f64,
}

impl ViewportState {
    /// Creates a viewport state. Callers are responsible for positive extents.
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns the viewport as a content-space rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.x + self.width, self.y + self.height)
    }

    /// Returns the viewport extent.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && is_positive_finite(self.width)
            && is_positive_finite(self.height)
    }
}

/// Camera over a content plane, shown on a fixed-size drawing surface.
///
/// `Camera2D` owns a [`ViewportState`] and supports:
/// - Drag panning, where content follows the pointer.
/// - Cursor-anchored zoom: the content point under the cursor stays put on screen.
/// - Fitting the whole content, via [`Camera2D::reset`].
/// - Converting between screen and content coordinates.
///
/// Screen coordinates are relative to the surface origin. Every operation is
/// total: degenerate input (zero-size surfaces, non-finite values, empty content)
/// leaves the camera unchanged instead of producing `NaN` or infinities.
#[derive(Clone, Debug)]
pub struct Camera2D {
    viewport: ViewportState,
    surface: Size,
    content: Option<Rect>,
    reference: Size,
    zoom_factor: f64,
    min_zoom: f64,
    max_zoom: f64,
    clamp_mode: ClampMode,
    fit_mode: FitMode,
}

impl Default for Camera2D {
    fn default() -> Self {
        Self::new(Size::ZERO)
    }
}

impl Camera2D {
    /// Creates a camera for a surface of the given size.
    ///
    /// - The initial viewport shows content `(0, 0)` to the surface size, or a
    ///   unit square if the surface is degenerate.
    /// - The zoom factor is [`DEFAULT_ZOOM_FACTOR`].
    /// - Zoom is limited to `[1e-3, 1e3]` relative to the last reset.
    #[must_use]
    pub fn new(surface: Size) -> Self {
        let surface = sanitize_surface(surface).unwrap_or(Size::ZERO);
        let viewport = if is_positive_finite(surface.width) && is_positive_finite(surface.height) {
            ViewportState::new(0.0, 0.0, surface.width, surface.height)
        } else {
            ViewportState::new(0.0, 0.0, 1.0, 1.0)
        };
        Self {
            viewport,
            surface,
            content: None,
            reference: viewport.size(),
            zoom_factor: DEFAULT_ZOOM_FACTOR,
            min_zoom: 1e-3,
            max_zoom: 1e3,
            clamp_mode: ClampMode::default(),
            fit_mode: FitMode::default(),
        }
    }

    /// Returns the current viewport.
    #[must_use]
    pub fn viewport(&self) -> ViewportState {
        self.viewport
    }

    /// Replaces the viewport, for example to restore a saved camera.
    ///
    /// Ignored unless the position is finite and both extents are positive.
    pub fn set_viewport(&mut self, viewport: ViewportState) {
        if viewport.is_valid() {
            self.viewport = viewport;
        }
    }

    /// Returns the drawing surface size in screen units.
    #[must_use]
    pub fn surface_size(&self) -> Size {
        self.surface
    }

    /// Sets the drawing surface size.
    ///
    /// The viewport is left as is: resizing the surface stretches the same
    /// content over the new area. Negative or non-finite sizes are ignored; a
    /// zero size is accepted and disables conversions until it grows.
    pub fn set_surface_size(&mut self, size: Size) {
        if let Some(size) = sanitize_surface(size) {
            self.surface = size;
        }
    }

    /// Returns the content rectangle recorded by the last reset, if any.
    #[must_use]
    pub fn content_rect(&self) -> Option<Rect> {
        self.content
    }

    /// Returns the zoom level relative to the last reset.
    ///
    /// `1.0` right after a reset; greater than one when zoomed in.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.reference.width / self.viewport.width
    }

    /// Returns the multiplicative step used by [`Camera2D::zoom_at`].
    #[must_use]
    pub fn zoom_factor(&self) -> f64 {
        self.zoom_factor
    }

    /// Sets the zoom step. Ignored unless finite and greater than `1.0`.
    pub fn set_zoom_factor(&mut self, factor: f64) {
        if factor.is_finite() && factor > 1.0 {
            self.zoom_factor = factor;
        }
    }

    /// Returns the `(min, max)` zoom limits.
    #[must_use]
    pub fn zoom_limits(&self) -> (f64, f64) {
        (self.min_zoom, self.max_zoom)
    }

    /// Sets the minimum and maximum zoom levels, relative to the last reset.
    ///
    /// The range is normalized so that `min <= max`; limits that are not
    /// positive and finite are ignored. If the current zoom falls outside the
    /// new range, the viewport is rescaled about its center.
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        if !is_positive_finite(min_zoom) || !is_positive_finite(max_zoom) {
            return;
        }
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;

        let zoom = self.zoom();
        let clamped = zoom.clamp(min_zoom, max_zoom);
        if clamped != zoom {
            let ratio = zoom / clamped;
            let center = self.viewport.rect().center();
            self.scale_about(
                center,
                self.viewport.width * ratio,
                self.viewport.height * ratio,
            );
            self.clamp_to_content();
        }
    }

    /// Sets the clamp mode for panning and zooming relative to the content.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        if self.clamp_mode != mode {
            self.clamp_mode = mode;
            self.clamp_to_content();
        }
    }

    /// Returns the current clamp mode.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets how [`Camera2D::reset`] maps content onto the surface.
    pub fn set_fit_mode(&mut self, mode: FitMode) {
        self.fit_mode = mode;
    }

    /// Returns the current fit mode.
    #[must_use]
    pub fn fit_mode(&self) -> FitMode {
        self.fit_mode
    }

    /// Fits the entire content: the viewport becomes `(0, 0, width, height)`.
    ///
    /// With [`FitMode::Contain`] one axis is grown to the surface aspect ratio
    /// and the content is centered. The zoom level is reset to `1.0`.
    /// Non-positive or non-finite sizes are a no-op.
    pub fn reset(&mut self, content_width: f64, content_height: f64) {
        if !is_positive_finite(content_width) || !is_positive_finite(content_height) {
            return;
        }
        let content = Rect::new(0.0, 0.0, content_width, content_height);
        self.content = Some(content);
        self.viewport = self.fitted(content);
        self.reference = self.viewport.size();
        tracing::debug!(
            x = self.viewport.x,
            y = self.viewport.y,
            width = self.viewport.width,
            height = self.viewport.height,
            "camera reset to content"
        );
    }

    /// Re-fits the content recorded by the last reset, if any.
    ///
    /// Useful after a surface resize under [`FitMode::Contain`].
    pub fn refit(&mut self) {
        if let Some(content) = self.content {
            self.reset(content.width(), content.height());
        }
    }

    /// Pans by a screen-space delta using explicit screen→content scales.
    ///
    /// Subtracts `(screen_dx * scale_x, screen_dy * scale_y)` from the viewport
    /// position, so content moves with the pointer during a drag.
    pub fn pan_by(&mut self, screen_dx: f64, screen_dy: f64, scale_x: f64, scale_y: f64) {
        let dx = screen_dx * scale_x;
        let dy = screen_dy * scale_y;
        if !dx.is_finite() || !dy.is_finite() || (dx == 0.0 && dy == 0.0) {
            return;
        }
        let x = self.viewport.x - dx;
        let y = self.viewport.y - dy;
        if !x.is_finite() || !y.is_finite() {
            return;
        }
        self.viewport.x = x;
        self.viewport.y = y;
        tracing::trace!(x, y, "camera panned");
        self.clamp_to_content();
    }

    /// Pans by a screen-space delta using the current surface scale.
    ///
    /// No-op while the surface is degenerate.
    pub fn pan_by_screen(&mut self, delta: Vec2) {
        if let Some(scale) = self.screen_to_content_scale() {
            self.pan_by(delta.x, delta.y, scale.x, scale.y);
        }
    }

    /// Zooms one step about a content-space anchor.
    ///
    /// [`ZoomDirection::Out`] multiplies the viewport extent by the zoom
    /// factor and [`ZoomDirection::In`] divides it. The anchor keeps its screen
    /// position:
    /// `new_x = x + (anchor.x - x) * (1 - new_width / width)`, likewise for `y`.
    /// Steps that would leave the zoom limits are shortened to the limit. When
    /// the viewport is already outside the limits, for example after
    /// [`Camera2D::set_viewport`], steps away from the valid range are ignored.
    pub fn zoom_at(&mut self, anchor: Point, direction: ZoomDirection) {
        if !anchor.x.is_finite() || !anchor.y.is_finite() {
            return;
        }
        let factor = self.zoom_factor;
        let vp = self.viewport;
        let (width, height) = match direction {
            ZoomDirection::Out => (vp.width * factor, vp.height * factor),
            ZoomDirection::In => (vp.width / factor, vp.height / factor),
        };

        // A viewport restored outside the limits may only step back toward them.
        let zoom = self.zoom();
        let lo = self.min_zoom.min(zoom);
        let hi = self.max_zoom.max(zoom);
        let target_zoom = self.reference.width / width;
        let (width, height) = if target_zoom < lo || target_zoom > hi {
            let clamped = target_zoom.clamp(lo, hi);
            let ratio = zoom / clamped;
            if (ratio - 1.0).abs() < f64::EPSILON {
                return;
            }
            (vp.width * ratio, vp.height * ratio)
        } else {
            (width, height)
        };

        if self.scale_about(anchor, width, height) {
            tracing::trace!(
                direction = direction.signum(),
                zoom = self.zoom(),
                "camera zoomed"
            );
            self.clamp_to_content();
        }
    }

    /// Zooms one step about the content point under a screen-space position.
    pub fn zoom_at_screen(&mut self, screen: Point, direction: ZoomDirection) {
        if let Some(anchor) = self.screen_to_content(screen) {
            self.zoom_at(anchor, direction);
        }
    }

    /// Returns content units per screen unit along each axis.
    ///
    /// `None` while the surface is degenerate.
    #[must_use]
    pub fn screen_to_content_scale(&self) -> Option<Vec2> {
        if !is_positive_finite(self.surface.width) || !is_positive_finite(self.surface.height) {
            return None;
        }
        Some(Vec2::new(
            self.viewport.width / self.surface.width,
            self.viewport.height / self.surface.height,
        ))
    }

    /// Converts a screen-space point to content coordinates.
    ///
    /// `content = viewport.origin + screen * (viewport.size / surface.size)`.
    #[must_use]
    pub fn screen_to_content(&self, screen: Point) -> Option<Point> {
        let scale = self.screen_to_content_scale()?;
        Some(Point::new(
            self.viewport.x + screen.x * scale.x,
            self.viewport.y + screen.y * scale.y,
        ))
    }

    /// Converts a content-space point to screen coordinates.
    #[must_use]
    pub fn content_to_screen(&self, content: Point) -> Option<Point> {
        self.screen_to_content_scale()?;
        Some(Point::new(
            (content.x - self.viewport.x) * self.surface.width / self.viewport.width,
            (content.y - self.viewport.y) * self.surface.height / self.viewport.height,
        ))
    }

    /// Converts a content-space rectangle to screen coordinates.
    #[must_use]
    pub fn content_to_screen_rect(&self, rect: Rect) -> Option<Rect> {
        let p0 = self.content_to_screen(rect.origin())?;
        let p1 = self.content_to_screen(Point::new(rect.x1, rect.y1))?;
        Some(Rect::from_points(p0, p1))
    }

    /// Returns the content→screen transform, for render adapters.
    ///
    /// The transform is axis-aligned with independent X and Y scales.
    #[must_use]
    pub fn content_to_screen_transform(&self) -> Option<Affine> {
        self.screen_to_content_scale()?;
        let sx = self.surface.width / self.viewport.width;
        let sy = self.surface.height / self.viewport.height;
        Some(
            Affine::scale_non_uniform(sx, sy)
                * Affine::translate((-self.viewport.x, -self.viewport.y)),
        )
    }

    /// Returns the screen→content transform.
    #[must_use]
    pub fn screen_to_content_transform(&self) -> Option<Affine> {
        let scale = self.screen_to_content_scale()?;
        Some(
            Affine::translate((self.viewport.x, self.viewport.y))
                * Affine::scale_non_uniform(scale.x, scale.y),
        )
    }

    /// Returns the content-space rectangle currently shown.
    #[must_use]
    pub fn visible_content_rect(&self) -> Rect {
        self.viewport.rect()
    }

    /// Snapshot of the current camera state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> Camera2DDebugInfo {
        Camera2DDebugInfo {
            viewport: self.viewport,
            surface: self.surface,
            content: self.content,
            zoom: self.zoom(),
            zoom_factor: self.zoom_factor,
            min_zoom: self.min_zoom,
            max_zoom: self.max_zoom,
            clamp_mode: self.clamp_mode,
            fit_mode: self.fit_mode,
        }
    }

    fn fitted(&self, content: Rect) -> ViewportState {
        let stretch = ViewportState::new(content.x0, content.y0, content.width(), content.height());
        if self.fit_mode == FitMode::Stretch
            || !is_positive_finite(self.surface.width)
            || !is_positive_finite(self.surface.height)
        {
            return stretch;
        }

        let surface_aspect = self.surface.width / self.surface.height;
        let content_aspect = content.width() / content.height();
        if content_aspect > surface_aspect {
            let height = content.width() / surface_aspect;
            ViewportState::new(
                content.x0,
                content.y0 + (content.height() - height) / 2.0,
                content.width(),
                height,
            )
        } else {
            let width = content.height() * surface_aspect;
            ViewportState::new(
                content.x0 + (content.width() - width) / 2.0,
                content.y0,
                width,
                content.height(),
            )
        }
    }

    fn scale_about(&mut self, anchor: Point, width: f64, height: f64) -> bool {
        let vp = self.viewport;
        let next = ViewportState::new(
            vp.x + (anchor.x - vp.x) * (1.0 - width / vp.width),
            vp.y + (anchor.y - vp.y) * (1.0 - height / vp.height),
            width,
            height,
        );
        if !next.is_valid() {
            return false;
        }
        self.viewport = next;
        true
    }

    fn clamp_to_content(&mut self) {
        if self.clamp_mode == ClampMode::None {
            return;
        }
        let bounds = match self.content {
            Some(b) if b.width() > 0.0 && b.height() > 0.0 => b,
            _ => return,
        };
        let visible = self.viewport.rect();

        let mut dx = 0.0;
        let mut dy = 0.0;

        if visible.max_x() < bounds.min_x() {
            dx = bounds.min_x() - visible.max_x();
        } else if visible.min_x() > bounds.max_x() {
            dx = bounds.max_x() - visible.min_x();
        }

        if visible.max_y() < bounds.min_y() {
            dy = bounds.min_y() - visible.max_y();
        } else if visible.min_y() > bounds.max_y() {
            dy = bounds.max_y() - visible.min_y();
        }

        self.viewport.x += dx;
        self.viewport.y += dy;
    }
}

/// Debug snapshot of a [`Camera2D`] state.
#[derive(Clone, Copy, Debug)]
pub struct Camera2DDebugInfo {
    /// Current viewport in content coordinates.
    pub viewport: ViewportState,
    /// Drawing surface size.
    pub surface: Size,
    /// Content rectangle recorded by the last reset.
    pub content: Option<Rect>,
    /// Zoom level relative to the last reset.
    pub zoom: f64,
    /// Multiplicative zoom step.
    pub zoom_factor: f64,
    /// Minimum zoom level.
    pub min_zoom: f64,
    /// Maximum zoom level.
    pub max_zoom: f64,
    /// Clamp mode for panning relative to content.
    pub clamp_mode: ClampMode,
    /// Fit mode used by [`Camera2D::reset`].
    pub fit_mode: FitMode,
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn sanitize_surface(size: Size) -> Option<Size> {
    let ok = |v: f64| v.is_finite() && v >= 0.0;
    (ok(size.width) && ok(size.height)).then_some(size)
}
