// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Affine, Point, Rect, Size};

/// Uniform pan+zoom transform as stored by the gesture recognizer.
///
/// A canvas point `p` maps to the screen point `p * k + (x, y)`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomTransform {
    /// Horizontal pan offset in screen pixels.
    pub x: f64,
    /// Vertical pan offset in screen pixels.
    pub y: f64,
    /// Scale factor.
    pub k: f64,
}

impl ZoomTransform {
    /// No pan, scale `1.0`.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a transform from its pan offset and scale.
    #[must_use]
    pub const fn new(x: f64, y: f64, k: f64) -> Self {
        Self { x, y, k }
    }

    /// Maps a canvas point to screen space.
    #[must_use]
    pub fn apply(self, p: Point) -> Point {
        Point::new(p.x * self.k + self.x, p.y * self.k + self.y)
    }

    /// Maps a screen point back to canvas space.
    #[must_use]
    pub fn invert(self, p: Point) -> Point {
        Point::new(self.invert_x(p.x), self.invert_y(p.y))
    }

    /// Maps a screen x coordinate back to canvas space.
    #[must_use]
    pub fn invert_x(self, x: f64) -> f64 {
        (x - self.x) / self.k
    }

    /// Maps a screen y coordinate back to canvas space.
    #[must_use]
    pub fn invert_y(self, y: f64) -> f64 {
        (y - self.y) / self.k
    }

    /// Maps a screen rectangle back to canvas space.
    #[must_use]
    pub fn invert_rect(self, rect: Rect) -> Rect {
        Rect::from_points(
            self.invert(Point::new(rect.x0, rect.y0)),
            self.invert(Point::new(rect.x1, rect.y1)),
        )
    }

    /// Translates by `(dx, dy)` canvas units, keeping the scale.
    #[must_use]
    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + self.k * dx, self.y + self.k * dy, self.k)
    }

    /// Replaces the scale, keeping the pan offset.
    #[must_use]
    pub fn with_scale(self, k: f64) -> Self {
        Self::new(self.x, self.y, k)
    }

    /// Pans so that canvas point `canvas` lands on screen point `screen`.
    #[must_use]
    pub fn anchor(self, screen: Point, canvas: Point) -> Self {
        let x = screen.x - canvas.x * self.k;
        let y = screen.y - canvas.y * self.k;
        Self::new(x, y, self.k)
    }

    /// Returns the equivalent affine transform.
    #[must_use]
    pub fn to_affine(self) -> Affine {
        Affine::translate((self.x, self.y)) * Affine::scale(self.k)
    }
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// User-facing camera description: pan offset in screen pixels and zoom.
///
/// This is the flow-space view handed to observers. It carries the same
/// numbers as [`ZoomTransform`] with `zoom` in place of `k`.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// Horizontal pan offset in screen pixels.
    pub x: f64,
    /// Vertical pan offset in screen pixels.
    pub y: f64,
    /// Zoom factor.
    pub zoom: f64,
}

impl Viewport {
    /// Creates a viewport.
    #[must_use]
    pub const fn new(x: f64, y: f64, zoom: f64) -> Self {
        Self { x, y, zoom }
    }

    /// Returns `true` if `transform` differs from this viewport along any of
    /// `x`, `y` or zoom.
    #[must_use]
    pub fn differs_from(&self, transform: ZoomTransform) -> bool {
        self.x != transform.x || self.y != transform.y || self.zoom != transform.k
    }

    /// Converts a screen point (relative to the host) into flow space.
    #[must_use]
    pub fn screen_to_flow(&self, p: Point) -> Point {
        ZoomTransform::from(*self).invert(p)
    }

    /// Converts a flow-space point into a screen point relative to the host.
    #[must_use]
    pub fn flow_to_screen(&self, p: Point) -> Point {
        ZoomTransform::from(*self).apply(p)
    }

    /// Returns the flow-space rectangle visible through a host of `size`.
    #[must_use]
    pub fn visible_flow_rect(&self, size: Size) -> Rect {
        ZoomTransform::from(*self).invert_rect(size.to_rect())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }
}

impl From<ZoomTransform> for Viewport {
    fn from(t: ZoomTransform) -> Self {
        Self::new(t.x, t.y, t.k)
    }
}

impl From<Viewport> for ZoomTransform {
    fn from(v: Viewport) -> Self {
        Self::new(v.x, v.y, v.zoom)
    }
}
