// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Programmatic transform operations.
//!
//! Everything here goes through the same recognizer commit path as gestures,
//! so observers see the same start/move/end sequence regardless of origin.
//! Operations that change the transform return `false` (or `None`) and do
//! nothing while the engine is detached.

use kurbo::{Point, Rect};
use tracing::debug;
use understory_zoom_behavior::{EventTarget, TransitionOptions};
use understory_zoom_transform::{
    ScaleExtent, TranslateExtent, Viewport, ZoomTransform, viewport_for_bounds,
};

use crate::engine::PanZoom;
use crate::recognizer::PanZoomRecognizer;

/// Options for [`PanZoom::fit_bounds`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FitOptions {
    /// Slack around the bounds as a fraction of their size.
    pub padding: f64,
    /// Zoom limits for the fit; the engine's own limits when `None`.
    pub scale_extent: Option<ScaleExtent>,
    /// Animation of the change.
    pub transition: TransitionOptions,
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            padding: 0.1,
            scale_extent: None,
            transition: TransitionOptions::IMMEDIATE,
        }
    }
}

impl<T, R> PanZoom<T, R>
where
    T: EventTarget + Clone + 'static,
    R: PanZoomRecognizer<T>,
{
    /// Commits `transform` as-is, without clamping.
    pub fn set_transform(&mut self, transform: ZoomTransform, options: TransitionOptions) -> bool {
        let now = self.now;
        let applied = self
            .recognizer
            .set_transform(transform, options, now, &mut self.events);
        self.dispatch();
        applied
    }

    /// Commits the transform equivalent to `viewport`, without clamping.
    pub fn set_transform_from_viewport(
        &mut self,
        viewport: Viewport,
        options: TransitionOptions,
    ) -> bool {
        self.set_transform(ZoomTransform::from(viewport), options)
    }

    /// Constrains `viewport` against explicit extents and commits the result
    /// immediately.
    ///
    /// Returns the committed transform. Applying the same inputs twice
    /// commits the same transform both times.
    pub fn set_transform_constrained(
        &mut self,
        viewport: Viewport,
        viewport_extent: Rect,
        translate_extent: &TranslateExtent,
    ) -> Option<ZoomTransform> {
        if !self.is_attached() {
            return None;
        }
        let transform = self.recognizer.constrain(
            ZoomTransform::from(viewport),
            viewport_extent,
            translate_extent,
        );
        self.set_transform(transform, TransitionOptions::IMMEDIATE)
            .then_some(transform)
    }

    /// Replaces the zoom limits used from now on.
    pub fn set_scale_extent(&mut self, extent: ScaleExtent) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.config.scale_extent = extent;
        self.recognizer.set_scale_extent(extent);
        debug!(min = extent.min(), max = extent.max(), "scale extent changed");
        true
    }

    /// Replaces the pan limits used from now on.
    pub fn set_translate_extent(&mut self, extent: TranslateExtent) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.config.translate_extent = extent;
        self.recognizer.set_translate_extent(extent);
        debug!(unbounded = extent.is_unbounded(), "translate extent changed");
        true
    }

    /// Zooms to `zoom`, clamped into the zoom limits, about the host center.
    pub fn scale_to(&mut self, zoom: f64, options: TransitionOptions) -> bool {
        let now = self.now;
        let applied = self
            .recognizer
            .scale_to(zoom, None, options, None, now, &mut self.events);
        self.dispatch();
        applied
    }

    /// Multiplies the zoom by `factor`, clamped into the zoom limits, about
    /// the host center.
    pub fn scale_by(&mut self, factor: f64, options: TransitionOptions) -> bool {
        let now = self.now;
        let applied = self
            .recognizer
            .scale_by(factor, None, options, None, now, &mut self.events);
        self.dispatch();
        applied
    }

    /// Returns the current viewport.
    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::from(self.recognizer.transform())
    }

    /// Adopts a viewport owned elsewhere without echoing it to the
    /// transform-change observer.
    ///
    /// Does nothing when `viewport` already matches.
    pub fn sync_viewport(&mut self, viewport: Viewport) -> bool {
        if !self.is_attached() || !viewport.differs_from(self.recognizer.transform()) {
            return false;
        }
        let applied = self
            .recognizer
            .sync_transform(ZoomTransform::from(viewport), &mut self.events);
        self.dispatch();
        applied
    }

    /// Zooms and centers so that the flow-space `bounds` fill the host.
    pub fn fit_bounds(&mut self, bounds: Rect, options: FitOptions) -> bool {
        let Some(size) = self.size else {
            return false;
        };
        if !bounds.is_finite() || size.width <= 0.0 || size.height <= 0.0 {
            return false;
        }
        let extent = options.scale_extent.unwrap_or(self.config.scale_extent);
        let viewport = viewport_for_bounds(bounds, size, extent, options.padding);
        self.set_transform_from_viewport(viewport, options.transition)
    }

    /// Returns to the viewport the engine was attached with.
    pub fn reset(&mut self, options: TransitionOptions) -> bool {
        let initial = self.initial_viewport;
        self.set_transform_from_viewport(initial, options)
    }

    /// Sets the distance a pointer may travel before a press counts as a drag.
    pub fn set_click_distance(&mut self, distance: f64) {
        self.config.click_distance = distance;
        self.recognizer.set_click_distance(distance);
    }

    /// Maps a host-relative screen point to flow space.
    #[must_use]
    pub fn screen_to_flow(&self, point: Point) -> Point {
        self.viewport().screen_to_flow(point)
    }

    /// Maps a flow-space point to host-relative screen space.
    #[must_use]
    pub fn flow_to_screen(&self, point: Point) -> Point {
        self.viewport().flow_to_screen(point)
    }
}
