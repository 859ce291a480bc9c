// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The recognizer seam.

use alloc::vec::Vec;

use kurbo::{Point, Rect};
use understory_zoom_behavior::{
    GestureFilter, InputEvent, TransitionOptions, ZoomBehavior, ZoomEvent,
};
use understory_zoom_transform::{ClampMode, ScaleExtent, TranslateExtent, ZoomTransform};

/// What the engine needs from a gesture recognizer.
///
/// The recognizer owns the live transform and reports every change as
/// [`ZoomEvent`]s appended to `out`. Methods that change state return `false`
/// while the recognizer is not attached to a host.
///
/// [`ZoomBehavior`] is the stock implementation.
pub trait PanZoomRecognizer<T> {
    /// Attaches to a host whose screen rectangle is `extent`.
    fn attach(&mut self, extent: Rect);
    /// Detaches from the host.
    fn detach(&mut self);
    /// Returns the host rectangle while attached.
    fn extent(&self) -> Option<Rect>;
    /// Updates the host rectangle after a resize.
    fn set_extent(&mut self, extent: Rect);

    /// Sets the zoom limits.
    fn set_scale_extent(&mut self, extent: ScaleExtent);
    /// Sets the pan limits.
    fn set_translate_extent(&mut self, extent: TranslateExtent);
    /// Sets how translation is constrained.
    fn set_clamp_mode(&mut self, mode: ClampMode);
    /// Sets the click distance.
    fn set_click_distance(&mut self, distance: f64);
    /// Enables or disables double-click zoom.
    fn set_double_click_zoom(&mut self, enabled: bool);
    /// Installs the admission gate.
    fn set_filter(&mut self, filter: Option<GestureFilter<T>>);

    /// Returns the live transform.
    fn transform(&self) -> ZoomTransform;
    /// Returns the zoom limits.
    fn scale_extent(&self) -> ScaleExtent;
    /// Returns the pan limits.
    fn translate_extent(&self) -> TranslateExtent;
    /// Pure clamp of `transform` against explicit extents.
    fn constrain(
        &self,
        transform: ZoomTransform,
        viewport_extent: Rect,
        translate_extent: &TranslateExtent,
    ) -> ZoomTransform;

    /// Commits `transform` unconstrained, immediately or animated.
    fn set_transform(
        &mut self,
        transform: ZoomTransform,
        options: TransitionOptions,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool;
    /// Commits an externally owned transform as a synchronizing update.
    fn sync_transform(&mut self, transform: ZoomTransform, out: &mut Vec<ZoomEvent<T>>) -> bool;
    /// Pans by canvas units, constrained.
    fn translate_by(
        &mut self,
        dx: f64,
        dy: f64,
        source: Option<&InputEvent<T>>,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool;
    /// Zooms to `k` about `focal` (the host center by default), constrained.
    fn scale_to(
        &mut self,
        k: f64,
        focal: Option<Point>,
        options: TransitionOptions,
        source: Option<&InputEvent<T>>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool;
    /// Multiplies the zoom by `factor`, constrained.
    fn scale_by(
        &mut self,
        factor: f64,
        focal: Option<Point>,
        options: TransitionOptions,
        source: Option<&InputEvent<T>>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool;

    /// Feeds a pointer, touch, or double-click event.
    fn handle_pointer(&mut self, event: &InputEvent<T>, now: u64, out: &mut Vec<ZoomEvent<T>>)
    -> bool;
    /// The recognizer's native wheel zoom.
    fn handle_wheel(&mut self, event: &InputEvent<T>, now: u64, out: &mut Vec<ZoomEvent<T>>)
    -> bool;
    /// Lets time pass.
    fn advance(&mut self, now: u64, out: &mut Vec<ZoomEvent<T>>);
    /// Next time [`PanZoomRecognizer::advance`] has timer work to do.
    fn next_deadline(&self) -> Option<u64>;
    /// Returns `true` while a transition needs per-frame advancing.
    fn is_animating(&self) -> bool;
    /// Returns `true` if the last drag moved past the click distance.
    fn suppresses_click(&self) -> bool;
}

impl<T: Clone> PanZoomRecognizer<T> for ZoomBehavior<T> {
    fn attach(&mut self, extent: Rect) {
        Self::attach(self, extent);
    }

    fn detach(&mut self) {
        Self::detach(self);
    }

    fn extent(&self) -> Option<Rect> {
        Self::extent(self)
    }

    fn set_extent(&mut self, extent: Rect) {
        Self::set_extent(self, extent);
    }

    fn set_scale_extent(&mut self, extent: ScaleExtent) {
        Self::set_scale_extent(self, extent);
    }

    fn set_translate_extent(&mut self, extent: TranslateExtent) {
        Self::set_translate_extent(self, extent);
    }

    fn set_clamp_mode(&mut self, mode: ClampMode) {
        Self::set_clamp_mode(self, mode);
    }

    fn set_click_distance(&mut self, distance: f64) {
        Self::set_click_distance(self, distance);
    }

    fn set_double_click_zoom(&mut self, enabled: bool) {
        Self::set_double_click_zoom(self, enabled);
    }

    fn set_filter(&mut self, filter: Option<GestureFilter<T>>) {
        Self::set_filter(self, filter);
    }

    fn transform(&self) -> ZoomTransform {
        Self::transform(self)
    }

    fn scale_extent(&self) -> ScaleExtent {
        Self::scale_extent(self)
    }

    fn translate_extent(&self) -> TranslateExtent {
        Self::translate_extent(self)
    }

    fn constrain(
        &self,
        transform: ZoomTransform,
        viewport_extent: Rect,
        translate_extent: &TranslateExtent,
    ) -> ZoomTransform {
        Self::constrain(self, transform, viewport_extent, translate_extent)
    }

    fn set_transform(
        &mut self,
        transform: ZoomTransform,
        options: TransitionOptions,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        Self::set_transform(self, transform, options, now, out)
    }

    fn sync_transform(&mut self, transform: ZoomTransform, out: &mut Vec<ZoomEvent<T>>) -> bool {
        Self::sync_transform(self, transform, out)
    }

    fn translate_by(
        &mut self,
        dx: f64,
        dy: f64,
        source: Option<&InputEvent<T>>,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        Self::translate_by(self, dx, dy, source, out)
    }

    fn scale_to(
        &mut self,
        k: f64,
        focal: Option<Point>,
        options: TransitionOptions,
        source: Option<&InputEvent<T>>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        Self::scale_to(self, k, focal, options, source, now, out)
    }

    fn scale_by(
        &mut self,
        factor: f64,
        focal: Option<Point>,
        options: TransitionOptions,
        source: Option<&InputEvent<T>>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        Self::scale_by(self, factor, focal, options, source, now, out)
    }

    fn handle_pointer(
        &mut self,
        event: &InputEvent<T>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        Self::handle_pointer(self, event, now, out)
    }

    fn handle_wheel(
        &mut self,
        event: &InputEvent<T>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        Self::handle_wheel(self, event, now, out)
    }

    fn advance(&mut self, now: u64, out: &mut Vec<ZoomEvent<T>>) {
        Self::advance(self, now, out);
    }

    fn next_deadline(&self) -> Option<u64> {
        Self::next_deadline(self)
    }

    fn is_animating(&self) -> bool {
        Self::is_animating(self)
    }

    fn suppresses_click(&self) -> bool {
        Self::suppresses_click(self)
    }
}
