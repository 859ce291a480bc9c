// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The pan/zoom recognizer.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use kurbo::{Point, Rect, Vec2};
use understory_zoom_transform::{
    ClampMode, ScaleExtent, TranslateExtent, ZoomTransform, constrain,
};

use crate::drag::DragState;
use crate::event::{EventKind, InputEvent, MouseButton, wheel_delta};
use crate::transition::{Transition, TransitionOptions};

/// Idle time after the last wheel event before a wheel gesture ends.
pub const WHEEL_IDLE_MS: u64 = 150;

/// Duration of the animated double-click zoom.
pub const DOUBLE_CLICK_ZOOM_MS: u64 = 250;

/// Admission gate consulted before a gesture starts.
///
/// Returning `false` vetoes the event: no drag, wheel or double-click gesture
/// begins from it.
pub type GestureFilter<T> = Box<dyn Fn(&InputEvent<T>) -> bool>;

/// Filter used when none is installed: no control modifier except on wheel
/// events, and only the primary button (or no button at all).
#[must_use]
pub fn default_filter<T>(event: &InputEvent<T>) -> bool {
    (!event.ctrl_key() || event.is_wheel())
        && matches!(event.button, None | Some(MouseButton::Primary))
}

/// Lifecycle phase of a [`ZoomEvent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoomPhase {
    /// A gesture or transform change began. Carries the transform before the change.
    Start,
    /// The transform changed.
    Zoom,
    /// The gesture or transform change finished.
    End,
}

/// Notification emitted by [`ZoomBehavior`].
#[derive(Clone, Debug, PartialEq)]
pub struct ZoomEvent<T> {
    /// Lifecycle phase.
    pub phase: ZoomPhase,
    /// Current transform.
    pub transform: ZoomTransform,
    /// Raw input that caused this event, if any.
    pub source: Option<InputEvent<T>>,
    /// `true` when the change only synchronizes the recognizer with an
    /// externally owned transform and should not be echoed back.
    pub sync: bool,
}

#[derive(Clone, Debug)]
struct WheelGesture<T> {
    pointer: Point,
    anchor: Point,
    idle_at: u64,
    source: InputEvent<T>,
}

/// Headless pan/zoom gesture recognizer.
///
/// `ZoomBehavior` owns the current [`ZoomTransform`] of one host surface and
/// turns raw input into start/zoom/end [`ZoomEvent`]s:
/// - pointer drags (mouse or a single touch) pan the canvas,
/// - wheel events zoom about the pointer,
/// - double clicks zoom in (out with shift) with a short animation,
/// - programmatic calls set, translate, or scale the transform, optionally
///   animated.
///
/// Events are appended to a caller-provided buffer instead of being dispatched
/// to callbacks, so the caller decides how to route them. Time never advances
/// on its own: hosts call [`ZoomBehavior::advance`] to end idle wheel gestures
/// and step transitions.
pub struct ZoomBehavior<T> {
    extent: Option<Rect>,
    transform: ZoomTransform,
    scale_extent: ScaleExtent,
    translate_extent: TranslateExtent,
    clamp_mode: ClampMode,
    click_distance: f64,
    double_click_zoom: bool,
    filter: Option<GestureFilter<T>>,
    drag: DragState,
    click_suppressed: bool,
    wheel: Option<WheelGesture<T>>,
    transition: Option<Transition<T>>,
}

impl<T> fmt::Debug for ZoomBehavior<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomBehavior")
            .field("extent", &self.extent)
            .field("transform", &self.transform)
            .field("scale_extent", &self.scale_extent)
            .field("translate_extent", &self.translate_extent)
            .field("clamp_mode", &self.clamp_mode)
            .field("click_distance", &self.click_distance)
            .field("double_click_zoom", &self.double_click_zoom)
            .field("has_filter", &self.filter.is_some())
            .field("drag", &self.drag)
            .field("click_suppressed", &self.click_suppressed)
            .field("wheel_active", &self.wheel.is_some())
            .field("transition_active", &self.transition.is_some())
            .finish()
    }
}

impl<T> Default for ZoomBehavior<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> ZoomBehavior<T> {
    /// Creates a detached recognizer with the identity transform.
    #[must_use]
    pub fn new() -> Self {
        Self {
            extent: None,
            transform: ZoomTransform::IDENTITY,
            scale_extent: ScaleExtent::default(),
            translate_extent: TranslateExtent::UNBOUNDED,
            clamp_mode: ClampMode::default(),
            click_distance: 0.0,
            double_click_zoom: true,
            filter: None,
            drag: DragState::default(),
            click_suppressed: false,
            wheel: None,
            transition: None,
        }
    }

    /// Attaches to a host surface whose screen rectangle is `extent`.
    pub fn attach(&mut self, extent: Rect) {
        self.extent = Some(extent);
    }

    /// Detaches from the host, dropping any gesture or transition in flight
    /// without emitting events.
    pub fn detach(&mut self) {
        self.extent = None;
        self.drag.end();
        self.click_suppressed = false;
        self.wheel = None;
        self.transition = None;
    }

    /// Returns `true` while attached to a host.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.extent.is_some()
    }

    /// Returns the host's screen rectangle, if attached.
    #[must_use]
    pub fn extent(&self) -> Option<Rect> {
        self.extent
    }

    /// Updates the host's screen rectangle after a resize.
    ///
    /// Has no effect while detached.
    pub fn set_extent(&mut self, extent: Rect) {
        if self.extent.is_some() {
            self.extent = Some(extent);
        }
    }

    /// Returns the current transform.
    #[must_use]
    pub fn transform(&self) -> ZoomTransform {
        self.transform
    }

    /// Returns the zoom limits.
    #[must_use]
    pub fn scale_extent(&self) -> ScaleExtent {
        self.scale_extent
    }

    /// Sets the zoom limits used by gestures and scale operations.
    ///
    /// The current transform is not changed.
    pub fn set_scale_extent(&mut self, extent: ScaleExtent) {
        self.scale_extent = extent;
    }

    /// Returns the pan limits.
    #[must_use]
    pub fn translate_extent(&self) -> TranslateExtent {
        self.translate_extent
    }

    /// Sets the pan limits used by gestures and constrained operations.
    ///
    /// The current transform is not changed.
    pub fn set_translate_extent(&mut self, extent: TranslateExtent) {
        self.translate_extent = extent;
    }

    /// Returns how translation is constrained.
    #[must_use]
    pub fn clamp_mode(&self) -> ClampMode {
        self.clamp_mode
    }

    /// Sets how translation is constrained.
    pub fn set_clamp_mode(&mut self, mode: ClampMode) {
        self.clamp_mode = mode;
    }

    /// Sets the distance a pointer may travel before a press counts as a drag.
    ///
    /// Negative or non-finite values are treated as `0`.
    pub fn set_click_distance(&mut self, distance: f64) {
        self.click_distance = if distance.is_finite() && distance > 0.0 {
            distance
        } else {
            0.0
        };
    }

    /// Enables or disables the double-click zoom gesture.
    pub fn set_double_click_zoom(&mut self, enabled: bool) {
        self.double_click_zoom = enabled;
    }

    /// Returns `true` if double clicks zoom.
    #[must_use]
    pub fn double_click_zoom(&self) -> bool {
        self.double_click_zoom
    }

    /// Installs the admission gate, or restores [`default_filter`] with `None`.
    pub fn set_filter(&mut self, filter: Option<GestureFilter<T>>) {
        self.filter = filter;
    }

    /// Returns `true` if the installed filter admits `event`.
    #[must_use]
    pub fn admits(&self, event: &InputEvent<T>) -> bool {
        match &self.filter {
            Some(filter) => filter(event),
            None => default_filter(event),
        }
    }

    /// Clamps a proposed transform's translation against explicit extents
    /// using this recognizer's clamp mode.
    #[must_use]
    pub fn constrain(
        &self,
        transform: ZoomTransform,
        viewport_extent: Rect,
        translate_extent: &TranslateExtent,
    ) -> ZoomTransform {
        constrain(transform, viewport_extent, translate_extent, self.clamp_mode)
    }

    /// Returns `true` while a pointer drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Returns `true` if the last drag travelled further than the click
    /// distance, so the click that follows its release should be swallowed.
    ///
    /// Reset when the next drag starts.
    #[must_use]
    pub fn suppresses_click(&self) -> bool {
        self.click_suppressed
    }

    /// Returns `true` while a transition is running.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_some()
    }

    /// Returns `true` while any gesture or transition is in progress.
    #[must_use]
    pub fn is_gesture_active(&self) -> bool {
        self.drag.is_dragging() || self.wheel.is_some() || self.transition.is_some()
    }

    /// Returns when the running wheel gesture ends if no further wheel event
    /// arrives.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.wheel.as_ref().map(|w| w.idle_at)
    }

    fn constrained(&self, transform: ZoomTransform) -> ZoomTransform {
        match self.extent {
            Some(extent) => self.constrain(transform, extent, &self.translate_extent),
            None => transform,
        }
    }
}

impl<T: Clone> ZoomBehavior<T> {
    /// Commits `transform` as-is, without clamping, immediately or animated.
    ///
    /// Returns `false` (and does nothing) while detached.
    pub fn set_transform(
        &mut self,
        transform: ZoomTransform,
        options: TransitionOptions,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        if !self.is_attached() {
            return false;
        }
        self.apply(transform, options, None, now, out);
        true
    }

    /// Overwrites the transform with one owned elsewhere, emitting events
    /// flagged as [`ZoomEvent::sync`].
    pub fn sync_transform(
        &mut self,
        transform: ZoomTransform,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        if !self.is_attached() {
            return false;
        }
        let before = self.transform;
        self.transform = transform;
        for (phase, t) in [
            (ZoomPhase::Start, before),
            (ZoomPhase::Zoom, transform),
            (ZoomPhase::End, transform),
        ] {
            out.push(ZoomEvent {
                phase,
                transform: t,
                source: None,
                sync: true,
            });
        }
        true
    }

    /// Pans by `(dx, dy)` canvas units, constrained, immediately.
    pub fn translate_by(
        &mut self,
        dx: f64,
        dy: f64,
        source: Option<&InputEvent<T>>,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        if !self.is_attached() {
            return false;
        }
        let next = self.constrained(self.transform.translate(dx, dy));
        self.commit(next, source, out);
        true
    }

    /// Zooms to `k` (clamped into the scale extent) about `focal`, which
    /// defaults to the center of the host.
    pub fn scale_to(
        &mut self,
        k: f64,
        focal: Option<Point>,
        options: TransitionOptions,
        source: Option<&InputEvent<T>>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        let Some(extent) = self.extent else {
            return false;
        };
        let screen = focal.unwrap_or_else(|| extent.center());
        let canvas = self.transform.invert(screen);
        let k = self.scale_extent.clamp(k);
        let next = self.constrained(self.transform.with_scale(k).anchor(screen, canvas));
        self.apply(next, options, source, now, out);
        true
    }

    /// Multiplies the zoom by `factor`; see [`ZoomBehavior::scale_to`].
    pub fn scale_by(
        &mut self,
        factor: f64,
        focal: Option<Point>,
        options: TransitionOptions,
        source: Option<&InputEvent<T>>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        let k = self.transform.k * factor;
        self.scale_to(k, focal, options, source, now, out)
    }

    /// Feeds a pointer, touch, or double-click event.
    ///
    /// Returns `true` if the event was consumed by a gesture.
    pub fn handle_pointer(
        &mut self,
        event: &InputEvent<T>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        match event.kind {
            EventKind::MouseDown | EventKind::TouchStart => self.pointer_down(event, out),
            EventKind::MouseMove | EventKind::TouchMove => self.pointer_move(event, out),
            EventKind::MouseUp | EventKind::TouchEnd => self.pointer_up(event, out),
            EventKind::DoubleClick => self.double_click(event, now, out),
            EventKind::Wheel => false,
        }
    }

    /// Native wheel zoom: scales by `2^wheel_delta` about the pointer.
    ///
    /// Returns `true` if the event was consumed; hosts should then prevent the
    /// browser's default scrolling.
    pub fn handle_wheel(
        &mut self,
        event: &InputEvent<T>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        if !self.is_attached() || !self.admits(event) {
            return false;
        }
        let t = self.transform;
        let k = self.scale_extent.clamp(t.k * 2_f64.powf(wheel_delta(event)));
        let pointer = event.position;

        if let Some(wheel) = self.wheel.as_mut() {
            if wheel.pointer != pointer {
                wheel.pointer = pointer;
                wheel.anchor = t.invert(pointer);
            }
            wheel.idle_at = now + WHEEL_IDLE_MS;
            wheel.source = event.clone();
        } else if t.k == k {
            // Already at the zoom limit; let the host scroll.
            return false;
        } else {
            self.interrupt(out);
            self.wheel = Some(WheelGesture {
                pointer,
                anchor: t.invert(pointer),
                idle_at: now + WHEEL_IDLE_MS,
                source: event.clone(),
            });
            Self::emit(out, ZoomPhase::Start, t, Some(event));
        }

        let Some((screen, canvas)) = self.wheel.as_ref().map(|w| (w.pointer, w.anchor)) else {
            return false;
        };
        self.transform = self.constrained(t.with_scale(k).anchor(screen, canvas));
        Self::emit(out, ZoomPhase::Zoom, self.transform, Some(event));
        true
    }

    /// Advances time to `now`: ends idle wheel gestures and steps transitions.
    pub fn advance(&mut self, now: u64, out: &mut Vec<ZoomEvent<T>>) {
        if self.wheel.as_ref().is_some_and(|w| now >= w.idle_at) {
            if let Some(wheel) = self.wheel.take() {
                Self::emit(out, ZoomPhase::End, self.transform, Some(&wheel.source));
            }
        }

        let Some((transform, done)) = self.transition.as_ref().map(|tr| tr.sample(now)) else {
            return;
        };
        self.transform = transform;
        let source = self.transition.as_ref().and_then(|tr| tr.source.as_ref());
        Self::emit(out, ZoomPhase::Zoom, transform, source);
        if done {
            if let Some(tr) = self.transition.take() {
                Self::emit(out, ZoomPhase::End, transform, tr.source.as_ref());
            }
        }
    }

    fn pointer_down(&mut self, event: &InputEvent<T>, out: &mut Vec<ZoomEvent<T>>) -> bool {
        if !self.is_attached() || self.drag.is_dragging() || !self.admits(event) {
            return false;
        }
        // Multi-touch sequencing is left to the host.
        if event.kind == EventKind::TouchStart && event.touch_count > 1 {
            return false;
        }
        self.interrupt(out);
        self.click_suppressed = false;
        self.drag.start(event.position, self.transform.invert(event.position));
        Self::emit(out, ZoomPhase::Start, self.transform, Some(event));
        true
    }

    fn pointer_move(&mut self, event: &InputEvent<T>, out: &mut Vec<ZoomEvent<T>>) -> bool {
        let Some(anchor) = self.drag.anchor() else {
            return false;
        };
        if self.drag.update(event.position, self.click_distance) == Some(Vec2::ZERO) {
            return true;
        }
        self.transform = self.constrained(self.transform.anchor(event.position, anchor));
        Self::emit(out, ZoomPhase::Zoom, self.transform, Some(event));
        true
    }

    fn pointer_up(&mut self, event: &InputEvent<T>, out: &mut Vec<ZoomEvent<T>>) -> bool {
        if !self.drag.is_dragging() {
            return false;
        }
        self.click_suppressed = self.drag.has_moved();
        self.drag.end();
        Self::emit(out, ZoomPhase::End, self.transform, Some(event));
        true
    }

    fn double_click(
        &mut self,
        event: &InputEvent<T>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> bool {
        if !self.is_attached() || !self.double_click_zoom || !self.admits(event) {
            return false;
        }
        let factor = if event.shift_key() { 0.5 } else { 2.0 };
        let screen = event.position;
        let canvas = self.transform.invert(screen);
        let k = self.scale_extent.clamp(self.transform.k * factor);
        let next = self.constrained(self.transform.with_scale(k).anchor(screen, canvas));
        self.apply(
            next,
            TransitionOptions::over(DOUBLE_CLICK_ZOOM_MS),
            Some(event),
            now,
            out,
        );
        true
    }

    fn apply(
        &mut self,
        transform: ZoomTransform,
        options: TransitionOptions,
        source: Option<&InputEvent<T>>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) {
        match self.extent {
            Some(extent) if options.is_animated() => {
                self.interrupt(out);
                Self::emit(out, ZoomPhase::Start, self.transform, source);
                self.transition = Some(Transition::new(
                    self.transform,
                    transform,
                    now,
                    options.duration,
                    extent,
                    source.cloned(),
                ));
            }
            _ => self.commit(transform, source, out),
        }
    }

    fn commit(
        &mut self,
        transform: ZoomTransform,
        source: Option<&InputEvent<T>>,
        out: &mut Vec<ZoomEvent<T>>,
    ) {
        self.interrupt(out);
        Self::emit(out, ZoomPhase::Start, self.transform, source);
        self.transform = transform;
        Self::emit(out, ZoomPhase::Zoom, transform, source);
        Self::emit(out, ZoomPhase::End, transform, source);
    }

    /// Ends a running transition or wheel gesture where it currently stands.
    fn interrupt(&mut self, out: &mut Vec<ZoomEvent<T>>) {
        if let Some(tr) = self.transition.take() {
            Self::emit(out, ZoomPhase::End, self.transform, tr.source.as_ref());
        }
        if let Some(wheel) = self.wheel.take() {
            Self::emit(out, ZoomPhase::End, self.transform, Some(&wheel.source));
        }
    }

    fn emit(
        out: &mut Vec<ZoomEvent<T>>,
        phase: ZoomPhase,
        transform: ZoomTransform,
        source: Option<&InputEvent<T>>,
    ) {
        out.push(ZoomEvent {
            phase,
            transform,
            source: source.cloned(),
            sync: false,
        });
    }
}
