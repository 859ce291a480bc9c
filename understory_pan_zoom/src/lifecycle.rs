// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture lifecycle: turns recognizer events into observer notifications.

use tracing::trace;
use understory_zoom_behavior::{EventKind, InputEvent, MouseButton, ZoomEvent, ZoomPhase};
use understory_zoom_transform::Viewport;

use crate::deferred::DeferredSlot;
use crate::observers::{PanZoomObservers, notify};

/// Delay before announcing a settled viewport after a wheel-driven gesture.
pub const SCROLL_END_DEBOUNCE_MS: u64 = 150;

/// A settled-viewport notification waiting for its debounce to run out.
#[derive(Clone, Debug)]
pub(crate) struct PendingEnd<T> {
    pub(crate) source: Option<InputEvent<T>>,
    pub(crate) viewport: Viewport,
}

/// Mutable gesture bookkeeping, owned by the engine.
#[derive(Clone, Debug)]
pub(crate) struct ZoomPanState<T> {
    pub(crate) is_zooming_or_panning: bool,
    pub(crate) zoomed_with_right_mouse_button: bool,
    /// Last viewport announced at a start or end; starts out at zoom `0` so the
    /// first settled gesture always counts as a change.
    pub(crate) prev_viewport: Viewport,
    /// Button of the event that started the current gesture.
    pub(crate) mouse_button: Option<MouseButton>,
    pub(crate) pending_end: DeferredSlot<PendingEnd<T>>,
}

impl<T> Default for ZoomPanState<T> {
    fn default() -> Self {
        Self {
            is_zooming_or_panning: false,
            zoomed_with_right_mouse_button: false,
            prev_viewport: Viewport::new(0.0, 0.0, 0.0),
            mouse_button: None,
            pending_end: DeferredSlot::default(),
        }
    }
}

/// Start/zoom/end handlers bound to one configuration snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct LifecycleHandlers {
    /// The secondary button is configured to pan.
    pub(crate) right_click_pan: bool,
}

impl LifecycleHandlers {
    pub(crate) fn handle<T: Clone>(
        &self,
        state: &mut ZoomPanState<T>,
        observers: &mut PanZoomObservers<T>,
        event: &ZoomEvent<T>,
        now: u64,
    ) {
        match event.phase {
            ZoomPhase::Start => Self::on_start(state, observers, event),
            ZoomPhase::Zoom => self.on_zoom(state, observers, event),
            ZoomPhase::End => self.on_end(state, observers, event, now),
        }
    }

    fn is_right_click_pan<T>(&self, state: &ZoomPanState<T>) -> bool {
        self.right_click_pan && state.mouse_button == Some(MouseButton::Secondary)
    }

    fn on_start<T>(
        state: &mut ZoomPanState<T>,
        observers: &mut PanZoomObservers<T>,
        event: &ZoomEvent<T>,
    ) {
        let source = event.source.as_ref();
        state.mouse_button = source.and_then(|e| e.button);
        state.is_zooming_or_panning = true;
        trace!(button = ?state.mouse_button, "pan/zoom gesture started");

        if source.is_some_and(|e| e.kind == EventKind::MouseDown) {
            notify(&mut observers.on_dragging_change, |cb| cb(true));
        }

        if observers.wants_start() {
            let viewport = Viewport::from(event.transform);
            state.prev_viewport = viewport;
            notify(&mut observers.on_move_start, |cb| cb(source, viewport));
            notify(&mut observers.on_viewport_change_start, |cb| cb(viewport));
        }
    }

    fn on_zoom<T>(
        &self,
        state: &mut ZoomPanState<T>,
        observers: &mut PanZoomObservers<T>,
        event: &ZoomEvent<T>,
    ) {
        if self.is_right_click_pan(state) && observers.on_pane_context_menu.is_some() {
            state.zoomed_with_right_mouse_button = true;
        }

        if !event.sync {
            let transform = event.transform;
            notify(&mut observers.on_transform_change, |cb| cb(transform));
        }

        if observers.wants_move() {
            let viewport = Viewport::from(event.transform);
            let source = event.source.as_ref();
            notify(&mut observers.on_move, |cb| cb(source, viewport));
            notify(&mut observers.on_viewport_change, |cb| cb(viewport));
        }
    }

    fn on_end<T: Clone>(
        &self,
        state: &mut ZoomPanState<T>,
        observers: &mut PanZoomObservers<T>,
        event: &ZoomEvent<T>,
        now: u64,
    ) {
        state.is_zooming_or_panning = false;
        trace!("pan/zoom gesture ended");

        if self.is_right_click_pan(state) && !state.zoomed_with_right_mouse_button {
            if let Some(source) = event.source.as_ref() {
                notify(&mut observers.on_pane_context_menu, |cb| cb(source));
            }
        }
        state.zoomed_with_right_mouse_button = false;

        notify(&mut observers.on_dragging_change, |cb| cb(false));

        if state.prev_viewport.differs_from(event.transform) && observers.wants_end() {
            let viewport = Viewport::from(event.transform);
            state.prev_viewport = viewport;
            let scroll_driven = event.source.as_ref().is_some_and(InputEvent::is_wheel);
            let delay = if scroll_driven { SCROLL_END_DEBOUNCE_MS } else { 0 };
            let pending = PendingEnd {
                source: event.source.clone(),
                viewport,
            };
            if state.pending_end.schedule(now + delay, pending).is_some() {
                trace!("superseded pending viewport end notification");
            }
            trace!(due = now + delay, "scheduled viewport end notification");
        }
    }
}

/// Delivers a pending end notification if it is due.
pub(crate) fn flush_pending_end<T>(
    state: &mut ZoomPanState<T>,
    observers: &mut PanZoomObservers<T>,
    now: u64,
) {
    if let Some(PendingEnd { source, viewport }) = state.pending_end.take_due(now) {
        trace!(x = viewport.x, y = viewport.y, zoom = viewport.zoom, "viewport settled");
        notify(&mut observers.on_viewport_change_end, |cb| cb(viewport));
        notify(&mut observers.on_move_end, |cb| cb(source.as_ref(), viewport));
    }
}
