// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The engine façade.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;
use core::mem;

use kurbo::{Rect, Size};
use tracing::{debug, trace};
use understory_zoom_behavior::{
    EventKind, EventTarget, InputEvent, TransitionOptions, ZoomBehavior, ZoomEvent,
};
use understory_zoom_transform::{Viewport, ZoomTransform};

use crate::config::PanZoomConfig;
use crate::filter::FilterConfig;
use crate::lifecycle::{LifecycleHandlers, ZoomPanState, flush_pending_end};
use crate::observers::PanZoomObservers;
use crate::recognizer::PanZoomRecognizer;
use crate::scroll::ScrollStrategy;

/// What the engine did with an input event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputOutcome {
    /// The event drove a gesture or a transform change.
    pub handled: bool,
    /// The host should suppress the event's default action (native scrolling
    /// or page zoom).
    pub prevent_default: bool,
    /// The release ended a drag that moved past the click distance, so the
    /// host should swallow the click that follows it.
    pub suppress_click: bool,
}

impl InputOutcome {
    /// Nothing happened.
    pub const IGNORED: Self = Self {
        handled: false,
        prevent_default: false,
        suppress_click: false,
    };

    /// The event was consumed and its default action should be suppressed.
    pub const CONSUMED: Self = Self {
        handled: true,
        prevent_default: true,
        suppress_click: false,
    };
}

/// Pan/zoom viewport engine for one host surface.
///
/// `PanZoom` wires a [`PanZoomRecognizer`] (by default [`ZoomBehavior`]) to a
/// [`PanZoomConfig`] snapshot and a set of [`PanZoomObservers`]:
///
/// - Every raw event passes the gesture filter built from the config.
/// - Wheel events go to the pan or zoom scroll strategy the config selects.
/// - Recognizer start/zoom/end events drive the gesture lifecycle, which
///   notifies observers and debounces "viewport settled" notifications.
///
/// The engine has no clock. Hosts pass events with timestamps to
/// [`PanZoom::handle_input`] and call [`PanZoom::advance`] when
/// [`PanZoom::next_deadline`] says so, or every frame while animating.
pub struct PanZoom<T, R = ZoomBehavior<T>> {
    pub(crate) recognizer: R,
    pub(crate) config: PanZoomConfig,
    observers: PanZoomObservers<T>,
    state: ZoomPanState<T>,
    filter: FilterConfig,
    scroll: ScrollStrategy,
    /// `None` while a marquee selection holds the lifecycle unbound.
    lifecycle: Option<LifecycleHandlers>,
    pub(crate) size: Option<Size>,
    pub(crate) initial_viewport: Viewport,
    pub(crate) now: u64,
    pub(crate) events: Vec<ZoomEvent<T>>,
}

impl<T, R: fmt::Debug> fmt::Debug for PanZoom<T, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanZoom")
            .field("recognizer", &self.recognizer)
            .field("config", &self.config)
            .field("observers", &self.observers)
            .field("is_zooming_or_panning", &self.state.is_zooming_or_panning)
            .field("filter", &self.filter)
            .field("scroll", &self.scroll)
            .field("lifecycle", &self.lifecycle)
            .field("size", &self.size)
            .field("initial_viewport", &self.initial_viewport)
            .field("now", &self.now)
            .field("queued_events", &self.events.len())
            .finish()
    }
}

impl<T> PanZoom<T>
where
    T: EventTarget + Clone + 'static,
{
    /// Creates a detached engine around a fresh [`ZoomBehavior`].
    #[must_use]
    pub fn new(config: PanZoomConfig) -> Self {
        Self::with_recognizer(ZoomBehavior::new(), config)
    }
}

impl<T, R> PanZoom<T, R>
where
    T: EventTarget + Clone + 'static,
    R: PanZoomRecognizer<T>,
{
    /// Creates a detached engine around `recognizer`.
    pub fn with_recognizer(recognizer: R, config: PanZoomConfig) -> Self {
        let filter = FilterConfig::from(&config);
        let scroll = ScrollStrategy::select(&config);
        let mut engine = Self {
            recognizer,
            config,
            observers: PanZoomObservers::new(),
            state: ZoomPanState::default(),
            filter,
            scroll,
            lifecycle: None,
            size: None,
            initial_viewport: Viewport::default(),
            now: 0,
            events: Vec::new(),
        };
        engine.bind();
        engine
    }

    /// Returns the current configuration.
    #[must_use]
    pub fn config(&self) -> &PanZoomConfig {
        &self.config
    }

    /// Returns the observers for registration.
    pub fn observers_mut(&mut self) -> &mut PanZoomObservers<T> {
        &mut self.observers
    }

    /// Returns the recognizer.
    #[must_use]
    pub fn recognizer(&self) -> &R {
        &self.recognizer
    }

    /// Returns `true` while a gesture is between its start and end.
    #[must_use]
    pub fn is_zooming_or_panning(&self) -> bool {
        self.state.is_zooming_or_panning
    }

    /// Returns `true` while attached to a host.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.size.is_some()
    }

    /// Attaches to a host of `size`, starting from `initial` clamped into the
    /// zoom limits and constrained to the pan limits.
    ///
    /// The initial transform is applied before any observer is told about
    /// transform changes.
    pub fn attach(&mut self, size: Size, initial: Viewport) {
        let extent = Rect::from_origin_size((0.0, 0.0), size);
        self.recognizer.attach(extent);
        self.size = Some(size);

        let zoom = self.config.scale_extent.clamp(initial.zoom);
        let initial = Viewport::new(initial.x, initial.y, zoom);
        self.initial_viewport = initial;
        let translate_extent = self.config.translate_extent;
        let transform = self.recognizer.constrain(
            ZoomTransform::from(initial),
            extent,
            &translate_extent,
        );
        self.recognizer.set_transform(
            transform,
            TransitionOptions::IMMEDIATE,
            self.now,
            &mut self.events,
        );
        self.events.clear();

        debug!(
            width = size.width,
            height = size.height,
            x = transform.x,
            y = transform.y,
            zoom = transform.k,
            "attached pan/zoom engine"
        );
    }

    /// Updates the host size after a resize.
    pub fn resize(&mut self, size: Size) {
        if self.size.is_some() {
            self.size = Some(size);
            self.recognizer
                .set_extent(Rect::from_origin_size((0.0, 0.0), size));
            debug!(width = size.width, height = size.height, "resized pan/zoom host");
        }
    }

    /// Detaches from the host, dropping any pending end notification.
    pub fn detach(&mut self) {
        if self.size.take().is_some() {
            self.recognizer.detach();
            self.state.pending_end.cancel();
            self.state.is_zooming_or_panning = false;
            self.events.clear();
            debug!("detached pan/zoom engine");
        }
    }

    /// Replaces the configuration and rebinds every handler from it.
    pub fn update(&mut self, config: PanZoomConfig) {
        if self.config == config {
            return;
        }
        self.config = config;
        self.bind();
    }

    fn bind(&mut self) {
        let config = &self.config;
        self.recognizer.set_scale_extent(config.scale_extent);
        self.recognizer.set_translate_extent(config.translate_extent);
        self.recognizer.set_clamp_mode(config.clamp_mode);
        self.recognizer.set_click_distance(config.click_distance);
        self.recognizer.set_double_click_zoom(config.zoom_on_double_click);

        let filter = FilterConfig::from(config);
        let gate = filter.clone();
        self.recognizer
            .set_filter(Some(Box::new(move |event: &InputEvent<T>| gate.admits(event))));
        self.filter = filter;

        let scroll = ScrollStrategy::select(config);
        if scroll != self.scroll {
            debug!(?scroll, "switched scroll strategy");
        }
        self.scroll = scroll;

        if config.user_selection_active && !self.state.is_zooming_or_panning {
            if self.lifecycle.take().is_some() {
                debug!("selection active; lifecycle handlers unbound");
            }
        } else {
            self.lifecycle = Some(LifecycleHandlers {
                right_click_pan: config.pan_on_drag.is_right_click_pan(),
            });
        }
        trace!(lifecycle_bound = self.lifecycle.is_some(), "rebound pan/zoom handlers");
    }

    /// Feeds a raw input event.
    ///
    /// The event's timestamp advances the engine clock, so an end
    /// notification that came due before this event is delivered first.
    pub fn handle_input(&mut self, event: &InputEvent<T>) -> InputOutcome {
        self.now = self.now.max(event.timestamp);
        flush_pending_end(&mut self.state, &mut self.observers, self.now);
        if !self.is_attached() {
            return InputOutcome::IGNORED;
        }

        let outcome = if event.kind == EventKind::Wheel {
            self.scroll.handle(
                &mut self.recognizer,
                &self.filter,
                event,
                self.now,
                &mut self.events,
            )
        } else {
            let handled = self
                .recognizer
                .handle_pointer(event, self.now, &mut self.events);
            InputOutcome {
                handled,
                // Keep two-finger touches from scrolling the page when they
                // cannot pinch.
                prevent_default: event.kind == EventKind::TouchStart
                    && event.touch_count > 1
                    && !self.config.zoom_on_pinch,
                suppress_click: handled
                    && matches!(event.kind, EventKind::MouseUp | EventKind::TouchEnd)
                    && self.recognizer.suppresses_click(),
            }
        };
        if !outcome.handled {
            trace!(kind = ?event.kind, "input not handled");
        }
        self.dispatch();
        outcome
    }

    /// Advances the engine clock to `now`: steps transitions, ends idle wheel
    /// gestures, and delivers due end notifications.
    pub fn advance(&mut self, now: u64) {
        self.now = self.now.max(now);
        self.recognizer.advance(self.now, &mut self.events);
        self.dispatch();
        flush_pending_end(&mut self.state, &mut self.observers, self.now);
    }

    /// Returns when [`PanZoom::advance`] next has work to do.
    ///
    /// While a transition runs this is the current engine time: advance every
    /// frame until it finishes.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        if self.recognizer.is_animating() {
            return Some(self.now);
        }
        match (self.recognizer.next_deadline(), self.state.pending_end.due_at()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Routes queued recognizer events through the lifecycle handlers.
    pub(crate) fn dispatch(&mut self) {
        let mut events = mem::take(&mut self.events);
        if let Some(handlers) = self.lifecycle {
            for event in &events {
                handlers.handle(&mut self.state, &mut self.observers, event, self.now);
            }
        }
        events.clear();
        self.events = events;
    }
}
