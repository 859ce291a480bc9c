// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional observer callbacks.

use alloc::boxed::Box;
use core::fmt;

use understory_zoom_behavior::InputEvent;
use understory_zoom_transform::{Viewport, ZoomTransform};

/// Callback receiving the raw input behind a move (if any) and the viewport.
pub type MoveCallback<T> = Box<dyn FnMut(Option<&InputEvent<T>>, Viewport)>;

/// Callback receiving a viewport.
pub type ViewportCallback = Box<dyn FnMut(Viewport)>;

/// Callbacks a [`PanZoom`](crate::PanZoom) engine notifies.
///
/// Every slot is optional. An empty slot is skipped, and the engine avoids
/// computing anything only that slot would have needed.
pub struct PanZoomObservers<T> {
    /// A mouse drag started (`true`) or any gesture ended (`false`).
    pub on_dragging_change: Option<Box<dyn FnMut(bool)>>,
    /// The transform changed. Not called for synchronizing updates.
    pub on_transform_change: Option<Box<dyn FnMut(ZoomTransform)>>,
    /// A gesture or programmatic change began.
    pub on_move_start: Option<MoveCallback<T>>,
    /// The viewport moved.
    pub on_move: Option<MoveCallback<T>>,
    /// The viewport settled.
    pub on_move_end: Option<MoveCallback<T>>,
    /// Like [`PanZoomObservers::on_move_start`], without the input event.
    pub on_viewport_change_start: Option<ViewportCallback>,
    /// Like [`PanZoomObservers::on_move`], without the input event.
    pub on_viewport_change: Option<ViewportCallback>,
    /// Like [`PanZoomObservers::on_move_end`], without the input event.
    pub on_viewport_change_end: Option<ViewportCallback>,
    /// A right-click pan was released without moving.
    pub on_pane_context_menu: Option<Box<dyn FnMut(&InputEvent<T>)>>,
}

impl<T> Default for PanZoomObservers<T> {
    fn default() -> Self {
        Self {
            on_dragging_change: None,
            on_transform_change: None,
            on_move_start: None,
            on_move: None,
            on_move_end: None,
            on_viewport_change_start: None,
            on_viewport_change: None,
            on_viewport_change_end: None,
            on_pane_context_menu: None,
        }
    }
}

impl<T> fmt::Debug for PanZoomObservers<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanZoomObservers")
            .field("on_dragging_change", &self.on_dragging_change.is_some())
            .field("on_transform_change", &self.on_transform_change.is_some())
            .field("on_move_start", &self.on_move_start.is_some())
            .field("on_move", &self.on_move.is_some())
            .field("on_move_end", &self.on_move_end.is_some())
            .field("on_viewport_change_start", &self.on_viewport_change_start.is_some())
            .field("on_viewport_change", &self.on_viewport_change.is_some())
            .field("on_viewport_change_end", &self.on_viewport_change_end.is_some())
            .field("on_pane_context_menu", &self.on_pane_context_menu.is_some())
            .finish()
    }
}

impl<T> PanZoomObservers<T> {
    /// Creates an empty set of observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if anything listens for gesture starts.
    #[must_use]
    pub fn wants_start(&self) -> bool {
        self.on_move_start.is_some() || self.on_viewport_change_start.is_some()
    }

    /// Returns `true` if anything listens for moves.
    #[must_use]
    pub fn wants_move(&self) -> bool {
        self.on_move.is_some() || self.on_viewport_change.is_some()
    }

    /// Returns `true` if anything listens for settled viewports.
    #[must_use]
    pub fn wants_end(&self) -> bool {
        self.on_move_end.is_some() || self.on_viewport_change_end.is_some()
    }
}

/// Calls the callback in `slot`, if there is one.
pub(crate) fn notify<F: ?Sized>(slot: &mut Option<Box<F>>, call: impl FnOnce(&mut F)) {
    if let Some(callback) = slot.as_deref_mut() {
        call(callback);
    }
}
