// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_pan_zoom --heading-base-level=0

//! Understory Pan Zoom: the viewport engine of a node-and-edge canvas.
//!
//! [`PanZoom`] turns raw pointer, wheel and touch input over a host surface
//! into a constrained camera transform and tells observers about it. It sits
//! on top of a gesture recognizer ([`ZoomBehavior`] by default, or anything
//! implementing [`PanZoomRecognizer`]) and adds the policy around it:
//!
//! - **Gesture filter**: [`FilterConfig::admits`] decides, in a fixed rule
//!   order, whether an event may start a gesture at all. Exclusion zones are
//!   asked of the event target through [`EventTarget`].
//! - **Scroll dispatch**: the wheel either pans (pan-on-scroll, with pinch
//!   zoom on modifier-held wheels) or goes to the recognizer's wheel zoom.
//! - **Lifecycle**: start/move/end notifications, dragging state, right-click
//!   pan context menus, and a debounced "viewport settled" notification that
//!   fires once per burst of wheel-driven gestures.
//! - **Programmatic API**: set, scale, fit, reset and sync the viewport.
//!
//! Configuration is a plain [`PanZoomConfig`] value. Calling
//! [`PanZoom::update`] with a new snapshot rebuilds every handler from it.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use kurbo::{Point, Size};
//! use understory_pan_zoom::{InputEvent, MouseButton, PanZoom, PanZoomConfig, Viewport};
//!
//! let mut engine = PanZoom::<()>::new(PanZoomConfig::default());
//! engine.attach(Size::new(400.0, 300.0), Viewport::default());
//!
//! let settled = Rc::new(RefCell::new(None));
//! let sink = settled.clone();
//! engine.observers_mut().on_viewport_change_end =
//!     Some(Box::new(move |v: Viewport| *sink.borrow_mut() = Some(v)));
//!
//! let (from, to) = (Point::new(100.0, 100.0), Point::new(150.0, 80.0));
//! engine.handle_input(&InputEvent::mouse_down((), from, MouseButton::Primary));
//! engine.handle_input(&InputEvent::mouse_move((), to).at(16));
//! engine.handle_input(&InputEvent::mouse_up((), to, MouseButton::Primary).at(32));
//! engine.advance(32);
//!
//! assert_eq!(*settled.borrow(), Some(Viewport::new(50.0, -20.0, 1.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod api;
mod config;
mod deferred;
mod engine;
mod filter;
mod lifecycle;
mod observers;
mod recognizer;
mod scroll;

pub use api::FitOptions;
pub use config::{PanOnDrag, PanOnScrollMode, PanZoomConfig};
pub use engine::{InputOutcome, PanZoom};
pub use filter::FilterConfig;
pub use lifecycle::SCROLL_END_DEBOUNCE_MS;
pub use observers::{MoveCallback, PanZoomObservers, ViewportCallback};
pub use recognizer::PanZoomRecognizer;

pub use understory_zoom_behavior::{
    DeltaMode, EventKind, EventTarget, InputEvent, Modifiers, MouseButton, TransitionOptions,
    ZoomBehavior,
};
pub use understory_zoom_transform::{
    ClampMode, ExtentError, ScaleExtent, TranslateExtent, Viewport, ZoomTransform,
};
