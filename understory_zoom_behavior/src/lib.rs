// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_behavior --heading-base-level=0

//! Understory Zoom Behavior: a headless pan/zoom gesture recognizer.
//!
//! [`ZoomBehavior`] owns the [`ZoomTransform`] of one host surface and turns
//! raw [`InputEvent`]s into a stream of start/zoom/end [`ZoomEvent`]s:
//!
//! - Pointer drags (mouse or a single touch) pan the canvas, keeping the
//!   grabbed canvas point under the pointer.
//! - Wheel events zoom about the pointer by `2^wheel_delta`. A wheel gesture
//!   ends once no wheel event has arrived for [`WHEEL_IDLE_MS`].
//! - Double clicks zoom in by 2x (out with shift) over [`DOUBLE_CLICK_ZOOM_MS`].
//! - Programmatic calls set, translate, or scale the transform, optionally
//!   animated with [`TransitionOptions`].
//!
//! Every gesture is admitted by a [`GestureFilter`] first, and every gesture
//! result is constrained by the recognizer's [`ScaleExtent`],
//! [`TranslateExtent`] and [`ClampMode`]. Programmatic
//! [`ZoomBehavior::set_transform`] is the one path that skips the constraint.
//!
//! The crate has no clock and no callbacks. Events carry millisecond
//! timestamps, hosts call [`ZoomBehavior::advance`] to let time pass, and
//! results are appended to a caller-owned buffer.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_zoom_behavior::{InputEvent, MouseButton, ZoomBehavior, ZoomPhase};
//! use understory_zoom_transform::ZoomTransform;
//!
//! let mut zoom = ZoomBehavior::<()>::new();
//! zoom.attach(Rect::new(0.0, 0.0, 400.0, 300.0));
//!
//! let mut out = Vec::new();
//! let (from, to) = (Point::new(100.0, 100.0), Point::new(150.0, 80.0));
//! zoom.handle_pointer(&InputEvent::mouse_down((), from, MouseButton::Primary), 0, &mut out);
//! zoom.handle_pointer(&InputEvent::mouse_move((), to), 16, &mut out);
//! zoom.handle_pointer(&InputEvent::mouse_up((), to, MouseButton::Primary), 32, &mut out);
//!
//! let phases: Vec<_> = out.iter().map(|e| e.phase).collect();
//! assert_eq!(phases, [ZoomPhase::Start, ZoomPhase::Zoom, ZoomPhase::End]);
//! assert_eq!(zoom.transform(), ZoomTransform::new(50.0, -20.0, 1.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod behavior;
pub mod drag;
pub mod event;
mod transition;

pub use behavior::{
    DOUBLE_CLICK_ZOOM_MS, GestureFilter, WHEEL_IDLE_MS, ZoomBehavior, ZoomEvent, ZoomPhase,
    default_filter,
};
pub use event::{
    DeltaMode, EventKind, EventTarget, InputEvent, Modifiers, MouseButton, delta_mode_factor,
    wheel_delta,
};
pub use transition::{TransitionOptions, ease_cubic_in_out};

pub use understory_zoom_transform::{
    ClampMode, ScaleExtent, TranslateExtent, Viewport, ZoomTransform,
};
