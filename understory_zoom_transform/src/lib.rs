// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_zoom_transform --heading-base-level=0

//! Understory Zoom Transform: pan/zoom camera values and constraint math.
//!
//! This crate provides the small, headless value types shared by the pan/zoom
//! gesture recognizer and the engine built on top of it:
//! - [`ZoomTransform`]: the recognizer's internal `(x, y, k)` transform.
//! - [`Viewport`]: the user-facing `(x, y, zoom)` camera description.
//! - [`ScaleExtent`] and [`TranslateExtent`]: zoom and pan limits.
//! - [`constrain`]: clamp a proposed transform so the visible region respects
//!   the translate extent, using one of several [`ClampMode`]s.
//! - [`viewport_for_bounds`]: compute the viewport that fits a rectangle.
//!
//! It does **not** recognize gestures or own any rendering state. Callers are
//! expected to feed proposed transforms in and commit whatever comes out.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use understory_zoom_transform::{ClampMode, TranslateExtent, ZoomTransform, constrain};
//!
//! // A 400x300 host looking at a 1000x1000 canvas.
//! let viewport_extent = Rect::new(0.0, 0.0, 400.0, 300.0);
//! let translate_extent =
//!     TranslateExtent::new(Point::ZERO, Point::new(1000.0, 1000.0)).unwrap();
//!
//! // Panning right by 50px would reveal space left of the canvas.
//! let proposed = ZoomTransform::new(50.0, -20.0, 1.0);
//! let t = constrain(proposed, viewport_extent, &translate_extent, ClampMode::Contain);
//! assert_eq!(t, ZoomTransform::new(0.0, -20.0, 1.0));
//! ```
//!
//! ## Clamp order
//!
//! Scale is always clamped into the [`ScaleExtent`] *before* [`constrain`] is
//! called; [`constrain`] itself only adjusts translation. When both extents are
//! tight this means the zoom limit wins and the pan is fitted around it.
//!
//! This crate is `no_std`.

#![no_std]

mod constrain;
mod error;
mod extent;
mod transform;

pub use constrain::{ClampMode, constrain, viewport_for_bounds};
pub use error::ExtentError;
pub use extent::{ScaleExtent, TranslateExtent};
pub use transform::{Viewport, ZoomTransform};
