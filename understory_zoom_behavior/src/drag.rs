// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drag state helper: track the grabbed canvas point and movement of a pan drag.
//!
//! ## Usage
//!
//! 1) Start a drag with [`DragState::start`], passing the screen position and
//!    the canvas point under it.
//! 2) On each move, call [`DragState::update`] to get the screen delta since the
//!    last update. Once the pointer has travelled further than the click
//!    distance from the start, [`DragState::has_moved`] becomes `true`.
//! 3) Re-anchor the transform so [`DragState::anchor`] stays under the pointer.
//! 4) End the drag with [`DragState::end`].
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use understory_zoom_behavior::drag::DragState;
//!
//! let mut drag = DragState::default();
//! drag.start(Point::new(10.0, 20.0), Point::new(10.0, 20.0));
//! assert!(drag.is_dragging());
//!
//! let delta = drag.update(Point::new(15.0, 25.0), 0.0).unwrap();
//! assert_eq!((delta.x, delta.y), (5.0, 5.0));
//! assert!(drag.has_moved());
//! ```

use kurbo::{Point, Vec2};

/// Tracks a pan drag for move event processing.
#[derive(Debug, Clone, Default, Copy)]
pub struct DragState {
    /// Screen position where the drag started.
    pub start_pos: Option<Point>,
    /// Last recorded screen position during the drag.
    pub last_pos: Option<Point>,
    /// Canvas point that was under the pointer when the drag started.
    pub anchor: Option<Point>,
    /// Whether the pointer has left the click distance of the start position.
    pub moved: bool,
}

impl DragState {
    /// Start tracking a new drag at `pos`, grabbing canvas point `anchor`.
    pub fn start(&mut self, pos: Point, anchor: Point) {
        self.start_pos = Some(pos);
        self.last_pos = Some(pos);
        self.anchor = Some(anchor);
        self.moved = false;
    }

    /// Update with a new position, returning the screen delta since the last update.
    ///
    /// `click_distance` is the distance the pointer may travel from the start
    /// before the drag counts as moved.
    pub fn update(&mut self, pos: Point, click_distance: f64) -> Option<Vec2> {
        let start = self.start_pos?;
        if !self.moved {
            let travelled = pos - start;
            self.moved = travelled.hypot2() > click_distance * click_distance;
        }
        let last = self.last_pos.replace(pos)?;
        Some(pos - last)
    }

    /// Canvas point grabbed at the start of the drag.
    #[must_use]
    pub fn anchor(&self) -> Option<Point> {
        self.anchor
    }

    /// Returns `true` once the pointer has left the click distance.
    #[must_use]
    pub fn has_moved(&self) -> bool {
        self.moved
    }

    /// End the current drag and reset state.
    pub fn end(&mut self) {
        *self = Self::default();
    }

    /// Returns `true` while a drag is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.start_pos.is_some()
    }
}
