// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Animated transform changes.
//!
//! A transition interpolates the canvas point at the center of the host and
//! the canvas width visible across it, which keeps zooming visually steady
//! instead of sliding the content sideways.

use kurbo::{Point, Rect};
use understory_zoom_transform::ZoomTransform;

use crate::event::InputEvent;

/// How a transform change is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransitionOptions {
    /// Animation length in milliseconds; `0` applies the change immediately.
    pub duration: u64,
}

impl TransitionOptions {
    /// Apply the change immediately.
    pub const IMMEDIATE: Self = Self { duration: 0 };

    /// Animate the change over `duration` milliseconds.
    #[must_use]
    pub const fn over(duration: u64) -> Self {
        Self { duration }
    }

    /// Returns `true` if the change should be animated.
    #[must_use]
    pub const fn is_animated(&self) -> bool {
        self.duration > 0
    }
}

/// Cubic in-out easing of `t` in `[0, 1]`.
#[must_use]
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

/// A running transition between two transforms.
#[derive(Clone, Debug)]
pub(crate) struct Transition<T> {
    from: ZoomTransform,
    to: ZoomTransform,
    started_at: u64,
    duration: u64,
    /// Screen point whose canvas position is interpolated.
    center: Point,
    /// Larger of the host's width and height.
    span: f64,
    pub(crate) source: Option<InputEvent<T>>,
}

impl<T> Transition<T> {
    pub(crate) fn new(
        from: ZoomTransform,
        to: ZoomTransform,
        started_at: u64,
        duration: u64,
        extent: Rect,
        source: Option<InputEvent<T>>,
    ) -> Self {
        Self {
            from,
            to,
            started_at,
            duration,
            center: extent.center(),
            span: extent.width().max(extent.height()),
            source,
        }
    }

    /// Returns the transform at `now` and whether the transition has finished.
    pub(crate) fn sample(&self, now: u64) -> (ZoomTransform, bool) {
        let elapsed = now.saturating_sub(self.started_at);
        if self.duration == 0 || elapsed >= self.duration {
            return (self.to, true);
        }
        let t = ease_cubic_in_out(elapsed as f64 / self.duration as f64);

        let a = self.from.invert(self.center);
        let b = self.to.invert(self.center);
        let wa = self.span / self.from.k;
        let wb = self.span / self.to.k;

        let canvas = a.lerp(b, t);
        let width = wa + (wb - wa) * t;
        let k = self.span / width;
        let transform = ZoomTransform::new(
            self.center.x - canvas.x * k,
            self.center.y - canvas.y * k,
            k,
        );
        (transform, false)
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Rect;
    use understory_zoom_transform::ZoomTransform;

    use super::{Transition, TransitionOptions, ease_cubic_in_out};

    #[test]
    fn easing_hits_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!(ease_cubic_in_out(0.25) < 0.25);
        assert!(ease_cubic_in_out(0.75) > 0.75);
    }

    #[test]
    fn options_report_animation() {
        assert!(!TransitionOptions::IMMEDIATE.is_animated());
        assert!(!TransitionOptions::default().is_animated());
        assert!(TransitionOptions::over(200).is_animated());
    }

    #[test]
    fn sample_starts_at_from_and_finishes_at_to() {
        let extent = Rect::new(0.0, 0.0, 400.0, 300.0);
        let from = ZoomTransform::IDENTITY;
        let to = ZoomTransform::new(-200.0, -150.0, 2.0);
        let tr: Transition<()> = Transition::new(from, to, 1_000, 300, extent, None);

        let (start, done) = tr.sample(1_000);
        assert!(!done);
        assert!((start.x - from.x).abs() < 1e-9);
        assert!((start.k - from.k).abs() < 1e-9);

        let (mid, done) = tr.sample(1_150);
        assert!(!done);
        assert!(mid.k > 1.0 && mid.k < 2.0);

        let (end, done) = tr.sample(1_300);
        assert!(done);
        assert_eq!(end, to);
    }
}
