// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size};

use crate::extent::{ScaleExtent, TranslateExtent};
use crate::transform::{Viewport, ZoomTransform};

/// How [`constrain`] keeps the visible region relative to a [`TranslateExtent`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ClampMode {
    /// Do not adjust translation at all.
    None,
    /// Keep the visible region inside the translate extent.
    ///
    /// When the visible region is larger than the extent along an axis, the
    /// extent is centered in it instead.
    #[default]
    Contain,
    /// Only prevent the visible region from leaving the translate extent
    /// entirely; it is pulled back until the two touch.
    KeepSomeVisible,
}

/// Returns the transform closest to `transform` whose view of
/// `viewport_extent` respects `translate_extent`.
///
/// `viewport_extent` is the host's screen rectangle. Only translation is
/// adjusted; the scale is expected to be clamped already. Unbounded axes of the
/// translate extent are left untouched.
#[must_use]
pub fn constrain(
    transform: ZoomTransform,
    viewport_extent: Rect,
    translate_extent: &TranslateExtent,
    mode: ClampMode,
) -> ZoomTransform {
    let bounds = translate_extent.rect();
    match mode {
        ClampMode::None => transform,
        ClampMode::Contain => {
            let dx0 = transform.invert_x(viewport_extent.x0) - bounds.x0;
            let dx1 = transform.invert_x(viewport_extent.x1) - bounds.x1;
            let dy0 = transform.invert_y(viewport_extent.y0) - bounds.y0;
            let dy1 = transform.invert_y(viewport_extent.y1) - bounds.y1;
            transform.translate(contain_axis(dx0, dx1), contain_axis(dy0, dy1))
        }
        ClampMode::KeepSomeVisible => {
            let visible = transform.invert_rect(viewport_extent);
            if visible.width() <= 0.0 || visible.height() <= 0.0 {
                return transform;
            }

            let mut dx = 0.0;
            let mut dy = 0.0;

            if visible.max_x() < bounds.min_x() {
                dx = bounds.min_x() - visible.max_x();
            } else if visible.min_x() > bounds.max_x() {
                dx = bounds.max_x() - visible.min_x();
            }

            if visible.max_y() < bounds.min_y() {
                dy = bounds.min_y() - visible.max_y();
            } else if visible.min_y() > bounds.max_y() {
                dy = bounds.max_y() - visible.min_y();
            }

            if dx == 0.0 && dy == 0.0 {
                transform
            } else {
                // Moving the visible region by +d in canvas space means moving
                // the content by -d.
                transform.translate(-dx, -dy)
            }
        }
    }
}

/// Canvas-space correction along one axis.
///
/// `d0` is how far the visible minimum edge lies past the extent minimum, `d1`
/// how far the visible maximum edge lies past the extent maximum.
fn contain_axis(d0: f64, d1: f64) -> f64 {
    if d1 > d0 {
        (d0 + d1) / 2.0
    } else {
        let low = d0.min(0.0);
        if low != 0.0 { low } else { d1.max(0.0) }
    }
}

/// Returns the viewport that centers `bounds` in a host of `size`.
///
/// `padding` is a fraction of the bounds added around them (`0.1` leaves 10%
/// slack). The zoom is clamped into `scale_extent`, so very small or very large
/// bounds may not fill the host exactly.
#[must_use]
pub fn viewport_for_bounds(
    bounds: Rect,
    size: Size,
    scale_extent: ScaleExtent,
    padding: f64,
) -> Viewport {
    let x_zoom = size.width / (bounds.width() * (1.0 + padding));
    let y_zoom = size.height / (bounds.height() * (1.0 + padding));
    let zoom = scale_extent.clamp(x_zoom.min(y_zoom));

    let center = bounds.center();
    let x = size.width / 2.0 - center.x * zoom;
    let y = size.height / 2.0 - center.y * zoom;
    Viewport::new(x, y, zoom)
}
