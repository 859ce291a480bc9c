// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

use crate::error::ExtentError;

/// Inclusive `[min, max]` range that every committed zoom factor lies in.
///
/// Both limits are finite and strictly positive, and `min <= max`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleExtent {
    min: f64,
    max: f64,
}

impl ScaleExtent {
    /// Creates a new scale extent, validating the limits.
    pub fn new(min: f64, max: f64) -> Result<Self, ExtentError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ExtentError::NonFiniteZoom);
        }
        if min <= 0.0 {
            return Err(ExtentError::NonPositiveZoom(min));
        }
        if max <= 0.0 {
            return Err(ExtentError::NonPositiveZoom(max));
        }
        if min > max {
            return Err(ExtentError::InvertedZoomRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Returns the minimum zoom factor.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Returns the maximum zoom factor.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamps `zoom` into this extent.
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }

    /// Returns `true` if `zoom` lies within this extent.
    #[must_use]
    pub fn contains(&self, zoom: f64) -> bool {
        zoom >= self.min && zoom <= self.max
    }
}

impl Default for ScaleExtent {
    /// `[0.5, 2.0]`.
    fn default() -> Self {
        Self { min: 0.5, max: 2.0 }
    }
}

/// Pan limits in canvas space.
///
/// The extent may be unbounded (infinite corners) along either axis, which is
/// the default.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TranslateExtent {
    rect: Rect,
}

impl TranslateExtent {
    /// An extent that never restricts panning.
    pub const UNBOUNDED: Self = Self {
        rect: Rect::new(
            f64::NEG_INFINITY,
            f64::NEG_INFINITY,
            f64::INFINITY,
            f64::INFINITY,
        ),
    };

    /// Creates a translate extent from its minimum and maximum corners.
    ///
    /// Corners may be infinite but not NaN, and `min` must not exceed `max`
    /// along either axis.
    pub fn new(min: Point, max: Point) -> Result<Self, ExtentError> {
        if min.x.is_nan() || min.y.is_nan() || max.x.is_nan() || max.y.is_nan() {
            return Err(ExtentError::NonFiniteTranslate);
        }
        if min.x > max.x || min.y > max.y {
            return Err(ExtentError::InvertedTranslate);
        }
        Ok(Self {
            rect: Rect::from_points(min, max),
        })
    }

    /// Creates a translate extent from `[[x0, y0], [x1, y1]]` corner pairs.
    pub fn from_corners(corners: [[f64; 2]; 2]) -> Result<Self, ExtentError> {
        let [[x0, y0], [x1, y1]] = corners;
        Self::new(Point::new(x0, y0), Point::new(x1, y1))
    }

    /// Returns the extent as a rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Point {
        Point::new(self.rect.x0, self.rect.y0)
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Point {
        Point::new(self.rect.x1, self.rect.y1)
    }

    /// Returns `true` if no axis is bounded.
    #[must_use]
    pub fn is_unbounded(&self) -> bool {
        *self == Self::UNBOUNDED
    }
}

impl Default for TranslateExtent {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{ScaleExtent, TranslateExtent};
    use crate::ExtentError;

    #[test]
    fn scale_extent_rejects_malformed_limits() {
        assert_eq!(
            ScaleExtent::new(2.0, 0.5),
            Err(ExtentError::InvertedZoomRange { min: 2.0, max: 0.5 })
        );
        assert_eq!(
            ScaleExtent::new(0.0, 1.0),
            Err(ExtentError::NonPositiveZoom(0.0))
        );
        assert_eq!(
            ScaleExtent::new(0.1, f64::INFINITY),
            Err(ExtentError::NonFiniteZoom)
        );
        assert!(ScaleExtent::new(1.0, 1.0).is_ok());
    }

    #[test]
    fn scale_extent_clamps_to_nearest_bound() {
        let extent = ScaleExtent::new(0.5, 2.0).unwrap();
        assert_eq!(extent.clamp(3.0), 2.0);
        assert_eq!(extent.clamp(0.1), 0.5);
        assert_eq!(extent.clamp(1.25), 1.25);
        assert!(extent.contains(0.5));
        assert!(!extent.contains(2.01));
    }

    #[test]
    fn translate_extent_validates_corners() {
        assert_eq!(
            TranslateExtent::from_corners([[10.0, 0.0], [0.0, 10.0]]),
            Err(ExtentError::InvertedTranslate)
        );
        assert_eq!(
            TranslateExtent::from_corners([[f64::NAN, 0.0], [0.0, 10.0]]),
            Err(ExtentError::NonFiniteTranslate)
        );

        let extent = TranslateExtent::from_corners([[0.0, 0.0], [1000.0, 500.0]]).unwrap();
        assert_eq!(extent.min(), Point::ZERO);
        assert_eq!(extent.max(), Point::new(1000.0, 500.0));
        assert!(!extent.is_unbounded());
        assert!(TranslateExtent::default().is_unbounded());
    }
}
