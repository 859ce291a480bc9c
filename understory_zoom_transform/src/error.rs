// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Error returned when building a [`ScaleExtent`](crate::ScaleExtent) or
/// [`TranslateExtent`](crate::TranslateExtent) from invalid limits.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExtentError {
    /// A zoom limit was NaN or infinite.
    NonFiniteZoom,
    /// A zoom limit was zero or negative.
    NonPositiveZoom(f64),
    /// The minimum zoom was larger than the maximum zoom.
    InvertedZoomRange {
        /// Requested minimum zoom.
        min: f64,
        /// Requested maximum zoom.
        max: f64,
    },
    /// A translate extent corner was NaN.
    NonFiniteTranslate,
    /// The translate extent's first corner lies beyond its second corner.
    InvertedTranslate,
}

impl fmt::Display for ExtentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteZoom => f.write_str("zoom limit is not finite"),
            Self::NonPositiveZoom(z) => write!(f, "zoom limit {z} is not positive"),
            Self::InvertedZoomRange { min, max } => {
                write!(f, "minimum zoom {min} is larger than maximum zoom {max}")
            }
            Self::NonFiniteTranslate => f.write_str("translate extent corner is NaN"),
            Self::InvertedTranslate => {
                f.write_str("translate extent minimum corner exceeds its maximum corner")
            }
        }
    }
}

impl core::error::Error for ExtentError {}
