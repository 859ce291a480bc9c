// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Wheel dispatch: pan or zoom.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _; // for `powf`
use understory_zoom_behavior::{
    DeltaMode, EventTarget, InputEvent, TransitionOptions, ZoomEvent, wheel_delta,
};

use crate::config::{PanOnScrollMode, PanZoomConfig};
use crate::engine::InputOutcome;
use crate::filter::FilterConfig;
use crate::recognizer::PanZoomRecognizer;

/// Line-mode wheel deltas are scaled up to roughly match pixel deltas.
const LINE_DELTA_SCALE: f64 = 20.0;

/// How wheel events are handled.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum ScrollStrategy {
    /// The wheel pans; modifier-held wheels may still pinch-zoom.
    Pan {
        mode: PanOnScrollMode,
        speed: f64,
        zoom_on_pinch: bool,
    },
    /// The wheel goes to the recognizer's native wheel zoom.
    Zoom { prevent_scrolling: bool },
}

impl ScrollStrategy {
    pub(crate) fn select(config: &PanZoomConfig) -> Self {
        if config.scroll_pans() {
            Self::Pan {
                mode: config.pan_on_scroll_mode,
                speed: config.pan_on_scroll_speed,
                zoom_on_pinch: config.zoom_on_pinch,
            }
        } else {
            Self::Zoom {
                prevent_scrolling: config.prevent_scrolling,
            }
        }
    }

    pub(crate) fn handle<T, R>(
        &self,
        recognizer: &mut R,
        filter: &FilterConfig,
        event: &InputEvent<T>,
        now: u64,
        out: &mut Vec<ZoomEvent<T>>,
    ) -> InputOutcome
    where
        T: EventTarget,
        R: PanZoomRecognizer<T>,
    {
        let no_wheel = event.is_within_zone(&filter.no_wheel_zone);
        match *self {
            Self::Pan {
                mode,
                speed,
                zoom_on_pinch,
            } => {
                if no_wheel {
                    return InputOutcome::IGNORED;
                }
                let k = recognizer.transform().k;
                if event.ctrl_key() && zoom_on_pinch {
                    let zoom = k * 2_f64.powf(wheel_delta(event));
                    recognizer.scale_to(
                        zoom,
                        Some(event.position),
                        TransitionOptions::IMMEDIATE,
                        Some(event),
                        now,
                        out,
                    );
                } else {
                    let normalize = if event.delta_mode == DeltaMode::Line {
                        LINE_DELTA_SCALE
                    } else {
                        1.0
                    };
                    let dx = match mode {
                        PanOnScrollMode::Vertical => 0.0,
                        _ => event.delta.x * normalize,
                    };
                    let dy = match mode {
                        PanOnScrollMode::Horizontal => 0.0,
                        _ => event.delta.y * normalize,
                    };
                    recognizer.translate_by(-(dx / k) * speed, -(dy / k) * speed, Some(event), out);
                }
                InputOutcome::CONSUMED
            }
            Self::Zoom { prevent_scrolling } => {
                // Pinches zoom even when plain scrolling is left to the host.
                if no_wheel || (!prevent_scrolling && !event.ctrl_key()) {
                    // Keep the host from page-zooming on a pinch over a no-wheel zone.
                    return InputOutcome {
                        prevent_default: no_wheel && event.ctrl_key(),
                        ..InputOutcome::IGNORED
                    };
                }
                InputOutcome {
                    handled: recognizer.handle_wheel(event, now, out),
                    ..InputOutcome::CONSUMED
                }
            }
        }
    }
}
