// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gesture admission policy.
//!
//! [`FilterConfig::admits`] decides whether a raw event may start a gesture.
//! Rules are checked in a fixed order and the first one that matches wins:
//!
//! 1. An auxiliary-button press on a node or edge is always admitted.
//! 2. With every interaction disabled, nothing is admitted.
//! 3. While a marquee selection is active, nothing is admitted.
//! 4. Double clicks are rejected when double-click zoom is off.
//! 5. Wheels inside the no-wheel zone are rejected.
//! 6. Non-wheel events inside the no-pan zone are rejected, and so are wheels
//!    there while the wheel pans.
//! 7. Modifier-held wheels (pinches) are rejected when pinch zoom is off, and
//!    so are multi-touch starts.
//! 8. Wheels are rejected when no wheel behavior is enabled.
//! 9. Presses are rejected when drag panning is off.
//! 10. Mouse presses with a button outside an explicit pan button set are
//!     rejected.
//! 11. Anything else is admitted if it is not modifier-held (wheels excepted)
//!     and its button is listed, absent, primary, or auxiliary.

use alloc::string::String;

use tracing::trace;
use understory_zoom_behavior::{EventKind, EventTarget, InputEvent, MouseButton};

use crate::config::{PanOnDrag, PanZoomConfig};

/// Snapshot of the configuration the gesture filter depends on.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterConfig {
    /// Which drags pan.
    pub pan_on_drag: PanOnDrag,
    /// Wheel scrolling pans.
    pub pan_on_scroll: bool,
    /// Wheel scrolling zooms.
    pub zoom_on_scroll: bool,
    /// Pinches zoom.
    pub zoom_on_pinch: bool,
    /// Double clicks zoom.
    pub zoom_on_double_click: bool,
    /// The zoom activation key is held.
    pub zoom_activation_key_pressed: bool,
    /// A marquee selection is active.
    pub user_selection_active: bool,
    /// Elements can be selected.
    pub elements_selectable: bool,
    /// No-pan zone marker.
    pub no_pan_zone: String,
    /// No-wheel zone marker.
    pub no_wheel_zone: String,
    /// Node zone marker.
    pub node_zone: String,
    /// Edge zone marker.
    pub edge_zone: String,
}

impl From<&PanZoomConfig> for FilterConfig {
    fn from(config: &PanZoomConfig) -> Self {
        Self {
            pan_on_drag: config.pan_on_drag.clone(),
            pan_on_scroll: config.pan_on_scroll,
            zoom_on_scroll: config.zoom_on_scroll,
            zoom_on_pinch: config.zoom_on_pinch,
            zoom_on_double_click: config.zoom_on_double_click,
            zoom_activation_key_pressed: config.zoom_activation_key_pressed,
            user_selection_active: config.user_selection_active,
            elements_selectable: config.elements_selectable,
            no_pan_zone: config.no_pan_zone.clone(),
            no_wheel_zone: config.no_wheel_zone.clone(),
            node_zone: config.node_zone.clone(),
            edge_zone: config.edge_zone.clone(),
        }
    }
}

impl FilterConfig {
    /// Returns `true` if `event` may start a gesture.
    #[must_use]
    pub fn admits<T: EventTarget>(&self, event: &InputEvent<T>) -> bool {
        let admitted = self.first_matching_rule(event);
        if !admitted {
            trace!(kind = ?event.kind, button = ?event.button, "gesture filter rejected event");
        }
        admitted
    }

    fn first_matching_rule<T: EventTarget>(&self, event: &InputEvent<T>) -> bool {
        let wheel = event.is_wheel();
        let press = event.kind.is_pointer_down();
        let zoom_scroll = self.zoom_on_scroll || self.zoom_activation_key_pressed;
        let pinch = self.zoom_on_pinch && event.ctrl_key();

        if event.kind == EventKind::MouseDown
            && event.button == Some(MouseButton::Auxiliary)
            && (event.is_within_zone(&self.node_zone) || event.is_within_zone(&self.edge_zone))
        {
            return true;
        }

        if !self.pan_on_drag.is_enabled()
            && !zoom_scroll
            && !self.pan_on_scroll
            && !self.zoom_on_double_click
            && !self.zoom_on_pinch
        {
            return false;
        }

        if self.user_selection_active {
            return false;
        }

        if event.kind == EventKind::DoubleClick && !self.zoom_on_double_click {
            return false;
        }

        if wheel && event.is_within_zone(&self.no_wheel_zone) {
            return false;
        }

        let wheel_pans = self.pan_on_scroll && !self.zoom_activation_key_pressed;
        if event.is_within_zone(&self.no_pan_zone) && (!wheel || wheel_pans) {
            return false;
        }

        if !self.zoom_on_pinch
            && ((wheel && event.ctrl_key())
                || (event.kind == EventKind::TouchStart && event.touch_count > 1))
        {
            return false;
        }

        if wheel && !zoom_scroll && !self.pan_on_scroll && !pinch {
            return false;
        }

        if press && !self.pan_on_drag.is_enabled() {
            return false;
        }

        if event.kind == EventKind::MouseDown
            && matches!(self.pan_on_drag, PanOnDrag::Buttons(_))
            && !self.pan_on_drag.lists(event.button)
        {
            return false;
        }

        let button_allowed = self.pan_on_drag.lists(event.button)
            || matches!(
                event.button,
                None | Some(MouseButton::Primary | MouseButton::Auxiliary)
            );
        (!event.ctrl_key() || wheel) && button_allowed
    }
}
