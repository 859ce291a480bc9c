// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Engine configuration snapshot.

use alloc::string::String;

use smallvec::SmallVec;
use understory_zoom_behavior::MouseButton;
use understory_zoom_transform::{ClampMode, ScaleExtent, TranslateExtent};

/// Which mouse buttons may pan the canvas by dragging.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PanOnDrag {
    /// Dragging never pans.
    Disabled,
    /// Dragging with the primary or auxiliary button (or a touch) pans.
    #[default]
    Enabled,
    /// Only mouse drags with one of these buttons pan.
    ///
    /// Including [`MouseButton::Secondary`] turns on right-click panning.
    Buttons(SmallVec<[MouseButton; 4]>),
}

impl PanOnDrag {
    /// Restricts panning to `buttons`.
    #[must_use]
    pub fn buttons(buttons: impl IntoIterator<Item = MouseButton>) -> Self {
        Self::Buttons(buttons.into_iter().collect())
    }

    /// Returns `false` only for [`PanOnDrag::Disabled`].
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    /// Returns `true` if `button` is in an explicit button set.
    #[must_use]
    pub fn lists(&self, button: Option<MouseButton>) -> bool {
        match (self, button) {
            (Self::Buttons(set), Some(button)) => set.contains(&button),
            _ => false,
        }
    }

    /// Returns `true` when the secondary button is configured to pan.
    #[must_use]
    pub fn is_right_click_pan(&self) -> bool {
        self.lists(Some(MouseButton::Secondary))
    }
}

impl From<bool> for PanOnDrag {
    fn from(enabled: bool) -> Self {
        if enabled { Self::Enabled } else { Self::Disabled }
    }
}

/// Axes a pan-on-scroll gesture may move along.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PanOnScrollMode {
    /// Both axes.
    #[default]
    Free,
    /// Vertical only; horizontal wheel deltas are ignored.
    Vertical,
    /// Horizontal only; vertical wheel deltas are ignored.
    Horizontal,
}

/// Behavior flags and limits of a [`PanZoom`](crate::PanZoom) engine.
///
/// The engine never holds a reference into a config: hand a new snapshot to
/// [`PanZoom::update`](crate::PanZoom::update) and every handler is rebuilt
/// from it.
#[derive(Clone, Debug, PartialEq)]
pub struct PanZoomConfig {
    /// Zoom limits.
    pub scale_extent: ScaleExtent,
    /// Pan limits in canvas space.
    pub translate_extent: TranslateExtent,
    /// How translation is held against [`PanZoomConfig::translate_extent`].
    ///
    /// The default [`ClampMode::Contain`] never reveals canvas outside the
    /// extent: from the identity transform with extent `[[0, 0], [1000, 1000]]`,
    /// a drag of `(50, -20)` commits `(0, -20, 1)`. [`ClampMode::KeepSomeVisible`]
    /// only keeps some of the extent on screen, so the same drag commits
    /// `(50, -20, 1)`.
    pub clamp_mode: ClampMode,
    /// Which drags pan.
    pub pan_on_drag: PanOnDrag,
    /// Wheel scrolling pans instead of zooming.
    pub pan_on_scroll: bool,
    /// Axes a pan-on-scroll may move along.
    pub pan_on_scroll_mode: PanOnScrollMode,
    /// Multiplier applied to pan-on-scroll deltas.
    pub pan_on_scroll_speed: f64,
    /// Wheel scrolling zooms.
    pub zoom_on_scroll: bool,
    /// Trackpad pinches (modifier-held wheels) zoom.
    pub zoom_on_pinch: bool,
    /// Double clicks zoom.
    pub zoom_on_double_click: bool,
    /// The zoom activation key is held, temporarily making scroll zoom.
    pub zoom_activation_key_pressed: bool,
    /// Zoom-on-scroll suppresses the host's native scrolling.
    pub prevent_scrolling: bool,
    /// Zone in which non-wheel gestures never start.
    pub no_pan_zone: String,
    /// Zone in which wheel events are ignored.
    pub no_wheel_zone: String,
    /// Zone marking diagram nodes.
    pub node_zone: String,
    /// Zone marking diagram edges.
    pub edge_zone: String,
    /// A marquee selection is in progress and owns the pointer.
    pub user_selection_active: bool,
    /// Elements can be selected. Only recorded: changing it rebinds the filter.
    pub elements_selectable: bool,
    /// Distance a pointer may travel before a press counts as a drag.
    pub click_distance: f64,
}

impl Default for PanZoomConfig {
    fn default() -> Self {
        Self {
            scale_extent: ScaleExtent::default(),
            translate_extent: TranslateExtent::UNBOUNDED,
            clamp_mode: ClampMode::Contain,
            pan_on_drag: PanOnDrag::Enabled,
            pan_on_scroll: false,
            pan_on_scroll_mode: PanOnScrollMode::Free,
            pan_on_scroll_speed: 0.5,
            zoom_on_scroll: true,
            zoom_on_pinch: true,
            zoom_on_double_click: true,
            zoom_activation_key_pressed: false,
            prevent_scrolling: true,
            no_pan_zone: String::from("nopan"),
            no_wheel_zone: String::from("nowheel"),
            node_zone: String::from("node"),
            edge_zone: String::from("edge"),
            user_selection_active: false,
            elements_selectable: true,
            click_distance: 0.0,
        }
    }
}

impl PanZoomConfig {
    /// Sets the zoom limits.
    #[must_use]
    pub fn with_scale_extent(mut self, extent: ScaleExtent) -> Self {
        self.scale_extent = extent;
        self
    }

    /// Sets the pan limits.
    #[must_use]
    pub fn with_translate_extent(mut self, extent: TranslateExtent) -> Self {
        self.translate_extent = extent;
        self
    }

    /// Sets the clamp mode.
    #[must_use]
    pub fn with_clamp_mode(mut self, mode: ClampMode) -> Self {
        self.clamp_mode = mode;
        self
    }

    /// Sets which drags pan.
    #[must_use]
    pub fn with_pan_on_drag(mut self, pan_on_drag: impl Into<PanOnDrag>) -> Self {
        self.pan_on_drag = pan_on_drag.into();
        self
    }

    /// Makes the wheel pan instead of zoom.
    #[must_use]
    pub fn with_pan_on_scroll(mut self, enabled: bool) -> Self {
        self.pan_on_scroll = enabled;
        self
    }

    /// Sets the pan-on-scroll axes.
    #[must_use]
    pub fn with_pan_on_scroll_mode(mut self, mode: PanOnScrollMode) -> Self {
        self.pan_on_scroll_mode = mode;
        self
    }

    /// Sets the pan-on-scroll speed.
    #[must_use]
    pub fn with_pan_on_scroll_speed(mut self, speed: f64) -> Self {
        self.pan_on_scroll_speed = speed;
        self
    }

    /// Enables or disables zoom on scroll.
    #[must_use]
    pub fn with_zoom_on_scroll(mut self, enabled: bool) -> Self {
        self.zoom_on_scroll = enabled;
        self
    }

    /// Enables or disables pinch zoom.
    #[must_use]
    pub fn with_zoom_on_pinch(mut self, enabled: bool) -> Self {
        self.zoom_on_pinch = enabled;
        self
    }

    /// Enables or disables double-click zoom.
    #[must_use]
    pub fn with_zoom_on_double_click(mut self, enabled: bool) -> Self {
        self.zoom_on_double_click = enabled;
        self
    }

    /// Records whether the zoom activation key is held.
    #[must_use]
    pub fn with_zoom_activation_key_pressed(mut self, pressed: bool) -> Self {
        self.zoom_activation_key_pressed = pressed;
        self
    }

    /// Enables or disables native scroll suppression for zoom-on-scroll.
    #[must_use]
    pub fn with_prevent_scrolling(mut self, enabled: bool) -> Self {
        self.prevent_scrolling = enabled;
        self
    }

    /// Sets the no-pan zone marker.
    #[must_use]
    pub fn with_no_pan_zone(mut self, zone: impl Into<String>) -> Self {
        self.no_pan_zone = zone.into();
        self
    }

    /// Sets the no-wheel zone marker.
    #[must_use]
    pub fn with_no_wheel_zone(mut self, zone: impl Into<String>) -> Self {
        self.no_wheel_zone = zone.into();
        self
    }

    /// Records whether a marquee selection is active.
    #[must_use]
    pub fn with_user_selection_active(mut self, active: bool) -> Self {
        self.user_selection_active = active;
        self
    }

    /// Records whether elements are selectable.
    #[must_use]
    pub fn with_elements_selectable(mut self, selectable: bool) -> Self {
        self.elements_selectable = selectable;
        self
    }

    /// Sets the click distance.
    #[must_use]
    pub fn with_click_distance(mut self, distance: f64) -> Self {
        self.click_distance = distance;
        self
    }

    /// Returns `true` if the wheel currently pans rather than zooms.
    #[must_use]
    pub fn scroll_pans(&self) -> bool {
        self.pan_on_scroll && !self.zoom_activation_key_pressed && !self.user_selection_active
    }
}
