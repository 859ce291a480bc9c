// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Raw input events as delivered by the host.
//!
//! Positions are relative to the host surface's origin, in screen pixels.
//! Timestamps are milliseconds on a monotonic clock chosen by the host; the
//! recognizer and engine only ever compare and add them.

use kurbo::{Point, Vec2};

/// What kind of raw input an [`InputEvent`] carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// A mouse button was pressed.
    MouseDown,
    /// The mouse moved.
    MouseMove,
    /// A mouse button was released.
    MouseUp,
    /// A double click.
    DoubleClick,
    /// A wheel or trackpad scroll.
    Wheel,
    /// A touch point was placed.
    TouchStart,
    /// A touch point moved.
    TouchMove,
    /// A touch point was lifted.
    TouchEnd,
}

impl EventKind {
    /// Returns `true` for the events that can begin a drag gesture.
    #[must_use]
    pub fn is_pointer_down(self) -> bool {
        matches!(self, Self::MouseDown | Self::TouchStart)
    }
}

/// Mouse button that originated an event, using the DOM numbering.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum MouseButton {
    /// Main button, usually the left one (code `0`).
    Primary = 0,
    /// Auxiliary button, usually the wheel/middle one (code `1`).
    Auxiliary = 1,
    /// Secondary button, usually the right one (code `2`).
    Secondary = 2,
    /// Browser back button (code `3`).
    Back = 3,
    /// Browser forward button (code `4`).
    Forward = 4,
}

impl MouseButton {
    /// Returns the DOM button code.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Returns the button for a DOM button code, if it is one of the five
    /// standard buttons.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Self::Primary),
            1 => Some(Self::Auxiliary),
            2 => Some(Self::Secondary),
            3 => Some(Self::Back),
            4 => Some(Self::Forward),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Keyboard modifiers held while an event fired.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Control. Browsers also set this for trackpad pinch gestures.
        const CTRL  = 0b0000_0001;
        /// Shift.
        const SHIFT = 0b0000_0010;
        /// Alt / Option.
        const ALT   = 0b0000_0100;
        /// Meta / Command / Windows.
        const META  = 0b0000_1000;
    }
}

/// Unit of a wheel event's delta.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum DeltaMode {
    /// Delta is in pixels.
    #[default]
    Pixel,
    /// Delta is in lines.
    Line,
    /// Delta is in pages.
    Page,
}

/// Host element an event was dispatched to.
///
/// The only question the pan/zoom layers ask about a target is whether it lies
/// inside a marked region, such as a "no wheel" zone or a diagram node.
/// Hosts answer it however their element tree works.
pub trait EventTarget {
    /// Returns `true` if this target is inside a region marked with `zone`.
    fn is_within_zone(&self, zone: &str) -> bool;
}

impl EventTarget for () {
    fn is_within_zone(&self, _zone: &str) -> bool {
        false
    }
}

impl<T: EventTarget + ?Sized> EventTarget for &T {
    fn is_within_zone(&self, zone: &str) -> bool {
        (**self).is_within_zone(zone)
    }
}

/// A raw input event.
#[derive(Clone, Debug, PartialEq)]
pub struct InputEvent<T> {
    /// Event kind.
    pub kind: EventKind,
    /// Element the event was dispatched to.
    pub target: T,
    /// Pointer position relative to the host surface.
    pub position: Point,
    /// Originating mouse button; `None` for touch and wheel input.
    pub button: Option<MouseButton>,
    /// Modifiers held while the event fired.
    pub modifiers: Modifiers,
    /// Wheel delta; zero for non-wheel events.
    pub delta: Vec2,
    /// Unit of [`InputEvent::delta`].
    pub delta_mode: DeltaMode,
    /// Number of active touch points for touch events.
    pub touch_count: u8,
    /// Milliseconds on the host's monotonic clock.
    pub timestamp: u64,
}

impl<T> InputEvent<T> {
    /// Creates an event of `kind` on `target` at the host origin.
    #[must_use]
    pub fn new(kind: EventKind, target: T) -> Self {
        Self {
            kind,
            target,
            position: Point::ZERO,
            button: None,
            modifiers: Modifiers::empty(),
            delta: Vec2::ZERO,
            delta_mode: DeltaMode::Pixel,
            touch_count: 0,
            timestamp: 0,
        }
    }

    /// Creates a mouse down event with `button` at `position`.
    #[must_use]
    pub fn mouse_down(target: T, position: Point, button: MouseButton) -> Self {
        Self::new(EventKind::MouseDown, target)
            .with_position(position)
            .with_button(button)
    }

    /// Creates a mouse move event at `position`.
    #[must_use]
    pub fn mouse_move(target: T, position: Point) -> Self {
        Self::new(EventKind::MouseMove, target).with_position(position)
    }

    /// Creates a mouse up event with `button` at `position`.
    #[must_use]
    pub fn mouse_up(target: T, position: Point, button: MouseButton) -> Self {
        Self::new(EventKind::MouseUp, target)
            .with_position(position)
            .with_button(button)
    }

    /// Creates a wheel event at `position` with a pixel-mode delta.
    #[must_use]
    pub fn wheel(target: T, position: Point, delta: Vec2) -> Self {
        Self::new(EventKind::Wheel, target)
            .with_position(position)
            .with_delta(delta, DeltaMode::Pixel)
    }

    /// Sets the pointer position.
    #[must_use]
    pub fn with_position(mut self, position: Point) -> Self {
        self.position = position;
        self
    }

    /// Sets the originating mouse button.
    #[must_use]
    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = Some(button);
        self
    }

    /// Sets the held modifiers.
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Sets the wheel delta and its unit.
    #[must_use]
    pub fn with_delta(mut self, delta: Vec2, mode: DeltaMode) -> Self {
        self.delta = delta;
        self.delta_mode = mode;
        self
    }

    /// Sets the number of active touch points.
    #[must_use]
    pub fn with_touch_count(mut self, count: u8) -> Self {
        self.touch_count = count;
        self
    }

    /// Sets the timestamp in milliseconds.
    #[must_use]
    pub fn at(mut self, timestamp: u64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Returns `true` for wheel events.
    #[must_use]
    pub fn is_wheel(&self) -> bool {
        self.kind == EventKind::Wheel
    }

    /// Returns `true` if the control modifier (or a trackpad pinch) is held.
    #[must_use]
    pub fn ctrl_key(&self) -> bool {
        self.modifiers.contains(Modifiers::CTRL)
    }

    /// Returns `true` if the shift modifier is held.
    #[must_use]
    pub fn shift_key(&self) -> bool {
        self.modifiers.contains(Modifiers::SHIFT)
    }
}

impl<T: EventTarget> InputEvent<T> {
    /// Returns `true` if the event's target is inside `zone`.
    #[must_use]
    pub fn is_within_zone(&self, zone: &str) -> bool {
        self.target.is_within_zone(zone)
    }
}

/// Scale applied to a raw wheel delta for each [`DeltaMode`].
#[must_use]
pub fn delta_mode_factor(mode: DeltaMode) -> f64 {
    match mode {
        DeltaMode::Line => 0.05,
        DeltaMode::Page => 1.0,
        DeltaMode::Pixel => 0.002,
    }
}

/// Default wheel-to-zoom exponent: the zoom changes by `2^wheel_delta`.
///
/// Modifier-held (pinch) wheels are ten times as sensitive.
#[must_use]
pub fn wheel_delta<T>(event: &InputEvent<T>) -> f64 {
    let pinch = if event.ctrl_key() { 10.0 } else { 1.0 };
    -event.delta.y * delta_mode_factor(event.delta_mode) * pinch
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Vec2};

    use super::*;

    struct Zoned(&'static [&'static str]);

    impl EventTarget for Zoned {
        fn is_within_zone(&self, zone: &str) -> bool {
            self.0.iter().any(|z| *z == zone)
        }
    }

    #[test]
    fn button_codes_round_trip_through_dom_numbering() {
        assert_eq!(MouseButton::Secondary.code(), 2);
        assert_eq!(MouseButton::from_code(1), Some(MouseButton::Auxiliary));
        assert_eq!(MouseButton::from_code(7), None);
    }

    #[test]
    fn builders_fill_in_fields() {
        let ev = InputEvent::mouse_down((), Point::new(3.0, 4.0), MouseButton::Secondary)
            .with_modifiers(Modifiers::CTRL | Modifiers::SHIFT)
            .at(42);
        assert_eq!(ev.kind, EventKind::MouseDown);
        assert_eq!(ev.button, Some(MouseButton::Secondary));
        assert!(ev.ctrl_key());
        assert!(ev.shift_key());
        assert_eq!(ev.timestamp, 42);
        assert!(ev.kind.is_pointer_down());
        assert!(!ev.is_wheel());
    }

    #[test]
    fn zone_queries_go_to_the_target() {
        let ev = InputEvent::new(EventKind::Wheel, Zoned(&["nowheel"]));
        assert!(ev.is_within_zone("nowheel"));
        assert!(!ev.is_within_zone("nopan"));
        assert!(!InputEvent::new(EventKind::Wheel, ()).is_within_zone("nowheel"));
    }

    #[test]
    fn wheel_delta_scales_by_mode_and_pinch() {
        let px = InputEvent::wheel((), Point::ZERO, Vec2::new(0.0, 100.0));
        assert_eq!(wheel_delta(&px), -100.0 * 0.002);

        let line = px.clone().with_delta(Vec2::new(0.0, 3.0), DeltaMode::Line);
        assert_eq!(wheel_delta(&line), -3.0 * 0.05);

        let pinch = px.with_modifiers(Modifiers::CTRL);
        assert_eq!(wheel_delta(&pinch), -100.0 * 0.002 * 10.0);
    }
}
