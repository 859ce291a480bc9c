// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for the `understory_pan_zoom` crate.
//!
//! These drive a `PanZoom` engine end to end, the way a host would: raw input
//! with timestamps goes in, `advance` lets time pass, and observers record what
//! comes out.

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Size, Vec2};
use understory_pan_zoom::{
    ClampMode, EventKind, EventTarget, InputEvent, InputOutcome, Modifiers, MouseButton,
    PanOnDrag, PanOnScrollMode, PanZoom, PanZoomConfig, TransitionOptions, TranslateExtent,
    Viewport, ZoomTransform,
};

#[derive(Clone, Copy, Debug, PartialEq)]
struct Target(&'static [&'static str]);

impl EventTarget for Target {
    fn is_within_zone(&self, zone: &str) -> bool {
        self.0.iter().any(|z| *z == zone)
    }
}

const PANE: Target = Target(&[]);
const NODE: Target = Target(&["node"]);

#[derive(Default)]
struct Log {
    dragging: Vec<bool>,
    transforms: Vec<ZoomTransform>,
    starts: Vec<(Option<EventKind>, Viewport)>,
    moves: Vec<Viewport>,
    ends: Vec<(Option<EventKind>, Viewport)>,
    viewport_ends: Vec<Viewport>,
    context_menus: usize,
}

fn observed(config: PanZoomConfig) -> (PanZoom<Target>, Rc<RefCell<Log>>) {
    let mut engine = PanZoom::new(config);
    engine.attach(Size::new(400.0, 300.0), Viewport::new(0.0, 0.0, 1.0));

    let log = Rc::new(RefCell::new(Log::default()));
    let obs = engine.observers_mut();
    let l = log.clone();
    obs.on_dragging_change = Some(Box::new(move |d: bool| l.borrow_mut().dragging.push(d)));
    let l = log.clone();
    obs.on_transform_change = Some(Box::new(move |t: ZoomTransform| {
        l.borrow_mut().transforms.push(t);
    }));
    let l = log.clone();
    obs.on_move_start = Some(Box::new(move |e: Option<&InputEvent<Target>>, v: Viewport| {
        l.borrow_mut().starts.push((e.map(|e| e.kind), v));
    }));
    let l = log.clone();
    obs.on_move = Some(Box::new(move |_: Option<&InputEvent<Target>>, v: Viewport| {
        l.borrow_mut().moves.push(v);
    }));
    let l = log.clone();
    obs.on_move_end = Some(Box::new(move |e: Option<&InputEvent<Target>>, v: Viewport| {
        l.borrow_mut().ends.push((e.map(|e| e.kind), v));
    }));
    let l = log.clone();
    obs.on_viewport_change_end = Some(Box::new(move |v: Viewport| {
        l.borrow_mut().viewport_ends.push(v);
    }));
    let l = log.clone();
    obs.on_pane_context_menu = Some(Box::new(move |_: &InputEvent<Target>| {
        l.borrow_mut().context_menus += 1;
    }));
    (engine, log)
}

fn bounded(mode: ClampMode) -> PanZoomConfig {
    let extent = TranslateExtent::from_corners([[0.0, 0.0], [1000.0, 1000.0]]).unwrap();
    PanZoomConfig::default()
        .with_translate_extent(extent)
        .with_clamp_mode(mode)
}

fn drag(
    engine: &mut PanZoom<Target>,
    button: MouseButton,
    from: Point,
    to: Option<Point>,
    t0: u64,
) -> InputOutcome {
    engine.handle_input(&InputEvent::mouse_down(PANE, from, button).at(t0));
    let end = match to {
        Some(to) => {
            engine.handle_input(&InputEvent::mouse_move(PANE, to).at(t0 + 16));
            to
        }
        None => from,
    };
    engine.handle_input(&InputEvent::mouse_up(PANE, end, button).at(t0 + 32))
}

#[test]
fn drag_without_clamping_moves_by_the_pointer_delta() {
    let (mut engine, log) = observed(bounded(ClampMode::KeepSomeVisible));
    let (from, to) = (Point::new(100.0, 100.0), Point::new(150.0, 80.0));
    drag(&mut engine, MouseButton::Primary, from, Some(to), 0);
    engine.advance(32);

    let log = log.borrow();
    assert_eq!(engine.viewport(), Viewport::new(50.0, -20.0, 1.0));
    assert_eq!(log.moves, [Viewport::new(50.0, -20.0, 1.0)]);
    assert_eq!(log.dragging, [true, false]);
    assert_eq!(log.starts, [(Some(EventKind::MouseDown), Viewport::new(0.0, 0.0, 1.0))]);
    assert_eq!(log.ends, [(Some(EventKind::MouseUp), Viewport::new(50.0, -20.0, 1.0))]);
    assert_eq!(log.viewport_ends, [Viewport::new(50.0, -20.0, 1.0)]);
}

#[test]
fn contained_drag_is_pulled_back_inside_the_extent() {
    let (mut engine, log) = observed(bounded(ClampMode::Contain));
    let (from, to) = (Point::new(100.0, 100.0), Point::new(150.0, 80.0));
    drag(&mut engine, MouseButton::Primary, from, Some(to), 0);
    assert_eq!(engine.viewport(), Viewport::new(0.0, -20.0, 1.0));
    assert_eq!(log.borrow().moves, [Viewport::new(0.0, -20.0, 1.0)]);
}

#[test]
fn scroll_pans_debounce_into_a_single_end_notification() {
    let (mut engine, log) = observed(PanZoomConfig::default().with_pan_on_scroll(true));
    let wheel = |dy: f64, t: u64| InputEvent::wheel(PANE, Point::ZERO, Vec2::new(0.0, dy)).at(t);

    assert!(engine.handle_input(&wheel(10.0, 0)).prevent_default);
    engine.handle_input(&wheel(10.0, 8));
    engine.advance(100);
    assert!(log.borrow().ends.is_empty());

    engine.advance(200);
    let log = log.borrow();
    assert_eq!(log.ends, [(Some(EventKind::Wheel), Viewport::new(0.0, -10.0, 1.0))]);
    assert_eq!(log.viewport_ends.len(), 1);
    assert_eq!(log.transforms.len(), 2);
}

#[test]
fn vertical_pan_on_scroll_ignores_horizontal_deltas() {
    let config = PanZoomConfig::default()
        .with_pan_on_scroll(true)
        .with_pan_on_scroll_mode(PanOnScrollMode::Vertical);
    let (mut engine, _log) = observed(config);
    engine.handle_input(&InputEvent::wheel(PANE, Point::ZERO, Vec2::new(120.0, 40.0)));
    assert_eq!(engine.viewport().x, 0.0);
    assert_eq!(engine.viewport().y, -20.0);
}

#[test]
fn pinch_during_pan_on_scroll_uses_the_pinch_formula() {
    let (mut engine, _log) = observed(PanZoomConfig::default().with_pan_on_scroll(true));
    let z0 = engine.viewport().zoom;
    let d = -20.0;
    let pinch = InputEvent::wheel(PANE, Point::new(200.0, 150.0), Vec2::new(0.0, d))
        .with_modifiers(Modifiers::CTRL);
    engine.handle_input(&pinch);
    assert_eq!(engine.viewport().zoom, z0 * 2_f64.powf(-d * 0.002 * 10.0));
}

#[test]
fn wheel_zoom_is_vetoed_without_prevent_scrolling() {
    let (mut engine, log) = observed(PanZoomConfig::default().with_prevent_scrolling(false));
    let wheel = InputEvent::wheel(PANE, Point::ZERO, Vec2::new(0.0, -50.0));
    let outcome = engine.handle_input(&wheel);
    assert!(!outcome.handled);
    assert!(!outcome.prevent_default);
    assert!(log.borrow().transforms.is_empty());
}

#[test]
fn pinch_zooms_without_prevent_scrolling() {
    let (mut engine, log) = observed(PanZoomConfig::default().with_prevent_scrolling(false));
    let pinch = InputEvent::wheel(PANE, Point::new(200.0, 150.0), Vec2::new(0.0, -10.0))
        .with_modifiers(Modifiers::CTRL);
    let outcome = engine.handle_input(&pinch);
    assert!(outcome.handled);
    assert!(outcome.prevent_default);
    assert!(engine.viewport().zoom > 1.0);
    assert_eq!(log.borrow().transforms.len(), 1);
}

#[test]
fn ctrl_wheel_pans_when_pinch_zoom_is_off() {
    let config = PanZoomConfig::default()
        .with_pan_on_scroll(true)
        .with_zoom_on_pinch(false);
    let (mut engine, _log) = observed(config);
    let wheel = InputEvent::wheel(PANE, Point::ZERO, Vec2::new(0.0, 10.0))
        .with_modifiers(Modifiers::CTRL);
    let outcome = engine.handle_input(&wheel);
    assert!(outcome.handled);
    assert!(outcome.prevent_default);
    assert_eq!(engine.viewport(), Viewport::new(0.0, -5.0, 1.0));
}

#[test]
fn update_switches_the_scroll_strategy() {
    let config = PanZoomConfig::default().with_pan_on_scroll(true);
    let (mut engine, _log) = observed(config.clone());
    let wheel = |dy: f64, t: u64| {
        InputEvent::wheel(PANE, Point::new(200.0, 150.0), Vec2::new(0.0, dy)).at(t)
    };

    engine.handle_input(&wheel(10.0, 0));
    assert_eq!(engine.viewport(), Viewport::new(0.0, -5.0, 1.0));

    // Holding the activation key turns the same wheel into a zoom.
    engine.update(config.clone().with_zoom_activation_key_pressed(true));
    engine.handle_input(&wheel(-100.0, 1_000));
    let zoomed = engine.viewport();
    assert!((zoomed.zoom - 2_f64.powf(0.2)).abs() < 1e-9);
    engine.advance(2_000);

    engine.update(config);
    engine.handle_input(&wheel(10.0, 3_000));
    let panned = engine.viewport();
    assert_eq!(panned.zoom, zoomed.zoom);
    assert_eq!(panned.x, zoomed.x);
    assert!((panned.y - (zoomed.y - 5.0)).abs() < 1e-9);
}

#[test]
fn wheel_zoom_settles_after_idle_and_debounce() {
    let (mut engine, log) = observed(PanZoomConfig::default());
    let wheel = InputEvent::wheel(PANE, Point::new(200.0, 150.0), Vec2::new(0.0, -100.0))
        .at(1_000);
    engine.handle_input(&wheel);
    assert!(engine.is_zooming_or_panning());
    engine.advance(1_150);
    assert!(!engine.is_zooming_or_panning());
    assert!(log.borrow().ends.is_empty());
    engine.advance(1_300);
    assert_eq!(log.borrow().ends.len(), 1);
}

#[test]
fn scale_by_clamps_to_max_zoom() {
    let (mut engine, _log) = observed(PanZoomConfig::default());
    engine.scale_to(0.8, TransitionOptions::IMMEDIATE);
    engine.scale_by(3.0, TransitionOptions::IMMEDIATE);
    assert_eq!(engine.viewport().zoom, 2.0);
}

#[test]
fn right_click_pan_and_context_menu() {
    let config = PanZoomConfig::default()
        .with_pan_on_drag(PanOnDrag::buttons([MouseButton::Primary, MouseButton::Secondary]));
    let (mut engine, log) = observed(config);

    // Click without moving: the context menu is re-triggered.
    drag(&mut engine, MouseButton::Secondary, Point::new(10.0, 10.0), None, 0);
    assert_eq!(log.borrow().context_menus, 1);

    // Dragging pans instead.
    let (from, to) = (Point::new(10.0, 10.0), Point::new(30.0, 10.0));
    drag(&mut engine, MouseButton::Secondary, from, Some(to), 100);
    assert_eq!(log.borrow().context_menus, 1);
    assert_eq!(engine.viewport(), Viewport::new(20.0, 0.0, 1.0));
}

#[test]
fn right_click_does_not_pan_by_default() {
    let (mut engine, log) = observed(PanZoomConfig::default());
    let (from, to) = (Point::new(10.0, 10.0), Point::new(30.0, 10.0));
    drag(&mut engine, MouseButton::Secondary, from, Some(to), 0);
    assert_eq!(engine.viewport(), Viewport::new(0.0, 0.0, 1.0));
    assert_eq!(log.borrow().context_menus, 0);
}

#[test]
fn click_distance_decides_whether_the_release_swallows_the_click() {
    let buttons = PanOnDrag::buttons([MouseButton::Primary, MouseButton::Secondary]);
    let nudge = Some(Point::new(11.0, 10.0));

    let config = PanZoomConfig::default().with_pan_on_drag(buttons);
    let (mut engine, _log) = observed(config.clone());
    let up = drag(&mut engine, MouseButton::Secondary, Point::new(10.0, 10.0), nudge, 0);
    assert!(up.handled);
    assert!(up.suppress_click);

    let (mut engine, _log) = observed(config.with_click_distance(1000.0));
    let up = drag(&mut engine, MouseButton::Secondary, Point::new(10.0, 10.0), nudge, 0);
    assert!(up.handled);
    assert!(!up.suppress_click);
}

#[test]
fn middle_click_on_a_node_always_passes_the_filter() {
    let config = PanZoomConfig::default()
        .with_pan_on_drag(false)
        .with_zoom_on_scroll(false)
        .with_zoom_on_pinch(false)
        .with_zoom_on_double_click(false);
    let (mut engine, _log) = observed(config);
    let press = InputEvent::mouse_down(NODE, Point::ZERO, MouseButton::Auxiliary);
    assert!(engine.handle_input(&press).handled);
    let press = InputEvent::mouse_down(PANE, Point::ZERO, MouseButton::Primary);
    assert!(!engine.handle_input(&press).handled);
}

#[test]
fn double_click_animates_and_settles() {
    let (mut engine, log) = observed(PanZoomConfig::default());
    let dbl = InputEvent::new(EventKind::DoubleClick, PANE)
        .with_position(Point::new(200.0, 150.0))
        .at(0);
    assert!(engine.handle_input(&dbl).handled);
    assert_eq!(engine.next_deadline(), Some(0));

    for t in (16..=256).step_by(16) {
        engine.advance(t);
    }
    assert_eq!(engine.viewport().zoom, 2.0);
    assert_eq!(engine.flow_to_screen(Point::new(200.0, 150.0)), Point::new(200.0, 150.0));
    let log = log.borrow();
    assert!(log.transforms.len() > 2);
    assert_eq!(log.ends.len(), 1);
}

#[test]
fn update_rebinds_the_filter() {
    let (mut engine, _log) = observed(PanZoomConfig::default());
    let config = engine.config().clone().with_zoom_on_double_click(false);
    engine.update(config);
    let dbl = InputEvent::new(EventKind::DoubleClick, PANE).with_position(Point::new(10.0, 10.0));
    assert!(!engine.handle_input(&dbl).handled);
}

#[test]
fn sync_viewport_does_not_echo_the_transform() {
    let (mut engine, log) = observed(PanZoomConfig::default());
    assert!(engine.sync_viewport(Viewport::new(12.0, 34.0, 1.5)));
    engine.advance(0);
    let log = log.borrow();
    assert!(log.transforms.is_empty());
    assert_eq!(log.moves, [Viewport::new(12.0, 34.0, 1.5)]);
    assert_eq!(log.viewport_ends, [Viewport::new(12.0, 34.0, 1.5)]);
}

#[test]
fn set_transform_animates_through_the_same_channel() {
    let (mut engine, log) = observed(PanZoomConfig::default());
    engine.set_transform(ZoomTransform::new(-100.0, -100.0, 1.0), TransitionOptions::over(100));
    engine.advance(50);
    engine.advance(100);
    assert_eq!(engine.viewport(), Viewport::new(-100.0, -100.0, 1.0));
    let log = log.borrow();
    assert_eq!(log.transforms.last(), Some(&ZoomTransform::new(-100.0, -100.0, 1.0)));
    assert_eq!(log.ends.len(), 1);
}

#[test]
fn detach_drops_a_pending_end() {
    let (mut engine, log) = observed(PanZoomConfig::default().with_pan_on_scroll(true));
    engine.handle_input(&InputEvent::wheel(PANE, Point::ZERO, Vec2::new(0.0, 10.0)));
    engine.detach();
    engine.advance(1_000);
    assert!(log.borrow().ends.is_empty());
    assert_eq!(engine.next_deadline(), None);
}
