// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size, Vec2};
use understory_pan_zoom::{
    EventTarget, FilterConfig, InputEvent, Modifiers, MouseButton, PanZoom, PanZoomConfig,
    Viewport,
};

#[derive(Clone, Copy, Debug)]
struct Zoned(&'static [&'static str]);

impl EventTarget for Zoned {
    fn is_within_zone(&self, zone: &str) -> bool {
        self.0.iter().any(|z| *z == zone)
    }
}

fn mixed_events() -> Vec<InputEvent<Zoned>> {
    let targets = [Zoned(&[]), Zoned(&["node"]), Zoned(&["nowheel"]), Zoned(&["nopan"])];
    (0..256_u32)
        .map(|i| {
            let target = targets[i as usize % targets.len()];
            let p = Point::new(f64::from(i), f64::from(i % 32));
            match i % 4 {
                0 => InputEvent::mouse_down(target, p, MouseButton::Primary),
                1 => InputEvent::mouse_down(target, p, MouseButton::Auxiliary),
                2 => InputEvent::wheel(target, p, Vec2::new(0.0, -40.0)),
                _ => InputEvent::wheel(target, p, Vec2::new(0.0, 12.0))
                    .with_modifiers(Modifiers::CTRL),
            }
        })
        .collect()
}

fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_zoom/filter");
    let events = mixed_events();
    group.throughput(Throughput::Elements(events.len() as u64));

    for (name, config) in [
        ("default", PanZoomConfig::default()),
        ("pan_on_scroll", PanZoomConfig::default().with_pan_on_scroll(true)),
    ] {
        let filter = FilterConfig::from(&config);
        group.bench_function(name, |b| {
            b.iter(|| {
                let admitted = events.iter().filter(|e| filter.admits(*e)).count();
                black_box(admitted)
            });
        });
    }

    group.finish();
}

fn bench_gestures(c: &mut Criterion) {
    let mut group = c.benchmark_group("pan_zoom/gestures");
    let setup = || {
        let mut engine = PanZoom::<()>::new(PanZoomConfig::default());
        engine.attach(Size::new(1280.0, 720.0), Viewport::default());
        engine.observers_mut().on_move = Some(Box::new(
            |_: Option<&InputEvent<()>>, v: Viewport| {
                black_box(v);
            },
        ));
        engine
    };

    group.throughput(Throughput::Elements(128));
    group.bench_function("drag", |b| {
        b.iter_batched(
            setup,
            |mut engine| {
                engine.handle_input(&InputEvent::mouse_down((), Point::ZERO, MouseButton::Primary));
                for i in 1..=128_u32 {
                    let p = Point::new(f64::from(i), f64::from(i) * 0.5);
                    engine.handle_input(&InputEvent::mouse_move((), p).at(u64::from(i) * 16));
                }
                engine.handle_input(
                    &InputEvent::mouse_up((), Point::new(128.0, 64.0), MouseButton::Primary)
                        .at(2_064),
                );
                black_box(engine.viewport())
            },
            BatchSize::SmallInput,
        );
    });

    group.bench_function("wheel_burst", |b| {
        b.iter_batched(
            setup,
            |mut engine| {
                for i in 0..128_u32 {
                    let at = Point::new(640.0, 360.0);
                    let wheel =
                        InputEvent::wheel((), at, Vec2::new(0.0, -3.0)).at(u64::from(i) * 8);
                    engine.handle_input(&wheel);
                }
                engine.advance(10_000);
                black_box(engine.viewport())
            },
            BatchSize::SmallInput,
        );
    });

    group.finish();
}

criterion_group!(benches, bench_filter, bench_gestures);
criterion_main!(benches);
