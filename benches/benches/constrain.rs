// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Rect;
use understory_zoom_transform::{ClampMode, TranslateExtent, ZoomTransform, constrain};

fn bench_constrain(c: &mut Criterion) {
    let mut group = c.benchmark_group("zoom_transform/constrain");
    let viewport = Rect::new(0.0, 0.0, 1280.0, 720.0);
    let extent = TranslateExtent::from_corners([[0.0, 0.0], [4_000.0, 3_000.0]]).unwrap();

    // A sweep of transforms, half of which fall outside the extent.
    let transforms: Vec<ZoomTransform> = (0..1_024)
        .map(|i| {
            let f = f64::from(i);
            ZoomTransform::new(f * 7.0 - 3_000.0, f * -5.0 + 1_000.0, 0.5 + (f % 16.0) / 8.0)
        })
        .collect();

    for mode in [ClampMode::None, ClampMode::Contain, ClampMode::KeepSomeVisible] {
        group.bench_with_input(
            BenchmarkId::new(format!("{mode:?}"), transforms.len()),
            &transforms,
            |b, transforms| {
                b.iter(|| {
                    for t in transforms {
                        black_box(constrain(black_box(*t), viewport, &extent, mode));
                    }
                });
            },
        );
    }

    group.bench_function("unbounded", |b| {
        b.iter(|| {
            for t in &transforms {
                black_box(constrain(
                    black_box(*t),
                    viewport,
                    &TranslateExtent::UNBOUNDED,
                    ClampMode::Contain,
                ));
            }
        });
    });

    group.finish();
}

criterion_group!(benches, bench_constrain);
criterion_main!(benches);
