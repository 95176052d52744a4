// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main,
};
use fluent_touch::{Platform, Touch, TouchEvent, TouchRegistry};

fn touches(count: usize) -> Vec<Touch> {
    (0..count)
        .map(|i| Touch::new(1_000 + i as i32, 10.0 * i as f64, 20.0))
        .collect()
}

fn bench_register_release(c: &mut Criterion) {
    let mut group = c.benchmark_group("touch_registry/register_release");

    for platform in [Platform::Standard, Platform::AppleTouch] {
        for count in [1usize, 2, 5] {
            let fingers = touches(count);
            let id = BenchmarkId::new(format!("{platform:?}"), count);
            group.bench_with_input(id, &fingers, |b, fingers| {
                b.iter_batched(
                    || TouchRegistry::for_platform(platform),
                    |mut registry| {
                        let down = TouchEvent::new(0)
                            .with_changed(fingers)
                            .with_targets(fingers);
                        registry.register_touches_from_event(&down);
                        let up = TouchEvent::new(16).with_changed(fingers);
                        registry.unregister_touches_from_event(&up);
                        registry.flush_deferred();
                        black_box(registry.active_count());
                    },
                    BatchSize::SmallInput,
                );
            });
        }
    }

    group.finish();
}

fn bench_format_touches(c: &mut Criterion) {
    let mut group = c.benchmark_group("touch_registry/format_touches");

    for count in [1usize, 2, 5] {
        let fingers = touches(count);
        let mut registry = TouchRegistry::for_platform(Platform::AppleTouch);
        let down = TouchEvent::new(0)
            .with_changed(&fingers)
            .with_targets(&fingers);
        registry.register_touches_from_event(&down);
        group.bench_with_input(BenchmarkId::from_parameter(count), &fingers, |b, fingers| {
            b.iter(|| black_box(registry.format_touches(black_box(fingers))));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_register_release, bench_format_touches);
criterion_main!(benches);
