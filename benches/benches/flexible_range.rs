// Copyright 2025 the Fluent Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fluent_range::testing::GridDocument;
use fluent_range::{FlexibleRange, Position};

fn document(len: usize) -> GridDocument {
    let line = "x".repeat(len);
    GridDocument::new(&[line.as_str()])
}

fn bench_drag_end(c: &mut Criterion) {
    let mut group = c.benchmark_group("flexible_range/drag_end");

    // One anchor sweeps the whole line and back, crossing the other anchor twice.
    for len in [64usize, 512, 4_096] {
        let doc = document(len);
        let anchor = len / 2;
        group.throughput(Throughput::Elements(2 * len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &doc, |b, doc| {
            b.iter(|| {
                let original = doc.range(Position::new(0, anchor), Position::new(0, anchor + 1));
                let mut live = FlexibleRange::from_range(&original);
                for offset in (0..len).chain((0..len).rev()) {
                    live.set_end(Some(Position::new(0, offset)));
                }
                black_box(live.is_reversed());
            });
        });
    }

    group.finish();
}

fn bench_two_finger(c: &mut Criterion) {
    let mut group = c.benchmark_group("flexible_range/two_finger");

    // Both anchors move every frame, as with two fingers on the pad.
    for len in [64usize, 512, 4_096] {
        let doc = document(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &doc, |b, doc| {
            b.iter(|| {
                let original = doc.range(Position::new(0, 0), Position::new(0, len));
                let mut live = FlexibleRange::from_range(&original);
                for step in 0..len {
                    live.set_start(Some(Position::new(0, step)));
                    live.set_end(Some(Position::new(0, len - step)));
                }
                black_box(live.start_coords());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_drag_end, bench_two_finger);
criterion_main!(benches);
