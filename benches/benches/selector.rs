// Copyright 2026 the Dpad List Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use dpad_list::{Axis, BoundsAnimation, DpadListView, LinearListLayout, ListLayout};
use kurbo::{Point, Rect, Size};

fn bench_animation_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector/animation_sample");

    let mut anim = BoundsAnimation::settled(Rect::new(0.0, 0.0, 100.0, 20.0));
    anim.retarget(Rect::new(0.0, 500.0, 100.0, 520.0), 150.0, 0.0);

    // Sampling happens once per selector per frame; it should stay trivially
    // cheap relative to everything else in a draw pass.
    for samples in [60_u64, 600, 6_000] {
        group.throughput(Throughput::Elements(samples));
        group.bench_with_input(BenchmarkId::new("sample", samples), &samples, |b, &n| {
            b.iter(|| {
                let mut acc = 0.0;
                for i in 0..n {
                    let now = (i as f64) * 150.0 / (n as f64);
                    acc += black_box(anim.sample(now)).y0;
                }
                black_box(acc)
            });
        });
    }

    group.finish();
}

fn bench_visible_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector/visible_range");
    let viewport = Size::new(320.0, 240.0);

    for len in [1_000_usize, 100_000] {
        let mut layout = LinearListLayout::new(Axis::Vertical, len, 24.0);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("indexed", len), &len, |b, _| {
            b.iter(|| {
                let scroll = Point::new(0.0, (len as f64) * 12.0);
                black_box(layout.visible_range(black_box(scroll), viewport))
            });
        });
    }

    group.finish();
}

fn bench_focus_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("selector/focus_walk");

    group.bench_function("focus_item_10k", |b| {
        let mut view = DpadListView::new();
        view.set_viewport(Size::new(320.0, 240.0));
        view.set_scroll_offset_fraction_y(Some(0.5));
        view.set_layout(LinearListLayout::new(Axis::Vertical, 10_000, 24.0))
            .unwrap();
        view.set_focused(true);
        b.iter(|| {
            for index in 0..100 {
                view.focus_item(black_box(index * 100), index as f64);
            }
            black_box(view.scroll_offset())
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_animation_sampling,
    bench_visible_range,
    bench_focus_walk
);
criterion_main!(benches);
