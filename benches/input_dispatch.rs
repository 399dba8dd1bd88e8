// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use iced_flipbook::flipbook::{
    classify_swipe, map_key, Key, Modifiers, PageCount, Point, SwipeThreshold, SwipeTracker,
};
use std::hint::black_box;

const KEYS: [Key; 8] = [
    Key::ArrowLeft,
    Key::ArrowRight,
    Key::Home,
    Key::End,
    Key::Escape,
    Key::F11,
    Key::Character('f'),
    Key::Other,
];

fn input_dispatch_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("input_dispatch");
    let count = PageCount::new(11);
    let threshold = SwipeThreshold::default();

    group.bench_function("map_key", |b| {
        let command = Modifiers { command: true };
        b.iter(|| {
            for key in KEYS {
                black_box(map_key(black_box(key), command, count));
            }
        });
    });

    group.bench_function("classify_swipe", |b| {
        b.iter(|| {
            black_box(classify_swipe(black_box(-120.0), black_box(8.0), threshold));
            black_box(classify_swipe(black_box(30.0), black_box(40.0), threshold));
        });
    });

    group.bench_function("swipe_tracker_gesture", |b| {
        let mut tracker = SwipeTracker::new();
        b.iter(|| {
            tracker.begin(black_box(Point::new(400.0, 300.0)));
            black_box(tracker.end(black_box(Point::new(250.0, 310.0)), threshold));
        });
    });

    group.finish();
}

criterion_group!(benches, input_dispatch_benchmark);
criterion_main!(benches);
