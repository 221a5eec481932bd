// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use fixit_sticky::{DirectionConfig, DirectionDetector};
use fixit_timing::TimerQueue;

fn bench_detector(c: &mut Criterion) {
    // A long scroll with a reversal every 600px, 4px per tick.
    let tops: Vec<f64> = (0..10_000)
        .map(|i| {
            let leg = (i / 150) % 2;
            let step = f64::from(i % 150) * 4.0;
            if leg == 0 { -step } else { step - 600.0 }
        })
        .collect();

    c.bench_function("direction/request", |b| {
        b.iter_batched(
            || DirectionDetector::new(DirectionConfig::default()),
            |mut detector| {
                let mut commits = 0_u32;
                for (i, &top) in tops.iter().enumerate() {
                    let direction = detector.observe(top);
                    commits += u32::from(detector.request(direction, top).change.is_some());
                    if i % 64 == 0 {
                        commits += u32::from(detector.settle().is_some());
                    }
                }
                black_box(commits)
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_timer_queue(c: &mut Criterion) {
    c.bench_function("timing/queue_debounce_churn", |b| {
        b.iter(|| {
            let mut queue = TimerQueue::<u8>::new();
            queue.schedule_repeating(0, 100);
            let mut fired = 0_usize;
            for tick in 0..2_000_u64 {
                // Every scroll re-arms the settle timer.
                queue.schedule_once(1, 100);
                fired += queue.advance_to(tick * 16).len();
            }
            black_box(fired)
        });
    });
}

criterion_group!(benches, bench_detector, bench_timer_queue);
criterion_main!(benches);
