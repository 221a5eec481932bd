// Copyright 2025 the Fixit Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use fixit_sticky::state::{Transition, docking_transition, position_transition};
use fixit_sticky::{Measurements, ScrollDirection, StickyState};
use kurbo::Rect;

/// One scroll pass over a tall target inside a parent, sampled every pixel.
fn frames(len: usize) -> Vec<(Measurements, Option<ScrollDirection>)> {
    (0..len)
        .map(|i| {
            let scroll = i as f64;
            let down = (i / 400) % 2 == 0;
            let top = 300.0 - scroll;
            let m = Measurements {
                placeholder_top: top,
                target: Rect::new(0.0, top, 300.0, top + 1_200.0),
                parent: Some(Rect::new(0.0, 100.0 - scroll, 960.0, 3_100.0 - scroll)),
                viewport_height: 800.0,
                inner_height: 815.0,
                offset: 64.0,
            };
            let direction = if down {
                ScrollDirection::Down
            } else {
                ScrollDirection::Up
            };
            (m, Some(direction))
        })
        .collect()
}

fn bench_position_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("state/position_transition");
    for len in [256_usize, 4_096] {
        let frames = frames(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &frames, |b, frames| {
            b.iter(|| {
                let mut state = StickyState::Inactive;
                for (m, direction) in frames {
                    if let Some(t) = position_transition(state, m, *direction) {
                        state = match t {
                            Transition::Activate { .. } => StickyState::Active,
                            Transition::Freeze => StickyState::Frozen,
                            Transition::Deactivate => StickyState::Inactive,
                        };
                    }
                }
                black_box(state)
            });
        });
    }
    group.finish();
}

fn bench_docking_transition(c: &mut Criterion) {
    let frames = frames(4_096);
    c.bench_function("state/docking_transition", |b| {
        b.iter(|| {
            let mut docks = 0_u32;
            for (m, _) in &frames {
                if let Some(parent) = m.parent {
                    let t = docking_transition(
                        StickyState::Active,
                        black_box(m.target),
                        parent,
                        m.viewport_height,
                        m.offset,
                    );
                    docks += u32::from(t.is_some());
                }
            }
            black_box(docks)
        });
    });
}

criterion_group!(benches, bench_position_transition, bench_docking_transition);
criterion_main!(benches);
