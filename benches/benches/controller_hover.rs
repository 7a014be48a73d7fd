// Copyright 2025 the Hoverlay Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use hoverlay_timers::{TimerKind, TimerSet};
use hoverlay_tooltip::controller::TooltipController;
use hoverlay_tooltip::delegate::shared_delegate_filter;
use hoverlay_tooltip::types::{DelegateEvent, HoverNode, SHARED_TOOLTIP_CLASS};
use kurbo::Rect;

#[derive(Clone, Debug)]
struct Elem {
    id: u32,
    class: Option<&'static str>,
}

impl HoverNode for Elem {
    type Id = u32;
    fn id(&self) -> u32 {
        self.id
    }
    fn has_class(&self, class: &str) -> bool {
        self.class == Some(class)
    }
    fn data(&self, _key: &str) -> Option<&str> {
        None
    }
}

fn event(target: u32) -> DelegateEvent<Elem> {
    DelegateEvent {
        current_target: target,
        path: (1..=target)
            .map(|id| Elem { id, class: None })
            .collect(),
        target_bounds: Rect::new(0.0, 0.0, 120.0, 24.0),
    }
}

fn bench_timer_set(c: &mut Criterion) {
    let mut group = c.benchmark_group("timer_set");
    group.throughput(Throughput::Elements(1));
    group.bench_function("arm_pop_cycle", |b| {
        let mut timers = TimerSet::new();
        let mut now = 0_u64;
        b.iter(|| {
            timers.arm(TimerKind::Show, now + 200);
            timers.arm(TimerKind::Hide, now + 400);
            timers.arm(TimerKind::Dismiss, now + 10_000);
            now += 10_000;
            while let Some(kind) = timers.pop_due(now) {
                black_box(kind);
            }
        });
    });
    group.finish();
}

fn bench_enter_leave_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("controller");
    group.throughput(Throughput::Elements(2));
    group.bench_function("enter_leave_poll", |b| {
        b.iter_batched(
            || {
                let mut tip: TooltipController<Elem> = TooltipController::new(0);
                let _ = tip.observe(Some(1));
                tip
            },
            |mut tip| {
                let mut now = 0_u64;
                for target in [3_u32, 5, 7, 5, 3] {
                    black_box(tip.on_delegate_mouse_enter(&event(target), now));
                    now += 250;
                    black_box(tip.poll(now));
                    black_box(tip.on_delegate_mouse_leave(&event(target), now));
                    now += 500;
                    black_box(tip.poll(now));
                }
                tip
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_delegate_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("delegate_filter");
    for depth in [4_usize, 16, 64] {
        let mut path: Vec<Elem> = (0..depth as u32)
            .map(|id| Elem { id, class: None })
            .collect();
        // Only the innermost element qualifies: worst case for the scan.
        path.last_mut().unwrap().class = Some(SHARED_TOOLTIP_CLASS);
        group.throughput(Throughput::Elements(depth as u64));
        group.bench_function(format!("scan_depth_{depth}"), |b| {
            b.iter(|| black_box(shared_delegate_filter(black_box(&path))));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_timer_set,
    bench_enter_leave_churn,
    bench_delegate_filter
);
criterion_main!(benches);
