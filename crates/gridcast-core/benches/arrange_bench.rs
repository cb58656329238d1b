//! Criterion benchmarks for layout composition.
//!
//! Recomputation runs on every participant join/leave, so composition must
//! stay comfortably sub-millisecond even at the 17-participant ceiling.
//!
//! Run with:
//! ```bash
//! cargo bench --package gridcast-core --bench arrange_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use gridcast_core::{compose_layout, Canvas, LayoutMode, MixProfile, Uid};

fn profile(mode: LayoutMode) -> MixProfile {
    MixProfile {
        canvas: Canvas::new(1920, 1080),
        mode,
        keep_last_frame: false,
    }
}

fn subscribers(n: usize) -> Vec<Uid> {
    (1..=n as u32).collect()
}

// ── Benchmarks: per-mode composition ──────────────────────────────────────────

fn bench_best_fit_buckets(c: &mut Criterion) {
    let counts = [1usize, 2, 4, 9, 16, 17];
    let p = profile(LayoutMode::BestFit);
    let mut group = c.benchmark_group("compose_best_fit");

    for &count in &counts {
        let subs = subscribers(count);
        group.bench_with_input(BenchmarkId::new("subscribers", count), &subs, |b, subs| {
            b.iter(|| compose_layout(black_box(&p), black_box(subs), None))
        });
    }

    group.finish();
}

fn bench_default_grid(c: &mut Criterion) {
    let p = profile(LayoutMode::Default);
    let subs = subscribers(9);
    let mut group = c.benchmark_group("compose_default");

    group.bench_function("nine_subscribers", |b| {
        b.iter(|| compose_layout(black_box(&p), black_box(&subs), None))
    });

    group.finish();
}

fn bench_vertical_tiers(c: &mut Criterion) {
    let counts = [5usize, 7, 9, 17];
    let p = profile(LayoutMode::VerticalPresentation);
    let mut group = c.benchmark_group("compose_vertical");

    for &count in &counts {
        let subs = subscribers(count);

        // Highlighted: primary + column, no escalation
        group.bench_with_input(
            BenchmarkId::new("highlighted", count),
            &subs,
            |b, subs| b.iter(|| compose_layout(black_box(&p), black_box(subs), Some(1))),
        );

        // Unmatched highlight: worst case, walks the escalation chain
        group.bench_with_input(
            BenchmarkId::new("unmatched", count),
            &subs,
            |b, subs| {
                b.iter(|| compose_layout(black_box(&p), black_box(subs), Some(u32::MAX)))
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_best_fit_buckets,
    bench_default_grid,
    bench_vertical_tiers,
);
criterion_main!(benches);
