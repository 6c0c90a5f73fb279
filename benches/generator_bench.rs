//! Benchmarks for series generation and rendering
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use hiring_insights::{
    render_svg, to_csv, DashboardState, FixedClock, RenderOptions, SeriesGenerator, Timeframe,
};

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for timeframe in Timeframe::all() {
        let days = timeframe.days();
        group.throughput(Throughput::Elements(days as u64));

        group.bench_function(format!("seeded_{}", days), |b| {
            let mut generator = SeriesGenerator::seeded(42);
            b.iter(|| generator.generate_at(black_box(days), anchor()))
        });
    }

    group.bench_function("thread_rng_365", |b| {
        let mut generator = SeriesGenerator::new();
        b.iter(|| generator.generate_at(black_box(365), anchor()))
    });

    group.finish();
}

fn bench_select(c: &mut Criterion) {
    c.bench_function("select_timeframe_cycle", |b| {
        let mut state = DashboardState::seeded(Timeframe::Last30Days, 7, FixedClock(anchor()));
        let cycle = [Timeframe::Last90Days, Timeframe::LastYear, Timeframe::Last30Days];
        b.iter(|| {
            for tf in cycle {
                state.select_timeframe(black_box(tf));
            }
        })
    });
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    let mut state = DashboardState::seeded(Timeframe::LastYear, 7, FixedClock(anchor()));
    state.set_viewport_width(1024.0);
    let options = RenderOptions::default();

    group.bench_function("svg_365", |b| {
        b.iter(|| render_svg(black_box(&state), &options).unwrap())
    });

    group.bench_function("csv_365", |b| {
        b.iter(|| to_csv(black_box(state.points())).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_generate, bench_select, bench_output);
criterion_main!(benches);
