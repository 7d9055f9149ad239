//! Performance benchmarks for the mCORE schedule engine.
//!
//! This benchmark suite verifies that the engine meets its performance targets:
//! - Full-year calendar render: < 100ms mean
//! - Single day lookup through the JSON surface: < 100μs mean
//! - Pay period table for one year: < 1ms mean
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use chrono::NaiveDate;
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use mcore_engine::api::{AppState, handle_json};
use mcore_engine::config::ConfigLoader;
use mcore_engine::models::{LabelPolicy, RouteSet, UserSettings};
use mcore_engine::schedule::{ScheduleContext, is_holiday, pay_periods_for_year, year_view};

/// Creates a test state with loaded configuration and filled route sets.
fn create_test_state() -> AppState {
    let config = ConfigLoader::load("./config/mcore").expect("Failed to load config");
    let labels = |count: usize| {
        RouteSet::new((1..=count).map(|i| format!("R{:02}", i)).collect(), count)
            .expect("Valid route set")
    };
    AppState::new(config).with_settings(UserSettings {
        selected_carrier: None,
        t6_routes: labels(5),
        letter_routes: labels(6),
        label_policy: LabelPolicy::PerSlot,
    })
}

/// Benchmark: Full-year calendar render.
///
/// Target: < 100ms mean
fn bench_year_view(c: &mut Criterion) {
    let state = create_test_state();
    let ctx = ScheduleContext::new(state.config(), state.settings());

    c.bench_function("year_view", |b| b.iter(|| black_box(year_view(black_box(2025), &ctx))));
}

/// Benchmark: Single day lookup through the JSON surface.
///
/// Target: < 100μs mean
fn bench_day_request(c: &mut Criterion) {
    let state = create_test_state();
    let body = r#"{"kind": "day", "date": "2025-11-27", "carrier": "blue"}"#;

    c.bench_function("day_request", |b| b.iter(|| black_box(handle_json(&state, body))));
}

/// Benchmark: Pay period table for one year.
///
/// Target: < 1ms mean
fn bench_pay_period_table(c: &mut Criterion) {
    let state = create_test_state();
    let anchors = *state.config().anchors();

    c.bench_function("pay_period_table", |b| {
        b.iter(|| black_box(pay_periods_for_year(black_box(2026), &anchors)))
    });
}

/// Benchmark: Holiday lookups across a span of years, to understand scaling.
fn bench_holiday_scaling(c: &mut Criterion) {
    let state = create_test_state();
    let holidays = state.config().holidays();
    let start = NaiveDate::from_ymd_opt(2025, 1, 1).expect("Valid date");

    let mut group = c.benchmark_group("holiday_lookup");

    for years in [1u64, 5, 10].iter() {
        let days = years * 365;
        group.throughput(Throughput::Elements(days));
        group.bench_with_input(BenchmarkId::new("years", years), &days, |b, &days| {
            b.iter(|| {
                let found = start
                    .iter_days()
                    .take(days as usize)
                    .filter(|date| is_holiday(holidays, *date).is_some())
                    .count();
                black_box(found)
            })
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_year_view,
    bench_day_request,
    bench_pay_period_table,
    bench_holiday_scaling,
);
criterion_main!(benches);
