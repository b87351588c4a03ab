//! Performance benchmarks for a3s-cronexpr
//!
//! Run with: cargo bench

use a3s_cronexpr::{describe, validate_expression, CronExpression, Schedule, Scheduler};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_parse_and_validate(c: &mut Criterion) {
    c.bench_function("CronExpression::parse", |b| {
        b.iter(|| CronExpression::parse(black_box("*/5 0-6 1,15 */2 1-5")).unwrap());
    });

    c.bench_function("validate_expression", |b| {
        b.iter(|| validate_expression(black_box("*/5 0-6 1,15 */2 1-5")));
    });

    c.bench_function("Schedule::parse", |b| {
        b.iter(|| Schedule::parse(black_box("*/5 0-6 1,15 */2 1-5")).unwrap());
    });
}

fn bench_describe(c: &mut Criterion) {
    c.bench_function("describe preset", |b| {
        b.iter(|| describe(black_box("0 8 * * 1-5")));
    });

    c.bench_function("describe generated", |b| {
        b.iter(|| describe(black_box("15 */2 1,15 6 3")));
    });
}

fn bench_next_after(c: &mut Criterion) {
    let scheduler = Scheduler::default();
    let start = NaiveDate::from_ymd_opt(2026, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap();

    c.bench_function("next_after every minute x5", |b| {
        b.iter(|| scheduler.next_after(black_box("* * * * *"), start, 5));
    });

    c.bench_function("next_after weekdays x5", |b| {
        b.iter(|| scheduler.next_after(black_box("0 9 * * 1-5"), start, 5));
    });

    // Never matches: walks the full one-year horizon
    c.bench_function("next_after exhausted horizon", |b| {
        b.iter(|| scheduler.next_after(black_box("0 0 31 2 *"), start, 1));
    });
}

criterion_group!(benches, bench_parse_and_validate, bench_describe, bench_next_after);
criterion_main!(benches);
