//! Performance benchmarks for the fleet scheduling core.
//!
//! This suite verifies that the hot paths stay cheap enough to run on
//! every request:
//! - Validating a candidate against an empty day
//! - Validating against a loaded day (conflict scan + cap math)
//! - One tracker evaluation with an active alert
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use std::str::FromStr;

use fleet_scheduler::config::AlertConfig;
use fleet_scheduler::models::{
    Assignment, AssignmentStatus, Driver, DriverStatus, Journey, Route,
};
use fleet_scheduler::repository::InMemoryFleetStore;
use fleet_scheduler::scheduling::{AssignmentCandidate, JourneyTracker, validate_assignment};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 16).unwrap()
}

fn time(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

/// Builds a store with one driver, `route_count` routes, and
/// `assignment_count` one-hour assignments spread over other drivers.
fn build_store(route_count: u32, assignment_count: u32) -> InMemoryFleetStore {
    let mut store = InMemoryFleetStore::new();

    store.upsert_driver(Driver {
        id: "drv_bench".to_string(),
        first_name: "Laura".to_string(),
        last_name: "Gomez".to_string(),
        license_number: "1020304050".to_string(),
        email: "laura.gomez@example.com".to_string(),
        status: DriverStatus::Active,
    });

    for i in 0..route_count {
        store.upsert_route(Route {
            id: format!("rt_{:03}", i),
            name: format!("Route {}", i),
            origin: "Terminal Norte".to_string(),
            destination: "Terminal Sur".to_string(),
            duration_minutes: 60,
        });
    }

    for i in 0..assignment_count {
        let start = time(6 + (i % 12), 0);
        store.upsert_assignment(Assignment {
            id: format!("asg_{:05}", i),
            shift_template_id: String::new(),
            driver_id: format!("drv_{:03}", i % 50),
            route_id: format!("rt_{:03}", i % route_count),
            date: date(),
            start_time: start,
            end_time: start + chrono::Duration::hours(1),
            status: AssignmentStatus::Scheduled,
            actual_start: None,
            actual_end: None,
        });
    }

    store
}

fn candidate() -> AssignmentCandidate {
    AssignmentCandidate {
        driver_id: "drv_bench".to_string(),
        route_id: "rt_000".to_string(),
        date: date(),
        start_time: time(20, 0),
        exclude_assignment_id: None,
    }
}

fn bench_validator(c: &mut Criterion) {
    let cap = Decimal::from_str("7.5").unwrap();

    let empty = build_store(10, 0);
    c.bench_function("validate_empty_day", |b| {
        let candidate = candidate();
        b.iter(|| {
            let outcome =
                validate_assignment(black_box(&candidate), &empty, &empty, &empty, cap);
            let _ = black_box(outcome);
        })
    });

    let mut group = c.benchmark_group("validate_loaded_day");
    for assignment_count in [100u32, 1_000, 5_000] {
        let store = build_store(10, assignment_count);
        group.bench_with_input(
            BenchmarkId::from_parameter(assignment_count),
            &store,
            |b, store| {
                let candidate = candidate();
                b.iter(|| {
                    let outcome =
                        validate_assignment(black_box(&candidate), store, store, store, cap);
                    let _ = black_box(outcome);
                })
            },
        );
    }
    group.finish();
}

fn bench_tracker(c: &mut Criterion) {
    let journey = Journey {
        date: date(),
        start_time: time(6, 0),
        total_hours: Decimal::from_str("7.5").unwrap(),
        worked_hours: 7,
        worked_minutes: 15,
        is_active: true,
    };
    let now = date().and_hms_opt(13, 15, 0).unwrap();

    c.bench_function("tracker_evaluate_with_alert", |b| {
        let mut tracker = JourneyTracker::new(&AlertConfig::default());
        b.iter(|| {
            let view = tracker.evaluate(black_box("drv_bench"), Some(&journey), now);
            let _ = black_box(view);
        })
    });
}

criterion_group!(benches, bench_validator, bench_tracker);
criterion_main!(benches);
