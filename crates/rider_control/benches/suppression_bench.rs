//! Performance benchmarks for the rider controller.
//!
//! These measure the per-frame cost the controller adds to the host frame at
//! city scale: a full mark batch, the steady state once everyone is marked,
//! a stand pass over many stands, and a status rebuild.
//!
//! Run with: cargo bench -p rider_control --features bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;

use rider_control::host::{ResidentFlags, TaxiFlags, TaxiRequestKind};
use rider_control::test_harness::TestRiderCity;

// ---------------------------------------------------------------------------
// Helpers: build populated cities
// ---------------------------------------------------------------------------

/// A city of `n` residents spread over commuter, tourist and local
/// households, some already ignoring taxis on their own.
fn populated_city(n: usize) -> TestRiderCity {
    let mut rng = rand::thread_rng();
    let mut city = TestRiderCity::new();
    let commuters = city.spawn_commuter_household();
    let tourists = city.spawn_tourist_household();
    let locals = city.spawn_household();
    for _ in 0..n {
        let household = match rng.gen_range(0..10) {
            0 => commuters,
            1 => tourists,
            _ => locals,
        };
        let flags = if rng.gen_bool(0.05) {
            ResidentFlags::IGNORE_TAXI
        } else {
            ResidentFlags::empty()
        };
        city.spawn_resident_with_flags(Some(household), flags);
    }
    city
}

/// Stands with waiting passengers, a stand request each and one staged taxi.
fn add_busy_stands(city: &mut TestRiderCity, stands: usize) {
    let mut rng = rand::thread_rng();
    for _ in 0..stands {
        let stand = city.spawn_stand(rng.gen_range(0..20));
        city.spawn_stand_request(stand);
        let taxi = city.spawn_taxi(TaxiFlags::empty());
        city.stage_vehicle(stand, taxi);
        city.spawn_request(TaxiRequestKind::Customer, None);
    }
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_mark_batch(c: &mut Criterion) {
    let mut group = c.benchmark_group("mark_batch");
    for &n in &[10_000usize, 100_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter_batched(
                || populated_city(n),
                |mut city| city.tick(),
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_steady_state_frame(c: &mut Criterion) {
    let mut city = populated_city(100_000);
    city.tick_n(60);
    c.bench_function("steady_state_frame_100k", |b| b.iter(|| city.tick()));
}

fn bench_stand_pass(c: &mut Criterion) {
    c.bench_function("stand_pass_1k_stands", |b| {
        b.iter_batched(
            || {
                let mut city = TestRiderCity::new();
                add_busy_stands(&mut city, 1_000);
                city
            },
            |mut city| city.advance_secs(12.0),
            criterion::BatchSize::LargeInput,
        );
    });
}

fn bench_status_refresh(c: &mut Criterion) {
    let mut city = populated_city(100_000);
    add_busy_stands(&mut city, 500);
    city.tick_n(60);
    c.bench_function("status_refresh_100k", |b| {
        b.iter(|| {
            city.status_mut().request_refresh(true);
            city.tick();
        })
    });
}

criterion_group!(
    benches,
    bench_mark_batch,
    bench_steady_state_frame,
    bench_stand_pass,
    bench_status_refresh,
);
criterion_main!(benches);
