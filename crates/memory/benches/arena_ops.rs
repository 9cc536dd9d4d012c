//! Arena allocation benchmarks
//!
//! Measures the trivial and tracked allocation paths, array
//! construction, and reset cost with a populated ledger.

use std::hint::black_box;

use criterion::{BatchSize, Criterion, Throughput, criterion_group, criterion_main};
use ingot_memory::FixedArena;

fn bench_trivial_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc_trivial");
    group.throughput(Throughput::Elements(1));

    group.bench_function("u64", |b| {
        let mut arena = FixedArena::medium();
        b.iter(|| {
            if arena.available() < 64 {
                arena.reset();
            }
            black_box(arena.alloc_trivial(0x5EED_u64).unwrap());
        });
    });

    group.bench_function("u64_system_baseline", |b| {
        b.iter(|| {
            black_box(Box::new(0x5EED_u64));
        });
    });

    group.finish();
}

fn bench_tracked_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc_tracked");
    group.throughput(Throughput::Elements(1));

    group.bench_function("string", |b| {
        let mut arena = FixedArena::medium();
        b.iter(|| {
            if arena.available() < 256 {
                arena.reset();
            }
            black_box(arena.alloc(String::from("statement")).unwrap());
        });
    });

    group.finish();
}

fn bench_array_alloc(c: &mut Criterion) {
    let mut group = c.benchmark_group("alloc_array");
    group.throughput(Throughput::Elements(64));

    group.bench_function("u8_x64", |b| {
        let mut arena = FixedArena::medium();
        b.iter(|| {
            if arena.available() < 128 {
                arena.reset();
            }
            black_box(arena.alloc_array(64, 0xAB_u8).unwrap());
        });
    });

    group.finish();
}

fn bench_reset(c: &mut Criterion) {
    c.bench_function("reset_100_tracked", |b| {
        b.iter_batched_ref(
            || {
                let arena = FixedArena::medium();
                for index in 0..100 {
                    arena.alloc(index.to_string()).unwrap();
                }
                arena
            },
            FixedArena::reset,
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_trivial_alloc,
    bench_tracked_alloc,
    bench_array_alloc,
    bench_reset
);
criterion_main!(benches);
