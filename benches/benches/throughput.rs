//! XXH64 Criterion Benchmark
//!
//! Latency for small keys, bulk throughput, and streaming overhead.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small inputs (Hash Map keys, IDs).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [
        (4, "4B"),
        (16, "16B"),
        (31, "31B"),
        (32, "32B"),
        (64, "64B"),
        (256, "256B"),
        (KB, "1KB"),
    ];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| xxh64::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK
// =============================================================================

/// Throughput for large buffers.
fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Bulk");

    for (size, name) in [(64 * KB, "64KB"), (MB, "1MB"), (16 * MB, "16MB")] {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| xxh64::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Cost of feeding 1MB through `write` in chunks of varying size.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");
    let input = random_input(MB);
    group.throughput(Throughput::Bytes(MB as u64));

    for chunk in [7, 32, 100, 4 * KB, 64 * KB] {
        group.bench_with_input(BenchmarkId::from_parameter(chunk), &chunk, |b, &chunk| {
            b.iter(|| {
                let mut hasher = xxh64::Hasher::new();
                for part in input.chunks(chunk) {
                    hasher.write(black_box(part));
                }
                hasher.finalize()
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_latency, bench_bulk, bench_streaming);
criterion_main!(benches);
