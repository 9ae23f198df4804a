//! Backend Comparison Benchmark
//!
//! Compares the process-wide dispatcher against forced scalar and AVX-512
//! kernels, with `xxhash-rust` as an external baseline.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use std::hint::black_box;
use xxh64::{Backend, Hasher};

// =============================================================================
// BENCHMARKS
// =============================================================================

fn hash_with(backend: Backend, input: &[u8]) -> u64 {
    let mut hasher = Hasher::with_backend(0, backend);
    hasher.write(input);
    hasher.finalize()
}

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("XXH64 Backends");

    // Scenarios:
    // - Small (7B): short path, no kernel call
    // - Medium (1KB): L1 cache hot-path
    // - Large (256KB): bulk block throughput
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let input: Vec<u8> = (0..size).map(|i| (i * 7 + 3) as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));

        // 1. Dispatcher (Production Path)
        group.bench_function(format!("Dispatch ({}) - {size} bytes", xxh64::active_backend()), |b| {
            b.iter(|| xxh64::hash(black_box(&input)));
        });

        // 2. Scalar kernel
        group.bench_function(format!("Scalar - {size} bytes"), |b| {
            b.iter(|| hash_with(Backend::Scalar, black_box(&input)));
        });

        // 3. AVX-512 kernel, even on parts where detection would avoid it
        if Backend::Avx512.is_available() {
            group.bench_function(format!("AVX-512 - {size} bytes"), |b| {
                b.iter(|| hash_with(Backend::Avx512, black_box(&input)));
            });
        }

        // 4. External baseline
        group.bench_function(format!("xxhash-rust - {size} bytes"), |b| {
            b.iter(|| xxhash_rust::xxh64::xxh64(black_box(&input), 0));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
