//! Criterion benchmarks for the four kernels.
//!
//! These complement the CLI runner: criterion gives statistical rigor on
//! one machine, the runner emits CSV rows for cross-machine comparison.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use hpcbench::{
    DEFAULT_BLOCK_SIZE, inclusive_scan_inplace, kahan_sum, make_random, matmul_blocked,
    matmul_naive,
};

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for &size in &[64usize, 128, 256] {
        let a = make_random::<f64>(size * size, 42);
        let b = make_random::<f64>(size * size, 43);

        group.throughput(Throughput::Elements((2 * size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("naive", size), &size, |bch, &s| {
            let mut out = Vec::new();
            bch.iter(|| matmul_naive(black_box(&a), black_box(&b), &mut out, s, s, s));
        });

        group.bench_with_input(BenchmarkId::new("blocked", size), &size, |bch, &s| {
            let mut out = Vec::new();
            bch.iter(|| {
                matmul_blocked(black_box(&a), black_box(&b), &mut out, s, s, s, DEFAULT_BLOCK_SIZE)
            });
        });
    }

    group.finish();
}

fn bench_reduction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reduction");

    for &size in &[1usize << 16, 1 << 20] {
        let x = make_random::<f64>(size, 42);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("kahan", size), &size, |bch, _| {
            bch.iter(|| kahan_sum(black_box(&x)));
        });
    }

    group.finish();
}

fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for &size in &[1usize << 16, 1 << 20] {
        let x = make_random::<f64>(size, 42);

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("inclusive", size), &size, |bch, _| {
            bch.iter_batched(
                || x.clone(),
                |mut tmp| inclusive_scan_inplace(black_box(&mut tmp)),
                criterion::BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_reduction, bench_scan);
criterion_main!(benches);
