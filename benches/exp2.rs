//! Benchmarks for the deterministic kernel.
//!
//! Compares the portable `exp2`/`round` against the platform libm they
//! replace, and measures the key-encoding pipeline.
//!
//! Run with: `cargo bench --bench exp2`

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use detmath::{base32z_encode, exp2, hex64_to_base32z, round};

fn bench_exp2(c: &mut Criterion) {
    let inputs = [-700.25, -10.5, -1.0, 0.0, 0.3, 1.0, 10.5, 700.25];

    let mut group = c.benchmark_group("exp2");
    for x in inputs {
        group.bench_with_input(BenchmarkId::new("deterministic", x), &x, |b, &x| {
            b.iter(|| exp2(black_box(x)))
        });
        group.bench_with_input(BenchmarkId::new("libm", x), &x, |b, &x| {
            b.iter(|| black_box(x).exp2())
        });
    }
    group.finish();
}

fn bench_round(c: &mut Criterion) {
    let inputs = [0.49999999999999994, 2.5, -2.5, 1.0e12 + 0.5];

    let mut group = c.benchmark_group("round");
    for x in inputs {
        group.bench_with_input(BenchmarkId::new("deterministic", x), &x, |b, &x| {
            b.iter(|| round(black_box(x)))
        });
        group.bench_with_input(BenchmarkId::new("libm", x), &x, |b, &x| {
            b.iter(|| black_box(x).round())
        });
    }
    group.finish();
}

fn bench_encode(c: &mut Criterion) {
    let key = "4a1f00cc9e2b7d3855e6f1908ab2c4d64a1f00cc9e2b7d3855e6f1908ab2c4d6";
    let bytes: Vec<u8> = (0u8..32).collect();

    let mut group = c.benchmark_group("base32z");
    group.bench_function("hex64_to_base32z", |b| {
        b.iter(|| hex64_to_base32z(black_box(key)))
    });
    group.bench_function("encode_32_bytes", |b| {
        let mut buf = [0u8; 64];
        b.iter(|| base32z_encode(black_box(&bytes), &mut buf))
    });
    group.finish();
}

criterion_group!(benches, bench_exp2, bench_round, bench_encode);
criterion_main!(benches);
