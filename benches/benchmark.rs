//! Benchmarks for sequence generation and the query boundary.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use fibseq::{generate, handle_query, parse_query};

fn bench_cached(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached");
    for limit in [0i64, 100, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(limit), &limit, |b, &limit| {
            b.iter(|| black_box(generate(black_box(limit), 0, 1).unwrap()))
        });
    }
    group.finish();
}

fn bench_computed(c: &mut Criterion) {
    let mut group = c.benchmark_group("computed");
    for limit in [0i64, 100, 100_000, 1_000_000] {
        group.bench_with_input(BenchmarkId::from_parameter(limit), &limit, |b, &limit| {
            b.iter(|| black_box(generate(black_box(limit), 3, 2).unwrap()))
        });
    }
    group.finish();
}

fn bench_parse_query(c: &mut Criterion) {
    c.bench_function("parse_query", |b| {
        b.iter(|| black_box(parse_query(black_box("n=1000&startx=3&starty=2")).unwrap()))
    });
}

fn bench_handle_query(c: &mut Criterion) {
    c.bench_function("handle_query_full_table", |b| {
        b.iter(|| black_box(handle_query(black_box("n=1000000"))))
    });
}

criterion_group!(
    benches,
    bench_cached,
    bench_computed,
    bench_parse_query,
    bench_handle_query,
);

criterion_main!(benches);
