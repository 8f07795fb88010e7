use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rs2_eager::*;

fn bench_chain_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("chain_operations");

    for size in [1_000, 10_000, 100_000].iter() {
        group.bench_with_input(BenchmarkId::new("filter_map", size), size, |b, &size| {
            b.iter(|| {
                let result = from_range(0, size - 1, 1)
                    .map(|x| black_box(x * 2))
                    .filter(|&x| black_box(x % 4 == 0))
                    .count();
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("reduce", size), size, |b, &size| {
            b.iter(|| {
                let result = from_range(0i64, size as i64 - 1, 1).reduce(0, |acc, x| black_box(acc + x));
                black_box(result)
            });
        });

        group.bench_with_input(BenchmarkId::new("sorted", size), size, |b, &size| {
            let data: Vec<i32> = (0..size).rev().collect();
            b.iter(|| {
                let result = from_vec(data.clone()).sorted(|a, b| a < b);
                black_box(result)
            });
        });
    }

    group.finish();
}

fn bench_distinct(c: &mut Criterion) {
    let mut group = c.benchmark_group("distinct");

    for size in [1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("ints", size), size, |b, &size| {
            let data: Vec<i32> = (0..size).map(|x| x % 100).collect();
            b.iter(|| black_box(from_vec(data.clone()).distinct()));
        });

        group.bench_with_input(BenchmarkId::new("strings", size), size, |b, &size| {
            let data: Vec<String> = (0..size).map(|x| format!("item-{}", x % 250)).collect();
            b.iter(|| black_box(from_vec(data.clone()).distinct()));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chain_operations, bench_distinct);
criterion_main!(benches);
