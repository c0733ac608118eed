use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use lanewise::matrix::naive_ijk::matmul_naive_ijk;
use lanewise::{add, mat_mul_slices, sum, vec_mul};

fn bench_elementwise(c: &mut Criterion) {
    let mut group = c.benchmark_group("elementwise_i32");

    for len in [1_000usize, 100_003] {
        let a: Vec<i32> = (0..len).map(|i| (i % 100) as i32).collect();
        let b: Vec<i32> = (0..len).map(|i| (i % 37) as i32).collect();
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("add", len), &len, |bench, _| {
            bench.iter(|| add(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("vec_mul", len), &len, |bench, _| {
            bench.iter(|| vec_mul(black_box(&a), black_box(&b)))
        });
        group.bench_with_input(BenchmarkId::new("sum", len), &len, |bench, _| {
            bench.iter(|| sum(black_box(&a)))
        });
    }

    group.finish();
}

fn bench_sum_f64(c: &mut Criterion) {
    let values: Vec<f64> = (0..100_001).map(|i| i as f64 * 0.5).collect();
    c.bench_function("sum_f64_100001", |bench| {
        bench.iter(|| sum(black_box(&values)))
    });
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul_f32");

    for size in [16usize, 64, 128] {
        let a: Vec<f32> = (0..size * size).map(|i| (i % 10) as f32).collect();
        let b: Vec<f32> = (0..size * size).map(|i| (i % 7) as f32).collect();

        group.bench_with_input(BenchmarkId::new("batched", size), &size, |bench, &n| {
            bench.iter(|| mat_mul_slices(black_box(&a), n, n, black_box(&b), n, n))
        });
        group.bench_with_input(BenchmarkId::new("naive_ijk", size), &size, |bench, &n| {
            bench.iter(|| {
                let mut out = vec![0.0f32; n * n];
                matmul_naive_ijk(black_box(&a), black_box(&b), &mut out, n, n, n);
                out
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_elementwise, bench_sum_f64, bench_matmul);
criterion_main!(benches);
