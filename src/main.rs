//! Timing runner for the lanewise kernels.

use lanewise::kernels::backend;
use lanewise::matrix::naive_ijk::matmul_naive_ijk;
use lanewise::{Lane, LaneKind, add, mat_mul_slices, sum, vec_mul};
use std::hint::black_box;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("=== Lanewise Kernel Benchmark ===\n");
    println!("Register backend: {}\n", backend());

    let iterations = 5;

    run_kind::<i32>(iterations, |i| (i % 100) as i32);
    run_kind::<i64>(iterations, |i| (i % 100) as i64);
    run_kind::<f32>(iterations, |i| (i % 100) as f32);
    run_kind::<f64>(iterations, |i| (i % 100) as f64);
}

fn run_kind<T: Lane>(iterations: usize, to_lane: fn(usize) -> T) {
    let kind: LaneKind = T::KIND;
    println!(
        "Lane kind: {} ({} lanes per batch)",
        kind,
        kind.batch_capacity()
    );
    println!("{}", "-".repeat(60));

    let len = 1 << 20;
    // Small enough values that the sum never overflows an i32.
    let a: Vec<T> = (0..len).map(to_lane).collect();
    let b: Vec<T> = (0..len).map(|i| to_lane(i + 7)).collect();

    let results = [
        ("add", time_ms(iterations, || {
            let _ = black_box(add(&a, &b));
        })),
        ("sum", time_ms(iterations, || {
            let _ = black_box(sum(&a));
        })),
        ("vec_mul", time_ms(iterations, || {
            let _ = black_box(vec_mul(&a, &b));
        })),
    ];
    for (name, ms) in results {
        let melems = len as f64 / (ms / 1000.0) / 1e6;
        println!("{:10} {:>10} elems  {:8.3} ms  {:8.1} Melem/s", name, len, ms, melems);
    }

    let size = 128;
    let m: Vec<T> = (0..size * size).map(to_lane).collect();
    let fast = time_ms(iterations, || {
        let _ = black_box(mat_mul_slices(&m, size, size, &m, size, size));
    });
    let naive = time_ms(iterations, || {
        let mut c = vec![T::ZERO; size * size];
        matmul_naive_ijk(&m, &m, &mut c, size, size, size);
        black_box(c);
    });
    println!(
        "{:10} {:>4}×{:<4}       {:8.3} ms  (naive {:.3} ms, {:.1}×)",
        "mat_mul",
        size,
        size,
        fast,
        naive,
        naive / fast
    );
    println!();
}

/// Average wall time of `f` in milliseconds, after one warmup run.
fn time_ms(iterations: usize, mut f: impl FnMut()) -> f64 {
    f();

    let mut total = 0.0;
    for _ in 0..iterations {
        let start = Instant::now();
        f();
        total += start.elapsed().as_secs_f64();
    }
    total / iterations as f64 * 1000.0
}
