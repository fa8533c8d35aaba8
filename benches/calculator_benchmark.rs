// ============================================================================
// Calculator Benchmarks
// ============================================================================
//
// Benchmark Categories:
// 1. Calculator Operations - compute plus history append
// 2. Big Integers - exact arithmetic past the machine word
// 3. Helpers - averaging and primality testing
// ============================================================================

use calculator::prelude::*;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

// ============================================================================
// Calculator Operations
// ============================================================================

fn benchmark_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculator_operations");

    for operation in Operation::ALL {
        group.bench_with_input(
            BenchmarkId::new("evaluate", operation.symbol()),
            &operation,
            |b, &operation| {
                let mut calc = Calculator::with_config(
                    CalculatorConfig::default().with_trace_operations(false),
                );
                b.iter(|| {
                    let result = calc.evaluate(operation, black_box(1234), black_box(7));
                    if calc.history_len() > 10_000 {
                        calc.clear_history();
                    }
                    black_box(result)
                });
            },
        );
    }

    group.finish();
}

// ============================================================================
// Big Integers
// ============================================================================

fn benchmark_big_integers(c: &mut Criterion) {
    let mut group = c.benchmark_group("big_integers");

    for exponent in [64i64, 1024, 8192].iter() {
        let base = Number::from(3).pow(&Number::from(*exponent));

        group.bench_with_input(BenchmarkId::new("multiply", exponent), &base, |b, base| {
            b.iter(|| black_box(base * base));
        });

        group.bench_with_input(BenchmarkId::new("display", exponent), &base, |b, base| {
            b.iter(|| black_box(base.to_string()));
        });
    }

    group.finish();
}

// ============================================================================
// Helpers
// ============================================================================

fn benchmark_average(c: &mut Criterion) {
    let mut group = c.benchmark_group("calculate_average");

    for len in [10usize, 1_000, 100_000].iter() {
        let numbers: Vec<i64> = (0..*len as i64).collect();
        group.bench_with_input(BenchmarkId::from_parameter(len), &numbers, |b, numbers| {
            b.iter(|| black_box(calculate_average(numbers.iter().copied())));
        });
    }

    group.finish();
}

fn benchmark_is_prime(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_prime");

    // Primes: the worst case for trial division
    for n in [97i64, 1_000_003, 1_000_000_007].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            b.iter(|| black_box(is_prime(black_box(n))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_operations,
    benchmark_big_integers,
    benchmark_average,
    benchmark_is_prime,
);
criterion_main!(benches);
