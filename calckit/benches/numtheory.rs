use calckit::numtheory::{factorial, factorize, gcd_of, lcm_of, Limits};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;

fn bench_factorial(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorial");

    for n in [20i64, 500, 2_000, 5_000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| factorial(black_box(n)));
        });
    }

    group.finish();
}

fn bench_factorize(c: &mut Criterion) {
    let mut group = c.benchmark_group("factorize");

    group.bench_with_input(BenchmarkId::new("smooth", "2^40"), &(1i64 << 40), |b, &n| {
        b.iter(|| factorize(black_box(n)));
    });

    // 999983 is prime, so trial division runs all the way to sqrt(n)
    let semiprime = 999_983i64 * 999_983;
    group.bench_with_input(BenchmarkId::new("semiprime", "999983^2"), &semiprime, |b, &n| {
        b.iter(|| factorize(black_box(n)));
    });

    let ceiling = Limits::default().max_factorization as i64 - 11;
    group.bench_with_input(BenchmarkId::new("near_ceiling", ceiling), &ceiling, |b, &n| {
        b.iter(|| factorize(black_box(n)));
    });

    group.finish();
}

fn bench_gcd_lcm(c: &mut Criterion) {
    let mut group = c.benchmark_group("gcd_lcm");

    let values: Vec<i64> = (1..=40).collect();
    group.bench_function("lcm_1_to_40", |b| {
        b.iter(|| lcm_of(black_box(&values)));
    });

    let multiples: Vec<i64> = (1..=1_000).map(|k| k * 7_919).collect();
    group.bench_function("gcd_1000_values", |b| {
        b.iter(|| gcd_of(black_box(&multiples)));
    });

    group.finish();
}

criterion_group!(benches, bench_factorial, bench_factorize, bench_gcd_lcm);
criterion_main!(benches);
