use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_xoshiro::Xoshiro256PlusPlus;
use std::hint::black_box;
use tenso::*;

const SAMPLE_SIZE: usize = 1_000;

fn xrng() -> Xoshiro256PlusPlus {
    Xoshiro256PlusPlus::seed_from_u64(0x7e45_0001)
}

fn samples<T>(n: usize) -> Vec<Scalar<T>>
where
    T: Representation,
    rand::distributions::Standard: Distribution<T>,
{
    let mut rng = xrng();
    (0..n).map(|_| Scalar::new(rng.r#gen::<T>())).collect()
}

/// 1. SUM: wrapped vs native, at several lengths
fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for &size in &[100, 1_000, 10_000] {
        group.throughput(Throughput::Elements(size as u64));

        let wrapped: Vec<Scalar<f32>> = samples(size);
        let native: Vec<f32> = wrapped.iter().map(|x| x.value()).collect();

        group.bench_with_input(BenchmarkId::new("scalar_f32", size), &wrapped, |b, data| {
            b.iter(|| black_box(black_box(data).iter().sum::<Scalar<f32>>()))
        });
        group.bench_with_input(BenchmarkId::new("native_f32", size), &native, |b, data| {
            b.iter(|| black_box(black_box(data).iter().sum::<f32>()))
        });
    }
    group.finish();
}

/// 2. DOT PRODUCT per representation, the pattern the vector layer uses
fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot");
    group.throughput(Throughput::Elements(SAMPLE_SIZE as u64));

    let a: Vec<Scalar<i32>> = samples::<i32>(SAMPLE_SIZE).into_iter().map(|x| x / Scalar::new(1 << 16)).collect();
    let b: Vec<Scalar<i32>> = samples::<i32>(SAMPLE_SIZE).into_iter().map(|x| x / Scalar::new(1 << 16)).collect();
    group.bench_function("int32", |bench| {
        bench.iter(|| black_box(a.iter().zip(&b).map(|(&x, &y)| x * y).sum::<Scalar<i32>>()))
    });

    let a: Vec<Scalar<f64>> = samples(SAMPLE_SIZE);
    let b: Vec<Scalar<f64>> = samples(SAMPLE_SIZE);
    group.bench_function("float64", |bench| {
        bench.iter(|| black_box(a.iter().zip(&b).map(|(&x, &y)| x * y).sum::<Scalar<f64>>()))
    });

    let a: Vec<Scalar<Decimal>> = (0..SAMPLE_SIZE as i64).map(|i| Scalar::new(Decimal::new(i, 2))).collect();
    group.bench_function("decimal128", |bench| {
        bench.iter(|| black_box(a.iter().zip(&a).map(|(&x, &y)| x * y).sum::<Scalar<Decimal>>()))
    });
    group.finish();
}

/// 3. NORM: sum of squares followed by a sqrt
fn bench_norm(c: &mut Criterion) {
    let data: Vec<Scalar<f64>> = samples(SAMPLE_SIZE);

    c.bench_function("norm/float64", |b| {
        b.iter(|| {
            let squares: Scalar<f64> = black_box(&data).iter().map(|&x| x * x).sum();
            black_box(squares.sqrt())
        })
    });
}

/// 4. COMPARISON through the native order
fn bench_max(c: &mut Criterion) {
    let data: Vec<Scalar<u64>> = samples(SAMPLE_SIZE);

    c.bench_function("max/uint64", |b| {
        b.iter(|| black_box(black_box(&data).iter().fold(Scalar::zero(), |m, &x| m.max(x))))
    });
}

criterion_group!(benches, bench_sum, bench_dot, bench_norm, bench_max);
criterion_main!(benches);
