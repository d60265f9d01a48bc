//! Criterion benchmarks for the bee colony.
//!
//! Uses synthetic problems (Sphere function, OneMax, a small knapsack) to
//! measure colony overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use u_abc::bees::{bnb, BinaryBee, BinaryConstrainedBee, ContinuousBee};
use u_abc::hive::{Hive, HiveConfig};

fn sphere(dim: usize) -> ContinuousBee {
    ContinuousBee::new(vec![-5.0; dim], vec![5.0; dim], |x: &[f64]| {
        x.iter().map(|v| v * v).sum()
    })
    .unwrap()
}

fn one_max(dim: usize) -> BinaryBee {
    BinaryBee::new(dim, |bits: &[bool]| {
        bits.iter().filter(|b| !**b).count() as f64
    })
    .unwrap()
}

const CAPACITY: u32 = 165;
const WEIGHTS: [u32; 10] = [23, 31, 29, 44, 53, 38, 63, 85, 89, 82];
const UTILITIES: [u32; 10] = [92, 57, 49, 68, 60, 43, 67, 84, 87, 72];

fn knapsack() -> BinaryConstrainedBee {
    BinaryConstrainedBee::new(
        10,
        |bits: &[bool]| {
            let utility: u32 = bits.iter().zip(UTILITIES).filter(|(b, _)| **b).map(|(_, u)| u).sum();
            1.0 / utility as f64
        },
        |bits: &[bool]| {
            let weight: u32 = bits.iter().zip(WEIGHTS).filter(|(b, _)| **b).map(|(_, w)| w).sum();
            usize::from(weight > CAPACITY)
        },
    )
    .unwrap()
}

fn bench_continuous_sphere(c: &mut Criterion) {
    let mut group = c.benchmark_group("abc_sphere");
    group.sample_size(10);

    for (dim, bees, itrs) in [(10usize, 30usize, 100usize), (30, 50, 100), (100, 50, 50)] {
        let prototype = sphere(dim);
        let config = HiveConfig::default()
            .with_numb_bees(bees)
            .with_max_itrs(itrs)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("d{}_b{}_i{}", dim, bees, itrs), dim),
            &(prototype, config),
            |b, (p, c)| {
                b.iter(|| {
                    let mut hive = Hive::new(black_box(p.clone()), black_box(c.clone())).unwrap();
                    black_box(hive.run())
                })
            },
        );
    }
    group.finish();
}

fn bench_binary_onemax(c: &mut Criterion) {
    let mut group = c.benchmark_group("abc_onemax");
    group.sample_size(10);

    for dim in [32usize, 128, 512] {
        let prototype = one_max(dim);
        let config = HiveConfig::default()
            .with_numb_bees(30)
            .with_max_itrs(50)
            .with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(dim), &(prototype, config), |b, (p, c)| {
            b.iter(|| {
                let mut hive = Hive::new(black_box(p.clone()), black_box(c.clone())).unwrap();
                black_box(hive.run())
            })
        });
    }
    group.finish();
}

fn bench_knapsack(c: &mut Criterion) {
    let prototype = knapsack();
    let config = HiveConfig::default()
        .with_numb_bees(50)
        .with_max_itrs(200)
        .with_seed(42);
    c.bench_function("abc_knapsack_10", |b| {
        b.iter(|| {
            let mut hive = Hive::new(black_box(prototype.clone()), black_box(config.clone())).unwrap();
            black_box(hive.run())
        })
    });
}

fn bench_branch_and_bound(c: &mut Criterion) {
    let mut group = c.benchmark_group("bnb");
    for n in [16usize, 64, 256] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| bnb::branch_and_bound(black_box(0.35), black_box(n), black_box(n)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_continuous_sphere,
    bench_binary_onemax,
    bench_knapsack,
    bench_branch_and_bound
);
criterion_main!(benches);
