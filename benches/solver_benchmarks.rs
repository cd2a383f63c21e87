//! Criterion benchmarks for the batch and stochastic solver families.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use descent_solver::functions::{Rosenbrock, Sphere};
use descent_solver::{
    minimize_batch, BatchAlgorithm, BatchParams, Problem, StochAlgorithm, StochParams, Vector,
};

fn bench_batch_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("batch");

    for algorithm in [
        BatchAlgorithm::Gd,
        BatchAlgorithm::CgdPrp,
        BatchAlgorithm::Lbfgs,
    ] {
        group.bench_function(format!("{algorithm}/rosenbrock8"), |b| {
            let rosenbrock = Rosenbrock::new(8);
            let problem = Problem::new(&rosenbrock);
            let x0 = Vector::from_element(8, -0.5);
            let params = BatchParams::new(algorithm).with_max_iters(200);

            b.iter(|| minimize_batch(black_box(&params), &problem, black_box(&x0)))
        });
    }

    group.bench_function("lbfgs/sphere64", |b| {
        let sphere = Sphere::new(64);
        let problem = Problem::new(&sphere);
        let x0 = Vector::from_element(64, 1.0);
        let params = BatchParams::new(BatchAlgorithm::Lbfgs);

        b.iter(|| minimize_batch(black_box(&params), &problem, black_box(&x0)))
    });

    group.finish();
}

fn bench_stochastic_epoch(c: &mut Criterion) {
    let mut group = c.benchmark_group("stoch");

    for algorithm in [
        StochAlgorithm::Sg,
        StochAlgorithm::AdaGrad,
        StochAlgorithm::Adam,
    ] {
        group.bench_function(format!("{algorithm}/sphere16"), |b| {
            let sphere = Sphere::new(16);
            let problem = Problem::new(&sphere);
            let x0 = Vector::from_element(16, 2.0);
            let params = StochParams::new(algorithm, 1, 100);

            b.iter(|| {
                descent_solver::minimize_stoch(black_box(&params), &problem, black_box(&x0))
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_batch_solvers, bench_stochastic_epoch);
criterion_main!(benches);
