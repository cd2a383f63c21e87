//! End-to-end batch solver checks: convergence on the convex catalog from
//! random starts, the line-search conditions, and the canonical scenario
//! runs on sphere, Rosenbrock, Beale and Himmelblau.

use std::collections::HashSet;

use descent_solver::functions::{make_convex_functions, Beale, Himmelblau, Rosenbrock, Sphere};
use descent_solver::{
    minimize_batch, BatchAlgorithm, BatchParams, Objective, Precision, Problem, Status, Vector,
};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

fn random_start(rng: &mut SmallRng, dims: usize) -> Vector {
    let x = Vector::from_fn(dims, |_, _| rng.gen_range(-1.0..1.0));
    let norm = x.norm();
    x.scale(0.9 / (1.0 + norm))
}

/// Run one algorithm over the convex catalog from random starting points;
/// returns (successes, valid trials).
///
/// Mirrors the classic benchmark protocol: solve tightly, then accept a
/// run when the gradient criterion dropped below `1e-4` and the iterate
/// landed within `sqrt(1e-4)` of a declared minimum. Flat quartic bowls
/// keep a visible gradient far longer than quadratics, so acceptance is
/// on the criterion rather than on the terminal status alone.
fn convex_sweep(algorithm: BatchAlgorithm, max_dims: usize, trials: usize) -> (usize, usize) {
    let g_thres: Precision = 1e-4;
    let x_thres = g_thres.sqrt();

    let mut rng = SmallRng::seed_from_u64(7577);
    let mut successes = 0;
    let mut total = 0;

    for func in make_convex_functions(2, max_dims) {
        let problem = Problem::new(func.as_ref());

        for _ in 0..trials {
            let x0 = random_start(&mut rng, func.size());
            let params = BatchParams::high_precision(algorithm);
            let state = minimize_batch(&params, &problem, &x0).expect("valid configuration");

            // out-of-domain solutions are not counted either way
            if !func.is_valid(&state.x) {
                continue;
            }
            total += 1;

            if state.convergence_criterion() < g_thres && func.is_minimum(&state.x, x_thres) {
                successes += 1;
            }
        }
    }

    (successes, total)
}

#[test]
fn lbfgs_converges_on_convex_catalog() {
    let (successes, total) = convex_sweep(BatchAlgorithm::Lbfgs, 16, 10);
    assert!(total > 0);
    assert!(
        successes as f64 >= 0.95 * total as f64,
        "L-BFGS: {successes}/{total} runs converged"
    );
}

#[test]
fn cgd_prp_converges_on_convex_catalog() {
    let (successes, total) = convex_sweep(BatchAlgorithm::CgdPrp, 8, 10);
    assert!(total > 0);
    assert!(
        successes as f64 >= 0.95 * total as f64,
        "CGD-PRP: {successes}/{total} runs converged"
    );
}

#[test]
fn every_batch_iteration_descends() {
    let rosenbrock = Rosenbrock::new(2);
    let problem = Problem::new(&rosenbrock);
    let x0 = Vector::from_vec(vec![-1.2, 1.0]);

    for algorithm in [
        BatchAlgorithm::Gd,
        BatchAlgorithm::CgdFr,
        BatchAlgorithm::CgdPrp,
        BatchAlgorithm::CgdDyhs,
        BatchAlgorithm::Lbfgs,
    ] {
        let mut last_f = Precision::INFINITY;
        let params = BatchParams::new(algorithm).with_max_iters(100);
        descent_solver::minimize_batch_logged(&params, &problem, &x0, |state| {
            assert!(
                state.f <= last_f,
                "{algorithm}: f increased from {last_f} to {}",
                state.f
            );
            last_f = state.f;
            true
        })
        .expect("valid configuration");
    }
}

#[test]
fn scenario_sphere_two_lbfgs_iterations() {
    let sphere = Sphere::new(10);
    let problem = Problem::new(&sphere);
    let x0 = Vector::from_element(10, 1.0);

    let state = minimize_batch(&BatchParams::new(BatchAlgorithm::Lbfgs), &problem, &x0)
        .expect("valid configuration");

    assert_eq!(state.status, Status::Converged);
    assert!(state.iter <= 2, "took {} iterations", state.iter);
    assert!(state.x.amax() < 1e-8);
    assert!(state.f < 1e-15);
}

#[test]
fn scenario_rosenbrock_lbfgs_succeeds_gd_stalls() {
    let rosenbrock = Rosenbrock::new(2);
    let problem = Problem::new(&rosenbrock);
    let x0 = Vector::from_vec(vec![-1.2, 1.0]);

    let lbfgs = minimize_batch(&BatchParams::new(BatchAlgorithm::Lbfgs), &problem, &x0)
        .expect("valid configuration");
    assert_eq!(lbfgs.status, Status::Converged);
    assert!(lbfgs.iter <= 40, "L-BFGS took {} iterations", lbfgs.iter);
    let xmin = Vector::from_element(2, 1.0);
    assert!((lbfgs.x - xmin).norm() < 1e-6);

    let gd = minimize_batch(&BatchParams::new(BatchAlgorithm::Gd), &problem, &x0)
        .expect("valid configuration");
    assert_eq!(gd.status, Status::MaxIters);
}

#[test]
fn scenario_beale_cgd_prp_from_random_starts() {
    let beale = Beale;
    let problem = Problem::new(&beale);
    let mut rng = SmallRng::seed_from_u64(40_412);

    let mut found = 0;
    for _ in 0..10 {
        let x0 = Vector::from_fn(2, |_, _| rng.gen_range(-4.5..4.5));
        let state = minimize_batch(&BatchParams::new(BatchAlgorithm::CgdPrp), &problem, &x0)
            .expect("valid configuration");

        if beale.is_minimum(&state.x, 1e-4) {
            found += 1;
        }
    }

    assert!(found >= 8, "minimum found in only {found}/10 starts");
}

#[test]
fn scenario_himmelblau_lbfgs_finds_distinct_minima() {
    let himmelblau = Himmelblau;
    let problem = Problem::new(&himmelblau);
    let mut rng = SmallRng::seed_from_u64(61_803);

    let minima = [
        (3.0, 2.0),
        (-2.805118, 3.131312),
        (-3.779310, -3.283186),
        (3.584428, -1.848126),
    ];
    let mut hit: HashSet<usize> = HashSet::new();

    for trial in 0..20 {
        let x0 = Vector::from_fn(2, |_, _| rng.gen_range(-5.0..5.0));
        let state = minimize_batch(&BatchParams::new(BatchAlgorithm::Lbfgs), &problem, &x0)
            .expect("valid configuration");

        assert!(
            himmelblau.is_minimum(&state.x, 1e-4),
            "trial {trial} ended away from every minimum at {:?}",
            state.x.as_slice()
        );

        for (i, (a, b)) in minima.iter().enumerate() {
            let xmin = Vector::from_vec(vec![*a, *b]);
            if (&state.x - xmin).norm() < 1e-4 {
                hit.insert(i);
            }
        }
    }

    assert!(hit.len() >= 3, "only {} distinct minima reached", hit.len());
}

#[test]
fn history_bound_is_respected_end_to_end() {
    // run L-BFGS with a small history on an ill-conditioned convex
    // problem and confirm it still converges
    let sphere = Sphere::new(30);
    let problem = Problem::new(&sphere);
    let x0 = Vector::from_element(30, 0.5);

    let params = BatchParams::new(BatchAlgorithm::Lbfgs).with_history_size(2);
    let state = minimize_batch(&params, &problem, &x0).expect("valid configuration");
    assert_eq!(state.status, Status::Converged);
}

#[test]
fn all_cgd_variants_minimize_a_quadratic() {
    let sphere = Sphere::new(6);
    let problem = Problem::new(&sphere);
    let x0 = Vector::from_element(6, 2.0);

    for algorithm in [
        BatchAlgorithm::Cgd,
        BatchAlgorithm::CgdFr,
        BatchAlgorithm::CgdPrp,
        BatchAlgorithm::CgdHs,
        BatchAlgorithm::CgdDy,
        BatchAlgorithm::CgdCd,
        BatchAlgorithm::CgdLs,
        BatchAlgorithm::CgdN,
        BatchAlgorithm::CgdDycd,
        BatchAlgorithm::CgdDyhs,
    ] {
        let state = minimize_batch(&BatchParams::new(algorithm), &problem, &x0)
            .expect("valid configuration");
        assert_eq!(state.status, Status::Converged, "{algorithm}");
        assert!(state.f < 1e-10, "{algorithm}: f = {:e}", state.f);
    }
}
