//! Analytic benchmark functions with gradients, domains and known minima.
//!
//! Every entry implements [`Objective`] with an analytic gradient, a domain
//! predicate, a convexity flag and (where catalogued) its minima. The
//! catalog builder sweeps dimensionalities and emits every function whose
//! supported range brackets the current dimension.

use std::sync::Arc;

use crate::objective::Objective;

pub mod util;

mod axis_ellipsoid;
mod beale;
mod bohachevsky;
mod booth;
mod camel3;
mod cauchy;
mod chung_reynolds;
mod colville;
mod dixon_price;
mod exponential;
mod goldstein_price;
mod himmelblau;
mod matyas;
mod mccormick;
mod powell;
mod qing;
mod rosenbrock;
mod rotated_ellipsoid;
mod sargan;
mod schumer_steiglitz;
mod sphere;
mod styblinski_tang;
mod sum_squares;
mod trid;
mod zakharov;

pub use axis_ellipsoid::AxisEllipsoid;
pub use beale::Beale;
pub use bohachevsky::{Bohachevsky, BohachevskyType};
pub use booth::Booth;
pub use camel3::ThreeHumpCamel;
pub use cauchy::Cauchy;
pub use chung_reynolds::ChungReynolds;
pub use colville::Colville;
pub use dixon_price::DixonPrice;
pub use exponential::Exponential;
pub use goldstein_price::GoldsteinPrice;
pub use himmelblau::Himmelblau;
pub use matyas::Matyas;
pub use mccormick::McCormick;
pub use powell::Powell;
pub use qing::Qing;
pub use rosenbrock::Rosenbrock;
pub use rotated_ellipsoid::RotatedEllipsoid;
pub use sargan::Sargan;
pub use schumer_steiglitz::SchumerSteiglitz;
pub use sphere::Sphere;
pub use styblinski_tang::StyblinskiTang;
pub use sum_squares::SumSquares;
pub use trid::Trid;
pub use zakharov::Zakharov;

/// Shared handle to a catalog entry.
pub type FunctionRef = Arc<dyn Objective>;

fn append(func: FunctionRef, dims: usize, funcs: &mut Vec<FunctionRef>) {
    if func.min_dims() <= dims && dims <= func.max_dims() {
        funcs.push(func);
    }
}

/// Build the catalog for every dimension in `[min_dims, max_dims]`,
/// incrementing by 1 up to 8 and doubling thereafter.
pub fn make_functions(min_dims: usize, max_dims: usize) -> Vec<FunctionRef> {
    assert!(min_dims >= 1, "dimensions start at 1");
    assert!(min_dims <= max_dims, "empty dimension range");

    let mut funcs: Vec<FunctionRef> = Vec::new();
    let mut dims = min_dims;
    while dims <= max_dims {
        append(Arc::new(Beale), dims, &mut funcs);
        append(Arc::new(Booth), dims, &mut funcs);
        append(Arc::new(Matyas), dims, &mut funcs);
        append(Arc::new(Colville), dims, &mut funcs);
        append(Arc::new(McCormick), dims, &mut funcs);
        append(Arc::new(ThreeHumpCamel), dims, &mut funcs);
        append(Arc::new(GoldsteinPrice), dims, &mut funcs);
        append(Arc::new(Himmelblau), dims, &mut funcs);
        append(Arc::new(Bohachevsky::new(BohachevskyType::One)), dims, &mut funcs);
        append(Arc::new(Bohachevsky::new(BohachevskyType::Two)), dims, &mut funcs);
        append(Arc::new(Bohachevsky::new(BohachevskyType::Three)), dims, &mut funcs);

        append(Arc::new(Trid::new(dims)), dims, &mut funcs);
        append(Arc::new(Qing::new(dims)), dims, &mut funcs);
        append(Arc::new(Cauchy::new(dims)), dims, &mut funcs);
        append(Arc::new(Sargan::new(dims)), dims, &mut funcs);
        if dims % 4 == 0 {
            append(Arc::new(Powell::new(dims)), dims, &mut funcs);
        }
        append(Arc::new(Zakharov::new(dims)), dims, &mut funcs);
        append(Arc::new(Rosenbrock::new(dims)), dims, &mut funcs);
        append(Arc::new(Exponential::new(dims)), dims, &mut funcs);
        append(Arc::new(DixonPrice::new(dims)), dims, &mut funcs);
        append(Arc::new(ChungReynolds::new(dims)), dims, &mut funcs);
        append(Arc::new(AxisEllipsoid::new(dims)), dims, &mut funcs);
        append(Arc::new(StyblinskiTang::new(dims)), dims, &mut funcs);
        append(Arc::new(Sphere::new(dims)), dims, &mut funcs);
        append(Arc::new(SchumerSteiglitz::new(dims)), dims, &mut funcs);
        append(Arc::new(RotatedEllipsoid::new(dims)), dims, &mut funcs);

        dims = if dims < 8 { dims + 1 } else { dims * 2 };
    }

    funcs
}

/// The convex subset of [`make_functions`].
pub fn make_convex_functions(min_dims: usize, max_dims: usize) -> Vec<FunctionRef> {
    make_functions(min_dims, max_dims)
        .into_iter()
        .filter(|f| f.is_convex())
        .collect()
}
