//! Random continued fractions drawn from an injected random source

use crate::cont_frac::ContinuedFraction;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{FromPrimitive, One, Zero};
use rand::Rng;
use tracing::debug;

/// Bits of a uniform double in `[0, 1)`
const UNIFORM_BITS: usize = 53;

/// A number uniformly distributed in `[0, 1)`: a random double `m / 2^53` expanded
/// exactly and truncated to `max_terms` coefficients (at least one).
pub fn uniform<R: Rng + ?Sized>(rng: &mut R, max_terms: usize) -> ContinuedFraction {
    let m: u64 = rng.gen_range(0..1u64 << UNIFORM_BITS);
    debug!(m, max_terms, "uniform draw");
    let r = BigRational::new(BigInt::from(m), BigInt::one() << UNIFORM_BITS);
    ContinuedFraction::from_ratio(r).truncate(max_terms.max(1))
}

/// A number in `[0, 1)` whose coefficients follow the Gauss-Kuzmin distribution,
/// i.e. the distribution of coefficients of almost all real numbers.
///
/// The coefficients are `floor(1 / (2^r - 1))` for uniform draws `r` in `(0, 1)`.
/// They are drawn eagerly so that every traversal sees the same number.
pub fn gauss_kuzmin<R: Rng + ?Sized>(rng: &mut R, max_terms: usize) -> ContinuedFraction {
    let mut coeffs = Vec::with_capacity(max_terms.max(1));
    coeffs.push(BigInt::zero());
    while coeffs.len() < max_terms {
        coeffs.push(draw_gauss_kuzmin(rng));
    }
    debug!(terms = coeffs.len(), "gauss-kuzmin draw");
    ContinuedFraction::from_source(coeffs.into_iter())
}

fn draw_gauss_kuzmin<R: Rng + ?Sized>(rng: &mut R) -> BigInt {
    loop {
        let r: f64 = rng.gen();
        let a = (1. / (r.exp2() - 1.)).floor();
        match BigInt::from_f64(a) {
            Some(a) if a >= BigInt::from(1) => return a,
            _ => continue, // r = 0
        }
    }
}
