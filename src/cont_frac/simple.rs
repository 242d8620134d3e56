//! Implementation of simple continued fractions with lazily evaluated coefficients

use super::block::Block;
use super::convergents::{Convergents, Digits};
use super::euclid::Euclid;
use super::float::{float_to_ratio, ratio_to_float, FloatFormat, BINARY32, BINARY64};
use super::infinite::InfiniteContinuedFraction;
use crate::error::CfError;
use crate::symbols::{Pi, SqrtCoefficients, E};
use crate::traits::{Approximation, Computable};
use dyn_clone::DynClone;
use num_bigint::{BigInt, Sign};
use num_rational::BigRational;
use num_traits::float::FloatCore;
use num_traits::{FromPrimitive, One, Signed, ToPrimitive, Zero};
use rust_decimal::Decimal;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::rc::Rc;

/// Number of leading coefficients mixed into the hash of a [ContinuedFraction]
pub const HASH_TERMS: usize = 32;

/// Number of leading coefficients printed by the `Display` implementation of [ContinuedFraction]
pub const DISPLAY_TERMS: usize = 20;

/// A cloneable source of continued fraction coefficients.
/// Cloning a source must yield an independent iterator starting from the same state.
pub trait TermSource: Iterator<Item = BigInt> + DynClone {}

impl<I: Iterator<Item = BigInt> + Clone> TermSource for I {}

dyn_clone::clone_trait_object!(TermSource);

/// Iterator of coeffcients in a [ContinuedFraction]
#[derive(Clone)]
pub struct Coefficients(Box<dyn TermSource>);

impl Iterator for Coefficients {
    type Item = BigInt;

    #[inline]
    fn next(&mut self) -> Option<BigInt> {
        self.0.next()
    }
}

/// This struct represents a simple continued fraction `a0 + 1/(a1 + 1/ (a2 + ...))`
/// Where a0 is an signed integer, a1, a2, .. are positive integers.
///
/// The coefficients are evaluated lazily and can be infinitely many. The struct keeps
/// a pristine copy of the coefficient source, every traversal starts from a fresh clone
/// of it. Arithmetic operations are exact and lazy as well: they return a new
/// continued fraction that pulls from the operands only when its own coefficients are requested.
///
/// An empty coefficient list represents the (unsigned) infinity.
#[derive(Clone)]
pub struct ContinuedFraction {
    source: Rc<dyn TermSource>,
}

impl ContinuedFraction {
    /// Create a continued fraction from a finite list of coefficients.
    ///
    /// The coefficients don't need to be canonical: zeros and negative coefficients
    /// after the first one are resolved by evaluating the list exactly.
    pub fn new(coeffs: Vec<BigInt>) -> Self {
        if coeffs.iter().skip(1).all(|a| a.is_positive()) {
            return Self::from_source(coeffs.into_iter());
        }

        let mut block = Block::identity();
        for a in coeffs {
            let (p, q) = block.rmove(a);
            block.update(p, q);
        }
        Self::from_source(block.finalize())
    }

    /// Wrap a (possibly infinite) coefficient iterator.
    ///
    /// The coefficients after the first one are expected to be either all positive, or
    /// all negative (for the termwise negation of a continued fraction). A trailing one is folded.
    pub fn from_source<I: Iterator<Item = BigInt> + Clone + 'static>(coeffs: I) -> Self {
        ContinuedFraction { source: Rc::new(coeffs.canonical()) }
    }

    pub fn from_integer<T: Into<BigInt>>(i: T) -> Self {
        Self::from_source(std::iter::once(i.into()))
    }

    pub fn from_ratio(r: BigRational) -> Self {
        Self::from_source(Euclid::from(r))
    }

    /// Expand the exact value of a binary float. Infinities map to the unsigned infinity.
    pub fn from_float<F: FloatCore>(f: F) -> Result<Self, CfError> {
        if f.is_nan() {
            return Err(CfError::NotANumber);
        }
        Ok(match float_to_ratio(f) {
            Some(r) => Self::from_ratio(r),
            None => Self::infinity(),
        })
    }

    /// Expand the exact value of a decimal number
    pub fn from_decimal(d: Decimal) -> Self {
        let denom = BigInt::from(10u32).pow(d.scale());
        Self::from_ratio(BigRational::new(BigInt::from(d.mantissa()), denom))
    }

    /// Keep at most `max_terms` leading coefficients
    pub fn truncate(&self, max_terms: usize) -> Self {
        Self::from_source(self.coeffs().take(max_terms))
    }

    #[inline]
    pub fn two() -> Self {
        Self::from_integer(2)
    }

    #[inline]
    pub fn one_half() -> Self {
        Self::from_source(vec![BigInt::zero(), BigInt::from(2)].into_iter())
    }

    #[inline]
    pub fn minus_one() -> Self {
        Self::from_integer(-1)
    }

    #[inline]
    pub fn infinity() -> Self {
        Self::from_source(std::iter::empty())
    }

    /// Euler's number truncated to `max_terms` coefficients
    pub fn e(max_terms: usize) -> Self {
        Self::from_source(E {}.cfrac::<BigInt>()).truncate(max_terms)
    }

    /// π truncated to `max_terms` coefficients
    pub fn pi(max_terms: usize) -> Self {
        Self::from_source(Pi {}.cfrac::<BigInt>()).truncate(max_terms)
    }

    /// Square root of a nonnegative integer, truncated to `max_terms` coefficients (at least one)
    pub fn sqrt<T: Into<BigInt>>(n: T, max_terms: usize) -> Result<Self, CfError> {
        Ok(Self::from_source(SqrtCoefficients::new(n.into())?.take(max_terms.max(1))))
    }
}

impl ContinuedFraction {
    /// Returns an iterator of the coefficients in the continued fraction.
    /// Each call restarts the evaluation from the beginning.
    pub fn coeffs(&self) -> Coefficients {
        Coefficients(dyn_clone::clone_box(&*self.source))
    }

    /// Collect the first `count` coefficients
    pub fn take(&self, count: usize) -> Vec<BigInt> {
        self.coeffs().take(count).collect()
    }

    /// Returns an iterator of the convergents
    pub fn convergents(&self) -> Convergents<Coefficients, BigInt> {
        self.coeffs().convergents()
    }

    /// Returns an iterator of the positional digits of the absolute value,
    /// see [Digits]
    pub fn digits(&self, radix: u32) -> Digits<Coefficients, BigInt> {
        self.abs().coeffs().digits(BigInt::from(radix))
    }

    /// The exact rational value, i.e. the last convergent.
    /// It will not return for an infinite continued fraction, truncate it first.
    pub fn to_ratio(&self) -> Result<BigRational, CfError> {
        self.convergents().last().ok_or(CfError::Infinite)
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.coeffs().next().is_none()
    }

    pub fn sign(&self) -> Result<Sign, CfError> {
        let mut coeffs = self.coeffs();
        let a0 = coeffs.next().ok_or(CfError::Infinite)?;
        Ok(match a0.sign() {
            Sign::NoSign if coeffs.next().is_some() => Sign::Plus,
            s => s,
        })
    }

    /// Largest integer not greater than the number
    pub fn floor(&self) -> Result<BigInt, CfError> {
        self.coeffs().next().ok_or(CfError::Infinite)
    }

    /// Smallest integer not less than the number
    pub fn ceil(&self) -> Result<BigInt, CfError> {
        let mut coeffs = self.coeffs();
        let a0 = coeffs.next().ok_or(CfError::Infinite)?;
        Ok(if coeffs.next().is_some() { a0 + 1 } else { a0 })
    }

    /// Integer part, rounded toward zero
    pub fn trunc(&self) -> Result<BigInt, CfError> {
        let mut coeffs = self.coeffs();
        let a0 = coeffs.next().ok_or(CfError::Infinite)?;
        Ok(if a0.is_negative() && coeffs.next().is_some() { a0 + 1 } else { a0 })
    }

    /// Nearest integer, rounding half way cases away from zero
    pub fn round(&self) -> Result<BigInt, CfError> {
        let mut coeffs = self.coeffs();
        let a0 = coeffs.next().ok_or(CfError::Infinite)?;
        let a1 = match coeffs.next() {
            Some(v) => v,
            None => return Ok(a0),
        };

        // the fraction part is above 1/2 iff a1 = 1, and exactly 1/2 iff the tail is [2]
        let up = if a1.is_one() {
            true
        } else if a1 == BigInt::from(2) && coeffs.next().is_none() {
            !a0.is_negative()
        } else {
            false
        };
        Ok(if up { a0 + 1 } else { a0 })
    }

    /// `x - trunc(x)`, which carries the sign of the number
    pub fn fract(&self) -> Result<Self, CfError> {
        let t = self.trunc()?;
        Ok(self.homo(BigInt::one(), -t, BigInt::zero(), BigInt::one()))
    }

    pub fn abs(&self) -> Self {
        match self.coeffs().next() {
            Some(a0) if a0.is_negative() => self.negate(),
            _ => self.clone(),
        }
    }
}

// arithmetic operations
impl ContinuedFraction {
    /// This method returns a homographic function result on the fraction
    /// A homographic function is `(ax + b)/(cx + d)`
    pub fn homo(&self, a: BigInt, b: BigInt, c: BigInt, d: BigInt) -> Self {
        Self::from_source(self.coeffs().homo(a, b, c, d))
    }

    /// This method returns a bihomographic function result on the fractions
    /// A bihomographic function is `(axy + bx + cy + d)/(exy + fx + gy + h)`
    #[allow(clippy::too_many_arguments)]
    pub fn bihomo(
        &self,
        rhs: &Self,
        a: BigInt,
        b: BigInt,
        c: BigInt,
        d: BigInt,
        e: BigInt,
        f: BigInt,
        g: BigInt,
        h: BigInt,
    ) -> Self {
        Self::from_source(self.coeffs().bihomo(rhs.coeffs(), a, b, c, d, e, f, g, h))
    }

    fn transform(&self, [a, b, c, d]: [i64; 4]) -> Self {
        self.homo(a.into(), b.into(), c.into(), d.into())
    }

    fn combine(&self, rhs: &Self, [a, b, c, d, e, f, g, h]: [i64; 8]) -> Self {
        self.bihomo(rhs, a.into(), b.into(), c.into(), d.into(), e.into(), f.into(), g.into(), h.into())
    }

    pub fn negate(&self) -> Self {
        Self::from_source(self.coeffs().negated())
    }

    pub fn recip(&self) -> Self {
        self.transform([0, 1, 1, 0])
    }

    pub fn sum(&self, rhs: &Self) -> Self {
        self.combine(rhs, [0, 1, 1, 0, 0, 0, 0, 1])
    }

    pub fn difference(&self, rhs: &Self) -> Self {
        self.combine(rhs, [0, 1, -1, 0, 0, 0, 0, 1])
    }

    pub fn product(&self, rhs: &Self) -> Self {
        self.combine(rhs, [1, 0, 0, 0, 0, 0, 0, 1])
    }

    pub fn quotient(&self, rhs: &Self) -> Self {
        self.combine(rhs, [0, 1, 0, 0, 0, 0, 1, 0])
    }

    /// `x - round(x / y) * y`, the result lies within `[-|y|/2, |y|/2]`
    pub fn modulo(&self, rhs: &Self) -> Result<Self, CfError> {
        if self.is_infinite() || rhs.is_infinite() {
            return Err(CfError::Infinite);
        }
        let k = self.quotient(rhs).round()?;
        Ok(self.difference(&rhs.homo(k, BigInt::zero(), BigInt::zero(), BigInt::one())))
    }

    /// Integer power by repeated squaring, negative exponents take the reciprocal
    pub fn pow(&self, exp: i32) -> Self {
        let mut base = self.clone();
        let mut result: Option<Self> = None;
        let mut e = exp.unsigned_abs();
        while e > 0 {
            if e & 1 == 1 {
                result = Some(match result {
                    Some(r) => r.product(&base),
                    None => base.clone(),
                });
            }
            e >>= 1;
            if e > 0 {
                base = base.product(&base);
            }
        }

        let result = result.unwrap_or_else(Self::one);
        if exp < 0 { result.recip() } else { result }
    }
}

/// Alternating lexicographic comparison of two coefficient sequences.
/// An exhausted sequence acts as an infinite coefficient at its position.
fn compare_coeffs<I, J>(mut lhs: I, mut rhs: J) -> Ordering
where I: Iterator<Item = BigInt>, J: Iterator<Item = BigInt> {
    let mut odd = false;
    loop {
        let ord = match (lhs.next(), rhs.next()) {
            (None, None) => return Ordering::Equal,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp(&b),
        };
        if ord != Ordering::Equal {
            return if odd { ord.reverse() } else { ord };
        }
        odd = !odd;
    }
}

impl ContinuedFraction {
    /// Three way comparison. Comparing two equal irrational numbers will not return.
    pub fn compare(&self, other: &Self) -> Result<Ordering, CfError> {
        if self.is_infinite() || other.is_infinite() {
            return Err(CfError::Infinite);
        }
        Ok(compare_coeffs(self.coeffs(), other.coeffs()))
    }

    pub fn min(&self, other: &Self) -> Result<Self, CfError> {
        Ok(match self.compare(other)? {
            Ordering::Greater => other.clone(),
            _ => self.clone(),
        })
    }

    pub fn max(&self, other: &Self) -> Result<Self, CfError> {
        Ok(match self.compare(other)? {
            Ordering::Less => other.clone(),
            _ => self.clone(),
        })
    }
}

impl PartialEq for ContinuedFraction {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.source, &other.source)
            || compare_coeffs(self.coeffs(), other.coeffs()) == Ordering::Equal
    }
}

impl Eq for ContinuedFraction {}

impl PartialOrd for ContinuedFraction {
    /// Infinity is only comparable with itself
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self.is_infinite(), other.is_infinite()) {
            (true, true) => Some(Ordering::Equal),
            (false, false) => Some(compare_coeffs(self.coeffs(), other.coeffs())),
            _ => None,
        }
    }
}

impl Hash for ContinuedFraction {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for a in self.coeffs().take(HASH_TERMS) {
            a.hash(state);
        }
    }
}

impl fmt::Display for ContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut coeffs = self.coeffs();
        let a0 = match coeffs.next() {
            Some(v) => v,
            None => return write!(f, "inf"),
        };

        write!(f, "[{}", a0)?;
        let mut separator = "; ";
        for a in coeffs.by_ref().take(DISPLAY_TERMS - 1) {
            write!(f, "{}{}", separator, a)?;
            separator = ", ";
        }
        if coeffs.next().is_some() {
            write!(f, "{}...", separator)?;
        }
        write!(f, "]")
    }
}

impl fmt::Debug for ContinuedFraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ContinuedFraction({})", self)
    }
}

impl Computable<BigInt> for ContinuedFraction {
    fn approximated(&self, limit: &BigInt) -> Result<Approximation<BigRational>, CfError> {
        let mut convergents = self.convergents();
        let mut last = convergents.next().ok_or(CfError::Infinite)?;
        loop {
            last = match convergents.next() {
                Some(v) if v.denom() < limit => v,
                Some(_) => return Ok(Approximation::Approximated(last)),
                None => return Ok(Approximation::Exact(last)),
            }
        }
    }
}

impl ContinuedFraction {
    /// Walk the convergents until two consecutive ones round to the same float.
    /// The convergents alternately bound the number, so it rounds to the same value.
    fn to_float(&self, format: &FloatFormat) -> f64 {
        let mut last = None;
        for c in self.convergents() {
            let v = ratio_to_float(c.numer(), c.denom(), format);
            if last == Some(v) {
                return v;
            }
            last = Some(v);
        }
        last.unwrap_or(f64::INFINITY)
    }
}

impl ToPrimitive for ContinuedFraction {
    fn to_i64(&self) -> Option<i64> {
        self.trunc().ok()?.to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.trunc().ok()?.to_u64()
    }

    fn to_f64(&self) -> Option<f64> {
        Some(self.to_float(&BINARY64))
    }

    fn to_f32(&self) -> Option<f32> {
        Some(self.to_float(&BINARY32) as f32)
    }
}

impl FromPrimitive for ContinuedFraction {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from_integer(n))
    }

    fn from_f64(f: f64) -> Option<Self> {
        Self::from_float(f).ok()
    }

    fn from_f32(f: f32) -> Option<Self> {
        Self::from_float(f).ok()
    }
}

macro_rules! impl_from_integer {
    ($($T:ty),*) => {$(
        impl From<$T> for ContinuedFraction {
            fn from(t: $T) -> Self {
                Self::from_integer(t)
            }
        }
    )*};
}

impl_from_integer!(i32, i64, u32, u64, BigInt);

impl From<BigRational> for ContinuedFraction {
    fn from(r: BigRational) -> Self {
        Self::from_ratio(r)
    }
}

impl From<Decimal> for ContinuedFraction {
    fn from(d: Decimal) -> Self {
        Self::from_decimal(d)
    }
}

impl Zero for ContinuedFraction {
    fn zero() -> Self {
        Self::from_integer(0)
    }

    fn is_zero(&self) -> bool {
        self.take(2) == [BigInt::zero()]
    }
}

impl One for ContinuedFraction {
    fn one() -> Self {
        Self::from_integer(1)
    }

    fn is_one(&self) -> bool {
        self.take(2) == [BigInt::one()]
    }
}

impl Neg for ContinuedFraction {
    type Output = ContinuedFraction;

    fn neg(self) -> ContinuedFraction {
        self.negate()
    }
}

impl<'a> Neg for &'a ContinuedFraction {
    type Output = ContinuedFraction;

    fn neg(self) -> ContinuedFraction {
        self.negate()
    }
}

macro_rules! impl_binop_for_cfrac {
    (impl $imp:ident, $method:ident, $named:ident) => {
        impl $imp<ContinuedFraction> for ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: ContinuedFraction) -> ContinuedFraction {
                self.$named(&rhs)
            }
        }

        impl<'a> $imp<&'a ContinuedFraction> for ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: &ContinuedFraction) -> ContinuedFraction {
                self.$named(rhs)
            }
        }

        impl<'a> $imp<ContinuedFraction> for &'a ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: ContinuedFraction) -> ContinuedFraction {
                self.$named(&rhs)
            }
        }

        impl<'a, 'b> $imp<&'b ContinuedFraction> for &'a ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: &ContinuedFraction) -> ContinuedFraction {
                self.$named(rhs)
            }
        }
    };
}

impl_binop_for_cfrac!(impl Add, add, sum);
impl_binop_for_cfrac!(impl Sub, sub, difference);
impl_binop_for_cfrac!(impl Mul, mul, product);
impl_binop_for_cfrac!(impl Div, div, quotient);

// operations with an integer only need a homographic transform
macro_rules! impl_binop_for_integer {
    (impl $imp:ident, $method:ident, $k:ident => $a:expr, $b:expr, $c:expr, $d:expr) => {
        impl $imp<BigInt> for ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, $k: BigInt) -> ContinuedFraction {
                self.homo($a, $b, $c, $d)
            }
        }

        impl<'a> $imp<BigInt> for &'a ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, $k: BigInt) -> ContinuedFraction {
                self.homo($a, $b, $c, $d)
            }
        }

        impl $imp<i64> for ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: i64) -> ContinuedFraction {
                $imp::$method(self, BigInt::from(rhs))
            }
        }

        impl<'a> $imp<i64> for &'a ContinuedFraction {
            type Output = ContinuedFraction;

            fn $method(self, rhs: i64) -> ContinuedFraction {
                $imp::$method(self, BigInt::from(rhs))
            }
        }
    };
}

impl_binop_for_integer!(impl Add, add, k => BigInt::one(), k, BigInt::zero(), BigInt::one());
impl_binop_for_integer!(impl Sub, sub, k => BigInt::one(), -k, BigInt::zero(), BigInt::one());
impl_binop_for_integer!(impl Mul, mul, k => k, BigInt::zero(), BigInt::zero(), BigInt::one());
impl_binop_for_integer!(impl Div, div, k => BigInt::one(), BigInt::zero(), BigInt::zero(), k);

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::{quickcheck, TestResult};
    use std::collections::hash_map::DefaultHasher;

    fn cf(coeffs: &[i64]) -> ContinuedFraction {
        ContinuedFraction::new(coeffs.iter().map(|&a| BigInt::from(a)).collect())
    }

    fn ratio(p: i64, q: i64) -> BigRational {
        BigRational::new(p.into(), q.into())
    }

    fn terms(v: &ContinuedFraction) -> Vec<i64> {
        v.take(64).iter().map(|a| a.to_i64().unwrap()).collect()
    }

    fn hash_of(v: &ContinuedFraction) -> u64 {
        let mut hasher = DefaultHasher::new();
        v.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn cont_frac_creation_test() {
        assert_eq!(terms(&cf(&[0, 1, 2])), vec![0, 1, 2]);
        assert_eq!(terms(&cf(&[0, 1, 2, 1])), vec![0, 1, 3]);
        assert_eq!(terms(&cf(&[2, 1, 0, 2, 4])), vec![2, 3, 4]);
        assert_eq!(terms(&cf(&[3, -1, -2, -4])), vec![2, 3, 4]);
        assert_eq!(terms(&cf(&[-2, -3, -4])), vec![-3, 1, 2, 4]);
        assert_eq!(terms(&cf(&[1, 0, 2])), vec![3]);
        assert!(cf(&[0, 0]).is_infinite());
        assert!(cf(&[]).is_infinite());

        assert_eq!(terms(&ContinuedFraction::one_half()), vec![0, 2]);
        assert_eq!(terms(&ContinuedFraction::minus_one()), vec![-1]);
        assert!(ContinuedFraction::zero().is_zero());
        assert!(ContinuedFraction::one().is_one());
        assert!(!ContinuedFraction::infinity().is_zero());
    }

    #[test]
    fn cont_frac_conversion_test() {
        assert_eq!(terms(&ContinuedFraction::from_ratio(ratio(1, 3))), vec![0, 3]);
        assert_eq!(terms(&ContinuedFraction::from_ratio(ratio(22, 7))), vec![3, 7]);
        assert_eq!(terms(&ContinuedFraction::from_ratio(ratio(-22, 7))), vec![-4, 1, 6]);
        assert_eq!(terms(&ContinuedFraction::from_ratio(ratio(7, 22))), vec![0, 3, 7]);
        assert_eq!(terms(&ContinuedFraction::from_ratio(ratio(355, 113))), vec![3, 7, 16]);
        assert_eq!(terms(&ContinuedFraction::from(3)), vec![3]);

        assert_eq!(ContinuedFraction::from_ratio(ratio(-7, 22)).to_ratio(), Ok(ratio(-7, 22)));
        assert_eq!(ContinuedFraction::infinity().to_ratio(), Err(CfError::Infinite));

        assert_eq!(terms(&ContinuedFraction::from_decimal(Decimal::new(314, 2))), vec![3, 7, 7]);
        assert_eq!(terms(&ContinuedFraction::from_decimal(Decimal::new(-25, 1))), vec![-3, 2]);

        assert_eq!(terms(&ContinuedFraction::from_float(0.375f64).unwrap()), vec![0, 2, 1, 2]);
        assert_eq!(terms(&ContinuedFraction::from_float(-1.5f32).unwrap()), vec![-2, 2]);
        assert_eq!(ContinuedFraction::from_float(f64::NAN), Err(CfError::NotANumber));
        assert!(ContinuedFraction::from_float(f64::INFINITY).unwrap().is_infinite());
        assert!(ContinuedFraction::from_float(f64::NEG_INFINITY).unwrap().is_infinite());

        assert_eq!(ContinuedFraction::from_float(0.1f64).unwrap().to_f64(), Some(0.1));
        assert_eq!(ContinuedFraction::from_float(0.1f32).unwrap().to_f32(), Some(0.1f32));
        assert_eq!(ContinuedFraction::sqrt(2, 40).unwrap().to_f64(), Some(std::f64::consts::SQRT_2));
        assert_eq!(ContinuedFraction::pi(30).to_f64(), Some(std::f64::consts::PI));
        assert_eq!(ContinuedFraction::e(30).to_f32(), Some(std::f32::consts::E));
        assert_eq!(ContinuedFraction::infinity().to_f64(), Some(f64::INFINITY));

        assert_eq!(ContinuedFraction::from_ratio(ratio(-22, 7)).to_i64(), Some(-3));
        assert_eq!(ContinuedFraction::from_ratio(ratio(-22, 7)).to_u64(), None);
        assert_eq!(ContinuedFraction::infinity().to_i64(), None);
    }

    #[test]
    fn cont_frac_iter_test() {
        let sq2 = ContinuedFraction::sqrt(2, 5).unwrap();
        assert_eq!(terms(&sq2), vec![1, 2, 2, 2, 2]);
        assert_eq!(
            sq2.convergents().collect::<Vec<_>>(),
            vec![ratio(1, 1), ratio(3, 2), ratio(7, 5), ratio(17, 12), ratio(41, 29)]
        );

        // zeros and negative terms are resolved before the convergents are built
        let resolved = cf(&[1, 0, 2, -3, 4]);
        assert_eq!(terms(&resolved), vec![2, 1, 1, 1, 3]);
        let convergents = resolved.convergents().collect::<Vec<_>>();
        assert!(convergents.iter().all(|r| r.denom().is_positive()));
        assert_eq!(convergents.last(), Some(&ratio(29, 11)));

        // every traversal restarts
        let e = ContinuedFraction::e(100);
        assert_eq!(e.take(4), e.take(4));
        assert_eq!(terms(&e.truncate(4)), vec![2, 1, 3]);
        assert_eq!(terms(&e)[..4], [2, 1, 2, 1]);

        assert_eq!(
            terms(&ContinuedFraction::pi(20)),
            vec![3, 7, 15, 1, 292, 1, 1, 1, 2, 1, 3, 1, 14, 2, 1, 1, 2, 2, 2, 2]
        );
        assert_eq!(terms(&ContinuedFraction::sqrt(16, 10).unwrap()), vec![4]);
        assert_eq!(terms(&ContinuedFraction::sqrt(3, 0).unwrap()), vec![1]);
        assert_eq!(ContinuedFraction::sqrt(-2, 10), Err(CfError::NegativeSqrt));
    }

    #[test]
    fn approximation_test() {
        let pi = ContinuedFraction::pi(20);
        assert_eq!(pi.approximated(&BigInt::from(10)), Ok(Approximation::Approximated(ratio(22, 7))));
        assert_eq!(pi.approximated(&BigInt::from(1000)), Ok(Approximation::Approximated(ratio(355, 113))));
        let r = ContinuedFraction::from_ratio(ratio(355, 113));
        assert_eq!(r.approximated(&BigInt::from(1000)), Ok(Approximation::Exact(ratio(355, 113))));
        assert_eq!(ContinuedFraction::infinity().approximated(&BigInt::from(10)), Err(CfError::Infinite));
    }

    #[test]
    fn fmt_test() {
        assert_eq!(format!("{}", cf(&[1])), "[1]");
        assert_eq!(format!("{}", cf(&[1, 2, 3])), "[1; 2, 3]");
        assert_eq!(format!("{}", cf(&[-4, 1, 6])), "[-4; 1, 6]");
        assert_eq!(format!("{}", ContinuedFraction::infinity()), "inf");
        assert_eq!(
            format!("{}", ContinuedFraction::e(100)),
            "[2; 1, 2, 1, 1, 4, 1, 1, 6, 1, 1, 8, 1, 1, 10, 1, 1, 12, 1, 1, ...]"
        );
        assert_eq!(format!("{:?}", cf(&[3, 7])), "ContinuedFraction([3; 7])");
    }

    #[test]
    fn cont_frac_arithmetic_test() {
        let third = ContinuedFraction::from_ratio(ratio(1, 3));
        let r = ContinuedFraction::from_ratio(ratio(22, 7));

        assert_eq!(terms(&(&third + &third)), vec![0, 1, 2]);
        assert_eq!((&third + &third).to_ratio(), Ok(ratio(2, 3)));
        assert_eq!((&r - &third).to_ratio(), Ok(ratio(59, 21)));
        assert_eq!((&r * &third).to_ratio(), Ok(ratio(22, 21)));
        assert_eq!((&r / &third).to_ratio(), Ok(ratio(66, 7)));
        assert_eq!((&third - &r).to_ratio(), Ok(ratio(-59, 21)));
        assert!((&r - &r).is_zero());
        assert!((&r / &r).is_one());

        assert_eq!(terms(&r.recip()), vec![0, 3, 7]);
        assert_eq!(terms(&-&r), vec![-4, 1, 6]);
        assert_eq!(terms(&r.abs()), vec![3, 7]);
        assert_eq!(terms(&(-&r).abs()), vec![3, 7]);

        // integer operands
        assert_eq!((&r + 1i64).to_ratio(), Ok(ratio(29, 7)));
        assert_eq!((&r - 4i64).to_ratio(), Ok(ratio(-6, 7)));
        assert_eq!((&r * -2i64).to_ratio(), Ok(ratio(-44, 7)));
        assert_eq!((&r / 2i64).to_ratio(), Ok(ratio(11, 7)));
        assert!((&r / 0i64).is_infinite());

        // infinite operands
        let e = ContinuedFraction::e(1000);
        assert_eq!(terms(&(&e + 1i64))[..5], [3, 1, 2, 1, 1]);
        assert_eq!(terms(&(&e - 2i64))[..4], [0, 1, 2, 1]);
        assert_eq!(terms(&(&e * 2i64))[..6], [5, 2, 3, 2, 3, 1]);
        assert_eq!(terms(&(&e + &third))[..8], [3, 19, 2, 1, 2, 18, 18, 4]);
        // the finite operand on the left runs out first
        assert_eq!(terms(&(&third + &e))[..8], [3, 19, 2, 1, 2, 18, 18, 4]);
        assert_eq!(terms(&(&e * &e))[..8], [7, 2, 1, 1, 3, 18, 5, 1]);
        assert_eq!(terms(&(-&e))[..4], [-3, 3, 1, 1]);

        // powers
        let two_thirds = ContinuedFraction::from_ratio(ratio(2, 3));
        assert_eq!(two_thirds.pow(3).to_ratio(), Ok(ratio(8, 27)));
        assert_eq!(two_thirds.pow(-2).to_ratio(), Ok(ratio(9, 4)));
        assert!(two_thirds.pow(0).is_one());

        // modulo
        assert_eq!(r.modulo(&ContinuedFraction::one()).map(|m| m.to_ratio()), Ok(Ok(ratio(1, 7))));
        assert_eq!(
            ContinuedFraction::from(7).modulo(&ContinuedFraction::from(2)).map(|m| m.to_ratio()),
            Ok(Ok(ratio(-1, 1)))
        );
        assert_eq!(r.modulo(&ContinuedFraction::zero()).err(), Some(CfError::Infinite));
        assert_eq!(r.modulo(&ContinuedFraction::infinity()).err(), Some(CfError::Infinite));
    }

    #[test]
    fn infinity_test() {
        let inf = ContinuedFraction::infinity();
        assert!(inf.negate().is_infinite());
        assert!(ContinuedFraction::zero().recip().is_infinite());
        assert!(inf.recip().is_zero());
        assert_eq!(inf.sign(), Err(CfError::Infinite));
        assert_eq!(inf.floor(), Err(CfError::Infinite));
        assert_eq!(inf.compare(&ContinuedFraction::one()), Err(CfError::Infinite));
        assert_eq!(inf, ContinuedFraction::infinity());
        assert_eq!(inf.partial_cmp(&ContinuedFraction::one()), None);
        assert!(inf.fract().is_err());
    }

    #[test]
    fn rounding_test() {
        let check = |p: i64, q: i64, floor: i64, ceil: i64, trunc: i64, round: i64| {
            let v = ContinuedFraction::from_ratio(ratio(p, q));
            assert_eq!(v.floor(), Ok(floor.into()), "floor {}/{}", p, q);
            assert_eq!(v.ceil(), Ok(ceil.into()), "ceil {}/{}", p, q);
            assert_eq!(v.trunc(), Ok(trunc.into()), "trunc {}/{}", p, q);
            assert_eq!(v.round(), Ok(round.into()), "round {}/{}", p, q);
        };
        check(5, 2, 2, 3, 2, 3);
        check(-5, 2, -3, -2, -2, -3);
        check(12, 5, 2, 3, 2, 2);
        check(13, 5, 2, 3, 2, 3);
        check(-12, 5, -3, -2, -2, -2);
        check(-13, 5, -3, -2, -2, -3);
        check(4, 1, 4, 4, 4, 4);
        check(1, 3, 0, 1, 0, 0);

        assert_eq!(ContinuedFraction::from_ratio(ratio(-22, 7)).fract().map(|f| f.to_ratio()), Ok(Ok(ratio(-1, 7))));
        assert_eq!(ContinuedFraction::from_ratio(ratio(22, 7)).fract().map(|f| f.to_ratio()), Ok(Ok(ratio(1, 7))));

        assert_eq!(ContinuedFraction::from(-3).sign(), Ok(Sign::Minus));
        assert_eq!(ContinuedFraction::zero().sign(), Ok(Sign::NoSign));
        assert_eq!(ContinuedFraction::one_half().sign(), Ok(Sign::Plus));
    }

    #[test]
    fn comparison_test() {
        let third = ContinuedFraction::from_ratio(ratio(1, 3));
        let half = ContinuedFraction::one_half();
        let r = ContinuedFraction::from_ratio(ratio(7, 22));

        assert_eq!(third.compare(&half), Ok(Ordering::Less));
        assert_eq!(half.compare(&third), Ok(Ordering::Greater));
        assert_eq!(third.compare(&r), Ok(Ordering::Greater));
        assert_eq!(r.compare(&third), Ok(Ordering::Less));
        assert!(third > r);
        assert!(-&third < -&r);
        assert_eq!(third.min(&r), Ok(r.clone()));
        assert_eq!(third.max(&half), Ok(half.clone()));

        // comparing against an infinite stream terminates when they differ
        let e = ContinuedFraction::e(1000);
        assert!(e > ContinuedFraction::from_ratio(ratio(27, 10)));
        assert!(e < ContinuedFraction::from_ratio(ratio(28, 10)));
        assert_eq!(e, e.clone());

        assert_eq!(hash_of(&(&third + &third)), hash_of(&ContinuedFraction::from_ratio(ratio(2, 3))));
    }

    quickcheck! {
        fn ratio_round_trip_prop(p: i64, q: i64) -> TestResult {
            if q == 0 {
                return TestResult::discard();
            }
            let r = ratio(p, q);
            let v = ContinuedFraction::from_ratio(r.clone());
            TestResult::from_bool(v.to_ratio() == Ok(r) && v.take(64) == v.truncate(64).take(64))
        }

        fn negation_prop(p: i64, q: i64) -> TestResult {
            if q == 0 {
                return TestResult::discard();
            }
            let v = ContinuedFraction::from_ratio(ratio(p, q));
            TestResult::from_bool(v.negate().negate().take(64) == v.take(64) && v.negate().to_ratio() == Ok(-ratio(p, q)))
        }

        fn comparison_prop(a: i64, b: i64, c: i64, d: i64) -> TestResult {
            if b == 0 || d == 0 {
                return TestResult::discard();
            }
            let (x, y) = (ratio(a, b), ratio(c, d));
            let cx = ContinuedFraction::from_ratio(x.clone());
            let cy = ContinuedFraction::from_ratio(y.clone());
            TestResult::from_bool(cx.compare(&cy) == Ok(x.cmp(&y)) && (cx == cy) == (x == y))
        }

        fn float_round_trip_prop(f: f64) -> TestResult {
            if !f.is_finite() {
                return TestResult::discard();
            }
            let v = ContinuedFraction::from_float(f).unwrap();
            TestResult::from_bool(v.to_f64() == Some(f))
        }

        fn f32_round_trip_prop(f: f32) -> TestResult {
            if !f.is_finite() {
                return TestResult::discard();
            }
            let v = ContinuedFraction::from_float(f).unwrap();
            TestResult::from_bool(v.to_f32() == Some(f))
        }

        fn identities_prop(p: i64, q: i64) -> TestResult {
            if q == 0 {
                return TestResult::discard();
            }
            let v = ContinuedFraction::from_ratio(ratio(p, q));
            let zero = ContinuedFraction::zero();
            let one = ContinuedFraction::one();
            let mut ok = &v + &zero == v && &v * &one == v && (&v - &v).is_zero();
            if p != 0 {
                ok = ok && (&v / &v).is_one();
            }
            TestResult::from_bool(ok)
        }

        fn arithmetic_prop(a: i64, b: i64, c: i64, d: i64) -> TestResult {
            if b == 0 || d == 0 {
                return TestResult::discard();
            }
            let (x, y) = (ratio(a, b), ratio(c, d));
            let cx = ContinuedFraction::from_ratio(x.clone());
            let cy = ContinuedFraction::from_ratio(y.clone());
            let mut ok = cx.sum(&cy).to_ratio() == Ok(&x + &y)
                && cx.difference(&cy).to_ratio() == Ok(&x - &y)
                && cx.product(&cy).to_ratio() == Ok(&x * &y);
            if c != 0 {
                ok = ok && cx.quotient(&cy).to_ratio() == Ok(&x / &y);
            }
            TestResult::from_bool(ok)
        }
    }
}
