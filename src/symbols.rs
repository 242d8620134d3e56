//! This module contains several predefined irrational math constants

use num_integer::{Integer, Roots};
use num_traits::{Num, NumRef, RefNum};
use crate::cont_frac::{GeneralContinuedFraction, Simplified};
use crate::error::CfError;

/// Euler's number
pub struct E { }

/// Archimedes' constant
pub struct Pi { }

impl E {
    /// Coefficients of the simple continued fraction `[2; 1, 2, 1, 1, 4, 1, 1, 6, ..]`
    pub fn cfrac<T: Num>(&self) -> ECoefficients<T> {
        ECoefficients { i: T::zero(), m: 0 }
    }
}

#[derive(Debug, Clone)]
pub struct ECoefficients<T> { i: T, m: u8 }

impl<T: Num + NumRef + Clone> Iterator for ECoefficients<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.i.is_zero() {
            self.i = T::one() + T::one();
            Some(T::one() + T::one()) // return 2
        } else {
            let result = match self.m {
                1 => Some(self.i.clone()),
                _ => Some(T::one())
            };

            if self.m == 2 {
                self.m = 0;
                self.i = T::one() + T::one() + &self.i;
            } else {
                self.m += 1;
            }

            result
        }
    }
}

impl Pi {
    /// Pairs of the generalized continued fraction `4/(1 + 1²/(3 + 2²/(5 + ..)))`,
    /// in the form consumed by [GeneralContinuedFraction]
    pub fn gcf<T: Num>(&self) -> PiCoefficients<T> {
        PiCoefficients { k: T::zero() }
    }

    /// Coefficients of the simple continued fraction `[3; 7, 15, 1, 292, ..]`
    pub fn cfrac<T: Integer + NumRef + Clone>(&self) -> Simplified<PiCoefficients<T>, T>
    where for<'r> &'r T: RefNum<T> {
        self.gcf().simplify()
    }
}

#[derive(Debug, Clone)]
pub struct PiCoefficients<T> { k: T }

impl<T: Num + NumRef + Clone> Iterator for PiCoefficients<T>
where for<'r> &'r T: RefNum<T> {
    type Item = (T, T);

    fn next(&mut self) -> Option<(T, T)> {
        let two = T::one() + T::one();
        let result = if self.k.is_zero() {
            (T::one(), T::zero()) // 0 + 4/(..)
        } else if self.k.is_one() {
            (two.clone() * &two, T::one())
        } else {
            let n = &self.k - T::one();
            (&n * &n, two * &self.k - T::one())
        };
        self.k = &self.k + T::one();
        Some(result)
    }
}

/// Coefficients of the simple continued fraction of `√s`, following the
/// recurrence `m <- d*a - m`, `d <- (s - m²)/d`, `a <- (a0 + m)/d`.
/// A perfect square yields a single coefficient.
#[derive(Debug, Clone)]
pub struct SqrtCoefficients<T> {
    s: T,
    a0: T,
    m: T,
    d: T,
    a: T,
    started: bool,
}

impl<T: Integer + Roots + Clone> SqrtCoefficients<T> {
    pub fn new(s: T) -> Result<Self, CfError> {
        if s < T::zero() {
            return Err(CfError::NegativeSqrt);
        }
        let a0 = s.sqrt();
        Ok(SqrtCoefficients {
            a: a0.clone(),
            m: T::zero(),
            d: T::one(),
            a0,
            s,
            started: false,
        })
    }
}

impl<T: Integer + NumRef + Clone> Iterator for SqrtCoefficients<T>
where for<'r> &'r T: RefNum<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if !self.started {
            self.started = true;
            return Some(self.a0.clone());
        }
        if &self.a0 * &self.a0 == self.s {
            return None;
        }

        self.m = &self.d * &self.a - &self.m;
        self.d = (&self.s - &self.m * &self.m) / &self.d;
        self.a = (&self.a0 + &self.m) / &self.d;
        Some(self.a.clone())
    }
}
