//! Euclidean expansion of an exact ratio into continued fraction coefficients

use std::mem::replace;
use num_integer::Integer;
use num_rational::Ratio;

/// Iterator of the coefficients of `p / q`, produced by repeated floor division.
///
/// The denominator is normalized to be nonnegative first so that every
/// coefficient after the first one is positive. A zero denominator yields
/// an empty expansion, which denotes infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct Euclid<T> {
    p: T,
    q: T,
}

impl<T: Integer> Euclid<T> {
    pub fn new(p: T, q: T) -> Self {
        if q < T::zero() {
            Euclid { p: T::zero() - p, q: T::zero() - q }
        } else {
            Euclid { p, q }
        }
    }

    /// An expansion that is already exhausted
    pub fn empty() -> Self {
        Euclid { p: T::one(), q: T::zero() }
    }
}

impl<T: Integer + Clone> From<Ratio<T>> for Euclid<T> {
    fn from(r: Ratio<T>) -> Self {
        let (p, q) = r.into();
        Euclid::new(p, q)
    }
}

impl<T: Integer> Iterator for Euclid<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.q.is_zero() {
            return None;
        }
        let (i, r) = self.p.div_mod_floor(&self.q);
        self.p = replace(&mut self.q, r);
        Some(i)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclid_test() {
        assert_eq!(Euclid::new(1, 3).collect::<Vec<i32>>(), vec![0, 3]);
        assert_eq!(Euclid::new(22, 7).collect::<Vec<i32>>(), vec![3, 7]);
        assert_eq!(Euclid::new(355, 113).collect::<Vec<i32>>(), vec![3, 7, 16]);
        assert_eq!(Euclid::new(-22, 7).collect::<Vec<i32>>(), vec![-4, 1, 6]);
        assert_eq!(Euclid::new(22, -7).collect::<Vec<i32>>(), vec![-4, 1, 6]);
        assert_eq!(Euclid::new(0, 5).collect::<Vec<i32>>(), vec![0]);
        assert_eq!(Euclid::new(5, 0).collect::<Vec<i32>>(), Vec::<i32>::new());
        assert_eq!(Euclid::<i32>::empty().next(), None);
        assert_eq!(Euclid::from(Ratio::new(7, 22)).collect::<Vec<i32>>(), vec![0, 3, 7]);
    }
}
