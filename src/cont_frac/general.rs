use num_traits::{NumRef, RefNum};
use num_integer::Integer;
use super::block::Block;
use super::euclid::Euclid;

/// This trait defines utility functions for generalized continued fraction number
/// `b_1 + a_2 / (b_2 + a_3 / (b_3 + a_4 / .. ))`. They are available for any
/// iterator that returns a pair of number. The first value will be regarded
/// as a_k while the second value as b_k. You need to make sure that a_1 = 1.
///
/// The numerators are expected to be positive, so that consecutive convergents
/// bracket the value.
pub trait GeneralContinuedFraction<T: Integer + NumRef> : Iterator<Item = (T, T)>
where for<'r> &'r T: RefNum<T> {
    /// Simplify the generalized continued fraction to the coefficients of a simple continued fraction
    fn simplify(self) -> Simplified<Self, T> where Self: Sized;
}

/// Iterator of [GeneralContinuedFraction::simplify()] result
#[derive(Debug, Clone)]
pub struct Simplified<I: Iterator<Item = (T, T)>, T> {
    block: Block<T>,
    g_coeffs: I,
    tail: Option<Euclid<T>>,
}

impl<I: Iterator<Item = (T, T)>, T: Integer + NumRef + Clone> Iterator for Simplified<I, T>
where for<'r> &'r T: RefNum<T> {
    type Item = T;

    // use the magic table method described in https://crypto.stanford.edu/pbc/notes/contfrac/nonsimple.html
    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(tail) = self.tail.as_mut() {
                break tail.next();
            }
            if let Some(i) = self.block.reduce_recip() {
                break Some(i);
            }
            match self.g_coeffs.next() {
                Some((a, b)) => {
                    let (p, q) = self.block.gmove(a, b);
                    self.block.update(p, q);
                },
                None => self.tail = Some(self.block.finalize()),
            }
        }
    }
}

impl<I: Iterator<Item = (T, T)>, T: Integer + NumRef> GeneralContinuedFraction<T> for I
where for<'r> &'r T: RefNum<T>{
    fn simplify(self) -> Simplified<Self, T> {
        Simplified {
            block: Block::identity(), g_coeffs: self, tail: None
        }
    }
}

/// Merge separate numerator and denominator sequences `(a_k)`, `(b_k)` into a
/// simple continued fraction. The sequence stops with the shorter of the two.
pub fn regularize<A, B, T>(numerators: A, denominators: B) -> Simplified<std::iter::Zip<A::IntoIter, B::IntoIter>, T>
where
    A: IntoIterator<Item = T>,
    B: IntoIterator<Item = T>,
    T: Integer + NumRef,
    for<'r> &'r T: RefNum<T>,
{
    numerators.into_iter().zip(denominators).simplify()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cont_frac::InfiniteContinuedFraction;
    use crate::symbols::{Pi, E};

    #[test]
    fn simplify_test() {
        let e = E {};
        assert_eq!(
            e.cfrac::<i64>().generalize().simplify().take(10).collect::<Vec<_>>(),
            e.cfrac::<i64>().take(10).collect::<Vec<_>>()
        );

        // finite sequences flush the exact remainder
        assert_eq!(vec![(1, 3), (1, 7), (1, 16)].into_iter().simplify().collect::<Vec<i64>>(), vec![3, 7, 16]);
        // 1 + 2/(3 + 4/5) = 29/19
        assert_eq!(vec![(1, 1), (2, 3), (4, 5)].into_iter().simplify().collect::<Vec<i64>>(), vec![1, 1, 1, 9]);
    }

    #[test]
    fn regularize_test() {
        assert_eq!(
            regularize(vec![1i64, 2, 4], vec![1, 3, 5]).collect::<Vec<_>>(),
            vec![1, 1, 1, 9]
        );

        let pi = Pi {};
        assert_eq!(
            pi.cfrac::<i64>().take(10).collect::<Vec<_>>(),
            vec![3, 7, 15, 1, 292, 1, 1, 1, 2, 1]
        );
    }
}
