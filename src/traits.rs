use num_rational::Ratio;
use crate::error::CfError;

#[derive(PartialEq, Debug, Clone)]
pub enum Approximation<T> {
    Approximated(T),
    Exact(T)
}

impl<T> Approximation<T> {
    /// Get the value regardless of whether it's exact
    pub fn value(self) -> T {
        match self {
            Approximation::Approximated(v) => v,
            Approximation::Exact(v) => v,
        }
    }

    #[inline]
    pub fn is_exact(&self) -> bool {
        matches!(self, Approximation::Exact(_))
    }
}

/// Numbers that can be approximated by rationals to arbitrary precision
pub trait Computable<T> {
    /// Return the best rational approximation whose denominator stays below `limit`.
    /// The result is [Approximation::Exact] if the number equals the approximation.
    fn approximated(&self, limit: &T) -> Result<Approximation<Ratio<T>>, CfError>;
}
