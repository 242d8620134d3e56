//! Data structures and algorithms implementations related to
//! regular and generalized continued fraction
//!
//! There are three abstractions of the continued fraction
//! 1. [ContinuedFraction][ContinuedFraction] is a number value backed by a restartable, possibly infinite coefficient source
//! 2. [InfiniteContinuedFraction][InfiniteContinuedFraction] provides the lazy transforms on any iterator of coefficients
//! 3. [GeneralContinuedFraction][GeneralContinuedFraction] is a trait that provides method to operate on a general continued fraction.
//!
//! # References:
//! - <https://pi.math.cornell.edu/~gautam/ContinuedFractions.pdf>
//! - <https://crypto.stanford.edu/pbc/notes/contfrac/>
//! - <https://perl.plover.com/classes/cftalk/INFO/gosper.html>
//! - <http://www.numbertheory.org/continued_fractions.html>
//! - <https://github.com/blynn/frac>
//!

mod block;
mod canonical;
mod convergents;
mod euclid;
mod float;
mod general;
mod infinite;
mod simple;

pub use canonical::{Canonical, Negated};
pub use convergents::{Convergents, Digits};
pub use euclid::Euclid;
pub use general::*;
pub use infinite::*;
pub use simple::*;
