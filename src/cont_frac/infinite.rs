//! Implementation of infinite continued fractions
//!
//! Every operation here is lazy: it wraps the coefficient iterator of the
//! operands and only pulls as many input coefficients as needed to decide
//! the next output coefficient.

use super::block::{Block, DualBlock};
use super::canonical::{Canonical, Negated};
use super::convergents::{Convergents, Digits};
use super::euclid::Euclid;
use num_integer::Integer;
use num_traits::{NumRef, One, RefNum, Signed};
use core::iter as iter;
use std::mem::replace;
use tracing::{debug, trace};

/// Represents a simple continued fraction with infinite
/// coefficients. It's a wrapper of an iterator that returns the continued fraction coefficients.
/// Most operations of this struct will also return an iterator wrapped by this struct.
pub trait InfiniteContinuedFraction: Iterator {
    /// Convert the coefficients to the `(a_k, b_k)` pairs consumed by
    /// [GeneralContinuedFraction][crate::GeneralContinuedFraction]
    fn generalize(self) -> iter::Zip<iter::Repeat<Self::Item>, Self> where Self: Sized, Self::Item: One + Clone {
        iter::repeat(Self::Item::one()).zip(self)
    }

    /// This method returns a homographic function result on the fraction
    /// A homographic function is `(ax + b)/(cx + d)`
    fn homo(
        self,
        a: Self::Item,
        b: Self::Item,
        c: Self::Item,
        d: Self::Item,
    ) -> HomographicResult<Self, Self::Item>
    where Self: Sized, Self::Item: Integer + NumRef + Clone,
    for<'r> &'r Self::Item: RefNum<Self::Item>{
        HomographicResult::new(Block::new(a, b, c, d), self, false)
    }

    /// This method returns a bihomographic function result on the fraction
    /// A bihomographic function is `(axy + bx + cy + d)/(exy + fx + gy + h)`
    #[allow(clippy::too_many_arguments)]
    fn bihomo<U: IntoIterator<Item = Self::Item>>(
        self,
        rhs: U,
        a: Self::Item,
        b: Self::Item,
        c: Self::Item,
        d: Self::Item,
        e: Self::Item,
        f: Self::Item,
        g: Self::Item,
        h: Self::Item,
    ) -> BihomographicResult<Self, U::IntoIter, Self::Item>
    where Self: Sized, Self::Item: Integer + NumRef + Signed + Clone,
    for<'r> &'r Self::Item: RefNum<Self::Item> {
        BihomographicResult {
            state: BihomoState::Dual {
                block: DualBlock::new(a, b, c, d, e, f, g, h),
                x_coeffs: self,
                y_coeffs: rhs.into_iter(),
                primed: false,
            },
        }
    }

    /// Repair the coefficients into canonical form, see [Canonical]
    fn canonical(self) -> Canonical<Self, Self::Item>
    where Self: Sized, Self::Item: Integer + Clone {
        Canonical::new(self)
    }

    /// Coefficients of the negated value, the input has to be canonical
    fn negated(self) -> Negated<Self, Self::Item>
    where Self: Sized, Self::Item: Integer + Clone {
        Negated::new(self)
    }

    /// Iterator of the convergents `p_k / q_k`
    ///
    /// Every coefficient after the first one must be positive, otherwise a convergent
    /// can have a zero or negative denominator. Finite lists with zeros are resolved
    /// by [ContinuedFraction::new()][crate::ContinuedFraction::new] first.
    fn convergents(self) -> Convergents<Self, Self::Item>
    where Self: Sized, Self::Item: Integer + NumRef + Clone,
    for<'r> &'r Self::Item: RefNum<Self::Item> {
        Convergents::new(self)
    }

    /// Positional expansion of a nonnegative fraction: the integer part
    /// followed by the digits after the radix point.
    fn digits(self, radix: Self::Item) -> Digits<Self, Self::Item>
    where Self: Sized, Self::Item: Integer + NumRef + Clone,
    for<'r> &'r Self::Item: RefNum<Self::Item> {
        Digits::new(self, radix)
    }
}

impl<T: ?Sized> InfiniteContinuedFraction for T where T: Iterator { }

/// Iterator of [InfiniteContinuedFraction::homo()] result
#[derive(Debug, Clone)]
pub struct HomographicResult<I: Iterator<Item = T>, T> {
    block: Block<T>,
    coeffs: I,
    primed: bool, // at least one coefficient has been absorbed
    tail: Option<Euclid<T>>, // exact remainder once the input is exhausted
}

impl<I: Iterator<Item = T>, T> HomographicResult<I, T> {
    pub(crate) fn new(block: Block<T>, coeffs: I, primed: bool) -> Self {
        HomographicResult { block, coeffs, primed, tail: None }
    }
}

impl<I: Iterator<Item = T>, T: Integer + NumRef + Clone> Iterator for HomographicResult<I, T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if let Some(tail) = self.tail.as_mut() {
                break tail.next();
            }
            if self.block.is_degenerate() {
                debug!("homographic transform degenerated, result is infinite");
                self.tail = Some(Euclid::empty());
                continue;
            }
            if self.primed {
                if let Some(i) = self.block.reduce_recip() {
                    break Some(i);
                }
            }
            match self.coeffs.next() {
                Some(v) => {
                    let (p, q) = self.block.rmove(v);
                    self.block.update(p, q);
                    self.primed = true;
                }
                None => {
                    trace!("homographic input exhausted, flushing the exact remainder");
                    self.tail = Some(self.block.finalize());
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
enum BihomoState<X: Iterator<Item = T>, Y: Iterator<Item = T>, T> {
    Dual {
        block: DualBlock<T>,
        x_coeffs: X,
        y_coeffs: Y,
        primed: bool, // at least one coefficient of both inputs has been absorbed
    },
    OnlyX(HomographicResult<X, T>),
    OnlyY(HomographicResult<Y, T>),
    Done,
}

/// Iterator of [InfiniteContinuedFraction::bihomo()] result
///
/// Inputs are absorbed in pairs, one coefficient of x followed by one of y.
/// Once either input is exhausted the computation degenerates to a homographic
/// transform on the surviving input.
#[derive(Debug, Clone)]
pub struct BihomographicResult<X: Iterator<Item = T>, Y: Iterator<Item = T>, T> {
    state: BihomoState<X, Y, T>,
}

enum Step {
    Emit,
    Absorbed,
    ExhaustedX,
    ExhaustedY,
    Degenerated,
}

impl<X: Iterator<Item = T>, Y: Iterator<Item = T>, T: Integer + NumRef + Signed + Clone>
    BihomographicResult<X, Y, T>
where
    for<'r> &'r T: RefNum<T>,
{
    fn step(&mut self) -> (Step, Option<T>) {
        match &mut self.state {
            BihomoState::Dual { block, x_coeffs, y_coeffs, primed } => {
                if block.is_degenerate() {
                    return (Step::Degenerated, None);
                }
                if *primed {
                    if let Some(i) = block.reduce_recip() {
                        return (Step::Emit, Some(i));
                    }
                }
                match x_coeffs.next() {
                    Some(v) => {
                        let (p1, q1, p2, q2) = block.rmove_right(v);
                        block.update_right(p1, q1, p2, q2);
                    }
                    None => return (Step::ExhaustedX, None),
                }
                match y_coeffs.next() {
                    Some(v) => {
                        let (p1, q1, p2, q2) = block.rmove_down(v);
                        block.update_down(p1, q1, p2, q2);
                    }
                    None => return (Step::ExhaustedY, None),
                }
                *primed = true;
                (Step::Absorbed, None)
            }
            BihomoState::OnlyX(h) => (Step::Emit, h.next()),
            BihomoState::OnlyY(h) => (Step::Emit, h.next()),
            BihomoState::Done => (Step::Emit, None),
        }
    }
}

impl<X: Iterator<Item = T>, Y: Iterator<Item = T>, T: Integer + NumRef + Signed + Clone> Iterator
    for BihomographicResult<X, Y, T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            let (step, value) = self.step();
            match step {
                Step::Emit => break value,
                Step::Absorbed => continue,
                Step::Degenerated => {
                    debug!("bihomographic transform degenerated, result is infinite");
                    self.state = BihomoState::Done;
                }
                Step::ExhaustedX | Step::ExhaustedY => {
                    if let BihomoState::Dual { block, x_coeffs, y_coeffs, primed } =
                        replace(&mut self.state, BihomoState::Done)
                    {
                        self.state = if let Step::ExhaustedX = step {
                            trace!("x exhausted, continuing on y alone");
                            BihomoState::OnlyY(HomographicResult::new(block.exhaust_x(), y_coeffs, primed))
                        } else {
                            trace!("y exhausted, continuing on x alone");
                            BihomoState::OnlyX(HomographicResult::new(block.exhaust_y(), x_coeffs, true))
                        };
                    }
                }
            }
        }
    }
}
