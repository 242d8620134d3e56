use super::block::Block;
use num_integer::Integer;
use num_rational::Ratio;
use num_traits::{NumRef, RefNum};

/// Iterator of the convergents of a continued fraction
///
/// The convergents of a canonical continued fraction are already in lowest terms
/// with positive denominators, so they are built without normalization. The input
/// must be canonical: a zero coefficient such as in `[1, 0]` yields a zero denominator.
#[derive(Debug, Clone)]
pub struct Convergents<I: Iterator<Item = T>, T> {
    coeffs: I,
    block: Block<T>,
}

impl<I: Iterator<Item = T>, T: Integer + Clone> Convergents<I, T> {
    pub fn new(coeffs: I) -> Self {
        Convergents { coeffs, block: Block::identity() }
    }
}

impl<I: Iterator<Item = T>, T: Integer + NumRef + Clone> Iterator for Convergents<I, T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = Ratio<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let a = self.coeffs.next()?;
        let (p, q) = self.block.rmove(a);
        self.block.update(p.clone(), q.clone());
        Some(Ratio::new_raw(p, q))
    }
}

/// Iterator of the positional digits of a nonnegative continued fraction.
///
/// The first item is the integer part, every following item is one digit after
/// the radix point. The iterator ends when the expansion terminates.
#[derive(Debug, Clone)]
pub struct Digits<I: Iterator<Item = T>, T> {
    coeffs: I,
    block: Block<T>,
    radix: T,
    primed: bool, // at least one coefficient has been absorbed
    exhausted: bool,
    started: bool, // the integer part has been emitted
}

impl<I: Iterator<Item = T>, T: Integer + Clone> Digits<I, T> {
    pub fn new(coeffs: I, radix: T) -> Self {
        Digits {
            coeffs,
            block: Block::identity(),
            radix,
            primed: false,
            exhausted: false,
            started: false,
        }
    }
}

impl<I: Iterator<Item = T>, T: Integer + NumRef + Clone> Iterator for Digits<I, T>
where
    for<'r> &'r T: RefNum<T>,
{
    type Item = T;

    fn next(&mut self) -> Option<T> {
        loop {
            if self.exhausted {
                if self.started && self.block.latest().0.is_zero() {
                    return None;
                }
                let digit = self.block.reduce_scaled(&self.radix);
                self.started = true;
                return digit;
            }
            if self.primed {
                if let Some(d) = self.block.reduce_scaled(&self.radix) {
                    self.started = true;
                    return Some(d);
                }
            }
            match self.coeffs.next() {
                Some(v) => {
                    let (p, q) = self.block.rmove(v);
                    self.block.update(p, q);
                    self.primed = true;
                }
                None => {
                    self.block.collapse();
                    self.exhausted = true;
                }
            }
        }
    }
}
