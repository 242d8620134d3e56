//! Repair of coefficient streams into canonical form
//!
//! A canonical continued fraction has every coefficient after the first one
//! positive, and does not end with a coefficient of one (unless it is the only one).

use std::collections::VecDeque;
use std::iter::Chain;
use std::vec;
use num_integer::Integer;
use tracing::trace;

/// Iterator of the coefficients of `-x`, given the canonical coefficients of `x`
///
/// The rewrite only touches the first three coefficients:
/// - `[a0] => [-a0]`
/// - `[a0; 2] => [-a0-1; 2]`
/// - `[a0; 1, a2, ..] => [-a0-1; a2+1, ..]`
/// - `[a0; a1, ..] => [-a0-1; 1, a1-1, ..]`
#[derive(Debug, Clone)]
pub struct Negated<I, T> {
    head: Option<vec::IntoIter<T>>, // None before the rewrite is decided
    coeffs: I,
}

impl<I, T> Negated<I, T> {
    pub fn new(coeffs: I) -> Self {
        Negated { head: None, coeffs }
    }
}

impl<I: Iterator<Item = T>, T: Integer + Clone> Negated<I, T> {
    fn rewrite(&mut self) -> Vec<T> {
        let a0 = match self.coeffs.next() {
            Some(v) => v,
            None => return Vec::new(), // -inf = inf
        };
        let a1 = match self.coeffs.next() {
            Some(v) => v,
            None => return vec![T::zero() - a0],
        };
        let head = T::zero() - a0 - T::one();
        let two = T::one() + T::one();

        match self.coeffs.next() {
            None if a1 == two => vec![head, two],
            None if a1.is_one() => vec![head],
            None => vec![head, T::one(), a1 - T::one()],
            Some(a2) if a1.is_one() => vec![head, a2 + T::one()],
            Some(a2) => vec![head, T::one(), a1 - T::one(), a2],
        }
    }
}

impl<I: Iterator<Item = T>, T: Integer + Clone> Iterator for Negated<I, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.head.is_none() {
            let head = self.rewrite();
            self.head = Some(head.into_iter());
        }
        match self.head.as_mut().and_then(|h| h.next()) {
            Some(v) => Some(v),
            None => self.coeffs.next(),
        }
    }
}

/// Iterator that negates every coefficient
#[derive(Debug, Clone)]
struct Flipped<I>(I);

impl<I: Iterator<Item = T>, T: Integer> Iterator for Flipped<I> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.0.next().map(|v| T::zero() - v)
    }
}

type Peeked<I, T> = Chain<vec::IntoIter<T>, I>;

#[derive(Debug, Clone)]
enum Repair<I: Iterator<Item = T>, T> {
    Start(I),
    Straight(Peeked<I, T>),
    Flipped(Negated<Flipped<Peeked<I, T>>, T>),
}

/// Iterator that repairs a coefficient stream into canonical form.
///
/// If the coefficient after the first one is negative, the stream is taken as the
/// termwise negation of a canonical stream and is rewritten through [Negated].
/// A trailing coefficient of one is folded into its predecessor.
#[derive(Debug, Clone)]
pub struct Canonical<I: Iterator<Item = T>, T> {
    repair: Option<Repair<I, T>>,
    ahead: VecDeque<T>,
    exhausted: bool,
}

impl<I: Iterator<Item = T>, T: Integer + Clone> Canonical<I, T> {
    pub fn new(coeffs: I) -> Self {
        Canonical { repair: Some(Repair::Start(coeffs)), ahead: VecDeque::new(), exhausted: false }
    }

    fn pull(&mut self) -> Option<T> {
        let repair = match self.repair.take()? {
            Repair::Start(mut coeffs) => {
                let peeked: Vec<T> = coeffs.by_ref().take(2).collect();
                let flip = peeked.get(1).map_or(false, |v| v < &T::zero());
                let chained = peeked.into_iter().chain(coeffs);
                if flip {
                    trace!("sign repair on a negated coefficient stream");
                    Repair::Flipped(Negated::new(Flipped(chained)))
                } else {
                    Repair::Straight(chained)
                }
            }
            other => other,
        };
        let repair = self.repair.insert(repair);
        match repair {
            Repair::Straight(coeffs) => coeffs.next(),
            Repair::Flipped(coeffs) => coeffs.next(),
            Repair::Start(_) => None,
        }
    }

    fn fill(&mut self, count: usize) {
        while !self.exhausted && self.ahead.len() < count {
            match self.pull() {
                Some(v) => self.ahead.push_back(v),
                None => self.exhausted = true,
            }
        }
    }
}

impl<I: Iterator<Item = T>, T: Integer + Clone> Iterator for Canonical<I, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        self.fill(2);
        if self.ahead.len() == 2 && self.ahead[1].is_one() {
            self.fill(3);
            if self.ahead.len() == 2 {
                // [.., p, 1] = [.., p + 1]
                self.ahead.pop_back();
                if let Some(p) = self.ahead.front_mut() {
                    *p = p.clone() + T::one();
                }
            }
        }
        self.ahead.pop_front()
    }
}
