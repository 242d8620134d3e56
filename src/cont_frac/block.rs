use std::mem::{replace, swap};
use num_traits::{One, Zero, NumRef, RefNum, Signed};
use num_integer::Integer;
use super::euclid::Euclid;

/// A block on the magic table for homographic operation computation of continued fractions
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/compute.html>
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block<T> {
    pm1: T, // p_(k-1)
    pm2: T, // p_(k-2)
    qm1: T, // q_(k-1)
    qm2: T, // q_(k-2)
}

impl<T> Block<T> {
    /// create a block that represents (ax + b) / (cx + d)
    pub fn new(a: T, b: T, c: T, d: T) -> Self {
        Block { pm1: a, pm2: b, qm1: c, qm2: d }
    }

    /// push the latest convergent to the block
    pub fn update(&mut self, p: T, q: T) {
        swap(&mut self.pm2, &mut self.pm1); // self.pm2 = self.pm1
        swap(&mut self.qm2, &mut self.qm1); // self.qm2 = self.qm1
        self.pm1 = p; self.qm1 = q;
    }

    /// the latest convergent `p_(k-1) / q_(k-1)` as a raw pair
    #[inline]
    pub fn latest(&self) -> (&T, &T) {
        (&self.pm1, &self.qm1)
    }
}

impl<T: Zero + One> Block<T> {
    /// create a block that represents a identity operation
    pub fn identity() -> Self {
        Block { pm1: T::one(), pm2: T::zero(), qm1: T::zero(), qm2: T::one() }
    }
}

impl<T: Zero> Block<T> {
    /// both denominators vanished, the transform has no finite value left
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.qm1.is_zero() && self.qm2.is_zero()
    }
}

impl<T: Integer + Clone> Block<T> {
    /// The exact value of the block when the input is exhausted (x = ∞)
    pub fn finalize(&self) -> Euclid<T> {
        Euclid::new(self.pm1.clone(), self.qm1.clone())
    }

    /// Pin both columns to the latest convergent, used once the input is known to be exhausted
    pub fn collapse(&mut self) {
        self.pm2 = self.pm1.clone();
        self.qm2 = self.qm1.clone();
    }
}

impl<T: Integer + NumRef> Block<T> where for <'r> &'r T: RefNum<T> {
    /// move with an coefficient from regular continued fraction
    pub fn rmove(&mut self, a: T) -> (T, T) {
        let p = &a * &self.pm1 + &self.pm2;
        let q = a * &self.qm1 + &self.qm2;
        (p, q)
    }

    /// move with two coefficients from generalized continued fraction
    pub fn gmove(&mut self, a: T, b: T) -> (T, T) {
        let p = &self.pm1 * &b + &self.pm2 * &a;
        let q = &self.qm1 * b + &self.qm2 * a;
        let g = p.gcd(&q).gcd(&self.pm1).gcd(&self.qm1);

        if g > T::one() {
            self.pm1 = &self.pm1 / &g;
            self.qm1 = &self.qm1 / &g;
            (p / &g, q / g)
        } else {
            (p, q)
        }
    }

    /// Check whether the output coefficient is forced by the current block.
    /// Both denominators have to be nonzero with the same sign (no pole between the
    /// two bounds), and both bounds have to share the same floor.
    /// If so, return Ok with the integer and remainders
    #[inline]
    pub fn check_integer(&self) -> Result<(T, T, T), ()> {
        if self.qm1.is_zero() || self.qm2.is_zero() {
            return Err(());
        }
        if (self.qm1 < T::zero()) != (self.qm2 < T::zero()) {
            return Err(());
        }

        let (i1, r1) = self.pm1.div_mod_floor(&self.qm1);
        let (i2, r2) = self.pm2.div_mod_floor(&self.qm2);

        if i1 == i2 { Ok((i1, r1, r2)) } else { Err(()) }
    }

    /// extract the integer part if the two bounds agrees, and take the reciprocal of the remainder
    pub fn reduce_recip(&mut self) -> Option<T> {
        let (i, r1, r2) = self.check_integer().ok()?;
        self.pm1 = replace(&mut self.qm1, r1);
        self.pm2 = replace(&mut self.qm2, r2);
        Some(i)
    }

    /// extract the integer part if the two bounds agrees, and scale the remainder by `radix`.
    /// This shifts the next positional digit into the integer part.
    pub fn reduce_scaled(&mut self, radix: &T) -> Option<T> {
        let (i, r1, r2) = self.check_integer().ok()?;
        self.pm1 = r1 * radix;
        self.pm2 = r2 * radix;
        Some(i)
    }
}

/// A block on the magic table for bihomographic operation computation of continued fractions
/// The method is described in <https://crypto.stanford.edu/pbc/notes/contfrac/bihom.html>
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DualBlock<T> {
    pm11: T, // p with a_(i-1), b_(j-1)
    pm12: T, // p with a_(i-1), b_(j-2)
    pm21: T, // ..
    pm22: T, // ..
    qm11: T, // q with a_(i-1), b_(j-1)
    qm12: T, // q with a_(i-1), b_(j-2)
    qm21: T, // ..
    qm22: T, // ..
}

impl<T> DualBlock<T> {
    /// create a block that represents (axy + bx + cy + d)/(exy + fx + gy + h)
    #[allow(clippy::too_many_arguments)]
    pub fn new(a: T, b: T, c: T, d: T, e: T, f: T, g: T, h: T) -> Self {
        DualBlock {
            pm11: a, pm12: b, pm21: c, pm22: d,
            qm11: e, qm12: f, qm21: g, qm22: h
        }
    }

    /// push the latest convergent using x from right to the block
    pub fn update_right(&mut self, p1: T, q1: T, p2: T, q2: T) {
        swap(&mut self.pm21, &mut self.pm11); // self.pm21 = self.pm11
        swap(&mut self.qm21, &mut self.qm11); // self.qm21 = self.qm11
        self.pm11 = p1; self.qm11 = q1;

        swap(&mut self.pm22, &mut self.pm12); // self.pm22 = self.pm12
        swap(&mut self.qm22, &mut self.qm12); // self.qm22 = self.qm12
        self.pm12 = p2; self.qm12 = q2;
    }

    /// push the latest convergent using y from bottom to the block
    pub fn update_down(&mut self, p1: T, q1: T, p2: T, q2: T) {
        swap(&mut self.pm12, &mut self.pm11); // self.pm12 = self.pm11
        swap(&mut self.qm12, &mut self.qm11); // self.qm12 = self.qm11
        self.pm11 = p1; self.qm11 = q1;

        swap(&mut self.pm22, &mut self.pm21); // self.pm22 = self.pm21
        swap(&mut self.qm22, &mut self.qm21); // self.qm22 = self.qm21
        self.pm21 = p2; self.qm21 = q2;
    }

    /// Substitute x = ∞, leaving `(ay + b) / (ey + f)` on the y input
    pub fn exhaust_x(self) -> Block<T> {
        Block::new(self.pm11, self.pm12, self.qm11, self.qm12)
    }

    /// Substitute y = ∞, leaving `(ax + c) / (ex + g)` on the x input
    pub fn exhaust_y(self) -> Block<T> {
        Block::new(self.pm11, self.pm21, self.qm11, self.qm21)
    }
}

impl<T: Zero> DualBlock<T> {
    /// all four denominators vanished
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.qm11.is_zero() && self.qm12.is_zero() && self.qm21.is_zero() && self.qm22.is_zero()
    }
}

impl<T: Integer + NumRef + Signed> DualBlock<T> where for <'r> &'r T: RefNum<T> {
    /// move with an coefficient from the first regular continued fraction (x)
    pub fn rmove_right(&mut self, a: T) -> (T, T, T, T) {
        let p1 = &a * &self.pm11 + &self.pm21;
        let q1 = &a * &self.qm11 + &self.qm21;
        let p2 = &a * &self.pm12 + &self.pm22;
        let q2 = a * &self.qm12 + &self.qm22;
        (p1, q1, p2, q2)
    }

    /// move with an coefficient from the second regular continued fraction (y)
    pub fn rmove_down(&mut self, a: T) -> (T, T, T, T) {
        let p1 = &a * &self.pm11 + &self.pm12;
        let q1 = &a * &self.qm11 + &self.qm12;
        let p2 = &a * &self.pm21 + &self.pm22;
        let q2 = a * &self.qm21 + &self.qm22;
        (p1, q1, p2, q2)
    }

    /// Check whether we should reduce integer from the convergents
    /// Unlike the checking for single block, all four corners must agree
    /// and all four denominators must be nonzero with the same sign.
    /// If so, return Ok with the integer and remainders
    #[inline]
    pub fn check_integer(&self) -> Result<(T, T, T, T, T), ()> {
        let qs = [&self.qm11, &self.qm12, &self.qm21, &self.qm22];
        if qs.iter().any(|q| q.is_zero()) {
            return Err(());
        }
        let negative = self.qm11.is_negative();
        if qs.iter().any(|q| q.is_negative() != negative) {
            return Err(());
        }

        let (i11, r11) = self.pm11.div_mod_floor(&self.qm11);
        let (i12, r12) = self.pm12.div_mod_floor(&self.qm12);
        let (i21, r21) = self.pm21.div_mod_floor(&self.qm21);
        let (i22, r22) = self.pm22.div_mod_floor(&self.qm22);

        if i11 == i12 && i11 == i21 && i11 == i22 {
            Ok((i11, r11, r12, r21, r22))
        } else {
            Err(())
        }
    }

    /// extract the integer part if all convergents agrees
    pub fn reduce_recip(&mut self) -> Option<T> {
        let (i, r11, r12, r21, r22) = self.check_integer().ok()?;
        self.pm11 = replace(&mut self.qm11, r11);
        self.pm12 = replace(&mut self.qm12, r12);
        self.pm21 = replace(&mut self.qm21, r21);
        self.pm22 = replace(&mut self.qm22, r22);
        Some(i)
    }
}
