//! Exact conversions between binary floating point values and ratios

use num_bigint::{BigInt, BigUint};
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::float::FloatCore;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// Parameters of a binary floating point format, where every finite value
/// is `m * 2^e` with `m < 2^precision` and `min_exp <= e <= max_exp`
#[derive(Debug, Clone, Copy)]
pub struct FloatFormat {
    precision: u64,
    min_exp: i64,
    max_exp: i64,
}

pub const BINARY64: FloatFormat = FloatFormat { precision: 53, min_exp: -1074, max_exp: 971 };
pub const BINARY32: FloatFormat = FloatFormat { precision: 24, min_exp: -149, max_exp: 104 };

/// Decompose a finite float into the exact ratio it denotes
pub fn float_to_ratio<F: FloatCore>(f: F) -> Option<BigRational> {
    if !f.is_finite() {
        return None;
    }
    let (mantissa, exponent, sign) = f.integer_decode();
    let mut m = BigInt::from(mantissa);
    if sign < 0 {
        m = -m;
    }
    if exponent >= 0 {
        Some(BigRational::from_integer(m << exponent as usize))
    } else {
        Some(BigRational::new(m, BigInt::one() << (-(exponent as i32)) as usize))
    }
}

/// `2^exp` for exponents inside the binary64 range, including subnormals
fn pow2(exp: i64) -> f64 {
    if exp >= -1022 {
        f64::from_bits(((exp + 1023) as u64) << 52)
    } else {
        f64::from_bits(1u64 << (exp + 1074) as u64)
    }
}

/// Round `numer / denom` to the nearest value of `format`, ties to even.
/// The result is returned as an f64, which represents every value of the supported formats exactly.
pub fn ratio_to_float(numer: &BigInt, denom: &BigInt, format: &FloatFormat) -> f64 {
    if denom.is_zero() {
        return f64::INFINITY;
    }
    if numer.is_zero() {
        return 0.0;
    }
    let negative = numer.is_negative() != denom.is_negative();
    let (p, q) = (numer.magnitude(), denom.magnitude());

    // scale the quotient to precision + 1 or precision + 2 bits
    let precision = format.precision as i64;
    let shift = precision + 1 - (p.bits() as i64 - q.bits() as i64);
    let (n, d) = if shift >= 0 {
        (p << shift as usize, q.clone())
    } else {
        (p.clone(), q << (-shift) as usize)
    };
    let (quo, rem) = n.div_rem(&d);

    let mut drop = quo.bits() as i64 - precision;
    let mut exp = drop - shift;
    if exp < format.min_exp {
        drop += format.min_exp - exp;
        exp = format.min_exp;
    }

    let drop = drop as usize;
    let mut mantissa: BigUint = &quo >> drop;
    let kept: BigUint = &quo >> (drop - 1);
    let half = kept.is_odd();
    let sticky = !rem.is_zero() || (kept << (drop - 1)) != quo;
    if half && (sticky || mantissa.is_odd()) {
        mantissa += 1u32;
        if mantissa.bits() as i64 > precision {
            mantissa >>= 1;
            exp += 1;
        }
    }

    let value = if exp > format.max_exp {
        f64::INFINITY
    } else {
        // mantissa < 2^53, exact as f64
        mantissa.to_u64().map_or(f64::INFINITY, |m| m as f64) * pow2(exp)
    };
    if negative { -value } else { value }
}
