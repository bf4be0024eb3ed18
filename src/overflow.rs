//! Stateless overflow predicates.
//!
//! Nothing here multiplies. Each predicate measures the operands with a few
//! leading-zero counts and decides whether the fixed-width computation the
//! dispatcher is about to run could leave the representable range. The
//! answer is recomputed on every call; no value carries an "is reduced" or
//! "is small" flag.
//!
//! Predicates are sound: when they return `false`, every intermediate and
//! final integer of the guarded computation has magnitude at most `T::MAX`.
//! They may return `true` for computations that would in fact fit.
//!
//! # Bit bounds
//!
//! For a component `x` let `m(x)` be the bit length of `|x|`. For bit bounds
//! `p` and `q` (meaning `|u| < 2^p` and `|v| < 2^q`):
//!
//! - `|u * v| < 2^product_bits(p, q)`, where `product_bits` is `0` if either
//!   bound is `0`, the larger bound if either is `1`, and `p + q` otherwise
//! - `|u + v| < 2^sum_bits(p, q)`, where `sum_bits` is `max(p, q)`, plus one
//!   when both bounds are non-zero
//!
//! A result fits when its bound is at most `BITS - 1`. Zero and unit
//! components shrink the bounds exactly, so a `0/1` operand never reports
//! overflow on its own.
//!
//! ```
//! use fast_ratio::{may_overflow, FastQ32};
//!
//! let small = FastQ32::new(355, 113).unwrap();
//! let large = FastQ32::new(1 << 20, 3).unwrap();
//! assert!(!may_overflow(&small, &small));
//! assert!(may_overflow(&large, &large));
//! assert!(!may_overflow(&large, &FastQ32::zero()));
//! ```

use crate::{FastInt, FastRatio};

/// Whether `i1 * i2` may overflow.
///
/// `leading_zeros(i1) + leading_zeros(i2) <= BITS`, on the two's-complement
/// patterns. Any negative operand has no leading zeros and is always
/// reported.
#[inline(always)]
pub fn may_overflow_int<T: FastInt>(i1: T, i2: T) -> bool {
    i1.leading_zeros_u32() + i2.leading_zeros_u32() <= T::BITS
}

/// Whether combining `q1` and `q2` in fixed width may overflow.
///
/// Covers every pairing the dispatcher performs on two operands: the
/// products `a*c`, `b*d` of multiplication, the cross products `a*d`, `b*c`
/// of addition, subtraction and division, and the sums `a*d ± b*c`.
///
/// Symmetric in `q1` and `q2`, and unchanged when numerator and denominator
/// of either operand trade places.
#[inline]
pub fn may_overflow<T: FastInt>(q1: &FastRatio<T>, q2: &FastRatio<T>) -> bool {
    let (a, b) = component_bits(q1);
    let (c, d) = component_bits(q2);

    let cross = sum_bits(product_bits(a, d), product_bits(b, c));
    let direct = sum_bits(product_bits(a, c), product_bits(b, d));

    cross.max(direct) >= T::BITS
}

/// Whether `q1 * q2 + q3` may overflow in fixed width.
///
/// With `q1 = a/b`, `q2 = c/d`, `q3 = s/t` this guards the numerator
/// `a*c*t + b*d*s`, the denominator `b*d*t`, and every partial product on
/// the way there.
#[inline]
pub fn may_overflow_mul_add<T: FastInt>(
    q1: &FastRatio<T>,
    q2: &FastRatio<T>,
    q3: &FastRatio<T>,
) -> bool {
    let (a, b) = component_bits(q1);
    let (c, d) = component_bits(q2);
    let (s, t) = component_bits(q3);

    let bd = product_bits(b, d);
    let numer = sum_bits(product_bits(product_bits(a, c), t), product_bits(bd, s));
    let denom = product_bits(bd, t);

    numer.max(denom) >= T::BITS
}

#[inline(always)]
fn component_bits<T: FastInt>(q: &FastRatio<T>) -> (u32, u32) {
    (q.numer().magnitude_bits(), q.denom().magnitude_bits())
}

#[inline(always)]
const fn product_bits(p: u32, q: u32) -> u32 {
    let (lo, hi) = if p < q { (p, q) } else { (q, p) };
    if lo <= 1 {
        lo * hi
    } else {
        lo + hi
    }
}

#[inline(always)]
const fn sum_bits(p: u32, q: u32) -> u32 {
    let (lo, hi) = if p < q { (p, q) } else { (q, p) };
    hi + (lo != 0) as u32
}
