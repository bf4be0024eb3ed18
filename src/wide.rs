//! Sign-magnitude arithmetic over [`FastInt::Wide`], used when the overflow
//! predicate rejects the fixed-width path, and by the exact comparisons.

use crate::{FastInt, FastRatio, RatioError, RatioResult, WideInteger};
use core::cmp::Ordering;

/// A signed integer held as a wide magnitude plus a sign flag.
///
/// Zero may carry either sign; comparisons treat both as equal.
#[derive(Clone, Debug)]
pub(crate) struct WideTerm<W: WideInteger> {
    magnitude: W,
    negative: bool,
}

impl<W: WideInteger> WideTerm<W> {
    #[inline]
    pub(crate) fn from_int<T: FastInt<Wide = W>>(x: T) -> Self {
        Self {
            magnitude: x.to_wide_magnitude(),
            negative: x.is_negative(),
        }
    }

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        self.magnitude.is_zero_bool()
    }

    #[inline]
    fn is_below_zero(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Exact product; callers keep operands small enough that it cannot wrap.
    #[inline]
    pub(crate) fn mul(&self, other: &Self) -> Self {
        Self {
            magnitude: self.magnitude.wrapping_mul(&other.magnitude),
            negative: self.negative ^ other.negative,
        }
    }

    /// Exact sum; callers keep operands small enough that it cannot wrap.
    pub(crate) fn add(&self, other: &Self) -> Self {
        let (magnitude, negative) = match (self.negative, other.negative) {
            (false, false) => (self.magnitude.wrapping_add(&other.magnitude), false),
            (true, true) => (self.magnitude.wrapping_add(&other.magnitude), true),
            (false, true) if self.magnitude >= other.magnitude => {
                (self.magnitude.wrapping_sub(&other.magnitude), false)
            }
            (false, true) => (other.magnitude.wrapping_sub(&self.magnitude), true),
            (true, false) if other.magnitude >= self.magnitude => {
                (other.magnitude.wrapping_sub(&self.magnitude), false)
            }
            (true, false) => (self.magnitude.wrapping_sub(&other.magnitude), true),
        };
        Self {
            magnitude,
            negative,
        }
    }

    /// Compare as signed values.
    pub(crate) fn cmp_value(&self, other: &Self) -> Ordering {
        match (self.is_below_zero(), other.is_below_zero()) {
            (false, false) => self.magnitude.cmp(&other.magnitude),
            (true, true) => other.magnitude.cmp(&self.magnitude),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }

    #[inline]
    fn div_magnitude(&self, divisor: &W) -> Self {
        Self {
            magnitude: self.magnitude.wrapping_div(divisor),
            negative: self.negative,
        }
    }

    #[inline]
    fn narrow<T: FastInt<Wide = W>>(&self) -> Option<T> {
        T::from_wide_magnitude(&self.magnitude, self.negative)
    }
}

impl<T: FastInt> FastRatio<T> {
    /// Numerator and denominator lifted into the wide type.
    #[inline]
    pub(crate) fn wide_terms(&self) -> (WideTerm<T::Wide>, WideTerm<T::Wide>) {
        (WideTerm::from_int(self.numer), WideTerm::from_int(self.denom))
    }
}

/// Bring an exact wide result back to `T`.
///
/// The raw pair is kept when it fits. Otherwise the common factor is divided
/// out and the reduced pair is tried. Signs stay where the formula put them.
///
/// # Errors
///
/// [`RatioError::Overflow`] when even the reduced pair exceeds `±T::MAX`.
pub(crate) fn narrow<T: FastInt>(
    numer: WideTerm<T::Wide>,
    denom: WideTerm<T::Wide>,
    operation: &'static str,
) -> RatioResult<FastRatio<T>> {
    debug_assert!(!denom.is_zero());

    if let (Some(n), Some(d)) = (numer.narrow::<T>(), denom.narrow::<T>()) {
        return Ok(FastRatio::new_unchecked(n, d));
    }

    let g = <T::Wide as WideInteger>::gcd(numer.magnitude.clone(), denom.magnitude.clone());
    tracing::trace!(operation, bits = T::BITS, "reducing wide result before narrowing");

    let numer = numer.div_magnitude(&g);
    let denom = denom.div_magnitude(&g);

    match (numer.narrow::<T>(), denom.narrow::<T>()) {
        (Some(n), Some(d)) => Ok(FastRatio::new_unchecked(n, d)),
        _ => {
            tracing::debug!(
                operation,
                bits = T::BITS,
                "reduced result does not fit the fixed width"
            );
            Err(RatioError::overflow(operation))
        }
    }
}
