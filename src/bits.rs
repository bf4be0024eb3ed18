//! Bit-width helpers over [`FastInt`] and [`FastRatio`].
//!
//! `leading_zeros` follows the two's-complement pattern, so every negative
//! value reports zero leading zeros. `magnitude_bits` measures `|x|` instead
//! and is what the overflow predicate consumes. The magnitude helpers that
//! return a `FastInt` reject `MIN`, whose absolute value does not exist in the
//! same width.

use crate::{FastInt, FastRatio, RatioError, RatioResult};

/// Bit width of `T`.
#[inline(always)]
pub fn bit_width<T: FastInt>() -> u32 {
    T::BITS
}

/// Leading zeros of the two's-complement pattern of `x`; `BITS` for zero.
#[inline(always)]
pub fn leading_zeros<T: FastInt>(x: T) -> u32 {
    x.leading_zeros_u32()
}

/// Bit length of `|x|`; zero for zero and `BITS` for `MIN`.
#[inline(always)]
pub fn magnitude_bits<T: FastInt>(x: T) -> u32 {
    x.magnitude_bits()
}

/// `max(|numer|, |denom|)`.
///
/// # Errors
///
/// [`RatioError::ExtremalValue`] when either component is `T::MIN`.
///
/// # Examples
///
/// ```
/// use fast_ratio::{bits::max_magnitude, FastQ32};
///
/// let q = FastQ32::new(-7, 3).unwrap();
/// assert_eq!(max_magnitude(&q), Ok(7));
/// ```
#[inline]
pub fn max_magnitude<T: FastInt>(q: &FastRatio<T>) -> RatioResult<T> {
    let extremal = || RatioError::extremal_value(T::BITS);
    let numer = q.numer().checked_abs().ok_or_else(extremal)?;
    let denom = q.denom().checked_abs().ok_or_else(extremal)?;
    Ok(numer.max(denom))
}

/// One-based index of the most significant bit of [`max_magnitude`].
///
/// Zero exactly when the maximum magnitude is zero.
#[inline]
pub fn most_significant_bit_index<T: FastInt>(q: &FastRatio<T>) -> RatioResult<u32> {
    Ok(T::BITS - leading_zeros(max_magnitude(q)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FastQ16, FastQ32, FastQ64};

    #[test]
    fn test_bit_width() {
        assert_eq!(bit_width::<i8>(), 8);
        assert_eq!(bit_width::<i16>(), 16);
        assert_eq!(bit_width::<i32>(), 32);
        assert_eq!(bit_width::<i64>(), 64);
    }

    #[test]
    fn test_leading_zeros_full_width_for_zero() {
        assert_eq!(leading_zeros(0i32), 32);
        assert_eq!(leading_zeros(0i64), 64);
        assert_eq!(leading_zeros(1i32), 31);
        assert_eq!(leading_zeros(-5i32), 0);
    }

    #[test]
    fn test_magnitude_bits_of_negatives() {
        assert_eq!(magnitude_bits(-5i32), 3);
        assert_eq!(magnitude_bits(i64::MIN), 64);
        assert_eq!(magnitude_bits(-i64::MAX), 63);
    }

    #[test]
    fn test_max_magnitude() {
        let q = FastQ64::new(3, -100).unwrap();
        assert_eq!(max_magnitude(&q), Ok(100));
        assert_eq!(most_significant_bit_index(&q), Ok(7));

        let q = FastQ32::new(0, 1).unwrap();
        assert_eq!(most_significant_bit_index(&q), Ok(1));
    }

    #[test]
    fn test_max_magnitude_rejects_min() {
        let q = FastQ16::new(i16::MIN, 3).unwrap();
        assert_eq!(
            max_magnitude(&q),
            Err(RatioError::ExtremalValue { bits: 16 })
        );
        let q = FastQ16::new(1, i16::MIN).unwrap();
        assert_eq!(
            most_significant_bit_index(&q),
            Err(RatioError::ExtremalValue { bits: 16 })
        );
    }
}
