//! Trait system for fixed-width rational arithmetic.
//!
//! This module provides the two integer abstractions that `FastRatio<T>` is
//! built on:
//!
//! - [`FastInt`]: the fixed-width signed integer stored in numerator and
//!   denominator (`i8`, `i16`, `i32`, `i64`)
//! - [`WideInteger`]: the crypto-bigint unsigned integer that carries
//!   magnitudes through the fallback path when the overflow predicate rejects
//!   the fixed-width computation
//!
//! # Example
//!
//! ```
//! use fast_ratio::{FastInt, WideInteger};
//! use crypto_bigint::U128;
//!
//! assert_eq!(<i32 as FastInt>::BITS, 32);
//! assert_eq!((-7i32).to_wide_magnitude(), U128::from_u64(7));
//! assert!(<<i32 as FastInt>::Wide as WideInteger>::BITS >= 3 * 32 + 1);
//! ```

use crate::magnitude::MagnitudeThresholds;
use core::fmt::{Debug, Display};
use core::hash::Hash;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};
use crypto_bigint::*;

/// Unsigned operations used by the wide fallback path.
///
/// Only magnitudes live in a `WideInteger`; signs are tracked next to them.
pub trait WideInteger: Clone + Debug + PartialEq + Eq + PartialOrd + Ord + Sized + 'static {
    /// Number of bits in this integer type.
    const BITS: u32;

    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// Returns the number of significant bits in this value.
    fn bits_u32(&self) -> u32;

    /// Returns the number of trailing zero bits.
    fn trailing_zeros_u32(&self) -> u32;

    /// Right shift by a variable amount (variable-time).
    fn shr_vartime_u32(&self, shift: u32) -> Self;

    /// Left shift by a variable amount (variable-time).
    fn shl_vartime_u32(&self, shift: u32) -> Self;

    /// Returns `true` if this value is zero.
    fn is_zero_bool(&self) -> bool;

    /// Add with wrapping on overflow.
    fn wrapping_add(&self, other: &Self) -> Self;

    /// Subtract with wrapping on underflow.
    fn wrapping_sub(&self, other: &Self) -> Self;

    /// Multiply with wrapping on overflow.
    fn wrapping_mul(&self, other: &Self) -> Self;

    /// Divide, panicking on division by zero.
    fn wrapping_div(&self, other: &Self) -> Self;

    /// Remainder, panicking on division by zero.
    fn wrapping_rem(&self, other: &Self) -> Self;

    /// Compute the greatest common divisor using a hybrid algorithm.
    fn gcd(a: Self, b: Self) -> Self;

    /// Create from a 64-bit unsigned integer.
    fn from_u64(n: u64) -> Self;

    /// Try to convert to u64, returning `None` if the value doesn't fit.
    fn try_to_u64(&self) -> Option<u64>;
}

/// Fixed-width signed integer stored in a [`FastRatio`](crate::FastRatio).
///
/// # Associated Type: Wide
///
/// `Wide` holds the magnitude of any intermediate the dispatcher can form,
/// including the three-factor products of a fused multiply-add and the sum
/// of two of them:
/// - Requirement: `Wide::BITS >= 3 * Self::BITS + 1` (checked at compile time)
///
/// # Implemented Types
///
/// | type  | `Wide` |
/// |-------|--------|
/// | `i8`  | `U64`  |
/// | `i16` | `U64`  |
/// | `i32` | `U128` |
/// | `i64` | `U256` |
pub trait FastInt:
    Copy
    + Debug
    + Display
    + Default
    + Eq
    + Ord
    + Hash
    + Send
    + Sync
    + 'static
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
    + Neg<Output = Self>
{
    /// Bit width of the two's-complement representation.
    const BITS: u32;

    /// The zero value.
    const ZERO: Self;

    /// The one value.
    const ONE: Self;

    /// The most negative value. Its magnitude has no positive counterpart.
    const MIN: Self;

    /// The largest value.
    const MAX: Self;

    /// Advisory magnitude thresholds for this width.
    const THRESHOLDS: MagnitudeThresholds;

    /// Unsigned magnitude type for the fallback path.
    type Wide: WideInteger;

    /// Leading zeros of the two's-complement bit pattern (`BITS` for zero,
    /// `0` for any negative value).
    fn leading_zeros_u32(self) -> u32;

    /// Bit length of `|self|`. Total: `MIN` reports `BITS`.
    fn magnitude_bits(self) -> u32;

    /// `|self|` as `u64`. Total: `MIN` maps to `2^(BITS - 1)`.
    fn magnitude_u64(self) -> u64;

    /// Absolute value, `None` for `MIN`.
    fn checked_abs(self) -> Option<Self>;

    /// Returns `true` for values below zero.
    fn is_negative(self) -> bool;

    /// Build `±magnitude`, `None` if the magnitude exceeds `MAX`.
    ///
    /// The range is symmetric: a negative magnitude of `MAX + 1` is rejected
    /// even though `MIN` could hold it.
    fn from_magnitude_u64(magnitude: u64, negative: bool) -> Option<Self>;

    /// Lossy conversion to `f64`.
    fn to_f64(self) -> f64;

    /// `|self|` in the wide type.
    #[inline]
    fn to_wide_magnitude(self) -> Self::Wide {
        <Self::Wide as WideInteger>::from_u64(self.magnitude_u64())
    }

    /// Narrow a wide magnitude back to `±magnitude`, `None` if it does not fit.
    #[inline]
    fn from_wide_magnitude(magnitude: &Self::Wide, negative: bool) -> Option<Self> {
        magnitude
            .try_to_u64()
            .and_then(|m| Self::from_magnitude_u64(m, negative))
    }
}

/// Macro to implement WideInteger for a crypto-bigint type.
macro_rules! impl_wide_integer {
    ($type:ty, $bits:expr) => {
        impl WideInteger for $type {
            const BITS: u32 = $bits;
            const ZERO: Self = <$type>::ZERO;
            const ONE: Self = <$type>::ONE;

            #[inline(always)]
            fn bits_u32(&self) -> u32 {
                self.bits() as u32
            }

            #[inline(always)]
            fn trailing_zeros_u32(&self) -> u32 {
                self.trailing_zeros() as u32
            }

            #[inline(always)]
            fn shr_vartime_u32(&self, shift: u32) -> Self {
                self.shr_vartime(shift as usize)
            }

            #[inline(always)]
            fn shl_vartime_u32(&self, shift: u32) -> Self {
                self.shl_vartime(shift as usize)
            }

            #[inline(always)]
            fn is_zero_bool(&self) -> bool {
                bool::from(<$type as Zero>::is_zero(self))
            }

            #[inline(always)]
            fn wrapping_add(&self, other: &Self) -> Self {
                self.wrapping_add(other)
            }

            #[inline(always)]
            fn wrapping_sub(&self, other: &Self) -> Self {
                self.wrapping_sub(other)
            }

            #[inline(always)]
            fn wrapping_mul(&self, other: &Self) -> Self {
                self.wrapping_mul(other)
            }

            #[inline(always)]
            fn wrapping_div(&self, other: &Self) -> Self {
                self.wrapping_div(other)
            }

            #[inline(always)]
            fn wrapping_rem(&self, other: &Self) -> Self {
                self.wrapping_rem(other)
            }

            #[inline]
            fn gcd(a: Self, b: Self) -> Self {
                gcd_generic(a, b)
            }

            #[inline(always)]
            fn from_u64(n: u64) -> Self {
                <$type>::from_u64(n)
            }

            #[inline]
            fn try_to_u64(&self) -> Option<u64> {
                if self.bits() <= 64 {
                    let bytes = self.to_le_bytes();
                    let mut arr = [0u8; 8];
                    let copy_len = arr.len().min(bytes.as_ref().len());
                    arr[..copy_len].copy_from_slice(&bytes.as_ref()[..copy_len]);
                    Some(u64::from_le_bytes(arr))
                } else {
                    None
                }
            }
        }
    };
}

/// Macro to implement FastInt for a (signed, wide) type pair.
macro_rules! impl_fast_int {
    ($int:ty, $wide:ty, $bits:expr) => {
        const _: () = assert!(<$wide as WideInteger>::BITS >= 3 * $bits + 1);

        impl FastInt for $int {
            const BITS: u32 = $bits;
            const ZERO: Self = 0;
            const ONE: Self = 1;
            const MIN: Self = <$int>::MIN;
            const MAX: Self = <$int>::MAX;
            const THRESHOLDS: MagnitudeThresholds = MagnitudeThresholds::for_bits($bits);

            type Wide = $wide;

            #[inline(always)]
            fn leading_zeros_u32(self) -> u32 {
                self.leading_zeros()
            }

            #[inline(always)]
            fn magnitude_bits(self) -> u32 {
                $bits - self.unsigned_abs().leading_zeros()
            }

            #[inline(always)]
            fn magnitude_u64(self) -> u64 {
                self.unsigned_abs() as u64
            }

            #[inline(always)]
            fn checked_abs(self) -> Option<Self> {
                self.checked_abs()
            }

            #[inline(always)]
            fn is_negative(self) -> bool {
                self < 0
            }

            #[inline]
            fn from_magnitude_u64(magnitude: u64, negative: bool) -> Option<Self> {
                if magnitude > <$int>::MAX as u64 {
                    return None;
                }
                let value = magnitude as $int;
                Some(if negative { -value } else { value })
            }

            #[inline(always)]
            fn to_f64(self) -> f64 {
                self as f64
            }
        }
    };
}

impl_wide_integer!(U64, 64);
impl_wide_integer!(U128, 128);
impl_wide_integer!(U256, 256);

impl_fast_int!(i8, U64, 8);
impl_fast_int!(i16, U64, 16);
impl_fast_int!(i32, U128, 32);
impl_fast_int!(i64, U256, 64);

/// Compute GCD using a hybrid algorithm optimized for various input sizes.
///
/// The algorithm selects the most efficient approach based on input size:
/// - Small values (≤64 bits): Native u64 GCD
/// - Mismatched sizes: Euclidean reduction
/// - Similar-sized values: Binary GCD
///
/// # Examples
///
/// ```
/// use crypto_bigint::U256;
/// use fast_ratio::WideInteger;
///
/// let a = U256::from_u64(48);
/// let b = U256::from_u64(18);
/// let g = <U256 as WideInteger>::gcd(a, b);
/// assert_eq!(g, U256::from_u64(6));
/// ```
pub fn gcd_generic<T: WideInteger>(mut a: T, mut b: T) -> T {
    if a.is_zero_bool() {
        return b;
    }
    if b.is_zero_bool() {
        return a;
    }
    if a == b {
        return a;
    }
    if a == T::ONE || b == T::ONE {
        return T::ONE;
    }

    if let (Some(x), Some(y)) = (a.try_to_u64(), b.try_to_u64()) {
        return T::from_u64(gcd_u64(x, y));
    }

    if a < b {
        core::mem::swap(&mut a, &mut b);
    }

    let size_diff_threshold = T::BITS / 16;

    while !b.is_zero_bool() && a.bits_u32() > b.bits_u32() + size_diff_threshold {
        let rem = a.wrapping_rem(&b);
        a = b;
        b = rem;
    }

    if b.is_zero_bool() {
        return a;
    }

    if let (Some(x), Some(y)) = (a.try_to_u64(), b.try_to_u64()) {
        return T::from_u64(gcd_u64(x, y));
    }

    let shift = a.trailing_zeros_u32().min(b.trailing_zeros_u32());
    a = a.shr_vartime_u32(a.trailing_zeros_u32());
    b = b.shr_vartime_u32(b.trailing_zeros_u32());

    loop {
        if a > b {
            core::mem::swap(&mut a, &mut b);
        }
        b = b.wrapping_sub(&a);
        if b.is_zero_bool() {
            return a.shl_vartime_u32(shift);
        }
        b = b.shr_vartime_u32(b.trailing_zeros_u32());
    }
}

/// Fast u64 GCD using the Euclidean algorithm.
#[inline]
pub(crate) fn gcd_u64(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let temp = b;
        b = a % b;
        a = temp;
    }
    a
}
