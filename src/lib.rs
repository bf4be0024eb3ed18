//! Fixed-width rational arithmetic that skips reduction until it has to.
//!
//! This library provides `FastRatio<T>`, a ratio of two fixed-width signed
//! integers (`i8`, `i16`, `i32`, `i64`) built for throughput: most operations
//! run directly in `T` and return unreduced results.
//!
//! # Features
//!
//! - **No implicit reduction**: results keep whatever common factors the
//!   textbook formula produces
//! - **Overflow prediction**: a stateless bit-length predicate decides before
//!   every operation whether the fixed-width computation is safe
//! - **Exact fallback**: when it is not, the operation is redone in a
//!   `crypto-bigint` wide type and narrowed back, or fails with an error
//! - **Magnitude thresholds**: advisory per-width bounds for tuning
//!
//! # Design Philosophy
//!
//! Values carry no "is reduced" flag. Two pairs such as `2/4` and `1/2` are
//! different representations of the same value and compare equal. Call
//! [`FastRatio::normalized`] when a canonical form is needed.
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```
//! use fast_ratio::FastQ32;
//!
//! let a = FastQ32::new(1, 2).unwrap();
//! let b = FastQ32::new(1, 3).unwrap();
//!
//! let sum = a + b;
//! assert_eq!((sum.numer(), sum.denom()), (5, 6));
//!
//! // Products stay unreduced
//! let product = FastQ32::new(2, 3).unwrap() * FastQ32::new(3, 4).unwrap();
//! assert_eq!((product.numer(), product.denom()), (6, 12));
//! assert_eq!(product, FastQ32::new(1, 2).unwrap());
//! ```
//!
//! ## Checked Arithmetic
//!
//! ```
//! use fast_ratio::{FastQ64, RatioError};
//!
//! let big = FastQ64::from_integer(i64::MAX);
//! assert_eq!(
//!     big.checked_add(&big),
//!     Err(RatioError::Overflow { operation: "add" })
//! );
//! ```
//!
//! ## Series Summation
//!
//! ```
//! use fast_ratio::FastQ64;
//!
//! // e ≈ Σ 1/k!
//! let mut sum = FastQ64::zero();
//! let mut term = FastQ64::one();
//! for k in 1..=20 {
//!     sum = sum.checked_add(&term).unwrap().normalized().unwrap();
//!     term = term.checked_div(&FastQ64::from_integer(k)).unwrap();
//! }
//! assert!((sum.to_f64() - std::f64::consts::E).abs() < 1e-14);
//! ```

pub mod bits;
pub mod magnitude;
pub mod overflow;
pub mod ratio_trait;

mod arith;
mod error;
mod wide;

pub use crate::{
    error::{RatioError, RatioResult},
    magnitude::{MagnitudeClass, MagnitudeThresholds},
    overflow::{may_overflow, may_overflow_int, may_overflow_mul_add},
    ratio_trait::{gcd_generic, FastInt, WideInteger},
};
use {
    crate::ratio_trait::gcd_u64,
    core::{
        cmp::Ordering,
        fmt::{self, Display},
    },
};

/// A rational number stored as a pair of fixed-width signed integers.
///
/// # Type Parameter
///
/// `T` must implement [`FastInt`]: `i8`, `i16`, `i32` or `i64`.
///
/// # Invariants
///
/// - Denominator is never zero
/// - Values are not reduced (call [`normalized`](FastRatio::normalized) explicitly)
/// - The sign is the product of the component signs; a negative denominator
///   is a valid representation
///
/// # Examples
///
/// ```
/// use fast_ratio::FastRatio;
///
/// let r = FastRatio::<i64>::new(2, -3).unwrap();
/// assert_eq!(r.numer(), 2);
/// assert_eq!(r.denom(), -3);
/// assert!(r.is_negative());
/// ```
#[derive(Clone, Copy, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "(T, T)",
        into = "(T, T)",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct FastRatio<T: FastInt> {
    numer: T,
    denom: T,
}

impl<T: FastInt> FastRatio<T> {
    // ========================================================================
    // CONSTRUCTORS
    // ========================================================================

    /// Create a ratio exactly as given, without reduction or sign movement.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `denom` is zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_ratio::{FastQ32, RatioError};
    ///
    /// let r = FastQ32::new(6, 8).unwrap();
    /// assert_eq!((r.numer(), r.denom()), (6, 8));
    ///
    /// assert_eq!(FastQ32::new(1, 0), Err(RatioError::DivisionByZero));
    /// ```
    #[inline]
    pub fn new(numer: T, denom: T) -> RatioResult<Self> {
        if denom == T::ZERO {
            return Err(RatioError::DivisionByZero);
        }
        Ok(Self::new_unchecked(numer, denom))
    }

    /// Caller guarantees `denom != 0`.
    #[inline(always)]
    pub(crate) fn new_unchecked(numer: T, denom: T) -> Self {
        debug_assert!(denom != T::ZERO, "denominator must be non-zero");
        Self { numer, denom }
    }

    /// `n/1`.
    #[inline]
    pub fn from_integer(n: T) -> Self {
        Self::new_unchecked(n, T::ONE)
    }

    /// `0/1`.
    #[inline]
    pub fn zero() -> Self {
        Self::new_unchecked(T::ZERO, T::ONE)
    }

    /// `1/1`.
    #[inline]
    pub fn one() -> Self {
        Self::new_unchecked(T::ONE, T::ONE)
    }

    // ========================================================================
    // ACCESSORS & PREDICATES
    // ========================================================================

    #[inline(always)]
    pub fn numer(&self) -> T {
        self.numer
    }

    #[inline(always)]
    pub fn denom(&self) -> T {
        self.denom
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.numer == T::ZERO
    }

    #[inline]
    pub fn is_negative(&self) -> bool {
        !self.is_zero() && self.numer.is_negative() != self.denom.is_negative()
    }

    #[inline]
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && self.numer.is_negative() == self.denom.is_negative()
    }

    /// Whether the value is a whole number.
    ///
    /// ```
    /// use fast_ratio::FastQ32;
    ///
    /// assert!(FastQ32::new(-6, 3).unwrap().is_integer());
    /// assert!(!FastQ32::new(3, 6).unwrap().is_integer());
    /// ```
    #[inline]
    pub fn is_integer(&self) -> bool {
        // MIN % -1 panics, and any numerator is a multiple of ±1
        if self.denom == T::ONE || self.denom == -T::ONE {
            return true;
        }
        self.numer % self.denom == T::ZERO
    }

    /// `-1`, `0` or `1` according to the sign of the value.
    #[inline]
    pub fn signum(&self) -> T {
        if self.is_negative() {
            -T::ONE
        } else if self.is_zero() {
            T::ZERO
        } else {
            T::ONE
        }
    }

    /// Tightest magnitude threshold covering both components.
    ///
    /// A `MIN` component classifies as [`MagnitudeClass::Beyond`].
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_ratio::{FastQ32, MagnitudeClass};
    ///
    /// let q = FastQ32::new(1, 300).unwrap();
    /// assert_eq!(q.magnitude_class(), MagnitudeClass::Workable);
    /// ```
    #[inline]
    pub fn magnitude_class(&self) -> MagnitudeClass {
        let magnitude = self.numer.magnitude_u64().max(self.denom.magnitude_u64());
        T::THRESHOLDS.classify(magnitude)
    }

    /// Whether combining `self` with `other` may overflow in fixed width.
    ///
    /// See [`overflow::may_overflow`].
    #[inline]
    pub fn may_overflow(&self, other: &Self) -> bool {
        overflow::may_overflow(self, other)
    }

    // ========================================================================
    // CONVERSION & REDUCTION
    // ========================================================================

    /// Approximate conversion to f64.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_ratio::FastQ32;
    ///
    /// let r = FastQ32::new(1, -4).unwrap();
    /// assert_eq!(r.to_f64(), -0.25);
    /// ```
    #[inline]
    pub fn to_f64(&self) -> f64 {
        self.numer.to_f64() / self.denom.to_f64()
    }

    /// Lowest terms with a positive denominator. `0/d` becomes `0/1`.
    ///
    /// # Errors
    ///
    /// [`RatioError::ExtremalValue`] if a component is `T::MIN`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_ratio::FastQ64;
    ///
    /// let r = FastQ64::new(6, -8).unwrap().normalized().unwrap();
    /// assert_eq!((r.numer(), r.denom()), (-3, 4));
    /// ```
    pub fn normalized(&self) -> RatioResult<Self> {
        self.ensure_bounded()?;

        if self.is_zero() {
            return Ok(Self::zero());
        }

        let numer = self.numer.magnitude_u64();
        let denom = self.denom.magnitude_u64();
        let g = gcd_u64(numer, denom);

        let extremal = || RatioError::extremal_value(T::BITS);
        let numer = T::from_magnitude_u64(numer / g, self.is_negative()).ok_or_else(extremal)?;
        let denom = T::from_magnitude_u64(denom / g, false).ok_or_else(extremal)?;

        Ok(Self::new_unchecked(numer, denom))
    }

    /// Sign of `(a/b) - (c/d)` from `a*d` against `b*c`, flipped when exactly
    /// one denominator is negative.
    fn cmp_value(&self, other: &Self) -> Ordering {
        let ordering = if overflow::may_overflow(self, other) {
            let (a, b) = self.wide_terms();
            let (c, d) = other.wide_terms();
            a.mul(&d).cmp_value(&b.mul(&c))
        } else {
            (self.numer * other.denom).cmp(&(self.denom * other.numer))
        };

        if self.denom.is_negative() != other.denom.is_negative() {
            ordering.reverse()
        } else {
            ordering
        }
    }
}

// ============================================================================
// TRAIT IMPLEMENTATIONS
// ============================================================================

use core::ops::{Add, Div, Mul, Neg, Sub};

macro_rules! impl_checked_binop {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T: FastInt> $trait for FastRatio<T> {
            type Output = Self;

            #[inline]
            fn $method(self, rhs: Self) -> Self {
                self.$checked(&rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }

        impl<T: FastInt> $trait for &FastRatio<T> {
            type Output = FastRatio<T>;

            #[inline]
            fn $method(self, rhs: Self) -> FastRatio<T> {
                self.$checked(rhs).unwrap_or_else(|err| panic!("{err}"))
            }
        }
    };
}

impl_checked_binop!(Add, add, checked_add);
impl_checked_binop!(Sub, sub, checked_sub);
impl_checked_binop!(Mul, mul, checked_mul);
impl_checked_binop!(Div, div, checked_div);

impl<T: FastInt> Neg for FastRatio<T> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        self.checked_neg().unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: FastInt> Neg for &FastRatio<T> {
    type Output = FastRatio<T>;

    #[inline]
    fn neg(self) -> FastRatio<T> {
        self.checked_neg().unwrap_or_else(|err| panic!("{err}"))
    }
}

impl<T: FastInt> PartialEq for FastRatio<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_value(other) == Ordering::Equal
    }
}

impl<T: FastInt> Eq for FastRatio<T> {}

impl<T: FastInt> PartialOrd for FastRatio<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: FastInt> Ord for FastRatio<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_value(other)
    }
}

impl<T: FastInt> Default for FastRatio<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: FastInt> Display for FastRatio<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl<T: FastInt> From<T> for FastRatio<T> {
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: FastInt> TryFrom<(T, T)> for FastRatio<T> {
    type Error = RatioError;

    fn try_from((numer, denom): (T, T)) -> RatioResult<Self> {
        Self::new(numer, denom)
    }
}

impl<T: FastInt> From<FastRatio<T>> for (T, T) {
    fn from(q: FastRatio<T>) -> Self {
        (q.numer, q.denom)
    }
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Ratio of 8-bit integers, mostly useful for exhaustive testing.
pub type FastQ8 = FastRatio<i8>;

/// Ratio of 16-bit integers.
pub type FastQ16 = FastRatio<i16>;

/// Ratio of 32-bit integers.
pub type FastQ32 = FastRatio<i32>;

/// Ratio of 64-bit integers.
pub type FastQ64 = FastRatio<i64>;
