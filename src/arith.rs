//! Arithmetic dispatch: fixed-width fast path or wide fallback.
//!
//! Every operation asks the overflow predicate first. When it reports no
//! possible overflow the textbook formula runs directly in `T` and the
//! result is returned unreduced. Otherwise the same formula runs exactly on
//! sign-magnitude wide terms and is narrowed back (see [`wide::narrow`]).
//!
//! | operation | numerator | denominator |
//! |-----------|-----------|-------------|
//! | `a/b * c/d` | `a*c` | `b*d` |
//! | `a/b + c/d` | `a*d + b*c` | `b*d` |
//! | `a/b - c/d` | `a*d - b*c` | `b*d` |
//! | `a/b / c/d` | `a*d` | `b*c` |
//! | `a/b * c/d + s/t` | `a*c*t + b*d*s` | `b*d*t` |

use crate::{
    overflow::{may_overflow, may_overflow_mul_add},
    wide, FastInt, FastRatio, RatioError, RatioResult,
};

impl<T: FastInt> FastRatio<T> {
    /// Multiply two ratios without reduction.
    ///
    /// # Errors
    ///
    /// - [`RatioError::ExtremalValue`] if a component of either operand is `T::MIN`
    /// - [`RatioError::Overflow`] if the product does not fit even in lowest terms
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_ratio::FastQ32;
    ///
    /// let a = FastQ32::new(2, 3).unwrap();
    /// let b = FastQ32::new(3, 4).unwrap();
    /// let product = a.checked_mul(&b).unwrap();
    /// // Result is 6/12 (unreduced)
    /// assert_eq!((product.numer(), product.denom()), (6, 12));
    /// ```
    #[inline]
    pub fn checked_mul(&self, other: &Self) -> RatioResult<Self> {
        self.ensure_bounded()?;
        other.ensure_bounded()?;

        if may_overflow(self, other) {
            return self.mul_wide(other);
        }

        Ok(Self::new_unchecked(
            self.numer * other.numer,
            self.denom * other.denom,
        ))
    }

    /// Add two ratios without reduction.
    ///
    /// # Errors
    ///
    /// Same as [`checked_mul`](FastRatio::checked_mul).
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_ratio::FastQ64;
    ///
    /// let a = FastQ64::new(1, 2).unwrap();
    /// let b = FastQ64::new(1, 4).unwrap();
    /// let sum = a.checked_add(&b).unwrap();
    /// // Result is 6/8, not 3/4
    /// assert_eq!((sum.numer(), sum.denom()), (6, 8));
    /// ```
    #[inline]
    pub fn checked_add(&self, other: &Self) -> RatioResult<Self> {
        self.ensure_bounded()?;
        other.ensure_bounded()?;

        if may_overflow(self, other) {
            return self.add_wide(other);
        }

        Ok(Self::new_unchecked(
            self.numer * other.denom + self.denom * other.numer,
            self.denom * other.denom,
        ))
    }

    /// Subtract another ratio.
    ///
    /// Equivalent to `self.checked_add(&other.checked_neg()?)`.
    #[inline]
    pub fn checked_sub(&self, other: &Self) -> RatioResult<Self> {
        self.checked_add(&other.checked_neg()?)
    }

    /// Divide by another ratio.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if `other` is zero, otherwise the same as
    /// [`checked_mul`](FastRatio::checked_mul).
    #[inline]
    pub fn checked_div(&self, other: &Self) -> RatioResult<Self> {
        self.checked_mul(&other.checked_recip()?)
    }

    /// Fused multiply-add: `self * mul + add` with a single denominator.
    ///
    /// `(a/b) * (c/d) + s/t = (a*c*t + b*d*s) / (b*d*t)`
    ///
    /// # Errors
    ///
    /// Same as [`checked_mul`](FastRatio::checked_mul), for any of the three
    /// operands.
    ///
    /// # Examples
    ///
    /// ```
    /// use fast_ratio::FastQ32;
    ///
    /// let a = FastQ32::new(1, 2).unwrap();
    /// let b = FastQ32::new(2, 3).unwrap();
    /// let c = FastQ32::new(1, 6).unwrap();
    /// let r = a.checked_mul_add(&b, &c).unwrap();
    /// // (1*2*6 + 2*3*1) / (2*3*6)
    /// assert_eq!((r.numer(), r.denom()), (18, 36));
    /// ```
    #[inline]
    pub fn checked_mul_add(&self, mul: &Self, add: &Self) -> RatioResult<Self> {
        self.ensure_bounded()?;
        mul.ensure_bounded()?;
        add.ensure_bounded()?;

        if may_overflow_mul_add(self, mul, add) {
            return self.mul_add_wide(mul, add);
        }

        let bd = self.denom * mul.denom;
        Ok(Self::new_unchecked(
            self.numer * mul.numer * add.denom + bd * add.numer,
            bd * add.denom,
        ))
    }

    /// Negate the numerator.
    ///
    /// # Errors
    ///
    /// [`RatioError::ExtremalValue`] if a component is `T::MIN`.
    #[inline]
    pub fn checked_neg(&self) -> RatioResult<Self> {
        self.ensure_bounded()?;
        Ok(Self::new_unchecked(-self.numer, self.denom))
    }

    /// Swap numerator and denominator.
    ///
    /// # Errors
    ///
    /// [`RatioError::DivisionByZero`] if the ratio is zero.
    #[inline]
    pub fn checked_recip(&self) -> RatioResult<Self> {
        if self.is_zero() {
            return Err(RatioError::DivisionByZero);
        }
        Ok(Self::new_unchecked(self.denom, self.numer))
    }

    #[inline(always)]
    pub(crate) fn ensure_bounded(&self) -> RatioResult<()> {
        if self.numer == T::MIN || self.denom == T::MIN {
            return Err(RatioError::extremal_value(T::BITS));
        }
        Ok(())
    }

    #[cold]
    #[inline(never)]
    fn mul_wide(&self, other: &Self) -> RatioResult<Self> {
        tracing::trace!(bits = T::BITS, "mul: computing in wide precision");

        let (a, b) = self.wide_terms();
        let (c, d) = other.wide_terms();

        wide::narrow(a.mul(&c), b.mul(&d), "mul")
    }

    #[cold]
    #[inline(never)]
    fn add_wide(&self, other: &Self) -> RatioResult<Self> {
        tracing::trace!(bits = T::BITS, "add: computing in wide precision");

        let (a, b) = self.wide_terms();
        let (c, d) = other.wide_terms();

        wide::narrow(a.mul(&d).add(&b.mul(&c)), b.mul(&d), "add")
    }

    #[cold]
    #[inline(never)]
    fn mul_add_wide(&self, mul: &Self, add: &Self) -> RatioResult<Self> {
        tracing::trace!(bits = T::BITS, "mul_add: computing in wide precision");

        let (a, b) = self.wide_terms();
        let (c, d) = mul.wide_terms();
        let (s, t) = add.wide_terms();

        let bd = b.mul(&d);
        let numer = a.mul(&c).mul(&t).add(&bd.mul(&s));
        wide::narrow(numer, bd.mul(&t), "mul_add")
    }
}
