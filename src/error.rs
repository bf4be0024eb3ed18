//! Error type shared by construction and the arithmetic dispatcher.
//!
//! The overflow predicates never produce errors; everything here comes from
//! [`FastRatio::new`](crate::FastRatio::new), the checked arithmetic methods,
//! or the magnitude helpers in [`bits`](crate::bits).

/// Errors raised by [`FastRatio`](crate::FastRatio) construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RatioError {
    /// A zero denominator was supplied, or a zero value was inverted.
    #[error("division by zero")]
    DivisionByZero,

    /// The exact result does not fit the fixed width, even in lowest terms.
    #[error("{operation} overflows the fixed-width representation")]
    Overflow { operation: &'static str },

    /// The magnitude of the most negative value of a width was requested.
    #[error("the magnitude of the most negative {bits}-bit integer is not representable")]
    ExtremalValue { bits: u32 },
}

impl RatioError {
    pub(crate) const fn overflow(operation: &'static str) -> Self {
        Self::Overflow { operation }
    }

    pub(crate) const fn extremal_value(bits: u32) -> Self {
        Self::ExtremalValue { bits }
    }
}

pub type RatioResult<T> = core::result::Result<T, RatioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(RatioError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            RatioError::overflow("add").to_string(),
            "add overflows the fixed-width representation"
        );
        assert_eq!(
            RatioError::extremal_value(32).to_string(),
            "the magnitude of the most negative 32-bit integer is not representable"
        );
    }
}
