//! # Quantity
//!
//! Whole-unit quantity offered by a seller or requested by a buyer.

use crate::domain::value_objects::arithmetic::{ArithmeticResult, CheckedArithmetic};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-negative whole quantity.
///
/// Negative quantities cannot be represented; raw signed input is
/// rejected by [`Quantity::try_from_signed`] and by the input validator.
///
/// # Examples
///
/// ```
/// use seller_select::domain::value_objects::Quantity;
///
/// let qty = Quantity::new(100);
/// assert!(qty.is_positive());
/// assert_eq!(qty.saturating_sub(Quantity::new(150)), Quantity::zero());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Quantity(u64);

impl Quantity {
    /// Creates a quantity from whole units.
    #[inline]
    #[must_use]
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Returns the zero quantity.
    #[inline]
    #[must_use]
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Converts a signed raw value, returning `None` when it is negative.
    #[inline]
    #[must_use]
    pub fn try_from_signed(value: i64) -> Option<Self> {
        u64::try_from(value).ok().map(Self)
    }

    /// Returns the number of units.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> u64 {
        self.0
    }

    /// Returns true if the quantity is zero.
    #[inline]
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if the quantity is greater than zero.
    #[inline]
    #[must_use]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Subtracts, clamping at zero.
    #[inline]
    #[must_use]
    pub const fn saturating_sub(self, rhs: Self) -> Self {
        Self(self.0.saturating_sub(rhs.0))
    }

    /// Adds, clamping at `u64::MAX`.
    #[inline]
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Checked addition.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the sum exceeds `u64::MAX`.
    #[inline]
    pub fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_add(rhs.0).map(Self)
    }

    /// Checked subtraction.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if `rhs` is larger than `self`.
    #[inline]
    pub fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.0.safe_sub(rhs.0).map(Self)
    }
}

impl From<u64> for Quantity {
    fn from(units: u64) -> Self {
        Self(units)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::arithmetic::ArithmeticError;

    mod construction {
        use super::*;

        #[test]
        fn try_from_signed_rejects_negative() {
            assert_eq!(Quantity::try_from_signed(-1), None);
            assert_eq!(Quantity::try_from_signed(0), Some(Quantity::zero()));
            assert_eq!(Quantity::try_from_signed(25), Some(Quantity::new(25)));
        }

        #[test]
        fn zero_is_not_positive() {
            assert!(Quantity::zero().is_zero());
            assert!(!Quantity::zero().is_positive());
        }
    }

    mod arithmetic {
        use super::*;

        #[test]
        fn saturating_sub_clamps_at_zero() {
            assert_eq!(
                Quantity::new(5).saturating_sub(Quantity::new(9)),
                Quantity::zero()
            );
        }

        #[test]
        fn saturating_add_clamps_at_max() {
            assert_eq!(
                Quantity::new(u64::MAX).saturating_add(Quantity::new(1)),
                Quantity::new(u64::MAX)
            );
        }

        #[test]
        fn safe_add_reports_overflow() {
            assert_eq!(
                Quantity::new(u64::MAX).safe_add(Quantity::new(1)),
                Err(ArithmeticError::Overflow)
            );
            assert_eq!(
                Quantity::new(60).safe_add(Quantity::new(50)).unwrap(),
                Quantity::new(110)
            );
        }

        #[test]
        fn safe_sub_reports_underflow() {
            assert_eq!(
                Quantity::new(1).safe_sub(Quantity::new(2)),
                Err(ArithmeticError::Underflow)
            );
        }
    }
}
