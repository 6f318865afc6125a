//! # Checked Arithmetic
//!
//! Traits and utilities for safe quantity arithmetic.
//!
//! This module provides:
//! - [`ArithmeticError`] - Error type for arithmetic failures
//! - [`CheckedArithmetic`] - Trait for safe arithmetic operations
//!
//! # Examples
//!
//! ```
//! use seller_select::domain::value_objects::arithmetic::{ArithmeticError, CheckedArithmetic};
//!
//! assert_eq!(100u64.safe_add(50), Ok(150));
//! assert_eq!(0u64.safe_sub(1), Err(ArithmeticError::Underflow));
//! ```

use thiserror::Error;

/// Error type for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ArithmeticError {
    /// Arithmetic operation resulted in overflow.
    #[error("arithmetic overflow")]
    Overflow,

    /// Arithmetic operation resulted in underflow.
    #[error("arithmetic underflow")]
    Underflow,
}

/// Result type for arithmetic operations.
pub type ArithmeticResult<T> = Result<T, ArithmeticError>;

/// Trait for checked arithmetic operations.
///
/// Provides safe arithmetic methods that return `Result` instead of
/// panicking or wrapping on overflow and underflow.
pub trait CheckedArithmetic: Sized {
    /// Safely add two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the result would overflow.
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self>;

    /// Safely subtract two values.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Underflow` if the result would underflow.
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self>;
}

impl CheckedArithmetic for u64 {
    #[inline]
    fn safe_add(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_add(rhs).ok_or(ArithmeticError::Overflow)
    }

    #[inline]
    fn safe_sub(self, rhs: Self) -> ArithmeticResult<Self> {
        self.checked_sub(rhs).ok_or(ArithmeticError::Underflow)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_correctly() {
        assert_eq!(ArithmeticError::Overflow.to_string(), "arithmetic overflow");
        assert_eq!(
            ArithmeticError::Underflow.to_string(),
            "arithmetic underflow"
        );
    }

    mod checked_arithmetic_u64 {
        use super::*;

        #[test]
        fn safe_add_works() {
            assert_eq!(100u64.safe_add(50).unwrap(), 150);
        }

        #[test]
        fn safe_add_overflow_fails() {
            assert_eq!(u64::MAX.safe_add(1), Err(ArithmeticError::Overflow));
        }

        #[test]
        fn safe_sub_works() {
            assert_eq!(100u64.safe_sub(50).unwrap(), 50);
        }

        #[test]
        fn safe_sub_underflow_fails() {
            assert_eq!(0u64.safe_sub(1), Err(ArithmeticError::Underflow));
        }
    }
}
