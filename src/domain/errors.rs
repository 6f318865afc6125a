//! # Domain Errors
//!
//! Error types raised while validating selection input and while
//! searching for sellers.
//!
//! # Error Hierarchy
//!
//! ```text
//! DomainError
//! ├── Validation(ValidationError)       - Malformed caller input
//! └── Unfulfillable(UnfulfillableError) - Valid input, no seller left to pick
//! ```
//!
//! Validation failures never succeed on retry with the same input.
//! An unfulfillable request may succeed with a larger deviation or with
//! more sellers.

use crate::domain::value_objects::{Quantity, SellerId};
use std::fmt;
use thiserror::Error;

/// Input rejected before any selection runs.
///
/// Variants are listed in the order the validator checks them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required input sequence was not supplied.
    #[error("{field} cannot be absent")]
    NullInput {
        /// Name of the missing input.
        field: &'static str,
    },

    /// Seller ids and quantities have different lengths.
    #[error("array length mismatch: {sellers} seller ids, {quantities} quantities")]
    LengthMismatch {
        /// Number of seller ids supplied.
        sellers: usize,
        /// Number of quantities supplied.
        quantities: usize,
    },

    /// Required quantity is zero or negative.
    #[error("required quantity must be greater than zero, got {0}")]
    InvalidRequiredQuantity(i64),

    /// Deviation is negative.
    #[error("deviation cannot be negative, got {0}")]
    InvalidDeviation(i64),

    /// A seller offers a negative quantity.
    #[error("negative quantity {quantity} at index {index}")]
    NegativeQuantity {
        /// Position of the offending quantity in the input.
        index: usize,
        /// The offending value.
        quantity: i64,
    },

    /// One or more seller ids occur more than once.
    #[error("duplicate seller ids: {}", DisplayIds(.duplicates))]
    DuplicateSeller {
        /// Every repeated id, once, in order of first appearance.
        duplicates: Vec<SellerId>,
    },
}

/// No tier could produce a candidate while demand was still outstanding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error(
    "unable to fulfill the required quantity: remaining {remaining}, available sellers {available_sellers}"
)]
pub struct UnfulfillableError {
    /// Demand left uncovered when the search stopped.
    pub remaining: Quantity,
    /// Sellers still available with a positive quantity.
    pub available_sellers: usize,
}

impl UnfulfillableError {
    /// Creates a new unfulfillable error.
    #[must_use]
    pub fn new(remaining: Quantity, available_sellers: usize) -> Self {
        Self {
            remaining,
            available_sellers,
        }
    }
}

/// Top-level error for a validate-then-select call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Input was malformed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Input was valid but could not be satisfied.
    #[error("{0}")]
    Unfulfillable(#[from] UnfulfillableError),
}

impl DomainError {
    /// Returns true if this is an input validation failure.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Returns true if the input was valid but could not be satisfied.
    #[must_use]
    pub fn is_unfulfillable(&self) -> bool {
        matches!(self, Self::Unfulfillable(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;

struct DisplayIds<'a>(&'a [SellerId]);

impl fmt::Display for DisplayIds<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, id) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{id}")?;
        }
        Ok(())
    }
}
