//! # Application Layer
//!
//! Use cases built on the domain: validating raw input and running the
//! selection engine.

pub mod services;

use crate::domain::entities::selection::Selection;
use crate::domain::errors::DomainResult;
use services::{InputValidator, SelectionEngine};

/// Validates raw input and runs a default engine over it.
///
/// # Errors
///
/// - `DomainError::Validation` if the input is malformed
/// - `DomainError::Unfulfillable` if no tier can cover the remaining demand
///
/// # Examples
///
/// ```
/// use seller_select::select_sellers;
/// use seller_select::domain::value_objects::{Quantity, SellerId};
///
/// let selection = select_sellers(Some(&[601, 602, 603]), Some(&[101, 105, 110]), 100, 0).unwrap();
/// assert_eq!(selection.to_pairs(), vec![(SellerId::new(601), Quantity::new(101))]);
///
/// let err = select_sellers(Some(&[1]), Some(&[-3]), 100, 0).unwrap_err();
/// assert!(err.is_validation());
/// ```
pub fn select_sellers(
    seller_ids: Option<&[i64]>,
    quantities: Option<&[i64]>,
    required: i64,
    deviation: i64,
) -> DomainResult<Selection> {
    let request = InputValidator::new().validate(seller_ids, quantities, required, deviation)?;
    Ok(SelectionEngine::new().select(&request)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::{DomainError, ValidationError};

    #[test]
    fn validation_error_is_distinguishable() {
        let err = select_sellers(Some(&[1, 1]), Some(&[5, 5]), 5, 0).unwrap_err();
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::DuplicateSeller { .. })
        ));
    }

    #[test]
    fn unfulfillable_error_is_distinguishable() {
        let err = select_sellers(Some(&[1]), Some(&[0]), 5, 0).unwrap_err();
        assert!(err.is_unfulfillable());
    }

    #[test]
    fn success_returns_selection() {
        let selection = select_sellers(Some(&[1, 2, 3]), Some(&[100, 40, 60]), 100, 0).unwrap();
        assert_eq!(selection.sellers_used(), 1);
    }
}
