//! # Input Validator
//!
//! Turns raw, caller-supplied arrays into a [`SelectionRequest`], or
//! reports the most specific [`ValidationError`].
//!
//! # Check Order
//!
//! ```text
//! absent seller ids -> absent quantities -> length mismatch
//!   -> required <= 0 -> deviation < 0 -> negative quantity -> duplicate ids
//! ```
//!
//! The first failing check wins.
//!
//! # Examples
//!
//! ```
//! use seller_select::application::services::input_validator::InputValidator;
//! use seller_select::domain::errors::ValidationError;
//!
//! let request = InputValidator
//!     .validate(Some(&[1, 2, 3]), Some(&[100, 40, 60]), 100, 0)
//!     .unwrap();
//! assert_eq!(request.sellers().len(), 3);
//!
//! let err = InputValidator
//!     .validate(Some(&[1, 2]), Some(&[100]), 100, 0)
//!     .unwrap_err();
//! assert!(matches!(err, ValidationError::LengthMismatch { .. }));
//! ```

use crate::domain::entities::request::SelectionRequest;
use crate::domain::entities::seller::{Seller, SellerBook};
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::{Quantity, SellerId};

/// Validates raw selection input.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputValidator;

impl InputValidator {
    /// Creates a new validator.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Validates raw input and builds a request.
    ///
    /// # Arguments
    ///
    /// * `seller_ids` - Seller ids, `None` when the caller supplied nothing
    /// * `quantities` - Quantities aligned by index with `seller_ids`
    /// * `required` - Quantity to cover
    /// * `deviation` - Symmetric tolerance for a single-seller match
    ///
    /// # Errors
    ///
    /// - `ValidationError::NullInput` if either sequence is absent
    /// - `ValidationError::LengthMismatch` if the sequences differ in length
    /// - `ValidationError::InvalidRequiredQuantity` if `required <= 0`
    /// - `ValidationError::InvalidDeviation` if `deviation < 0`
    /// - `ValidationError::NegativeQuantity` for the first negative quantity
    /// - `ValidationError::DuplicateSeller` if any seller id repeats
    pub fn validate(
        &self,
        seller_ids: Option<&[i64]>,
        quantities: Option<&[i64]>,
        required: i64,
        deviation: i64,
    ) -> Result<SelectionRequest, ValidationError> {
        let seller_ids = seller_ids.ok_or(ValidationError::NullInput {
            field: "seller_ids",
        })?;
        let quantities = quantities.ok_or(ValidationError::NullInput {
            field: "quantities",
        })?;

        if seller_ids.len() != quantities.len() {
            return Err(ValidationError::LengthMismatch {
                sellers: seller_ids.len(),
                quantities: quantities.len(),
            });
        }

        let required_qty = Quantity::try_from_signed(required)
            .filter(Quantity::is_positive)
            .ok_or(ValidationError::InvalidRequiredQuantity(required))?;

        let deviation_qty = Quantity::try_from_signed(deviation)
            .ok_or(ValidationError::InvalidDeviation(deviation))?;

        let sellers = seller_ids
            .iter()
            .zip(quantities)
            .enumerate()
            .map(|(index, (&id, &quantity))| {
                Quantity::try_from_signed(quantity)
                    .map(|qty| Seller::new(SellerId::new(id), qty))
                    .ok_or(ValidationError::NegativeQuantity { index, quantity })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let book = SellerBook::new(sellers)?;
        SelectionRequest::new(book, required_qty, deviation_qty)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn validate(
        ids: Option<&[i64]>,
        qty: Option<&[i64]>,
        required: i64,
        deviation: i64,
    ) -> Result<SelectionRequest, ValidationError> {
        InputValidator::new().validate(ids, qty, required, deviation)
    }

    mod accepted {
        use super::*;

        #[test]
        fn builds_request_in_input_order() {
            let request = validate(Some(&[601, 602]), Some(&[101, 105]), 100, 0).unwrap();
            let ids: Vec<i64> = request.sellers().iter().map(|s| s.id().get()).collect();
            assert_eq!(ids, vec![601, 602]);
            assert_eq!(request.required(), Quantity::new(100));
            assert_eq!(request.deviation(), Quantity::zero());
        }

        #[test]
        fn zero_quantities_are_allowed() {
            let request = validate(Some(&[1, 2]), Some(&[0, 0]), 1, 0).unwrap();
            assert_eq!(request.sellers().stocked_count(), 0);
        }

        #[test]
        fn empty_arrays_are_allowed() {
            let request = validate(Some(&[]), Some(&[]), 10, 0).unwrap();
            assert!(request.sellers().is_empty());
        }
    }

    mod rejected {
        use super::*;

        #[test]
        fn absent_seller_ids() {
            assert_eq!(
                validate(None, Some(&[1]), 1, 0),
                Err(ValidationError::NullInput {
                    field: "seller_ids"
                })
            );
        }

        #[test]
        fn absent_quantities() {
            assert_eq!(
                validate(Some(&[1]), None, 1, 0),
                Err(ValidationError::NullInput {
                    field: "quantities"
                })
            );
        }

        #[test]
        fn length_mismatch() {
            assert_eq!(
                validate(Some(&[1, 2, 3]), Some(&[1, 2]), 1, 0),
                Err(ValidationError::LengthMismatch {
                    sellers: 3,
                    quantities: 2
                })
            );
        }

        #[test]
        fn zero_and_negative_required() {
            assert_eq!(
                validate(Some(&[1]), Some(&[1]), 0, 0),
                Err(ValidationError::InvalidRequiredQuantity(0))
            );
            assert_eq!(
                validate(Some(&[1]), Some(&[1]), -10, 0),
                Err(ValidationError::InvalidRequiredQuantity(-10))
            );
        }

        #[test]
        fn negative_deviation() {
            assert_eq!(
                validate(Some(&[1]), Some(&[1]), 1, -1),
                Err(ValidationError::InvalidDeviation(-1))
            );
        }

        #[test]
        fn first_negative_quantity_is_named() {
            assert_eq!(
                validate(Some(&[1, 2, 3]), Some(&[5, -2, -7]), 1, 0),
                Err(ValidationError::NegativeQuantity {
                    index: 1,
                    quantity: -2
                })
            );
        }

        #[test]
        fn duplicate_ids_are_named() {
            assert_eq!(
                validate(Some(&[1, 2, 1, 2, 3]), Some(&[1, 1, 1, 1, 1]), 1, 0),
                Err(ValidationError::DuplicateSeller {
                    duplicates: vec![SellerId::new(1), SellerId::new(2)]
                })
            );
        }
    }

    mod check_order {
        use super::*;

        #[test]
        fn null_beats_everything() {
            assert!(matches!(
                validate(None, None, -1, -1),
                Err(ValidationError::NullInput {
                    field: "seller_ids"
                })
            ));
        }

        #[test]
        fn length_beats_required() {
            assert!(matches!(
                validate(Some(&[1]), Some(&[]), 0, -1),
                Err(ValidationError::LengthMismatch { .. })
            ));
        }

        #[test]
        fn required_beats_deviation() {
            assert!(matches!(
                validate(Some(&[1]), Some(&[-1]), 0, -1),
                Err(ValidationError::InvalidRequiredQuantity(0))
            ));
        }

        #[test]
        fn deviation_beats_negative_quantity() {
            assert!(matches!(
                validate(Some(&[1]), Some(&[-1]), 5, -1),
                Err(ValidationError::InvalidDeviation(-1))
            ));
        }

        #[test]
        fn negative_quantity_beats_duplicates() {
            assert!(matches!(
                validate(Some(&[7, 7]), Some(&[1, -1]), 5, 0),
                Err(ValidationError::NegativeQuantity { index: 1, .. })
            ));
        }
    }
}
