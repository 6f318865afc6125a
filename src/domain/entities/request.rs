//! # Selection Request
//!
//! A validated request: the seller book, the required quantity and the
//! deviation tolerance. Building one is the only way into the engine, so
//! the engine never sees malformed input.

use crate::domain::entities::seller::SellerBook;
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::Quantity;
use serde::Serialize;

/// Validated input for one selection run.
///
/// # Invariants
///
/// - `required` is positive
/// - seller ids in `sellers` are unique
///
/// # Examples
///
/// ```
/// use seller_select::domain::entities::request::SelectionRequest;
/// use seller_select::domain::entities::seller::SellerBook;
/// use seller_select::domain::value_objects::Quantity;
///
/// let sellers = SellerBook::from_pairs([(1, 100), (2, 40)]).unwrap();
/// let request = SelectionRequest::new(sellers, Quantity::new(100), Quantity::zero()).unwrap();
/// assert_eq!(request.required(), Quantity::new(100));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectionRequest {
    sellers: SellerBook,
    required: Quantity,
    deviation: Quantity,
}

impl SelectionRequest {
    /// Creates a request.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidRequiredQuantity` if `required` is zero.
    pub fn new(
        sellers: SellerBook,
        required: Quantity,
        deviation: Quantity,
    ) -> Result<Self, ValidationError> {
        if required.is_zero() {
            return Err(ValidationError::InvalidRequiredQuantity(0));
        }
        Ok(Self {
            sellers,
            required,
            deviation,
        })
    }

    /// Returns the sellers in input order.
    #[inline]
    #[must_use]
    pub fn sellers(&self) -> &SellerBook {
        &self.sellers
    }

    /// Returns the quantity to cover.
    #[inline]
    #[must_use]
    pub fn required(&self) -> Quantity {
        self.required
    }

    /// Returns the symmetric tolerance for a single-seller match.
    #[inline]
    #[must_use]
    pub fn deviation(&self) -> Quantity {
        self.deviation
    }

    /// Returns a copy of this request with a different deviation.
    #[must_use]
    pub fn with_deviation(mut self, deviation: Quantity) -> Self {
        self.deviation = deviation;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn zero_required_is_rejected() {
        let sellers = SellerBook::from_pairs([(1, 10)]).unwrap();
        let result = SelectionRequest::new(sellers, Quantity::zero(), Quantity::zero());
        assert_eq!(result, Err(ValidationError::InvalidRequiredQuantity(0)));
    }

    #[test]
    fn with_deviation_replaces_tolerance() {
        let sellers = SellerBook::from_pairs([(1, 10)]).unwrap();
        let request = SelectionRequest::new(sellers, Quantity::new(10), Quantity::zero())
            .unwrap()
            .with_deviation(Quantity::new(3));
        assert_eq!(request.deviation(), Quantity::new(3));
        assert_eq!(request.required(), Quantity::new(10));
    }
}
