//! # Seller Entities
//!
//! A [`Seller`] offers a fixed quantity; a [`SellerBook`] is the ordered,
//! duplicate-free set of sellers a selection runs against.
//!
//! # Examples
//!
//! ```
//! use seller_select::domain::entities::seller::{Seller, SellerBook};
//!
//! let book = SellerBook::from_pairs([(1, 100), (2, 40), (3, 60)]).unwrap();
//! assert_eq!(book.len(), 3);
//! assert_eq!(book.iter().next().map(Seller::quantity).map(|q| q.get()), Some(100));
//! ```

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::{ArithmeticResult, Quantity, SellerId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

/// A seller and the quantity it can supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Seller {
    /// Seller identity.
    id: SellerId,
    /// Quantity the seller can supply in full.
    quantity: Quantity,
}

impl Seller {
    /// Creates a new seller.
    #[must_use]
    pub fn new(id: SellerId, quantity: Quantity) -> Self {
        Self { id, quantity }
    }

    /// Returns the seller id.
    #[inline]
    #[must_use]
    pub fn id(&self) -> SellerId {
        self.id
    }

    /// Returns the offered quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns true if the seller offers anything at all.
    #[inline]
    #[must_use]
    pub fn has_stock(&self) -> bool {
        self.quantity.is_positive()
    }
}

impl fmt::Display for Seller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Seller({}: {})", self.id, self.quantity)
    }
}

/// Ordered collection of sellers with unique ids.
///
/// Iteration follows the order sellers were supplied in. Every tie-break
/// in the selection engine resolves to the earliest seller in this order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Seller>", into = "Vec<Seller>")]
pub struct SellerBook {
    sellers: Vec<Seller>,
}

impl SellerBook {
    /// Creates a seller book, rejecting repeated ids.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateSeller` naming every repeated id
    /// once, in order of first appearance.
    pub fn new(sellers: Vec<Seller>) -> Result<Self, ValidationError> {
        let duplicates = find_duplicates(sellers.iter().map(Seller::id));
        if !duplicates.is_empty() {
            return Err(ValidationError::DuplicateSeller { duplicates });
        }
        Ok(Self { sellers })
    }

    /// Creates a seller book from raw `(id, quantity)` pairs.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::DuplicateSeller` if an id repeats.
    pub fn from_pairs<I>(pairs: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = (i64, u64)>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, qty)| Seller::new(SellerId::new(id), Quantity::new(qty)))
                .collect(),
        )
    }

    /// Returns the number of sellers.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.sellers.len()
    }

    /// Returns true if the book holds no sellers.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sellers.is_empty()
    }

    /// Iterates sellers in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, Seller> {
        self.sellers.iter()
    }

    /// Returns the sellers as a slice, in input order.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[Seller] {
        &self.sellers
    }

    /// Looks up a seller by id.
    #[must_use]
    pub fn get(&self, id: SellerId) -> Option<&Seller> {
        self.sellers.iter().find(|s| s.id == id)
    }

    /// Returns true if a seller with this id is present.
    #[must_use]
    pub fn contains(&self, id: SellerId) -> bool {
        self.get(id).is_some()
    }

    /// Counts sellers offering a positive quantity.
    #[must_use]
    pub fn stocked_count(&self) -> usize {
        self.sellers.iter().filter(|s| s.has_stock()).count()
    }

    /// Sums every seller's quantity.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the sum exceeds `u64::MAX`.
    pub fn total_quantity(&self) -> ArithmeticResult<Quantity> {
        self.sellers
            .iter()
            .try_fold(Quantity::zero(), |acc, s| acc.safe_add(s.quantity))
    }
}

impl TryFrom<Vec<Seller>> for SellerBook {
    type Error = ValidationError;

    fn try_from(sellers: Vec<Seller>) -> Result<Self, Self::Error> {
        Self::new(sellers)
    }
}

impl From<SellerBook> for Vec<Seller> {
    fn from(book: SellerBook) -> Self {
        book.sellers
    }
}

impl<'a> IntoIterator for &'a SellerBook {
    type Item = &'a Seller;
    type IntoIter = std::slice::Iter<'a, Seller>;

    fn into_iter(self) -> Self::IntoIter {
        self.sellers.iter()
    }
}

/// Returns each id that occurs more than once, in order of first appearance.
pub(crate) fn find_duplicates<I>(ids: I) -> Vec<SellerId>
where
    I: IntoIterator<Item = SellerId>,
{
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut duplicates = Vec::new();
    for id in ids {
        if !seen.insert(id) && reported.insert(id) {
            duplicates.push(id);
        }
    }
    duplicates
}
