//! # Selection Entity
//!
//! The outcome of a successful selection run: which sellers were picked,
//! in which order, how much each commits and which tier chose them.
//!
//! # Examples
//!
//! ```
//! use seller_select::domain::entities::selection::{SelectedSeller, Selection};
//! use seller_select::domain::value_objects::{Quantity, SelectionTier, SellerId};
//!
//! let selection = Selection::from_parts(
//!     Quantity::new(110),
//!     Quantity::zero(),
//!     vec![
//!         SelectedSeller::new(SellerId::new(21), Quantity::new(60), SelectionTier::BestFitUnder),
//!         SelectedSeller::new(SellerId::new(20), Quantity::new(50), SelectionTier::ExactMatch),
//!     ],
//! );
//!
//! assert_eq!(selection.total().unwrap(), Quantity::new(110));
//! assert_eq!(selection.difference(), 0);
//! ```

use crate::domain::value_objects::{ArithmeticResult, Quantity, SelectionTier, SellerId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One committed seller in a selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SelectedSeller {
    /// The seller picked.
    seller_id: SellerId,
    /// The seller's full quantity, committed as a whole.
    quantity: Quantity,
    /// The tier that produced this pick.
    tier: SelectionTier,
}

impl SelectedSeller {
    /// Creates a new pick.
    #[must_use]
    pub fn new(seller_id: SellerId, quantity: Quantity, tier: SelectionTier) -> Self {
        Self {
            seller_id,
            quantity,
            tier,
        }
    }

    /// Returns the seller id.
    #[inline]
    #[must_use]
    pub fn seller_id(&self) -> SellerId {
        self.seller_id
    }

    /// Returns the committed quantity.
    #[inline]
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the tier that produced this pick.
    #[inline]
    #[must_use]
    pub fn tier(&self) -> SelectionTier {
        self.tier
    }
}

impl fmt::Display for SelectedSeller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "seller {}: {} units ({})",
            self.seller_id, self.quantity, self.tier
        )
    }
}

/// Ordered set of sellers covering a required quantity.
///
/// Picks are kept in selection order and each seller id appears at most
/// once.
///
/// # Under-fulfillment
///
/// A deviation match ends the run even when the matched quantity is below
/// the remaining demand, so the total may fall short of `required` by up
/// to `deviation`. This is accepted policy; see [`Selection::is_under_filled`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    required: Quantity,
    deviation: Quantity,
    picks: Vec<SelectedSeller>,
}

impl Selection {
    /// Creates a selection from its parts without validation
    /// (for reconstruction and tests).
    #[must_use]
    pub fn from_parts(required: Quantity, deviation: Quantity, picks: Vec<SelectedSeller>) -> Self {
        Self {
            required,
            deviation,
            picks,
        }
    }

    /// Returns the quantity that was requested.
    #[inline]
    #[must_use]
    pub fn required(&self) -> Quantity {
        self.required
    }

    /// Returns the deviation the selection ran with.
    #[inline]
    #[must_use]
    pub fn deviation(&self) -> Quantity {
        self.deviation
    }

    /// Returns the picks in selection order.
    #[inline]
    #[must_use]
    pub fn picks(&self) -> &[SelectedSeller] {
        &self.picks
    }

    /// Iterates the picks in selection order.
    pub fn iter(&self) -> std::slice::Iter<'_, SelectedSeller> {
        self.picks.iter()
    }

    /// Returns the number of sellers used.
    #[inline]
    #[must_use]
    pub fn sellers_used(&self) -> usize {
        self.picks.len()
    }

    /// Returns true if no seller was picked.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.picks.is_empty()
    }

    /// Returns the quantity committed by a seller, if it was picked.
    #[must_use]
    pub fn get(&self, seller_id: SellerId) -> Option<Quantity> {
        self.picks
            .iter()
            .find(|p| p.seller_id == seller_id)
            .map(|p| p.quantity)
    }

    /// Returns true if the seller was picked.
    #[must_use]
    pub fn contains(&self, seller_id: SellerId) -> bool {
        self.get(seller_id).is_some()
    }

    /// Returns the picked seller ids in selection order.
    #[must_use]
    pub fn seller_ids(&self) -> Vec<SellerId> {
        self.picks.iter().map(|p| p.seller_id).collect()
    }

    /// Returns `(seller id, quantity)` pairs in selection order.
    #[must_use]
    pub fn to_pairs(&self) -> Vec<(SellerId, Quantity)> {
        self.picks.iter().map(|p| (p.seller_id, p.quantity)).collect()
    }

    /// Returns the tier of the last pick, which is the one that ended the run.
    #[must_use]
    pub fn terminal_tier(&self) -> Option<SelectionTier> {
        self.picks.last().map(|p| p.tier)
    }

    /// Sums the committed quantities.
    ///
    /// # Errors
    ///
    /// Returns `ArithmeticError::Overflow` if the sum exceeds `u64::MAX`.
    pub fn total(&self) -> ArithmeticResult<Quantity> {
        self.picks
            .iter()
            .try_fold(Quantity::zero(), |acc, p| acc.safe_add(p.quantity))
    }

    /// Returns `total - required`; negative when under-filled.
    #[must_use]
    pub fn difference(&self) -> i128 {
        let total: i128 = self.picks.iter().map(|p| i128::from(p.quantity.get())).sum();
        total - i128::from(self.required.get())
    }

    /// Returns true if the committed total is below the required quantity.
    ///
    /// Only a deviation match below the remaining demand can cause this.
    #[must_use]
    pub fn is_under_filled(&self) -> bool {
        self.difference() < 0
    }

    /// Builds a presentation summary of this selection.
    #[must_use]
    pub fn summary(&self) -> SelectionSummary {
        SelectionSummary {
            required: self.required,
            deviation: self.deviation,
            total: self
                .picks
                .iter()
                .fold(Quantity::zero(), |acc, p| acc.saturating_add(p.quantity)),
            difference: self.difference(),
            sellers_used: self.sellers_used(),
            picks: self.picks.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a Selection {
    type Item = &'a SelectedSeller;
    type IntoIter = std::slice::Iter<'a, SelectedSeller>;

    fn into_iter(self) -> Self::IntoIter {
        self.picks.iter()
    }
}

/// Flat, serializable digest of a [`Selection`] for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionSummary {
    /// Quantity requested.
    pub required: Quantity,
    /// Deviation tolerance used.
    pub deviation: Quantity,
    /// Sum of committed quantities (saturating).
    pub total: Quantity,
    /// `total - required`.
    pub difference: i128,
    /// Number of sellers picked.
    pub sellers_used: usize,
    /// Picks in selection order.
    pub picks: Vec<SelectedSeller>,
}

impl fmt::Display for SelectionSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Required quantity: {}", self.required)?;
        writeln!(f, "Allowed deviation: {}", self.deviation)?;
        writeln!(f, "Total fulfilled:   {}", self.total)?;
        writeln!(f, "Difference:        {:+}", self.difference)?;
        writeln!(f, "Sellers used:      {}", self.sellers_used)?;
        for pick in &self.picks {
            writeln!(f, "  - {pick}")?;
        }
        Ok(())
    }
}
