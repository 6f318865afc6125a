//! # Selection Engine
//!
//! Greedy, deterministic selection of whole sellers covering a required
//! quantity.
//!
//! # Algorithm
//!
//! `remaining` starts at the required quantity. Each iteration looks at
//! sellers not yet picked with a positive quantity and tries, in order:
//!
//! ```text
//! 1. ExactMatch        quantity == remaining                      -> pick, done
//! 2. DeviationMatch    quantity in [max(remaining - dev, 1),
//!                                   remaining + dev] (dev > 0)    -> pick, done
//! 3. BestFitUnder      largest quantity <= remaining              -> pick, remaining -= quantity
//! 4. SmallestOvershoot smallest quantity > remaining              -> pick, done
//! 5. otherwise                                                    -> UnfulfillableError
//! ```
//!
//! Ties in every tier go to the seller that comes first in the request's
//! input order. Each iteration either ends the run or removes one seller,
//! so a book of N sellers needs at most N iterations.
//!
//! A deviation match below `remaining` still ends the run; the shortfall
//! is accepted and visible through [`Selection::is_under_filled`].
//!
//! # Examples
//!
//! ```
//! use seller_select::application::services::input_validator::InputValidator;
//! use seller_select::application::services::selection_engine::SelectionEngine;
//! use seller_select::domain::value_objects::{Quantity, SellerId};
//!
//! let request = InputValidator
//!     .validate(Some(&[20, 21, 22, 23]), Some(&[50, 60, 30, 20]), 110, 0)
//!     .unwrap();
//!
//! let selection = SelectionEngine::new().select(&request).unwrap();
//! assert_eq!(
//!     selection.to_pairs(),
//!     vec![
//!         (SellerId::new(21), Quantity::new(60)),
//!         (SellerId::new(20), Quantity::new(50)),
//!     ]
//! );
//! ```

use crate::application::services::observer::SelectionObserver;
use crate::domain::entities::request::SelectionRequest;
use crate::domain::entities::selection::{SelectedSeller, Selection};
use crate::domain::entities::seller::{Seller, SellerBook};
use crate::domain::errors::UnfulfillableError;
use crate::domain::events::{
    SelectionCompleted, SelectionEvent, SelectionFailed, SelectionStarted, SellerSelected,
    TierMissed,
};
use crate::domain::value_objects::{Quantity, SelectionTier, SellerStatus};
use std::cmp::Reverse;
use std::sync::Arc;

/// Returns the inclusive quantity band accepted by a deviation match.
///
/// The lower bound never drops below one unit; the upper bound saturates.
///
/// ```
/// use seller_select::application::services::selection_engine::deviation_band;
/// use seller_select::domain::value_objects::Quantity;
///
/// assert_eq!(
///     deviation_band(Quantity::new(100), Quantity::new(5)),
///     (Quantity::new(95), Quantity::new(105))
/// );
/// assert_eq!(
///     deviation_band(Quantity::new(3), Quantity::new(5)),
///     (Quantity::new(1), Quantity::new(8))
/// );
/// ```
#[must_use]
pub fn deviation_band(remaining: Quantity, deviation: Quantity) -> (Quantity, Quantity) {
    let lower = remaining.saturating_sub(deviation).max(Quantity::new(1));
    let upper = remaining.saturating_add(deviation);
    (lower, upper)
}

/// Runs the four-tier greedy selection.
///
/// The engine holds no per-run state; one instance can serve concurrent
/// callers. Attached observers receive every [`SelectionEvent`].
#[derive(Debug, Clone, Default)]
pub struct SelectionEngine {
    observers: Vec<Arc<dyn SelectionObserver>>,
}

impl SelectionEngine {
    /// Creates an engine with no observers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches an observer.
    #[must_use]
    pub fn with_observer(mut self, observer: Arc<dyn SelectionObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Returns the number of attached observers.
    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Selects sellers covering the request's required quantity.
    ///
    /// The request is not modified. On failure no partial selection is
    /// returned.
    ///
    /// # Errors
    ///
    /// Returns `UnfulfillableError` when demand remains and no available
    /// seller has a positive quantity.
    pub fn select(&self, request: &SelectionRequest) -> Result<Selection, UnfulfillableError> {
        let required = request.required();
        let deviation = request.deviation();
        let mut state = SelectionState::new(request.sellers());

        self.notify(|| {
            SelectionStarted {
                required,
                deviation,
                sellers: state
                    .available()
                    .map(|c| (c.seller.id(), c.seller.quantity()))
                    .collect(),
            }
            .into()
        });

        let mut remaining = required;
        let mut picks = Vec::new();
        let mut iteration = 0;

        while remaining.is_positive() {
            let Some((candidate, tier)) = self.next_candidate(&state, iteration, remaining, deviation)
            else {
                let available_sellers = state.available_count();
                self.notify(|| {
                    SelectionFailed {
                        remaining,
                        available_sellers,
                    }
                    .into()
                });
                return Err(UnfulfillableError::new(remaining, available_sellers));
            };

            let seller = candidate.seller;
            let remaining_before = remaining;
            remaining = if tier.is_terminal() {
                Quantity::zero()
            } else {
                remaining.saturating_sub(seller.quantity())
            };

            state.mark_selected(candidate.slot);
            picks.push(SelectedSeller::new(seller.id(), seller.quantity(), tier));

            self.notify(|| {
                SellerSelected {
                    iteration,
                    seller_id: seller.id(),
                    quantity: seller.quantity(),
                    tier,
                    remaining_before,
                    remaining_after: remaining,
                }
                .into()
            });

            iteration += 1;
        }

        let selection = Selection::from_parts(required, deviation, picks);
        self.notify(|| {
            SelectionCompleted {
                required,
                total: selection
                    .iter()
                    .fold(Quantity::zero(), |acc, p| acc.saturating_add(p.quantity())),
                sellers_used: selection.sellers_used(),
            }
            .into()
        });

        Ok(selection)
    }

    /// Tries each tier in priority order and returns the first hit.
    fn next_candidate(
        &self,
        state: &SelectionState,
        iteration: usize,
        remaining: Quantity,
        deviation: Quantity,
    ) -> Option<(Candidate, SelectionTier)> {
        for tier in SelectionTier::ALL {
            let found = match tier {
                SelectionTier::ExactMatch => state.find_exact(remaining),
                SelectionTier::DeviationMatch => {
                    if deviation.is_zero() {
                        continue;
                    }
                    state.find_within_deviation(remaining, deviation)
                }
                SelectionTier::BestFitUnder => state.find_best_fit_under(remaining),
                SelectionTier::SmallestOvershoot => state.find_smallest_overshoot(remaining),
            };

            match found {
                Some(candidate) => return Some((candidate, tier)),
                None => self.notify(|| {
                    TierMissed {
                        iteration,
                        tier,
                        remaining,
                    }
                    .into()
                }),
            }
        }
        None
    }

    fn notify(&self, event: impl FnOnce() -> SelectionEvent) {
        if self.observers.is_empty() {
            return;
        }
        let event = event();
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }
}

/// A seller eligible for picking, with its slot in the working state.
#[derive(Debug, Clone, Copy)]
struct Candidate {
    slot: usize,
    seller: Seller,
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    seller: Seller,
    status: SellerStatus,
}

/// Per-run working copy of the seller book.
///
/// Picked sellers stay in place with status `Selected`; sellers with no
/// quantity are never candidates.
#[derive(Debug)]
struct SelectionState {
    slots: Vec<Slot>,
}

impl SelectionState {
    fn new(book: &SellerBook) -> Self {
        Self {
            slots: book
                .iter()
                .map(|&seller| Slot {
                    seller,
                    status: SellerStatus::Available,
                })
                .collect(),
        }
    }

    /// Available sellers with stock, in input order.
    fn available(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, s)| s.status.is_available() && s.seller.has_stock())
            .map(|(slot, s)| Candidate {
                slot,
                seller: s.seller,
            })
    }

    fn available_count(&self) -> usize {
        self.available().count()
    }

    fn find_exact(&self, remaining: Quantity) -> Option<Candidate> {
        self.available()
            .find(|c| c.seller.quantity() == remaining)
    }

    fn find_within_deviation(&self, remaining: Quantity, deviation: Quantity) -> Option<Candidate> {
        let (lower, upper) = deviation_band(remaining, deviation);
        self.available()
            .find(|c| (lower..=upper).contains(&c.seller.quantity()))
    }

    // min_by_key keeps the first of equal keys, which gives input-order ties.
    fn find_best_fit_under(&self, remaining: Quantity) -> Option<Candidate> {
        self.available()
            .filter(|c| c.seller.quantity() <= remaining)
            .min_by_key(|c| Reverse(c.seller.quantity()))
    }

    fn find_smallest_overshoot(&self, remaining: Quantity) -> Option<Candidate> {
        self.available()
            .filter(|c| c.seller.quantity() > remaining)
            .min_by_key(|c| c.seller.quantity())
    }

    fn mark_selected(&mut self, slot: usize) {
        if let Some(s) = self.slots.get_mut(slot) {
            s.status = SellerStatus::Selected;
        }
    }
}
