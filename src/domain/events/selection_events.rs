//! # Selection Events
//!
//! Events describing the rationale of a selection run, delivered to
//! observers as the engine progresses.
//!
//! # Event Flow
//!
//! ```text
//! SelectionStarted -> (TierMissed* -> SellerSelected)+ -> SelectionCompleted
//!                  -> (TierMissed* -> SellerSelected)* -> TierMissed* -> SelectionFailed
//! ```
//!
//! Picks reported before a `SelectionFailed` were tentative; the failed
//! run commits nothing.

use crate::domain::value_objects::{Quantity, SelectionTier, SellerId};
use serde::{Deserialize, Serialize};

/// Emitted once before the first iteration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionStarted {
    /// Quantity requested.
    pub required: Quantity,
    /// Deviation tolerance.
    pub deviation: Quantity,
    /// Sellers with a positive quantity, in input order.
    pub sellers: Vec<(SellerId, Quantity)>,
}

/// Emitted when a tier yields no candidate in an iteration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TierMissed {
    /// Zero-based loop iteration.
    pub iteration: usize,
    /// The tier that found nothing.
    pub tier: SelectionTier,
    /// Remaining demand at the time.
    pub remaining: Quantity,
}

/// Emitted when a seller is picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SellerSelected {
    /// Zero-based loop iteration.
    pub iteration: usize,
    /// The seller picked.
    pub seller_id: SellerId,
    /// Quantity committed.
    pub quantity: Quantity,
    /// The tier that produced the pick.
    pub tier: SelectionTier,
    /// Remaining demand before the pick.
    pub remaining_before: Quantity,
    /// Remaining demand after the pick.
    pub remaining_after: Quantity,
}

impl SellerSelected {
    /// Quantity provided beyond the remaining demand, if any.
    #[must_use]
    pub fn overshoot(&self) -> Quantity {
        self.quantity.saturating_sub(self.remaining_before)
    }
}

/// Emitted when the run ends with demand covered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionCompleted {
    /// Quantity requested.
    pub required: Quantity,
    /// Sum of committed quantities (saturating).
    pub total: Quantity,
    /// Number of sellers picked.
    pub sellers_used: usize,
}

/// Emitted when no tier can make progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionFailed {
    /// Demand left uncovered.
    pub remaining: Quantity,
    /// Sellers still available with a positive quantity.
    pub available_sellers: usize,
}

/// Wrapper enum for all selection events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionEvent {
    /// The run started.
    Started(SelectionStarted),
    /// A tier found no candidate.
    TierMissed(TierMissed),
    /// A seller was picked.
    SellerSelected(SellerSelected),
    /// Demand was covered.
    Completed(SelectionCompleted),
    /// The run could not make progress.
    Failed(SelectionFailed),
}

impl SelectionEvent {
    /// Returns the human-readable name of this event.
    #[must_use]
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::Started(_) => "SelectionStarted",
            Self::TierMissed(_) => "TierMissed",
            Self::SellerSelected(_) => "SellerSelected",
            Self::Completed(_) => "SelectionCompleted",
            Self::Failed(_) => "SelectionFailed",
        }
    }

    /// Returns true for the events that end a run.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed(_) | Self::Failed(_))
    }
}

impl From<SelectionStarted> for SelectionEvent {
    fn from(event: SelectionStarted) -> Self {
        Self::Started(event)
    }
}

impl From<TierMissed> for SelectionEvent {
    fn from(event: TierMissed) -> Self {
        Self::TierMissed(event)
    }
}

impl From<SellerSelected> for SelectionEvent {
    fn from(event: SellerSelected) -> Self {
        Self::SellerSelected(event)
    }
}

impl From<SelectionCompleted> for SelectionEvent {
    fn from(event: SelectionCompleted) -> Self {
        Self::Completed(event)
    }
}

impl From<SelectionFailed> for SelectionEvent {
    fn from(event: SelectionFailed) -> Self {
        Self::Failed(event)
    }
}
