//! # Domain Enums
//!
//! Enumerations shared by the selection engine, its results and its events.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Priority tier that produced a seller pick.
///
/// Tiers are tried in declaration order on every iteration of the
/// selection loop; the first tier yielding a candidate wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SelectionTier {
    /// Quantity equals remaining demand.
    ExactMatch,
    /// Quantity lies within the deviation band around remaining demand.
    DeviationMatch,
    /// Largest quantity not exceeding remaining demand.
    BestFitUnder,
    /// Smallest quantity exceeding remaining demand.
    SmallestOvershoot,
}

impl SelectionTier {
    /// All tiers in priority order.
    pub const ALL: [Self; 4] = [
        Self::ExactMatch,
        Self::DeviationMatch,
        Self::BestFitUnder,
        Self::SmallestOvershoot,
    ];

    /// Returns true if a pick from this tier ends the selection.
    #[inline]
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::BestFitUnder)
    }

    /// Returns the tier name.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ExactMatch => "EXACT_MATCH",
            Self::DeviationMatch => "DEVIATION_MATCH",
            Self::BestFitUnder => "BEST_FIT_UNDER",
            Self::SmallestOvershoot => "SMALLEST_OVERSHOOT",
        }
    }
}

impl fmt::Display for SelectionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a seller can still be picked during one selection run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SellerStatus {
    /// Not yet picked.
    #[default]
    Available,
    /// Already picked; excluded from every tier.
    Selected,
}

impl SellerStatus {
    /// Returns true if the seller has not been picked.
    #[inline]
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn only_best_fit_under_continues() {
        assert!(SelectionTier::ExactMatch.is_terminal());
        assert!(SelectionTier::DeviationMatch.is_terminal());
        assert!(!SelectionTier::BestFitUnder.is_terminal());
        assert!(SelectionTier::SmallestOvershoot.is_terminal());
    }

    #[test]
    fn priority_order_matches_declaration() {
        let mut sorted = SelectionTier::ALL;
        sorted.sort();
        assert_eq!(sorted, SelectionTier::ALL);
    }

    #[test]
    fn tier_serializes_screaming_snake_case() {
        let json = serde_json::to_string(&SelectionTier::SmallestOvershoot).unwrap();
        assert_eq!(json, "\"SMALLEST_OVERSHOOT\"");
        assert_eq!(
            SelectionTier::SmallestOvershoot.to_string(),
            "SMALLEST_OVERSHOOT"
        );
    }

    #[test]
    fn status_defaults_to_available() {
        assert!(SellerStatus::default().is_available());
        assert!(!SellerStatus::Selected.is_available());
    }
}
