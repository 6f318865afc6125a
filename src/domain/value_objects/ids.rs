//! # Identity Types
//!
//! Identifiers for the parties taking part in a selection.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a seller offering quantity.
///
/// Seller ids are opaque integer keys. The only property the selection
/// relies on is equality: ids must be unique within one seller book.
///
/// # Examples
///
/// ```
/// use seller_select::domain::value_objects::SellerId;
///
/// let id = SellerId::new(42);
/// assert_eq!(id.get(), 42);
/// assert_eq!(id.to_string(), "42");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SellerId(i64);

impl SellerId {
    /// Creates a seller id from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for SellerId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn ordering_follows_raw_value() {
        assert!(SellerId::new(-1) < SellerId::new(0));
        assert!(SellerId::new(7) > SellerId::new(3));
    }

    #[test]
    fn serializes_as_plain_integer() {
        let json = serde_json::to_string(&SellerId::new(601)).unwrap();
        assert_eq!(json, "601");
        let back: SellerId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, SellerId::new(601));
    }
}
