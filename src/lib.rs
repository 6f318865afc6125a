//! # seller-select
//!
//! Deterministic greedy selection of sellers to cover a requested quantity.
//!
//! Each iteration tries four tiers in priority order and commits a seller's
//! whole quantity:
//!
//! ```text
//! ExactMatch -> DeviationMatch -> BestFitUnder -> SmallestOvershoot
//!    (ends)        (ends)         (continues)        (ends)
//! ```
//!
//! When no tier yields a candidate the run fails with
//! [`UnfulfillableError`](domain::errors::UnfulfillableError).
//!
//! ## Layers
//!
//! - [`domain`]: Sellers, requests, selections, events and errors
//! - [`application`]: Input validation, the selection engine, observers
//! - [`infrastructure`]: Configuration and logging setup
//!
//! # Examples
//!
//! ```
//! use seller_select::select_sellers;
//! use seller_select::domain::value_objects::{Quantity, SellerId};
//!
//! let selection = select_sellers(
//!     Some(&[1, 2, 3, 4, 5]),
//!     Some(&[50, 20, 70, 30, 90]),
//!     100,
//!     2,
//! )
//! .unwrap();
//!
//! assert_eq!(
//!     selection.to_pairs(),
//!     vec![
//!         (SellerId::new(5), Quantity::new(90)),
//!         (SellerId::new(2), Quantity::new(20)),
//!     ]
//! );
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::select_sellers;
