//! # Domain Events
//!
//! Events emitted while a selection runs, for tracing and audit.
//!
//! - [`SelectionStarted`]: Run begins
//! - [`TierMissed`]: A priority tier found no candidate
//! - [`SellerSelected`]: A seller was picked
//! - [`SelectionCompleted`]: Demand was covered
//! - [`SelectionFailed`]: No further progress was possible

pub mod selection_events;

pub use selection_events::{
    SelectionCompleted, SelectionEvent, SelectionFailed, SelectionStarted, SellerSelected,
    TierMissed,
};
