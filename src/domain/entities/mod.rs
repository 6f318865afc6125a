//! # Domain Entities
//!
//! - [`Seller`], [`SellerBook`]: Sellers and the ordered book they form
//! - [`SelectionRequest`]: Validated input for one selection run
//! - [`Selection`], [`SelectedSeller`]: The outcome of a run
//! - [`SelectionSummary`]: Reporting digest of a selection

pub mod request;
pub mod selection;
pub mod seller;

pub use request::SelectionRequest;
pub use selection::{SelectedSeller, Selection, SelectionSummary};
pub use seller::{Seller, SellerBook};
