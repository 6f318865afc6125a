//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`SellerId`]: Opaque seller identifier
//! - [`Quantity`]: Non-negative whole quantity with checked arithmetic
//! - [`SelectionTier`], [`SellerStatus`]: Selection enums
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations

pub mod arithmetic;
pub mod enums;
pub mod ids;
pub mod quantity;

pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic};
pub use enums::{SelectionTier, SellerStatus};
pub use ids::SellerId;
pub use quantity::Quantity;
