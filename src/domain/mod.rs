//! # Domain Layer
//!
//! Value objects, entities, events and errors for seller selection.

pub mod entities;
pub mod errors;
pub mod events;
pub mod value_objects;
