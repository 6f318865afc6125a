//! # Application Services
//!
//! - [`InputValidator`]: Raw input checks producing a `SelectionRequest`
//! - [`SelectionEngine`]: The four-tier greedy selection
//! - [`SelectionObserver`]: Hooks for tracing or recording a run

pub mod input_validator;
pub mod observer;
pub mod selection_engine;

pub use input_validator::InputValidator;
pub use observer::{RecordingObserver, SelectionObserver, TracingObserver};
pub use selection_engine::{SelectionEngine, deviation_band};
