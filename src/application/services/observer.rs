//! # Selection Observers
//!
//! Hooks for watching a selection run without the engine printing
//! anything itself.
//!
//! - [`SelectionObserver`]: Trait receiving every [`SelectionEvent`]
//! - [`TracingObserver`]: Forwards events to `tracing`
//! - [`RecordingObserver`]: Keeps events in memory for inspection
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use seller_select::application::services::observer::RecordingObserver;
//! use seller_select::application::services::selection_engine::SelectionEngine;
//! use seller_select::application::services::input_validator::InputValidator;
//!
//! let recorder = Arc::new(RecordingObserver::new());
//! let engine = SelectionEngine::new().with_observer(recorder.clone());
//! let request = InputValidator.validate(Some(&[1]), Some(&[100]), 100, 0).unwrap();
//!
//! engine.select(&request).unwrap();
//! assert_eq!(recorder.events().first().map(|e| e.event_name()), Some("SelectionStarted"));
//! ```

use crate::domain::events::SelectionEvent;
use parking_lot::Mutex;
use std::fmt;

/// Receives selection events as the engine runs.
///
/// Observers are called synchronously, in the order they were attached,
/// from the thread running the selection.
pub trait SelectionObserver: Send + Sync + fmt::Debug {
    /// Handles one event.
    fn on_event(&self, event: &SelectionEvent);
}

/// Emits every event as a structured `tracing` record.
///
/// Tier misses are logged at `debug`, picks and completion at `info`,
/// failures at `warn`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl TracingObserver {
    /// Creates a new tracing observer.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SelectionObserver for TracingObserver {
    fn on_event(&self, event: &SelectionEvent) {
        match event {
            SelectionEvent::Started(e) => tracing::info!(
                required = %e.required,
                deviation = %e.deviation,
                sellers = e.sellers.len(),
                "seller selection started"
            ),
            SelectionEvent::TierMissed(e) => tracing::debug!(
                iteration = e.iteration,
                tier = %e.tier,
                remaining = %e.remaining,
                "no candidate in tier"
            ),
            SelectionEvent::SellerSelected(e) => tracing::info!(
                iteration = e.iteration,
                seller_id = %e.seller_id,
                quantity = %e.quantity,
                tier = %e.tier,
                remaining_before = %e.remaining_before,
                remaining_after = %e.remaining_after,
                overshoot = %e.overshoot(),
                "seller selected"
            ),
            SelectionEvent::Completed(e) => tracing::info!(
                required = %e.required,
                total = %e.total,
                sellers_used = e.sellers_used,
                "seller selection completed"
            ),
            SelectionEvent::Failed(e) => tracing::warn!(
                remaining = %e.remaining,
                available_sellers = e.available_sellers,
                "seller selection could not be fulfilled"
            ),
        }
    }
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct RecordingObserver {
    events: Mutex<Vec<SelectionEvent>>,
}

impl RecordingObserver {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the events recorded so far.
    #[must_use]
    pub fn events(&self) -> Vec<SelectionEvent> {
        self.events.lock().clone()
    }

    /// Removes and returns the events recorded so far.
    pub fn take(&self) -> Vec<SelectionEvent> {
        std::mem::take(&mut *self.events.lock())
    }

    /// Returns the number of recorded events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }
}

impl SelectionObserver for RecordingObserver {
    fn on_event(&self, event: &SelectionEvent) {
        self.events.lock().push(event.clone());
    }
}
