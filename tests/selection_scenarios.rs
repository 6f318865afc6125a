//! End-to-end selection scenarios through the public API.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use seller_select::application::services::{
    InputValidator, RecordingObserver, SelectionEngine,
};
use seller_select::domain::errors::{DomainError, UnfulfillableError, ValidationError};
use seller_select::domain::events::SelectionEvent;
use seller_select::domain::value_objects::{Quantity, SelectionTier, SellerId};
use seller_select::select_sellers;
use std::sync::Arc;

fn pairs(ids: &[i64], quantities: &[i64], required: i64, deviation: i64) -> Vec<(i64, u64)> {
    select_sellers(Some(ids), Some(quantities), required, deviation)
        .unwrap()
        .to_pairs()
        .into_iter()
        .map(|(id, qty)| (id.get(), qty.get()))
        .collect()
}

mod tiers {
    use super::*;

    #[test]
    fn exact_match_uses_one_seller() {
        assert_eq!(pairs(&[1, 2, 3], &[100, 40, 60], 100, 0), vec![(1, 100)]);
    }

    #[test]
    fn deviation_match_takes_first_seller_in_band() {
        assert_eq!(pairs(&[11, 12, 13], &[95, 98, 40], 100, 5), vec![(11, 95)]);
    }

    #[test]
    fn accumulation_reaches_required_exactly() {
        assert_eq!(
            pairs(&[20, 21, 22, 23], &[50, 60, 30, 20], 110, 0),
            vec![(21, 60), (20, 50)]
        );
    }

    #[test]
    fn smallest_overshoot_is_chosen() {
        assert_eq!(
            pairs(&[601, 602, 603], &[101, 105, 110], 100, 0),
            vec![(601, 101)]
        );
    }

    #[test]
    fn demo_book_ends_with_overshoot() {
        let selection =
            select_sellers(Some(&[1, 2, 3, 4, 5]), Some(&[50, 20, 70, 30, 90]), 100, 2).unwrap();

        assert_eq!(
            selection
                .iter()
                .map(|p| (p.seller_id().get(), p.quantity().get(), p.tier()))
                .collect::<Vec<_>>(),
            vec![
                (5, 90, SelectionTier::BestFitUnder),
                (2, 20, SelectionTier::SmallestOvershoot),
            ]
        );
        assert_eq!(selection.difference(), 10);
    }
}

mod failures {
    use super::*;

    #[test]
    fn each_validation_failure_is_reported_as_validation() {
        let cases: [(Option<&[i64]>, Option<&[i64]>, i64); 6] = [
            (None, Some(&[1]), 1),
            (Some(&[1]), None, 1),
            (Some(&[1, 2]), Some(&[1]), 1),
            (Some(&[1]), Some(&[-1]), 1),
            (Some(&[1, 1]), Some(&[1, 1]), 1),
            (Some(&[1]), Some(&[1]), 0),
        ];
        for (ids, quantities, required) in cases {
            let err = select_sellers(ids, quantities, required, 0).unwrap_err();
            assert!(err.is_validation(), "{err}");
        }
    }

    #[test]
    fn exhausted_book_is_unfulfillable() {
        let err = select_sellers(Some(&[1, 2]), Some(&[0, 0]), 10, 3).unwrap_err();
        assert_eq!(
            err,
            DomainError::Unfulfillable(UnfulfillableError::new(Quantity::new(10), 0))
        );
    }

    #[test]
    fn insufficient_stock_reports_remaining() {
        let err = select_sellers(Some(&[1, 2]), Some(&[30, 20]), 100, 0).unwrap_err();
        assert_eq!(
            err,
            DomainError::Unfulfillable(UnfulfillableError::new(Quantity::new(50), 0))
        );
    }

    #[test]
    fn error_messages_name_the_problem() {
        let err = select_sellers(Some(&[4, 4]), Some(&[1, 1]), 1, 0).unwrap_err();
        assert_eq!(err.to_string(), "validation error: duplicate seller ids: 4");

        let err = select_sellers(Some(&[1]), Some(&[5]), 10, 0).unwrap_err();
        assert!(err.to_string().contains("remaining 5"));
    }

    #[test]
    fn negative_deviation_is_rejected() {
        let err = select_sellers(Some(&[1]), Some(&[5]), 5, -1).unwrap_err();
        assert_eq!(
            err,
            DomainError::Validation(ValidationError::InvalidDeviation(-1))
        );
    }
}

mod observation {
    use super::*;

    #[test]
    fn recorder_sees_the_full_rationale() {
        let recorder = Arc::new(RecordingObserver::new());
        let engine = SelectionEngine::new().with_observer(recorder.clone());
        let request = InputValidator::new()
            .validate(Some(&[1, 2, 3, 4, 5]), Some(&[50, 20, 70, 30, 90]), 100, 2)
            .unwrap();

        engine.select(&request).unwrap();
        let events = recorder.take();

        assert_eq!(events.first().map(SelectionEvent::event_name), Some("SelectionStarted"));
        assert!(events.last().is_some_and(SelectionEvent::is_terminal));

        let picked: Vec<SellerId> = events
            .iter()
            .filter_map(|e| match e {
                SelectionEvent::SellerSelected(s) => Some(s.seller_id),
                _ => None,
            })
            .collect();
        assert_eq!(picked, vec![SellerId::new(5), SellerId::new(2)]);

        let misses = events
            .iter()
            .filter(|e| matches!(e, SelectionEvent::TierMissed(_)))
            .count();
        // Iteration 0 misses exact and deviation, iteration 1 also misses best fit.
        assert_eq!(misses, 5);
    }

    #[test]
    fn events_serialize_as_json_lines() {
        let recorder = Arc::new(RecordingObserver::new());
        let engine = SelectionEngine::new().with_observer(recorder.clone());
        let request = InputValidator::new()
            .validate(Some(&[1]), Some(&[7]), 10, 0)
            .unwrap();

        assert!(engine.select(&request).is_err());
        let last = serde_json::to_value(recorder.events().last().unwrap()).unwrap();
        assert_eq!(last["type"], "FAILED");
        assert_eq!(last["remaining"], 3);
    }
}
