//! Property tests for booking flow invariants.
//!
//! 1. Blank locations never leave Location and never touch the choice
//! 2. Non-blank locations always reach Options, exactly once
//! 3. Any catalog option selected from Options becomes the choice
//! 4. Any sequence of confirms commits once and hands off once

mod support;

use proptest::prelude::*;
use ride_booking::config::DEFAULT_HAND_OFF_DELAY_MS;
use ride_booking::{AppRoute, BookingError, BookingStage, RideCatalog, RideOptionId};
use support::harness::Harness;

// ── Strategies ───────────────────────────────────────────────────────

fn arb_blank() -> impl Strategy<Value = String> {
    prop::collection::vec(prop_oneof![Just(' '), Just('\t'), Just('\n')], 0..6)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_location() -> impl Strategy<Value = String> {
    "[ ]{0,2}[A-Za-z0-9][A-Za-z0-9 .,'-]{0,24}"
}

fn arb_sample_id() -> impl Strategy<Value = u32> {
    1..=4u32
}

proptest! {
    #[test]
    fn blank_pickup_never_advances(pickup in arb_blank(), destination in arb_location()) {
        let mut harness = Harness::new();
        harness.enter_locations(&pickup, &destination);

        prop_assert_eq!(
            harness.flow.submit_locations(),
            Err(BookingError::IncompleteLocationInput)
        );
        prop_assert_eq!(harness.flow.stage(), BookingStage::Location);
        prop_assert!(harness.flow.chosen_option().is_none());
        prop_assert_eq!(harness.errors(), 1);
    }

    #[test]
    fn blank_destination_never_advances(pickup in arb_location(), destination in arb_blank()) {
        let mut harness = Harness::new();
        harness.enter_locations(&pickup, &destination);

        prop_assert!(harness.flow.submit_locations().is_err());
        prop_assert_eq!(harness.flow.stage(), BookingStage::Location);
    }

    #[test]
    fn complete_locations_reach_options_once(
        pickup in arb_location(),
        destination in arb_location(),
        extra_submits in 0usize..4,
    ) {
        let mut harness = Harness::new();
        harness.enter_locations(&pickup, &destination);
        prop_assert_eq!(harness.flow.submit_locations(), Ok(()));
        prop_assert_eq!(harness.flow.stage(), BookingStage::Options);

        for _ in 0..extra_submits {
            prop_assert_eq!(harness.flow.submit_locations(), Ok(()));
        }
        prop_assert_eq!(harness.flow.stage(), BookingStage::Options);
        prop_assert_eq!(&harness.flow.session().pickup, &pickup);
        prop_assert_eq!(&harness.flow.session().destination, &destination);
        prop_assert_eq!(harness.errors(), 0);
    }

    #[test]
    fn selected_option_becomes_the_choice(first in arb_sample_id(), second in arb_sample_id()) {
        let catalog = RideCatalog::sample();
        let mut harness = Harness::new();
        harness.book_until_confirmation("Main St", "Airport", first);
        prop_assert_eq!(harness.flow.chosen_option(), catalog.get(RideOptionId(first)));

        harness.flow.revise();
        harness.flow.select_option(RideOptionId(second));
        prop_assert_eq!(harness.flow.stage(), BookingStage::Confirmation);
        prop_assert_eq!(harness.flow.chosen_option(), catalog.get(RideOptionId(second)));
    }

    #[test]
    fn confirms_commit_once(gaps in prop::collection::vec(0u64..3_000, 1..6)) {
        let mut harness = Harness::new();
        harness.book_until_confirmation("Main St", "Airport", 2);

        for gap in gaps {
            harness.flow.confirm();
            harness.flow.advance_by(gap);
        }
        harness.flow.advance_by(DEFAULT_HAND_OFF_DELAY_MS);

        prop_assert_eq!(harness.successes(), 1);
        prop_assert_eq!(harness.routes(), vec![AppRoute::RiderDashboard]);
    }
}
