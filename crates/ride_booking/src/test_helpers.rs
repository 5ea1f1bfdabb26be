//! Test helpers for common test setup and utilities.
//!
//! Shared by the unit tests next to each system and by the integration tests.

use bevy_ecs::prelude::World;

use crate::catalog::{RideOption, RideOptionId};
use crate::clock::{CurrentEvent, EventKind, EventSubject, FlowClock};
use crate::collaborators::{RecordingNavigator, RecordingNotifier};
use crate::config::BookingSetup;
use crate::flow::{build_booking_world, BookingFlow};
use crate::session::{BookingSession, BookingStage};

pub const TEST_PICKUP: &str = "Main St";
pub const TEST_DESTINATION: &str = "Airport";

/// World with the sample catalogs, default config and recording collaborators.
pub fn test_world() -> (World, RecordingNavigator, RecordingNotifier) {
    let navigator = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let world = build_booking_world(
        BookingSetup::default(),
        navigator.clone(),
        notifier.clone(),
    );
    (world, navigator, notifier)
}

/// Sample ride option by id.
///
/// # Panics
///
/// Panics if `id` is not one of the four sample tiers.
pub fn sample_option(id: u32) -> RideOption {
    crate::catalog::RideCatalog::sample()
        .get(RideOptionId(id))
        .cloned()
        .expect("id should name a sample tier")
}

/// Puts the session directly into `stage` with the test locations filled in.
/// Confirmation also gets the option with id 1 chosen.
pub fn set_stage(world: &mut World, stage: BookingStage) {
    let mut session = world.resource_mut::<BookingSession>();
    session.pickup = TEST_PICKUP.to_string();
    session.destination = TEST_DESTINATION.to_string();
    session.stage = stage;
    if stage == BookingStage::Confirmation {
        session.chosen_option = Some(sample_option(1));
    }
}

/// Schedules `kind` at the current time, pops it and installs it as [CurrentEvent].
///
/// # Panics
///
/// Panics if another event is due earlier than now (tests should start from an empty queue).
pub fn schedule_current_event(world: &mut World, kind: EventKind, subject: Option<EventSubject>) {
    world
        .resource_mut::<FlowClock>()
        .schedule_now(kind, subject);
    let event = world
        .resource_mut::<FlowClock>()
        .pop_next()
        .expect("scheduled event");
    assert_eq!(event.kind, kind, "queue should not hold an earlier event");
    world.insert_resource(CurrentEvent(event));
}

/// Flow over the sample setup with recording collaborators.
pub fn sample_flow() -> (BookingFlow, RecordingNavigator, RecordingNotifier) {
    let navigator = RecordingNavigator::default();
    let notifier = RecordingNotifier::default();
    let flow = BookingFlow::new(BookingSetup::default(), navigator.clone(), notifier.clone());
    (flow, navigator, notifier)
}

/// Sample flow driven through the wizard up to Confirmation with option `id` chosen.
///
/// # Panics
///
/// Panics if the test locations are rejected (they never are).
pub fn flow_at_confirmation(id: u32) -> (BookingFlow, RecordingNavigator, RecordingNotifier) {
    let (mut flow, navigator, notifier) = sample_flow();
    flow.set_pickup(TEST_PICKUP);
    flow.set_destination(TEST_DESTINATION);
    flow.submit_locations().expect("test locations are complete");
    flow.select_option(RideOptionId(id));
    (flow, navigator, notifier)
}
