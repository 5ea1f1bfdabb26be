//! Booking runner: advances the flow clock and routes events into the ECS.
//!
//! Each step pops the next event from [FlowClock], inserts it as [CurrentEvent],
//! then runs the schedule. User actions are due immediately; only the hand-off
//! waits for time to pass.

use bevy_ecs::prelude::{Res, Schedule, World};
use bevy_ecs::schedule::IntoSystemConfigs;

use crate::clock::{CurrentEvent, Event, EventKind, FlowClock};
use crate::systems::{
    booking_cancelled::booking_cancelled_system, booking_confirmed::booking_confirmed_system,
    location_submitted::location_submitted_system,
    navigation_hand_off::navigation_hand_off_system, option_selected::option_selected_system,
    selection_revised::selection_revised_system, start_over::start_over_system,
};

fn is_submit_locations(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::SubmitLocations)
        .unwrap_or(false)
}

fn is_select_option(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::SelectOption)
        .unwrap_or(false)
}

fn is_revise_selection(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::ReviseSelection)
        .unwrap_or(false)
}

fn is_start_over(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::StartOver)
        .unwrap_or(false)
}

fn is_confirm_booking(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::ConfirmBooking)
        .unwrap_or(false)
}

fn is_cancel_booking(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::CancelBooking)
        .unwrap_or(false)
}

fn is_navigation_hand_off(event: Option<Res<CurrentEvent>>) -> bool {
    event
        .map(|e| e.0.kind == EventKind::NavigationHandOff)
        .unwrap_or(false)
}

/// Builds the booking schedule: one system per event kind, each gated on the current event.
pub fn booking_schedule() -> Schedule {
    let mut schedule = Schedule::default();
    schedule.add_systems((
        location_submitted_system.run_if(is_submit_locations),
        option_selected_system.run_if(is_select_option),
        selection_revised_system.run_if(is_revise_selection),
        start_over_system.run_if(is_start_over),
        booking_confirmed_system.run_if(is_confirm_booking),
        booking_cancelled_system.run_if(is_cancel_booking),
        navigation_hand_off_system.run_if(is_navigation_hand_off),
    ));
    schedule
}

/// Pops the next event if it is due at or before `until`, then runs the schedule.
/// Returns the processed event, or `None` when nothing is due.
pub fn run_next_event(world: &mut World, schedule: &mut Schedule, until: u64) -> Option<Event> {
    let next_ts = world.resource::<FlowClock>().next_event_time()?;
    if next_ts > until {
        return None;
    }
    let event = world.resource_mut::<FlowClock>().pop_next()?;
    world.insert_resource(CurrentEvent(event));
    tracing::trace!(kind = ?event.kind, at = event.timestamp, "processing booking event");
    schedule.run(world);
    Some(event)
}

/// Processes every event due at the current time. Returns the number processed.
pub fn run_due_events(world: &mut World, schedule: &mut Schedule) -> usize {
    let now = world.resource::<FlowClock>().now();
    let mut steps = 0;
    while run_next_event(world, schedule, now).is_some() {
        steps += 1;
    }
    steps
}

/// Processes events in time order up to `timestamp`, then parks the clock there.
pub fn advance_clock_to(world: &mut World, schedule: &mut Schedule, timestamp: u64) -> usize {
    let mut steps = 0;
    while run_next_event(world, schedule, timestamp).is_some() {
        steps += 1;
    }
    world.resource_mut::<FlowClock>().advance_to(timestamp);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::collaborators::Severity;
    use crate::routes::AppRoute;
    use crate::session::{BookingSession, BookingStage, FlowLifecycle};
    use crate::test_helpers::{set_stage, test_world};

    #[test]
    fn due_events_run_and_future_events_wait() {
        let (mut world, navigator, notifier) = test_world();
        set_stage(&mut world, BookingStage::Confirmation);
        world
            .resource_mut::<FlowClock>()
            .schedule_now(EventKind::ConfirmBooking, None);

        let mut schedule = booking_schedule();
        assert_eq!(run_due_events(&mut world, &mut schedule), 1);
        assert_eq!(notifier.count(Severity::Success), 1);
        assert!(navigator.routes().is_empty());
        assert!(world.resource::<FlowLifecycle>().hand_off_pending());

        assert_eq!(advance_clock_to(&mut world, &mut schedule, 1999), 0);
        assert!(navigator.routes().is_empty());

        assert_eq!(advance_clock_to(&mut world, &mut schedule, 2000), 1);
        assert_eq!(navigator.routes(), vec![AppRoute::RiderDashboard]);
        assert_eq!(world.resource::<FlowClock>().now(), 2000);
    }

    #[test]
    fn queued_actions_apply_in_order() {
        let (mut world, _, _) = test_world();
        {
            let mut session = world.resource_mut::<BookingSession>();
            session.pickup = "Main St".to_string();
            session.destination = "Airport".to_string();
        }
        {
            let mut clock = world.resource_mut::<FlowClock>();
            clock.schedule_now(EventKind::SubmitLocations, None);
            clock.schedule_now(
                EventKind::SelectOption,
                Some(crate::clock::EventSubject::RideOption(
                    crate::catalog::RideOptionId(2),
                )),
            );
        }

        let mut schedule = booking_schedule();
        assert_eq!(run_due_events(&mut world, &mut schedule), 2);

        let session = world.resource::<BookingSession>();
        assert_eq!(session.stage, BookingStage::Confirmation);
        assert_eq!(
            session.chosen_option.as_ref().map(|o| o.label.as_str()),
            Some("UberXL")
        );
    }

    #[test]
    fn advancing_an_idle_clock_only_moves_time() {
        let (mut world, _, _) = test_world();
        let mut schedule = booking_schedule();
        assert_eq!(advance_clock_to(&mut world, &mut schedule, 5000), 0);
        assert_eq!(world.resource::<FlowClock>().now(), 5000);
    }
}
