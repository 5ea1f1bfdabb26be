//! [BookingFlow]: the booking wizard as one owned object.
//!
//! The flow owns a [World] holding the session, catalogs, config, collaborators
//! and clock. Every action is scheduled on the clock at the current time and
//! processed before the call returns. Dropping the flow drops any pending
//! hand-off with it.

use bevy_ecs::prelude::{Schedule, World};

use crate::catalog::{DriverRoster, RideCatalog, RideOption, RideOptionId};
use crate::clock::{EventKind, EventSubject, FlowClock};
use crate::collaborators::{Navigator, NavigatorHandle, Notifier, NotifierHandle};
use crate::config::{BookingSetup, FlowConfig};
use crate::error::BookingError;
use crate::runner::{advance_clock_to, booking_schedule, run_due_events};
use crate::session::{BookingSession, BookingStage, ExitReason, FlowLifecycle, LastRejection};
use crate::view::BookingView;

/// Inserts every resource the booking systems read. Used by [BookingFlow::new] and tests.
pub fn build_booking_world(
    setup: BookingSetup,
    navigator: impl Navigator,
    notifier: impl Notifier,
) -> World {
    let mut world = World::new();
    world.insert_resource(FlowClock::default());
    world.insert_resource(BookingSession::default());
    world.insert_resource(FlowLifecycle::default());
    world.insert_resource(LastRejection::default());
    world.insert_resource(setup.config);
    world.insert_resource(setup.rides);
    world.insert_resource(setup.drivers);
    world.insert_resource(NavigatorHandle(Box::new(navigator)));
    world.insert_resource(NotifierHandle(Box::new(notifier)));
    world
}

pub struct BookingFlow {
    world: World,
    schedule: Schedule,
}

impl BookingFlow {
    /// Mounts a fresh flow in the Location stage.
    pub fn new(setup: BookingSetup, navigator: impl Navigator, notifier: impl Notifier) -> Self {
        tracing::debug!(
            ride_options = setup.rides.len(),
            hand_off_delay_ms = setup.config.hand_off_delay_ms,
            "booking flow mounted"
        );
        Self {
            world: build_booking_world(setup, navigator, notifier),
            schedule: booking_schedule(),
        }
    }

    pub fn set_pickup(&mut self, pickup: &str) {
        if let Some(mut session) = self.editable_session() {
            session.pickup = pickup.to_string();
        }
    }

    pub fn set_destination(&mut self, destination: &str) {
        if let Some(mut session) = self.editable_session() {
            session.destination = destination.to_string();
        }
    }

    /// Location → Options. Fails, and stays put, unless both locations are non-blank.
    ///
    /// `Ok(())` only means nothing was rejected: outside Location, or once the flow
    /// has exited, the call does nothing and still returns `Ok(())`. Check
    /// [BookingFlow::stage] to see where the flow ended up.
    pub fn submit_locations(&mut self) -> Result<(), BookingError> {
        self.world.resource_mut::<LastRejection>().0 = None;
        self.dispatch(EventKind::SubmitLocations, None);
        match self.world.resource_mut::<LastRejection>().0.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// Options → Confirmation with `id` chosen. Unknown ids are ignored.
    pub fn select_option(&mut self, id: RideOptionId) {
        self.dispatch(EventKind::SelectOption, Some(EventSubject::RideOption(id)));
    }

    /// Confirmation → Options, keeping the current choice highlighted.
    pub fn revise(&mut self) {
        self.dispatch(EventKind::ReviseSelection, None);
    }

    /// Options → Location, keeping the typed locations and clearing the choice.
    pub fn start_over(&mut self) {
        self.dispatch(EventKind::StartOver, None);
    }

    /// Commits the booking: one success notice, one hand-off after the configured delay.
    /// Repeated calls do nothing.
    pub fn confirm(&mut self) {
        self.dispatch(EventKind::ConfirmBooking, None);
    }

    /// Leaves for the dashboard immediately, from any stage.
    pub fn cancel(&mut self) {
        self.dispatch(EventKind::CancelBooking, None);
    }

    /// Unmounts the flow. A pending hand-off is dropped without navigating.
    pub fn teardown(&mut self) {
        if self.world.resource::<FlowLifecycle>().is_exited() {
            return;
        }
        let dropped = self
            .world
            .resource_mut::<FlowClock>()
            .cancel(EventKind::NavigationHandOff);
        let mut lifecycle = self.world.resource_mut::<FlowLifecycle>();
        lifecycle.hand_off_due = None;
        lifecycle.exit = Some(ExitReason::TornDown);
        tracing::debug!(dropped_hand_offs = dropped, "booking flow torn down");
    }

    /// Lets `ms` of flow time pass, firing whatever falls due.
    pub fn advance_by(&mut self, ms: u64) -> usize {
        let target = self.now_ms().saturating_add(ms);
        self.advance_to(target)
    }

    pub fn advance_to(&mut self, timestamp: u64) -> usize {
        advance_clock_to(&mut self.world, &mut self.schedule, timestamp)
    }

    pub fn now_ms(&self) -> u64 {
        self.world.resource::<FlowClock>().now()
    }

    pub fn stage(&self) -> BookingStage {
        self.session().stage
    }

    pub fn session(&self) -> &BookingSession {
        self.world.resource::<BookingSession>()
    }

    pub fn chosen_option(&self) -> Option<&RideOption> {
        self.session().chosen_option.as_ref()
    }

    pub fn lifecycle(&self) -> FlowLifecycle {
        *self.world.resource::<FlowLifecycle>()
    }

    pub fn hand_off_pending(&self) -> bool {
        self.lifecycle().hand_off_pending()
    }

    pub fn rides(&self) -> &RideCatalog {
        self.world.resource::<RideCatalog>()
    }

    pub fn config(&self) -> &FlowConfig {
        self.world.resource::<FlowConfig>()
    }

    pub fn view(&self) -> BookingView {
        BookingView::build(
            self.session(),
            self.rides(),
            self.world.resource::<DriverRoster>(),
            self.config(),
        )
    }

    fn dispatch(&mut self, kind: EventKind, subject: Option<EventSubject>) {
        if self.world.resource::<FlowLifecycle>().is_exited() {
            tracing::debug!(?kind, "ignoring action on an exited booking flow");
            return;
        }
        self.world
            .resource_mut::<FlowClock>()
            .schedule_now(kind, subject);
        run_due_events(&mut self.world, &mut self.schedule);
    }

    fn editable_session(&mut self) -> Option<bevy_ecs::world::Mut<'_, BookingSession>> {
        let lifecycle = *self.world.resource::<FlowLifecycle>();
        if !lifecycle.is_active() || self.stage() != BookingStage::Location {
            tracing::debug!(stage = ?self.stage(), "ignoring location edit");
            return None;
        }
        Some(self.world.resource_mut::<BookingSession>())
    }
}
