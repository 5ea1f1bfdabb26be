//! SubmitLocations system: gate Location → Options on both locations being present.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind};
use crate::collaborators::{Notice, NotifierHandle};
use crate::error::BookingError;
use crate::session::{BookingSession, BookingStage, FlowLifecycle, LastRejection};

pub const INCOMPLETE_LOCATION_MESSAGE: &str =
    "Please enter both pickup and destination locations";

pub fn location_submitted_system(
    event: Res<CurrentEvent>,
    lifecycle: Res<FlowLifecycle>,
    notifier: Res<NotifierHandle>,
    mut session: ResMut<BookingSession>,
    mut rejection: ResMut<LastRejection>,
) {
    if event.0.kind != EventKind::SubmitLocations {
        return;
    }
    if !lifecycle.is_active() || session.stage != BookingStage::Location {
        tracing::debug!(stage = ?session.stage, "ignoring location submit outside Location");
        return;
    }

    if !session.locations_complete() {
        tracing::debug!(
            pickup_blank = session.pickup.trim().is_empty(),
            destination_blank = session.destination.trim().is_empty(),
            "location submit rejected"
        );
        rejection.0 = Some(BookingError::IncompleteLocationInput);
        notifier.0.notify(Notice::error(INCOMPLETE_LOCATION_MESSAGE));
        return;
    }

    session.stage = BookingStage::Options;
    tracing::debug!(
        pickup = %session.pickup,
        destination = %session.destination,
        "locations accepted"
    );
}
