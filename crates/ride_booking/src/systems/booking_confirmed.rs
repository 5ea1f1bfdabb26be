//! ConfirmBooking system: commit once, announce success, schedule the hand-off.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, FlowClock};
use crate::collaborators::{Notice, NotifierHandle};
use crate::config::FlowConfig;
use crate::session::{BookingSession, BookingStage, FlowLifecycle};

pub const BOOKING_SUCCESS_MESSAGE: &str = "Ride booked successfully! Finding your driver...";

pub fn booking_confirmed_system(
    event: Res<CurrentEvent>,
    config: Res<FlowConfig>,
    notifier: Res<NotifierHandle>,
    session: Res<BookingSession>,
    mut clock: ResMut<FlowClock>,
    mut lifecycle: ResMut<FlowLifecycle>,
) {
    if event.0.kind != EventKind::ConfirmBooking {
        return;
    }
    if lifecycle.is_committed() {
        tracing::debug!("booking already committed; confirm ignored");
        return;
    }
    if !lifecycle.is_active() || session.stage != BookingStage::Confirmation {
        tracing::debug!(stage = ?session.stage, "ignoring confirm outside Confirmation");
        return;
    }
    let Some(option) = session.chosen_option.as_ref() else {
        return;
    };

    notifier.0.notify(Notice::success(BOOKING_SUCCESS_MESSAGE));
    let hand_off = clock.schedule_in_ms(config.hand_off_delay_ms, EventKind::NavigationHandOff, None);
    lifecycle.committed_at = Some(clock.now());
    lifecycle.hand_off_due = Some(hand_off.timestamp);

    tracing::info!(
        option = %option.label,
        fare = %option.price,
        pickup = %session.pickup,
        destination = %session.destination,
        hand_off_at = hand_off.timestamp,
        "booking committed"
    );
}
