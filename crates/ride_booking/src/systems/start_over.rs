//! StartOver system: Options → Location. Typed locations survive; the choice does not.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind};
use crate::session::{BookingSession, BookingStage, FlowLifecycle};

pub fn start_over_system(
    event: Res<CurrentEvent>,
    lifecycle: Res<FlowLifecycle>,
    mut session: ResMut<BookingSession>,
) {
    if event.0.kind != EventKind::StartOver {
        return;
    }
    if !lifecycle.is_active() || session.stage != BookingStage::Options {
        tracing::debug!(stage = ?session.stage, "ignoring start over outside Options");
        return;
    }

    session.chosen_option = None;
    session.stage = BookingStage::Location;
    tracing::debug!("booking restarted at Location");
}
