//! ReviseSelection system: Confirmation → Options, keeping the choice as the highlight.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind};
use crate::session::{BookingSession, BookingStage, FlowLifecycle};

pub fn selection_revised_system(
    event: Res<CurrentEvent>,
    lifecycle: Res<FlowLifecycle>,
    mut session: ResMut<BookingSession>,
) {
    if event.0.kind != EventKind::ReviseSelection {
        return;
    }
    if !lifecycle.is_active() || session.stage != BookingStage::Confirmation {
        tracing::debug!(stage = ?session.stage, "ignoring revise outside Confirmation");
        return;
    }

    session.stage = BookingStage::Options;
    tracing::debug!(
        highlighted = ?session.chosen_option.as_ref().map(|option| option.id),
        "returned to ride options"
    );
}
