//! CancelBooking system: the header back action. Leaves at once, dropping any pending hand-off.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind, FlowClock};
use crate::collaborators::NavigatorHandle;
use crate::config::FlowConfig;
use crate::session::{ExitReason, FlowLifecycle};

pub fn booking_cancelled_system(
    event: Res<CurrentEvent>,
    config: Res<FlowConfig>,
    navigator: Res<NavigatorHandle>,
    mut clock: ResMut<FlowClock>,
    mut lifecycle: ResMut<FlowLifecycle>,
) {
    if event.0.kind != EventKind::CancelBooking {
        return;
    }
    if lifecycle.is_exited() {
        return;
    }

    let dropped = clock.cancel(EventKind::NavigationHandOff);
    lifecycle.hand_off_due = None;
    lifecycle.exit = Some(ExitReason::Cancelled);
    navigator.0.navigate(config.cancel_route);
    tracing::info!(route = %config.cancel_route, dropped_hand_offs = dropped, "booking flow cancelled");
}
