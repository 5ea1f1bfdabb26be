//! NavigationHandOff system: the deferred exit after a committed booking.

use bevy_ecs::prelude::{Res, ResMut};

use crate::clock::{CurrentEvent, EventKind};
use crate::collaborators::NavigatorHandle;
use crate::config::FlowConfig;
use crate::session::{ExitReason, FlowLifecycle};

pub fn navigation_hand_off_system(
    event: Res<CurrentEvent>,
    config: Res<FlowConfig>,
    navigator: Res<NavigatorHandle>,
    mut lifecycle: ResMut<FlowLifecycle>,
) {
    if event.0.kind != EventKind::NavigationHandOff {
        return;
    }
    // A torn-down or cancelled flow has no view left to navigate from.
    if lifecycle.is_exited() || !lifecycle.hand_off_pending() {
        tracing::debug!("dropping stale navigation hand-off");
        return;
    }

    lifecycle.hand_off_due = None;
    lifecycle.exit = Some(ExitReason::HandedOff);
    navigator.0.navigate(config.hand_off_route);
    tracing::info!(route = %config.hand_off_route, at = event.0.timestamp, "handed off navigation");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::{Schedule, World};

    use crate::routes::AppRoute;
    use crate::test_helpers::{schedule_current_event, test_world};

    fn run_hand_off(world: &mut World) {
        schedule_current_event(world, EventKind::NavigationHandOff, None);
        let mut schedule = Schedule::default();
        schedule.add_systems(navigation_hand_off_system);
        schedule.run(world);
    }

    #[test]
    fn pending_hand_off_navigates_to_rider_dashboard() {
        let (mut world, navigator, _) = test_world();
        {
            let mut lifecycle = world.resource_mut::<FlowLifecycle>();
            lifecycle.committed_at = Some(0);
            lifecycle.hand_off_due = Some(0);
        }

        run_hand_off(&mut world);

        assert_eq!(navigator.routes(), vec![AppRoute::RiderDashboard]);
        let lifecycle = *world.resource::<FlowLifecycle>();
        assert_eq!(lifecycle.exit, Some(ExitReason::HandedOff));
        assert!(!lifecycle.hand_off_pending());
    }

    #[test]
    fn hand_off_after_teardown_is_dropped() {
        let (mut world, navigator, _) = test_world();
        {
            let mut lifecycle = world.resource_mut::<FlowLifecycle>();
            lifecycle.committed_at = Some(0);
            lifecycle.hand_off_due = Some(0);
            lifecycle.exit = Some(ExitReason::TornDown);
        }

        run_hand_off(&mut world);

        assert!(navigator.routes().is_empty());
    }

    #[test]
    fn hand_off_fires_at_most_once() {
        let (mut world, navigator, _) = test_world();
        {
            let mut lifecycle = world.resource_mut::<FlowLifecycle>();
            lifecycle.committed_at = Some(0);
            lifecycle.hand_off_due = Some(0);
        }

        run_hand_off(&mut world);
        run_hand_off(&mut world);

        assert_eq!(navigator.routes().len(), 1);
    }
}
