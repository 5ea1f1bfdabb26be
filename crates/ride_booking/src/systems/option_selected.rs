//! SelectOption system: store the chosen tier and move Options → Confirmation.

use bevy_ecs::prelude::{Res, ResMut};

use crate::catalog::RideCatalog;
use crate::clock::{CurrentEvent, EventKind, EventSubject};
use crate::session::{BookingSession, BookingStage, FlowLifecycle};

pub fn option_selected_system(
    event: Res<CurrentEvent>,
    lifecycle: Res<FlowLifecycle>,
    catalog: Res<RideCatalog>,
    mut session: ResMut<BookingSession>,
) {
    if event.0.kind != EventKind::SelectOption {
        return;
    }
    let Some(EventSubject::RideOption(option_id)) = event.0.subject else {
        return;
    };
    if !lifecycle.is_active() || session.stage != BookingStage::Options {
        tracing::debug!(stage = ?session.stage, %option_id, "ignoring selection outside Options");
        return;
    }
    let Some(option) = catalog.get(option_id) else {
        tracing::warn!(%option_id, "selected ride option is not in the catalog");
        return;
    };

    session.chosen_option = Some(option.clone());
    session.stage = BookingStage::Confirmation;
    tracing::debug!(%option_id, label = %option.label, price = %option.price, "ride option selected");
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::prelude::{Schedule, World};

    use crate::catalog::RideOptionId;
    use crate::test_helpers::{sample_option, schedule_current_event, set_stage, test_world};

    fn run_select(world: &mut World, id: u32) {
        schedule_current_event(
            world,
            EventKind::SelectOption,
            Some(EventSubject::RideOption(RideOptionId(id))),
        );
        let mut schedule = Schedule::default();
        schedule.add_systems(option_selected_system);
        schedule.run(world);
    }

    #[test]
    fn selecting_an_option_moves_to_confirmation() {
        let (mut world, _, _) = test_world();
        set_stage(&mut world, BookingStage::Options);

        run_select(&mut world, 3);

        let session = world.resource::<BookingSession>();
        assert_eq!(session.stage, BookingStage::Confirmation);
        assert_eq!(session.chosen_option, Some(sample_option(3)));
    }

    #[test]
    fn reselecting_overwrites_previous_choice() {
        let (mut world, _, _) = test_world();
        set_stage(&mut world, BookingStage::Options);
        world.resource_mut::<BookingSession>().chosen_option = Some(sample_option(1));

        run_select(&mut world, 4);

        let session = world.resource::<BookingSession>();
        assert_eq!(
            session.chosen_option.as_ref().map(|option| option.id),
            Some(RideOptionId(4))
        );
    }

    #[test]
    fn unknown_option_leaves_session_untouched() {
        let (mut world, _, _) = test_world();
        set_stage(&mut world, BookingStage::Options);

        run_select(&mut world, 42);

        let session = world.resource::<BookingSession>();
        assert_eq!(session.stage, BookingStage::Options);
        assert_eq!(session.chosen_option, None);
    }

    #[test]
    fn selection_in_location_stage_is_ignored() {
        let (mut world, _, _) = test_world();

        run_select(&mut world, 1);

        let session = world.resource::<BookingSession>();
        assert_eq!(session.stage, BookingStage::Location);
        assert_eq!(session.chosen_option, None);
    }
}
