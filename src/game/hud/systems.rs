use bevy::prelude::*;

use crate::board::layout::bit_sites;
use crate::board::phase::Phase;
use crate::game::bits::Corruption;
use crate::game::clock::RunClock;

use super::types::{format_clock, HudClockText, HudCorruptionText, Overlay};

pub(super) fn update_corruption_ui(
    corruption: Res<Corruption>,
    mut q_text: Query<&mut Text, With<HudCorruptionText>>,
) {
    if let Ok(mut text) = q_text.single_mut() {
        text.0 = format!("{}/{}", corruption.count, bit_sites().len());
    }
}

pub(super) fn update_clock_ui(
    clock: Res<RunClock>,
    mut q_text: Query<&mut Text, With<HudClockText>>,
) {
    if let Ok(mut text) = q_text.single_mut() {
        text.0 = format_clock(clock.countdown.remaining());
    }
}

pub(super) fn sync_overlay_visibility(
    phase: Res<State<Phase>>,
    mut q_overlays: Query<(&Overlay, &mut Visibility)>,
) {
    for (overlay, mut visibility) in &mut q_overlays {
        *visibility = if overlay.0 == *phase.get() {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

#[cfg(test)]
mod tests {
    use bevy::state::app::StatesPlugin;

    use super::*;

    fn make_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.add_plugins(StatesPlugin);
        app.insert_state(Phase::Title);
        app.init_resource::<Corruption>();
        app.init_resource::<RunClock>();
        app
    }

    #[test]
    fn clock_formats_as_minutes_and_seconds() {
        assert_eq!(format_clock(20.0), "0:20");
        assert_eq!(format_clock(61.5), "1:02");
        assert_eq!(format_clock(600.0), "10:00");
    }

    #[test]
    fn clock_rounds_partial_seconds_up() {
        assert_eq!(format_clock(0.4), "0:01");
        assert_eq!(format_clock(19.01), "0:20");
    }

    #[test]
    fn clock_clamps_below_zero() {
        assert_eq!(format_clock(0.0), "0:00");
        assert_eq!(format_clock(-3.0), "0:00");
    }

    #[test]
    fn corruption_ui_shows_count_over_total() {
        let mut app = make_test_app();
        app.add_systems(Update, update_corruption_ui);

        let text = app
            .world_mut()
            .spawn((HudCorruptionText, Text::new("")))
            .id();
        app.world_mut().resource_mut::<Corruption>().count = 3;

        app.update();

        assert_eq!(&app.world().get::<Text>(text).unwrap().0, "3/8");
    }

    #[test]
    fn clock_ui_shows_the_remaining_time() {
        let mut app = make_test_app();
        app.add_systems(Update, update_clock_ui);

        let text = app.world_mut().spawn((HudClockText, Text::new(""))).id();
        app.world_mut()
            .resource_mut::<RunClock>()
            .countdown
            .start(12.3);

        app.update();

        assert_eq!(&app.world().get::<Text>(text).unwrap().0, "0:13");
    }

    #[test]
    fn clock_ui_reads_zero_before_the_first_run() {
        let mut app = make_test_app();
        app.add_systems(Update, update_clock_ui);

        let text = app.world_mut().spawn((HudClockText, Text::new(""))).id();

        app.update();

        assert_eq!(&app.world().get::<Text>(text).unwrap().0, "0:00");
    }

    #[test]
    fn exactly_the_overlay_for_the_current_phase_is_visible() {
        let mut app = make_test_app();
        app.add_systems(Update, sync_overlay_visibility);

        let overlays: Vec<(Phase, Entity)> = [
            Phase::Title,
            Phase::Paused,
            Phase::GameOver,
            Phase::Victory,
        ]
        .into_iter()
        .map(|phase| {
            let id = app
                .world_mut()
                .spawn((Overlay(phase), Visibility::Hidden))
                .id();
            (phase, id)
        })
        .collect();

        app.update();

        for (phase, id) in &overlays {
            let expected = if *phase == Phase::Title {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            assert_eq!(*app.world().get::<Visibility>(*id).unwrap(), expected);
        }

        app.world_mut()
            .resource_mut::<NextState<Phase>>()
            .set(Phase::GameOver);
        app.update();

        for (phase, id) in &overlays {
            let expected = if *phase == Phase::GameOver {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            assert_eq!(*app.world().get::<Visibility>(*id).unwrap(), expected);
        }
    }
}
