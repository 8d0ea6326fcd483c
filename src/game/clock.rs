use bevy::prelude::*;

use crate::board::countdown::Countdown;
use crate::board::phase::{Phase, Signal};

use super::control::PhaseSignal;
use super::FixedSet;

pub struct ClockPlugin;

/// Wall clock for the active run. Phase transitions drive it through the
/// [`Countdown`] start/pause/resume/stop edges; this plugin only ticks it.
#[derive(Resource, Default)]
pub(crate) struct RunClock {
    pub(crate) countdown: Countdown,
}

impl Plugin for ClockPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            FixedUpdate,
            tick_clock
                .in_set(FixedSet::Simulate)
                .run_if(in_state(Phase::Playing)),
        );
    }
}

fn tick_clock(
    time: Res<Time<Fixed>>,
    mut clock: ResMut<RunClock>,
    mut signals: MessageWriter<PhaseSignal>,
) {
    if clock.countdown.tick(time.delta_secs()) {
        info!("countdown expired");
        signals.write(PhaseSignal(Signal::ClockExpired));
    }
}
