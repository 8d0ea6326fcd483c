use bevy::prelude::*;
use bevy::window::{CursorGrabMode, CursorOptions, PrimaryWindow, WindowFocused};
use bevy_rapier3d::prelude::RapierConfiguration;

use crate::board::layout::end_zone;
use crate::board::phase::{step_phase, Phase, PhaseStep, Signal};
use crate::config::TuningConfig;

use super::bits::Corruption;
use super::clock::RunClock;
use super::player::Player;
use super::{FixedSet, UpdateSet};

pub struct ControlPlugin;

/// Raised by the input, clock, and goal systems; consumed in one place so
/// every transition goes through the same table.
#[derive(Message, Clone, Copy)]
pub(crate) struct PhaseSignal(pub(crate) Signal);

/// Tells each session system to put its slice of state back to run start.
#[derive(Message, Clone, Copy)]
pub(crate) struct SessionReset;

/// Campaign position. A single board ships today; the exit only counts on
/// the last board.
#[derive(Resource)]
pub(crate) struct LevelProgress {
    pub(crate) current: usize,
    pub(crate) total: usize,
}

impl Default for LevelProgress {
    fn default() -> Self {
        Self {
            current: 0,
            total: 1,
        }
    }
}

impl LevelProgress {
    pub(crate) fn on_final_level(&self) -> bool {
        self.current + 1 == self.total
    }
}

impl Plugin for ControlPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (observe_control_intents, apply_phase_signals)
                .chain()
                .in_set(UpdateSet::Control),
        )
        .add_systems(OnEnter(Phase::Playing), (grab_cursor, enable_physics))
        .add_systems(OnExit(Phase::Playing), (release_cursor, disable_physics))
        .add_systems(
            FixedUpdate,
            exit_check_system
                .in_set(FixedSet::Win)
                .run_if(in_state(Phase::Playing)),
        );
    }
}

fn observe_control_intents(
    mouse: Res<ButtonInput<MouseButton>>,
    keys: Res<ButtonInput<KeyCode>>,
    mut focus_reader: MessageReader<WindowFocused>,
    phase: Res<State<Phase>>,
    mut signals: MessageWriter<PhaseSignal>,
) {
    if mouse.just_pressed(MouseButton::Left) {
        signals.write(PhaseSignal(Signal::Engage));
    }

    if keys.just_pressed(KeyCode::Escape) && *phase.get() == Phase::Playing {
        signals.write(PhaseSignal(Signal::Disengage));
    }

    for focus in focus_reader.read() {
        if !focus.focused && *phase.get() == Phase::Playing {
            signals.write(PhaseSignal(Signal::Disengage));
        }
    }
}

fn apply_phase_signals(
    mut signals: MessageReader<PhaseSignal>,
    phase: Res<State<Phase>>,
    config: Res<TuningConfig>,
    mut next: ResMut<NextState<Phase>>,
    mut clock: ResMut<RunClock>,
    mut resets: MessageWriter<SessionReset>,
) {
    // Signals can stack in one frame (expiry plus a click); fold them over
    // the phase the earlier ones produced.
    let mut current = *phase.get();

    for PhaseSignal(signal) in signals.read().copied() {
        match step_phase(current, signal) {
            PhaseStep::Stay => {}
            PhaseStep::Switch(to) => {
                apply_clock_edge(&mut clock, current, to, config.time_limit_secs);
                info!("phase {current:?} -> {to:?}");
                next.set(to);
                current = to;
            }
            PhaseStep::Restart => {
                clock.countdown.stop();
                clock.countdown.start(config.time_limit_secs);
                resets.write(SessionReset);
                info!("phase {current:?} -> restart");
                next.set(Phase::Playing);
                current = Phase::Playing;
            }
        }
    }
}

fn apply_clock_edge(clock: &mut RunClock, from: Phase, to: Phase, time_limit_secs: f32) {
    match (from, to) {
        (Phase::Title, Phase::Playing) => clock.countdown.start(time_limit_secs),
        (Phase::Paused, Phase::Playing) => clock.countdown.resume(),
        (Phase::Playing, Phase::Paused) => clock.countdown.pause(),
        (Phase::Playing, Phase::GameOver) | (Phase::Playing, Phase::Victory) => {
            clock.countdown.stop()
        }
        _ => {}
    }
}

/// Win test: on the last board, with at least one bit corrupted, standing
/// anywhere over the end zone rectangle.
fn exit_check_system(
    corruption: Res<Corruption>,
    progress: Res<LevelProgress>,
    q_player: Query<&Transform, With<Player>>,
    mut signals: MessageWriter<PhaseSignal>,
) {
    if corruption.count == 0 || !progress.on_final_level() {
        return;
    }

    let Ok(transform) = q_player.single() else {
        return;
    };

    if end_zone().contains(transform.translation) {
        signals.write(PhaseSignal(Signal::ExitReached));
    }
}

fn grab_cursor(mut q_cursor: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    let Ok(mut cursor) = q_cursor.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::Locked;
    cursor.visible = false;
}

fn release_cursor(mut q_cursor: Query<&mut CursorOptions, With<PrimaryWindow>>) {
    let Ok(mut cursor) = q_cursor.single_mut() else {
        return;
    };
    cursor.grab_mode = CursorGrabMode::None;
    cursor.visible = true;
}

fn enable_physics(mut q_config: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q_config {
        cfg.physics_pipeline_active = true;
    }
}

fn disable_physics(mut q_config: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q_config {
        cfg.physics_pipeline_active = false;
    }
}
