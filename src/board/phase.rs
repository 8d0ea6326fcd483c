use bevy::prelude::States;

/// Session phase. Starts on the title screen; `Playing` is the only phase in
/// which the simulation advances.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Title,
    Playing,
    Paused,
    GameOver,
    Victory,
}

/// Everything that can drive a phase change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Click: start from the title, resume from pause, restart from an end
    /// screen.
    Engage,
    /// Escape key or lost window focus.
    Disengage,
    ClockExpired,
    ExitReached,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseStep {
    Stay,
    Switch(Phase),
    /// Switch to `Playing` and wipe session progress first.
    Restart,
}

/// Pure transition table. Signals that make no sense in the current phase
/// fall through to `Stay`.
pub fn step_phase(phase: Phase, signal: Signal) -> PhaseStep {
    match (phase, signal) {
        (Phase::Title, Signal::Engage) => PhaseStep::Switch(Phase::Playing),
        (Phase::Playing, Signal::Disengage) => PhaseStep::Switch(Phase::Paused),
        (Phase::Playing, Signal::ClockExpired) => PhaseStep::Switch(Phase::GameOver),
        (Phase::Playing, Signal::ExitReached) => PhaseStep::Switch(Phase::Victory),
        (Phase::Paused, Signal::Engage) => PhaseStep::Switch(Phase::Playing),
        (Phase::GameOver, Signal::Engage) | (Phase::Victory, Signal::Engage) => PhaseStep::Restart,
        _ => PhaseStep::Stay,
    }
}
