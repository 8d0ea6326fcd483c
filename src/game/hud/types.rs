use bevy::prelude::*;

use crate::board::phase::Phase;

pub(super) const CORRUPTION_TOP: f32 = 10.0;
pub(super) const CLOCK_TOP: f32 = 36.0;
pub(super) const LABEL_RIGHT: f32 = 64.0;
pub(super) const VALUE_RIGHT: f32 = 16.0;

pub(super) const TITLE_FONT: f32 = 48.0;
pub(super) const DETAIL_FONT: f32 = 13.0;
pub(super) const HINT_FONT: f32 = 16.0;

pub(super) const UI_DIM: u32 = 0x888888;

#[derive(Component)]
pub(super) struct HudCorruptionText;

#[derive(Component)]
pub(super) struct HudClockText;

/// Full-screen screen shown while the game sits in the matching phase.
#[derive(Component)]
pub(super) struct Overlay(pub(super) Phase);

pub(super) struct OverlayCopy {
    pub(super) title: &'static str,
    pub(super) detail: &'static str,
    pub(super) hint: &'static str,
}

pub(super) fn overlay_screens() -> [(Phase, OverlayCopy); 4] {
    [
        (
            Phase::Title,
            OverlayCopy {
                title: "CIRCUITBREAK",
                detail: "wasd rolls the virus, space hops, esc suspends",
                hint: "click to jack in",
            },
        ),
        (
            Phase::Paused,
            OverlayCopy {
                title: "SUSPENDED",
                detail: "",
                hint: "click to resume",
            },
        ),
        (
            Phase::GameOver,
            OverlayCopy {
                title: "PURGED",
                detail: "the sweep caught you before the exit bus",
                hint: "click to run it back",
            },
        ),
        (
            Phase::Victory,
            OverlayCopy {
                title: "BREACH COMPLETE",
                detail: "payload delivered to the exit bus",
                hint: "click to run it back",
            },
        ),
    ]
}

/// Render remaining seconds as m:ss, rounding partial seconds up so the
/// display only reads 0:00 once the run is actually over.
pub(super) fn format_clock(secs: f32) -> String {
    let whole = secs.max(0.0).ceil() as u32;
    format!("{}:{:02}", whole / 60, whole % 60)
}

pub(super) fn overlay_bg() -> Color {
    Color::srgba(5.0 / 255.0, 5.0 / 255.0, 16.0 / 255.0, 0.82)
}
