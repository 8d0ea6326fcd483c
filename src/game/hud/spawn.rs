use bevy::prelude::*;

use crate::board::layout::bit_sites;
use crate::board::phase::Phase;
use crate::constants::{color_from_hex, Colors, TIME_LIMIT_SECS};

use super::types::{
    format_clock, overlay_bg, overlay_screens, HudClockText, HudCorruptionText, Overlay, CLOCK_TOP,
    CORRUPTION_TOP, DETAIL_FONT, HINT_FONT, LABEL_RIGHT, TITLE_FONT, UI_DIM, VALUE_RIGHT,
};

pub(super) fn spawn_hud(mut commands: Commands) {
    let small = TextFont::from_font_size(12.0);
    let medium = TextFont::from_font_size(16.0);

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(LABEL_RIGHT),
            top: Val::Px(CORRUPTION_TOP),
            ..default()
        },
        Text::new("C"),
        medium.clone(),
        TextColor(color_from_hex(UI_DIM).with_alpha(0.9)),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(VALUE_RIGHT),
            top: Val::Px(CORRUPTION_TOP),
            ..default()
        },
        Text::new(format!("0/{}", bit_sites().len())),
        medium.clone(),
        TextColor(color_from_hex(Colors::UI)),
        HudCorruptionText,
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(LABEL_RIGHT),
            top: Val::Px(CLOCK_TOP),
            ..default()
        },
        Text::new("T"),
        small.clone(),
        TextColor(color_from_hex(UI_DIM).with_alpha(0.9)),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            right: Val::Px(VALUE_RIGHT),
            top: Val::Px(CLOCK_TOP),
            ..default()
        },
        Text::new(format_clock(TIME_LIMIT_SECS)),
        medium,
        TextColor(color_from_hex(Colors::UI)),
        HudClockText,
    ));
}

pub(super) fn spawn_overlays(mut commands: Commands) {
    for (phase, copy) in overlay_screens() {
        let visibility = if phase == Phase::Title {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };

        commands
            .spawn((
                Node {
                    position_type: PositionType::Absolute,
                    left: Val::Px(0.0),
                    top: Val::Px(0.0),
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    flex_direction: FlexDirection::Column,
                    justify_content: JustifyContent::Center,
                    align_items: AlignItems::Center,
                    row_gap: Val::Px(12.0),
                    ..default()
                },
                BackgroundColor(overlay_bg()),
                GlobalZIndex(1),
                visibility,
                Overlay(phase),
            ))
            .with_children(|parent| {
                parent.spawn((
                    Text::new(copy.title),
                    TextFont::from_font_size(TITLE_FONT),
                    TextColor(color_from_hex(Colors::UI)),
                ));
                if !copy.detail.is_empty() {
                    parent.spawn((
                        Text::new(copy.detail),
                        TextFont::from_font_size(DETAIL_FONT),
                        TextColor(color_from_hex(UI_DIM)),
                    ));
                }
                parent.spawn((
                    Text::new(copy.hint),
                    TextFont::from_font_size(HINT_FONT),
                    TextColor(color_from_hex(UI_DIM).with_alpha(0.9)),
                ));
            });
    }
}
