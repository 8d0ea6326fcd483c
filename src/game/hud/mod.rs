mod spawn;
mod systems;
mod types;

use bevy::prelude::*;

use crate::board::phase::Phase;

use super::UpdateSet;

pub struct HudPlugin;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn::spawn_hud, spawn::spawn_overlays))
            .add_systems(
                Update,
                (
                    systems::update_corruption_ui,
                    systems::update_clock_ui,
                    systems::sync_overlay_visibility.run_if(state_changed::<Phase>),
                )
                    .chain()
                    .in_set(UpdateSet::Visuals),
            );
    }
}
