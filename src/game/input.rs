use bevy::prelude::*;

use super::UpdateSet;

pub struct InputPlugin;

/// Key state polled once per render frame; the fixed-tick systems read the
/// latest snapshot.
#[derive(Resource, Default)]
pub(crate) struct InputState {
    pub(crate) forward: bool,
    pub(crate) back: bool,
    pub(crate) left: bool,
    pub(crate) right: bool,
    pub(crate) jump: bool,
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, input_system.in_set(UpdateSet::Input));
    }
}

fn input_system(mut input: ResMut<InputState>, keys: Res<ButtonInput<KeyCode>>) {
    input.forward = keys.pressed(KeyCode::KeyW);
    input.back = keys.pressed(KeyCode::KeyS);
    input.left = keys.pressed(KeyCode::KeyA);
    input.right = keys.pressed(KeyCode::KeyD);
    input.jump = keys.pressed(KeyCode::Space);
}
