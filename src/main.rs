mod board;
mod config;
mod constants;
mod game;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};
use bevy_rapier3d::prelude::*;

use config::TuningConfig;
use constants::{WINDOW_HEIGHT, WINDOW_WIDTH};
use game::{
    BitsPlugin, ClockPlugin, ControlPlugin, CorePlugin, HudPlugin, InputPlugin, PlatformsPlugin,
    PlayerPlugin, PropsPlugin,
};

fn main() {
    let config = TuningConfig::from_env();
    if let Err(e) = config.validate() {
        eprintln!("Invalid tuning configuration: {}", e);
        std::process::exit(1);
    }
    let debug_render = config.debug_render;

    let mut app = App::new();
    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "circuitbreak".to_string(),
            resolution: WindowResolution::new(WINDOW_WIDTH, WINDOW_HEIGHT),
            present_mode: PresentMode::AutoVsync,
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(RapierPhysicsPlugin::<NoUserData>::default().in_fixed_schedule())
    .add_plugins(CorePlugin { config })
    .add_plugins(PlatformsPlugin)
    .add_plugins(PropsPlugin)
    .add_plugins(PlayerPlugin)
    .add_plugins(BitsPlugin)
    .add_plugins(InputPlugin)
    .add_plugins(ControlPlugin)
    .add_plugins(ClockPlugin)
    .add_plugins(HudPlugin);

    if debug_render {
        app.add_plugins(RapierDebugRenderPlugin::default());
    }

    app.run();
}
