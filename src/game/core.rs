use bevy::prelude::*;
use bevy::time::Virtual;
use bevy_rapier3d::prelude::{PhysicsSet, RapierConfiguration, TimestepMode};
use bevy_transform_interpolation::prelude::TransformInterpolationPlugin;
use std::time::Duration;

use crate::board::phase::Phase;
use crate::config::TuningConfig;
use crate::constants::{
    color_from_hex, Colors, AMBIENT_LUX, CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, SIM_SUBSTEPS,
    SUN_LUX,
};

use super::bits::Corruption;
use super::clock::RunClock;
use super::control::{LevelProgress, PhaseSignal, SessionReset};
use super::input::InputState;

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Control,
    Reset,
    Visuals,
}

/// Fixed-tick stages. `Simulate` runs before the physics step; the rest run
/// after writeback, in gameplay order.
#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum FixedSet {
    Simulate,
    Collect,
    Steer,
    Recover,
    Win,
}

pub struct CorePlugin {
    pub config: TuningConfig,
}

#[derive(Component)]
pub(crate) struct MainCamera;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .init_state::<Phase>()
            .init_resource::<InputState>()
            .init_resource::<Corruption>()
            .init_resource::<RunClock>()
            .init_resource::<LevelProgress>()
            .add_message::<PhaseSignal>()
            .add_message::<SessionReset>()
            .add_plugins(TransformInterpolationPlugin::default())
            .insert_resource(ClearColor(color_from_hex(Colors::VOID_BG)))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: AMBIENT_LUX,
                ..default()
            })
            .insert_resource(Time::<Fixed>::from_seconds(self.config.sim_dt as f64))
            .insert_resource(TimestepMode::Fixed {
                dt: self.config.sim_dt,
                substeps: SIM_SUBSTEPS,
            })
            .configure_sets(
                Update,
                (
                    UpdateSet::Input,
                    UpdateSet::Control,
                    UpdateSet::Reset,
                    UpdateSet::Visuals,
                )
                    .chain(),
            )
            .configure_sets(
                FixedUpdate,
                FixedSet::Simulate.before(PhysicsSet::SyncBackend),
            )
            .configure_sets(
                FixedUpdate,
                (
                    FixedSet::Collect,
                    FixedSet::Steer,
                    FixedSet::Recover,
                    FixedSet::Win,
                )
                    .chain()
                    .after(PhysicsSet::Writeback),
            )
            .add_systems(
                Startup,
                (
                    setup_camera,
                    setup_lights,
                    log_config,
                    configure_virtual_time_catchup_cap,
                    configure_rapier,
                )
                    .chain(),
            );
    }
}

fn setup_camera(mut commands: Commands) {
    // WebGL2 MSAA is expensive and often falls back to the CPU.
    #[cfg(target_arch = "wasm32")]
    let msaa = Msaa::Off;
    #[cfg(not(target_arch = "wasm32"))]
    let msaa = Msaa::Sample4;

    commands.spawn((
        Camera3d::default(),
        msaa,
        Projection::Perspective(PerspectiveProjection {
            fov: CAMERA_FOV_DEG.to_radians(),
            near: CAMERA_NEAR,
            far: CAMERA_FAR,
            ..default()
        }),
        Transform::from_xyz(0.0, 20.0, -30.0).looking_at(Vec3::new(0.0, 10.0, 0.0), Vec3::Y),
        MainCamera,
    ));
}

fn setup_lights(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: SUN_LUX,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_xyz(30.0, 60.0, -20.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}

fn log_config(config: Res<TuningConfig>) {
    if let Ok(json) = serde_json::to_string(&*config) {
        info!("tuning config {json}");
    }
}

fn configure_rapier(config: Res<TuningConfig>, mut q_config: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q_config {
        cfg.gravity = Vec3::new(0.0, config.gravity_y, 0.0);
        // The simulation is held until the player engages.
        cfg.physics_pipeline_active = false;
    }
}

fn configure_virtual_time_catchup_cap(
    config: Res<TuningConfig>,
    mut virtual_time: ResMut<Time<Virtual>>,
) {
    // A long stall (hidden tab, debugger) must not be replayed step by step.
    // Capping virtual delta caps how many fixed ticks one frame can run.
    let max_delta =
        Duration::from_secs_f64(config.sim_dt as f64 * config.max_catchup_ticks as f64);
    virtual_time.set_max_delta(max_delta);
}
