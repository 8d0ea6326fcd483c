use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use bevy_transform_interpolation::prelude::TransformInterpolation;

use crate::board::layout::spawn_point;
use crate::board::phase::Phase;
use crate::board::steering::{drive_impulse, follow_eye, follow_target, jump_ready, yaw_heading};
use crate::config::TuningConfig;
use crate::constants::{
    color_from_hex, Colors, BALL_DAMPING, BALL_MASS, BALL_RADIUS, BALL_RESTITUTION,
    SURFACE_FRICTION,
};

use super::control::SessionReset;
use super::core::MainCamera;
use super::input::InputState;
use super::{FixedSet, UpdateSet};

pub struct PlayerPlugin;

#[derive(Component)]
pub(crate) struct Player;

/// Horizontal facing, unit length. Yawed by the turn keys; impulses and the
/// chase camera both follow it.
#[derive(Component)]
pub(crate) struct Heading(pub(crate) Vec3);

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_player)
            .add_systems(
                FixedUpdate,
                steer_system
                    .in_set(FixedSet::Steer)
                    .run_if(in_state(Phase::Playing)),
            )
            .add_systems(
                FixedUpdate,
                fall_recovery_system
                    .in_set(FixedSet::Recover)
                    .run_if(in_state(Phase::Playing)),
            )
            .add_systems(Update, reset_player_system.in_set(UpdateSet::Reset))
            .add_systems(Update, follow_camera_system.in_set(UpdateSet::Visuals));
    }
}

fn spawn_player(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        // Physics (nested: tuple bundles cap out at 15 elements)
        (
            RigidBody::Dynamic,
            Collider::ball(BALL_RADIUS),
            ColliderMassProperties::Mass(BALL_MASS),
            Restitution::coefficient(BALL_RESTITUTION),
            Friction::coefficient(SURFACE_FRICTION),
            Damping {
                linear_damping: BALL_DAMPING,
                angular_damping: BALL_DAMPING,
            },
            ActiveEvents::COLLISION_EVENTS,
            Ccd::enabled(),
            Velocity::default(),
            ExternalImpulse::default(),
        ),
        // Transform (shared by physics + visual)
        Transform::from_translation(spawn_point()),
        TransformInterpolation,
        // Visual
        Mesh3d(meshes.add(Sphere::new(BALL_RADIUS))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::PLAYER),
            perceptual_roughness: 0.3,
            ..default()
        })),
        // Game state
        Player,
        Heading(Vec3::Z),
    ));
}

fn steer_system(
    input: Res<InputState>,
    config: Res<TuningConfig>,
    mut q_player: Query<(&mut Heading, &mut ExternalImpulse, &Velocity), With<Player>>,
) {
    let Ok((mut heading, mut impulse, velocity)) = q_player.single_mut() else {
        return;
    };

    let turn = config.turn_rate_deg.to_radians();
    if input.left {
        heading.0 = yaw_heading(heading.0, turn);
    }
    if input.right {
        heading.0 = yaw_heading(heading.0, -turn);
    }

    if input.forward {
        impulse.impulse += drive_impulse(heading.0, config.drive_impulse);
    }
    if input.back {
        impulse.impulse -= drive_impulse(heading.0, config.drive_impulse);
    }

    if input.jump && jump_ready(velocity.linvel.y, config.jump_speed_gate) {
        impulse.impulse.y += config.jump_impulse;
    }
}

fn fall_recovery_system(
    config: Res<TuningConfig>,
    mut q_player: Query<
        (&mut Transform, &mut Velocity, &mut ExternalImpulse, &mut Heading),
        With<Player>,
    >,
) {
    let Ok((mut transform, mut velocity, mut impulse, mut heading)) = q_player.single_mut() else {
        return;
    };

    if transform.translation.y < config.fall_floor_y {
        debug!("fell below the board at {:?}", transform.translation);
        respawn(&mut transform, &mut velocity, &mut impulse, &mut heading);
    }
}

fn reset_player_system(
    mut resets: MessageReader<SessionReset>,
    mut q_player: Query<
        (&mut Transform, &mut Velocity, &mut ExternalImpulse, &mut Heading),
        With<Player>,
    >,
) {
    if resets.is_empty() {
        return;
    }
    resets.clear();

    let Ok((mut transform, mut velocity, mut impulse, mut heading)) = q_player.single_mut() else {
        return;
    };
    respawn(&mut transform, &mut velocity, &mut impulse, &mut heading);
}

fn respawn(
    transform: &mut Transform,
    velocity: &mut Velocity,
    impulse: &mut ExternalImpulse,
    heading: &mut Heading,
) {
    transform.translation = spawn_point();
    transform.rotation = Quat::IDENTITY;
    *velocity = Velocity::zero();
    impulse.impulse = Vec3::ZERO;
    impulse.torque_impulse = Vec3::ZERO;
    heading.0 = Vec3::Z;
}

fn follow_camera_system(
    q_player: Query<(&Transform, &Heading), With<Player>>,
    mut q_camera: Query<&mut Transform, (With<MainCamera>, Without<Player>)>,
) {
    let Ok((player_transform, heading)) = q_player.single() else {
        return;
    };
    let Ok(mut camera_transform) = q_camera.single_mut() else {
        return;
    };

    let eye = follow_eye(player_transform.translation, heading.0);
    *camera_transform = Transform::from_translation(eye)
        .looking_at(follow_target(player_transform.translation), Vec3::Y);
}
