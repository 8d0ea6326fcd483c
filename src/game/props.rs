use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::f32::consts::PI;

use crate::board::layout::{beacon_rest, capacitor_site, resistor_site};
use crate::board::phase::Phase;
use crate::constants::{
    color_from_hex, Colors, BEACON_BOB_AMPLITUDE, BEACON_BOB_RATE, CAPACITOR_RESTITUTION,
    SURFACE_FRICTION,
};

use super::UpdateSet;

pub struct PropsPlugin;

#[derive(Component)]
struct Beacon {
    rest_y: f32,
    phase: f32,
}

impl Plugin for PropsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_capacitor, spawn_resistor, spawn_beacon))
            .add_systems(
                Update,
                bob_beacon
                    .in_set(UpdateSet::Visuals)
                    .run_if(in_state(Phase::Playing)),
            );
    }
}

/// Launch pad. Its restitution wins the combine so the ball always gets the
/// full kick, no matter how dead the ball's own bounce is.
fn spawn_capacitor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = 3.0;
    let height = 5.0;

    commands.spawn((
        RigidBody::Fixed,
        Collider::cylinder(height / 2.0, radius),
        Restitution {
            coefficient: CAPACITOR_RESTITUTION,
            combine_rule: CoefficientCombineRule::Max,
        },
        Friction::coefficient(SURFACE_FRICTION),
        Transform::from_translation(capacitor_site()),
        Mesh3d(meshes.add(Cylinder::new(radius, height))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::CAPACITOR),
            perceptual_roughness: 0.5,
            ..default()
        })),
    ));
}

fn spawn_resistor(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let radius = 1.2;
    let segment = 4.0;
    let (pos, roll) = resistor_site();

    commands.spawn((
        RigidBody::Fixed,
        Collider::capsule_y(segment / 2.0, radius),
        Friction::coefficient(SURFACE_FRICTION),
        Transform::from_translation(pos).with_rotation(Quat::from_rotation_z(roll)),
        Mesh3d(meshes.add(Capsule3d::new(radius, segment))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::RESISTOR),
            perceptual_roughness: 0.7,
            ..default()
        })),
    ));
}

/// Marker cone hanging over the exit zone. No collider, it only bobs.
fn spawn_beacon(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let rest = beacon_rest();

    commands.spawn((
        Transform::from_translation(rest).with_rotation(Quat::from_rotation_x(PI)),
        Mesh3d(meshes.add(Cone {
            radius: 2.0,
            height: 4.0,
        })),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::BEACON),
            emissive: color_from_hex(Colors::BEACON).to_linear() * 1.5,
            ..default()
        })),
        Beacon {
            rest_y: rest.y,
            phase: 0.0,
        },
    ));
}

fn bob_beacon(time: Res<Time>, mut q_beacon: Query<(&mut Beacon, &mut Transform)>) {
    let Ok((mut beacon, mut transform)) = q_beacon.single_mut() else {
        return;
    };

    beacon.phase += time.delta_secs() * BEACON_BOB_RATE;
    transform.translation.y = beacon.rest_y + bob_offset(beacon.phase);
}

fn bob_offset(phase: f32) -> f32 {
    phase.sin() * BEACON_BOB_AMPLITUDE
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn bob_starts_at_the_rest_height() {
        assert_eq!(bob_offset(0.0), 0.0);
    }

    #[test]
    fn bob_peaks_one_amplitude_up() {
        assert!((bob_offset(FRAC_PI_2) - BEACON_BOB_AMPLITUDE).abs() < 1e-6);
    }

    #[test]
    fn bob_dips_one_amplitude_down() {
        assert!((bob_offset(3.0 * FRAC_PI_2) + BEACON_BOB_AMPLITUDE).abs() < 1e-6);
    }

    #[test]
    fn bob_never_leaves_the_amplitude_band() {
        for i in 0..1000 {
            let offset = bob_offset(i as f32 * 0.137);
            assert!(offset.abs() <= BEACON_BOB_AMPLITUDE + 1e-6);
        }
    }
}
