use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::board::layout::{bridge, deck, end_zone, exit_deck, shelf, Slab};
use crate::constants::{color_from_hex, Colors, BALL_RESTITUTION, SURFACE_FRICTION};

use super::bits::Corruption;
use super::UpdateSet;

pub struct PlatformsPlugin;

/// Marker for the main deck, whose material pales once corruption begins.
#[derive(Component)]
pub(crate) struct Deck;

impl Plugin for PlatformsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_platforms).add_systems(
            Update,
            recolor_deck_system
                .in_set(UpdateSet::Visuals)
                .run_if(resource_changed::<Corruption>),
        );
    }
}

fn spawn_platforms(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let deck_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::DECK),
        perceptual_roughness: 0.9,
        ..default()
    });
    let shelf_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::SHELF),
        perceptual_roughness: 0.8,
        ..default()
    });
    let trace_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::TRACE),
        metallic: 0.6,
        perceptual_roughness: 0.4,
        ..default()
    });

    let deck_id = spawn_slab(&mut commands, &mut meshes, &deck(), deck_material);
    commands.entity(deck_id).insert(Deck);

    spawn_slab(&mut commands, &mut meshes, &shelf(), shelf_material);
    spawn_slab(&mut commands, &mut meshes, &bridge(), trace_material.clone());
    spawn_slab(&mut commands, &mut meshes, &exit_deck(), trace_material);

    // Glowing marker over the exit zone. Purely visual, the win test reads
    // the zone bounds directly.
    let zone = end_zone();
    commands.spawn((
        Transform::from_xyz(zone.center_x, 0.06, zone.center_z),
        Mesh3d(meshes.add(Cuboid::new(
            zone.half_width * 2.0,
            0.1,
            zone.half_depth * 2.0,
        ))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::EXIT_PAD).with_alpha(0.35),
            emissive: color_from_hex(Colors::EXIT_PAD).to_linear() * 0.8,
            alpha_mode: AlphaMode::Blend,
            ..default()
        })),
    ));
}

fn spawn_slab(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    slab: &Slab,
    material: Handle<StandardMaterial>,
) -> Entity {
    let half = slab.half_extents();
    commands
        .spawn((
            RigidBody::Fixed,
            Collider::cuboid(half.x, half.y, half.z),
            Friction::coefficient(SURFACE_FRICTION),
            Restitution::coefficient(BALL_RESTITUTION),
            Transform::from_translation(slab.center),
            Mesh3d(meshes.add(Cuboid::new(slab.size.x, slab.size.y, slab.size.z))),
            MeshMaterial3d(material),
        ))
        .id()
}

fn recolor_deck_system(
    corruption: Res<Corruption>,
    q_deck: Query<&MeshMaterial3d<StandardMaterial>, With<Deck>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let Ok(handle) = q_deck.single() else {
        return;
    };
    let Some(material) = materials.get_mut(&handle.0) else {
        return;
    };

    material.base_color = if corruption.count > 0 {
        color_from_hex(Colors::DECK_CORRUPTED)
    } else {
        color_from_hex(Colors::DECK)
    };
}
