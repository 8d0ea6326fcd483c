use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use std::f32::consts::FRAC_PI_2;

use crate::board::layout::{bit_sites, BitKind};
use crate::board::phase::Phase;
use crate::constants::{color_from_hex, Colors, BIT_TRIGGER_RADIUS};

use super::control::SessionReset;
use super::player::Player;
use super::{FixedSet, UpdateSet};

pub struct BitsPlugin;

/// How many bits the virus has flipped this run.
#[derive(Resource, Default)]
pub(crate) struct Corruption {
    pub(crate) count: u32,
}

#[derive(Component)]
pub(crate) struct Bit {
    pub(crate) kind: BitKind,
    /// Guards against duplicate contact reports; a collected bit stays dark
    /// until the session resets.
    pub(crate) collected: bool,
}

impl Plugin for BitsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bits)
            .add_systems(
                FixedUpdate,
                collect_system
                    .in_set(FixedSet::Collect)
                    .run_if(in_state(Phase::Playing)),
            )
            .add_systems(Update, reset_bits_system.in_set(UpdateSet::Reset));
    }
}

fn spawn_bits(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    for site in bit_sites() {
        // Zeros are rings, ones are bars, both standing upright.
        let (mesh, color, rotation) = match site.kind {
            BitKind::Zero => (
                meshes.add(Torus {
                    minor_radius: 0.35,
                    major_radius: 1.0,
                }),
                Colors::BIT_ZERO,
                Quat::from_rotation_x(FRAC_PI_2),
            ),
            BitKind::One => (
                meshes.add(Cuboid::new(0.7, 2.4, 0.7)),
                Colors::BIT_ONE,
                Quat::IDENTITY,
            ),
        };

        commands.spawn((
            Collider::ball(BIT_TRIGGER_RADIUS),
            Sensor,
            ActiveEvents::COLLISION_EVENTS,
            Transform::from_translation(site.pos).with_rotation(rotation),
            Mesh3d(mesh),
            MeshMaterial3d(materials.add(StandardMaterial {
                base_color: color_from_hex(color),
                emissive: color_from_hex(color).to_linear() * 0.6,
                ..default()
            })),
            Bit {
                kind: site.kind,
                collected: false,
            },
        ));
    }
}

fn collect_system(
    mut collision_reader: MessageReader<CollisionEvent>,
    q_player: Query<(), With<Player>>,
    mut q_bits: Query<(&mut Bit, &mut Visibility)>,
    mut corruption: ResMut<Corruption>,
) {
    for event in collision_reader.read() {
        let CollisionEvent::Started(a, b, _) = event else {
            continue;
        };

        let (a_player, b_player) = (q_player.get(*a).is_ok(), q_player.get(*b).is_ok());
        let bit_entity = if a_player && q_bits.contains(*b) {
            *b
        } else if b_player && q_bits.contains(*a) {
            *a
        } else {
            continue;
        };

        let Ok((mut bit, mut visibility)) = q_bits.get_mut(bit_entity) else {
            continue;
        };
        if bit.collected {
            continue;
        }

        bit.collected = true;
        *visibility = Visibility::Hidden;
        corruption.count += 1;
        debug!("bit {:?} corrupted, total {}", bit.kind, corruption.count);
    }
}

fn reset_bits_system(
    mut resets: MessageReader<SessionReset>,
    mut q_bits: Query<(&mut Bit, &mut Visibility)>,
    mut corruption: ResMut<Corruption>,
) {
    if resets.is_empty() {
        return;
    }
    resets.clear();

    for (mut bit, mut visibility) in &mut q_bits {
        bit.collected = false;
        *visibility = Visibility::Visible;
    }
    corruption.count = 0;
}

#[cfg(test)]
mod tests {
    use bevy_rapier3d::rapier::geometry::CollisionEventFlags;

    use super::*;

    fn make_test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.init_resource::<Corruption>();
        app.add_message::<CollisionEvent>();
        app.add_message::<SessionReset>();
        app.add_systems(Update, (collect_system, reset_bits_system).chain());
        app
    }

    fn spawn_test_player(app: &mut App) -> Entity {
        app.world_mut().spawn(Player).id()
    }

    fn spawn_test_bit(app: &mut App, kind: BitKind) -> Entity {
        app.world_mut()
            .spawn((
                Bit {
                    kind,
                    collected: false,
                },
                Visibility::Visible,
            ))
            .id()
    }

    fn touch(app: &mut App, a: Entity, b: Entity) {
        app.world_mut()
            .write_message(CollisionEvent::Started(a, b, CollisionEventFlags::SENSOR));
    }

    fn corruption_of(app: &App) -> u32 {
        app.world().resource::<Corruption>().count
    }

    #[test]
    fn touching_a_bit_corrupts_it() {
        let mut app = make_test_app();
        let player = spawn_test_player(&mut app);
        let bit = spawn_test_bit(&mut app, BitKind::One);

        touch(&mut app, player, bit);
        app.update();

        assert_eq!(corruption_of(&app), 1);
        assert!(app.world().get::<Bit>(bit).unwrap().collected);
        assert_eq!(
            *app.world().get::<Visibility>(bit).unwrap(),
            Visibility::Hidden
        );
    }

    #[test]
    fn entity_order_in_the_contact_pair_does_not_matter() {
        let mut app = make_test_app();
        let player = spawn_test_player(&mut app);
        let bit = spawn_test_bit(&mut app, BitKind::Zero);

        touch(&mut app, bit, player);
        app.update();

        assert_eq!(corruption_of(&app), 1);
    }

    #[test]
    fn duplicate_contacts_in_one_tick_count_once() {
        let mut app = make_test_app();
        let player = spawn_test_player(&mut app);
        let bit = spawn_test_bit(&mut app, BitKind::One);

        touch(&mut app, player, bit);
        touch(&mut app, player, bit);
        app.update();

        assert_eq!(corruption_of(&app), 1);
    }

    #[test]
    fn re_entering_a_collected_bit_does_not_recount() {
        let mut app = make_test_app();
        let player = spawn_test_player(&mut app);
        let bit = spawn_test_bit(&mut app, BitKind::One);

        touch(&mut app, player, bit);
        app.update();
        touch(&mut app, player, bit);
        app.update();

        assert_eq!(corruption_of(&app), 1);
    }

    #[test]
    fn contacts_not_involving_the_player_are_ignored() {
        let mut app = make_test_app();
        let bit_a = spawn_test_bit(&mut app, BitKind::Zero);
        let bit_b = spawn_test_bit(&mut app, BitKind::One);

        touch(&mut app, bit_a, bit_b);
        app.update();

        assert_eq!(corruption_of(&app), 0);
        assert!(!app.world().get::<Bit>(bit_a).unwrap().collected);
    }

    #[test]
    fn counter_tracks_the_number_of_collected_bits() {
        let mut app = make_test_app();
        let player = spawn_test_player(&mut app);
        let bits: Vec<Entity> = (0..5)
            .map(|i| {
                let kind = if i % 2 == 0 {
                    BitKind::Zero
                } else {
                    BitKind::One
                };
                spawn_test_bit(&mut app, kind)
            })
            .collect();

        for bit in bits.iter().take(3) {
            touch(&mut app, player, *bit);
        }
        app.update();

        assert_eq!(corruption_of(&app), 3);
        let collected = bits
            .iter()
            .filter(|b| app.world().get::<Bit>(**b).unwrap().collected)
            .count();
        assert_eq!(collected as u32, corruption_of(&app));
    }

    #[test]
    fn corrupting_every_bit_reaches_the_full_count() {
        let mut app = make_test_app();
        let player = spawn_test_player(&mut app);
        let bits: Vec<Entity> = bit_sites()
            .iter()
            .map(|site| spawn_test_bit(&mut app, site.kind))
            .collect();

        for bit in &bits {
            touch(&mut app, player, *bit);
        }
        app.update();

        assert_eq!(corruption_of(&app), bit_sites().len() as u32);
    }

    #[test]
    fn session_reset_revives_every_bit_and_zeroes_the_counter() {
        let mut app = make_test_app();
        let player = spawn_test_player(&mut app);
        let bit = spawn_test_bit(&mut app, BitKind::One);

        touch(&mut app, player, bit);
        app.update();
        assert_eq!(corruption_of(&app), 1);

        app.world_mut().write_message(SessionReset);
        app.update();

        assert_eq!(corruption_of(&app), 0);
        assert!(!app.world().get::<Bit>(bit).unwrap().collected);
        assert_eq!(
            *app.world().get::<Visibility>(bit).unwrap(),
            Visibility::Visible
        );
    }

    #[test]
    fn a_revived_bit_can_be_corrupted_again() {
        let mut app = make_test_app();
        let player = spawn_test_player(&mut app);
        let bit = spawn_test_bit(&mut app, BitKind::Zero);

        touch(&mut app, player, bit);
        app.update();
        app.world_mut().write_message(SessionReset);
        app.update();

        touch(&mut app, player, bit);
        app.update();

        assert_eq!(corruption_of(&app), 1);
        assert!(app.world().get::<Bit>(bit).unwrap().collected);
    }
}
