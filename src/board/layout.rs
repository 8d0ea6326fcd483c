use bevy::prelude::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::constants::BALL_RADIUS;

/// Axis-aligned box, full sizes.
#[derive(Clone, Copy, Debug)]
pub struct Slab {
    pub center: Vec3,
    pub size: Vec3,
}

impl Slab {
    pub fn half_extents(&self) -> Vec3 {
        self.size * 0.5
    }

    pub fn top_y(&self) -> f32 {
        self.center.y + self.size.y * 0.5
    }

    pub fn contains_xz(&self, pos: Vec3) -> bool {
        let half = self.half_extents();
        (pos.x - self.center.x).abs() <= half.x && (pos.z - self.center.z).abs() <= half.z
    }
}

/// Goal rectangle on the exit deck, tested in the ground plane only.
#[derive(Clone, Copy, Debug)]
pub struct EndZone {
    pub center_x: f32,
    pub center_z: f32,
    pub half_width: f32,
    pub half_depth: f32,
}

impl EndZone {
    /// Height is deliberately ignored so an airborne ball still counts.
    pub fn contains(&self, pos: Vec3) -> bool {
        (pos.x - self.center_x).abs() <= self.half_width
            && (pos.z - self.center_z).abs() <= self.half_depth
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BitKind {
    Zero,
    One,
}

#[derive(Clone, Copy, Debug)]
pub struct BitSite {
    pub kind: BitKind,
    pub pos: Vec3,
}

/// Main deck the ball spawns over. Top face at y = 0.
pub fn deck() -> Slab {
    Slab {
        center: Vec3::new(0.0, -0.5, 0.0),
        size: Vec3::new(60.0, 1.0, 60.0),
    }
}

/// Raised block carrying the zero-bit row. Top face at y = 8.
pub fn shelf() -> Slab {
    Slab {
        center: Vec3::new(32.5, 4.0, 10.0),
        size: Vec3::new(21.0, 8.0, 16.0),
    }
}

/// Narrow trace connecting the main deck to the exit deck.
pub fn bridge() -> Slab {
    Slab {
        center: Vec3::new(0.0, -0.5, 55.0),
        size: Vec3::new(12.0, 1.0, 50.0),
    }
}

/// Far deck holding the end zone.
pub fn exit_deck() -> Slab {
    Slab {
        center: Vec3::new(0.0, -0.5, 95.0),
        size: Vec3::new(40.0, 1.0, 30.0),
    }
}

pub fn slabs() -> [Slab; 4] {
    [deck(), shelf(), bridge(), exit_deck()]
}

pub fn end_zone() -> EndZone {
    EndZone {
        center_x: 0.0,
        center_z: 100.0,
        half_width: 10.0,
        half_depth: 6.0,
    }
}

pub fn spawn_point() -> Vec3 {
    Vec3::new(0.0, 10.0, 0.0)
}

/// Rest position of the beacon hovering over the end zone.
pub fn beacon_rest() -> Vec3 {
    Vec3::new(0.0, 10.0, 100.0)
}

pub fn bit_sites() -> [BitSite; 8] {
    let zero_row = [40.0, 35.0, 30.0, 25.0];
    let one_row = [20.0, 15.0, 10.0, 5.0];

    let mut sites = [BitSite {
        kind: BitKind::Zero,
        pos: Vec3::ZERO,
    }; 8];

    for (i, x) in zero_row.into_iter().enumerate() {
        sites[i] = BitSite {
            kind: BitKind::Zero,
            pos: Vec3::new(x, 10.0, 10.0),
        };
    }
    for (i, x) in one_row.into_iter().enumerate() {
        sites[4 + i] = BitSite {
            kind: BitKind::One,
            pos: Vec3::new(x, 2.0, 10.0),
        };
    }

    sites
}

pub fn capacitor_site() -> Vec3 {
    Vec3::new(-15.0, 2.5, 0.0)
}

/// Position plus roll; the resistor lies on its side across the deck.
pub fn resistor_site() -> (Vec3, f32) {
    (Vec3::new(15.0, 1.2, 0.0), FRAC_PI_2)
}
