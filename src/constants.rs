pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 720;

/// Fixed simulation cadence. The board is stepped at 60 Hz regardless of
/// render rate; the render loop accumulates frame time and catches up.
pub const SIM_DT: f32 = 1.0 / 60.0;
pub const SIM_SUBSTEPS: usize = 1;

/// Upper bound on fixed steps simulated per rendered frame. Anything beyond
/// this (tab hidden, debugger pause) is dropped instead of replayed.
pub const MAX_CATCHUP_TICKS: u32 = 5;

pub const GRAVITY_Y: f32 = -20.0;

pub const BALL_RADIUS: f32 = 2.0;
pub const BALL_MASS: f32 = 2.0;
pub const BALL_DAMPING: f32 = 0.5;
pub const BALL_RESTITUTION: f32 = 0.1;
pub const SURFACE_FRICTION: f32 = 0.7;

/// Horizontal impulse applied along the heading per fixed tick while driving.
pub const DRIVE_IMPULSE: f32 = 10.0;
/// Vertical impulse for a hop. Only applied when nearly vertically at rest.
pub const JUMP_IMPULSE: f32 = 40.0;
pub const JUMP_SPEED_GATE: f32 = 0.001;
/// Heading yaw per fixed tick while a turn key is held, in degrees.
pub const TURN_RATE_DEG: f32 = 3.0;

/// Below this height the ball has left the board and is put back on spawn.
pub const FALL_FLOOR_Y: f32 = -40.0;

pub const TIME_LIMIT_SECS: f32 = 20.0;

pub const BIT_TRIGGER_RADIUS: f32 = 2.0;

pub const CAPACITOR_RESTITUTION: f32 = 3.0;

pub const CAM_BACK: f32 = 30.0;
pub const CAM_UP: f32 = 20.0;
/// The camera aims this far above the ball center.
pub const CAM_VIEW_LIFT: f32 = 6.0;
pub const CAMERA_FOV_DEG: f32 = 45.0;
pub const CAMERA_NEAR: f32 = 0.1;
pub const CAMERA_FAR: f32 = 1000.0;

pub const BEACON_BOB_RATE: f32 = 2.5;
pub const BEACON_BOB_AMPLITUDE: f32 = 1.5;

pub const SUN_LUX: f32 = 12_000.0;
pub const AMBIENT_LUX: f32 = 250.0;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const VOID_BG: u32 = 0x050510;
    pub const DECK: u32 = 0x1b7a3f;
    pub const DECK_CORRUPTED: u32 = 0xffffff;
    pub const SHELF: u32 = 0x263238;
    pub const TRACE: u32 = 0xb87333;
    pub const PLAYER: u32 = 0xd500f9;
    pub const BIT_ZERO: u32 = 0x40c4ff;
    pub const BIT_ONE: u32 = 0x00e676;
    pub const EXIT_PAD: u32 = 0x00e5ff;
    pub const CAPACITOR: u32 = 0x3949ab;
    pub const RESISTOR: u32 = 0x8d6e63;
    pub const BEACON: u32 = 0xffd740;
    pub const UI: u32 = 0x4da6a6;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}
