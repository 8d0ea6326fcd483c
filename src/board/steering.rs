use bevy::prelude::{Quat, Vec3};

use crate::constants::{CAM_BACK, CAM_UP, CAM_VIEW_LIFT};

/// Yaw the heading about the world Y axis. Positive angle turns left when
/// viewed from behind the ball.
pub fn yaw_heading(heading: Vec3, radians: f32) -> Vec3 {
    (Quat::from_rotation_y(radians) * heading).normalize()
}

/// Drive impulse along the heading. The vertical component is dropped so
/// driving never lifts the ball.
pub fn drive_impulse(heading: Vec3, magnitude: f32) -> Vec3 {
    Vec3::new(heading.x, 0.0, heading.z) * magnitude
}

/// A hop is only allowed while the ball is not already moving vertically,
/// which keeps hops from stacking mid-air.
pub fn jump_ready(vertical_speed: f32, gate: f32) -> bool {
    vertical_speed.abs() <= gate
}

/// Chase-camera eye: behind the ball along the heading, raised above it.
pub fn follow_eye(ball: Vec3, heading: Vec3) -> Vec3 {
    let dir = heading.normalize_or_zero();
    Vec3::new(ball.x - dir.x * CAM_BACK, ball.y + CAM_UP, ball.z - dir.z * CAM_BACK)
}

/// Point the camera aims at.
pub fn follow_target(ball: Vec3) -> Vec3 {
    ball + Vec3::new(0.0, CAM_VIEW_LIFT, 0.0)
}
