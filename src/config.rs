use bevy::prelude::Resource;

use crate::constants::{
    DRIVE_IMPULSE, FALL_FLOOR_Y, GRAVITY_Y, JUMP_IMPULSE, JUMP_SPEED_GATE, MAX_CATCHUP_TICKS,
    SIM_DT, TIME_LIMIT_SECS, TURN_RATE_DEG,
};

/// Run tuning. Defaults mirror the shipped board; a couple of knobs can be
/// overridden from the environment for play testing.
#[derive(Debug, Clone, Resource, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TuningConfig {
    pub gravity_y: f32,
    pub sim_dt: f32,
    pub max_catchup_ticks: u32,
    pub drive_impulse: f32,
    pub jump_impulse: f32,
    /// A hop is allowed only while |vertical speed| is at or below this.
    pub jump_speed_gate: f32,
    pub turn_rate_deg: f32,
    pub fall_floor_y: f32,
    pub time_limit_secs: f32,
    pub debug_render: bool,
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            gravity_y: GRAVITY_Y,
            sim_dt: SIM_DT,
            max_catchup_ticks: MAX_CATCHUP_TICKS,
            drive_impulse: DRIVE_IMPULSE,
            jump_impulse: JUMP_IMPULSE,
            jump_speed_gate: JUMP_SPEED_GATE,
            turn_rate_deg: TURN_RATE_DEG,
            fall_floor_y: FALL_FLOOR_Y,
            time_limit_secs: TIME_LIMIT_SECS,
            debug_render: false,
        }
    }
}

impl TuningConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_env_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Env overrides, injectable for tests. Unparseable values are ignored.
    pub fn apply_env_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(secs) = lookup("CIRCUITBREAK_TIME_LIMIT").and_then(|v| v.parse::<f32>().ok()) {
            self.time_limit_secs = secs;
        }
        if let Some(flag) = lookup("CIRCUITBREAK_DEBUG_RENDER") {
            self.debug_render = matches!(flag.as_str(), "1" | "true" | "on");
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        if !self.gravity_y.is_finite() || self.gravity_y >= 0.0 {
            return Err("gravity_y must be finite and < 0".to_string());
        }
        if !self.sim_dt.is_finite() || self.sim_dt <= 0.0 {
            return Err("sim_dt must be finite and > 0".to_string());
        }
        if self.max_catchup_ticks == 0 {
            return Err("max_catchup_ticks must be >= 1".to_string());
        }
        if !self.drive_impulse.is_finite() || self.drive_impulse <= 0.0 {
            return Err("drive_impulse must be finite and > 0".to_string());
        }
        if !self.jump_impulse.is_finite() || self.jump_impulse <= 0.0 {
            return Err("jump_impulse must be finite and > 0".to_string());
        }
        if !self.jump_speed_gate.is_finite() || self.jump_speed_gate < 0.0 {
            return Err("jump_speed_gate must be finite and >= 0".to_string());
        }
        if !self.turn_rate_deg.is_finite() || self.turn_rate_deg <= 0.0 {
            return Err("turn_rate_deg must be finite and > 0".to_string());
        }
        if !self.fall_floor_y.is_finite() || self.fall_floor_y >= 0.0 {
            return Err("fall_floor_y must be finite and < 0".to_string());
        }
        if !self.time_limit_secs.is_finite() || self.time_limit_secs <= 0.0 {
            return Err("time_limit_secs must be finite and > 0".to_string());
        }
        Ok(())
    }
}
