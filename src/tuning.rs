//! Physics tuning parameters
//!
//! Defaults reproduce the classic feel. A JSON file may override any subset
//! of fields; missing fields keep their defaults.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::TuningError;

/// Physics and shot parameters shared by every hole
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Ball ===
    pub ball_radius: f32,
    /// Per-frame velocity multiplier, in (0, 1)
    pub friction: f32,
    /// Speed below which the ball comes to rest
    pub stop_epsilon: f32,

    // === Cup ===
    /// Used by holes that do not set their own radius
    pub cup_radius: f32,
    /// Ball must be slower than this to drop in
    pub capture_speed_epsilon: f32,

    // === Shot ===
    /// Launch speed per pixel of drag
    pub power_scale: f32,
    pub max_power: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            ball_radius: BALL_RADIUS,
            friction: FRICTION,
            stop_epsilon: STOP_EPSILON,

            cup_radius: CUP_RADIUS,
            capture_speed_epsilon: CAPTURE_SPEED_EPSILON,

            power_scale: POWER_SCALE,
            max_power: MAX_POWER,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from JSON
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning =
            serde_json::from_str(json).map_err(|e| TuningError::Parse(e.to_string()))?;
        tuning.validate()?;
        log::info!("Loaded tuning: friction={} max_power={}", tuning.friction, tuning.max_power);
        Ok(tuning)
    }

    /// Check every parameter is in range
    pub fn validate(&self) -> Result<(), TuningError> {
        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(TuningError::InvalidFriction(self.friction));
        }

        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("ball_radius", self.ball_radius),
            ("stop_epsilon", self.stop_epsilon),
            ("cup_radius", self.cup_radius),
            ("capture_speed_epsilon", self.capture_speed_epsilon),
            ("power_scale", self.power_scale),
            ("max_power", self.max_power),
        ];
        for (field, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }

        if self.stop_epsilon >= self.max_power {
            return Err(TuningError::StopAboveMaxPower {
                stop_epsilon: self.stop_epsilon,
                max_power: self.max_power,
            });
        }

        Ok(())
    }

    /// Distance a ball launched at `speed` rolls in open field before resting
    pub fn roll_distance(&self, speed: f32) -> f32 {
        if !(self.friction > 0.0 && self.friction < 1.0) || !(self.stop_epsilon > 0.0) {
            return f32::INFINITY;
        }
        let mut speed = speed;
        let mut distance = 0.0;
        while speed >= self.stop_epsilon {
            distance += speed;
            speed *= self.friction;
        }
        distance
    }

    /// Launch speed that rolls roughly `distance` pixels, capped at max power
    ///
    /// Uses the geometric-series limit and ignores the stop cutoff, so the
    /// ball falls short by a few pixels.
    pub fn speed_for_distance(&self, distance: f32) -> f32 {
        (distance * (1.0 - self.friction)).clamp(0.0, self.max_power)
    }
}
