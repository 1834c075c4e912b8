//! Data-driven movement constants
//!
//! Every gameplay number the kinematics and camera consume lives here so a
//! world can be tuned without touching the algorithms. Round-trips through
//! JSON for external editing.

use serde::{Deserialize, Serialize};
use std::f32::consts::PI;

use crate::DEGREE;

/// Movement and camera tuning for one world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Horizontal traversal speed (world units per tick at full momentum)
    pub x_speed: f32,
    /// Vertical fall/jump speed scale (world units per tick at full momentum)
    pub y_speed: f32,
    /// Horizontal momentum sweep rate (radians per tick)
    pub x_rotation_speed: f32,
    /// Gravity ramp rate (radians per tick)
    pub y_rotation_speed: f32,
    /// Half-width of the unclimbable band around a vertical surface
    /// (radians). Wider means more slopes classified as too steep.
    pub steep_angle: f32,
    /// Fraction of the remaining distance the camera closes per tick
    pub track_factor: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            x_speed: 10.0,
            y_speed: 10.0,
            x_rotation_speed: 6.0 * DEGREE,
            y_rotation_speed: 6.0 * DEGREE,
            steep_angle: PI / 6.0,
            track_factor: 0.1,
        }
    }
}

impl Tuning {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Vertical rotation at or above which a jump request is ignored
    /// (the actor is already substantially into a fall).
    pub fn jump_cutoff(&self) -> f32 {
        PI + 7.0 * self.y_rotation_speed
    }
}
