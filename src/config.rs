use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Tuning constants for the navigation core.
///
/// Every field has a default, so a config file only needs to name the
/// values it overrides.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Camera/follower movement speed in world units per second.
    pub move_speed: f32,
    /// Follower heading turn rate in degrees per second while strafing.
    pub turn_rate: f32,
    /// Look angle change in degrees per pixel of cursor travel.
    pub mouse_sensitivity: f32,
    /// Field-of-view bounds in degrees; scroll zoom clamps to these.
    pub fov_min: f32,
    pub fov_max: f32,
    /// Pitch is clamped to ±this many degrees.
    pub pitch_limit: f32,
    pub near_plane: f32,
    pub far_plane: f32,
    /// Upper bound on a single frame delta in seconds. Keeps a stalled
    /// frame (window drag, minimize) from teleporting the camera.
    pub max_frame_delta: f32,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            move_speed: 1.0,
            turn_rate: 90.0,
            mouse_sensitivity: 0.05,
            fov_min: 1.0,
            fov_max: 45.0,
            pitch_limit: 89.0,
            near_plane: 0.1,
            far_plane: 100.0,
            max_frame_delta: 0.1,
        }
    }
}

impl NavConfig {
    /// Load overrides from a JSON file on top of the defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        serde_json::from_str(&text)
            .with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}
